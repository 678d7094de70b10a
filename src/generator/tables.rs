use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{DrillError, Result};
use crate::generator::{MAX_TABLE_SPAN, check_question_count};
use crate::question::Question;

/// Multiplicands every table is drilled against.
pub const MULTIPLICANDS: std::ops::RangeInclusive<u32> = 1..=12;

/// Expands table tokens such as `"3"` or `"4-6"` into multipliers, in order.
///
/// Ranges are inclusive. A range written high-to-low (`"6-4"`) is walked
/// downward. Duplicates are kept. A range may hold at most
/// [`MAX_TABLE_SPAN`] tables.
pub fn expand_tables<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u32>> {
    let mut tables = Vec::new();
    for token in tokens {
        let token = token.as_ref().trim();
        match token.split_once('-') {
            Some((lo, hi)) => {
                let lo = parse_table(lo, token)?;
                let hi = parse_table(hi, token)?;
                if lo.abs_diff(hi) >= MAX_TABLE_SPAN {
                    return Err(DrillError::invalid(format!(
                        "table range '{token}' spans more than {MAX_TABLE_SPAN} tables"
                    )));
                }
                if lo <= hi {
                    tables.extend(lo..=hi);
                } else {
                    tables.extend((hi..=lo).rev());
                }
            }
            None => tables.push(parse_table(token, token)?),
        }
    }
    Ok(tables)
}

fn parse_table(field: &str, token: &str) -> Result<u32> {
    field
        .trim()
        .parse()
        .map_err(|_| DrillError::invalid(format!("bad table token '{token}'")))
}

/// Crosses every multiplier with [`MULTIPLICANDS`], optionally shuffled.
pub fn times_table_questions<R: Rng + ?Sized>(
    tables: &[u32],
    shuffle: bool,
    rng: &mut R,
) -> Result<Vec<Question>> {
    if tables.is_empty() {
        return Err(DrillError::invalid("at least one table is required"));
    }
    check_question_count(tables.len().saturating_mul(MULTIPLICANDS.count()))?;
    let mut questions: Vec<Question> = tables
        .iter()
        .flat_map(|&multiplier| {
            MULTIPLICANDS.map(move |multiplicand| Question::TimesTable {
                multiplier,
                multiplicand,
            })
        })
        .collect();
    if shuffle {
        questions.shuffle(rng);
    }
    Ok(questions)
}
