use rand::Rng;

use crate::error::{DrillError, Result};
use crate::generator::check_question_count;
use crate::question::Question;

pub const MIN_DIVISOR: u32 = 2;
pub const MAX_DIVISOR: u32 = 9;

/// Generates division questions with a dividend in `[min_val, max_val)` and a
/// single-digit divisor.
pub fn generate_div_questions<R: Rng + ?Sized>(
    max_val: u32,
    min_val: u32,
    num_questions: usize,
    rng: &mut R,
) -> Result<Vec<Question>> {
    check_question_count(num_questions)?;
    if max_val <= min_val {
        return Err(DrillError::invalid(format!(
            "max value {max_val} must be greater than min value {min_val}"
        )));
    }

    Ok((0..num_questions)
        .map(|_| {
            let dividend = rng.gen_range(min_val..max_val);
            let divisor = rng.gen_range(MIN_DIVISOR..=MAX_DIVISOR);
            Question::Division {
                dividend,
                divisor,
                quotient: dividend / divisor,
                remainder: dividend % divisor,
            }
        })
        .collect())
}
