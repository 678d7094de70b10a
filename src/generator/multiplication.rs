use rand::Rng;

use crate::error::{DrillError, Result};
use crate::generator::{
    DEFAULT_MAX_VALUE, MAX_OPERANDS, check_operand_count, check_question_count,
};
use crate::question::Question;

/// Inclusive operand range for an exclusive upper bound `max`.
///
/// The floor grows with the bound's magnitude so large bounds do not produce
/// trivial single-digit operands: 100 gives `[10, 99]`, 1000 gives `[20, 999]`.
pub fn operand_range(max: u32) -> Result<(u32, u32)> {
    let magnitude = max.checked_ilog10().unwrap_or(0);
    let min = (magnitude.saturating_sub(1) * 10).max(2);
    if max <= min {
        return Err(DrillError::invalid(format!(
            "operand bound {max} leaves no values at or above {min}"
        )));
    }
    Ok((min, max - 1))
}

/// Generates multiplication questions with one bound per operand position.
///
/// Missing or zero bounds use [`DEFAULT_MAX_VALUE`]. Every
/// `num_questions / num_operands` questions the bounds rotate left by one, so
/// each bound visits each position over a session.
pub fn generate_mult_questions<R: Rng + ?Sized>(
    max_vals: &[Option<u32>],
    num_questions: usize,
    num_operands: usize,
    rng: &mut R,
) -> Result<Vec<Question>> {
    check_question_count(num_questions)?;
    check_operand_count(i64::try_from(num_operands).unwrap_or(i64::MAX))?;
    if max_vals.len() > MAX_OPERANDS {
        return Err(DrillError::invalid(format!(
            "at most {MAX_OPERANDS} operand bounds are allowed, got {}",
            max_vals.len()
        )));
    }

    let mut bounds: Vec<u32> = max_vals
        .iter()
        .map(|v| v.filter(|&v| v != 0).unwrap_or(DEFAULT_MAX_VALUE))
        .collect();
    if bounds.len() < num_operands {
        bounds.resize(num_operands, DEFAULT_MAX_VALUE);
    }
    for &bound in &bounds {
        operand_range(bound)?;
    }
    check_product_fits(&bounds, num_operands)?;

    let period = num_questions / num_operands;
    let mut questions = Vec::with_capacity(num_questions);
    for i in 0..num_questions {
        let mut operands = Vec::with_capacity(num_operands);
        for &bound in &bounds[..num_operands] {
            let (lo, hi) = operand_range(bound)?;
            operands.push(rng.gen_range(lo..=hi));
        }
        let result = checked_product(&operands).ok_or_else(|| {
            DrillError::invalid(format!("product of {operands:?} does not fit in 64 bits"))
        })?;
        questions.push(Question::Multiplication { operands, result });

        if period > 0 && (i + 1) % period == 0 {
            bounds.rotate_left(1);
        }
    }
    Ok(questions)
}

fn checked_product(operands: &[u32]) -> Option<u64> {
    operands
        .iter()
        .try_fold(1u64, |acc, &op| acc.checked_mul(u64::from(op)))
}

// Rotation can put any `num_operands` of the bounds side by side, so the
// largest ones together must still give a representable product.
fn check_product_fits(bounds: &[u32], num_operands: usize) -> Result<()> {
    let mut largest: Vec<u32> = bounds.iter().map(|&b| b - 1).collect();
    largest.sort_unstable_by(|a, b| b.cmp(a));
    largest.truncate(num_operands);
    match checked_product(&largest) {
        Some(_) => Ok(()),
        None => Err(DrillError::invalid(format!(
            "operand bounds {bounds:?} can give a product beyond 64 bits"
        ))),
    }
}
