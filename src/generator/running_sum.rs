use rand::Rng;
use tracing::warn;

use crate::error::{DrillError, Result};
use crate::generator::{MAX_RUNNING_SUM_BOUND, check_operand_count, check_question_count};
use crate::question::Question;

/// Rejection draws per operand before sampling the accepted range directly.
///
/// Each draw is accepted with probability `max / (max + sum) > 1/2`, so the
/// chance of reaching this cap is below `2^-MAX_DRAWS`.
const MAX_DRAWS: usize = 32;

/// Generates `num_operands` signed operands whose running total stays in
/// `[0, max_operand)` after every step. Returns the operands and final total.
pub fn generate_running_sum<R: Rng + ?Sized>(
    num_operands: i64,
    max_operand: i64,
    rng: &mut R,
) -> Result<(Vec<i64>, i64)> {
    check_operand_count(num_operands)?;
    if max_operand <= 0 || max_operand > MAX_RUNNING_SUM_BOUND {
        return Err(DrillError::invalid(format!(
            "operand bound must be in 1..={MAX_RUNNING_SUM_BOUND}, got {max_operand}"
        )));
    }

    let mut sum = 0i64;
    let mut operands = Vec::with_capacity(num_operands as usize);
    for _ in 0..num_operands {
        let operand = next_operand(sum, max_operand, rng);
        sum += operand;
        operands.push(operand);
    }
    Ok((operands, sum))
}

// Requires `0 <= sum < max`. The draw range `[-sum, max - 1]` always holds
// the accepted range `[-sum, max - 1 - sum]`, which is non-empty.
fn next_operand<R: Rng + ?Sized>(sum: i64, max: i64, rng: &mut R) -> i64 {
    for _ in 0..MAX_DRAWS {
        let candidate = rng.gen_range(-sum..=max - 1);
        let total = sum + candidate;
        if (0..max).contains(&total) {
            return candidate;
        }
    }
    warn!(sum, max, "running sum sampler hit its draw cap");
    rng.gen_range(-sum..=max - 1 - sum)
}

/// Builds `num_questions` running-sum questions.
pub fn running_sum_questions<R: Rng + ?Sized>(
    num_questions: usize,
    num_operands: i64,
    max_operand: i64,
    rng: &mut R,
) -> Result<Vec<Question>> {
    check_question_count(num_questions)?;
    (0..num_questions)
        .map(|_| {
            generate_running_sum(num_operands, max_operand, rng)
                .map(|(operands, result)| Question::RunningSum { operands, result })
        })
        .collect()
}
