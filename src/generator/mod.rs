pub mod division;
pub mod multiplication;
pub mod running_sum;
pub mod tables;

use crate::error::{DrillError, Result};

/// Bound used for any multiplication operand position without its own.
pub const DEFAULT_MAX_VALUE: u32 = 10;

/// Largest session a single run will generate.
pub const MAX_QUESTIONS: usize = 10_000;
/// Most operands allowed in one question.
pub const MAX_OPERANDS: usize = 100;
/// Most multipliers a single `a-b` table token may expand to.
pub const MAX_TABLE_SPAN: u32 = 1_000;
/// Largest bound on a running total.
pub const MAX_RUNNING_SUM_BOUND: i64 = 1_000_000_000;

pub(crate) fn check_question_count(num_questions: usize) -> Result<()> {
    if num_questions == 0 {
        return Err(DrillError::invalid("number of questions must be positive"));
    }
    if num_questions > MAX_QUESTIONS {
        return Err(DrillError::invalid(format!(
            "number of questions must be at most {MAX_QUESTIONS}, got {num_questions}"
        )));
    }
    Ok(())
}

pub(crate) fn check_operand_count(num_operands: i64) -> Result<()> {
    if num_operands <= 0 {
        return Err(DrillError::invalid(format!(
            "number of operands must be positive, got {num_operands}"
        )));
    }
    if num_operands > MAX_OPERANDS as i64 {
        return Err(DrillError::invalid(format!(
            "number of operands must be at most {MAX_OPERANDS}, got {num_operands}"
        )));
    }
    Ok(())
}
