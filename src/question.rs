use std::fmt;

use crate::session::answer::{Answer, AnswerShape};

/// A single drill question. Built once by a generator and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Question {
    RunningSum {
        operands: Vec<i64>,
        result: i64,
    },
    TimesTable {
        multiplier: u32,
        multiplicand: u32,
    },
    Multiplication {
        operands: Vec<u32>,
        result: u64,
    },
    Division {
        dividend: u32,
        divisor: u32,
        quotient: u32,
        remainder: u32,
    },
}

impl Question {
    /// Text shown before the cursor when asking this question.
    pub fn prompt(&self) -> String {
        match self {
            Question::RunningSum { operands, .. } => render_operands(operands),
            Question::TimesTable {
                multiplier,
                multiplicand,
            } => format!("{multiplier:>2} x {multiplicand:>2} = "),
            Question::Multiplication { operands, .. } => {
                let terms: Vec<String> = operands.iter().map(|op| op.to_string()).collect();
                format!("{} = ", terms.join(" x "))
            }
            Question::Division {
                dividend, divisor, ..
            } => format!("{dividend} / {divisor} = "),
        }
    }

    pub fn answer_shape(&self) -> AnswerShape {
        match self {
            Question::Division { .. } => AnswerShape::QuotientRemainder,
            _ => AnswerShape::Single,
        }
    }

    /// Whether `answer` is correct. `None` (unparseable input) never is.
    pub fn is_correct(&self, answer: Option<&Answer>) -> bool {
        let Some(answer) = answer else {
            return false;
        };
        match (self, answer) {
            (Question::RunningSum { result, .. }, Answer::Single(value)) => {
                u64::try_from(*result).is_ok_and(|expected| expected == *value)
            }
            (
                Question::TimesTable {
                    multiplier,
                    multiplicand,
                },
                Answer::Single(value),
            ) => u64::from(*multiplier) * u64::from(*multiplicand) == *value,
            (Question::Multiplication { result, .. }, Answer::Single(value)) => result == value,
            (
                Question::Division {
                    quotient,
                    remainder,
                    ..
                },
                Answer::QuotientRemainder(q, r),
            ) => u64::from(*quotient) == *q && u64::from(*remainder) == r.unwrap_or(0),
            _ => false,
        }
    }

    /// The expected answer as the user would type it.
    pub fn expected(&self) -> String {
        match self {
            Question::RunningSum { result, .. } => result.to_string(),
            Question::TimesTable {
                multiplier,
                multiplicand,
            } => (u64::from(*multiplier) * u64::from(*multiplicand)).to_string(),
            Question::Multiplication { result, .. } => result.to_string(),
            Question::Division {
                quotient,
                remainder,
                ..
            } => format!("{quotient} {remainder}"),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prompt(), self.expected())
    }
}

/// Renders running-sum operands as an equation prefix, e.g. `" 3 -  5 +  2 = "`.
///
/// The first operand keeps its sign in a width-2 field; later operands are
/// written as `+ NN` or `- NN` with the absolute value in a width-2 field.
pub fn render_operands(operands: &[i64]) -> String {
    let mut out = String::new();
    for (i, &op) in operands.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!("{op:>2}"));
        } else if op >= 0 {
            out.push_str(&format!(" + {op:>2}"));
        } else {
            out.push_str(&format!(" - {:>2}", op.unsigned_abs()));
        }
    }
    out.push_str(" = ");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mixed_signs() {
        assert_eq!(render_operands(&[3, -5, 2]), " 3 -  5 +  2 = ");
    }

    #[test]
    fn test_render_two_digit_operands_fill_field() {
        assert_eq!(render_operands(&[42, 17, -30]), "42 + 17 - 30 = ");
    }

    #[test]
    fn test_render_single_operand() {
        assert_eq!(render_operands(&[7]), " 7 = ");
    }

    #[test]
    fn test_render_is_pure() {
        let ops = [12, -4, 9, -1];
        assert_eq!(render_operands(&ops), render_operands(&ops));
    }

    #[test]
    fn test_running_sum_checks_single_answer() {
        let q = Question::RunningSum {
            operands: vec![3, -1],
            result: 2,
        };
        assert!(q.is_correct(Some(&Answer::Single(2))));
        assert!(!q.is_correct(Some(&Answer::Single(3))));
        assert!(!q.is_correct(None));
    }

    #[test]
    fn test_division_remainder_defaults_to_zero() {
        let exact = Question::Division {
            dividend: 18,
            divisor: 6,
            quotient: 3,
            remainder: 0,
        };
        assert!(exact.is_correct(Some(&Answer::QuotientRemainder(3, None))));

        let inexact = Question::Division {
            dividend: 19,
            divisor: 6,
            quotient: 3,
            remainder: 1,
        };
        assert!(!inexact.is_correct(Some(&Answer::QuotientRemainder(3, None))));
        assert!(inexact.is_correct(Some(&Answer::QuotientRemainder(3, Some(1)))));
        assert_eq!(inexact.expected(), "3 1");
        assert_eq!(inexact.prompt(), "19 / 6 = ");
    }

    #[test]
    fn test_wrong_shape_is_incorrect() {
        let q = Question::TimesTable {
            multiplier: 3,
            multiplicand: 4,
        };
        assert!(!q.is_correct(Some(&Answer::QuotientRemainder(12, None))));
        assert!(q.is_correct(Some(&Answer::Single(12))));
        assert_eq!(q.prompt(), " 3 x  4 = ");
    }

    #[test]
    fn test_multiplication_prompt() {
        let q = Question::Multiplication {
            operands: vec![12, 7],
            result: 84,
        };
        assert_eq!(q.prompt(), "12 x 7 = ");
        assert_eq!(q.expected(), "84");
    }
}
