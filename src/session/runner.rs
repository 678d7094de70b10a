use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::{DrillError, Result};
use crate::session::answer::parse_answer;
use crate::session::drill::DrillSession;
use crate::session::result::DrillResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Presenting(usize),
    AwaitingAnswer(usize),
    Correct(usize),
    Incorrect(usize),
    Unreadable(usize),
    Done,
}

/// Runs every question of `session` against line-based `input`, writing
/// prompts and feedback to `output`.
///
/// A blank line re-prompts without penalty. Text that is not a number of the
/// expected shape costs the question its mark and re-prompts; a number that
/// is not the answer is a wrong attempt.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut DrillSession,
    input: &mut R,
    output: &mut W,
) -> Result<DrillResult> {
    info!(
        mode = session.mode.as_str(),
        questions = session.questions.len(),
        repeat = session.repeat,
        "session started"
    );
    session.start();

    let mut line = String::new();
    let mut state = if session.questions.is_empty() {
        State::Done
    } else {
        State::Presenting(0)
    };

    while state != State::Done {
        state = match state {
            State::Presenting(i) => {
                debug!(index = i, question = %session.questions[i], "presenting");
                State::AwaitingAnswer(i)
            }
            State::AwaitingAnswer(i) => {
                let question = &session.questions[i];
                write!(output, "{}", question.prompt())?;
                output.flush()?;

                line.clear();
                if input.read_line(&mut line)? == 0 {
                    return Err(DrillError::InputClosed);
                }
                let raw = line.trim();
                if raw.is_empty() {
                    State::AwaitingAnswer(i)
                } else {
                    let answer = parse_answer(raw, question.answer_shape());
                    debug!(index = i, answer = raw, parsed = ?answer, "answer received");
                    if question.is_correct(answer.as_ref()) {
                        State::Correct(i)
                    } else if answer.is_none() {
                        session.record_unreadable(i);
                        State::Unreadable(i)
                    } else {
                        session.record_miss(i, raw)?;
                        State::Incorrect(i)
                    }
                }
            }
            State::Correct(i) => advance(session, i),
            State::Incorrect(i) => {
                if session.repeat {
                    writeln!(output, "The answer is wrong, try again")?;
                    State::AwaitingAnswer(i)
                } else {
                    writeln!(
                        output,
                        "Wrong, the answer is {}",
                        session.questions[i].expected()
                    )?;
                    advance(session, i)
                }
            }
            State::Unreadable(i) => {
                writeln!(output, "Sorry, give me the answer please")?;
                State::AwaitingAnswer(i)
            }
            State::Done => State::Done,
        };
    }

    session.finish()?;
    let result = DrillResult::from_session(session);
    info!(
        total = result.total,
        wrong = result.wrong,
        elapsed_secs = result.elapsed_secs,
        "session finished"
    );
    Ok(result)
}

fn advance(session: &DrillSession, index: usize) -> State {
    if index + 1 < session.questions.len() {
        State::Presenting(index + 1)
    } else {
        State::Done
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use super::*;
    use crate::question::Question;
    use crate::session::drill::DrillMode;
    use crate::store::wrong_log::WrongAnswerLog;
    use tempfile::TempDir;

    fn sums() -> Vec<Question> {
        vec![
            Question::RunningSum {
                operands: vec![3, 4],
                result: 7,
            },
            Question::RunningSum {
                operands: vec![10, -2],
                result: 8,
            },
        ]
    }

    fn run(session: &mut DrillSession, input: &str) -> (Result<DrillResult>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run_session(session, &mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_all_correct() {
        let mut session = DrillSession::new(DrillMode::RunningSum, sums());
        let (result, out) = run(&mut session, "7\n8\n");
        let result = result.unwrap();
        assert_eq!(result.wrong, 0);
        assert_eq!(result.total, 2);
        assert_eq!(out, " 3 +  4 = 10 -  2 = ");
        assert!(session.is_complete());
    }

    #[test]
    fn test_wrong_answer_advances_without_repeat() {
        let mut session = DrillSession::new(DrillMode::RunningSum, sums());
        let (result, out) = run(&mut session, "6\n8\n");
        assert_eq!(result.unwrap().wrong, 1);
        assert!(out.contains("Wrong, the answer is 7"));
        assert_eq!(session.misses, vec![1, 0]);
    }

    #[test]
    fn test_repeat_reasks_until_correct() {
        let mut session = DrillSession::new(DrillMode::RunningSum, sums()).with_repeat(true);
        let (result, out) = run(&mut session, "6\n5\n7\n8\n");
        let result = result.unwrap();
        assert_eq!(result.wrong, 1);
        assert_eq!(result.misses, vec![(1, 2)]);
        assert_eq!(out.matches("The answer is wrong, try again").count(), 2);
    }

    #[test]
    fn test_free_text_reprompts_same_question() {
        let mut session = DrillSession::new(DrillMode::RunningSum, sums());
        let (result, out) = run(&mut session, "seven\n7\n8\n");
        let result = result.unwrap();
        assert_eq!(result.wrong, 1);
        assert_eq!(result.misses, vec![(1, 1)]);
        assert_eq!(out.matches(" 3 +  4 = ").count(), 2);
        assert!(out.contains("Sorry, give me the answer please"));
        assert!(!out.contains("Wrong, the answer is"));
    }

    #[test]
    fn test_blank_line_reprompts_without_penalty() {
        let mut session = DrillSession::new(DrillMode::RunningSum, sums());
        let (result, out) = run(&mut session, "\n   \n7\n8\n");
        assert_eq!(result.unwrap().wrong, 0);
        assert_eq!(out.matches(" 3 +  4 = ").count(), 3);
    }

    #[test]
    fn test_eof_mid_session() {
        let mut session = DrillSession::new(DrillMode::RunningSum, sums());
        let (result, _) = run(&mut session, "7\n");
        assert!(matches!(result, Err(DrillError::InputClosed)));
    }

    #[test]
    fn test_division_answers() {
        let questions = vec![
            Question::Division {
                dividend: 17,
                divisor: 5,
                quotient: 3,
                remainder: 2,
            },
            Question::Division {
                dividend: 18,
                divisor: 6,
                quotient: 3,
                remainder: 0,
            },
        ];
        let mut session = DrillSession::new(DrillMode::Division, questions);
        let (result, out) = run(&mut session, "3 2\n3\n");
        assert_eq!(result.unwrap().wrong, 0);
        assert_eq!(out, "17 / 5 = 18 / 6 = ");
    }

    #[test]
    fn test_every_wrong_attempt_is_logged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrong_questions.txt");
        let log = WrongAnswerLog::create(&path).unwrap();
        let mut session = DrillSession::new(DrillMode::RunningSum, sums())
            .with_repeat(true)
            .with_log(log);
        let (result, _) = run(&mut session, "6\n7\nabc\n9\n8\n");
        assert_eq!(result.unwrap().wrong, 2);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![" 3 +  4 =\t6\t[ 7]", "10 -  2 =\t9\t[ 8]"]);
    }

    #[test]
    fn test_empty_session_finishes_immediately() {
        let mut session = DrillSession::new(DrillMode::TimesTable, Vec::new());
        let (result, out) = run(&mut session, "");
        assert_eq!(result.unwrap().total, 0);
        assert!(out.is_empty());
    }
}
