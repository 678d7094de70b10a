use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Local};
use tracing::info;

use crate::error::Result;
use crate::question::Question;
use crate::store::wrong_log::WrongAnswerLog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillMode {
    TimesTable,
    Multiplication,
    RunningSum,
    Division,
}

impl DrillMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DrillMode::TimesTable => "timestable",
            DrillMode::Multiplication => "mult",
            DrillMode::RunningSum => "plus",
            DrillMode::Division => "div",
        }
    }
}

/// Mutable state of one drill run: the questions, how each went, and the
/// optional wrong-answer log.
pub struct DrillSession {
    pub mode: DrillMode,
    pub questions: Vec<Question>,
    /// Wrong attempts per question, parallel to `questions`.
    pub misses: Vec<u32>,
    pub repeat: bool,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
    pub started_wall: Option<DateTime<Local>>,
    /// Path and record count of the wrong-answer log, set once it is closed.
    pub log_report: Option<(PathBuf, usize)>,
    wrong: usize,
    log: Option<WrongAnswerLog>,
}

impl DrillSession {
    pub fn new(mode: DrillMode, questions: Vec<Question>) -> Self {
        let misses = vec![0; questions.len()];
        Self {
            mode,
            questions,
            misses,
            repeat: false,
            started_at: None,
            finished_at: None,
            started_wall: None,
            log_report: None,
            wrong: 0,
            log: None,
        }
    }

    /// Re-ask a missed question until it is answered correctly.
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_log(mut self, log: WrongAnswerLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.started_wall = Some(Local::now());
    }

    pub fn finish(&mut self) -> Result<()> {
        self.finished_at = Some(Instant::now());
        if let Some(log) = self.log.take() {
            let report = (log.path().to_path_buf(), log.records());
            log.close()?;
            info!(path = %report.0.display(), records = report.1, "wrong answer log closed");
            self.log_report = Some(report);
        }
        Ok(())
    }

    /// Questions answered wrong at least once.
    pub fn wrong_count(&self) -> usize {
        self.wrong
    }

    /// Records one incorrect attempt at question `index`. A question only
    /// counts once toward the wrong total however often it is missed.
    pub fn record_miss(&mut self, index: usize, answer: &str) -> Result<()> {
        self.tally_miss(index);
        if let Some(log) = self.log.as_mut() {
            let question = &self.questions[index];
            log.append(&question.prompt(), answer, &question.expected())?;
        }
        Ok(())
    }

    /// Records an answer that could not be read as a number. It costs the
    /// question its mark but is not written to the log.
    pub fn record_unreadable(&mut self, index: usize) {
        self.tally_miss(index);
    }

    fn tally_miss(&mut self, index: usize) {
        self.misses[index] += 1;
        if self.misses[index] == 1 {
            self.wrong += 1;
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start).as_secs_f64(),
            (Some(start), None) => start.elapsed().as_secs_f64(),
            _ => 0.0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.finished_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use tempfile::TempDir;

    fn sum_question() -> Question {
        Question::RunningSum {
            operands: vec![4, 5],
            result: 9,
        }
    }

    #[test]
    fn test_new_session() {
        let session = DrillSession::new(DrillMode::RunningSum, vec![sum_question(); 3]);
        assert_eq!(session.misses, vec![0, 0, 0]);
        assert_eq!(session.wrong_count(), 0);
        assert!(!session.repeat);
        assert!(!session.is_complete());
        assert_eq!(session.elapsed_secs(), 0.0);
    }

    #[test]
    fn test_repeated_misses_count_once() {
        let mut session = DrillSession::new(DrillMode::RunningSum, vec![sum_question(); 2]);
        session.record_miss(0, "8").unwrap();
        session.record_miss(0, "10").unwrap();
        session.record_miss(1, "x").unwrap();
        assert_eq!(session.wrong_count(), 2);
        assert_eq!(session.misses, vec![2, 1]);
    }

    #[test]
    fn test_misses_go_to_log() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrong.txt");
        let log = WrongAnswerLog::create(&path).unwrap();
        let mut session =
            DrillSession::new(DrillMode::RunningSum, vec![sum_question()]).with_log(log);
        session.start();
        session.record_miss(0, "8").unwrap();
        assert!(session.log_report.is_none());
        session.finish().unwrap();
        assert!(session.is_complete());
        assert_eq!(session.log_report, Some((path.clone(), 1)));
        assert_eq!(fs::read_to_string(&path).unwrap(), " 4 +  5 =\t8\t[ 9]\n");
    }

    #[test]
    fn test_unreadable_answer_costs_mark_without_logging() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrong.txt");
        let log = WrongAnswerLog::create(&path).unwrap();
        let mut session =
            DrillSession::new(DrillMode::RunningSum, vec![sum_question(); 2]).with_log(log);
        session.record_unreadable(1);
        session.record_unreadable(1);
        assert_eq!(session.wrong_count(), 1);
        assert_eq!(session.misses, vec![0, 2]);
        session.finish().unwrap();
        assert_eq!(session.log_report, Some((path.clone(), 0)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(DrillMode::TimesTable.as_str(), "timestable");
        assert_eq!(DrillMode::Multiplication.as_str(), "mult");
        assert_eq!(DrillMode::RunningSum.as_str(), "plus");
        assert_eq!(DrillMode::Division.as_str(), "div");
    }
}
