use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::session::drill::{DrillMode, DrillSession};

/// Summary of a finished session.
#[derive(Clone, Debug)]
pub struct DrillResult {
    pub mode: DrillMode,
    pub total: usize,
    pub wrong: usize,
    /// `(question number, wrong attempts)` for every missed question, 1-based.
    pub misses: Vec<(usize, u32)>,
    pub elapsed_secs: f64,
    pub started_at: Option<DateTime<Local>>,
    /// Where wrong attempts were written, and how many.
    pub wrong_log: Option<(PathBuf, usize)>,
}

impl DrillResult {
    pub fn from_session(session: &DrillSession) -> Self {
        let misses = session
            .misses
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| (i + 1, count))
            .collect();
        Self {
            mode: session.mode,
            total: session.questions.len(),
            wrong: session.wrong_count(),
            misses,
            elapsed_secs: session.elapsed_secs(),
            started_at: session.started_wall,
            wrong_log: session.log_report.clone(),
        }
    }

    /// Share of questions answered right the first time.
    pub fn mark_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.total - self.wrong) as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for DrillResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {} : {}", self.total, self.wrong)?;
        writeln!(f, "Mark: {:.2}%", self.mark_percent())?;
        write!(f, "Time: {}", format_elapsed(self.elapsed_secs))?;
        if !self.misses.is_empty() {
            let listed: Vec<String> = self
                .misses
                .iter()
                .map(|(number, count)| format!("#{number} x{count}"))
                .collect();
            write!(f, "\nMissed: {}", listed.join(", "))?;
        }
        if let Some((path, records)) = &self.wrong_log {
            if *records > 0 {
                write!(f, "\nWrong answers logged: {records} in {}", path.display())?;
            }
        }
        Ok(())
    }
}

/// `H:MM:SS.mmm`
pub fn format_elapsed(secs: f64) -> String {
    let millis = (secs.max(0.0) * 1000.0).round() as u64;
    let hours = millis / 3_600_000;
    let minutes = millis / 60_000 % 60;
    let seconds = millis / 1000 % 60;
    format!("{hours}:{minutes:02}:{seconds:02}.{:03}", millis % 1000)
}
