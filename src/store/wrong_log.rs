use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Append-only record of incorrect attempts, one tab-separated line each:
/// question, given answer, bracketed expected answer.
///
/// Opening truncates any previous file, so the log covers one session only.
pub struct WrongAnswerLog {
    path: PathBuf,
    writer: BufWriter<File>,
    records: usize,
}

impl WrongAnswerLog {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            records: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> usize {
        self.records
    }

    /// Writes and flushes one record so nothing is lost if the user quits
    /// mid-session.
    pub fn append(&mut self, question: &str, answer: &str, expected: &str) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t[{:>2}]",
            question.trim_end(),
            answer.trim(),
            expected
        )?;
        self.writer.flush()?;
        self.records += 1;
        Ok(())
    }

    pub fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
