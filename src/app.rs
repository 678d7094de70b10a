use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

use crate::config::Config;
use crate::generator::division::generate_div_questions;
use crate::generator::multiplication::generate_mult_questions;
use crate::generator::running_sum::running_sum_questions;
use crate::generator::tables::{expand_tables, times_table_questions};
use crate::session::drill::{DrillMode, DrillSession};
use crate::session::result::DrillResult;
use crate::session::runner::run_session;
use crate::store::wrong_log::WrongAnswerLog;

/// A drill selected on the command line. `None` fields fall back to [`Config`].
#[derive(Clone, Debug)]
pub enum DrillRequest {
    TimesTable {
        tables: Vec<String>,
        random: bool,
    },
    Multiplication {
        max_vals: Vec<u32>,
        questions: Option<usize>,
        operands: Option<usize>,
    },
    RunningSum {
        questions: Option<usize>,
        operands: Option<i64>,
        max_operand: Option<i64>,
        repeat: bool,
        wrong_log: Option<PathBuf>,
    },
    Division {
        max_val: u32,
        min_val: u32,
        questions: Option<usize>,
    },
}

impl DrillRequest {
    pub fn mode(&self) -> DrillMode {
        match self {
            DrillRequest::TimesTable { .. } => DrillMode::TimesTable,
            DrillRequest::Multiplication { .. } => DrillMode::Multiplication,
            DrillRequest::RunningSum { .. } => DrillMode::RunningSum,
            DrillRequest::Division { .. } => DrillMode::Division,
        }
    }
}

pub struct App {
    pub config: Config,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Generates the questions for `request` and opens any log it needs.
    /// Fails before anything is asked if the parameters are invalid.
    pub fn build_session(&mut self, request: &DrillRequest) -> Result<DrillSession> {
        let mode = request.mode();
        let session = match request {
            DrillRequest::TimesTable { tables, random } => {
                let tables = expand_tables(tables.as_slice())?;
                let questions = times_table_questions(&tables, *random, &mut self.rng)?;
                DrillSession::new(mode, questions)
            }
            DrillRequest::Multiplication {
                max_vals,
                questions,
                operands,
            } => {
                let max_vals: Vec<Option<u32>> = max_vals.iter().copied().map(Some).collect();
                let questions = generate_mult_questions(
                    &max_vals,
                    questions.unwrap_or(self.config.questions),
                    operands.unwrap_or(self.config.mult_operands),
                    &mut self.rng,
                )?;
                DrillSession::new(mode, questions)
            }
            DrillRequest::RunningSum {
                questions,
                operands,
                max_operand,
                repeat,
                wrong_log,
            } => {
                let questions = running_sum_questions(
                    questions.unwrap_or(self.config.questions),
                    operands.unwrap_or(self.config.plus_operands),
                    max_operand.unwrap_or(self.config.max_operand),
                    &mut self.rng,
                )?;
                let path = wrong_log.as_ref().unwrap_or(&self.config.wrong_log);
                let log = WrongAnswerLog::create(path)
                    .with_context(|| format!("opening wrong answer log {}", path.display()))?;
                DrillSession::new(mode, questions)
                    .with_repeat(*repeat)
                    .with_log(log)
            }
            DrillRequest::Division {
                max_val,
                min_val,
                questions,
            } => {
                let questions = generate_div_questions(
                    *max_val,
                    *min_val,
                    questions.unwrap_or(self.config.questions),
                    &mut self.rng,
                )?;
                DrillSession::new(mode, questions)
            }
        };
        info!(
            mode = mode.as_str(),
            questions = session.questions.len(),
            "questions generated"
        );
        Ok(session)
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        request: &DrillRequest,
        input: &mut R,
        output: &mut W,
    ) -> Result<DrillResult> {
        let mut session = self.build_session(request)?;
        let result = run_session(&mut session, input, output)?;
        Ok(result)
    }
}
