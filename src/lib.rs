//! Terminal arithmetic drills.
//!
//! Generators in [`generator`] build immutable [`question::Question`]s; a
//! [`session::drill::DrillSession`] owns them along with the wrong-answer
//! tally and log, and [`session::runner::run_session`] asks them over any
//! line-based reader and writer.

pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod question;
pub mod session;
pub mod store;
