pub mod answer;
pub mod drill;
pub mod result;
pub mod runner;
