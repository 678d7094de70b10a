pub mod wrong_log;
