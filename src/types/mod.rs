pub mod config;
pub mod penalty;
pub mod results;
pub mod rubric;
pub mod vote;
