pub mod cli;
pub mod configuration;
pub mod error;
pub mod progress;
pub mod score;
