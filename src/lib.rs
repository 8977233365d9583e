pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod source;
pub mod storage;
pub mod terminal;
