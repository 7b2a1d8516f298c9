pub mod config;
pub mod eth;
pub mod writing;
