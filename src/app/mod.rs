pub mod handler;
pub mod reporter;
