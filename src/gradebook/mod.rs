pub mod activity;
pub mod book;
pub mod models;
pub mod parser;
pub mod report;
pub mod undo;

pub use book::Gradebook;
