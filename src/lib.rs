pub mod batch;
pub mod engine;
pub mod shell;
