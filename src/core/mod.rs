pub mod absolute;
pub mod engine;
pub mod relative;
