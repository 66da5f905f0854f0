pub mod error;
pub mod screen;
