pub mod compose;
pub mod error;
pub mod mirror;
pub mod safety;
pub mod templates;
