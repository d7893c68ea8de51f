pub mod health;
pub mod koan;
