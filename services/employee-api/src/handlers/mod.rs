pub mod employees;
pub mod health;

pub use employees::*;
pub use health::*;
