pub mod genetic_code;
pub mod usage;

pub use genetic_code::*;
pub use usage::*;
