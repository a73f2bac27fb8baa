pub mod composition;
pub mod gene;

pub use composition::*;
pub use gene::*;
