pub mod conversion;
pub mod field;
pub mod raw;

pub use field::*;
