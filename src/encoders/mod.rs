pub mod errors;
pub mod radix;

pub use errors::{DecodeError, InvalidArgumentError};
