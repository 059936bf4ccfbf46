//! Password building.

pub mod charset;
mod generate;
mod request;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{Password, build};
pub use request::{GenerationRequest, LengthControl};
