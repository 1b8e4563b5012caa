//! Core domain types
//!
//! The fundamental game types: colors, codes, feedback scoring, and the
//! enumerable code universe. Everything here is a pure value type with
//! clear mathematical properties.

mod code;
mod color;
mod feedback;
mod space;

pub use code::{CODE_LEN, Code, CodeError};
pub use color::Color;
pub use feedback::Feedback;
pub use space::CodeSpace;
