pub mod builtin;
pub mod csv;
pub mod example;
pub mod glyph;
pub mod samples;

pub use builtin::builtin_xor;
pub use example::{Example, LabelledSample};
