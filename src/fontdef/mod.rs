//! `.fontdef` output

pub mod writer;

pub use writer::FontDefinition;
