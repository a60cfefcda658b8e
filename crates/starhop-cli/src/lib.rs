//! Starhop CLI library.
//!
//! Terminal styling and output formatting shared by the `starhop` binary.

pub mod output;
pub mod terminal;
