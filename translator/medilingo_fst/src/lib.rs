//! MediLingo output generation module
//!
//! Final pipeline stage: maps each token of a validated instruction to its
//! Taglish rendering, applies positional particle repair ("ang"/"ng"), and
//! assembles the translated sentence.

pub mod table;
pub mod transducer;

pub use table::{taglish, TAGLISH_PAIRS};
pub use transducer::transduce;
