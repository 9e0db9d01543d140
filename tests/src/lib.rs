//! Integration and system tests for the MediLingo translator.
//!
//! The modules under `src/` exercise the pipeline across crate boundaries;
//! nothing here is meant for use outside `cargo test`.

#[cfg(test)]
mod diagnostics;
#[cfg(test)]
mod prescriptions;
