//! volaudit - A CLI tool to audit block/boot volume backup posture across a
//! cloud tenancy
//!
//! Audits every compartment the caller can see, classifies each volume
//! against a backup staleness policy, and writes/uploads a reproducible
//! report.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the volaudit CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("[ERROR] {err:#}");
        std::process::exit(1);
    }
}
