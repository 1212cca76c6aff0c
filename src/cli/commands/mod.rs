//! Command implementations

mod render;
mod run;

pub use render::render;
pub use run::{run_audit, RunArgs};
