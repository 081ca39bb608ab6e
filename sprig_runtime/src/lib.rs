mod errors;
mod runtime;

pub mod api;

pub use errors::RuntimeError;
pub use runtime::{Runtime, Timing};
