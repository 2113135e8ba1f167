//! Request handlers for the gateway route

pub mod process;

pub use process::{not_found, preflight, process};
