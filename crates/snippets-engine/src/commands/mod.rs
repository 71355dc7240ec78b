//! Command orchestration layer.
//!
//! A plain command value per operation, so shells (CLI, tests, future
//! front ends) build arguments once and dispatch through one entry point.

pub mod snippet_command;
