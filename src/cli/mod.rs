//! CLI module for ollamarag
//!
//! Handles command-line argument parsing and the interactive prompt.

pub mod args;
pub mod input;

pub use args::{Args, Commands, Verbosity};
pub use input::InputHandler;
