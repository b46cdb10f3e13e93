//! CLI command implementations.
//!
//! - `run`: Replay a batch and print events
//! - `validate`: Parse a batch and report what it contains
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod run;
pub mod validate;

pub use completions::CompletionsCommand;
pub use run::RunCommand;
pub use validate::ValidateCommand;
