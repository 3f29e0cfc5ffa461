//! Terminal front-end for kittychat
//!
//! The UI collaborator around the completion client: owns the conversation,
//! drives the prompt loop, and decorates replies with a cosmetic cue.

pub mod cli;
pub mod cue;
pub mod repl;

pub use cli::Cli;
pub use repl::run_repl;
