//! Conversation management for kittychat
//!
//! This crate owns the ordered chat history: the fixed system persona,
//! the canned greeting, appends from each interaction cycle, and reset
//! back to the initial state.

pub mod conversation;
pub mod persona;

pub use conversation::Conversation;
pub use persona::{GREETING, SYSTEM_PROMPT};
