//! papersum-cli — command-line client for the paper summarization handler.

pub mod client;
pub mod input;
pub mod render;
pub mod session;
