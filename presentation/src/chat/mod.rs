//! Interactive chat module
//!
//! Provides a line-editor based interactive chat interface. The conversation
//! lives only in memory and is gone when the process exits.

mod repl;
mod session;

pub use repl::ChatRepl;
pub use session::ChatSession;
