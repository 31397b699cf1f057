pub mod messages;
pub mod prompt;

pub use prompt::{Console, LineReader, StreamReader, TerminalReader};
