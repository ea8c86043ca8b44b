//! Low-level building blocks for the Tide scanner.
//!
//! - [`SourceText`] / [`StringText`]: the read-only text a scanner consumes
//! - [`SlidingWindow`]: a bounded byte buffer over a `SourceText` with an
//!   absolute cursor and pin/rewind backtracking
//! - [`char_class`]: process-wide character classification tables
//! - [`TriviaInfo`]: trivia width and flags packed into 32 bits
//!
//! Nothing here knows about tokens beyond the keyword-start byte table.

pub mod char_class;
mod source_text;
mod trivia_info;
mod window;

pub use source_text::{SourceText, StringText};
pub use trivia_info::{TriviaFlags, TriviaInfo};
pub use window::{utf8_char_width, SlidingWindow, END_OF_SOURCE};
