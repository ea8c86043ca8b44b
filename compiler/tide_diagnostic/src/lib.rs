//! Diagnostics for the Tide front end.
//!
//! A diagnostic is plain data: the file it belongs to, a byte range, a code
//! from a closed catalogue and the arguments for the code's message
//! template. Scanning and grammar checks append diagnostics to a
//! caller-owned `Vec<Diagnostic>`; nothing here renders or sorts them
//! beyond producing the message text.

mod diagnostic;
mod diagnostic_code;

pub use diagnostic::{
    expected_token, hexadecimal_digit_expected, missing_closing_quote, unexpected_character,
    unexpected_token, unterminated_comment, Diagnostic,
};
pub use diagnostic_code::DiagnosticCode;
