//! The [`Diagnostic`] record and constructors for the codes the scanner and
//! grammar check report.

use std::fmt;
use std::sync::Arc;

use tide_ir::{Span, SyntaxKind};

use crate::DiagnosticCode;

/// A problem found in a source file.
///
/// Positions are UTF-8 byte offsets into the file's text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub file_name: Arc<str>,
    pub start: u32,
    pub length: u32,
    pub code: DiagnosticCode,
    /// Arguments for the code's message template.
    pub args: Vec<String>,
}

impl Diagnostic {
    pub fn new(
        file_name: Arc<str>,
        start: u32,
        length: u32,
        code: DiagnosticCode,
        args: Vec<String>,
    ) -> Self {
        Diagnostic {
            file_name,
            start,
            length,
            code,
            args,
        }
    }

    /// Rendered message text.
    pub fn message(&self) -> String {
        self.code.format(&self.args)
    }

    pub fn span(&self) -> Span {
        Span::from_start_len(self.start, self.length)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}): error {}: {}",
            self.file_name,
            self.span(),
            self.code,
            self.message()
        )
    }
}

/// String literal not closed: reported one position past the scanned
/// content, length 1.
pub fn missing_closing_quote(file_name: &Arc<str>, position: u32) -> Diagnostic {
    Diagnostic::new(
        Arc::clone(file_name),
        position,
        1,
        DiagnosticCode::MissingClosingQuote,
        Vec::new(),
    )
}

/// Multi-line comment not closed: reported at end of source, length 0.
pub fn unterminated_comment(file_name: &Arc<str>, end_of_source: u32) -> Diagnostic {
    Diagnostic::new(
        Arc::clone(file_name),
        end_of_source,
        0,
        DiagnosticCode::UnterminatedComment,
        Vec::new(),
    )
}

/// Malformed `\x` / `\u` escape, covering the escape sequence.
pub fn hexadecimal_digit_expected(file_name: &Arc<str>, span: Span) -> Diagnostic {
    Diagnostic::new(
        Arc::clone(file_name),
        span.start,
        span.len(),
        DiagnosticCode::HexadecimalDigitExpected,
        Vec::new(),
    )
}

/// A character that starts no token; the argument is the quoted, escaped
/// character.
pub fn unexpected_character(file_name: &Arc<str>, position: u32, ch: char) -> Diagnostic {
    Diagnostic::new(
        Arc::clone(file_name),
        position,
        char_len(ch),
        DiagnosticCode::UnexpectedCharacter,
        vec![format!("\"{}\"", ch.escape_default())],
    )
}

/// A token the grammar did not expect.
pub fn unexpected_token(file_name: &Arc<str>, span: Span, text: &str) -> Diagnostic {
    Diagnostic::new(
        Arc::clone(file_name),
        span.start,
        span.len(),
        DiagnosticCode::UnexpectedToken,
        vec![text.to_string()],
    )
}

/// A required token is missing; reported with length 0.
pub fn expected_token(file_name: &Arc<str>, position: u32, kind: SyntaxKind) -> Diagnostic {
    Diagnostic::new(
        Arc::clone(file_name),
        position,
        0,
        DiagnosticCode::ExpectedToken,
        vec![kind.display_name().to_string()],
    )
}

#[inline]
fn char_len(ch: char) -> u32 {
    #[allow(clippy::cast_possible_truncation, reason = "len_utf8 is at most 4")]
    {
        ch.len_utf8() as u32
    }
}
