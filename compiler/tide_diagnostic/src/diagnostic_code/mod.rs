//! Diagnostic codes and their message templates.

use std::fmt;

/// Codes for every diagnostic the front end can report.
///
/// The numeric value is stable and shown to users; message templates use
/// `{0}`, `{1}`, ... placeholders filled from [`Diagnostic::args`](crate::Diagnostic).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticCode {
    /// String literal not closed before end of line or file.
    MissingClosingQuote,
    /// A `'{0}'` the grammar required was not found.
    ExpectedToken,
    /// Multi-line comment not closed before end of file.
    UnterminatedComment,
    /// `\x` or `\u` escape without enough hex digits.
    HexadecimalDigitExpected,
    /// A character that cannot start any token.
    UnexpectedCharacter,
    InvalidCharacter,
    /// A token the grammar did not expect here.
    UnexpectedToken,
}

impl DiagnosticCode {
    /// All diagnostic codes.
    pub const ALL: &'static [DiagnosticCode] = &[
        DiagnosticCode::MissingClosingQuote,
        DiagnosticCode::ExpectedToken,
        DiagnosticCode::UnterminatedComment,
        DiagnosticCode::HexadecimalDigitExpected,
        DiagnosticCode::UnexpectedCharacter,
        DiagnosticCode::InvalidCharacter,
        DiagnosticCode::UnexpectedToken,
    ];

    /// Stable numeric code.
    pub const fn number(self) -> u32 {
        match self {
            DiagnosticCode::MissingClosingQuote => 1002,
            DiagnosticCode::ExpectedToken => 1005,
            DiagnosticCode::UnterminatedComment => 1010,
            DiagnosticCode::HexadecimalDigitExpected => 1125,
            DiagnosticCode::UnexpectedCharacter => 1126,
            DiagnosticCode::InvalidCharacter => 1127,
            DiagnosticCode::UnexpectedToken => 1128,
        }
    }

    /// Message template with `{n}` placeholders.
    pub const fn template(self) -> &'static str {
        match self {
            DiagnosticCode::MissingClosingQuote => "Missing close quote character.",
            DiagnosticCode::ExpectedToken => "'{0}' expected.",
            DiagnosticCode::UnterminatedComment => "'*/' expected.",
            DiagnosticCode::HexadecimalDigitExpected => "Hexadecimal digit expected.",
            DiagnosticCode::UnexpectedCharacter => "Unexpected character {0}.",
            DiagnosticCode::InvalidCharacter => "Invalid character.",
            DiagnosticCode::UnexpectedToken => "Unexpected token '{0}'.",
        }
    }

    /// Number of `{n}` arguments the template expects.
    pub fn arity(self) -> usize {
        self.template().matches('{').count()
    }

    /// Substitute `args` into the template. Missing arguments render as
    /// empty text; surplus arguments are ignored.
    pub fn format(self, args: &[String]) -> String {
        let template = self.template();
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            match after[..close].parse::<usize>() {
                Ok(index) => out.push_str(args.get(index).map_or("", String::as_str)),
                Err(_) => out.push_str(&rest[open..=open + close + 1]),
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }

    /// Look a code up by its number.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.number() == number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TD{}", self.number())
    }
}

/// Parse a code like `"TD1002"` or `"1002"` (prefix is case-insensitive).
impl std::str::FromStr for DiagnosticCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = match s.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("td") => &s[2..],
            _ => s,
        };
        digits
            .parse::<u32>()
            .ok()
            .and_then(Self::from_number)
            .ok_or(())
    }
}
