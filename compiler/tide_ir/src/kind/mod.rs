//! Syntax kinds: the closed catalogue of token kinds.

use std::fmt;

/// Kind of a syntax token.
///
/// All values fit in a single `u8`, with categories arranged in contiguous
/// ranges so that classification is a range check:
///
/// | Range   | Category                         |
/// |---------|----------------------------------|
/// | 0-1     | Special (error, end of file)     |
/// | 2-5     | Variable-width (names, literals) |
/// | 10-38   | Reserved words                   |
/// | 39-45   | Future reserved words            |
/// | 46-54   | Strict-mode reserved words       |
/// | 55-64   | Contextual keywords              |
/// | 70-119  | Punctuation                      |
///
/// Every kind outside 0 and 2-5 is fixed-width: its text is fully
/// determined by the kind and returned by [`SyntaxKind::text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SyntaxKind {
    // === Special (0-1) ===
    /// A character or sequence the scanner could not classify.
    ErrorToken = 0,
    EndOfFileToken = 1,

    // === Variable width (2-5) ===
    IdentifierName = 2,
    NumericLiteral = 3,
    StringLiteral = 4,
    RegularExpressionLiteral = 5,

    // === Reserved words (10-38) ===
    BreakKeyword = 10,
    CaseKeyword = 11,
    CatchKeyword = 12,
    ContinueKeyword = 13,
    DebuggerKeyword = 14,
    DefaultKeyword = 15,
    DeleteKeyword = 16,
    DoKeyword = 17,
    ElseKeyword = 18,
    FalseKeyword = 19,
    FinallyKeyword = 20,
    ForKeyword = 21,
    FunctionKeyword = 22,
    IfKeyword = 23,
    InKeyword = 24,
    InstanceofKeyword = 25,
    NewKeyword = 26,
    NullKeyword = 27,
    ReturnKeyword = 28,
    SwitchKeyword = 29,
    ThisKeyword = 30,
    ThrowKeyword = 31,
    TrueKeyword = 32,
    TryKeyword = 33,
    TypeofKeyword = 34,
    VarKeyword = 35,
    VoidKeyword = 36,
    WhileKeyword = 37,
    WithKeyword = 38,

    // === Future reserved words (39-45) ===
    ClassKeyword = 39,
    ConstKeyword = 40,
    EnumKeyword = 41,
    ExportKeyword = 42,
    ExtendsKeyword = 43,
    ImportKeyword = 44,
    SuperKeyword = 45,

    // === Strict-mode reserved words (46-54) ===
    ImplementsKeyword = 46,
    InterfaceKeyword = 47,
    LetKeyword = 48,
    PackageKeyword = 49,
    PrivateKeyword = 50,
    ProtectedKeyword = 51,
    PublicKeyword = 52,
    StaticKeyword = 53,
    YieldKeyword = 54,

    // === Contextual keywords (55-64) ===
    AnyKeyword = 55,
    BooleanKeyword = 56,
    ConstructorKeyword = 57,
    DeclareKeyword = 58,
    GetKeyword = 59,
    ModuleKeyword = 60,
    RequireKeyword = 61,
    NumberKeyword = 62,
    SetKeyword = 63,
    StringKeyword = 64,

    // === Punctuation (70-119) ===
    OpenBraceToken = 70,
    CloseBraceToken = 71,
    OpenParenToken = 72,
    CloseParenToken = 73,
    OpenBracketToken = 74,
    CloseBracketToken = 75,
    DotToken = 76,
    DotDotDotToken = 77,
    SemicolonToken = 78,
    CommaToken = 79,
    LessThanToken = 80,
    GreaterThanToken = 81,
    LessThanEqualsToken = 82,
    GreaterThanEqualsToken = 83,
    EqualsEqualsToken = 84,
    EqualsGreaterThanToken = 85,
    ExclamationEqualsToken = 86,
    EqualsEqualsEqualsToken = 87,
    ExclamationEqualsEqualsToken = 88,
    PlusToken = 89,
    MinusToken = 90,
    AsteriskToken = 91,
    PercentToken = 92,
    PlusPlusToken = 93,
    MinusMinusToken = 94,
    LessThanLessThanToken = 95,
    GreaterThanGreaterThanToken = 96,
    GreaterThanGreaterThanGreaterThanToken = 97,
    AmpersandToken = 98,
    BarToken = 99,
    CaretToken = 100,
    ExclamationToken = 101,
    TildeToken = 102,
    AmpersandAmpersandToken = 103,
    BarBarToken = 104,
    QuestionToken = 105,
    ColonToken = 106,
    EqualsToken = 107,
    PlusEqualsToken = 108,
    MinusEqualsToken = 109,
    AsteriskEqualsToken = 110,
    PercentEqualsToken = 111,
    LessThanLessThanEqualsToken = 112,
    GreaterThanGreaterThanEqualsToken = 113,
    GreaterThanGreaterThanGreaterThanEqualsToken = 114,
    AmpersandEqualsToken = 115,
    BarEqualsToken = 116,
    CaretEqualsToken = 117,
    SlashToken = 118,
    SlashEqualsToken = 119,
}

impl SyntaxKind {
    const FIRST_KEYWORD: u8 = SyntaxKind::BreakKeyword as u8;
    const LAST_KEYWORD: u8 = SyntaxKind::StringKeyword as u8;
    const FIRST_FUTURE_RESERVED: u8 = SyntaxKind::ClassKeyword as u8;
    const FIRST_STRICT_RESERVED: u8 = SyntaxKind::ImplementsKeyword as u8;
    const FIRST_CONTEXTUAL: u8 = SyntaxKind::AnyKeyword as u8;
    const FIRST_PUNCTUATION: u8 = SyntaxKind::OpenBraceToken as u8;
    const LAST_PUNCTUATION: u8 = SyntaxKind::SlashEqualsToken as u8;

    /// Every keyword kind, in discriminant order.
    pub const KEYWORDS: [SyntaxKind; 55] = [
        SyntaxKind::BreakKeyword,
        SyntaxKind::CaseKeyword,
        SyntaxKind::CatchKeyword,
        SyntaxKind::ContinueKeyword,
        SyntaxKind::DebuggerKeyword,
        SyntaxKind::DefaultKeyword,
        SyntaxKind::DeleteKeyword,
        SyntaxKind::DoKeyword,
        SyntaxKind::ElseKeyword,
        SyntaxKind::FalseKeyword,
        SyntaxKind::FinallyKeyword,
        SyntaxKind::ForKeyword,
        SyntaxKind::FunctionKeyword,
        SyntaxKind::IfKeyword,
        SyntaxKind::InKeyword,
        SyntaxKind::InstanceofKeyword,
        SyntaxKind::NewKeyword,
        SyntaxKind::NullKeyword,
        SyntaxKind::ReturnKeyword,
        SyntaxKind::SwitchKeyword,
        SyntaxKind::ThisKeyword,
        SyntaxKind::ThrowKeyword,
        SyntaxKind::TrueKeyword,
        SyntaxKind::TryKeyword,
        SyntaxKind::TypeofKeyword,
        SyntaxKind::VarKeyword,
        SyntaxKind::VoidKeyword,
        SyntaxKind::WhileKeyword,
        SyntaxKind::WithKeyword,
        SyntaxKind::ClassKeyword,
        SyntaxKind::ConstKeyword,
        SyntaxKind::EnumKeyword,
        SyntaxKind::ExportKeyword,
        SyntaxKind::ExtendsKeyword,
        SyntaxKind::ImportKeyword,
        SyntaxKind::SuperKeyword,
        SyntaxKind::ImplementsKeyword,
        SyntaxKind::InterfaceKeyword,
        SyntaxKind::LetKeyword,
        SyntaxKind::PackageKeyword,
        SyntaxKind::PrivateKeyword,
        SyntaxKind::ProtectedKeyword,
        SyntaxKind::PublicKeyword,
        SyntaxKind::StaticKeyword,
        SyntaxKind::YieldKeyword,
        SyntaxKind::AnyKeyword,
        SyntaxKind::BooleanKeyword,
        SyntaxKind::ConstructorKeyword,
        SyntaxKind::DeclareKeyword,
        SyntaxKind::GetKeyword,
        SyntaxKind::ModuleKeyword,
        SyntaxKind::RequireKeyword,
        SyntaxKind::NumberKeyword,
        SyntaxKind::SetKeyword,
        SyntaxKind::StringKeyword,
    ];

    /// Every punctuation kind, in discriminant order.
    pub const PUNCTUATION: [SyntaxKind; 50] = [
        SyntaxKind::OpenBraceToken,
        SyntaxKind::CloseBraceToken,
        SyntaxKind::OpenParenToken,
        SyntaxKind::CloseParenToken,
        SyntaxKind::OpenBracketToken,
        SyntaxKind::CloseBracketToken,
        SyntaxKind::DotToken,
        SyntaxKind::DotDotDotToken,
        SyntaxKind::SemicolonToken,
        SyntaxKind::CommaToken,
        SyntaxKind::LessThanToken,
        SyntaxKind::GreaterThanToken,
        SyntaxKind::LessThanEqualsToken,
        SyntaxKind::GreaterThanEqualsToken,
        SyntaxKind::EqualsEqualsToken,
        SyntaxKind::EqualsGreaterThanToken,
        SyntaxKind::ExclamationEqualsToken,
        SyntaxKind::EqualsEqualsEqualsToken,
        SyntaxKind::ExclamationEqualsEqualsToken,
        SyntaxKind::PlusToken,
        SyntaxKind::MinusToken,
        SyntaxKind::AsteriskToken,
        SyntaxKind::PercentToken,
        SyntaxKind::PlusPlusToken,
        SyntaxKind::MinusMinusToken,
        SyntaxKind::LessThanLessThanToken,
        SyntaxKind::GreaterThanGreaterThanToken,
        SyntaxKind::GreaterThanGreaterThanGreaterThanToken,
        SyntaxKind::AmpersandToken,
        SyntaxKind::BarToken,
        SyntaxKind::CaretToken,
        SyntaxKind::ExclamationToken,
        SyntaxKind::TildeToken,
        SyntaxKind::AmpersandAmpersandToken,
        SyntaxKind::BarBarToken,
        SyntaxKind::QuestionToken,
        SyntaxKind::ColonToken,
        SyntaxKind::EqualsToken,
        SyntaxKind::PlusEqualsToken,
        SyntaxKind::MinusEqualsToken,
        SyntaxKind::AsteriskEqualsToken,
        SyntaxKind::PercentEqualsToken,
        SyntaxKind::LessThanLessThanEqualsToken,
        SyntaxKind::GreaterThanGreaterThanEqualsToken,
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken,
        SyntaxKind::AmpersandEqualsToken,
        SyntaxKind::BarEqualsToken,
        SyntaxKind::CaretEqualsToken,
        SyntaxKind::SlashToken,
        SyntaxKind::SlashEqualsToken,
    ];

    /// Canonical text of a fixed-width kind; `None` for variable-width kinds.
    pub const fn text(self) -> Option<&'static str> {
        Some(match self {
            SyntaxKind::ErrorToken
            | SyntaxKind::IdentifierName
            | SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::RegularExpressionLiteral => return None,
            SyntaxKind::EndOfFileToken => "",
            SyntaxKind::BreakKeyword => "break",
            SyntaxKind::CaseKeyword => "case",
            SyntaxKind::CatchKeyword => "catch",
            SyntaxKind::ContinueKeyword => "continue",
            SyntaxKind::DebuggerKeyword => "debugger",
            SyntaxKind::DefaultKeyword => "default",
            SyntaxKind::DeleteKeyword => "delete",
            SyntaxKind::DoKeyword => "do",
            SyntaxKind::ElseKeyword => "else",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::FinallyKeyword => "finally",
            SyntaxKind::ForKeyword => "for",
            SyntaxKind::FunctionKeyword => "function",
            SyntaxKind::IfKeyword => "if",
            SyntaxKind::InKeyword => "in",
            SyntaxKind::InstanceofKeyword => "instanceof",
            SyntaxKind::NewKeyword => "new",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::ReturnKeyword => "return",
            SyntaxKind::SwitchKeyword => "switch",
            SyntaxKind::ThisKeyword => "this",
            SyntaxKind::ThrowKeyword => "throw",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::TryKeyword => "try",
            SyntaxKind::TypeofKeyword => "typeof",
            SyntaxKind::VarKeyword => "var",
            SyntaxKind::VoidKeyword => "void",
            SyntaxKind::WhileKeyword => "while",
            SyntaxKind::WithKeyword => "with",
            SyntaxKind::ClassKeyword => "class",
            SyntaxKind::ConstKeyword => "const",
            SyntaxKind::EnumKeyword => "enum",
            SyntaxKind::ExportKeyword => "export",
            SyntaxKind::ExtendsKeyword => "extends",
            SyntaxKind::ImportKeyword => "import",
            SyntaxKind::SuperKeyword => "super",
            SyntaxKind::ImplementsKeyword => "implements",
            SyntaxKind::InterfaceKeyword => "interface",
            SyntaxKind::LetKeyword => "let",
            SyntaxKind::PackageKeyword => "package",
            SyntaxKind::PrivateKeyword => "private",
            SyntaxKind::ProtectedKeyword => "protected",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::StaticKeyword => "static",
            SyntaxKind::YieldKeyword => "yield",
            SyntaxKind::AnyKeyword => "any",
            SyntaxKind::BooleanKeyword => "boolean",
            SyntaxKind::ConstructorKeyword => "constructor",
            SyntaxKind::DeclareKeyword => "declare",
            SyntaxKind::GetKeyword => "get",
            SyntaxKind::ModuleKeyword => "module",
            SyntaxKind::RequireKeyword => "require",
            SyntaxKind::NumberKeyword => "number",
            SyntaxKind::SetKeyword => "set",
            SyntaxKind::StringKeyword => "string",
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::DotToken => ".",
            SyntaxKind::DotDotDotToken => "...",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::LessThanEqualsToken => "<=",
            SyntaxKind::GreaterThanEqualsToken => ">=",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::EqualsGreaterThanToken => "=>",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::EqualsEqualsEqualsToken => "===",
            SyntaxKind::ExclamationEqualsEqualsToken => "!==",
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::PlusPlusToken => "++",
            SyntaxKind::MinusMinusToken => "--",
            SyntaxKind::LessThanLessThanToken => "<<",
            SyntaxKind::GreaterThanGreaterThanToken => ">>",
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => ">>>",
            SyntaxKind::AmpersandToken => "&",
            SyntaxKind::BarToken => "|",
            SyntaxKind::CaretToken => "^",
            SyntaxKind::ExclamationToken => "!",
            SyntaxKind::TildeToken => "~",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarBarToken => "||",
            SyntaxKind::QuestionToken => "?",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::PlusEqualsToken => "+=",
            SyntaxKind::MinusEqualsToken => "-=",
            SyntaxKind::AsteriskEqualsToken => "*=",
            SyntaxKind::PercentEqualsToken => "%=",
            SyntaxKind::LessThanLessThanEqualsToken => "<<=",
            SyntaxKind::GreaterThanGreaterThanEqualsToken => ">>=",
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            SyntaxKind::AmpersandEqualsToken => "&=",
            SyntaxKind::BarEqualsToken => "|=",
            SyntaxKind::CaretEqualsToken => "^=",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::SlashEqualsToken => "/=",
        })
    }

    /// Whether the token text is determined by the kind alone.
    #[inline]
    pub const fn is_fixed_width(self) -> bool {
        !matches!(
            self,
            SyntaxKind::ErrorToken
                | SyntaxKind::IdentifierName
                | SyntaxKind::NumericLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::RegularExpressionLiteral
        )
    }

    /// Width in bytes of a fixed-width kind (0 for variable-width kinds).
    #[inline]
    pub const fn fixed_width(self) -> u32 {
        match self.text() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "canonical token text is at most 12 bytes"
            )]
            Some(text) => text.len() as u32,
            None => 0,
        }
    }

    /// Any keyword, reserved or contextual.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        let d = self as u8;
        d >= Self::FIRST_KEYWORD && d <= Self::LAST_KEYWORD
    }

    /// Words that can never be used as identifiers in any mode
    /// (reserved and future reserved words).
    #[inline]
    pub const fn is_reserved_word(self) -> bool {
        let d = self as u8;
        d >= Self::FIRST_KEYWORD && d < Self::FIRST_STRICT_RESERVED
    }

    /// Future reserved words (`class`, `enum`, ...).
    #[inline]
    pub const fn is_future_reserved_word(self) -> bool {
        let d = self as u8;
        d >= Self::FIRST_FUTURE_RESERVED && d < Self::FIRST_STRICT_RESERVED
    }

    /// Words reserved only in strict-mode code (`let`, `yield`, ...).
    #[inline]
    pub const fn is_strict_reserved_word(self) -> bool {
        let d = self as u8;
        d >= Self::FIRST_STRICT_RESERVED && d < Self::FIRST_CONTEXTUAL
    }

    /// Keywords that are valid identifiers everywhere (`any`, `module`, ...).
    #[inline]
    pub const fn is_contextual_keyword(self) -> bool {
        let d = self as u8;
        d >= Self::FIRST_CONTEXTUAL && d <= Self::LAST_KEYWORD
    }

    #[inline]
    pub const fn is_punctuation(self) -> bool {
        let d = self as u8;
        d >= Self::FIRST_PUNCTUATION && d <= Self::LAST_PUNCTUATION
    }

    /// Identifier or any keyword; i.e. anything usable as a property name.
    #[inline]
    pub const fn is_identifier_name(self) -> bool {
        matches!(self, SyntaxKind::IdentifierName) || self.is_keyword()
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::NumericLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::RegularExpressionLiteral
        )
    }

    /// Kinds whose scan depends on whether the parser allowed a regular
    /// expression at this position: `/`, `/=` and regex literals.
    #[inline]
    pub const fn is_regex_ambiguous(self) -> bool {
        matches!(
            self,
            SyntaxKind::SlashToken
                | SyntaxKind::SlashEqualsToken
                | SyntaxKind::RegularExpressionLiteral
        )
    }

    /// Human-readable name for diagnostics: the canonical text when there
    /// is one, otherwise a description of the kind.
    pub const fn display_name(self) -> &'static str {
        match self {
            SyntaxKind::ErrorToken => "error",
            SyntaxKind::EndOfFileToken => "end of file",
            SyntaxKind::IdentifierName => "identifier",
            SyntaxKind::NumericLiteral => "numeric literal",
            SyntaxKind::StringLiteral => "string literal",
            SyntaxKind::RegularExpressionLiteral => "regular expression literal",
            _ => match self.text() {
                Some(text) => text,
                None => "",
            },
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

crate::static_assert_size!(SyntaxKind, 1);
