//! Keyword resolution.
//!
//! Keywords are resolved only after an identifier's full extent is known, so
//! `forEach` stays an identifier. The lookup uses the identifier's length as
//! a first-pass filter (keywords are 2-11 bytes), then matches against the
//! keywords of that length.
//!
//! A separate table lists the words ES3 reserved for future use, which are
//! ordinary identifiers in later versions.

use tide_ir::SyntaxKind;

/// Look up a keyword by its (ASCII) spelling.
///
/// Returns `None` for anything that is not a keyword, including text with
/// escapes or non-ASCII characters.
#[inline]
pub fn lookup(text: &[u8]) -> Option<SyntaxKind> {
    if !(2..=11).contains(&text.len()) || !text[0].is_ascii_lowercase() {
        return None;
    }

    match text.len() {
        2 => match text {
            b"do" => Some(SyntaxKind::DoKeyword),
            b"if" => Some(SyntaxKind::IfKeyword),
            b"in" => Some(SyntaxKind::InKeyword),
            _ => None,
        },
        3 => match text {
            b"any" => Some(SyntaxKind::AnyKeyword),
            b"for" => Some(SyntaxKind::ForKeyword),
            b"get" => Some(SyntaxKind::GetKeyword),
            b"let" => Some(SyntaxKind::LetKeyword),
            b"new" => Some(SyntaxKind::NewKeyword),
            b"set" => Some(SyntaxKind::SetKeyword),
            b"try" => Some(SyntaxKind::TryKeyword),
            b"var" => Some(SyntaxKind::VarKeyword),
            _ => None,
        },
        4 => match text {
            b"case" => Some(SyntaxKind::CaseKeyword),
            b"else" => Some(SyntaxKind::ElseKeyword),
            b"enum" => Some(SyntaxKind::EnumKeyword),
            b"null" => Some(SyntaxKind::NullKeyword),
            b"this" => Some(SyntaxKind::ThisKeyword),
            b"true" => Some(SyntaxKind::TrueKeyword),
            b"void" => Some(SyntaxKind::VoidKeyword),
            b"with" => Some(SyntaxKind::WithKeyword),
            _ => None,
        },
        5 => match text {
            b"break" => Some(SyntaxKind::BreakKeyword),
            b"catch" => Some(SyntaxKind::CatchKeyword),
            b"class" => Some(SyntaxKind::ClassKeyword),
            b"const" => Some(SyntaxKind::ConstKeyword),
            b"false" => Some(SyntaxKind::FalseKeyword),
            b"super" => Some(SyntaxKind::SuperKeyword),
            b"throw" => Some(SyntaxKind::ThrowKeyword),
            b"while" => Some(SyntaxKind::WhileKeyword),
            b"yield" => Some(SyntaxKind::YieldKeyword),
            _ => None,
        },
        6 => match text {
            b"delete" => Some(SyntaxKind::DeleteKeyword),
            b"export" => Some(SyntaxKind::ExportKeyword),
            b"import" => Some(SyntaxKind::ImportKeyword),
            b"module" => Some(SyntaxKind::ModuleKeyword),
            b"number" => Some(SyntaxKind::NumberKeyword),
            b"public" => Some(SyntaxKind::PublicKeyword),
            b"return" => Some(SyntaxKind::ReturnKeyword),
            b"static" => Some(SyntaxKind::StaticKeyword),
            b"string" => Some(SyntaxKind::StringKeyword),
            b"switch" => Some(SyntaxKind::SwitchKeyword),
            b"typeof" => Some(SyntaxKind::TypeofKeyword),
            _ => None,
        },
        7 => match text {
            b"boolean" => Some(SyntaxKind::BooleanKeyword),
            b"declare" => Some(SyntaxKind::DeclareKeyword),
            b"default" => Some(SyntaxKind::DefaultKeyword),
            b"extends" => Some(SyntaxKind::ExtendsKeyword),
            b"finally" => Some(SyntaxKind::FinallyKeyword),
            b"package" => Some(SyntaxKind::PackageKeyword),
            b"private" => Some(SyntaxKind::PrivateKeyword),
            b"require" => Some(SyntaxKind::RequireKeyword),
            _ => None,
        },
        8 => match text {
            b"continue" => Some(SyntaxKind::ContinueKeyword),
            b"debugger" => Some(SyntaxKind::DebuggerKeyword),
            b"function" => Some(SyntaxKind::FunctionKeyword),
            _ => None,
        },
        9 => match text {
            b"interface" => Some(SyntaxKind::InterfaceKeyword),
            b"protected" => Some(SyntaxKind::ProtectedKeyword),
            _ => None,
        },
        10 => match text {
            b"implements" => Some(SyntaxKind::ImplementsKeyword),
            b"instanceof" => Some(SyntaxKind::InstanceofKeyword),
            _ => None,
        },
        11 => match text {
            b"constructor" => Some(SyntaxKind::ConstructorKeyword),
            _ => None,
        },
        _ => None,
    }
}

/// Words ES3 reserves for future use that ES5 released.
const ES3_FUTURE_RESERVED: [&str; 16] = [
    "abstract",
    "boolean",
    "byte",
    "char",
    "double",
    "final",
    "float",
    "goto",
    "int",
    "long",
    "native",
    "short",
    "synchronized",
    "throws",
    "transient",
    "volatile",
];

/// Whether `text` is one of the ES3-only future reserved words.
pub fn is_es3_future_reserved_word(text: &str) -> bool {
    ES3_FUTURE_RESERVED.binary_search(&text).is_ok()
}
