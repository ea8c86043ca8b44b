//! Which tokens may be carried across an incremental update.

use tide_lexer::SyntaxToken;

/// Whether `token` may be reused by an incremental update.
///
/// Ineligible tokens are always rescanned:
/// - zero-width tokens (end of file, error recovery placeholders), which
///   carry no text that could be shown to be unaffected;
/// - `/`, `/=` and regular expression literals, whose kind depended on the
///   parser's context when they were scanned;
/// - realized tokens, which reported a diagnostic when scanned.
pub fn is_reuse_eligible(token: &SyntaxToken) -> bool {
    token.full_width() != 0 && !token.kind().is_regex_ambiguous() && !token.is_realized()
}

#[cfg(test)]
mod tests;
