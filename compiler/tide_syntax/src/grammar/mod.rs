//! Tree-level grammar check, run only when the parse itself was clean.
//!
//! Checks that `()`, `[]` and `{}` balance across the token stream.

use std::sync::Arc;

use tide_diagnostic::{expected_token, unexpected_token, Diagnostic};
use tide_ir::{Span, SyntaxKind};
use tide_lexer::SyntaxToken;
use tide_lexer_core::SourceText;

fn closer_for(kind: SyntaxKind) -> Option<SyntaxKind> {
    match kind {
        SyntaxKind::OpenParenToken => Some(SyntaxKind::CloseParenToken),
        SyntaxKind::OpenBracketToken => Some(SyntaxKind::CloseBracketToken),
        SyntaxKind::OpenBraceToken => Some(SyntaxKind::CloseBraceToken),
        _ => None,
    }
}

fn is_closer(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::CloseParenToken | SyntaxKind::CloseBracketToken | SyntaxKind::CloseBraceToken
    )
}

/// Report unbalanced delimiters.
///
/// A closer that does not match the innermost open delimiter is an
/// unexpected token; each delimiter still open at end of file expects its
/// closer there, innermost first.
pub fn check_delimiters(
    file_name: &Arc<str>,
    tokens: &[Arc<SyntaxToken>],
    source: &dyn SourceText,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut open: Vec<SyntaxKind> = Vec::new();
    let mut end_of_file = 0;

    for token in tokens {
        let kind = token.kind();
        if let Some(closer) = closer_for(kind) {
            open.push(closer);
        } else if is_closer(kind) {
            if open.last() == Some(&kind) {
                open.pop();
            } else {
                let span = Span::new(token.start(), token.end());
                diagnostics.push(unexpected_token(file_name, span, token.text(source)));
            }
        } else if kind == SyntaxKind::EndOfFileToken {
            end_of_file = token.start();
        }
    }

    for closer in open.into_iter().rev() {
        diagnostics.push(expected_token(file_name, end_of_file, closer));
    }
    diagnostics
}

#[cfg(test)]
mod tests;
