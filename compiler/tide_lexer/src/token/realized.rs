//! Fully materialized token.

use std::sync::OnceLock;

use tide_ir::SyntaxKind;
use tide_lexer_core::TriviaInfo;

use super::{compute_value, TokenValue};
use crate::trivia::SyntaxTriviaList;

/// A token that owns its text and trivia and no longer reads the source.
///
/// Tokens become realized when their scan reported a diagnostic, or when
/// trivia is replaced for an edit. Realized tokens are never reused across
/// incremental updates.
#[derive(Clone, Debug)]
pub struct RealizedToken {
    pub(crate) full_start: u32,
    pub(crate) kind: SyntaxKind,
    pub(crate) text: Box<str>,
    pub(crate) leading: SyntaxTriviaList,
    pub(crate) trailing: SyntaxTriviaList,
    pub(crate) value: OnceLock<TokenValue>,
}

impl RealizedToken {
    pub fn new(
        full_start: u32,
        kind: SyntaxKind,
        text: &str,
        leading: SyntaxTriviaList,
        trailing: SyntaxTriviaList,
    ) -> Self {
        RealizedToken {
            full_start,
            kind,
            text: text.into(),
            leading,
            trailing,
            value: OnceLock::new(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn leading_info(&self) -> TriviaInfo {
        self.leading.info()
    }

    pub fn trailing_info(&self) -> TriviaInfo {
        self.trailing.info()
    }

    pub fn value(&self) -> TokenValue {
        self.value
            .get_or_init(|| compute_value(self.kind, &self.text))
            .clone()
    }

    pub fn full_text(&self) -> String {
        let mut out = self.leading.full_text();
        out.push_str(&self.text);
        out.push_str(&self.trailing.full_text());
        out
    }
}
