//! Syntax trees for Tide.
//!
//! A [`SyntaxTree`] owns the source text, the token stream produced by a
//! [`SyntaxParser`], and the diagnostics of that parse. Trees are immutable;
//! [`SyntaxTree::update`] builds a new tree for an edited text, sharing every
//! token the edit could not have affected.
//!
//! # Tracing
//!
//! Incremental updates log at `debug` level (reuse counts) and `trace`
//! level (each reuse decision). Enable with
//! `RUST_LOG=tide_syntax=debug` after calling [`init_tracing`].

mod grammar;
mod parser;
mod reuse;
mod tree;

use std::sync::Once;

pub use grammar::check_delimiters;
pub use parser::{ParseResult, ReuseStats, SyntaxParser, TokenStreamParser};
pub use reuse::is_reuse_eligible;
pub use tree::{SourceUnit, SyntaxTree};

static TRACING_INIT: Once = Once::new();

/// Initialize a tracing subscriber for the front end.
///
/// Safe to call multiple times; only the first call has any effect, and only
/// if `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
