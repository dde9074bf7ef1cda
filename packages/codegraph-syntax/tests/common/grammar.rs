//! Scripted grammar for lifecycle and tree tests
//!
//! Splits the source on ASCII whitespace: the root is a `document` spanning
//! the whole text and every word becomes a `word` child named after itself.
//! The word `!` becomes an `ERROR` node and `?` a zero-width missing node.
//! A grammar built with [`WordGrammar::cancelling`] fires its token while
//! parsing any source containing the word `cancel`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use codegraph_syntax::config::ParserConfig;
use codegraph_syntax::features::parsing::domain::{AstArena, LineIndex, NodeData};
use codegraph_syntax::features::parsing::ports::{Grammar, GrammarEngine, ParsedAst};
use codegraph_syntax::features::parsing::LanguageParserAdapter;
use codegraph_syntax::{CancellationToken, CodegraphError, Result, SourceLocation};

pub const WORDS: &str = "words";

/// Byte ranges of whitespace-separated words
pub fn word_spans(source: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, b) in source.bytes().enumerate() {
        match (b.is_ascii_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, source.len()));
    }
    spans
}

#[derive(Default)]
pub struct WordGrammar {
    pub loads: Arc<AtomicUsize>,
    pub parses: Arc<AtomicUsize>,
    failing_loads: AtomicUsize,
    panicking_loads: AtomicUsize,
    cancel_on_parse: Option<CancellationToken>,
}

impl WordGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first `n` loads fail with an initialization error
    pub fn failing(n: usize) -> Self {
        Self {
            failing_loads: AtomicUsize::new(n),
            ..Self::default()
        }
    }

    /// The first `n` loads panic
    pub fn panicking(n: usize) -> Self {
        Self {
            panicking_loads: AtomicUsize::new(n),
            ..Self::default()
        }
    }

    /// Engines cancel `token` from inside `parse` when they see `cancel`
    pub fn cancelling(token: CancellationToken) -> Self {
        Self {
            cancel_on_parse: Some(token),
            ..Self::default()
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn parse_count(&self) -> usize {
        self.parses.load(Ordering::SeqCst)
    }
}

impl Grammar for WordGrammar {
    fn language(&self) -> &str {
        WORDS
    }

    fn load(&self, _config: &ParserConfig) -> Result<Box<dyn GrammarEngine>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let panicked = self
            .panicking_loads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if panicked {
            panic!("word grammar tables corrupted");
        }
        let failed = self
            .failing_loads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(CodegraphError::initialization(WORDS, "grammar binary unavailable"));
        }
        Ok(Box::new(WordEngine {
            parses: Arc::clone(&self.parses),
            cancel_on_parse: self.cancel_on_parse.clone(),
        }))
    }
}

pub struct WordEngine {
    parses: Arc<AtomicUsize>,
    cancel_on_parse: Option<CancellationToken>,
}

impl GrammarEngine for WordEngine {
    fn parse(&mut self, source: &str) -> Result<ParsedAst> {
        self.parses.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = &self.cancel_on_parse {
            if word_spans(source).iter().any(|&(s, e)| &source[s..e] == "cancel") {
                token.cancel();
            }
        }
        let index = LineIndex::new(source);
        let locate = |start: usize, end: usize| -> Result<SourceLocation> {
            Ok(SourceLocation::new(start, end)?
                .with_line_columns(index.line_column(start), index.line_column(end)))
        };

        let mut arena = AstArena::new();
        let root = arena.alloc(NodeData::new("document").with_location(locate(0, source.len())?));
        for (start, end) in word_spans(source) {
            let word = &source[start..end];
            let data = match word {
                "!" => NodeData::new("ERROR")
                    .with_error(true)
                    .with_location(locate(start, end)?),
                "?" => NodeData::new("word")
                    .with_missing(true)
                    .with_location(locate(start, start)?),
                _ => NodeData::new("word")
                    .with_name(word)
                    .with_text(word)
                    .with_location(locate(start, end)?),
            };
            let id = arena.alloc(data);
            arena.add_child(root, id)?;
        }
        Ok(ParsedAst { arena, root })
    }
}

pub type WordParser = LanguageParserAdapter<WordGrammar>;

pub fn word_parser() -> WordParser {
    LanguageParserAdapter::new(WordGrammar::new())
}
