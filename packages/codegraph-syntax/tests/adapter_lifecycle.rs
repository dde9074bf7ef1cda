//! Adapter lifecycle: lazy initialization, dispose semantics, failure
//! recovery, cancellation and concurrent use.

mod common;

use std::sync::Arc;

use codegraph_syntax::features::parsing::LanguageParserAdapter;
use codegraph_syntax::{AdapterPhase, CancellationToken, CodegraphError, LanguageParser};
use common::{init_tracing, word_parser, WordGrammar, WORDS};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn parse_initializes_implicitly() {
    init_tracing();
    let parser = word_parser();
    assert!(!parser.is_initialized());

    let tree = parser
        .parse("alpha beta", Some("a.words"), &CancellationToken::new())
        .await
        .unwrap();

    assert!(parser.is_initialized());
    assert_eq!(parser.grammar().load_count(), 1);
    assert_eq!(tree.language(), WORDS);
    assert_eq!(tree.file_path(), Some("a.words"));
    assert_eq!(tree.root().child_count(), 2);
}

#[tokio::test]
async fn initialize_twice_loads_once() {
    let parser = word_parser();
    let cancel = CancellationToken::new();
    parser.initialize(&cancel).await.unwrap();
    parser.initialize(&cancel).await.unwrap();
    parser.parse("x", None, &cancel).await.unwrap();

    assert_eq!(parser.phase(), AdapterPhase::Initialized);
    assert_eq!(parser.grammar().load_count(), 1);
}

#[tokio::test]
async fn empty_source_is_rejected_before_the_engine() {
    let parser = word_parser();
    let err = parser
        .parse("", Some("empty.words"), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Parse error: Source code cannot be null or empty");
    assert!(parser.is_initialized());
    assert_eq!(parser.grammar().load_count(), 1);
    assert_eq!(parser.grammar().parse_count(), 0);
}

#[tokio::test]
async fn empty_source_on_broken_grammar_reports_the_load_failure() {
    let parser = LanguageParserAdapter::new(WordGrammar::failing(1));
    let err = parser.parse("", None, &CancellationToken::new()).await.unwrap_err();

    assert!(matches!(err, CodegraphError::Initialization { .. }), "{err:?}");
    assert_eq!(parser.phase(), AdapterPhase::Uninitialized);
    assert_eq!(parser.grammar().parse_count(), 0);
}

#[tokio::test]
async fn grammar_that_panics_while_loading_can_be_reloaded() {
    init_tracing();
    let parser = Arc::new(LanguageParserAdapter::new(WordGrammar::panicking(1)));
    let cancel = CancellationToken::new();

    let first = tokio::spawn({
        let parser = Arc::clone(&parser);
        let cancel = cancel.clone();
        async move { parser.initialize(&cancel).await }
    });
    assert!(first.await.unwrap_err().is_panic());
    assert_eq!(parser.phase(), AdapterPhase::Initializing);

    parser.initialize(&cancel).await.unwrap();
    assert_eq!(parser.phase(), AdapterPhase::Initialized);
    let tree = parser.parse("still works", None, &cancel).await.unwrap();
    assert_eq!(tree.root().child_count(), 2);
    assert_eq!(parser.grammar().load_count(), 2);
}

#[tokio::test]
async fn parse_through_panicked_load_recovers_lazily() {
    let parser = Arc::new(LanguageParserAdapter::new(WordGrammar::panicking(1)));
    let cancel = CancellationToken::new();

    let first = tokio::spawn({
        let parser = Arc::clone(&parser);
        let cancel = cancel.clone();
        async move { parser.parse("a", None, &cancel).await.map(|_| ()) }
    });
    assert!(first.await.unwrap_err().is_panic());

    let tree = parser.parse("a b c", None, &cancel).await.unwrap();
    assert_eq!(tree.root().child_count(), 3);
    assert!(parser.is_initialized());
}

#[tokio::test]
async fn failed_initialize_is_retryable() {
    init_tracing();
    let parser = LanguageParserAdapter::new(WordGrammar::failing(1));
    let cancel = CancellationToken::new();

    let err = parser.initialize(&cancel).await.unwrap_err();
    assert!(matches!(err, CodegraphError::Initialization { .. }));
    assert_eq!(parser.phase(), AdapterPhase::Uninitialized);

    parser.initialize(&cancel).await.unwrap();
    assert_eq!(parser.phase(), AdapterPhase::Initialized);
    assert_eq!(parser.grammar().load_count(), 2);
}

#[tokio::test]
async fn failed_lazy_initialize_surfaces_from_parse() {
    let parser = LanguageParserAdapter::new(WordGrammar::failing(1));
    let cancel = CancellationToken::new();

    let err = parser.parse("x", None, &cancel).await.unwrap_err();
    assert!(matches!(err, CodegraphError::Initialization { .. }));
    assert!(parser.parse("x", None, &cancel).await.is_ok());
}

#[tokio::test]
async fn dispose_is_idempotent_and_terminal() {
    let parser = word_parser();
    let cancel = CancellationToken::new();
    parser.parse("x", None, &cancel).await.unwrap();

    parser.dispose().await;
    parser.dispose().await;
    assert_eq!(parser.phase(), AdapterPhase::Disposed);
    assert!(!parser.is_initialized());

    let err = parser.parse("x", None, &cancel).await.unwrap_err();
    assert!(matches!(err, CodegraphError::ObjectDisposed { ref language } if language == WORDS));
    let err = parser.initialize(&cancel).await.unwrap_err();
    assert!(matches!(err, CodegraphError::ObjectDisposed { .. }));
}

#[tokio::test]
async fn dispose_before_initialize_never_loads() {
    let parser = word_parser();
    parser.dispose().await;

    assert!(parser.initialize(&CancellationToken::new()).await.is_err());
    assert_eq!(parser.grammar().load_count(), 0);
}

#[tokio::test]
async fn disposed_adapter_rejects_even_empty_source() {
    let parser = word_parser();
    parser.dispose().await;
    let err = parser.parse("", None, &CancellationToken::new()).await.unwrap_err();
    assert!(err.is_lifecycle_error());
}

#[tokio::test]
async fn cancelled_parse_leaves_adapter_uninitialized() {
    let parser = word_parser();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = parser.parse("x", None, &cancel).await.unwrap_err();
    assert!(matches!(err, CodegraphError::Cancelled));
    assert_eq!(parser.phase(), AdapterPhase::Uninitialized);
    assert_eq!(parser.grammar().parse_count(), 0);
}

#[tokio::test]
async fn cancel_during_engine_call_drops_the_tree() {
    let cancel = CancellationToken::new();
    let parser = LanguageParserAdapter::new(WordGrammar::cancelling(cancel.clone()));
    parser.initialize(&cancel).await.unwrap();

    let err = parser.parse("please cancel now", None, &cancel).await.unwrap_err();
    assert!(matches!(err, CodegraphError::Cancelled), "{err:?}");
    assert!(cancel.is_cancelled());
    assert_eq!(parser.phase(), AdapterPhase::Initialized);
    assert_eq!(parser.grammar().parse_count(), 1);

    let tree = parser
        .parse("carry on", None, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(tree.root().child_count(), 2);
    assert_eq!(parser.grammar().load_count(), 1);
    assert_eq!(parser.grammar().parse_count(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_parses_share_one_engine() {
    init_tracing();
    let parser = Arc::new(word_parser());
    let cancel = CancellationToken::new();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let parser = Arc::clone(&parser);
            let cancel = cancel.clone();
            tokio::spawn(async move {
                let source = format!("task {i} words");
                parser.parse(&source, None, &cancel).await
            })
        })
        .collect();

    for handle in handles {
        let tree = handle.await.unwrap().unwrap();
        assert_eq!(tree.root().child_count(), 3);
    }
    assert_eq!(parser.grammar().load_count(), 1);
    assert_eq!(parser.grammar().parse_count(), 16);
}

#[tokio::test]
async fn error_and_missing_nodes_are_reported() {
    let parser = word_parser();
    let tree = parser
        .parse("a ! b ?\nc", Some("broken.words"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(tree.errors().len(), 1);
    let error = &tree.errors()[0];
    assert_eq!(error.message, "Syntax error");
    assert_eq!(error.file_path.as_deref(), Some("broken.words"));
    assert_eq!(error.location.as_ref().map(|l| l.start_offset), Some(2));

    assert_eq!(tree.missing_nodes().count(), 1);
    let metrics = tree.metrics();
    assert_eq!(metrics.error_count, 1);
    assert_eq!(metrics.missing_count, 1);
    assert_eq!(metrics.line_count, 2);
}
