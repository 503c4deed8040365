//! Search execution: candidate enumeration, strategy dispatch, run state.

use crate::error::SearchError;
use crate::search::lookup::{Document, DocumentLookup, DocumentRef};
use crate::search::matcher::CompiledMatcher;
use crate::search::result::{ResultItem, ResultModel, ResultSubItem, SearchState};
use crate::search::types::{Engine, MatchStrategy, Scope, SearchConfig, Target};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Cooperative stop request shared between the engine and its caller.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the running search to stop after the current candidate.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

/// Marks the engine busy for the lifetime of one run.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs searches one at a time.
///
/// `run` takes `&self`, so an engine can be shared across threads; a run
/// started while another is in flight is rejected with [`SearchError::Busy`].
#[derive(Debug, Default)]
pub struct SearchEngine {
    cancel: CancelToken,
    in_search: AtomicBool,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine observing an existing token.
    ///
    /// The engine clears the token whenever it starts a run, so a token must
    /// belong to a single engine. Sharing one between engines lets a run on
    /// one of them drop a stop request aimed at another.
    pub fn with_cancel_token(cancel: CancelToken) -> Self {
        Self {
            cancel,
            in_search: AtomicBool::new(false),
        }
    }

    /// Handle the caller uses to stop a run.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.in_search.load(Ordering::Acquire)
    }

    /// Execute one search.
    ///
    /// Every outcome, including failures, is reported through the returned
    /// model. The stop flag is cleared when the run starts.
    pub fn run(&self, config: &SearchConfig, lookup: &dyn DocumentLookup) -> ResultModel {
        let mut result = ResultModel::new();

        let Some(_guard) = BusyGuard::acquire(&self.in_search) else {
            warn!("search rejected: another search is in progress");
            result.start();
            result.fail(SearchError::Busy);
            return result;
        };

        self.cancel.reset();
        result.start();

        debug!(
            scope = ?config.scope(),
            object = ?config.object(),
            target = ?config.target(),
            options = ?config.options(),
            "start search"
        );

        if let Err(e) = self.search(config, lookup, &mut result) {
            result.fail(e);
        }

        debug_assert_ne!(result.state, SearchState::Idle);
        debug_assert!(result.state.is_terminal());

        match result.state {
            SearchState::Fail => warn!(error = %result.error_message, "search failed"),
            SearchState::Cancelled => info!(items = result.items.len(), "search cancelled"),
            _ => info!(items = result.items.len(), "search succeeded"),
        }
        debug!("{}", result.summary());

        result
    }

    fn search(
        &self,
        config: &SearchConfig,
        lookup: &dyn DocumentLookup,
        result: &mut ResultModel,
    ) -> Result<(), SearchError> {
        match config.engine() {
            Engine::Internal => {}
        }

        if config.keyword().is_empty() {
            debug!("empty keyword, nothing to match");
            result.succeed();
            return Ok(());
        }

        if !config.target().contains(Target::Note) {
            return Err(SearchError::Unsupported(format!(
                "no strategy for target {:?}",
                config.target()
            )));
        }

        let matcher = CompiledMatcher::compile(config.keyword(), config.options())?;

        let strategy = match MatchStrategy::resolve(config.object()) {
            Some(MatchStrategy::Tag) => {
                return Err(SearchError::Unsupported("tag search".to_string()));
            }
            Some(strategy) => strategy,
            None => {
                return Err(SearchError::Unsupported("no search object selected".to_string()));
            }
        };

        let scope = config
            .primary_scope()
            .ok_or_else(|| SearchError::Unsupported("no search scope selected".to_string()))?;

        let candidates =
            candidates(scope, lookup).map_err(|e| SearchError::Lookup(e.to_string()))?;
        debug!(?scope, ?strategy, candidates = candidates.len(), "enumerated candidates");

        for doc in candidates {
            if self.cancel.is_cancelled() {
                result.cancel();
                return Ok(());
            }

            let Some(item) = match_document(doc.as_ref(), strategy, &matcher) else {
                continue;
            };

            if item.is_empty() {
                result.record_error("skipped a matching document without name or path");
                continue;
            }
            result.add_item(item);
        }

        result.succeed();
        Ok(())
    }
}

fn candidates(scope: Scope, lookup: &dyn DocumentLookup) -> crate::Result<Vec<DocumentRef>> {
    match scope {
        Scope::CurrentNote => Ok(lookup.current_document()?.into_iter().collect()),
        Scope::OpenedNotes => lookup.opened_documents(),
        Scope::CurrentFolder => lookup.current_folder_documents(),
        Scope::CurrentNotebook => lookup.current_notebook_documents(),
        Scope::AllNotebooks => lookup.all_notebook_documents(),
    }
}

/// Apply `strategy` to one document.
pub fn match_document(
    doc: &dyn Document,
    strategy: MatchStrategy,
    matcher: &CompiledMatcher,
) -> Option<ResultItem> {
    match strategy {
        MatchStrategy::Name => match_name(doc, matcher),
        MatchStrategy::Outline => match_outline(doc, matcher),
        MatchStrategy::Content => match_content(doc, matcher),
        MatchStrategy::Tag => None,
    }
}

fn match_name(doc: &dyn Document, matcher: &CompiledMatcher) -> Option<ResultItem> {
    let name = doc.name();
    if !matcher.is_match(name) {
        return None;
    }
    Some(ResultItem::new(doc.path(), name))
}

fn match_outline(doc: &dyn Document, matcher: &CompiledMatcher) -> Option<ResultItem> {
    let outline = doc.outline()?;

    let mut item: Option<ResultItem> = None;
    for entry in outline {
        if entry.is_empty() || !matcher.is_match(&entry.text) {
            continue;
        }

        item.get_or_insert_with(|| ResultItem::new(doc.path(), doc.name()))
            .push_match(ResultSubItem::new(entry.index, entry.text));
    }

    item
}

fn match_content(doc: &dyn Document, matcher: &CompiledMatcher) -> Option<ResultItem> {
    let content = doc.content()?;

    let mut item: Option<ResultItem> = None;
    for (i, line) in content.lines().enumerate() {
        if !matcher.is_match(line) {
            continue;
        }

        item.get_or_insert_with(|| ResultItem::new(doc.path(), doc.name()))
            .push_match(ResultSubItem::new(i as i64 + 1, line));
    }

    item
}
