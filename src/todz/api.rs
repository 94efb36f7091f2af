//! # API Facade
//!
//! `TodzApi` is the single entry point for all todz operations, regardless
//! of the UI driving it. It is a plain state holder: the collection is
//! loaded once at construction, every mutating intent applies a pure
//! transform from [`crate::items`] to produce the next collection, and the
//! full collection is persisted immediately after each mutation.
//!
//! ## What the API Does NOT Do
//!
//! - **I/O formatting**: it returns structured results, never strings for
//!   a terminal.
//! - **Error surfacing for persistence**: saves are fire-and-forget at
//!   this boundary; failures are logged inside the store layer.
//!
//! ## Generic Over KvStore
//!
//! `TodzApi<S: KvStore>` works against any storage backend:
//! - Production: `TodzApi<FileStore>`
//! - Testing: `TodzApi<InMemoryStore>`
//!
//! Mutating intents are infallible by design: a missing key degrades to a
//! no-op (with a warning-level message for the presentation layer), never
//! an error.

use crate::filter::{active_count, apply_filter, Filter};
use crate::items;
use crate::model::Item;
use crate::store::{load_items, save_items, KvStore};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    fn message(msg: CmdMessage) -> Self {
        Self {
            messages: vec![msg],
        }
    }
}

/// Snapshot handed to the presentation layer after each intent.
#[derive(Debug)]
pub struct ViewState {
    /// The visible subset, in display order.
    pub items: Vec<Item>,
    pub filter: Filter,
    pub active_count: usize,
    pub all_complete: bool,
    /// True when startup found no usable persisted collection.
    pub defaulted: bool,
}

/// The state holder for the item collection.
///
/// All UI clients interact through this type; see the module docs for the
/// control flow.
pub struct TodzApi<S: KvStore> {
    store: S,
    items: Vec<Item>,
    filter: Filter,
    all_complete: bool,
    defaulted: bool,
}

impl<S: KvStore> TodzApi<S> {
    /// Load the collection from `store`. The only load; malformed or
    /// absent data starts the collection empty (see `ViewState::defaulted`).
    pub fn load(store: S) -> Self {
        let outcome = load_items(&store);
        // Seed the all-complete flag from the loaded collection so the
        // first toggle-all of a fully-completed list unmarks it.
        let all_complete = !outcome.items.is_empty() && active_count(&outcome.items) == 0;
        Self {
            store,
            items: outcome.items,
            filter: Filter::default(),
            all_complete,
            defaulted: outcome.defaulted,
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the collection and persist it in full. Every mutating
    /// intent funnels through here.
    fn commit(&mut self, next: Vec<Item>) {
        self.items = next;
        save_items(&mut self.store, &self.items);
    }

    fn find(&self, key: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn add(&mut self, text: &str) -> CmdResult {
        if text.is_empty() {
            return CmdResult::message(CmdMessage::info("Nothing to add."));
        }
        self.commit(items::add(&self.items, text));
        CmdResult::message(CmdMessage::success(format!("Added: {}", text)))
    }

    pub fn update_text(&mut self, key: Uuid, text: &str) -> CmdResult {
        let Some(old) = self.find(key) else {
            return CmdResult::message(CmdMessage::warning("No such item."));
        };
        let old_text = old.text.clone();
        self.commit(items::update_text(&self.items, key, text));
        CmdResult::message(CmdMessage::success(format!(
            "Updated: {} -> {}",
            old_text, text
        )))
    }

    pub fn toggle_editing(&mut self, key: Uuid, editing: bool) -> CmdResult {
        if self.find(key).is_none() {
            return CmdResult::message(CmdMessage::warning("No such item."));
        }
        self.commit(items::toggle_editing(&self.items, key, editing));
        CmdResult::default()
    }

    pub fn toggle_complete(&mut self, key: Uuid, complete: bool) -> CmdResult {
        let Some(item) = self.find(key) else {
            return CmdResult::message(CmdMessage::warning("No such item."));
        };
        let text = item.text.clone();
        self.commit(items::toggle_complete(&self.items, key, complete));
        let verb = if complete { "Done" } else { "Not done" };
        CmdResult::message(CmdMessage::success(format!("{}: {}", verb, text)))
    }

    /// Flip the tracked all-complete flag and apply it to every item.
    pub fn toggle_all_complete(&mut self) -> CmdResult {
        self.all_complete = !self.all_complete;
        let target = self.all_complete;
        self.commit(items::toggle_all_complete(&self.items, target));
        let verb = if target { "done" } else { "not done" };
        CmdResult::message(CmdMessage::success(format!(
            "Marked all {} items {}.",
            self.items.len(),
            verb
        )))
    }

    pub fn remove(&mut self, key: Uuid) -> CmdResult {
        let Some(item) = self.find(key) else {
            return CmdResult::message(CmdMessage::warning("No such item."));
        };
        let text = item.text.clone();
        self.commit(items::remove(&self.items, key));
        CmdResult::message(CmdMessage::success(format!("Removed: {}", text)))
    }

    pub fn clear_completed(&mut self) -> CmdResult {
        let before = self.items.len();
        self.commit(items::clear_completed(&self.items));
        let cleared = before - self.items.len();
        CmdResult::message(CmdMessage::success(format!(
            "Cleared {} completed item{}.",
            cleared,
            if cleared == 1 { "" } else { "s" }
        )))
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Recompute the visible subset for the presentation layer.
    pub fn view(&self) -> ViewState {
        ViewState {
            items: apply_filter(&self.items, self.filter),
            filter: self.filter,
            active_count: active_count(&self.items),
            all_complete: !self.items.is_empty() && active_count(&self.items) == 0,
            defaulted: self.defaulted,
        }
    }

    /// The full collection, unfiltered, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Resolve a 1-based display position (in `Filter::All` order) to an
    /// item key. CLI clients address items by position, not by key.
    pub fn key_at(&self, position: usize) -> Option<Uuid> {
        if position == 0 {
            return None;
        }
        self.items.get(position - 1).map(|item| item.key)
    }
}
