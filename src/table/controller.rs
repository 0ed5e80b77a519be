use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::matcher::{SearchMode, TextMatcher};
use crate::table::query::{FilterSelection, QueryState, SortState};
use crate::table::schema::TableSchema;
use crate::table::selection::SelectionState;
use crate::table::view::{derive_view, DerivedView};

/// Owns one table's query state, selection, and sample-data gate, and
/// derives the visible window from an immutable source collection.
///
/// Every visible output is a pure function of (source rows, query state,
/// gate); the controller holds no hidden derivation state. Each table on a
/// page gets its own independent instance.
pub struct TableController<R> {
    rows: Vec<R>,
    schema: TableSchema<R>,
    query: QueryState,
    selection: SelectionState,
    search_mode: SearchMode,
    fuzzy_threshold: i64,
    data_loaded: bool,
}

impl<R> TableController<R> {
    pub fn new(rows: Vec<R>, schema: TableSchema<R>) -> Self {
        Self {
            rows,
            schema,
            query: QueryState::default(),
            selection: SelectionState::new(),
            search_mode: SearchMode::default(),
            fuzzy_threshold: 0,
            data_loaded: true,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.query = QueryState::new(page_size);
        self
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Minimum fuzzy score for a match, fuzzy search mode only.
    pub fn with_fuzzy_threshold(mut self, threshold: i64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    /// Start behind the sample-data gate: derivation yields empty results
    /// until `load_data()` is called.
    pub fn gated(mut self) -> Self {
        self.data_loaded = false;
        self
    }

    /// One-time external seed (e.g. a filter value carried in from a URL
    /// query parameter). Applied at construction only, never synced after.
    pub fn with_initial_filter(mut self, key: &str, value: &str) -> Self {
        if self.schema.has_filter_field(key) {
            self.query
                .set_filter(key, FilterSelection::Value(value.to_string()));
        } else {
            warn!(target: "table", "ignoring initial filter on unknown key '{}'", key);
        }
        self
    }

    /// Release the sample-data gate.
    pub fn load_data(&mut self) {
        self.data_loaded = true;
    }

    pub fn is_data_loaded(&self) -> bool {
        self.data_loaded
    }

    // --- query mutators ---

    /// Replace the search text and reset to page 1. Selection is pruned to
    /// the rows still visible under the new text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.set_search_text(text);
        self.prune_selection();
    }

    /// Set one field filter. Unknown keys are ignored with a warning; the
    /// query state is left untouched so the view cannot silently change
    /// under a typo'd key.
    pub fn set_field_filter(&mut self, key: &str, selection: FilterSelection) {
        if !self.schema.has_filter_field(key) {
            warn!(target: "table", "ignoring filter on unknown key '{}'", key);
            return;
        }
        self.query.set_filter(key, selection);
        self.prune_selection();
    }

    /// Three-state sort cycle on `key`. Unknown keys are ignored with a
    /// warning.
    pub fn cycle_sort(&mut self, key: &str) {
        if !self.schema.has_sort_field(key) {
            warn!(target: "table", "ignoring sort on unknown key '{}'", key);
            return;
        }
        self.query.cycle_sort(key);
        debug!(
            target: "table",
            "sort is now {:?} on {:?}",
            self.query.sort().order,
            self.query.sort().column
        );
    }

    /// Jump to a page, clamped to `[1, total_pages]` (page 1 when nothing
    /// matched).
    pub fn set_page(&mut self, page: usize) {
        let pages = self.derive().total_pages.max(1);
        self.query.set_page(page.clamp(1, pages));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.query.page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.query.page().saturating_sub(1));
    }

    // --- selection ---

    pub fn toggle_row(&mut self, id: impl Into<String>) {
        self.selection.toggle(id);
    }

    /// Select or clear the current page: if every row on the page is
    /// selected, all of them are deselected, otherwise all are selected.
    pub fn toggle_page_selection(&mut self) {
        let page_ids = self.page_ids();
        self.selection.toggle_all(&page_ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- reads ---

    /// Recompute the derived view. Pure in (rows, query, gate); cheap
    /// enough to re-run on every state change.
    pub fn derive(&self) -> DerivedView {
        let matcher = TextMatcher::new(self.search_mode, self.query.search_text())
            .with_fuzzy_threshold(self.fuzzy_threshold);
        derive_view(
            &self.rows,
            &self.schema,
            &self.query,
            &matcher,
            self.data_loaded,
        )
    }

    /// The current page's rows, in display order.
    pub fn page_rows(&self) -> Vec<&R> {
        self.derive()
            .page_rows
            .iter()
            .map(|&idx| &self.rows[idx])
            .collect()
    }

    /// Ids of the current page's rows.
    pub fn page_ids(&self) -> Vec<String> {
        self.derive()
            .page_rows
            .iter()
            .map(|&idx| self.schema.row_id(&self.rows[idx]))
            .collect()
    }

    pub fn row_by_index(&self, idx: usize) -> Option<&R> {
        self.rows.get(idx)
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn sort(&self) -> &SortState {
        self.query.sort()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn schema(&self) -> &TableSchema<R> {
        &self.schema
    }

    pub fn source_rows(&self) -> &[R] {
        &self.rows
    }

    /// Intersect the selection with the currently visible filtered set so
    /// no hidden row stays selected after a filter or search change.
    fn prune_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let visible: BTreeSet<String> = self
            .derive()
            .visible
            .iter()
            .map(|&idx| self.schema.row_id(&self.rows[idx]))
            .collect();
        self.selection.retain_visible(&visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::field::FieldValue;

    #[derive(Clone)]
    struct Entry {
        id: String,
        title: String,
        state: String,
    }

    fn entry(id: &str, title: &str, state: &str) -> Entry {
        Entry {
            id: id.to_string(),
            title: title.to_string(),
            state: state.to_string(),
        }
    }

    fn controller() -> TableController<Entry> {
        let rows = vec![
            entry("1", "Resume Review", "Open"),
            entry("2", "Mock Interview", "Closed"),
            entry("3", "Cover Letter Pass", "Open"),
            entry("4", "Interview Drills", "Open"),
            entry("5", "LinkedIn Audit", "Closed"),
        ];
        let schema = TableSchema::new(|r: &Entry| r.id.clone())
            .search_field("title", |r: &Entry| r.title.clone())
            .filter_field("state", |r: &Entry| r.state.clone())
            .sort_field("title", |r: &Entry| FieldValue::from(r.title.clone()));
        TableController::new(rows, schema).with_page_size(2)
    }

    #[test]
    fn test_page_clamps_to_bounds() {
        let mut c = controller();
        c.set_page(99);
        assert_eq!(c.query().page(), 3); // 5 rows, page size 2

        c.set_page(0);
        assert_eq!(c.query().page(), 1);
    }

    #[test]
    fn test_filter_change_resets_page_and_prunes_selection() {
        let mut c = controller();
        c.toggle_row("2");
        c.toggle_row("3");
        c.set_page(2);

        c.set_field_filter("state", FilterSelection::Value("Open".to_string()));

        assert_eq!(c.query().page(), 1);
        // "2" is Closed and no longer visible, "3" survives
        assert!(!c.selection().is_selected("2"));
        assert!(c.selection().is_selected("3"));
    }

    #[test]
    fn test_search_prunes_selection() {
        let mut c = controller();
        c.toggle_row("1");
        c.toggle_row("4");

        c.set_search_text("interview");

        assert!(!c.selection().is_selected("1"));
        assert!(c.selection().is_selected("4"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut c = controller();
        c.set_field_filter("nope", FilterSelection::Value("x".to_string()));
        c.cycle_sort("nope");

        assert!(!c.query().has_active_filters());
        assert!(!c.sort().is_active());
        assert_eq!(c.derive().filtered_count, 5);
    }

    #[test]
    fn test_toggle_page_selection_covers_current_page_only() {
        let mut c = controller();
        c.toggle_page_selection();

        // page 1 holds ids "1" and "2"
        assert!(c.selection().is_selected("1"));
        assert!(c.selection().is_selected("2"));
        assert!(!c.selection().is_selected("3"));

        c.toggle_page_selection();
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_gated_controller_shows_nothing_until_loaded() {
        let rows = vec![entry("1", "Resume Review", "Open")];
        let schema = TableSchema::new(|r: &Entry| r.id.clone())
            .search_field("title", |r: &Entry| r.title.clone());
        let mut c = TableController::new(rows, schema).gated();

        assert_eq!(c.derive().filtered_count, 0);
        assert!(c.page_rows().is_empty());

        c.load_data();
        assert_eq!(c.derive().filtered_count, 1);
    }

    #[test]
    fn test_initial_filter_seed() {
        let rows = vec![
            entry("1", "Resume Review", "Open"),
            entry("2", "Mock Interview", "Closed"),
        ];
        let schema = TableSchema::new(|r: &Entry| r.id.clone())
            .search_field("title", |r: &Entry| r.title.clone())
            .filter_field("state", |r: &Entry| r.state.clone());
        let c = TableController::new(rows, schema).with_initial_filter("state", "Closed");

        let view = c.derive();
        assert_eq!(view.filtered_count, 1);
        assert_eq!(c.page_ids(), vec!["2".to_string()]);
    }

    #[test]
    fn test_pagination_reconstructs_filtered_set() {
        let mut c = controller();
        let all = c.derive();
        assert_eq!(all.total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=all.total_pages {
            c.set_page(page);
            seen.extend(c.page_ids());
        }

        assert_eq!(
            seen,
            vec!["1", "2", "3", "4", "5"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }
}
