use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    Descending,
    #[default]
    None,
}

/// Current sort column and direction. `order == None` means insertion
/// order is preserved.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    pub column: Option<String>,
    pub order: SortOrder,
}

impl SortState {
    pub fn is_active(&self) -> bool {
        self.column.is_some() && self.order != SortOrder::None
    }

    /// Direction indicator for a column header, `None` when the column is
    /// not the active sort key.
    pub fn indicator_for(&self, key: &str) -> Option<SortOrder> {
        match &self.column {
            Some(col) if col == key && self.order != SortOrder::None => Some(self.order),
            _ => None,
        }
    }
}

/// Selected value for one equality filter. `All` is the sentinel that
/// clears the constraint; an absent key means the same thing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    All,
    Value(String),
}

/// The full query surface of one table: search text, per-field equality
/// filters, sort, and the pagination window.
///
/// Internal consistency is kept here: any search or filter mutation resets
/// the page to 1, so a narrowed result set never leaves the view stranded
/// on a page that no longer exists.
#[derive(Debug, Clone)]
pub struct QueryState {
    search: String,
    filters: BTreeMap<String, FilterSelection>,
    sort: SortState,
    page: usize,
    page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: SortState::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Replace the search text. Empty string is a valid "no search" value.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Set one field filter. `FilterSelection::All` removes the entry so
    /// the key goes back to unconstrained.
    pub fn set_filter(&mut self, key: impl Into<String>, selection: FilterSelection) {
        let key = key.into();
        match selection {
            FilterSelection::All => {
                self.filters.remove(&key);
            }
            FilterSelection::Value(v) => {
                self.filters.insert(key, FilterSelection::Value(v));
            }
        }
        self.page = 1;
    }

    pub fn filter_selection(&self, key: &str) -> FilterSelection {
        self.filters
            .get(key)
            .cloned()
            .unwrap_or(FilterSelection::All)
    }

    /// Active constraints only, `All` entries never appear here.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().filter_map(|(k, sel)| match sel {
            FilterSelection::Value(v) => Some((k.as_str(), v.as_str())),
            FilterSelection::All => None,
        })
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filters().next().is_some()
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Three-state sort cycle on one key:
    /// unsorted -> ascending -> descending -> cleared. A different key
    /// always restarts at ascending.
    pub fn cycle_sort(&mut self, key: impl Into<String>) {
        let key = key.into();
        let same_column = self.sort.column.as_deref() == Some(key.as_str());

        self.sort = if same_column {
            match self.sort.order {
                SortOrder::Ascending => SortState {
                    column: Some(key),
                    order: SortOrder::Descending,
                },
                SortOrder::Descending | SortOrder::None => SortState::default(),
            }
        } else {
            SortState {
                column: Some(key),
                order: SortOrder::Ascending,
            }
        };
    }

    pub fn clear_sort(&mut self) {
        self.sort = SortState::default();
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Store a 1-based page number. Callers clamp against the derived
    /// page count; derivation yields an empty slice for impossible pages
    /// either way.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_three_state_cycle() {
        let mut q = QueryState::default();
        assert!(!q.sort().is_active());

        q.cycle_sort("created_at");
        assert_eq!(q.sort().column.as_deref(), Some("created_at"));
        assert_eq!(q.sort().order, SortOrder::Ascending);

        q.cycle_sort("created_at");
        assert_eq!(q.sort().order, SortOrder::Descending);

        q.cycle_sort("created_at");
        assert_eq!(q.sort().column, None);
        assert_eq!(q.sort().order, SortOrder::None);
    }

    #[test]
    fn test_sort_different_key_restarts_ascending() {
        let mut q = QueryState::default();
        q.cycle_sort("name");
        q.cycle_sort("name"); // descending
        q.cycle_sort("status");
        assert_eq!(q.sort().column.as_deref(), Some("status"));
        assert_eq!(q.sort().order, SortOrder::Ascending);
    }

    #[test]
    fn test_search_resets_page() {
        let mut q = QueryState::default();
        q.set_page(3);
        assert_eq!(q.page(), 3);

        q.set_search_text("interview");
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut q = QueryState::default();
        q.set_page(2);
        q.set_filter("status", FilterSelection::Value("Active".to_string()));
        assert_eq!(q.page(), 1);

        q.set_page(2);
        q.set_filter("status", FilterSelection::All);
        assert_eq!(q.page(), 1);
        assert!(!q.has_active_filters());
    }

    #[test]
    fn test_all_sentinel_clears_constraint() {
        let mut q = QueryState::default();
        q.set_filter("status", FilterSelection::Value("Paused".to_string()));
        assert_eq!(
            q.filter_selection("status"),
            FilterSelection::Value("Paused".to_string())
        );
        assert_eq!(q.active_filters().count(), 1);

        q.set_filter("status", FilterSelection::All);
        assert_eq!(q.filter_selection("status"), FilterSelection::All);
        assert_eq!(q.active_filters().count(), 0);
    }

    #[test]
    fn test_absent_key_is_unconstrained() {
        let q = QueryState::default();
        assert_eq!(q.filter_selection("never_set"), FilterSelection::All);
    }

    #[test]
    fn test_sort_indicator() {
        let mut q = QueryState::default();
        q.cycle_sort("name");
        assert_eq!(q.sort().indicator_for("name"), Some(SortOrder::Ascending));
        assert_eq!(q.sort().indicator_for("status"), None);
    }

    #[test]
    fn test_page_floor_is_one() {
        let mut q = QueryState::default();
        q.set_page(0);
        assert_eq!(q.page(), 1);
    }
}
