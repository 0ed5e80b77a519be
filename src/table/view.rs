use tracing::debug;

use crate::matcher::TextMatcher;
use crate::table::field::compare_field_values;
use crate::table::query::{QueryState, SortOrder};
use crate::table::schema::TableSchema;

/// The derived "what the user sees" window: row indices into the source
/// collection plus pagination metadata. Holding indices rather than clones
/// keeps the source immutable and the derivation cheap.
#[derive(Debug, Clone, Default)]
pub struct DerivedView {
    /// Filtered (and sorted) indices into the source rows.
    pub visible: Vec<usize>,
    /// The current page's slice of `visible`.
    pub page_rows: Vec<usize>,
    /// Rows in the source collection before any filtering.
    pub total_count: usize,
    /// Rows surviving search + field filters.
    pub filtered_count: usize,
    /// `ceil(filtered_count / page_size)`, 0 when nothing matched.
    pub total_pages: usize,
    /// The 1-based page this view was derived for.
    pub page: usize,
}

impl DerivedView {
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Number of pages needed for `filtered` rows at `page_size` rows per page.
pub fn total_pages(filtered: usize, page_size: usize) -> usize {
    if filtered == 0 {
        0
    } else {
        filtered.div_ceil(page_size.max(1))
    }
}

/// Derive the visible window from source rows and query state.
///
/// Pure: same inputs, same output. Pipeline order is fixed — filter, then
/// stable sort, then paginate. `data_loaded` is the sample-data gate; while
/// unset the source is treated as empty regardless of filters.
pub fn derive_view<R>(
    rows: &[R],
    schema: &TableSchema<R>,
    query: &QueryState,
    matcher: &TextMatcher,
    data_loaded: bool,
) -> DerivedView {
    if !data_loaded {
        return DerivedView {
            page: query.page(),
            ..DerivedView::default()
        };
    }

    // Filter: search is OR across configured text fields, field filters
    // are AND across active keys.
    let mut visible: Vec<usize> = (0..rows.len())
        .filter(|&idx| {
            let row = &rows[idx];

            if !matcher.is_empty() {
                let hit = schema
                    .search_fields()
                    .iter()
                    .any(|f| matcher.matches(&f.value(row)));
                if !hit {
                    return false;
                }
            }

            query.active_filters().all(|(key, wanted)| {
                match schema.filter_field_for(key) {
                    Some(f) => f.value(row) == wanted,
                    // Unregistered keys never reach the query state; if one
                    // does, it constrains nothing.
                    None => true,
                }
            })
        })
        .collect();

    // Sort: stable, ties keep filter-step order in both directions.
    let sort = query.sort();
    if sort.is_active() {
        if let Some(field) = sort
            .column
            .as_deref()
            .and_then(|key| schema.sort_field_for(key))
        {
            visible.sort_by(|&a, &b| {
                let ord = compare_field_values(&field.value(&rows[a]), &field.value(&rows[b]));
                match sort.order {
                    SortOrder::Descending => ord.reverse(),
                    _ => ord,
                }
            });
        }
    }

    // Paginate: an out-of-range page yields an empty slice, never a panic.
    let filtered_count = visible.len();
    let pages = total_pages(filtered_count, query.page_size());
    let start = (query.page() - 1).saturating_mul(query.page_size());
    let end = start.saturating_add(query.page_size()).min(filtered_count);
    let page_rows = if start < filtered_count {
        visible[start..end].to_vec()
    } else {
        Vec::new()
    };

    debug!(
        target: "table",
        "derived view: {} of {} rows, page {}/{}",
        filtered_count,
        rows.len(),
        query.page(),
        pages
    );

    DerivedView {
        visible,
        page_rows,
        total_count: rows.len(),
        filtered_count,
        total_pages: pages,
        page: query.page(),
    }
}
