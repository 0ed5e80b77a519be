//! Generic table state: query surface, selection, and the derivation
//! pipeline that turns (source rows, query state) into the visible page.

pub mod controller;
pub mod field;
pub mod query;
pub mod schema;
pub mod selection;
pub mod view;

pub use controller::TableController;
pub use field::{compare_field_values, FieldValue};
pub use query::{FilterSelection, QueryState, SortOrder, SortState, DEFAULT_PAGE_SIZE};
pub use schema::TableSchema;
pub use selection::SelectionState;
pub use view::{derive_view, total_pages, DerivedView};
