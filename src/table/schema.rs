use crate::table::field::FieldValue;

/// A named text accessor used for free-text search and equality filters.
pub struct TextField<R> {
    pub key: String,
    accessor: Box<dyn Fn(&R) -> String + Send + Sync>,
}

impl<R> TextField<R> {
    pub fn value(&self, row: &R) -> String {
        (self.accessor)(row)
    }
}

/// A named typed accessor used for sorting.
pub struct SortField<R> {
    pub key: String,
    accessor: Box<dyn Fn(&R) -> FieldValue + Send + Sync>,
}

impl<R> SortField<R> {
    pub fn value(&self, row: &R) -> FieldValue {
        (self.accessor)(row)
    }
}

/// Per-table field configuration: which fields are searchable, which are
/// filterable, which are sortable, and how to read a row's unique id.
///
/// Accessors are registered once when the hosting page builds its table, so
/// every key the query state can reference resolves through typed closures
/// rather than stringly row indexing.
pub struct TableSchema<R> {
    id: Box<dyn Fn(&R) -> String + Send + Sync>,
    search_fields: Vec<TextField<R>>,
    filter_fields: Vec<TextField<R>>,
    sort_fields: Vec<SortField<R>>,
}

impl<R> TableSchema<R> {
    pub fn new(id: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        Self {
            id: Box::new(id),
            search_fields: Vec::new(),
            filter_fields: Vec::new(),
            sort_fields: Vec::new(),
        }
    }

    /// Register a text field matched by free-text search.
    pub fn search_field(
        mut self,
        key: impl Into<String>,
        accessor: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        self.search_fields.push(TextField {
            key: key.into(),
            accessor: Box::new(accessor),
        });
        self
    }

    /// Register a field constrained by an equality filter.
    pub fn filter_field(
        mut self,
        key: impl Into<String>,
        accessor: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        self.filter_fields.push(TextField {
            key: key.into(),
            accessor: Box::new(accessor),
        });
        self
    }

    /// Register a sortable field.
    pub fn sort_field(
        mut self,
        key: impl Into<String>,
        accessor: impl Fn(&R) -> FieldValue + Send + Sync + 'static,
    ) -> Self {
        self.sort_fields.push(SortField {
            key: key.into(),
            accessor: Box::new(accessor),
        });
        self
    }

    pub fn row_id(&self, row: &R) -> String {
        (self.id)(row)
    }

    pub fn search_fields(&self) -> &[TextField<R>] {
        &self.search_fields
    }

    pub fn filter_field_for(&self, key: &str) -> Option<&TextField<R>> {
        self.filter_fields.iter().find(|f| f.key == key)
    }

    pub fn sort_field_for(&self, key: &str) -> Option<&SortField<R>> {
        self.sort_fields.iter().find(|f| f.key == key)
    }

    pub fn has_filter_field(&self, key: &str) -> bool {
        self.filter_field_for(key).is_some()
    }

    pub fn has_sort_field(&self, key: &str) -> bool {
        self.sort_field_for(key).is_some()
    }

    pub fn filter_keys(&self) -> Vec<&str> {
        self.filter_fields.iter().map(|f| f.key.as_str()).collect()
    }

    pub fn sort_keys(&self) -> Vec<&str> {
        self.sort_fields.iter().map(|f| f.key.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: String,
        name: String,
        status: String,
    }

    fn schema() -> TableSchema<Row> {
        TableSchema::new(|r: &Row| r.id.clone())
            .search_field("name", |r: &Row| r.name.clone())
            .filter_field("status", |r: &Row| r.status.clone())
            .sort_field("name", |r: &Row| FieldValue::from(r.name.clone()))
    }

    #[test]
    fn test_accessor_lookup() {
        let s = schema();
        let row = Row {
            id: "7".to_string(),
            name: "Alice Johnson".to_string(),
            status: "Active".to_string(),
        };

        assert_eq!(s.row_id(&row), "7");
        assert!(s.has_filter_field("status"));
        assert!(!s.has_filter_field("missing"));
        assert!(s.has_sort_field("name"));
        assert_eq!(
            s.filter_field_for("status").unwrap().value(&row),
            "Active"
        );
    }

    #[test]
    fn test_registered_keys() {
        let s = schema();
        assert_eq!(s.filter_keys(), vec!["status"]);
        assert_eq!(s.sort_keys(), vec!["name"]);
        assert_eq!(s.search_fields().len(), 1);
    }
}
