//! Read queries against the hosted table store.
//!
//! The store speaks the PostgREST dialect: every read is a GET on
//! `/rest/v1/{table}` with the projection, filters, ordering and limit encoded
//! in the query string. Only the subset the storefront needs is modelled:
//! `select=*`, equality filters, ordering and a row limit.

use super::config::StoreConfig;

/// A single read against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: &'static str,
    filters: Vec<(&'static str, String)>,
    /// Ascending sort keys
    order: Vec<&'static str>,
    limit: Option<usize>,
}

impl TableQuery {
    /// `SELECT * FROM table`
    pub fn from(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// `WHERE column = value`; repeated calls are ANDed.
    pub fn eq(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    /// Adds an ascending ordering key; earlier keys take precedence.
    pub fn order_asc(mut self, column: &'static str) -> Self {
        self.order.push(column);
        self
    }

    pub fn limit(mut self, rows: usize) -> Self {
        self.limit = Some(rows);
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut parts = vec!["select=*".to_string()];

        for (column, value) in &self.filters {
            parts.push(format!("{}=eq.{}", column, urlencoding::encode(value)));
        }

        if !self.order.is_empty() {
            let keys: Vec<String> = self
                .order
                .iter()
                .map(|column| format!("{}.asc", column))
                .collect();
            parts.push(format!("order={}", keys.join(",")));
        }

        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }

        parts.join("&")
    }

    /// Full request URL against the configured store
    pub fn url(&self, config: &StoreConfig) -> String {
        format!(
            "{}?{}",
            config.table_endpoint(self.table),
            self.to_query_string()
        )
    }
}
