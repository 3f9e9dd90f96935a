use super::AggregateId;

/// A row type read from the hosted table store.
///
/// Ties each row type to its table and to the labels the storefront shows
/// for it.
pub trait AggregateRoot {
    /// Row identifier
    type Id: AggregateId;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// URL-safe unique key of the row
    fn slug(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the aggregate in the project (e.g. "a002")
    fn aggregate_index() -> &'static str;

    /// Physical table name in the store (e.g. "aluminum_products")
    fn collection_name() -> &'static str;

    /// Singular UI label
    fn element_name() -> &'static str;

    /// Plural UI label
    fn list_name() -> &'static str;
}

/// Rows carrying an explicit display order.
pub trait Sequenced {
    fn sort_order(&self) -> i32;
}

/// Stable ascending sort by `sort_order`.
///
/// The store already orders these rows; sorting again keeps page logic
/// independent of how a query was phrased.
pub fn order_by_sort<T: Sequenced>(mut rows: Vec<T>) -> Vec<T> {
    rows.sort_by_key(Sequenced::sort_order);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, i32);

    impl Sequenced for Row {
        fn sort_order(&self) -> i32 {
            self.1
        }
    }

    #[test]
    fn test_order_by_sort_is_ascending_and_stable() {
        let rows = vec![Row("b", 2), Row("a", 1), Row("c", 2), Row("z", 0)];
        let ordered = order_by_sort(rows);
        assert_eq!(
            ordered,
            vec![Row("z", 0), Row("a", 1), Row("b", 2), Row("c", 2)]
        );
    }
}
