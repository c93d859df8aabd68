use sortable_core::Order;

/// The query order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOrder {
    /// The sort field.
    field: String,
    /// The sort order.
    order: Order,
}

impl QueryOrder {
    /// Creates a new instance.
    #[inline]
    pub fn new(field: impl Into<String>, order: Order) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    /// Returns the sort field.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the sort order.
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }
}
