//! Query builder for SQL.
use super::{Entity, JoinOn, QueryOrder};
use smallvec::SmallVec;
use sortable_core::{Criterion, CriterionError, Order, QueryAdapter, SortConfig, SortHandler};
use std::{borrow::Cow, fmt, marker::PhantomData};

/// A SQL `SELECT` builder for an entity, driven by sort criteria.
pub struct QueryBuilder<E: Entity> {
    /// The projection pattern.
    projection: Option<String>,
    /// The joins.
    joins: SmallVec<[JoinOn; 4]>,
    /// The sort order.
    sort_order: Vec<QueryOrder>,
    /// The order for directives without an order token.
    default_order: Order,
    /// The phantom data.
    phantom: PhantomData<E>,
}

impl<E: Entity> QueryBuilder<E> {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            projection: None,
            joins: SmallVec::new(),
            sort_order: Vec::new(),
            default_order: Order::default(),
            phantom: PhantomData,
        }
    }

    /// Creates a new instance with the default order of the config.
    #[inline]
    pub fn with_config(config: &SortConfig) -> Self {
        let mut query = Self::new();
        query.default_order = config.default_order();
        query
    }

    /// Sets the order for directives without an order token.
    #[inline]
    pub fn set_default_order(&mut self, order: Order) -> &mut Self {
        self.default_order = order;
        self
    }

    /// Returns the order for directives without an order token.
    #[inline]
    pub fn default_order(&self) -> Order {
        self.default_order
    }

    /// Parses a sort directive and applies it to the query.
    pub fn sort_by(&mut self, value: &str) -> Result<&mut Self, CriterionError> {
        let criterion = Criterion::make(value, self.default_order)?;
        Ok(self.apply(&criterion))
    }

    /// Applies a sort criterion to the query.
    #[inline]
    pub fn apply(&mut self, criterion: &Criterion) -> &mut Self {
        criterion.apply(self);
        self
    }

    /// Returns the joins.
    #[inline]
    pub fn joins(&self) -> &[JoinOn] {
        &self.joins
    }

    /// Returns the sort order.
    #[inline]
    pub fn sort_order(&self) -> &[QueryOrder] {
        &self.sort_order
    }

    /// Returns the projection pattern.
    #[inline]
    pub fn projection(&self) -> &str {
        self.projection.as_deref().unwrap_or("*")
    }

    /// Builds the SQL `SELECT` statement.
    pub fn build_sql(&self) -> String {
        let projection = format_field(self.projection());
        let table_name = format_field(E::TABLE_NAME);
        let mut sql = format!("SELECT {projection} FROM {table_name}");
        for join_on in &self.joins {
            sql.push(' ');
            sql.push_str(&join_on.format());
        }

        let sort = self.format_sort();
        if !sort.is_empty() {
            sql.push(' ');
            sql.push_str(&sort);
        }
        sql
    }

    /// Formats the query sort to generate SQL `ORDER BY` expression.
    fn format_sort(&self) -> String {
        if self.sort_order.is_empty() {
            return String::new();
        }

        let sort_order = self
            .sort_order
            .iter()
            .map(|order| {
                let sort_field = format_field(order.field());
                format!("{sort_field} {}", order.order().as_sql())
            })
            .collect::<Vec<_>>();
        format!("ORDER BY {}", sort_order.join(", "))
    }
}

impl<E: Entity> Default for QueryBuilder<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> fmt::Debug for QueryBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("table", &E::TABLE_NAME)
            .field("projection", &self.projection)
            .field("joins", &self.joins)
            .field("sort_order", &self.sort_order)
            .field("default_order", &self.default_order)
            .finish()
    }
}

impl<E: Entity> QueryAdapter for QueryBuilder<E> {
    #[inline]
    fn has_join(&self, table: &str) -> bool {
        self.joins
            .iter()
            .any(|join_on| join_on.join_table() == table)
    }

    fn add_left_join(&mut self, table: &str, left_column: &str, right_column: &str) {
        let join_on = JoinOn::left_join(table).eq(left_column, right_column);
        self.joins.push(join_on);
    }

    #[inline]
    fn add_order_by(&mut self, column: &str, order: Order) {
        self.sort_order.push(QueryOrder::new(column, order));
    }

    #[inline]
    fn restrict_projection_to(&mut self, pattern: &str) {
        self.projection = Some(pattern.to_owned());
    }

    #[inline]
    fn sort_handler(&self, name: &str) -> Option<SortHandler> {
        E::sort_handler(name)
    }
}

/// Formats a field as a quoted identifier. Each dotted segment is quoted separately
/// and a wildcard segment is left bare.
pub(crate) fn format_field(field: &str) -> Cow<'_, str> {
    if field == "*" {
        return Cow::Borrowed(field);
    }
    field
        .split('.')
        .map(|s| {
            if s == "*" {
                s.to_owned()
            } else {
                format!(r#""{}""#, s.replace('"', r#""""#))
            }
        })
        .collect::<Vec<_>>()
        .join(".")
        .into()
}

#[cfg(test)]
mod tests {
    use super::format_field;

    #[test]
    fn it_formats_field() {
        assert_eq!(format_field("*"), "*");
        assert_eq!(format_field("name"), r#""name""#);
        assert_eq!(format_field("orders.*"), r#""orders".*"#);
        assert_eq!(format_field("customers.name"), r#""customers"."name""#);
        assert_eq!(format_field(r#"na"me"#), r#""na""me""#);
    }
}
