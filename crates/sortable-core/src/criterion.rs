use crate::{JoinPath, LazyLock, Order, QueryAdapter, SharedString, error::CriterionError, helper};
use regex::Regex;
use std::{fmt, str::FromStr};

/// A single sort directive with a normalized field and order.
///
/// # Examples
/// ```rust,ignore
/// use sortable_core::{Criterion, Order};
///
/// let criterion = Criterion::make("orders.customers.customer_id.name,desc", Order::Ascending)?;
/// criterion.apply(&mut query);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Criterion {
    /// The sort field.
    field: SharedString,
    /// The sort order.
    order: Order,
}

impl Criterion {
    /// Parses a raw sort directive such as `name`, `name,asc` or `name,desc`.
    /// The default order is used when the directive has no order token.
    pub fn make(value: &str, default_order: Order) -> Result<Self, CriterionError> {
        let parse_error = || CriterionError::Parse(value.to_owned());
        let captures = CRITERION_PATTERN
            .captures(helper::trim_value(value))
            .ok_or_else(parse_error)?;
        let field = &captures[1];
        if !is_valid_field(field) {
            return Err(parse_error());
        }

        let order = match captures.get(3) {
            Some(token) => token.as_str().parse()?,
            None => default_order,
        };
        Ok(Self {
            field: field.to_owned().into(),
            order,
        })
    }

    /// Creates a new instance from a field and an order token.
    pub fn try_new(field: impl Into<SharedString>, order: &str) -> Result<Self, CriterionError> {
        let order = order.parse()?;
        let field = field.into();
        if field.is_empty() || field.contains(',') || !is_valid_field(&field) {
            return Err(CriterionError::Parse(field.into_owned()));
        }
        Ok(Self { field, order })
    }

    /// Returns the sort field.
    #[inline]
    pub fn field(&self) -> &str {
        self.field.as_ref()
    }

    /// Returns the sort order.
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns the join path if the field spans a join.
    #[inline]
    pub fn join_path(&self) -> Option<JoinPath<'_>> {
        JoinPath::parse(self.field())
    }

    /// Returns the name of the custom sort handler for the field.
    #[inline]
    pub fn handler_name(&self) -> String {
        helper::format_handler_name(self.field())
    }

    /// Applies the criterion to the query.
    ///
    /// A custom sort handler for the field takes precedence over everything else.
    /// Otherwise a dotted field joins the referenced table at most once and orders by
    /// its column, while a plain field is ordered directly.
    pub fn apply(&self, adapter: &mut dyn QueryAdapter) {
        let field = self.field();
        let order = self.order;
        let handler_name = self.handler_name();
        if let Some(handler) = adapter.sort_handler(&handler_name) {
            tracing::debug!(
                field,
                handler = handler_name.as_str(),
                "sort with the custom handler"
            );
            handler(adapter, order);
        } else if let Some(path) = self.join_path() {
            let join_table = path.join_table();
            if adapter.has_join(join_table) {
                tracing::debug!(field, join_table, "reuse the existing join");
            } else {
                let (left_column, right_column) = path.join_columns();
                adapter.add_left_join(join_table, &left_column, &right_column);
            }
            tracing::debug!(field, flip = path.is_flipped(), "sort by the joined column");
            adapter.add_order_by(&path.sort_field(), order);
            adapter.restrict_projection_to(&path.projection());
        } else {
            tracing::debug!(field, "sort by the column");
            adapter.add_order_by(field, order);
        }
    }
}

impl fmt::Display for Criterion {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.order)
    }
}

impl FromStr for Criterion {
    type Err = CriterionError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::make(s, Order::default())
    }
}

/// Returns `true` if the field is either plain or a well-formed join path.
#[inline]
fn is_valid_field(field: &str) -> bool {
    !field.contains('.') || JoinPath::parse(field).is_some()
}

/// Regex for the sort directive.
static CRITERION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^,]+)(,(asc|desc))?$").expect("fail to create a regex for the sort directive")
});
