use crate::{Order, SharedString, helper};
use std::{collections::HashMap, fmt, sync::Arc};

/// A custom sort handler which takes over joining and ordering for a field.
pub type SortHandler = Arc<dyn Fn(&mut dyn QueryAdapter, Order) + Send + Sync>;

/// Query building capabilities required to apply a sort criterion.
///
/// An adapter is owned by a single request. Criteria are applied to it one after another,
/// so the first applied criterion becomes the primary sort key.
pub trait QueryAdapter {
    /// Returns `true` if the query already joins the table.
    fn has_join(&self, table: &str) -> bool;

    /// Adds a `LEFT JOIN` on the table with the condition `left_column = right_column`.
    fn add_left_join(&mut self, table: &str, left_column: &str, right_column: &str);

    /// Appends a sort key.
    fn add_order_by(&mut self, column: &str, order: Order);

    /// Restricts the selected columns to the pattern, e.g. `orders.*`.
    fn restrict_projection_to(&mut self, pattern: &str);

    /// Looks up a custom sort handler provided by the queried entity.
    #[inline]
    fn sort_handler(&self, _name: &str) -> Option<SortHandler> {
        None
    }
}

/// A registry of custom sort handlers keyed by handler name.
#[derive(Clone, Default)]
pub struct SortHandlers {
    /// Handlers.
    handlers: HashMap<SharedString, SortHandler>,
}

impl SortHandlers {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for the field under its derived handler name.
    pub fn register<F>(&mut self, field: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut dyn QueryAdapter, Order) + Send + Sync + 'static,
    {
        let name = helper::format_handler_name(field);
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    /// Returns the handler with the name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<SortHandler> {
        self.handlers.get(name).cloned()
    }

    /// Returns `true` if a handler with the name exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns the number of handlers.
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if there are no handlers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for SortHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
