use sortable_core::SortHandler;

/// An interface for the queried entity.
pub trait Entity {
    /// The table name.
    const TABLE_NAME: &'static str;

    /// Returns the custom sort handler with the name, e.g. `SortUserName` for `user_name`.
    ///
    /// Entities usually keep their handlers in a static
    /// [`SortHandlers`](sortable_core::SortHandlers) registry and look them up here.
    #[inline]
    fn sort_handler(_name: &str) -> Option<SortHandler> {
        None
    }
}
