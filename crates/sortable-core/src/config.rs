use crate::Order;
use serde::Deserialize;
use toml::{Table, Value};

/// Sort settings read from the `[sort]` table of a TOML config.
///
/// ```toml
/// [sort]
/// default-order = "desc"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SortConfig {
    /// The order used when a directive has no explicit order token.
    default_order: Order,
}

impl SortConfig {
    /// Creates a new instance.
    #[inline]
    pub fn new(default_order: Order) -> Self {
        Self { default_order }
    }

    /// Reads the `[sort]` table of the config, falling back to defaults.
    pub fn from_toml(config: &Table) -> Self {
        let Some(table) = config.get("sort").and_then(Value::as_table) else {
            return Self::default();
        };
        let default_order = match table.get("default-order") {
            Some(Value::String(order)) => order.parse().unwrap_or_else(|err| {
                tracing::warn!("fail to parse the default sort order: {err}");
                Order::default()
            }),
            Some(value) => {
                tracing::warn!(
                    "default sort order should be a string, found `{}`",
                    value.type_str()
                );
                Order::default()
            }
            None => Order::default(),
        };
        Self { default_order }
    }

    /// Returns the default order.
    #[inline]
    pub fn default_order(&self) -> Order {
        self.default_order
    }
}
