use crate::error::CriterionError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// The ascending order.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// The descending order.
    #[serde(rename = "desc")]
    Descending,
}

impl Order {
    /// Returns the order token as it appears in a sort directive.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }

    /// Returns the SQL keyword for the order.
    #[inline]
    pub fn as_sql(&self) -> &'static str {
        match self {
            Order::Ascending => "ASC",
            Order::Descending => "DESC",
        }
    }

    /// Returns `true` if the sort order is ascending.
    #[inline]
    pub fn is_ascending(&self) -> bool {
        matches!(self, Order::Ascending)
    }

    /// Returns `true` if the sort order is descending.
    #[inline]
    pub fn is_descending(&self) -> bool {
        matches!(self, Order::Descending)
    }
}

impl fmt::Display for Order {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = CriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Order::Ascending),
            "desc" => Ok(Order::Descending),
            _ => Err(CriterionError::InvalidOrder(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Order;
    use crate::CriterionError;

    #[test]
    fn it_parses_order() {
        assert_eq!("asc".parse::<Order>(), Ok(Order::Ascending));
        assert_eq!("desc".parse::<Order>(), Ok(Order::Descending));
        assert_eq!(
            "DESC".parse::<Order>(),
            Err(CriterionError::InvalidOrder("DESC".to_owned()))
        );
        assert!("".parse::<Order>().is_err());
    }

    #[test]
    fn it_formats_order() {
        assert_eq!(Order::default(), Order::Ascending);
        assert_eq!(Order::Descending.to_string(), "desc");
        assert_eq!(Order::Descending.as_sql(), "DESC");
        assert!(Order::Ascending.is_ascending());
        assert!(!Order::Ascending.is_descending());
    }
}
