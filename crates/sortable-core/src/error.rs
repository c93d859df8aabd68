use self::CriterionError::*;
use std::{error, fmt};

/// An error resulting from building a sort criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionError {
    /// The sort directive does not match the grammar. Holds the raw directive.
    Parse(String),
    /// The order token is neither `asc` nor `desc`.
    InvalidOrder(String),
}

impl fmt::Display for CriterionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Parse(value) => write!(f, "unable to parse field name or order from `{value}`"),
            InvalidOrder(order) => write!(f, "invalid order value `{order}`"),
        }
    }
}

impl error::Error for CriterionError {}
