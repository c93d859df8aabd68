#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]

mod entity;
mod join;
mod order;
mod query;

pub use entity::Entity;
pub use join::JoinOn;
pub use order::QueryOrder;
pub use query::QueryBuilder;

#[doc(no_inline)]
pub use sortable_core::{Criterion, CriterionError, Order, QueryAdapter, SortConfig, SortHandler};
