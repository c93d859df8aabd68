#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]

mod adapter;
mod config;
mod criterion;
mod error;
mod helper;
mod join_path;
mod order;

pub use self::criterion::Criterion;
pub use adapter::{QueryAdapter, SortHandler, SortHandlers};
pub use config::SortConfig;
pub use error::CriterionError;
pub use join_path::JoinPath;
pub use order::Order;

/// A value which is initialized on the first access.
pub type LazyLock<T> = std::sync::LazyLock<T>;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;
