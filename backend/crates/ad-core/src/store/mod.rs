//! In-memory stores backing the dashboard.
//!
//! Each store owns one collection behind an `Arc`. `list()` hands out that
//! `Arc` as a read-only snapshot; mutations go through `Arc::make_mut`, so a
//! snapshot taken before a mutation keeps its contents (the collection is
//! copied only while an older snapshot is still held). All validation runs
//! before the collection is touched, so a failed call leaves the store as it
//! was.

pub mod role_store;
pub mod user_store;

use std::sync::Arc;

/// Immutable view of a store's collection at one revision.
pub type Snapshot<T> = Arc<Vec<T>>;
