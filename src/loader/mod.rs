//! Loaders that build graphs from external adjacency-list records.
//!
//! The core graph types never read raw input themselves; the loader owns
//! the uniqueness bookkeeping (every referenced label becomes exactly one
//! vertex, every adjacency exactly one edge) and hands over fully-built
//! graphs that satisfy the store invariants.

mod adjacency_list;

pub use adjacency_list::{
    load_arena, load_arena_str, load_directed, load_directed_str, LoadError, LoadResult,
};
