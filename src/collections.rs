use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Insertion order is kept, which the search relies on for tie breaking
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Ordered set counterpart of FxIndexMap
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
