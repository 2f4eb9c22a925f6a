//! Hash map construction with the crate's preferred hasher
//!
//! Row records and header tables are small string-keyed maps built once per
//! decode. They use ahash for speed with `DoS` resistance from random seeds.

use ahash::RandomState;
use std::collections::HashMap;

/// String-keyed map used for headers and row records
pub type AleMap<V> = HashMap<String, V, RandomState>;

/// Create a new `HashMap` with the ahash hasher
///
/// # Example
///
/// ```rust
/// use ale_core::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, i32>();
/// map.insert("key".to_string(), 42);
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V, RandomState> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashMap` with specific capacity and the ahash hasher
///
/// Pre-allocates for maps whose size is known up front, such as a row
/// record with one entry per declared column.
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V, RandomState> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}
