//! Map key and value membership checks
//!
//! The positive checks fail with `NotFound`, the negative ones with
//! `AlreadyExists`, so a caller can distinguish "lookup target missing" from
//! "insertion target taken" without parsing messages. Value checks walk the
//! entries, same cost as the key-by-key scan the operation implies.

use crate::errors::{PreconditionError, PreconditionResult};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Check that a map contains the given key
pub fn check_contains_key<K, V>(map: &HashMap<K, V>, key: &K) -> PreconditionResult<()>
where
    K: Eq + Hash + fmt::Debug,
{
    if map.contains_key(key) {
        Ok(())
    } else {
        Err(PreconditionError::NotFound(format!(
            "Map does not contain key {:?}",
            key
        )))
    }
}

/// Check that a map does not contain the given key
pub fn check_not_contains_key<K, V>(map: &HashMap<K, V>, key: &K) -> PreconditionResult<()>
where
    K: Eq + Hash + fmt::Debug,
{
    if map.contains_key(key) {
        Err(PreconditionError::AlreadyExists(format!(
            "Map already contains key {:?}",
            key
        )))
    } else {
        Ok(())
    }
}

/// Check that some entry of the map has the given value
pub fn check_contains_value<K, V>(map: &HashMap<K, V>, value: &V) -> PreconditionResult<()>
where
    K: Eq + Hash,
    V: PartialEq + fmt::Debug,
{
    if map.values().any(|v| v == value) {
        Ok(())
    } else {
        Err(PreconditionError::NotFound(format!(
            "Map does not contain value {:?}",
            value
        )))
    }
}

/// Check that no entry of the map has the given value
pub fn check_not_contains_value<K, V>(map: &HashMap<K, V>, value: &V) -> PreconditionResult<()>
where
    K: Eq + Hash,
    V: PartialEq + fmt::Debug,
{
    if map.values().any(|v| v == value) {
        Err(PreconditionError::AlreadyExists(format!(
            "Map already contains value {:?}",
            value
        )))
    } else {
        Ok(())
    }
}
