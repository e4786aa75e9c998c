use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use inventory_config::ENTITY_KEY_FIELD;
use serde_json::Value;

use crate::{CoreError, Entity};

/// Folds ordered sequences into one, keeping a single element per key.
///
/// Elements keep the position where their key first appeared. When a key
/// shows up again, the later element replaces the earlier one wholesale.
/// Merging `[A, B]` with `[B', C]` gives `[A, B', C]`.
pub fn merge_by_key<T, K, F>(sequences: &[&[T]], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut merged: Vec<T> = Vec::new();

    for item in sequences.iter().flat_map(|seq| seq.iter()) {
        match positions.entry(key(item)) {
            Entry::Occupied(slot) => merged[*slot.get()] = item.clone(),
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(item.clone());
            }
        }
    }

    merged
}

/// Dedup key of an entity: its `id`, in canonical JSON form so that `1` and
/// `"1"` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(String);

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn entity_key(entity: &Entity) -> Result<EntityKey, CoreError> {
    match entity.get(ENTITY_KEY_FIELD) {
        None | Some(Value::Null) => Err(CoreError::MissingField {
            field: ENTITY_KEY_FIELD,
        }),
        Some(id) => Ok(EntityKey(id.to_string())),
    }
}

/// [`merge_by_key`] over entity records keyed by `id`.
pub fn merge_entities(sequences: &[&[Entity]]) -> Result<Vec<Entity>, CoreError> {
    let keyed = sequences
        .iter()
        .map(|seq| {
            seq.iter()
                .map(|entity| Ok((entity_key(entity)?, entity.clone())))
                .collect::<Result<Vec<_>, CoreError>>()
        })
        .collect::<Result<Vec<_>, CoreError>>()?;
    let slices: Vec<&[(EntityKey, Entity)]> = keyed.iter().map(Vec::as_slice).collect();

    Ok(merge_by_key(&slices, |pair| pair.0.clone())
        .into_iter()
        .map(|(_, entity)| entity)
        .collect())
}
