use std::collections::HashMap;

use serde_json::Value;

use crate::types::DisplayState;

/// Process-external key-value store with get/set semantics keyed by field
/// name. The real store lives in the widget host and survives reopenings;
/// the core depends only on this contract.
pub trait SyncedStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value);
}

/// In-memory store: the test double, also usable as a shim by a headless
/// host that has nothing to persist.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl SyncedStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Write each display-state field under its own key (camelCase, matching
/// the host's field names).
pub fn save_state<S: SyncedStore>(store: &mut S, state: &DisplayState) {
    if let Ok(Value::Object(fields)) = serde_json::to_value(state) {
        for (key, value) in fields {
            store.set(&key, value);
        }
    }
}

/// Read display state back field by field. Missing keys fall back to the
/// field's default; a store with type-mismatched values falls back to the
/// full default state rather than erroring mid-restore.
pub fn load_state<S: SyncedStore>(store: &S) -> DisplayState {
    let defaults = DisplayState::default();
    let Ok(Value::Object(mut fields)) = serde_json::to_value(&defaults) else {
        return defaults;
    };
    for (key, value) in fields.iter_mut() {
        if let Some(stored) = store.get(key) {
            *value = stored;
        }
    }
    serde_json::from_value(Value::Object(fields)).unwrap_or(defaults)
}
