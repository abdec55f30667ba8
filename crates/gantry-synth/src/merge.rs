//! Deep merge of composed fragments into accumulated configuration.

use serde_json::Value;

/// Merge `update` into `base`, favoring `update` on conflicts.
///
/// Objects merge key by key; arrays and scalars are replaced wholesale,
/// since each composition pass already decided its full plugin and entry
/// lists. Consumers needing cumulative lists across passes must compose
/// them before merging once per target per pass.
pub fn merge_config(base: &mut Value, update: &Value) {
    match (base, update) {
        (Value::Object(base_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_config(base_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (slot, _) => {
            *slot = update.clone();
        }
    }
}
