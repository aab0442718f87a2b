use near_sdk::serde::Serialize;
use near_sdk::serde_json::{self, Map, Value, json};
use near_sdk::{AccountId, env};

use super::{PREFIX, STANDARD, VERSION};

/// NEP-297 envelope builder for engine events. The acting account is always
/// the first data field.
pub(crate) struct EventBuilder {
    event: &'static str,
    data: Map<String, Value>,
}

impl EventBuilder {
    pub(crate) fn new(event: &'static str, operation: &'static str, actor_id: &AccountId) -> Self {
        let mut data = Map::new();
        data.insert("operation".to_string(), json!(operation));
        data.insert("actor_id".to_string(), json!(actor_id));
        Self { event, data }
    }

    pub(crate) fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.data.insert(key.to_string(), value);
        }
        self
    }

    pub(crate) fn emit(self) {
        let payload = json!({
            "standard": STANDARD,
            "version": VERSION,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, payload));
    }
}

/// NEP-297 envelope under the `nep171` standard, for indexer interop.
pub(crate) struct Nep171Event {
    event: &'static str,
    version: &'static str,
    data: Map<String, Value>,
}

impl Nep171Event {
    pub(crate) fn new(event: &'static str, version: &'static str) -> Self {
        Self {
            event,
            version,
            data: Map::new(),
        }
    }

    pub(crate) fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.data.insert(key.to_string(), value);
        }
        self
    }

    pub(crate) fn field_opt<T: Serialize>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub(crate) fn emit(self) {
        let payload = json!({
            "standard": "nep171",
            "version": self.version,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, payload));
    }
}
