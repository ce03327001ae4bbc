use serde_json::{json, Value};

/// Builds raw vehicle records. Starts from a record that passes validation.
pub struct VehicleRecordBuilder {
    record: Value,
}

impl VehicleRecordBuilder {
    pub fn new(model: &str) -> Self {
        Self {
            record: json!({
                "model": model,
                "price": 150,
                "color": "GREEN",
                "mileage": 1000,
                "components": ["ABS"],
            }),
        }
    }

    pub fn price(mut self, price: i64) -> Self {
        self.record["price"] = json!(price);
        self
    }

    pub fn mileage(mut self, mileage: i64) -> Self {
        self.record["mileage"] = json!(mileage);
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.record["color"] = json!(color);
        self
    }

    pub fn components(mut self, components: &[&str]) -> Self {
        self.record["components"] = json!(components);
        self
    }

    #[allow(dead_code)]
    pub fn without(mut self, field: &str) -> Self {
        if let Some(map) = self.record.as_object_mut() {
            map.remove(field);
        }
        self
    }

    pub fn build(self) -> Value {
        self.record
    }
}

/// Wrap records into a JSON document under `key`.
pub fn listing(key: &str, records: Vec<Value>) -> String {
    let mut document = serde_json::Map::new();
    document.insert(key.to_string(), Value::Array(records));
    Value::Object(document).to_string()
}
