// src/mcp/schema.rs

use serde_json::{json, Map, Value};

use crate::blockchain::models::{Commitment, Encoding};

/// Builds the JSON Schema advertised as a tool's `inputSchema`.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    properties: Map<String, Value>,
    required: Vec<String>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &str, ty: &str, description: &str) -> Self {
        self.properties
            .insert(name.into(), json!({ "type": ty, "description": description }));
        self.required.push(name.into());
        self
    }

    pub fn optional(mut self, name: &str, ty: &str, description: &str) -> Self {
        self.properties
            .insert(name.into(), json!({ "type": ty, "description": description }));
        self
    }

    pub fn optional_enum(mut self, name: &str, values: &[&str], description: &str) -> Self {
        self.properties.insert(
            name.into(),
            json!({ "type": "string", "enum": values, "description": description }),
        );
        self
    }

    pub fn commitment(self) -> Self {
        self.optional_enum("commitment", &Commitment::VALUES, "Commitment level")
    }

    pub fn encoding(self) -> Self {
        self.optional_enum("encoding", &Encoding::VALUES, "Encoding for account data")
    }

    pub fn build(self) -> Value {
        let mut schema = json!({
            "type": "object",
            "properties": Value::Object(self.properties),
        });
        if !self.required.is_empty() {
            schema["required"] = json!(self.required);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_required_and_enum_properties() {
        let schema = SchemaBuilder::new()
            .required("address", "string", "Account address")
            .commitment()
            .build();
        assert_eq!(schema["required"], json!(["address"]));
        assert_eq!(
            schema["properties"]["commitment"]["enum"],
            json!(["finalized", "confirmed", "processed"])
        );
    }

    #[test]
    fn no_required_key_when_everything_is_optional() {
        let schema = SchemaBuilder::new().build();
        assert!(schema.get("required").is_none());
        assert_eq!(schema["properties"], json!({}));
    }
}
