//! Declared output shape sent as `responseSchema` in `generationConfig`.
//!
//! A `Schema` is an ordered tree of typed fields with human-readable
//! descriptions. Object construction derives `required` and
//! `propertyOrdering` from the declaration order of the property list, so
//! every declared field is required and key order is part of the contract.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    String,
    Number,
    Object,
    Array,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_ordering: Option<Vec<String>>,
}

impl Schema {
    fn leaf(schema_type: SchemaType) -> Self {
        Schema {
            schema_type,
            description: None,
            items: None,
            properties: None,
            required: None,
            property_ordering: None,
        }
    }

    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::leaf(SchemaType::Number)
    }

    pub fn array(items: Schema) -> Self {
        Schema {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    /// Builds an object schema. All listed properties become required, and
    /// `propertyOrdering` follows the declaration order of `properties`.
    pub fn object(properties: Vec<(&str, Schema)>) -> Self {
        let ordering: Vec<String> = properties.iter().map(|(key, _)| key.to_string()).collect();
        let map: BTreeMap<String, Schema> = properties
            .into_iter()
            .map(|(key, schema)| (key.to_string(), schema))
            .collect();
        Schema {
            properties: Some(map),
            required: Some(ordering.clone()),
            property_ordering: Some(ordering),
            ..Self::leaf(SchemaType::Object)
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_serializes_type_and_description_only() {
        let schema = Schema::string().describe("The quiz question.");
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "STRING", "description": "The quiz question."})
        );
    }

    #[test]
    fn test_object_derives_required_and_ordering_from_declaration_order() {
        let schema = Schema::object(vec![
            ("question", Schema::string()),
            ("options", Schema::array(Schema::string())),
            ("correctAnswer", Schema::string()),
        ]);
        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(value["type"], "OBJECT");
        assert_eq!(
            value["required"],
            serde_json::json!(["question", "options", "correctAnswer"])
        );
        assert_eq!(
            value["propertyOrdering"],
            serde_json::json!(["question", "options", "correctAnswer"])
        );
        assert_eq!(value["properties"]["options"]["type"], "ARRAY");
        assert_eq!(value["properties"]["options"]["items"]["type"], "STRING");
    }

    #[test]
    fn test_array_of_objects_nests() {
        let schema = Schema::array(Schema::object(vec![(
            "objective",
            Schema::string().describe("A specific learning objective for the topic."),
        )]));
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["type"], "ARRAY");
        assert_eq!(value["items"]["type"], "OBJECT");
        assert_eq!(
            value["items"]["properties"]["objective"]["description"],
            "A specific learning objective for the topic."
        );
    }

    #[test]
    fn test_absent_fields_are_omitted_not_null() {
        let schema = Schema::number();
        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(json, r#"{"type":"NUMBER"}"#);
    }
}
