use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::country;
use crate::errors::{GenerationError, Result};

/// Declarative, JSON-schema-like description of a generated field.
///
/// Every knob is optional; an empty schema is valid and describes an
/// unconstrained field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FieldSchema {
    /// Value kind of the field.
    #[serde(rename = "type")]
    pub field_type: Option<FieldType>,
    /// Semantic format hint (e.g. `email`, `date`, `uuid`).
    pub format: Option<String>,
    /// Regex pattern string values must satisfy.
    pub pattern: Option<String>,
    /// Closed set of admissible values.
    pub enum_values: Option<Vec<serde_json::Value>>,
    /// Whether `default_value` should be emitted instead of a generated one.
    pub use_default: bool,
    /// Value emitted when `use_default` is set.
    pub default_value: Option<serde_json::Value>,
    /// Inclusive numeric lower bound.
    pub minimum: Option<i64>,
    /// Inclusive numeric upper bound.
    pub maximum: Option<i64>,
    /// Minimum string length.
    pub min_length: Option<usize>,
    /// Maximum string length.
    pub max_length: Option<usize>,
    /// Exact string length.
    pub length: Option<usize>,
    /// Element schemas for array fields.
    pub items: Option<Vec<FieldSchema>>,
    /// Country code for phone-shaped fields.
    pub country_code: Option<String>,
    /// Property names that must be present on object fields.
    pub required: Option<Vec<String>>,
    /// Nested property schemas for object fields.
    pub properties: Option<BTreeMap<String, FieldSchema>>,
}

/// Value kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// Validate internal consistency of a field schema.
///
/// This checks:
/// - bound ordering (`minimum <= maximum`, `min_length <= max_length`)
/// - `length` against the explicit length bounds
/// - non-empty enum lists
/// - that `pattern` compiles and `country_code` is registered
/// - that every `required` name exists in `properties`
///
/// Nested `items` and `properties` schemas are validated recursively.
pub fn validate_field_schema(schema: &FieldSchema) -> Result<()> {
    validate_at(schema, "$")
}

fn validate_at(schema: &FieldSchema, path: &str) -> Result<()> {
    if let (Some(min), Some(max)) = (schema.minimum, schema.maximum)
        && min > max
    {
        return Err(invalid(path, format!("minimum {min} exceeds maximum {max}")));
    }

    if let (Some(min), Some(max)) = (schema.min_length, schema.max_length)
        && min > max
    {
        return Err(invalid(
            path,
            format!("min_length {min} exceeds max_length {max}"),
        ));
    }

    if let Some(length) = schema.length {
        if schema.min_length.is_some_and(|min| length < min)
            || schema.max_length.is_some_and(|max| length > max)
        {
            return Err(invalid(path, format!("length {length} outside length bounds")));
        }
    }

    if schema.enum_values.as_ref().is_some_and(Vec::is_empty) {
        return Err(invalid(path, "enum_values must not be empty".to_string()));
    }

    if let Some(pattern) = &schema.pattern
        && let Err(err) = regex::Regex::new(pattern)
    {
        return Err(invalid(path, format!("pattern does not compile: {err}")));
    }

    if let Some(code) = &schema.country_code
        && country::pattern_for(code).is_none()
    {
        return Err(invalid(path, format!("unknown country code {code:?}")));
    }

    if schema.use_default && schema.default_value.is_none() {
        return Err(invalid(
            path,
            "use_default set without a default_value".to_string(),
        ));
    }

    if let Some(required) = &schema.required {
        for name in required {
            let known = schema
                .properties
                .as_ref()
                .is_some_and(|properties| properties.contains_key(name));
            if !known {
                return Err(invalid(path, format!("required property {name:?} not declared")));
            }
        }
    }

    if let Some(items) = &schema.items {
        for (idx, item) in items.iter().enumerate() {
            validate_at(item, &format!("{path}.items[{idx}]"))?;
        }
    }

    if let Some(properties) = &schema.properties {
        for (name, property) in properties {
            validate_at(property, &format!("{path}.{name}"))?;
        }
    }

    Ok(())
}

fn invalid(path: &str, detail: String) -> GenerationError {
    GenerationError::InvalidSchema(format!("{path}: {detail}"))
}
