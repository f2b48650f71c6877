//! Generic Record Model
//!
//! Schema-described records for the dev data browser. Field values carry an
//! explicit type tag; there is no implicit coercion between types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field type tag (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
}

/// A typed field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
}

impl FieldValue {
    /// The type tag of this value
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::String(_) => FieldType::String,
            Self::Number(_) => FieldType::Number,
            Self::Boolean(_) => FieldType::Boolean,
            Self::Date(_) => FieldType::Date,
        }
    }
}

/// Schema describing one browsable collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSchema {
    pub collection: String,
    /// Field name to declared type, in no particular order
    pub fields: HashMap<String, FieldType>,
}

impl RecordSchema {
    /// Check a record against this schema: every field present must be
    /// declared and carry the declared type. Missing fields are allowed.
    pub fn validates(&self, record: &GenericRecord) -> bool {
        record.fields.iter().all(|(name, value)| {
            self.fields
                .get(name)
                .is_some_and(|declared| *declared == value.field_type())
        })
    }
}

/// One record in a browsable collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericRecord {
    pub id: String,
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> RecordSchema {
        RecordSchema {
            collection: "companies".into(),
            fields: HashMap::from([
                ("name".to_string(), FieldType::String),
                ("active".to_string(), FieldType::Boolean),
                ("revenue".to_string(), FieldType::Number),
            ]),
        }
    }

    #[test]
    fn test_schema_accepts_matching_record() {
        let record = GenericRecord {
            id: "c1".into(),
            fields: HashMap::from([
                ("name".to_string(), FieldValue::String("Acme".into())),
                ("active".to_string(), FieldValue::Boolean(true)),
            ]),
        };
        assert!(schema().validates(&record));
    }

    #[test]
    fn test_schema_rejects_wrong_type() {
        // "active" declared boolean, provided as string: no coercion
        let record = GenericRecord {
            id: "c1".into(),
            fields: HashMap::from([(
                "active".to_string(),
                FieldValue::String("true".into()),
            )]),
        };
        assert!(!schema().validates(&record));
    }

    #[test]
    fn test_schema_rejects_undeclared_field() {
        let record = GenericRecord {
            id: "c1".into(),
            fields: HashMap::from([("rating".to_string(), FieldValue::Number(4.5))]),
        };
        assert!(!schema().validates(&record));
    }

    #[test]
    fn test_field_value_tagged_wire_shape() {
        let json = serde_json::to_string(&FieldValue::Number(12.0)).unwrap();
        assert_eq!(json, r#"{"type":"number","value":12.0}"#);
        let value: FieldValue =
            serde_json::from_str(r#"{"type":"boolean","value":false}"#).unwrap();
        assert_eq!(value, FieldValue::Boolean(false));
    }
}
