//! Field type checks against a small schema file
//!
//! A schema is a JSON object mapping field names to one of `str`, `int` or
//! `float`, e.g. `{"id": "int", "price": "float", "name": "str"}`.

use crate::error::{SchemaError, SchemaResult};
use crate::table::{is_populated, Table};
use serde_json::Value;

/// Expected type of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Str,
    Int,
    Float,
    /// A type name the validator does not know; reported, never matched
    Unknown(String),
}

impl FieldType {
    fn parse(name: &str) -> Self {
        match name {
            "str" => FieldType::Str,
            "int" => FieldType::Int,
            "float" => FieldType::Float,
            other => FieldType::Unknown(other.to_string()),
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldType::Str, _) => true,
            (FieldType::Int, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (FieldType::Int, Value::String(s)) => s.trim().parse::<i64>().is_ok(),
            (FieldType::Float, Value::Number(_)) => true,
            (FieldType::Float, Value::String(s)) => s.trim().parse::<f64>().is_ok(),
            _ => false,
        }
    }

    fn name(&self) -> &str {
        match self {
            FieldType::Str => "str",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Unknown(name) => name,
        }
    }
}

/// Ordered field → type expectations
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<(String, FieldType)>,
}

impl Schema {
    /// Build a schema from its JSON form
    pub fn from_value(value: Value) -> SchemaResult<Self> {
        let Value::Object(map) = value else {
            return Err(SchemaError::new(
                "Schema must be a JSON object mapping field -> type",
                None,
            ));
        };

        let fields = map
            .into_iter()
            .map(|(field, ty)| match ty {
                Value::String(name) => Ok((field, FieldType::parse(&name))),
                other => Err(SchemaError::new(
                    format!("Schema type for '{}' must be a string, got {}", field, other),
                    None,
                )),
            })
            .collect::<SchemaResult<Vec<_>>>()?;

        Ok(Self { fields })
    }

    /// Check every row against the schema. Row numbers in messages are 1-based.
    pub fn validate(&self, table: &Table) -> Vec<String> {
        let mut errors = Vec::new();

        for (idx, row) in table.rows().iter().enumerate() {
            let row_no = idx + 1;
            for (field, ty) in &self.fields {
                let value = match row.get(field) {
                    Some(v) if is_populated(v) => v,
                    _ => {
                        errors.push(format!("row {}: missing {}", row_no, field));
                        continue;
                    }
                };

                match ty {
                    FieldType::Unknown(name) => {
                        errors.push(format!("unknown schema type for {}: {}", field, name));
                    }
                    ty if !ty.accepts(value) => errors.push(format!(
                        "row {}: field {} expected {}, got {}",
                        row_no,
                        field,
                        ty.name(),
                        value
                    )),
                    _ => {}
                }
            }
        }

        errors
    }
}
