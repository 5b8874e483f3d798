use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// A single selected row, keyed by the output names of the SELECT list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    pub field_values: Vec<FieldValue>,
}

impl Row {
    pub fn new(field_values: Vec<FieldValue>) -> Self {
        Row { field_values }
    }

    /// Appends a field; convenient for fixtures and adapters.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.field_values.push(FieldValue::new(name, value));
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    /// Looks a field up by name, treating absent fields as SQL NULL.
    pub fn get_value(&self, field: &str) -> Value {
        self.get(field).map(|f| f.value.clone()).unwrap_or(Value::Null)
    }
}

impl Default for Row {
    fn default() -> Self {
        Row::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let row = Row::default().field("Id", 7i64).field("name", "Ava");
        assert_eq!(row.get_value("id"), Value::Int(7));
        assert_eq!(row.get_value("NAME"), Value::String("Ava".into()));
    }

    #[test]
    fn missing_field_reads_as_null() {
        let row = Row::default().field("id", 1i64);
        assert_eq!(row.get_value("rating"), Value::Null);
    }
}
