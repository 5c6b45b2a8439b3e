use crate::FieldType;

/// A single property value stored in a record
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Fixed-length vector, the length is set by the schema default and never changes
    FloatVector(Vec<f64>),
}

impl Value {
    /// Name of the value's type class, used when reporting mismatches
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::FloatVector(_) => "float vector",
        }
    }

    /// Checks the type class only. Enumeration membership of texture sizes is checked by the
    /// coercion layer so that it can report `InvalidEnumValue` instead of a mismatch.
    pub fn matches_field_type(
        &self,
        field_type: &FieldType,
    ) -> bool {
        match (self, field_type) {
            (Value::Boolean(_), FieldType::Boolean) => true,
            (Value::Integer(_), FieldType::Integer) => true,
            (Value::Integer(_), FieldType::TextureSize) => true,
            (Value::Float(_), FieldType::Float) => true,
            (Value::String(_), FieldType::String) => true,
            (Value::FloatVector(values), FieldType::FloatVector(length)) => {
                values.len() == *length
            }
            _ => false,
        }
    }

    //
    // Boolean
    //
    pub fn is_boolean(&self) -> bool {
        match self {
            Value::Boolean(_) => true,
            _ => false,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(x) => Some(*x),
            _ => None,
        }
    }

    //
    // Integer
    //
    pub fn is_integer(&self) -> bool {
        match self {
            Value::Integer(_) => true,
            _ => false,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(x) => Some(*x),
            _ => None,
        }
    }

    //
    // Float
    //
    pub fn is_float(&self) -> bool {
        match self {
            Value::Float(_) => true,
            _ => false,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Numeric view of integer and float values
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(x) => Some(*x as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    //
    // String
    //
    pub fn is_string(&self) -> bool {
        match self {
            Value::String(_) => true,
            _ => false,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(x) => Some(x.as_str()),
            _ => None,
        }
    }

    //
    // FloatVector
    //
    pub fn is_float_vector(&self) -> bool {
        match self {
            Value::FloatVector(_) => true,
            _ => false,
        }
    }

    pub fn as_float_vector(&self) -> Option<&[f64]> {
        match self {
            Value::FloatVector(x) => Some(x.as_slice()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
