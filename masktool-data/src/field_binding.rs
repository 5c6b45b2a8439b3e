//! Conversion between stored values and what an editing surface shows or receives.
//!
//! Everything here is a pure function of the field declaration and the input. Nothing is
//! mutated, so a rejected edit leaves the record exactly as it was.

use crate::{
    texture_size_index, FieldCriticality, FieldType, MetaDataError, MetaDataResult,
    SchemaRecordField, Value, TEXTURE_SIZES,
};

/// A value as produced by an editing surface
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FieldInput<'a> {
    /// Free text, used for strings and numbers. Vectors accept all components separated by
    /// commas.
    Text(&'a str),
    /// Checkbox state
    Toggle(bool),
    /// Index into a fixed list of options, used for texture sizes
    Selection(usize),
    /// One component of a float vector
    Component { index: usize, text: &'a str },
}

impl<'a> FieldInput<'a> {
    fn kind_name(&self) -> &'static str {
        match self {
            FieldInput::Text(_) => "text",
            FieldInput::Toggle(_) => "toggle",
            FieldInput::Selection(_) => "selection",
            FieldInput::Component { .. } => "vector component",
        }
    }
}

/// How a field should be presented for editing
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDisplay {
    /// Shown but not editable
    Label(String),
    Text(String),
    Toggle(bool),
    Selection {
        selected: usize,
        options: Vec<String>,
    },
    Components(Vec<String>),
}

/// Validation state of a single field, drives field highlighting
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldState {
    Ok,
    Warning,
    Error,
}

/// Floats are written so that they always read back as floats ("1.0" rather than "1")
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

fn parse_float(
    field: &SchemaRecordField,
    text: &str,
) -> MetaDataResult<f64> {
    match text.trim().parse::<f64>() {
        // JSON can't hold nan or inf
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MetaDataError::NumericParse {
            field: field.name().to_string(),
            text: text.to_string(),
        }),
    }
}

fn parse_integer(
    field: &SchemaRecordField,
    text: &str,
) -> MetaDataResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| MetaDataError::NumericParse {
            field: field.name().to_string(),
            text: text.to_string(),
        })
}

fn type_mismatch(
    field: &SchemaRecordField,
    found: &'static str,
) -> MetaDataError {
    MetaDataError::TypeMismatch {
        field: field.name().to_string(),
        expected: field.field_type().name(),
        found,
    }
}

/// Rejects values that can't be stored in the field, checking texture sizes against the
/// allowed list
pub fn check_value(
    field: &SchemaRecordField,
    value: &Value,
) -> MetaDataResult<()> {
    if !value.matches_field_type(&field.field_type()) {
        return Err(type_mismatch(field, value.type_name()));
    }

    if field.field_type() == FieldType::TextureSize {
        // matches_field_type guarantees an integer here
        let size = value.as_integer().unwrap_or_default();
        if texture_size_index(size).is_none() {
            return Err(MetaDataError::InvalidEnumValue {
                field: field.name().to_string(),
                value: size,
            });
        }
    }

    Ok(())
}

/// Produces the value that `input` would store in `field`. `current` is needed for vector
/// components, which replace one element of the existing vector.
pub fn coerce(
    field: &SchemaRecordField,
    current: &Value,
    input: FieldInput,
) -> MetaDataResult<Value> {
    if field.is_read_only() {
        return Err(MetaDataError::ReadOnlyField(field.name().to_string()));
    }

    let value = match (field.field_type(), input) {
        (FieldType::String, FieldInput::Text(text)) => Value::String(text.to_string()),
        (FieldType::Integer, FieldInput::Text(text)) => Value::Integer(parse_integer(field, text)?),
        (FieldType::Float, FieldInput::Text(text)) => Value::Float(parse_float(field, text)?),
        (FieldType::Boolean, FieldInput::Toggle(state)) => Value::Boolean(state),
        (FieldType::TextureSize, FieldInput::Selection(index)) => {
            // A selection past the option list names no allowed size
            let size = TEXTURE_SIZES
                .get(index)
                .ok_or_else(|| MetaDataError::InvalidEnumValue {
                    field: field.name().to_string(),
                    value: index as i64,
                })?;
            Value::Integer(*size)
        }
        (FieldType::TextureSize, FieldInput::Text(text)) => {
            Value::Integer(parse_integer(field, text)?)
        }
        (FieldType::FloatVector(length), FieldInput::Component { index, text }) => {
            if index >= length {
                return Err(MetaDataError::IndexOutOfRange { index, len: length });
            }

            let mut components = current
                .as_float_vector()
                .ok_or_else(|| type_mismatch(field, current.type_name()))?
                .to_vec();
            components[index] = parse_float(field, text)?;
            Value::FloatVector(components)
        }
        (FieldType::FloatVector(length), FieldInput::Text(text)) => {
            let components = text
                .split(',')
                .map(|component| parse_float(field, component))
                .collect::<MetaDataResult<Vec<f64>>>()?;

            // The vector length is part of the schema, a different count is a typing error
            if components.len() != length {
                return Err(MetaDataError::NumericParse {
                    field: field.name().to_string(),
                    text: text.to_string(),
                });
            }

            Value::FloatVector(components)
        }
        (_, input) => return Err(type_mismatch(field, input.kind_name())),
    };

    check_value(field, &value)?;
    Ok(value)
}

/// Single-line text form of a value. Feeding it back through `FieldInput::Text` yields the
/// same value for every field type except booleans.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::Boolean(x) => x.to_string(),
        Value::Integer(x) => x.to_string(),
        Value::Float(x) => format_float(*x),
        Value::String(x) => x.clone(),
        Value::FloatVector(x) => x
            .iter()
            .map(|component| format_float(*component))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

pub fn render(
    field: &SchemaRecordField,
    value: &Value,
) -> FieldDisplay {
    if field.is_read_only() {
        return FieldDisplay::Label(render_text(value));
    }

    match (field.field_type(), value) {
        (FieldType::Boolean, Value::Boolean(x)) => FieldDisplay::Toggle(*x),
        (FieldType::TextureSize, Value::Integer(x)) => FieldDisplay::Selection {
            selected: texture_size_index(*x).unwrap_or_default(),
            options: TEXTURE_SIZES.iter().map(|x| x.to_string()).collect(),
        },
        (FieldType::FloatVector(_), Value::FloatVector(x)) => {
            FieldDisplay::Components(x.iter().map(|x| format_float(*x)).collect())
        }
        _ => FieldDisplay::Text(render_text(value)),
    }
}

/// Strings count as empty when they have no characters, anything else when it still holds
/// the schema default
pub fn is_empty_value(
    field: &SchemaRecordField,
    value: &Value,
) -> bool {
    match value {
        Value::String(x) => x.is_empty(),
        _ => value == field.default_value(),
    }
}

pub fn field_state(
    field: &SchemaRecordField,
    value: &Value,
    criticality: &FieldCriticality,
) -> FieldState {
    if !is_empty_value(field, value) {
        return FieldState::Ok;
    }

    if criticality.is_critical(field.name()) {
        FieldState::Error
    } else if criticality.is_desired(field.name()) {
        FieldState::Warning
    } else {
        FieldState::Ok
    }
}
