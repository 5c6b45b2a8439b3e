use crate::{
    AdditionKind, AdditionList, FieldType, MaskMetaData, MetaDataError, PersistenceError,
    PersistenceResult, Record, SchemaRecord, SchemaRecordField, SchemaRegistry, Value,
};
use std::path::Path;

const ADDITIONS_KEY: &str = "additions";

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(number) => {
            if number.is_f64() {
                "float"
            } else {
                "integer"
            }
        }
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn property_value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Boolean(x) => serde_json::Value::from(*x),
        Value::Integer(x) => serde_json::Value::from(*x),
        Value::Float(x) => serde_json::Value::from(*x),
        Value::String(x) => serde_json::Value::from(x.as_str()),
        Value::FloatVector(x) => serde_json::Value::from(x.clone()),
    }
}

fn json_to_property_value(
    field: &SchemaRecordField,
    value: &serde_json::Value,
) -> Result<Value, MetaDataError> {
    let mismatch = || MetaDataError::TypeMismatch {
        field: field.name().to_string(),
        expected: field.field_type().name(),
        found: json_type_name(value),
    };

    let property_value = match field.field_type() {
        FieldType::String => Value::String(value.as_str().ok_or_else(mismatch)?.to_string()),
        FieldType::Integer | FieldType::TextureSize => {
            Value::Integer(value.as_i64().ok_or_else(mismatch)?)
        }
        // Integers written by hand are fine for float fields
        FieldType::Float => Value::Float(value.as_f64().ok_or_else(mismatch)?),
        FieldType::Boolean => Value::Boolean(value.as_bool().ok_or_else(mismatch)?),
        FieldType::FloatVector(length) => {
            let components = value.as_array().ok_or_else(mismatch)?;
            if components.len() != length {
                return Err(mismatch());
            }

            Value::FloatVector(
                components
                    .iter()
                    .map(|x| x.as_f64().ok_or_else(mismatch))
                    .collect::<Result<Vec<_>, _>>()?,
            )
        }
    };

    crate::field_binding::check_value(field, &property_value)?;
    Ok(property_value)
}

pub fn record_to_json(record: &Record) -> serde_json::Map<String, serde_json::Value> {
    let mut map = serde_json::Map::default();
    for (field, value) in record.iter() {
        map.insert(field.name().to_string(), property_value_to_json(value));
    }

    map
}

/// Reads a record, checking every stored property against the schema. Properties the schema
/// doesn't know fail the load. Properties missing from storage get their defaults.
pub fn record_from_json(
    schema: &SchemaRecord,
    object: &serde_json::Map<String, serde_json::Value>,
    ignored_keys: &[&str],
) -> PersistenceResult<Record> {
    for key in object.keys() {
        if schema.find_field(key).is_none() && !ignored_keys.contains(&key.as_str()) {
            return Err(MetaDataError::UnknownField(key.clone()).into());
        }
    }

    let mut values = Vec::with_capacity(schema.fields().len());
    for field in schema.fields() {
        match object.get(field.name()) {
            Some(value) => values.push(json_to_property_value(field, value)?),
            None => {
                log::warn!(
                    "{} record is missing field '{}', using its default",
                    schema.kind(),
                    field.name()
                );
                values.push(field.default_value().clone());
            }
        }
    }

    Ok(Record::restore(schema, values))
}

/// Sequences written by older tools are stored with `"type": "image"`. They are told apart from
/// images by carrying keys only the sequence schema knows.
fn is_legacy_sequence(
    kind: &str,
    object: &serde_json::Map<String, serde_json::Value>,
) -> bool {
    if kind != AdditionKind::Image.name() {
        return false;
    }

    let registry = SchemaRegistry::get();
    let image = registry.addition_schema(AdditionKind::Image);
    let sequence = registry.addition_schema(AdditionKind::Sequence);
    object.keys().any(|key| image.find_field(key).is_none())
        && object.keys().all(|key| sequence.find_field(key).is_some())
}

/// Reads an addition, picking its schema from the stored `type`
pub fn addition_from_json(value: &serde_json::Value) -> PersistenceResult<Record> {
    let object = value
        .as_object()
        .ok_or_else(|| format!("addition must be an object, found {}", json_type_name(value)))?;
    let kind = object
        .get("type")
        .and_then(|x| x.as_str())
        .ok_or_else(|| "addition has no type".to_string())?;

    if is_legacy_sequence(kind, object) {
        log::warn!(
            "Addition '{}' is stored as an image but has sequence fields, loading it as one",
            object.get("name").and_then(|x| x.as_str()).unwrap_or_default()
        );
        let schema = SchemaRegistry::get().addition_schema(AdditionKind::Sequence);
        let mut record = record_from_json(schema, object, &[])?;
        record.set_value("type", Value::from(AdditionKind::Sequence.name()))?;
        return Ok(record);
    }

    let schema = SchemaRegistry::get().schema_for(kind)?;
    record_from_json(schema, object, &[])
}

pub fn mask_meta_data_to_json(meta_data: &MaskMetaData) -> serde_json::Value {
    let mut map = record_to_json(meta_data.record());
    let additions: Vec<_> = meta_data
        .additions()
        .iter()
        .map(|x| serde_json::Value::Object(record_to_json(x)))
        .collect();
    map.insert(ADDITIONS_KEY.to_string(), serde_json::Value::Array(additions));
    serde_json::Value::Object(map)
}

pub fn mask_meta_data_from_json(value: &serde_json::Value) -> PersistenceResult<MaskMetaData> {
    let object = value.as_object().ok_or_else(|| {
        format!(
            "mask metadata must be an object, found {}",
            json_type_name(value)
        )
    })?;

    let schema = SchemaRegistry::get().mask_schema();
    let record = record_from_json(schema, object, &[ADDITIONS_KEY])?;

    let mut additions = Vec::default();
    match object.get(ADDITIONS_KEY) {
        Some(serde_json::Value::Array(stored_additions)) => {
            for stored_addition in stored_additions {
                additions.push(addition_from_json(stored_addition)?);
            }
        }
        Some(other) => {
            return Err(PersistenceError::from(format!(
                "additions must be an array, found {}",
                json_type_name(other)
            )))
        }
        // Older files have no additions
        None => {}
    }

    Ok(MaskMetaData::restore(record, AdditionList::new(additions)))
}

#[profiling::function]
pub fn read_meta_data(path: &Path) -> PersistenceResult<serde_json::Value> {
    let contents = std::fs::read_to_string(path)?;
    let value = {
        profiling::scope!("serde_json::from_str");
        serde_json::from_str(&contents)?
    };
    Ok(value)
}

#[profiling::function]
pub fn write_meta_data(
    path: &Path,
    value: &serde_json::Value,
) -> PersistenceResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let contents = {
        profiling::scope!("serde_json::to_string_pretty");
        serde_json::to_string_pretty(value)?
    };
    std::fs::write(path, contents)?;
    Ok(())
}
