use crate::field_binding::{self, FieldDisplay, FieldInput};
use crate::{
    MetaDataError, MetaDataResult, SchemaRecord, SchemaRecordField, SchemaRegistry, Value,
};

/// Field values for one editable entity, kept in the same order as its schema. The key set is
/// always exactly the schema's, fields can't be added or removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    schema: SchemaRecord,
    values: Vec<Value>,
}

impl Record {
    /// A record holding fresh copies of the schema defaults
    pub fn new(schema: &SchemaRecord) -> Self {
        Record {
            schema: schema.clone(),
            values: schema.default_values(),
        }
    }

    /// Defaults for a kind looked up by name, fails for kinds that have no schema
    pub fn default_for_kind(kind: &str) -> MetaDataResult<Self> {
        Ok(Record::new(SchemaRegistry::get().schema_for(kind)?))
    }

    /// Rebuilds a record from values already checked against the schema, in field order
    pub(crate) fn restore(
        schema: &SchemaRecord,
        values: Vec<Value>,
    ) -> Self {
        assert_eq!(schema.fields().len(), values.len());
        Record {
            schema: schema.clone(),
            values,
        }
    }

    pub fn schema(&self) -> &SchemaRecord {
        &self.schema
    }

    pub fn kind(&self) -> &str {
        self.schema.kind()
    }

    fn field_index(
        &self,
        field: &str,
    ) -> MetaDataResult<usize> {
        self.schema
            .field_index(field)
            .ok_or_else(|| MetaDataError::UnknownField(field.to_string()))
    }

    pub fn field(
        &self,
        field: &str,
    ) -> MetaDataResult<&SchemaRecordField> {
        let index = self.field_index(field)?;
        Ok(&self.schema.fields()[index])
    }

    pub fn get(
        &self,
        field: &str,
    ) -> MetaDataResult<&Value> {
        let index = self.field_index(field)?;
        Ok(&self.values[index])
    }

    /// Returns the field as a string, or None if the field is missing or not a string
    pub fn get_string(
        &self,
        field: &str,
    ) -> Option<&str> {
        self.get(field).ok().and_then(|x| x.as_string())
    }

    pub fn get_boolean(
        &self,
        field: &str,
    ) -> Option<bool> {
        self.get(field).ok().and_then(|x| x.as_boolean())
    }

    /// Coerces editor input and stores it. On failure the previous value is kept.
    pub fn set(
        &mut self,
        field: &str,
        input: FieldInput,
    ) -> MetaDataResult<()> {
        let index = self.field_index(field)?;
        let value = field_binding::coerce(&self.schema.fields()[index], &self.values[index], input)?;
        self.values[index] = value;
        Ok(())
    }

    /// Stores an already-typed value. Unlike `set` this also writes read-only fields, it is
    /// meant for code rather than for editor input.
    pub fn set_value(
        &mut self,
        field: &str,
        value: Value,
    ) -> MetaDataResult<()> {
        let index = self.field_index(field)?;
        field_binding::check_value(&self.schema.fields()[index], &value)?;
        self.values[index] = value;
        Ok(())
    }

    pub fn display(
        &self,
        field: &str,
    ) -> MetaDataResult<FieldDisplay> {
        let index = self.field_index(field)?;
        Ok(field_binding::render(
            &self.schema.fields()[index],
            &self.values[index],
        ))
    }

    /// Fields and their values in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&SchemaRecordField, &Value)> {
        self.schema.fields().iter().zip(self.values.iter())
    }

    /// "{type} : {name}" for additions. Falls back to whichever part exists, then to the kind.
    pub fn to_display_label(&self) -> String {
        match (self.get_string("type"), self.get_string("name")) {
            (Some(ty), Some(name)) => format!("{} : {}", ty, name),
            (Some(ty), None) => ty.to_string(),
            (None, Some(name)) => name.to_string(),
            (None, None) => self.kind().to_string(),
        }
    }
}
