use crate::{FieldType, Value};
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct SchemaRecordField {
    name: String,
    field_type: FieldType,
    default_value: Value,
    read_only: bool,
}

impl SchemaRecordField {
    pub fn new(
        name: String,
        field_type: FieldType,
        default_value: Value,
        read_only: bool,
    ) -> Self {
        assert!(
            default_value.matches_field_type(&field_type),
            "default for field {} does not match its type {:?}",
            name,
            field_type
        );

        SchemaRecordField {
            name,
            field_type,
            default_value,
            read_only,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// Read-only fields are shown but never edited, like the addition `type` discriminator
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

#[derive(Debug)]
pub struct SchemaRecordInner {
    kind: String,
    fields: Box<[SchemaRecordField]>,
}

/// Ordered set of fields describing one kind of record. Cheap to clone, all clones share the
/// same field list.
#[derive(Clone, Debug)]
pub struct SchemaRecord {
    inner: Arc<SchemaRecordInner>,
}

impl Deref for SchemaRecord {
    type Target = SchemaRecordInner;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl PartialEq for SchemaRecord {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.kind == other.inner.kind
    }
}

impl SchemaRecord {
    pub fn new(
        kind: String,
        fields: Box<[SchemaRecordField]>,
    ) -> Self {
        // Check names are unique
        for i in 0..fields.len() {
            for j in 0..i {
                assert_ne!(fields[i].name, fields[j].name);
            }
        }

        let inner = SchemaRecordInner { kind, fields };

        SchemaRecord {
            inner: Arc::new(inner),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn fields(&self) -> &[SchemaRecordField] {
        &*self.fields
    }

    pub fn field_index(
        &self,
        field_name: impl AsRef<str>,
    ) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.name == field_name.as_ref())
    }

    pub fn find_field(
        &self,
        field_name: impl AsRef<str>,
    ) -> Option<&SchemaRecordField> {
        for field in &*self.fields {
            if field.name == field_name.as_ref() {
                return Some(field);
            }
        }

        None
    }

    pub fn field_type(
        &self,
        field_name: impl AsRef<str>,
    ) -> Option<FieldType> {
        self.find_field(field_name).map(|x| x.field_type)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|x| x.name.as_str())
    }

    /// Fresh copies of every default, in field order
    pub fn default_values(&self) -> Vec<Value> {
        self.fields.iter().map(|x| x.default_value.clone()).collect()
    }
}
