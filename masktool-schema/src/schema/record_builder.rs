use crate::{FieldType, SchemaRecord, SchemaRecordField, Value};

pub struct RecordFieldBuilder {
    pub(super) name: String,
    pub(super) field_type: FieldType,
    pub(super) default_value: Value,
    pub(super) read_only: bool,
}

impl RecordFieldBuilder {
    pub fn read_only(&mut self) -> &mut Self {
        self.read_only = true;
        self
    }
}

pub struct RecordBuilder {
    kind: String,
    fields: Vec<RecordFieldBuilder>,
}

impl RecordBuilder {
    pub fn new(kind: impl Into<String>) -> Self {
        RecordBuilder {
            kind: kind.into(),
            fields: Default::default(),
        }
    }

    /// Adds the read-only `type` discriminator, defaulted to the kind name
    pub fn add_type_field(&mut self) -> &mut RecordFieldBuilder {
        let kind = self.kind.clone();
        self.add_field("type", FieldType::String, Value::String(kind))
            .read_only()
    }

    pub fn add_string(
        &mut self,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> &mut RecordFieldBuilder {
        self.add_field(
            name,
            FieldType::String,
            Value::String(default_value.into()),
        )
    }

    pub fn add_integer(
        &mut self,
        name: impl Into<String>,
        default_value: i64,
    ) -> &mut RecordFieldBuilder {
        self.add_field(name, FieldType::Integer, Value::Integer(default_value))
    }

    pub fn add_float(
        &mut self,
        name: impl Into<String>,
        default_value: f64,
    ) -> &mut RecordFieldBuilder {
        self.add_field(name, FieldType::Float, Value::Float(default_value))
    }

    pub fn add_boolean(
        &mut self,
        name: impl Into<String>,
        default_value: bool,
    ) -> &mut RecordFieldBuilder {
        self.add_field(name, FieldType::Boolean, Value::Boolean(default_value))
    }

    pub fn add_float_vector(
        &mut self,
        name: impl Into<String>,
        default_value: &[f64],
    ) -> &mut RecordFieldBuilder {
        self.add_field(
            name,
            FieldType::FloatVector(default_value.len()),
            Value::FloatVector(default_value.to_vec()),
        )
    }

    pub fn add_texture_size(
        &mut self,
        name: impl Into<String>,
        default_value: i64,
    ) -> &mut RecordFieldBuilder {
        assert!(crate::texture_size_index(default_value).is_some());
        self.add_field(name, FieldType::TextureSize, Value::Integer(default_value))
    }

    fn add_field(
        &mut self,
        name: impl Into<String>,
        field_type: FieldType,
        default_value: Value,
    ) -> &mut RecordFieldBuilder {
        self.fields.push(RecordFieldBuilder {
            name: name.into(),
            field_type,
            default_value,
            read_only: false,
        });
        // just pushed
        self.fields.last_mut().unwrap()
    }

    pub fn build(self) -> SchemaRecord {
        let fields: Vec<_> = self
            .fields
            .into_iter()
            .map(|x| SchemaRecordField::new(x.name, x.field_type, x.default_value, x.read_only))
            .collect();

        SchemaRecord::new(self.kind, fields.into_boxed_slice())
    }
}
