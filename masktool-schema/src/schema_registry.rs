use crate::{HashMap, MetaDataError, MetaDataResult, RecordBuilder, SchemaRecord, Value};
use std::str::FromStr;

/// Kind of the whole-asset metadata record
pub const MASK_KIND: &str = "mask";

/// The closed set of additions an artist can attach to a mask build
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AdditionKind {
    Image,
    Sequence,
    Material,
    Model,
    Emitter,
    Tweak,
}

impl AdditionKind {
    pub const ALL: [AdditionKind; 6] = [
        AdditionKind::Image,
        AdditionKind::Sequence,
        AdditionKind::Material,
        AdditionKind::Model,
        AdditionKind::Emitter,
        AdditionKind::Tweak,
    ];

    /// Name stored in the record's `type` field
    pub fn name(&self) -> &'static str {
        match self {
            AdditionKind::Image => "image",
            AdditionKind::Sequence => "sequence",
            AdditionKind::Material => "material",
            AdditionKind::Model => "model",
            AdditionKind::Emitter => "emitter",
            AdditionKind::Tweak => "tweak",
        }
    }

    /// Name shown when offering the kinds for creation
    pub fn display_name(&self) -> &'static str {
        match self {
            AdditionKind::Image => "Image",
            AdditionKind::Sequence => "Sequence",
            AdditionKind::Material => "Material",
            AdditionKind::Model => "Model",
            AdditionKind::Emitter => "Emitter",
            AdditionKind::Tweak => "Tweak",
        }
    }
}

impl FromStr for AdditionKind {
    type Err = MetaDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdditionKind::ALL
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| MetaDataError::UnknownKind(s.to_string()))
    }
}

impl std::fmt::Display for AdditionKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn image_schema() -> SchemaRecord {
    let mut builder = RecordBuilder::new(AdditionKind::Image.name());
    builder.add_type_field();
    builder.add_string("name", "");
    builder.add_string("file", "");
    builder.build()
}

fn sequence_schema() -> SchemaRecord {
    let mut builder = RecordBuilder::new(AdditionKind::Sequence.name());
    builder.add_type_field();
    builder.add_string("name", "");
    builder.add_string("image", "");
    builder.add_integer("rows", 1);
    builder.add_integer("cols", 1);
    builder.add_integer("first", 0);
    builder.add_integer("last", 0);
    builder.add_float("rate", 1.0);
    builder.add_string("mode", "repeat");
    builder.build()
}

fn material_schema() -> SchemaRecord {
    let mut builder = RecordBuilder::new(AdditionKind::Material.name());
    builder.add_type_field();
    builder.add_string("name", "");
    builder.add_string("image", "texture,diffuse-0");
    builder.add_string("culling", "back");
    builder.add_string("depth-test", "less");
    builder.add_boolean("depth-only", false);
    builder.add_boolean("opaque", true);
    builder.build()
}

fn model_schema() -> SchemaRecord {
    let mut builder = RecordBuilder::new(AdditionKind::Model.name());
    builder.add_type_field();
    builder.add_string("name", "");
    builder.add_string("mesh", "");
    builder.add_string("material", "");
    builder.build()
}

fn emitter_schema() -> SchemaRecord {
    let mut builder = RecordBuilder::new(AdditionKind::Emitter.name());
    builder.add_type_field();
    builder.add_string("name", "");
    builder.add_string("model", "");
    builder.add_float("lifetime", 1.0);
    builder.add_float("scale-start", 1.0);
    builder.add_float("scale-end", 2.0);
    builder.add_float("alpha-start", 1.0);
    builder.add_float("alpha-end", 0.0);
    builder.add_integer("num-particles", 100);
    builder.add_boolean("world-space", true);
    builder.add_boolean("inverse-rate", false);
    builder.add_float("z-sort-offset", 0.0);
    builder.add_float("rate-min", 1.0);
    builder.add_float("rate-max", 1.0);
    builder.add_float("friction-min", 1.0);
    builder.add_float("friction-max", 1.0);
    builder.add_float_vector("force-min", &[0.0, 10.0, 0.0]);
    builder.add_float_vector("force-max", &[0.0, 10.0, 0.0]);
    builder.add_float_vector("initial-velocity-min", &[0.0, -40.0, 0.0]);
    builder.add_float_vector("initial-velocity-max", &[0.0, -40.0, 0.0]);
    builder.build()
}

fn tweak_schema() -> SchemaRecord {
    let mut builder = RecordBuilder::new(AdditionKind::Tweak.name());
    builder.add_type_field();
    builder.add_string("name", "");
    builder.add_string("part", "");
    builder.add_string("key", "");
    builder.add_string("value", "");
    builder.build()
}

fn mask_schema() -> SchemaRecord {
    let mut builder = RecordBuilder::new(MASK_KIND);
    builder.add_string("name", "");
    builder.add_string("description", "");
    builder.add_string("author", "");
    builder.add_string("tags", "");
    builder.add_string("category", "");
    // filled with a generated id when the record is created
    builder.add_string("uuid", "").read_only();
    builder.add_boolean("depth_head", false);
    builder.add_boolean("is_morph", false);
    builder.add_boolean("is_vip", false);
    builder.add_boolean("do_not_release", false);
    builder.add_texture_size("texture_max", 256);
    builder.add_string("license", "");
    builder.add_string("website", "");
    builder.build()
}

/// Every schema the tool knows about. Built once, never mutated.
pub struct SchemaRegistry {
    additions: HashMap<AdditionKind, SchemaRecord>,
    mask: SchemaRecord,
}

lazy_static::lazy_static! {
    static ref SCHEMA_REGISTRY: SchemaRegistry = SchemaRegistry::new();
}

impl SchemaRegistry {
    fn new() -> Self {
        let mut additions = HashMap::default();
        additions.insert(AdditionKind::Image, image_schema());
        additions.insert(AdditionKind::Sequence, sequence_schema());
        additions.insert(AdditionKind::Material, material_schema());
        additions.insert(AdditionKind::Model, model_schema());
        additions.insert(AdditionKind::Emitter, emitter_schema());
        additions.insert(AdditionKind::Tweak, tweak_schema());

        SchemaRegistry {
            additions,
            mask: mask_schema(),
        }
    }

    pub fn get() -> &'static SchemaRegistry {
        &SCHEMA_REGISTRY
    }

    pub fn addition_schema(
        &self,
        kind: AdditionKind,
    ) -> &SchemaRecord {
        // every kind is registered in new()
        &self.additions[&kind]
    }

    /// Looks up an addition schema by the name stored in a record's `type` field
    pub fn schema_for(
        &self,
        kind: &str,
    ) -> MetaDataResult<&SchemaRecord> {
        let kind = AdditionKind::from_str(kind)?;
        Ok(self.addition_schema(kind))
    }

    pub fn mask_schema(&self) -> &SchemaRecord {
        &self.mask
    }

    /// Field names and defaults for an addition kind, in declaration order
    pub fn fields_for(
        &self,
        kind: &str,
    ) -> MetaDataResult<Vec<(&str, &Value)>> {
        let schema = self.schema_for(kind)?;
        Ok(schema
            .fields()
            .iter()
            .map(|field| (field.name(), field.default_value()))
            .collect())
    }
}
