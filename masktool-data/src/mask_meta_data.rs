use crate::status::{self, MaskType, MetaDataStatus};
use crate::{AdditionList, FieldCriticality, Record, SchemaRegistry, Value};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Metadata for one mesh: the descriptive fields plus the additions to build with it
#[derive(Clone, Debug, PartialEq)]
pub struct MaskMetaData {
    record: Record,
    additions: AdditionList,
}

impl MaskMetaData {
    /// Defaults for every field, with a newly generated uuid
    pub fn new() -> Self {
        let mut meta_data = MaskMetaData::restore(
            Record::new(SchemaRegistry::get().mask_schema()),
            AdditionList::default(),
        );
        meta_data.ensure_uuid();
        meta_data
    }

    pub(crate) fn restore(
        record: Record,
        additions: AdditionList,
    ) -> Self {
        MaskMetaData { record, additions }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    pub fn additions(&self) -> &AdditionList {
        &self.additions
    }

    pub fn additions_mut(&mut self) -> &mut AdditionList {
        &mut self.additions
    }

    /// Generates a uuid if the record doesn't have one yet. Returns true if one was generated.
    pub fn ensure_uuid(&mut self) -> bool {
        if self.uuid().map(|x| !x.is_empty()).unwrap_or(false) {
            return false;
        }

        let uuid = Uuid::new_v4().to_string();
        // uuid is a string field of the mask schema
        self.record
            .set_value("uuid", Value::String(uuid))
            .is_ok()
    }

    pub fn name(&self) -> &str {
        self.record.get_string("name").unwrap_or_default()
    }

    pub fn uuid(&self) -> Option<&str> {
        self.record.get_string("uuid")
    }

    pub fn depth_head(&self) -> bool {
        self.record.get_boolean("depth_head").unwrap_or(false)
    }

    pub fn is_morph(&self) -> bool {
        self.record.get_boolean("is_morph").unwrap_or(false)
    }

    pub fn do_not_release(&self) -> bool {
        self.record.get_boolean("do_not_release").unwrap_or(false)
    }

    pub fn status(
        &self,
        criticality: &FieldCriticality,
    ) -> MetaDataStatus {
        status::classify(&self.record, criticality)
    }

    pub fn mask_type(&self) -> MaskType {
        status::mask_type(&self.record)
    }
}

impl Default for MaskMetaData {
    fn default() -> Self {
        MaskMetaData::new()
    }
}

/// foo.fbx -> foo.meta
pub fn meta_file_name(mesh_path: &Path) -> PathBuf {
    mesh_path.with_extension("meta")
}

/// foo.fbx -> foo.json, the file the asset compiler writes into
pub fn json_file_name(mesh_path: &Path) -> PathBuf {
    mesh_path.with_extension("json")
}
