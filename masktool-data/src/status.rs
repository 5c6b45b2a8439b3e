use crate::field_binding::is_empty_value;
use crate::{FieldCriticality, Record};

/// Overall state of a mask's metadata, shown as the color of its entry in the asset list
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MetaDataStatus {
    Good,
    Warning,
    Error,
    NoRelease,
}

impl MetaDataStatus {
    pub fn name(&self) -> &'static str {
        match self {
            MetaDataStatus::Good => "good",
            MetaDataStatus::Warning => "warning",
            MetaDataStatus::Error => "error",
            MetaDataStatus::NoRelease => "no-release",
        }
    }
}

/// Shown as the icon of a mask's entry in the asset list
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MaskType {
    /// No metadata exists for the mesh yet
    Unknown,
    Normal,
    Morph,
}

impl MaskType {
    pub fn name(&self) -> &'static str {
        match self {
            MaskType::Unknown => "unknown",
            MaskType::Normal => "normal",
            MaskType::Morph => "morph",
        }
    }
}

/// Error beats Warning beats NoRelease beats Good
pub fn classify(
    record: &Record,
    criticality: &FieldCriticality,
) -> MetaDataStatus {
    let mut missing_desired = false;
    for (field, value) in record.iter() {
        if !is_empty_value(field, value) {
            continue;
        }

        if criticality.is_critical(field.name()) {
            return MetaDataStatus::Error;
        }

        if criticality.is_desired(field.name()) {
            missing_desired = true;
        }
    }

    if missing_desired {
        MetaDataStatus::Warning
    } else if record.get_boolean("do_not_release").unwrap_or(false) {
        MetaDataStatus::NoRelease
    } else {
        MetaDataStatus::Good
    }
}

pub fn mask_type(record: &Record) -> MaskType {
    if record.get_boolean("is_morph").unwrap_or(false) {
        MaskType::Morph
    } else {
        MaskType::Normal
    }
}
