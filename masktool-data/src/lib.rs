pub use masktool_schema::*;

pub mod field_binding;
pub use field_binding::{FieldDisplay, FieldInput, FieldState};

mod criticality;
pub use criticality::{Criticality, FieldCriticality};

mod record;
pub use record::Record;

mod addition_list;
pub use addition_list::AdditionList;

pub mod status;
pub use status::{MaskType, MetaDataStatus};

mod mask_meta_data;
pub use mask_meta_data::{json_file_name, meta_file_name, MaskMetaData};

mod persistence_error;
pub use persistence_error::{PersistenceError, PersistenceResult};

pub mod json_storage;

mod data_source;
pub use data_source::{
    check_meta_data_file, create_get_meta_data, FileSystemMetaDataSource, MemoryMetaDataSource,
    MetaDataSource,
};

#[cfg(test)]
mod tests;
