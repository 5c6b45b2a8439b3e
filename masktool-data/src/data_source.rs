use crate::json_storage;
use crate::status::{MaskType, MetaDataStatus};
use crate::{meta_file_name, FieldCriticality, HashMap, MaskMetaData, PersistenceResult};
use std::path::{Path, PathBuf};

/// Where metadata files are read from and written to
pub trait MetaDataSource {
    /// Returns None if there is no file at the path
    fn read_meta_data(
        &self,
        path: &Path,
    ) -> PersistenceResult<Option<serde_json::Value>>;

    fn write_meta_data(
        &mut self,
        path: &Path,
        value: &serde_json::Value,
    ) -> PersistenceResult<()>;

    /// Moves an existing file aside so it isn't lost when it's overwritten
    fn back_up(
        &mut self,
        path: &Path,
    ) -> PersistenceResult<Option<PathBuf>>;
}

/// Metadata stored as pretty-printed JSON beside each mesh
#[derive(Default)]
pub struct FileSystemMetaDataSource;

impl MetaDataSource for FileSystemMetaDataSource {
    fn read_meta_data(
        &self,
        path: &Path,
    ) -> PersistenceResult<Option<serde_json::Value>> {
        if !path.exists() {
            return Ok(None);
        }

        json_storage::read_meta_data(path).map(Some)
    }

    fn write_meta_data(
        &mut self,
        path: &Path,
        value: &serde_json::Value,
    ) -> PersistenceResult<()> {
        json_storage::write_meta_data(path, value)
    }

    fn back_up(
        &mut self,
        path: &Path,
    ) -> PersistenceResult<Option<PathBuf>> {
        if !path.exists() {
            return Ok(None);
        }

        let mut backup_path = path.as_os_str().to_owned();
        backup_path.push(".bak");
        let backup_path = PathBuf::from(backup_path);
        std::fs::copy(path, &backup_path)?;
        Ok(Some(backup_path))
    }
}

/// Keeps files in memory. Useful for dry runs and tests.
#[derive(Default)]
pub struct MemoryMetaDataSource {
    files: HashMap<PathBuf, serde_json::Value>,
    write_count: usize,
}

impl MemoryMetaDataSource {
    pub fn insert(
        &mut self,
        path: impl Into<PathBuf>,
        value: serde_json::Value,
    ) {
        self.files.insert(path.into(), value);
    }

    pub fn get(
        &self,
        path: &Path,
    ) -> Option<&serde_json::Value> {
        self.files.get(path)
    }

    /// Number of writes made through `write_meta_data`
    pub fn write_count(&self) -> usize {
        self.write_count
    }
}

impl MetaDataSource for MemoryMetaDataSource {
    fn read_meta_data(
        &self,
        path: &Path,
    ) -> PersistenceResult<Option<serde_json::Value>> {
        Ok(self.files.get(path).cloned())
    }

    fn write_meta_data(
        &mut self,
        path: &Path,
        value: &serde_json::Value,
    ) -> PersistenceResult<()> {
        self.write_count += 1;
        self.files.insert(path.to_path_buf(), value.clone());
        Ok(())
    }

    fn back_up(
        &mut self,
        path: &Path,
    ) -> PersistenceResult<Option<PathBuf>> {
        let existing = match self.files.get(path) {
            Some(existing) => existing.clone(),
            None => return Ok(None),
        };

        let mut backup_path = path.as_os_str().to_owned();
        backup_path.push(".bak");
        let backup_path = PathBuf::from(backup_path);
        self.files.insert(backup_path.clone(), existing);
        Ok(Some(backup_path))
    }
}

/// Loads the metadata stored beside `mesh_path`, or creates defaults if there is none yet.
/// The returned flag is true when the metadata was created rather than loaded.
pub fn create_get_meta_data(
    source: &dyn MetaDataSource,
    mesh_path: &Path,
) -> PersistenceResult<(MaskMetaData, bool)> {
    let meta_path = meta_file_name(mesh_path);
    match source.read_meta_data(&meta_path)? {
        Some(stored) => {
            let mut meta_data = json_storage::mask_meta_data_from_json(&stored)?;
            if meta_data.ensure_uuid() {
                log::info!("Generated a uuid for {:?}", meta_path);
            }
            Ok((meta_data, false))
        }
        None => {
            log::info!("No metadata at {:?}, creating defaults", meta_path);
            Ok((MaskMetaData::new(), true))
        }
    }
}

/// Status and type of a mesh's metadata without making it the edited asset. Missing or
/// unreadable metadata is reported as an error of unknown type.
pub fn check_meta_data_file(
    source: &dyn MetaDataSource,
    mesh_path: &Path,
    criticality: &FieldCriticality,
) -> (MetaDataStatus, MaskType) {
    let meta_path = meta_file_name(mesh_path);
    let stored = match source.read_meta_data(&meta_path) {
        Ok(Some(stored)) => stored,
        Ok(None) => return (MetaDataStatus::Error, MaskType::Unknown),
        Err(e) => {
            log::warn!("Could not read {:?}: {}", meta_path, e);
            return (MetaDataStatus::Error, MaskType::Unknown);
        }
    };

    match json_storage::mask_meta_data_from_json(&stored) {
        Ok(meta_data) => (meta_data.status(criticality), meta_data.mask_type()),
        Err(e) => {
            log::warn!("Metadata in {:?} does not fit the schema: {}", meta_path, e);
            (MetaDataStatus::Error, MaskType::Unknown)
        }
    }
}
