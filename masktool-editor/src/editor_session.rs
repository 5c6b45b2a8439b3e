use crate::AppConfig;
use masktool_data::{
    check_meta_data_file, create_get_meta_data, json_storage, meta_file_name, FieldCriticality,
    FieldInput, FieldState, HashMap, MaskMetaData, MaskType, MetaDataSource, MetaDataStatus,
};
use masktool_pipeline::PipelineResult;
use std::path::{Path, PathBuf};

struct LoadedMetaData {
    meta_data: MaskMetaData,
    // Holds changes not yet written to the source
    dirty: bool,
    // The stored file couldn't be read. It is only replaced once the user changes something.
    load_failed: bool,
}

/// Editing state for a set of meshes. Metadata is loaded the first time a mesh becomes active
/// and kept for the rest of the session. At most one mesh is active, and switching to another
/// one writes pending changes first.
pub struct EditorSession {
    source: Box<dyn MetaDataSource>,
    criticality: FieldCriticality,
    loaded: HashMap<PathBuf, LoadedMetaData>,
    active: Option<PathBuf>,
}

impl EditorSession {
    pub fn new(
        source: Box<dyn MetaDataSource>,
        criticality: FieldCriticality,
    ) -> Self {
        EditorSession {
            source,
            criticality,
            loaded: Default::default(),
            active: None,
        }
    }

    pub fn source(&self) -> &dyn MetaDataSource {
        &*self.source
    }

    pub fn criticality(&self) -> &FieldCriticality {
        &self.criticality
    }

    pub fn active_path(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    fn active_entry(&self) -> Option<&LoadedMetaData> {
        self.active.as_ref().and_then(|x| self.loaded.get(x))
    }

    fn active_entry_mut(&mut self) -> PipelineResult<&mut LoadedMetaData> {
        let active = self.active.as_ref().ok_or("No mesh is active")?;
        Ok(self
            .loaded
            .get_mut(active)
            .ok_or_else(|| format!("Metadata for {:?} is not loaded", active))?)
    }

    pub fn active(&self) -> Option<&MaskMetaData> {
        self.active_entry().map(|x| &x.meta_data)
    }

    /// Mutable access to the active metadata. The metadata is assumed to be modified and will
    /// be written on the next flush.
    pub fn active_mut(&mut self) -> PipelineResult<&mut MaskMetaData> {
        let entry = self.active_entry_mut()?;
        entry.dirty = true;
        Ok(&mut entry.meta_data)
    }

    pub fn is_dirty(&self) -> bool {
        self.active_entry().map(|x| x.dirty).unwrap_or(false)
    }

    /// True if the active mesh has a metadata file that could not be read
    pub fn active_load_failed(&self) -> bool {
        self.active_entry().map(|x| x.load_failed).unwrap_or(false)
    }

    fn load(
        &self,
        mesh_path: &Path,
    ) -> LoadedMetaData {
        match create_get_meta_data(&*self.source, mesh_path) {
            // New metadata is written on the next flush so the generated uuid sticks
            Ok((meta_data, is_new)) => LoadedMetaData {
                meta_data,
                dirty: is_new,
                load_failed: false,
            },
            Err(e) => {
                log::warn!(
                    "Could not load metadata for {:?}, editing defaults instead: {}",
                    mesh_path,
                    e
                );
                LoadedMetaData {
                    meta_data: MaskMetaData::new(),
                    dirty: false,
                    load_failed: true,
                }
            }
        }
    }

    /// Makes `mesh_path` the active mesh. Pending changes to the previously active mesh are
    /// written first; if that fails the previous mesh stays active.
    #[profiling::function]
    pub fn switch_active(
        &mut self,
        mesh_path: &Path,
    ) -> PipelineResult<&MaskMetaData> {
        if self.active.as_deref() != Some(mesh_path) {
            self.flush()?;

            if !self.loaded.contains_key(mesh_path) {
                let loaded = self.load(mesh_path);
                self.loaded.insert(mesh_path.to_path_buf(), loaded);
            }

            log::debug!("Active mesh is now {:?}", mesh_path);
            self.active = Some(mesh_path.to_path_buf());
        }

        Ok(&self.active_entry_mut()?.meta_data)
    }

    /// Writes the active metadata if it has pending changes. Returns true if anything was
    /// written. A file that failed to load is backed up before it is replaced.
    #[profiling::function]
    pub fn flush(&mut self) -> PipelineResult<bool> {
        let active = match &self.active {
            Some(active) => active.clone(),
            None => return Ok(false),
        };

        let entry = match self.loaded.get_mut(&active) {
            Some(entry) if entry.dirty => entry,
            _ => return Ok(false),
        };

        let meta_path = meta_file_name(&active);
        if entry.load_failed {
            if let Some(backup_path) = self.source.back_up(&meta_path)? {
                log::warn!(
                    "Replacing unreadable {:?}, the old file was kept as {:?}",
                    meta_path,
                    backup_path
                );
            }
        }

        let value = json_storage::mask_meta_data_to_json(&entry.meta_data);
        self.source.write_meta_data(&meta_path, &value)?;
        entry.dirty = false;
        entry.load_failed = false;

        log::info!("Saved {:?}", meta_path);
        Ok(true)
    }

    /// Applies editor input to a field of the active metadata
    pub fn set_field(
        &mut self,
        field: &str,
        input: FieldInput,
    ) -> PipelineResult<()> {
        let entry = self.active_entry_mut()?;
        entry.meta_data.record_mut().set(field, input)?;
        entry.dirty = true;
        Ok(())
    }

    /// Applies editor input to a field of one of the active metadata's additions
    pub fn set_addition_field(
        &mut self,
        index: usize,
        field: &str,
        input: FieldInput,
    ) -> PipelineResult<()> {
        let entry = self.active_entry_mut()?;
        entry
            .meta_data
            .additions_mut()
            .get_mut(index)?
            .set(field, input)?;
        entry.dirty = true;
        Ok(())
    }

    /// Moves an addition of the active metadata up one row. Only an actual move counts as a
    /// change.
    pub fn move_addition_up(
        &mut self,
        index: usize,
    ) -> PipelineResult<bool> {
        let entry = self.active_entry_mut()?;
        let moved = entry.meta_data.additions_mut().move_up(index)?;
        entry.dirty |= moved;
        Ok(moved)
    }

    pub fn move_addition_down(
        &mut self,
        index: usize,
    ) -> PipelineResult<bool> {
        let entry = self.active_entry_mut()?;
        let moved = entry.meta_data.additions_mut().move_down(index)?;
        entry.dirty |= moved;
        Ok(moved)
    }

    pub fn field_state(
        &self,
        field: &str,
    ) -> PipelineResult<FieldState> {
        let meta_data = self.active().ok_or("No mesh is active")?;
        let record = meta_data.record();
        Ok(masktool_data::field_binding::field_state(
            record.field(field)?,
            record.get(field)?,
            &self.criticality,
        ))
    }

    pub fn status(&self) -> Option<MetaDataStatus> {
        self.active().map(|x| x.status(&self.criticality))
    }

    /// Status and type of any mesh. Meshes edited this session report their in-memory state,
    /// others are read from the source without being loaded.
    pub fn check(
        &self,
        mesh_path: &Path,
    ) -> (MetaDataStatus, MaskType) {
        match self.loaded.get(mesh_path) {
            Some(entry) if !entry.load_failed => (
                entry.meta_data.status(&self.criticality),
                entry.meta_data.mask_type(),
            ),
            _ => check_meta_data_file(&*self.source, mesh_path, &self.criticality),
        }
    }

    /// Called before exit: writes pending metadata changes, then the app config
    pub fn final_cleanup(
        &mut self,
        app_config: &AppConfig,
        root_path: &Path,
    ) -> PipelineResult<()> {
        self.flush()?;
        app_config.save(&mut *self.source, root_path)?;
        Ok(())
    }
}
