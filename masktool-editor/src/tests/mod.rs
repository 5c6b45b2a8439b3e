use crate::EditorSession;
use masktool_data::{FieldCriticality, MemoryMetaDataSource};
use std::path::PathBuf;
use uuid::Uuid;

mod editor_session;

fn memory_session() -> EditorSession {
    EditorSession::new(
        Box::new(MemoryMetaDataSource::default()),
        FieldCriticality::default(),
    )
}

fn temp_dir() -> PathBuf {
    let path = std::env::temp_dir().join(format!("masktool-editor-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&path).unwrap();
    path
}
