use std::path::PathBuf;
use uuid::Uuid;


fn temp_dir() -> PathBuf {
    let path = std::env::temp_dir().join(format!("masktool-pipeline-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&path).unwrap();
    path
}
