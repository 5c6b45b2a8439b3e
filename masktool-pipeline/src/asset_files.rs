use crate::{PipelineResult, ProjectConfiguration};
use std::path::PathBuf;

/// Every mesh under the project root matching the configured patterns, sorted by path
#[profiling::function]
pub fn find_mesh_files(project: &ProjectConfiguration) -> PipelineResult<Vec<PathBuf>> {
    let walker = globwalk::GlobWalkerBuilder::from_patterns(
        &project.root_path,
        &project.mesh_patterns,
    )
    .case_insensitive(true)
    .file_type(globwalk::FileType::FILE)
    .build()?;

    let mut mesh_files = Vec::default();
    for file in walker {
        match file {
            Ok(file) => mesh_files.push(file.into_path()),
            Err(e) => log::warn!("Skipping unreadable entry while looking for meshes: {}", e),
        }
    }

    mesh_files.sort();
    Ok(mesh_files)
}
