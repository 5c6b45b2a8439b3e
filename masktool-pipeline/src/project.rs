use crate::PipelineResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PROJECT_FILE_NAME: &str = "masktool_project.json";

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfigurationJson {
    pub maskmaker_path: Option<String>,
    pub svn_path: Option<String>,
    pub morph_rest_path: Option<String>,
    pub mesh_patterns: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ProjectConfiguration {
    // Directory holding the meshes. Everything relative in the project file is relative to it.
    pub root_path: PathBuf,

    // The asset compiler
    pub maskmaker_path: PathBuf,

    // Only checked for presence, version control happens outside of this tool
    pub svn_path: PathBuf,

    // Rest pose mesh that morph masks are built against
    pub morph_rest_path: PathBuf,

    // Globs relative to root_path selecting the meshes that can be edited
    pub mesh_patterns: Vec<String>,
}

fn default_svn_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:/Program Files/TortoiseSVN/bin/svn.exe")
    } else {
        PathBuf::from("/usr/bin/svn")
    }
}

impl ProjectConfiguration {
    /// Defaults for a project rooted at `root_path`
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        let root_path = root_path.into();
        ProjectConfiguration {
            maskmaker_path: root_path
                .join("bin")
                .join(format!("maskmaker{}", std::env::consts::EXE_SUFFIX)),
            svn_path: default_svn_path(),
            morph_rest_path: root_path.join("morphs").join("morph_rest.fbx"),
            mesh_patterns: vec!["**/*.fbx".to_string()],
            root_path,
        }
    }

    pub fn unverified_absolute_path(
        root_path: &Path,
        json_path: &str,
    ) -> PathBuf {
        if Path::new(json_path).is_absolute() {
            PathBuf::from(json_path)
        } else {
            root_path.join(json_path)
        }
    }

    pub fn read_from_path(path: &Path) -> PipelineResult<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| format!("Parent of project file path {:?} could not be found", path))?;
        let root_path = dunce::canonicalize(parent)?;
        let file_contents = std::fs::read_to_string(path)?;
        let project_file: ProjectConfigurationJson = serde_json::from_str(&file_contents)?;

        let mut configuration = ProjectConfiguration::new(&root_path);
        if let Some(maskmaker_path) = &project_file.maskmaker_path {
            configuration.maskmaker_path =
                Self::unverified_absolute_path(&root_path, maskmaker_path);
        }

        if let Some(svn_path) = &project_file.svn_path {
            configuration.svn_path = Self::unverified_absolute_path(&root_path, svn_path);
        }

        if let Some(morph_rest_path) = &project_file.morph_rest_path {
            configuration.morph_rest_path =
                Self::unverified_absolute_path(&root_path, morph_rest_path);
        }

        if let Some(mesh_patterns) = project_file.mesh_patterns {
            if mesh_patterns.is_empty() {
                return Err("mesh_patterns in the project file must not be empty".into());
            }
            configuration.mesh_patterns = mesh_patterns;
        }

        Ok(configuration)
    }

    /// Uses the nearest project file at or above `search_location`, or defaults rooted at
    /// `search_location` if there is none
    pub fn locate_project_file(search_location: &Path) -> PipelineResult<Self> {
        let mut path = Some(search_location.to_path_buf());
        while let Some(p) = path {
            let joined_path = p.join(PROJECT_FILE_NAME);
            if joined_path.exists() {
                log::info!("Using project configuration at {:?}", joined_path);
                return Self::read_from_path(&joined_path);
            }

            path = p.parent().map(|x| x.to_path_buf());
        }

        log::info!(
            "No {} at {:?} or in any of its parent directories, using defaults",
            PROJECT_FILE_NAME,
            search_location
        );
        Ok(ProjectConfiguration::new(dunce::canonicalize(
            search_location,
        )?))
    }
}
