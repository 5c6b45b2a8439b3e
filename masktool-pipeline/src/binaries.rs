use crate::ProjectConfiguration;
use std::path::PathBuf;

/// External files the tool relies on but doesn't ship
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RequiredBinary {
    Svn,
    MaskMaker,
    MorphRest,
}

impl RequiredBinary {
    pub fn name(&self) -> &'static str {
        match self {
            RequiredBinary::Svn => "svn",
            RequiredBinary::MaskMaker => "maskmaker",
            RequiredBinary::MorphRest => "morph rest mesh",
        }
    }

    /// What to tell the user when the file can't be found
    pub fn hint(&self) -> &'static str {
        match self {
            RequiredBinary::Svn => {
                "Install the svn command line tools, or set svn_path in the project file"
            }
            RequiredBinary::MaskMaker => {
                "Build maskmaker, or set maskmaker_path in the project file"
            }
            RequiredBinary::MorphRest => {
                "Check out the morph rest mesh, or set morph_rest_path in the project file"
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct BinaryCheck {
    pub missing: Vec<(RequiredBinary, PathBuf)>,
}

impl BinaryCheck {
    pub fn check(project: &ProjectConfiguration) -> Self {
        let required = [
            (RequiredBinary::Svn, &project.svn_path),
            (RequiredBinary::MaskMaker, &project.maskmaker_path),
            (RequiredBinary::MorphRest, &project.morph_rest_path),
        ];

        let mut missing = Vec::default();
        for (binary, path) in required {
            if !path.exists() {
                log::warn!("Could not find {} at {:?}. {}", binary.name(), path, binary.hint());
                missing.push((binary, path.clone()));
            }
        }

        BinaryCheck { missing }
    }

    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn is_missing(
        &self,
        binary: RequiredBinary,
    ) -> bool {
        self.missing.iter().any(|(x, _)| *x == binary)
    }
}
