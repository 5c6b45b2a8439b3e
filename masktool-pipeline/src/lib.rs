pub use masktool_data;

mod pipeline_error;
pub use pipeline_error::{PipelineError, PipelineResult};

mod project;
pub use project::{ProjectConfiguration, ProjectConfigurationJson, PROJECT_FILE_NAME};

mod asset_files;
pub use asset_files::find_mesh_files;

pub mod build_command;
pub use build_command::{build_plan, BuildCommand};

mod mask_maker;
pub use mask_maker::{
    run_build_plan, CommandRunner, MaskMakerRunner, OutputLineIterator, RecordingRunner,
};

mod binaries;
pub use binaries::{BinaryCheck, RequiredBinary};

#[cfg(test)]
mod tests;
