pub use masktool_data;
pub use masktool_pipeline;

mod app_config;
pub use app_config::AppConfig;

mod editor_session;
pub use editor_session::EditorSession;

mod commands;
pub use commands::{input_from_text, run, run_command, MaskToolArgs, MaskToolCommand};

#[cfg(test)]
mod tests;
