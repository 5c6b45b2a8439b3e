use masktool_data::{field_binding, json_file_name, MaskMetaData, Record, Value};
use std::path::{Path, PathBuf};

pub const IMPORT_VERB: &str = "import";
pub const ADD_RESOURCE_VERB: &str = "addres";
pub const ADD_PART_VERB: &str = "addpart";

/// One invocation of the asset compiler: `maskmaker <verb> key=value... targets...`
#[derive(Debug, Clone, PartialEq)]
pub struct BuildCommand {
    pub verb: String,
    pub key_values: Vec<(String, String)>,
    pub targets: Vec<PathBuf>,
}

impl BuildCommand {
    pub fn new(
        verb: &str,
        targets: Vec<PathBuf>,
    ) -> Self {
        BuildCommand {
            verb: verb.to_string(),
            key_values: Vec::default(),
            targets,
        }
    }

    pub fn with_key_value(
        mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Self {
        self.key_values.push((key.to_string(), value.into()));
        self
    }

    pub fn value_of(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.key_values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Arguments following the binary on the command line
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(1 + self.key_values.len() + self.targets.len());
        args.push(self.verb.clone());
        for (key, value) in &self.key_values {
            args.push(format!("{}={}", key, value));
        }
        for target in &self.targets {
            args.push(target.to_string_lossy().into_owned());
        }
        args
    }
}

impl std::fmt::Display for BuildCommand {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "maskmaker {}", self.args().join(" "))
    }
}

/// Command line form of a field value. Vector components are comma separated with no spaces so
/// a vector stays one argument.
pub fn command_line_value(value: &Value) -> String {
    match value {
        Value::FloatVector(x) => x
            .iter()
            .map(|component| field_binding::format_float(*component))
            .collect::<Vec<_>>()
            .join(","),
        _ => field_binding::render_text(value),
    }
}

fn with_record_fields(
    mut command: BuildCommand,
    record: &Record,
) -> BuildCommand {
    for (field, value) in record.iter() {
        command = command.with_key_value(field.name(), command_line_value(value));
    }
    command
}

/// Imports the mesh into a fresh compiler json, carrying every descriptive field
pub fn import_command(
    mesh_path: &Path,
    meta_data: &MaskMetaData,
) -> BuildCommand {
    let command = BuildCommand::new(
        IMPORT_VERB,
        vec![mesh_path.to_path_buf(), json_file_name(mesh_path)],
    );
    with_record_fields(command, meta_data.record())
}

/// Adds one addition as a resource of the compiled mask
pub fn addition_command(
    addition: &Record,
    json_file: &Path,
) -> BuildCommand {
    let command = BuildCommand::new(ADD_RESOURCE_VERB, vec![json_file.to_path_buf()]);
    with_record_fields(command, addition)
}

/// Material, model and part that render the head into the depth buffer only
pub fn depth_head_commands(json_file: &Path) -> Vec<BuildCommand> {
    let targets = vec![json_file.to_path_buf()];
    vec![
        BuildCommand::new(ADD_RESOURCE_VERB, targets.clone())
            .with_key_value("type", "material")
            .with_key_value("name", "depth_head_mat")
            .with_key_value("effect", "effectDefault")
            .with_key_value("depth-only", "true"),
        BuildCommand::new(ADD_RESOURCE_VERB, targets.clone())
            .with_key_value("type", "model")
            .with_key_value("name", "depth_head_mdl")
            .with_key_value("mesh", "meshHead")
            .with_key_value("material", "depth_head_mat"),
        BuildCommand::new(ADD_PART_VERB, targets)
            .with_key_value("type", "model")
            .with_key_value("name", "depth_head")
            .with_key_value("resource", "depth_head_mdl"),
    ]
}

/// Everything needed to build one mesh, in the order the commands must run
pub fn build_plan(
    mesh_path: &Path,
    meta_data: &MaskMetaData,
) -> Vec<BuildCommand> {
    let json_file = json_file_name(mesh_path);

    let mut commands = vec![import_command(mesh_path, meta_data)];
    for addition in meta_data.additions() {
        commands.push(addition_command(addition, &json_file));
    }

    if meta_data.depth_head() {
        commands.extend(depth_head_commands(&json_file));
    }

    commands
}
