use crate::{AppConfig, EditorSession};
use masktool_data::{
    AdditionKind, FieldCriticality, FieldDisplay, FieldInput, FieldState, FieldType,
    FileSystemMetaDataSource, MaskMetaData, Record,
};
use masktool_pipeline::{
    build_plan, find_mesh_files, run_build_plan, BinaryCheck, MaskMakerRunner, PipelineError,
    PipelineResult, ProjectConfiguration,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "masktool", about = "Edits mask metadata and builds masks")]
pub struct MaskToolArgs {
    /// Where to start looking for the project file, defaults to the working directory
    #[structopt(name = "project", long, parse(from_os_str))]
    pub project: Option<PathBuf>,
    #[structopt(name = "trace", long)]
    pub trace: bool,
    #[structopt(subcommand)]
    pub command: MaskToolCommand,
}

#[derive(StructOpt, Debug)]
pub enum MaskToolCommand {
    /// Status and type of every mesh in the project
    List,
    /// Every field and addition of a mesh's metadata
    Show {
        #[structopt(parse(from_os_str))]
        mesh: PathBuf,
    },
    /// Sets a field of the metadata, or of one addition with --addition
    Set {
        #[structopt(parse(from_os_str))]
        mesh: PathBuf,
        field: String,
        value: String,
        #[structopt(long)]
        addition: Option<usize>,
    },
    /// Appends an addition holding defaults
    Add {
        #[structopt(parse(from_os_str))]
        mesh: PathBuf,
        kind: AdditionKind,
        #[structopt(long)]
        name: Option<String>,
    },
    Remove {
        #[structopt(parse(from_os_str))]
        mesh: PathBuf,
        index: usize,
    },
    MoveUp {
        #[structopt(parse(from_os_str))]
        mesh: PathBuf,
        index: usize,
    },
    MoveDown {
        #[structopt(parse(from_os_str))]
        mesh: PathBuf,
        index: usize,
    },
    /// Runs maskmaker for a mesh. --dry-run prints the commands instead.
    Build {
        #[structopt(parse(from_os_str))]
        mesh: PathBuf,
        #[structopt(long)]
        dry_run: bool,
    },
    CheckBinaries,
}

pub fn run(args: &MaskToolArgs) -> PipelineResult<()> {
    let search_location = match &args.project {
        Some(project) => project.clone(),
        None => std::env::current_dir()?,
    };
    let project = ProjectConfiguration::locate_project_file(&search_location)?;

    let source = FileSystemMetaDataSource::default();
    let app_config = AppConfig::load(&source, &project.root_path);
    let mut session = EditorSession::new(Box::new(source), FieldCriticality::default());

    let stdout = std::io::stdout();
    let result = run_command(&mut session, &project, &args.command, &mut stdout.lock());

    // Edits made before a failure are still saved
    session.final_cleanup(&app_config, &project.root_path)?;
    result
}

/// Text typed on the command line as editor input for a field
pub fn input_from_text<'a>(
    record: &Record,
    field: &str,
    text: &'a str,
) -> PipelineResult<FieldInput<'a>> {
    match record.field(field)?.field_type() {
        FieldType::Boolean => match text.trim().parse::<bool>() {
            Ok(state) => Ok(FieldInput::Toggle(state)),
            Err(_) => Err(format!("{} expects true or false, got '{}'", field, text).into()),
        },
        _ => Ok(FieldInput::Text(text)),
    }
}

fn state_marker(state: FieldState) -> &'static str {
    match state {
        FieldState::Ok => " ",
        FieldState::Warning => "?",
        FieldState::Error => "!",
    }
}

fn display_text(display: FieldDisplay) -> String {
    match display {
        FieldDisplay::Label(x) => format!("{} (read only)", x),
        FieldDisplay::Text(x) => format!("\"{}\"", x),
        FieldDisplay::Toggle(x) => x.to_string(),
        FieldDisplay::Selection { selected, options } => options
            .get(selected)
            .cloned()
            .unwrap_or_default(),
        FieldDisplay::Components(x) => format!("[{}]", x.join(", ")),
    }
}

fn write_record(
    out: &mut dyn Write,
    session: &EditorSession,
    record: &Record,
    indent: &str,
) -> PipelineResult<()> {
    for (field, value) in record.iter() {
        let state = masktool_data::field_binding::field_state(field, value, session.criticality());
        writeln!(
            out,
            "{}{} {} = {}",
            indent,
            state_marker(state),
            field.name(),
            display_text(masktool_data::field_binding::render(field, value))
        )?;
    }
    Ok(())
}

fn write_additions(
    out: &mut dyn Write,
    meta_data: &MaskMetaData,
) -> PipelineResult<()> {
    for (index, label) in meta_data.additions().labels().iter().enumerate() {
        writeln!(out, "  [{}] {}", index, label)?;
    }
    Ok(())
}

/// Relative mesh paths are relative to the project root
fn resolve_mesh_path(
    project: &ProjectConfiguration,
    mesh: &Path,
) -> PathBuf {
    if mesh.is_absolute() {
        mesh.to_path_buf()
    } else {
        project.root_path.join(mesh)
    }
}

fn active(session: &EditorSession) -> PipelineResult<&MaskMetaData> {
    session
        .active()
        .ok_or_else(|| PipelineError::from("No mesh is active"))
}

pub fn run_command(
    session: &mut EditorSession,
    project: &ProjectConfiguration,
    command: &MaskToolCommand,
    out: &mut dyn Write,
) -> PipelineResult<()> {
    let mesh_path = |mesh: &PathBuf| resolve_mesh_path(project, mesh);

    match command {
        MaskToolCommand::List => {
            for mesh in find_mesh_files(project)? {
                let (status, mask_type) = session.check(&mesh);
                let relative = mesh.strip_prefix(&project.root_path).unwrap_or(&mesh);
                writeln!(
                    out,
                    "{:<10} {:<8} {}",
                    status.name(),
                    mask_type.name(),
                    relative.display()
                )?;
            }
        }
        MaskToolCommand::Show { mesh } => {
            session.switch_active(&mesh_path(mesh))?;
            let meta_data = active(session)?;
            writeln!(out, "{}", meta_data.status(session.criticality()).name())?;
            write_record(out, session, meta_data.record(), "")?;
            writeln!(out, "additions:")?;
            for (index, addition) in meta_data.additions().iter().enumerate() {
                writeln!(out, "  [{}] {}", index, addition.to_display_label())?;
                write_record(out, session, addition, "    ")?;
            }
        }
        MaskToolCommand::Set {
            mesh,
            field,
            value,
            addition,
        } => {
            session.switch_active(&mesh_path(mesh))?;
            match addition {
                Some(index) => {
                    let record = active(session)?.additions().get(*index)?;
                    let input = input_from_text(record, field, value)?;
                    session.set_addition_field(*index, field, input)?;
                }
                None => {
                    let input = input_from_text(active(session)?.record(), field, value)?;
                    session.set_field(field, input)?;
                }
            }
            writeln!(out, "{}", active(session)?.status(session.criticality()).name())?;
        }
        MaskToolCommand::Add { mesh, kind, name } => {
            session.switch_active(&mesh_path(mesh))?;
            let additions = session.active_mut()?.additions_mut();
            let index = additions.append_default(*kind);
            if let Some(name) = name {
                additions
                    .get_mut(index)?
                    .set("name", FieldInput::Text(name))?;
            }
            write_additions(out, active(session)?)?;
        }
        MaskToolCommand::Remove { mesh, index } => {
            session.switch_active(&mesh_path(mesh))?;
            let removed = session.active_mut()?.additions_mut().remove(*index)?;
            log::info!("Removed {}", removed.to_display_label());
            write_additions(out, active(session)?)?;
        }
        MaskToolCommand::MoveUp { mesh, index } => {
            session.switch_active(&mesh_path(mesh))?;
            if !session.move_addition_up(*index)? {
                log::info!("Addition {} is already first", index);
            }
            write_additions(out, active(session)?)?;
        }
        MaskToolCommand::MoveDown { mesh, index } => {
            session.switch_active(&mesh_path(mesh))?;
            if !session.move_addition_down(*index)? {
                log::info!("Addition {} is already last", index);
            }
            write_additions(out, active(session)?)?;
        }
        MaskToolCommand::Build { mesh, dry_run } => {
            let mesh = mesh_path(mesh);
            session.switch_active(&mesh)?;
            let plan = build_plan(&mesh, active(session)?);
            if *dry_run {
                for command in &plan {
                    writeln!(out, "{}", command)?;
                }
            } else {
                let mut runner = MaskMakerRunner::new(&project.maskmaker_path);
                let mut write_result = Ok(());
                run_build_plan(&mut runner, &plan, |line| {
                    if write_result.is_ok() {
                        write_result = writeln!(out, "{}", line);
                    }
                })?;
                write_result?;
            }
        }
        MaskToolCommand::CheckBinaries => {
            let check = BinaryCheck::check(project);
            if check.all_present() {
                writeln!(out, "All required binaries are present")?;
            }
            for (binary, path) in &check.missing {
                writeln!(out, "missing {} at {}: {}", binary.name(), path.display(), binary.hint())?;
            }
        }
    }

    Ok(())
}
