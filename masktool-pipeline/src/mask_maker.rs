use crate::{BuildCommand, PipelineError, PipelineResult};
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};

pub type OutputLineIterator = Box<dyn Iterator<Item = PipelineResult<String>>>;

/// Runs build commands, yielding the compiler's output as it is produced
pub trait CommandRunner {
    fn run(
        &mut self,
        command: &BuildCommand,
    ) -> PipelineResult<OutputLineIterator>;
}

/// Runs commands through the maskmaker binary
pub struct MaskMakerRunner {
    binary: PathBuf,
}

impl MaskMakerRunner {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        MaskMakerRunner {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl CommandRunner for MaskMakerRunner {
    fn run(
        &mut self,
        command: &BuildCommand,
    ) -> PipelineResult<OutputLineIterator> {
        if !self.binary.exists() {
            return Err(PipelineError::BinaryMissing(self.binary.clone()));
        }

        log::debug!("Running {}", command);
        let mut child = Command::new(&self.binary)
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| format!("maskmaker {} has no stdout", command.verb))?;

        Ok(Box::new(OutputLines {
            verb: command.verb.clone(),
            child: Some(child),
            lines: BufReader::new(stdout).lines(),
        }))
    }
}

/// Stdout of a running compiler, line by line. Once stdout closes the process is waited on and a
/// failing exit status is yielded as the last item.
struct OutputLines {
    verb: String,
    child: Option<Child>,
    lines: Lines<BufReader<ChildStdout>>,
}

impl Iterator for OutputLines {
    type Item = PipelineResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut child = self.child.take()?;
        match self.lines.next() {
            Some(Ok(line)) => {
                self.child = Some(child);
                Some(Ok(line))
            }
            Some(Err(e)) => {
                // Don't leave the process running once we stop reading its output
                let _ = child.kill();
                let _ = child.wait();
                Some(Err(e.into()))
            }
            None => match child.wait() {
                Ok(status) if status.success() => None,
                Ok(status) => Some(Err(PipelineError::ProcessFailed {
                    verb: self.verb.clone(),
                    status,
                })),
                Err(e) => Some(Err(e.into())),
            },
        }
    }
}

// Dropping the output before the end stops the compiler
impl Drop for OutputLines {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            log::debug!("Stopping maskmaker {} before it finished", self.verb);
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Runs every command in order, handing each output line to `on_line`. Stops at the first
/// command that fails.
#[profiling::function]
pub fn run_build_plan(
    runner: &mut dyn CommandRunner,
    commands: &[BuildCommand],
    mut on_line: impl FnMut(&str),
) -> PipelineResult<()> {
    for command in commands {
        profiling::scope!("run build command");
        log::info!("{}", command);
        for line in runner.run(command)? {
            on_line(&line?);
        }
    }

    Ok(())
}

/// Records commands instead of running them. Each run yields `output` as its output lines.
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: Vec<BuildCommand>,
    pub output: Vec<String>,
    pub fail_on_verb: Option<String>,
}

impl CommandRunner for RecordingRunner {
    fn run(
        &mut self,
        command: &BuildCommand,
    ) -> PipelineResult<OutputLineIterator> {
        self.commands.push(command.clone());
        if self.fail_on_verb.as_deref() == Some(command.verb.as_str()) {
            return Err(format!("maskmaker {} failed", command.verb).into());
        }

        let lines: Vec<PipelineResult<String>> = self.output.iter().cloned().map(Ok).collect();
        Ok(Box::new(lines.into_iter()))
    }
}
