use crate::errors::{PruneError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// What an external command left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Turn a non-zero exit into `PruneError::CommandFailed`
    pub fn check(self, program: &str) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(PruneError::CommandFailed {
                program: program.to_string(),
                code: self.code,
                stderr: self.stderr,
            })
        }
    }
}

pub trait CommandRunner {
    /// Run `program` to completion
    ///
    /// A non-zero exit is not an error here, only a failure to spawn is.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

pub struct SystemRunner {
    workdir: PathBuf,
}

impl SystemRunner {
    pub fn new(workdir: &Path) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        log::debug!("Running: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| PruneError::Spawn(format!("{} command: {}", program, e)))?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            // Killed by a signal
            code: output.status.code().unwrap_or(1),
        })
    }
}

#[cfg(test)]
pub use mock::MockRunner;
