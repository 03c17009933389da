use thiserror::Error;

#[derive(Error, Debug)]
pub enum PruneError {
    #[error("{program} exited with code {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("Failed to execute {0}")]
    Spawn(String),

    #[error("Protected branch '{0}' not found among local branches")]
    ProtectedBranchMissing(String),

    #[error("Not inside a git work tree (bare repository or .git directory)")]
    NotAWorkTree,

    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PruneError {
    /// Process exit code for a fatal error
    ///
    /// External command failures keep the command's own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            PruneError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PruneError>;
