use std::path::PathBuf;

pub const GIT_PROGRAM: &str = "git";
pub const REVIEW_PROGRAM: &str = "gh";
pub const PROTECTED_BRANCH: &str = "main";

/// Everything a run needs to know about its surroundings
#[derive(Debug, Clone)]
pub struct Config {
    pub git_program: String,
    pub review_program: String,
    pub protected_branch: String,
    /// Directory commands run in and the fallback picker walks
    pub workdir: PathBuf,
}

impl Config {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            git_program: GIT_PROGRAM.to_string(),
            review_program: REVIEW_PROGRAM.to_string(),
            protected_branch: PROTECTED_BRANCH.to_string(),
            workdir: workdir.into(),
        }
    }

    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}
