use crate::{
    config::Config,
    errors::{PruneError, Result},
    fallback::FilePicker,
    git::{Git, WorkTree},
    github::{GitHubCli, MergeStatus},
    prompt::Terminal,
    runner::CommandRunner,
};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Branches were processed
    Swept,
    /// Not in a repository; this file was deleted instead
    DeletedFile(PathBuf),
    /// Not in a repository and nothing to offer
    NothingToDelete,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::DeletedFile(_) => 1,
            Outcome::Swept | Outcome::NothingToDelete => 0,
        }
    }
}

/// Remove the protected branch from the listing, keeping the order of the rest
///
/// Only the first occurrence goes; a listing without it is an error.
pub fn without_protected(mut branches: Vec<String>, protected: &str) -> Result<Vec<String>> {
    let position = branches
        .iter()
        .position(|branch| branch == protected)
        .ok_or_else(|| PruneError::ProtectedBranchMissing(protected.to_string()))?;
    branches.remove(position);
    Ok(branches)
}

pub struct Sweeper<'a, R: CommandRunner> {
    git: Git<'a, R>,
    github: GitHubCli<'a, R>,
    protected_branch: &'a str,
}

impl<'a, R: CommandRunner> Sweeper<'a, R> {
    pub fn new(runner: &'a R, config: &'a Config) -> Self {
        Self {
            git: Git::new(runner, &config.git_program),
            github: GitHubCli::new(runner, &config.review_program),
            protected_branch: &config.protected_branch,
        }
    }

    pub fn branches(&self) -> Result<Vec<String>> {
        let branches = without_protected(self.git.local_branches()?, self.protected_branch)?;
        log::debug!("Branches to check: {:?}", branches);
        Ok(branches)
    }

    /// Delete every branch whose pull request is merged
    ///
    /// Branches without a pull request are only deleted if the user agrees.
    /// Returns the deleted branches in the order they went.
    pub fn sweep<I: BufRead, O: Write>(
        &self,
        terminal: &mut Terminal<I, O>,
    ) -> Result<Vec<String>> {
        let mut deleted = Vec::new();

        for branch in self.branches()? {
            if self.should_delete(&branch, terminal)? {
                let report = self.git.delete_branch(&branch)?;
                terminal.relay(&report)?;
                deleted.push(branch);
            }
        }

        log::info!("🧹 Deleted {} branch(es): {:?}", deleted.len(), deleted);
        Ok(deleted)
    }

    fn should_delete<I: BufRead, O: Write>(
        &self,
        branch: &str,
        terminal: &mut Terminal<I, O>,
    ) -> Result<bool> {
        match self.github.merge_status(branch)? {
            MergeStatus::Merged => {
                log::info!("✅ PR for {} is merged", branch);
                Ok(true)
            }
            MergeStatus::NotMerged => {
                log::info!("⏭️  PR for {} is not merged, keeping it", branch);
                Ok(false)
            }
            MergeStatus::NoPullRequest => terminal.confirm(
                &format!("No PR found for {}. Delete local copy anyways? (y/N)", branch),
                false,
            ),
        }
    }
}

/// Sweep merged branches, or offer a file for deletion when outside a repository
pub fn run<R, I, O, G>(
    config: &Config,
    runner: &R,
    terminal: &mut Terminal<I, O>,
    rng: &mut G,
) -> Result<Outcome>
where
    R: CommandRunner,
    I: BufRead,
    O: Write,
    G: Rng,
{
    match Git::new(runner, &config.git_program).work_tree()? {
        WorkTree::Inside => {
            Sweeper::new(runner, config).sweep(terminal)?;
            Ok(Outcome::Swept)
        }
        WorkTree::Outside => {
            let deleted = FilePicker::new(&config.workdir, rng).run(terminal)?;
            Ok(deleted.map_or(Outcome::NothingToDelete, Outcome::DeletedFile))
        }
    }
}
