//! Thin wrapper over the git CLI: work tree check, branch listing, forced deletion

use crate::{
    errors::{PruneError, Result},
    runner::CommandRunner,
};

const NOT_A_REPOSITORY: &str = "not a git repository";
const HEADS_PREFIX: &str = "refs/heads/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkTree {
    Inside,
    Outside,
}

pub struct Git<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: CommandRunner> Git<'a, R> {
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.runner.run(self.program, args)?.check(self.program)?;
        Ok(output.stdout)
    }

    /// Check whether the working directory sits inside a work tree
    pub fn work_tree(&self) -> Result<WorkTree> {
        let output = self
            .runner
            .run(self.program, &["rev-parse", "--is-inside-work-tree"])?;

        if !output.success() && output.stderr.contains(NOT_A_REPOSITORY) {
            log::info!("Not inside a git repository");
            return Ok(WorkTree::Outside);
        }

        match output.check(self.program)?.stdout.trim() {
            "true" => Ok(WorkTree::Inside),
            other => {
                log::debug!("rev-parse --is-inside-work-tree said {:?}", other);
                Err(PruneError::NotAWorkTree)
            }
        }
    }

    /// List every local branch, in the order git reports them
    pub fn local_branches(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["for-each-ref", "--format=%(refname)", HEADS_PREFIX])?;
        Ok(parse_branch_refs(&stdout))
    }

    /// Force delete a local branch, returning git's own report
    pub fn delete_branch(&self, branch: &str) -> Result<String> {
        log::debug!("Deleting branch {}", branch);
        self.run(&["branch", "-D", branch])
    }
}

pub fn parse_branch_refs(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(|line| line.trim())
        .map(|line| line.strip_prefix(HEADS_PREFIX).unwrap_or(line))
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MockRunner;

    const REV_PARSE: &str = "git rev-parse --is-inside-work-tree";

    #[test]
    fn test_parse_branch_refs_strips_prefix_and_blank_lines() {
        let listing = "refs/heads/main\nrefs/heads/feat/a\n\nrefs/heads/fix-b\n";
        assert_eq!(
            parse_branch_refs(listing),
            vec!["main".to_string(), "feat/a".to_string(), "fix-b".to_string()]
        );
    }

    #[test]
    fn test_parse_branch_refs_keeps_order() {
        let listing = "refs/heads/zeta\nrefs/heads/alpha\nrefs/heads/main\n";
        assert_eq!(parse_branch_refs(listing), vec!["zeta", "alpha", "main"]);
    }

    #[test]
    fn test_work_tree_inside() {
        let runner = MockRunner::new().ok(REV_PARSE, "true\n");
        let git = Git::new(&runner, "git");
        assert_eq!(git.work_tree().unwrap(), WorkTree::Inside);
    }

    #[test]
    fn test_work_tree_outside() {
        let runner = MockRunner::new().fail(
            REV_PARSE,
            "fatal: not a git repository (or any of the parent directories): .git\n",
            128,
        );
        let git = Git::new(&runner, "git");
        assert_eq!(git.work_tree().unwrap(), WorkTree::Outside);
    }

    #[test]
    fn test_work_tree_other_failure_is_fatal() {
        let runner = MockRunner::new().fail(REV_PARSE, "fatal: detected dubious ownership\n", 128);
        let git = Git::new(&runner, "git");
        let err = git.work_tree().unwrap_err();
        assert_eq!(err.exit_code(), 128);
        assert!(matches!(err, PruneError::CommandFailed { .. }));
    }

    #[test]
    fn test_work_tree_inside_git_dir() {
        let runner = MockRunner::new().ok(REV_PARSE, "false\n");
        let git = Git::new(&runner, "git");
        assert!(matches!(git.work_tree(), Err(PruneError::NotAWorkTree)));
    }

    #[test]
    fn test_local_branches() {
        let runner = MockRunner::new().ok(
            "git for-each-ref --format=%(refname) refs/heads/",
            "refs/heads/main\nrefs/heads/feat-a\n",
        );
        let git = Git::new(&runner, "git");
        assert_eq!(git.local_branches().unwrap(), vec!["main", "feat-a"]);
    }

    #[test]
    fn test_delete_branch_failure_keeps_exit_code() {
        let runner = MockRunner::new().fail(
            "git branch -D feat-a",
            "error: Cannot delete branch 'feat-a' checked out at '/tmp/x'\n",
            1,
        );
        let git = Git::new(&runner, "git");
        let err = git.delete_branch("feat-a").unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
