use crate::errors::Result;
use crate::github::types::{MergeStatus, PullRequestView};
use crate::runner::CommandRunner;

const NO_PULL_REQUESTS: &str = "no pull requests found";

pub struct GitHubCli<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: CommandRunner> GitHubCli<'a, R> {
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Ask GitHub whether the pull request for `branch` has been merged
    pub fn merge_status(&self, branch: &str) -> Result<MergeStatus> {
        log::debug!("Checking merge status for branch: {}", branch);

        let output = self
            .runner
            .run(self.program, &["pr", "view", branch, "--json", "mergedAt"])?;

        if !output.success() && output.stderr.contains(NO_PULL_REQUESTS) {
            log::debug!("No PR for {}", branch);
            return Ok(MergeStatus::NoPullRequest);
        }

        let output = output.check(self.program)?;
        let view: PullRequestView = serde_json::from_str(&output.stdout)?;
        let status = MergeStatus::from(&view);
        log::debug!("Merge status for {}: {:?}", branch, status);

        Ok(status)
    }
}
