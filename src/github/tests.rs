use super::*;
use crate::{errors::PruneError, github::types::PullRequestView, runner::MockRunner};

fn view_command(branch: &str) -> String {
    format!("gh pr view {} --json mergedAt", branch)
}

#[test]
fn test_merged_pull_request() {
    let runner = MockRunner::new().ok(
        &view_command("feat-a"),
        r#"{"mergedAt":"2024-03-01T12:00:00Z"}"#,
    );
    let github = GitHubCli::new(&runner, "gh");

    assert_eq!(github.merge_status("feat-a").unwrap(), MergeStatus::Merged);
    assert_eq!(runner.get_calls(), vec![view_command("feat-a")]);
}

#[test]
fn test_open_pull_request() {
    let runner = MockRunner::new().ok(&view_command("feat-b"), "{\"mergedAt\":null}\n");
    let github = GitHubCli::new(&runner, "gh");

    assert_eq!(github.merge_status("feat-b").unwrap(), MergeStatus::NotMerged);
}

#[test]
fn test_no_pull_request() {
    let runner = MockRunner::new().fail(
        &view_command("orphan"),
        "no pull requests found for branch \"orphan\"\n",
        1,
    );
    let github = GitHubCli::new(&runner, "gh");

    assert_eq!(
        github.merge_status("orphan").unwrap(),
        MergeStatus::NoPullRequest
    );
}

#[test]
fn test_other_failure_keeps_gh_exit_code() {
    let runner = MockRunner::new().fail(
        &view_command("feat-a"),
        "To get started with GitHub CLI, please run:  gh auth login\n",
        4,
    );
    let github = GitHubCli::new(&runner, "gh");

    match github.merge_status("feat-a") {
        Err(PruneError::CommandFailed {
            program,
            code,
            stderr,
        }) => {
            assert_eq!(program, "gh");
            assert_eq!(code, 4);
            assert!(stderr.contains("gh auth login"));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_garbage_output_is_a_json_error() {
    let runner = MockRunner::new().ok(&view_command("feat-a"), "not json");
    let github = GitHubCli::new(&runner, "gh");

    assert!(matches!(
        github.merge_status("feat-a"),
        Err(PruneError::Json(_))
    ));
}

#[test]
fn test_missing_merged_at_field_counts_as_not_merged() {
    let view: PullRequestView = serde_json::from_str("{}").unwrap();
    assert_eq!(view.merged_at, None);
    assert_eq!(MergeStatus::from(&view), MergeStatus::NotMerged);
}
