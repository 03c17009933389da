use serde::Deserialize;

/// `gh pr view --json mergedAt` output
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestView {
    #[serde(rename = "mergedAt", default)]
    pub merged_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStatus {
    Merged,
    NotMerged,
    NoPullRequest,
}

impl From<&PullRequestView> for MergeStatus {
    fn from(view: &PullRequestView) -> Self {
        if view.merged_at.is_some() {
            MergeStatus::Merged
        } else {
            MergeStatus::NotMerged
        }
    }
}
