pub mod cli;
pub mod types;

#[cfg(test)]
mod tests;

pub use cli::GitHubCli;
pub use types::MergeStatus;
