// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific:
//
// - parse: turning user input ("owner/repo" or a full URL) into a RepoRef
// - fetch: retrieving the recursive tree listing from the GitHub API
//
// Everything downstream (tree building, command generation) is plain data
// transformation and lives in its own modules.
// =============================================================================

mod fetch;
mod parse;

// Re-export the public API so callers write `github::parse_repo(...)`
// instead of reaching into submodules
pub use fetch::{fetch_repo_tree, EntryKind, TreeEntry, TreeResponse};
pub use parse::{parse_repo, RepoRef};
