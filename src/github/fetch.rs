// src/github/fetch.rs
// =============================================================================
// This module fetches the recursive file listing of a repository branch.
//
// Strategy:
// - One call to the GitHub git/trees API with ?recursive=1
// - The response is a FLAT list of every path in the repository, each tagged
//   as a file ("blob"), directory ("tree"), or submodule ("commit")
// - Hierarchy reconstruction happens later, in the tree module
//
// Why the API and not raw.githubusercontent.com?
// - Raw URLs serve file CONTENTS; only the API can list what exists
// - The unauthenticated API works fine for public repositories, which is
//   all this tool supports
//
// Rust concepts:
// - async functions: For network I/O
// - serde derive: Declarative JSON -> struct conversion
// - anyhow: One error type for every failure the caller might see
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::parse::RepoRef;

// One record from the recursive listing: a path plus what lives there
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    /// Slash-joined path relative to the repository root
    pub path: String,
    /// Whether this entry is a file, a directory, or a submodule
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

// The GitHub tree API's entry types
//
// "commit" marks a submodule pointer. #[serde(other)] also routes any
// entry type a future API version might add into that variant instead of
// failing the whole deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file
    Blob,
    /// A directory
    Tree,
    /// A submodule (or anything else we don't recognize)
    #[serde(other)]
    Commit,
}

// The full response from the git/trees endpoint
//
// We only use `tree` and `truncated`; sha/url and per-entry metadata are
// left out of the model so serde simply skips them.
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    /// Flat listing of every path in the branch, in no guaranteed order
    pub tree: Vec<TreeEntry>,
    /// True when the repository was too large for one listing; the GitHub
    /// API silently cut the list short and so will our tree
    #[serde(default)]
    pub truncated: bool,
}

// Fetches the recursive tree listing for a repository reference
//
// Parameters:
//   repo: the parsed (owner, repo, branch) triple
//
// Returns: Result<TreeResponse>
//   Success: the flat entry list plus the truncation flag
//   Error: a message ready to show the user (404 gets a friendlier one)
//
// This is the only network call in the whole program. It never retries,
// never paginates, and never authenticates.
pub async fn fetch_repo_tree(repo: &RepoRef) -> Result<TreeResponse> {
    // The GitHub API rejects requests without a User-Agent header
    let client = Client::builder()
        .user_agent(concat!("gh-grab/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let api_url = format!(
        "https://api.github.com/repos/{}/{}/git/trees/{}?recursive=1",
        repo.owner, repo.repo, repo.branch
    );

    let response = client.get(&api_url).send().await?;

    if !response.status().is_success() {
        // 404 means the repo (or branch) doesn't exist or isn't public;
        // everything else gets the raw status so the user can investigate
        if response.status() == StatusCode::NOT_FOUND {
            return Err(anyhow!(
                "Repository not found. Please check the URL and make sure the repository is public."
            ));
        }
        return Err(anyhow!(
            "Failed to fetch repository tree: {}",
            response.status()
        ));
    }

    let tree = response.json::<TreeResponse>().await?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tree_response() {
        // Trimmed-down shape of a real git/trees response; extra fields like
        // sha, mode and url must be ignored, not rejected
        let json = r#"{
            "sha": "abc123",
            "url": "https://api.github.com/repos/o/r/git/trees/abc123",
            "tree": [
                { "path": "README.md", "mode": "100644", "type": "blob", "sha": "d1", "size": 10, "url": "u1" },
                { "path": "src", "mode": "040000", "type": "tree", "sha": "d2", "url": "u2" },
                { "path": "src/main.rs", "mode": "100644", "type": "blob", "sha": "d3", "size": 42, "url": "u3" }
            ],
            "truncated": false
        }"#;

        let response: TreeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.tree.len(), 3);
        assert!(!response.truncated);
        assert_eq!(response.tree[0].path, "README.md");
        assert_eq!(response.tree[0].kind, EntryKind::Blob);
        assert_eq!(response.tree[1].kind, EntryKind::Tree);
    }

    #[test]
    fn test_deserialize_submodule_entry() {
        let json = r#"{ "path": "vendor/lib", "type": "commit" }"#;
        let entry: TreeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::Commit);
    }

    #[test]
    fn test_deserialize_unknown_kind_does_not_fail() {
        let json = r#"{ "path": "weird", "type": "hologram" }"#;
        let entry: TreeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::Commit);
    }

    #[test]
    fn test_deserialize_truncated_flag() {
        let json = r#"{ "tree": [], "truncated": true }"#;
        let response: TreeResponse = serde_json::from_str(json).unwrap();
        assert!(response.truncated);
    }
}
