// src/github/parse.rs
// =============================================================================
// This module turns whatever the user typed into a normalized repository
// reference: (owner, repo, branch).
//
// Accepted input forms:
// - Shorthand: "owner/repo" (anything without a "://" scheme separator)
// - Full URL:  "https://github.com/owner/repo" with any trailing path
//   segments ("tree/main/src", ".git", a final slash) ignored
//
// The branch always comes from the separate branch argument, never from the
// pasted URL. Even "https://github.com/o/r/tree/dev" keeps the caller's
// branch; the URL's "dev" is discarded.
//
// Rust concepts:
// - Option<T>: A parse failure is a plain None, not an error or a panic
// - url::Url: Proper URL parsing instead of string prefix surgery
// - Iterators: split + filter to drop empty path segments
// =============================================================================

use url::Url;

// A normalized reference to a fetchable GitHub tree
//
// Immutable once constructed; every successful parse creates a fresh value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// The user or organization that owns the repository
    pub owner: String,
    /// The repository name
    pub repo: String,
    /// The branch to address (caller-supplied, e.g. "main")
    pub branch: String,
}

// Parses a user-supplied string plus a branch into a RepoRef
//
// Returns None when the input matches neither accepted form. The caller is
// responsible for turning None into a friendly message; nothing here ever
// panics or touches the network.
//
// Examples:
//   parse_repo("rust-lang/rust", "main")                  -> Some(...)
//   parse_repo("https://github.com/rust-lang/rust", "main") -> Some(...)
//   parse_repo("https://gitlab.com/user/repo", "main")    -> None
//   parse_repo("no-slash-here", "main")                   -> None
pub fn parse_repo(input: &str, branch: &str) -> Option<RepoRef> {
    // Surrounding whitespace never carries meaning
    let input = input.trim();

    // Shorthand format: no scheme separator, at least one slash
    if !input.contains("://") && input.contains('/') {
        return parse_shorthand(input, branch);
    }

    // Full URL format
    match Url::parse(input) {
        Ok(url) => {
            // Only github.com is a recognized host; a well-formed URL to any
            // other host is still a failure
            if url.host_str() != Some("github.com") {
                return None;
            }

            // Path segments, with empties from doubled or trailing slashes
            // dropped. The first two are owner and repo; anything after
            // (e.g. "tree/<branch>/<subpath>") is ignored.
            let parts: Vec<&str> = url
                .path()
                .split('/')
                .filter(|s| !s.is_empty())
                .collect();

            if parts.len() < 2 {
                return None;
            }

            Some(RepoRef {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
                branch: branch.to_string(),
            })
        }
        // If URL parsing itself fails, give the shorthand interpretation of
        // the raw string one more chance before declaring failure
        Err(_) => parse_shorthand(input, branch),
    }
}

// Parses the "owner/repo[/extra...]" shorthand form
//
// Splits on '/', drops empty segments (so "owner/repo/" works), and takes
// the first two. Fewer than two usable segments is a failure.
fn parse_shorthand(input: &str, branch: &str) -> Option<RepoRef> {
    let parts: Vec<&str> = input.split('/').filter(|s| !s.is_empty()).collect();

    if parts.len() < 2 {
        return None;
    }

    Some(RepoRef {
        owner: parts[0].to_string(),
        repo: parts[1].to_string(),
        branch: branch.to_string(),
    })
}
