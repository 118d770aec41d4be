// src/download/curl.rs
// =============================================================================
// This module produces the actual download commands.
//
// For any file in the repository we can build a raw.githubusercontent.com
// URL that serves its bytes directly - no cloning, no API tokens. Wrapping
// that URL in `curl -L ... --create-dirs -o <path>` gives the user a command
// that recreates the file locally with its original relative path:
//
//   curl -L "https://raw.githubusercontent.com/o/r/refs/heads/main/src/lib.rs" \
//       --create-dirs -o "src/lib.rs"
//
// Encoding rule worth calling out: each URL path SEGMENT is percent-encoded
// on its own (so "a b.txt" becomes "a%20b.txt" while the '/' separators stay
// literal), but the -o destination is always the raw, unencoded path - curl
// writes to the filesystem, not to a URL.
//
// Rust concepts:
// - percent-encoding crate: AsciiSet describes exactly which bytes to escape
// - Recursion: depth-first file collection over the owned tree
// =============================================================================

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::github::{EntryKind, RepoRef};
use crate::tree::TreeNode;

// Escape everything except the characters JavaScript's encodeURIComponent
// leaves alone: letters, digits, and - _ . ! ~ * ' ( )
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// Percent-encodes each '/'-delimited segment of a path independently,
// keeping the separators themselves literal
fn encode_segments(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

// Builds the direct-content URL for one file
//
// Format (fixed by GitHub's raw host, branch-ref addressing):
//   https://raw.githubusercontent.com/{owner}/{repo}/refs/heads/{branch}/{path}
//
// Owner, repo and branch are each encoded as whole segments; the path is
// encoded segment by segment.
pub fn raw_file_url(repo: &RepoRef, path: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{}/{}/refs/heads/{}/{}",
        utf8_percent_encode(&repo.owner, COMPONENT),
        utf8_percent_encode(&repo.repo, COMPONENT),
        utf8_percent_encode(&repo.branch, COMPONENT),
        encode_segments(path)
    )
}

// Builds a complete, ready-to-run download command for one file
//
// -L follows redirects, --create-dirs makes any missing parent directories,
// and -o writes to the ORIGINAL (unencoded) relative path so the local copy
// lands exactly where it sat in the repository.
pub fn curl_command(repo: &RepoRef, path: &str) -> String {
    let url = raw_file_url(repo, path);
    format!("curl -L \"{}\" --create-dirs -o \"{}\"", url, path)
}

// Collects every file path under a node, depth-first, children in order
//
// A file node yields just itself; directories yield their descendants in
// tree order. Submodule pointers have no downloadable content and yield
// nothing.
pub fn collect_files(node: &TreeNode) -> Vec<String> {
    let mut files = Vec::new();
    collect_into(node, &mut files);
    files
}

fn collect_into(node: &TreeNode, files: &mut Vec<String>) {
    if node.kind == EntryKind::Blob {
        files.push(node.path.clone());
    } else if let Some(children) = &node.children {
        for child in children {
            collect_into(child, files);
        }
    }
}

// One curl command per file under the node, in collect_files order
//
// Callers pair each command with the file path at the same index, so the
// two sequences must stay aligned - hence a straight map, no filtering.
pub fn folder_commands(repo: &RepoRef, node: &TreeNode) -> Vec<String> {
    collect_files(node)
        .iter()
        .map(|path| curl_command(repo, path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::TreeEntry;
    use crate::tree::build_forest;

    fn repo() -> RepoRef {
        RepoRef {
            owner: "octo".to_string(),
            repo: "demo".to_string(),
            branch: "main".to_string(),
        }
    }

    fn entry(path: &str, kind: EntryKind) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            kind,
        }
    }

    #[test]
    fn test_raw_url_format() {
        assert_eq!(
            raw_file_url(&repo(), "src/lib.rs"),
            "https://raw.githubusercontent.com/octo/demo/refs/heads/main/src/lib.rs"
        );
    }

    #[test]
    fn test_raw_url_encodes_segments_but_not_separators() {
        let url = raw_file_url(&repo(), "docs/my notes/draft#1.md");
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/octo/demo/refs/heads/main/docs/my%20notes/draft%231.md"
        );
    }

    #[test]
    fn test_raw_url_encodes_branch() {
        let mut r = repo();
        r.branch = "feature/new ui".to_string();
        let url = raw_file_url(&r, "a.txt");
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/octo/demo/refs/heads/feature%2Fnew%20ui/a.txt"
        );
    }

    #[test]
    fn test_curl_command_keeps_destination_unencoded() {
        let cmd = curl_command(&repo(), "src/a b.txt");
        assert_eq!(
            cmd,
            "curl -L \"https://raw.githubusercontent.com/octo/demo/refs/heads/main/src/a%20b.txt\" --create-dirs -o \"src/a b.txt\""
        );
    }

    #[test]
    fn test_collect_files_single_file_node() {
        let forest = build_forest(vec![entry("only.txt", EntryKind::Blob)]);
        assert_eq!(collect_files(&forest[0]), vec!["only.txt"]);
    }

    #[test]
    fn test_collect_files_depth_first_in_child_order() {
        let forest = build_forest(vec![
            entry("a", EntryKind::Tree),
            entry("a/b.txt", EntryKind::Blob),
            entry("a/c", EntryKind::Tree),
            entry("a/c/d.txt", EntryKind::Blob),
        ]);
        assert_eq!(collect_files(&forest[0]), vec!["a/b.txt", "a/c/d.txt"]);
    }

    #[test]
    fn test_collect_files_skips_submodules() {
        let forest = build_forest(vec![
            entry("pkg", EntryKind::Tree),
            entry("pkg/real.rs", EntryKind::Blob),
            entry("pkg/vendored", EntryKind::Commit),
        ]);
        assert_eq!(collect_files(&forest[0]), vec!["pkg/real.rs"]);
    }

    #[test]
    fn test_collect_files_round_trips_the_listing() {
        // Every blob in a well-formed listing must come back out, exactly
        // once, when collecting over the whole forest
        let entries = vec![
            entry("README.md", EntryKind::Blob),
            entry("src", EntryKind::Tree),
            entry("src/main.rs", EntryKind::Blob),
            entry("src/util", EntryKind::Tree),
            entry("src/util/io.rs", EntryKind::Blob),
        ];
        let forest = build_forest(entries);

        let mut collected = Vec::new();
        for root in &forest {
            collected.extend(collect_files(root));
        }
        collected.sort();
        assert_eq!(
            collected,
            vec!["README.md", "src/main.rs", "src/util/io.rs"]
        );
    }

    #[test]
    fn test_folder_commands_align_with_file_list() {
        let forest = build_forest(vec![
            entry("a", EntryKind::Tree),
            entry("a/one.txt", EntryKind::Blob),
            entry("a/two.txt", EntryKind::Blob),
        ]);
        let r = repo();

        let files = collect_files(&forest[0]);
        let commands = folder_commands(&r, &forest[0]);

        assert_eq!(files.len(), commands.len());
        for (file, command) in files.iter().zip(&commands) {
            assert_eq!(command, &curl_command(&r, file));
        }
    }
}
