// src/tree/build.rs
// =============================================================================
// This module rebuilds a nested directory tree from the FLAT path list the
// GitHub API returns.
//
// The API gives us one entry per path, in no particular order:
//   src          (tree)
//   README.md    (blob)
//   src/main.rs  (blob)
//
// We want an actual hierarchy: root-level nodes, each directory owning an
// ordered list of its children. A repository can have several top-level
// entries, so the result is a forest (a Vec of roots), not a single tree.
//
// How it works:
// 1. Sort entries by path depth, then lexicographically by full path. After
//    this, every directory sorts before everything inside it - the one
//    property the whole reconstruction relies on.
// 2. Walk the sorted list BACKWARDS (deepest entries first), parking each
//    finished node in a map keyed by its parent's path. By the time we reach
//    a directory's own entry, all of its children are already built and
//    waiting under its path, so the directory can own them outright.
// 3. Entries whose parent never appears in the listing (or appears as a
//    file) are orphans; they are silently dropped, never invented around.
//
// Rust concepts:
// - HashMap/HashSet: O(1) parent lookup by path, no tree walking
// - Ownership: children are moved into their parent exactly once, so the
//   finished forest has no shared or cyclic references at all
// =============================================================================

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::github::{EntryKind, TreeEntry};

// One node of the rebuilt hierarchy
//
// Built once per fetch and never mutated afterwards; anything view-like
// (expansion, selection) belongs to whoever renders it, not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    /// The final path segment ("main.rs" for "src/main.rs")
    pub name: String,
    /// Full slash-joined path from the repository root
    pub path: String,
    /// File, directory, or submodule
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Present (possibly empty) for directories, absent for everything else
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// True when this node is a directory
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Tree
    }
}

// Rebuilds the forest of root-level nodes from a flat entry list
//
// Child order is always depth-then-lexicographic regardless of the order
// entries arrive in, so two shuffles of the same listing produce identical
// forests.
pub fn build_forest(mut entries: Vec<TreeEntry>) -> Vec<TreeNode> {
    // Shallow before deep, alphabetical within a depth
    entries.sort_by(|a, b| {
        depth(&a.path)
            .cmp(&depth(&b.path))
            .then_with(|| a.path.cmp(&b.path))
    });

    // Every directory path in the listing; children may only attach to these
    let dirs: HashSet<String> = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Tree)
        .map(|e| e.path.clone())
        .collect();

    // Finished nodes waiting to be adopted, keyed by their parent's path
    let mut pending: HashMap<String, Vec<TreeNode>> = HashMap::new();
    let mut roots: Vec<TreeNode> = Vec::new();

    // Deepest-first walk: a directory's children are always finished before
    // the directory itself gets built
    for entry in entries.into_iter().rev() {
        let children = if entry.kind == EntryKind::Tree {
            // The backwards walk parked them in reverse, so flip them
            let mut kids = pending.remove(&entry.path).unwrap_or_default();
            kids.reverse();
            Some(kids)
        } else {
            None
        };

        let parent = parent_path(&entry.path).map(str::to_owned);
        let node = TreeNode {
            name: leaf_name(&entry.path).to_string(),
            path: entry.path,
            kind: entry.kind,
            children,
        };

        match parent {
            // Single-segment path: a root-level node
            None => roots.push(node),
            // Parent exists and is a directory: park under it
            Some(p) if dirs.contains(&p) => pending.entry(p).or_default().push(node),
            // Orphan (parent entry missing, or the parent is a file):
            // drop it quietly along with any subtree it collected
            Some(_) => {}
        }
    }

    roots.reverse();
    roots
}

// Finds the node at an exact path anywhere in the forest
//
// Descends only into the one directory whose path prefixes the target, so
// the walk is linear in tree depth times sibling count, not in total nodes.
pub fn find_node<'a>(nodes: &'a [TreeNode], path: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.path == path {
            return Some(node);
        }
        // Only a true path-segment prefix counts ("src" prefixes "src/a.rs"
        // but not "src2/a.rs")
        let is_ancestor = path
            .strip_prefix(node.path.as_str())
            .map_or(false, |rest| rest.starts_with('/'));
        if is_ancestor {
            if let Some(children) = &node.children {
                return find_node(children, path);
            }
        }
    }
    None
}

// Number of path segments ("a/b/c" -> 3)
fn depth(path: &str) -> usize {
    path.split('/').count()
}

// The last path segment ("a/b/c" -> "c")
fn leaf_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// The path with its last segment removed, or None for root-level paths
fn parent_path(path: &str) -> Option<&str> {
    path.rfind('/').map(|idx| &path[..idx])
}
