use serde::Serialize;

/// A file path split into its `/`-separated segments. The last segment
/// is the file name, everything before it the directory chain.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: String,
    pub segments: Vec<String>,
}

impl FileInfo {
    pub fn new(path: &str) -> Self {
        FileInfo {
            path: path.to_string(),
            segments: path.split('/').map(str::to_string).collect(),
        }
    }
}

/// One group of files in the output partition.
///
/// `path` is the tree position the group collected at: a directory
/// path for merged groups, the full file path for a singleton that was
/// never merged, empty for the repository root. `is_leftovers` marks
/// groups that do not contain every file under their path, i.e. the
/// residue left behind after siblings merged elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCluster {
    pub path: String,
    pub files: Vec<String>,
    pub weight: usize,
    pub is_leftovers: bool,
}

struct Node {
    path: String,
    children: Vec<usize>,
    files: Vec<FileInfo>,
    size: usize,
}

impl Node {
    fn new(path: String) -> Self {
        Node {
            path,
            children: Vec::new(),
            files: Vec::new(),
            size: 0,
        }
    }
}

/// Partition `paths` into directory-aligned clusters of at most
/// `max_size` files, avoiding clusters below `min_size` wherever the
/// tree allows it.
///
/// Expects `min_size >= 1` and `max_size >= min_size` (the CLI
/// enforces both). Total over any path list; paths without a `/` are
/// root-level files. Empty input yields an empty partition.
///
/// A cluster can exceed `max_size` only when a single directory holds
/// more than `max_size` files and `min_size > 1` forbids peeling
/// singletons off it.
pub fn cluster_files(paths: &[String], max_size: usize, min_size: usize) -> Vec<FileCluster> {
    if paths.is_empty() {
        return Vec::new();
    }

    let mut nodes = build_tree(paths);

    // Each pass may only partially settle a node whose children moved;
    // iterate until a full pass changes nothing.
    while process(&mut nodes, 0, max_size, min_size) {}

    let mut clusters: Vec<FileCluster> = nodes
        .iter()
        .filter(|n| !n.files.is_empty())
        .map(|n| FileCluster {
            path: n.path.clone(),
            files: n.files.iter().map(|f| f.path.clone()).collect(),
            weight: n.files.len(),
            is_leftovers: n.size > n.files.len(),
        })
        .collect();

    clusters.sort_by(|a, b| b.path.cmp(&a.path));
    clusters
}

/// Build the prefix tree: every path segment becomes a node, the file
/// itself lands on its final segment's node, and every node on the
/// walk counts the traversal in `size`.
fn build_tree(paths: &[String]) -> Vec<Node> {
    let mut nodes = vec![Node::new(String::new())];

    for path in paths {
        let info = FileInfo::new(path);
        let mut cur = 0;
        nodes[cur].size += 1;

        for seg in &info.segments {
            cur = child_named(&mut nodes, cur, seg);
            nodes[cur].size += 1;
        }

        nodes[cur].files.push(info);
    }

    nodes
}

fn child_named(nodes: &mut Vec<Node>, parent: usize, segment: &str) -> usize {
    for i in 0..nodes[parent].children.len() {
        let c = nodes[parent].children[i];
        let last = nodes[c].path.rsplit('/').next().unwrap_or("");
        if last == segment {
            return c;
        }
    }

    let path = if nodes[parent].path.is_empty() {
        segment.to_string()
    } else {
        format!("{}/{}", nodes[parent].path, segment)
    };
    nodes.push(Node::new(path));
    let idx = nodes.len() - 1;
    nodes[parent].children.push(idx);
    idx
}

/// One bottom-up pass over the subtree at `idx`. Returns whether any
/// structural change happened.
fn process(nodes: &mut Vec<Node>, idx: usize, max_size: usize, min_size: usize) -> bool {
    let mut changed = false;

    let children: Vec<usize> = nodes[idx].children.clone();
    for c in children {
        if process(nodes, c, max_size, min_size) {
            changed = true;
        }
    }

    // Absorb the smallest child while the merge stays within budget.
    // A lone child is a pass-through prefix, never absorbed — that is
    // what keeps an unmerged file's cluster at its own full path.
    loop {
        if nodes[idx].children.len() < 2 {
            break;
        }
        let pos = smallest_child(nodes, idx);
        let child = nodes[idx].children[pos];
        if nodes[child].size + nodes[idx].files.len() > max_size {
            break;
        }
        let mut absorbed = Vec::new();
        flatten_into(nodes, child, &mut absorbed);
        nodes[idx].files.extend(absorbed);
        nodes[idx].children.remove(pos);
        changed = true;
    }

    if nodes[idx].size <= max_size && !nodes[idx].files.is_empty() && !nodes[idx].children.is_empty()
    {
        // Whole subtree fits: collapse it into a single leaf cluster
        // instead of keeping small fragmented groups below.
        let mut all = Vec::new();
        let children = std::mem::take(&mut nodes[idx].children);
        for c in children {
            flatten_into(nodes, c, &mut all);
        }
        all.append(&mut nodes[idx].files);
        nodes[idx].files = all;
        changed = true;
    } else {
        // Subtree over budget: children too small to stand alone give
        // their direct files up to this node.
        let children: Vec<usize> = nodes[idx].children.clone();
        let mut kept = Vec::new();
        for c in children {
            let held = nodes[c].files.len();
            if held > 0 && held < min_size {
                let moved = std::mem::take(&mut nodes[c].files);
                nodes[c].size -= held;
                nodes[idx].files.extend(moved);
                changed = true;
            }
            if nodes[c].size == 0 {
                changed = true;
            } else {
                kept.push(c);
            }
        }
        nodes[idx].children = kept;
    }

    changed
}

/// Index (into the children list) of the child with the smallest
/// subtree. Ties go to the last child in insertion order.
fn smallest_child(nodes: &[Node], idx: usize) -> usize {
    let mut best = 0;
    for (pos, &c) in nodes[idx].children.iter().enumerate() {
        let cur = nodes[nodes[idx].children[best]].size;
        if nodes[c].size <= cur {
            best = pos;
        }
    }
    best
}

/// Move every file in the subtree at `idx` into `out`, depth-first,
/// children before self, emptying the visited nodes.
fn flatten_into(nodes: &mut Vec<Node>, idx: usize, out: &mut Vec<FileInfo>) {
    let children = std::mem::take(&mut nodes[idx].children);
    for c in children {
        flatten_into(nodes, c, out);
    }
    out.append(&mut nodes[idx].files);
    nodes[idx].size = 0;
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
