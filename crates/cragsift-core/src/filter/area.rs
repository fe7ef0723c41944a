use crate::models::AreaPath;

/// Area selections grouped by nearest selected ancestor. Selecting a parent
/// together with some of its children narrows the parent to those children.
#[derive(Debug, Clone, Default)]
pub(crate) struct AreaSelection {
    nodes: Vec<SelectionNode>,
    roots: Vec<usize>,
}

#[derive(Debug, Clone)]
struct SelectionNode {
    path: AreaPath,
    children: Vec<usize>,
}

impl AreaSelection {
    pub(crate) fn new(selected: &[AreaPath]) -> Self {
        let mut paths: Vec<AreaPath> = Vec::with_capacity(selected.len());
        for path in selected {
            if !path.is_empty() && !paths.contains(path) {
                paths.push(path.clone());
            }
        }

        let mut nodes: Vec<SelectionNode> = paths
            .iter()
            .map(|path| SelectionNode {
                path: path.clone(),
                children: Vec::new(),
            })
            .collect();
        let mut roots = Vec::new();

        for (idx, path) in paths.iter().enumerate() {
            let parent = paths
                .iter()
                .enumerate()
                .filter(|(_, candidate)| candidate.is_proper_prefix_of(path))
                .max_by_key(|(_, candidate)| candidate.len())
                .map(|(parent_idx, _)| parent_idx);
            match parent {
                Some(parent_idx) => nodes[parent_idx].children.push(idx),
                None => roots.push(idx),
            }
        }

        Self { nodes, roots }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub(crate) fn matches(&self, path: &AreaPath) -> bool {
        self.is_empty() || self.roots.iter().any(|&root| self.node_matches(root, path))
    }

    fn node_matches(&self, idx: usize, path: &AreaPath) -> bool {
        let node = &self.nodes[idx];
        node.path.is_prefix_of(path)
            && (node.children.is_empty()
                || node
                    .children
                    .iter()
                    .any(|&child| self.node_matches(child, path)))
    }
}
