use std::collections::VecDeque;

use log::warn;
use sprig_ids::NodeID;

use crate::FindError;

/// Read-only view over a node hierarchy owned elsewhere.
pub trait SceneGraph {
    /// `None` when `id` does not resolve to a live node.
    fn node_name(&self, id: NodeID) -> Option<&str>;

    /// Direct children in order. Empty for leaves and unknown IDs.
    fn node_children(&self, id: NodeID) -> &[NodeID];
}

/// Breadth-first search for the first node named `name`, starting at (and including) `root`.
///
/// Shallower nodes win over deeper ones; among nodes at the same depth the one enqueued
/// first wins. A miss is `Ok(None)`. A nil or dead `root` is an error.
pub fn find_deep_child<G>(graph: &G, root: NodeID, name: &str) -> Result<Option<NodeID>, FindError>
where
    G: SceneGraph + ?Sized,
{
    if root.is_nil() {
        return Err(FindError::InvalidRoot(root));
    }

    let mut queue = VecDeque::from([root]);
    while let Some(id) = queue.pop_front() {
        let Some(node_name) = graph.node_name(id) else {
            if id == root {
                warn!("find_deep_child: root {root} is not in the scene");
                return Err(FindError::InvalidRoot(root));
            }
            warn!("find_deep_child: skipping stale child {id}");
            continue;
        };

        if node_name == name {
            return Ok(Some(id));
        }
        queue.extend(graph.node_children(id).iter().copied());
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;

    /// Hand-built tree that records every name lookup and children expansion.
    struct CountingTree {
        names: Vec<&'static str>,
        children: Vec<Vec<NodeID>>,
        visits: RefCell<HashMap<NodeID, usize>>,
        expansions: Cell<usize>,
    }

    impl CountingTree {
        /// `layout[i] = (name, child indices)`; node i gets `NodeID::from_parts(i + 1, 0)`.
        fn build(layout: &[(&'static str, &[usize])]) -> Self {
            Self {
                names: layout.iter().map(|(name, _)| *name).collect(),
                children: layout
                    .iter()
                    .map(|(_, kids)| kids.iter().map(|&k| id(k)).collect())
                    .collect(),
                visits: RefCell::new(HashMap::new()),
                expansions: Cell::new(0),
            }
        }

        fn slot(&self, id: NodeID) -> Option<usize> {
            let index = id.index() as usize;
            (index >= 1 && index <= self.names.len()).then(|| index - 1)
        }

        fn total_visits(&self) -> usize {
            self.visits.borrow().values().sum()
        }
    }

    impl SceneGraph for CountingTree {
        fn node_name(&self, id: NodeID) -> Option<&str> {
            let slot = self.slot(id)?;
            *self.visits.borrow_mut().entry(id).or_insert(0) += 1;
            Some(self.names[slot])
        }

        fn node_children(&self, id: NodeID) -> &[NodeID] {
            self.expansions.set(self.expansions.get() + 1);
            self.slot(id)
                .map_or(&[][..], |slot| self.children[slot].as_slice())
        }
    }

    fn id(slot: usize) -> NodeID {
        NodeID::from_parts(slot as u32 + 1, 0)
    }

    // A -> [B -> [D, E], C -> [F]]
    fn example_tree() -> CountingTree {
        CountingTree::build(&[
            ("A", &[1, 2]),
            ("B", &[3, 4]),
            ("C", &[5]),
            ("D", &[]),
            ("E", &[]),
            ("F", &[]),
        ])
    }

    #[test]
    fn finds_node_at_depth_two() {
        let tree = example_tree();
        assert_eq!(find_deep_child(&tree, id(0), "F"), Ok(Some(id(5))));
    }

    #[test]
    fn missing_name_is_not_an_error() {
        let tree = example_tree();
        assert_eq!(find_deep_child(&tree, id(0), "Z"), Ok(None));
    }

    #[test]
    fn root_matches_without_expanding_children() {
        let tree = example_tree();
        assert_eq!(find_deep_child(&tree, id(0), "A"), Ok(Some(id(0))));
        assert_eq!(tree.expansions.get(), 0);
        assert_eq!(tree.total_visits(), 1);
    }

    #[test]
    fn shallowest_match_wins() {
        // R -> [a -> [aa -> [b -> [X]]], c -> [X]]: depth-2 "X" under c wins over
        // the depth-4 one even though a's branch is enqueued first.
        let tree = CountingTree::build(&[
            ("R", &[1, 5]),
            ("a", &[2]),
            ("aa", &[3]),
            ("b", &[4]),
            ("X", &[]),
            ("c", &[6]),
            ("X", &[]),
        ]);
        assert_eq!(find_deep_child(&tree, id(0), "X"), Ok(Some(id(6))));
    }

    #[test]
    fn earlier_sibling_wins_at_same_depth() {
        let tree = CountingTree::build(&[("P", &[1, 2, 3]), ("Y", &[]), ("X", &[]), ("X", &[])]);
        assert_eq!(find_deep_child(&tree, id(0), "X"), Ok(Some(id(2))));
    }

    #[test]
    fn cousins_resolve_in_enqueue_order() {
        // R -> [L -> [X], M -> [X]]: both at depth 2, L's child is enqueued first.
        let tree = CountingTree::build(&[
            ("R", &[1, 2]),
            ("L", &[3]),
            ("M", &[4]),
            ("X", &[]),
            ("X", &[]),
        ]);
        assert_eq!(find_deep_child(&tree, id(0), "X"), Ok(Some(id(3))));
    }

    #[test]
    fn not_found_visits_every_node_exactly_once() {
        let tree = CountingTree::build(&[
            ("A", &[1, 2]),
            ("B", &[3]),
            ("C", &[4]),
            ("D", &[]),
            ("E", &[]),
        ]);
        assert_eq!(find_deep_child(&tree, id(0), "missing"), Ok(None));

        let visits = tree.visits.borrow();
        assert_eq!(visits.len(), 5);
        assert!(visits.values().all(|&count| count == 1));
    }

    #[test]
    fn match_is_case_sensitive() {
        let tree = example_tree();
        assert_eq!(find_deep_child(&tree, id(0), "f"), Ok(None));
    }

    #[test]
    fn search_can_start_below_the_top() {
        let tree = example_tree();
        assert_eq!(find_deep_child(&tree, id(1), "F"), Ok(None));
        assert_eq!(find_deep_child(&tree, id(1), "E"), Ok(Some(id(4))));
    }

    #[test]
    fn nil_or_unknown_root_fails_fast() {
        let tree = example_tree();
        assert_eq!(
            find_deep_child(&tree, NodeID::nil(), "A"),
            Err(FindError::InvalidRoot(NodeID::nil()))
        );
        let ghost = NodeID::from_parts(99, 0);
        assert_eq!(
            find_deep_child(&tree, ghost, "A"),
            Err(FindError::InvalidRoot(ghost))
        );
    }

    #[test]
    fn stale_children_are_skipped() {
        // B lists a child that no longer resolves; the search keeps going.
        let mut tree = example_tree();
        tree.children[1].insert(0, NodeID::from_parts(42, 0));
        assert_eq!(find_deep_child(&tree, id(0), "F"), Ok(Some(id(5))));
    }
}
