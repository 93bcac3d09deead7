//! Group Tree Utilities
//!
//! View-model construction for the group hierarchy views.

use crate::models::GroupNode;

/// Id of the synthetic display root. Never persisted, never navigable.
pub const VIRTUAL_ROOT_ID: u32 = 0;

/// Deepest nesting `flatten` will follow. The backend guarantees an
/// acyclic tree; the cap keeps a malformed payload from hanging the UI.
pub const MAX_TREE_DEPTH: usize = 64;

/// Build the single display root for tree rendering.
///
/// If a top-level node's name equals `lab_name` (case-sensitive, first
/// match in list order), that node is dissolved into the root: the root
/// keeps its real attributes and its children are the matched node's own
/// children followed by the remaining top-level nodes. Otherwise a
/// virtual root (id 0) is synthesized with every input node as a child
/// and `member_count` summed over them.
pub fn build_display_root(nodes: &[GroupNode], lab_name: &str) -> GroupNode {
    match nodes.iter().position(|n| n.name == lab_name) {
        Some(idx) => {
            let lab = &nodes[idx];
            let mut children = lab.children.clone();
            children.extend(
                nodes
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != idx)
                    .map(|(_, n)| n.clone()),
            );
            GroupNode {
                children,
                ..lab.clone()
            }
        }
        None => GroupNode {
            id: VIRTUAL_ROOT_ID,
            name: lab_name.to_string(),
            description: None,
            lead_id: None,
            lead_name: None,
            member_count: nodes.iter().map(|n| n.member_count).sum(),
            members: Vec::new(),
            children: nodes.to_vec(),
            has_project: false,
        },
    }
}

/// Flatten the tree into display order using pre-order DFS: each node
/// followed by its children, across the top-level nodes in input order.
/// Nodes past [`MAX_TREE_DEPTH`] are dropped. No deduplication by id.
pub fn flatten(nodes: &[GroupNode]) -> Vec<GroupNode> {
    fn collect(nodes: &[GroupNode], depth: usize, result: &mut Vec<GroupNode>) {
        for node in nodes {
            result.push(node.clone());
            if depth + 1 < MAX_TREE_DEPTH {
                collect(&node.children, depth + 1, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(nodes, 0, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupMember;

    fn make_group(id: u32, name: &str, member_count: u32, children: Vec<GroupNode>) -> GroupNode {
        GroupNode {
            id,
            name: name.to_string(),
            description: None,
            lead_id: None,
            lead_name: None,
            member_count,
            members: Vec::new(),
            children,
            has_project: false,
        }
    }

    #[test]
    fn test_lab_match_rerooting() {
        let subgroup = make_group(10, "Systems", 1, vec![]);
        let nodes = vec![
            make_group(1, "Lab A", 2, vec![subgroup.clone()]),
            make_group(2, "Other", 3, vec![]),
        ];

        let root = build_display_root(&nodes, "Lab A");

        // Root copies the matched node's real attributes, not a sum
        assert_eq!(root.id, 1);
        assert_eq!(root.name, "Lab A");
        assert_eq!(root.member_count, 2);
        // Lab's own children first, then the remaining siblings
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].id, 10);
        assert_eq!(root.children[1].id, 2);
    }

    #[test]
    fn test_no_match_synthesizes_root() {
        let nodes = vec![
            make_group(1, "A", 2, vec![]),
            make_group(2, "B", 5, vec![]),
        ];

        let root = build_display_root(&nodes, "Lab X");

        assert_eq!(root.id, VIRTUAL_ROOT_ID);
        assert_eq!(root.name, "Lab X");
        assert_eq!(root.lead_id, None);
        assert_eq!(root.member_count, 7);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].id, 1);
        assert_eq!(root.children[1].id, 2);
    }

    #[test]
    fn test_empty_input() {
        let root = build_display_root(&[], "Lab X");

        assert_eq!(root.id, VIRTUAL_ROOT_ID);
        assert!(root.children.is_empty());
        assert_eq!(root.member_count, 0);
    }

    #[test]
    fn test_build_is_idempotent() {
        let nodes = vec![
            make_group(1, "Lab A", 2, vec![make_group(10, "Systems", 1, vec![])]),
            make_group(2, "Other", 3, vec![]),
        ];

        let first = build_display_root(&nodes, "Lab A");
        let second = build_display_root(&nodes, "Lab A");
        assert_eq!(first, second);

        let no_match_first = build_display_root(&nodes, "Lab Z");
        let no_match_second = build_display_root(&nodes, "Lab Z");
        assert_eq!(no_match_first, no_match_second);
    }

    #[test]
    fn test_duplicate_lab_name_first_match_wins() {
        // Two top-level groups share the configured lab name. The first in
        // list order becomes the root; the second stays an ordinary sibling.
        let nodes = vec![
            make_group(1, "Lab A", 2, vec![]),
            make_group(2, "Lab A", 9, vec![]),
            make_group(3, "Other", 1, vec![]),
        ];

        let root = build_display_root(&nodes, "Lab A");

        assert_eq!(root.id, 1);
        assert_eq!(root.member_count, 2);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].id, 2);
        assert_eq!(root.children[0].name, "Lab A");
        assert_eq!(root.children[1].id, 3);
    }

    #[test]
    fn test_match_keeps_members_and_lead() {
        let mut lab = make_group(1, "Lab A", 1, vec![]);
        lab.lead_id = Some(7);
        lab.lead_name = Some("Ada".to_string());
        lab.members = vec![GroupMember {
            user_id: 7,
            user_name: "Ada".to_string(),
            user_email: "ada@lab.test".to_string(),
        }];
        let nodes = vec![lab];

        let root = build_display_root(&nodes, "Lab A");

        assert_eq!(root.lead_id, Some(7));
        assert_eq!(root.members.len(), 1);
        assert_eq!(root.members[0].user_name, "Ada");
    }

    #[test]
    fn test_flatten_preorder() {
        // A -> [B -> [D], C] flattens to [A, B, D, C]
        let tree = make_group(
            1,
            "A",
            0,
            vec![
                make_group(2, "B", 0, vec![make_group(4, "D", 0, vec![])]),
                make_group(3, "C", 0, vec![]),
            ],
        );

        let flat = flatten(std::slice::from_ref(&tree));

        let names: Vec<&str> = flat.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn test_flatten_multiple_roots_in_order() {
        let nodes = vec![
            make_group(1, "A", 0, vec![make_group(3, "C", 0, vec![])]),
            make_group(2, "B", 0, vec![]),
        ];

        let flat = flatten(&nodes);

        let ids: Vec<u32> = flat.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_flatten_depth_capped() {
        // Chain deeper than the cap: one node per level
        let mut node = make_group(200, "leaf", 0, vec![]);
        for id in (100..200).rev() {
            node = make_group(id, "level", 0, vec![node]);
        }

        let flat = flatten(std::slice::from_ref(&node));

        assert_eq!(flat.len(), MAX_TREE_DEPTH);
    }
}
