use std::collections::HashMap;

use crate::entities::{comment::Comment, id::Id};

/// A comment together with its nesting depth.
///
/// Depth counts the ancestors of the comment within its tree, so roots
/// sit at depth 0.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub comment : Comment,
    pub depth   : usize,
}

/// Materializes the flat comment set of one owner into depth-first order.
///
/// Roots keep their input order and every child list keeps the input
/// order of its members, so repeated calls over unchanged data yield
/// identical results. Each node is emitted after its parent and before
/// the subtrees of its later siblings.
///
/// Comments whose parent is missing from the input, as well as all
/// members of a parent cycle, are dropped from the output without an
/// error.
// TODO: Decide whether dropped orphans should be reported to the caller.
pub fn comment_tree(comments: Vec<Comment>) -> Vec<CommentNode> {
    let mut roots = Vec::new();
    let mut children: HashMap<Id, Vec<Comment>> = HashMap::new();
    for comment in comments {
        match &comment.parent_id {
            None => roots.push(comment),
            Some(parent_id) => {
                let parent_id = parent_id.clone();
                children.entry(parent_id).or_default().push(comment);
            }
        }
    }
    let mut nodes = Vec::new();
    for root in roots {
        emit_subtree(root, 0, &mut children, &mut nodes);
    }
    nodes
}

fn emit_subtree(
    comment: Comment,
    depth: usize,
    children: &mut HashMap<Id, Vec<Comment>>,
    nodes: &mut Vec<CommentNode>,
) {
    let id = comment.id.clone();
    nodes.push(CommentNode { comment, depth });
    for child in children.remove(&id).unwrap_or_default() {
        emit_subtree(child, depth + 1, children, nodes);
    }
}
