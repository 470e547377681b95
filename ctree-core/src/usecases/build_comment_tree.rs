use super::prelude::*;

/// Loads all comments attached to the given owner and materializes them
/// as a depth-first ordered tree annotated with nesting depths.
///
/// Pass `Visibility::Public` to restrict the tree to published or
/// approved comments.
pub fn build_comment_tree<R>(
    repo: &R,
    owner_ref: &OwnerRef,
    visibility: Visibility,
) -> Result<Vec<CommentNode>>
where
    R: CommentRepository,
{
    let query = CommentQuery {
        visibility,
        ..CommentQuery::owned_by(owner_ref.clone())
    };
    let comments = repo.query_comments(&query)?;
    log::debug!(
        "Building comment tree for owner {} from {} comments",
        owner_ref,
        comments.len()
    );
    Ok(comment_tree(comments))
}
