use super::prelude::*;

/// Fetches exactly one comment of the given owner.
///
/// The owner restriction is forced onto the query; any other restriction
/// of `query` is kept. Zero matches fail with `NotFound`, more than one
/// with `MultipleResults`.
pub fn get_comment_for_owner<R>(
    repo: &R,
    owner_ref: &OwnerRef,
    query: CommentQuery,
) -> Result<Comment>
where
    R: CommentRepository,
{
    let query = CommentQuery {
        owner: Some(owner_ref.clone()),
        ..query
    };
    let mut comments = repo.query_comments(&query)?;
    match comments.len() {
        0 => Err(RepoError::NotFound.into()),
        1 => Ok(comments.remove(0)),
        _ => Err(RepoError::MultipleResults.into()),
    }
}
