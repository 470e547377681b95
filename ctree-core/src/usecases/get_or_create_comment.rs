use super::{create_comment_for_owner, prelude::*, NewComment};

/// Fetches the comment of the given owner matching `query`, or creates
/// one from `new_comment` if there is none yet.
///
/// The returned flag tells whether the comment was created by this call.
/// An ambiguous query fails with `MultipleResults` instead of picking one.
pub fn get_or_create_comment_for_owner<R>(
    repo: &R,
    owner_ref: &OwnerRef,
    query: CommentQuery,
    new_comment: NewComment,
) -> Result<(Comment, bool)>
where
    R: CommentRepository,
{
    let query = CommentQuery {
        owner: Some(owner_ref.clone()),
        ..query
    };
    let mut comments = repo.query_comments(&query)?;
    match comments.len() {
        0 => {
            let comment = create_comment_for_owner(repo, owner_ref, new_comment)?;
            Ok((comment, true))
        }
        1 => Ok((comments.remove(0), false)),
        _ => Err(RepoError::MultipleResults.into()),
    }
}
