use super::prelude::*;

/// Persists the mutable fields of an existing comment.
///
/// The write refreshes the modification time and stamps the approval time
/// on the first approval; an approval time that is already set is never
/// overwritten.
pub fn update_comment<R>(repo: &R, mut comment: Comment) -> Result<Comment>
where
    R: CommentRepository,
{
    comment.stamp_for_save(Timestamp::now());
    repo.update_comment(&comment)?;
    Ok(comment)
}

/// Marks a comment as approved.
pub fn approve_comment<R>(repo: &R, id: &Id) -> Result<Comment>
where
    R: CommentRepository,
{
    let mut comment = repo.load_comment(id)?;
    log::info!("Approving comment {id}");
    comment.is_approved = true;
    update_comment(repo, comment)
}
