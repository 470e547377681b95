use std::cell::RefCell;

use super::{prelude::*, *};

pub use self::builders::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub comments: RefCell<Vec<Comment>>,
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(RepoError::AlreadyExists);
        }
        comments.push(comment);
        Ok(())
    }

    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let pos = comments
            .iter()
            .position(|c| c.id == comment.id)
            .ok_or(RepoError::NotFound)?;
        comments[pos] = comment.clone();
        Ok(())
    }

    fn load_comment(&self, id: &Id) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn query_comments(&self, query: &CommentQuery) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| query.matches(c))
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.submitted_at);
        Ok(comments)
    }
}

fn article() -> OwnerRef {
    OwnerRef::new("article", 1)
}

fn seed(db: &MockDb, comment: Comment) {
    db.create_comment(comment).unwrap();
}

#[test]
fn create_comment_with_defaults() {
    let db = MockDb::default();
    let new_comment = NewComment::build().body("hello").finish();

    let comment = create_comment_for_owner(&db, &article(), new_comment).unwrap();

    assert_eq!(article(), comment.owner_ref);
    assert_eq!(MarkupKind::Plaintext, comment.markup);
    assert!(comment.is_public);
    assert!(!comment.is_approved);
    assert_eq!(None, comment.approved_at);
    assert_eq!(comment.submitted_at, comment.modified_at);
    assert_eq!(comment, db.load_comment(&comment.id).unwrap());
}

#[test]
fn create_approved_comment_stamps_approval_time() {
    let db = MockDb::default();
    let new_comment = NewComment::build().approved(true).finish();

    let comment = create_comment_for_owner(&db, &article(), new_comment).unwrap();

    assert_eq!(Some(comment.modified_at), comment.approved_at);
}

#[test]
fn reject_empty_author_name() {
    let db = MockDb::default();
    let new_comment = NewComment::build()
        .author(Author::anonymous("  "))
        .finish();

    let err = create_comment_for_owner(&db, &article(), new_comment).unwrap_err();

    assert!(matches!(err, Error::EmptyAuthorName));
    assert!(db.comments.borrow().is_empty());
}

#[test]
fn registered_authors_need_no_name() {
    let db = MockDb::default();
    let new_comment = NewComment::build()
        .author(Author::Registered(42.into()))
        .finish();

    assert!(create_comment_for_owner(&db, &article(), new_comment).is_ok());
}

#[test]
fn approving_twice_keeps_the_first_approval_time() {
    let db = MockDb::default();
    let comment = create_comment_for_owner(&db, &article(), NewComment::build().finish()).unwrap();

    let approved = approve_comment(&db, &comment.id).unwrap();
    let first_approval = approved.approved_at.unwrap();

    let re_approved = approve_comment(&db, &comment.id).unwrap();
    assert_eq!(Some(first_approval), re_approved.approved_at);
    assert!(re_approved.modified_at >= first_approval);
    assert_eq!(
        Some(first_approval),
        db.load_comment(&comment.id).unwrap().approved_at
    );
}

#[test]
fn update_of_unknown_comment_fails() {
    let db = MockDb::default();
    let comment = Comment::build().finish();

    let err = update_comment(&db, comment).unwrap_err();

    assert!(matches!(err, Error::Repo(RepoError::NotFound)));
}

#[test]
fn get_comment_for_owner_without_match_fails() {
    let db = MockDb::default();

    let err = get_comment_for_owner(&db, &article(), CommentQuery::default()).unwrap_err();

    assert!(matches!(err, Error::Repo(RepoError::NotFound)));
}

#[test]
fn ambiguous_get_comment_for_owner_fails() {
    let db = MockDb::default();
    seed(&db, Comment::build().owner("article", 1).finish());
    seed(&db, Comment::build().owner("article", 1).finish());

    let err = get_comment_for_owner(&db, &article(), CommentQuery::default()).unwrap_err();

    assert!(matches!(err, Error::Repo(RepoError::MultipleResults)));
}

#[test]
fn get_comment_for_owner_ignores_other_owners() {
    let db = MockDb::default();
    seed(&db, Comment::build().id("mine").owner("article", 1).finish());
    seed(&db, Comment::build().id("other").owner("article", 2).finish());

    let comment = get_comment_for_owner(&db, &article(), CommentQuery::default()).unwrap();

    assert_eq!(Id::from("mine"), comment.id);
}

#[test]
fn get_or_create_returns_existing_comment() {
    let db = MockDb::default();
    seed(&db, Comment::build().id("a").owner("article", 1).finish());

    let (comment, created) = get_or_create_comment_for_owner(
        &db,
        &article(),
        CommentQuery::default(),
        NewComment::build().finish(),
    )
    .unwrap();

    assert!(!created);
    assert_eq!(Id::from("a"), comment.id);
    assert_eq!(1, db.comments.borrow().len());
}

#[test]
fn get_or_create_inserts_when_nothing_matches() {
    let db = MockDb::default();

    let (comment, created) = get_or_create_comment_for_owner(
        &db,
        &article(),
        CommentQuery::default(),
        NewComment::build().body("fresh").finish(),
    )
    .unwrap();

    assert!(created);
    assert_eq!("fresh", comment.body);
    assert_eq!(1, db.comments.borrow().len());
}

#[test]
fn query_results_are_in_submission_order() {
    let db = MockDb::default();
    seed(
        &db,
        Comment::build()
            .id("late")
            .owner("article", 1)
            .submitted_at(Timestamp::from_millis(2_000))
            .finish(),
    );
    seed(
        &db,
        Comment::build()
            .id("early")
            .owner("article", 1)
            .submitted_at(Timestamp::from_millis(1_000))
            .finish(),
    );

    let comments = db
        .query_comments(&CommentQuery::owned_by(article()))
        .unwrap();

    let ids: Vec<_> = comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(vec!["early", "late"], ids);
}

#[test]
fn build_tree_in_depth_first_order() {
    let db = MockDb::default();
    // A(root), B(child of A), C(root), D(child of B)
    seed(
        &db,
        Comment::build()
            .id("a")
            .owner("article", 1)
            .submitted_at(Timestamp::from_millis(1))
            .finish(),
    );
    seed(
        &db,
        Comment::build()
            .id("b")
            .owner("article", 1)
            .parent("a")
            .submitted_at(Timestamp::from_millis(2))
            .finish(),
    );
    seed(
        &db,
        Comment::build()
            .id("c")
            .owner("article", 1)
            .submitted_at(Timestamp::from_millis(3))
            .finish(),
    );
    seed(
        &db,
        Comment::build()
            .id("d")
            .owner("article", 1)
            .parent("b")
            .submitted_at(Timestamp::from_millis(4))
            .finish(),
    );

    let nodes = build_comment_tree(&db, &article(), Visibility::All).unwrap();

    let ids_with_depths: Vec<_> = nodes
        .iter()
        .map(|node| (node.comment.id.as_str(), node.depth))
        .collect();
    assert_eq!(
        vec![("a", 0), ("b", 1), ("d", 2), ("c", 0)],
        ids_with_depths
    );
}

#[test]
fn build_tree_omits_comments_with_cross_owner_parents() {
    let db = MockDb::default();
    seed(
        &db,
        Comment::build()
            .id("foreign-root")
            .owner("article", 2)
            .submitted_at(Timestamp::from_millis(1))
            .finish(),
    );
    seed(
        &db,
        Comment::build()
            .id("x")
            .owner("article", 1)
            .parent("foreign-root")
            .submitted_at(Timestamp::from_millis(2))
            .finish(),
    );

    let nodes = build_comment_tree(&db, &article(), Visibility::All).unwrap();

    assert!(nodes.is_empty());
}

#[test]
fn public_tree_excludes_hidden_comments() {
    let db = MockDb::default();
    seed(
        &db,
        Comment::build()
            .id("visible")
            .owner("article", 1)
            .public(true)
            .submitted_at(Timestamp::from_millis(1))
            .finish(),
    );
    seed(
        &db,
        Comment::build()
            .id("approved-only")
            .owner("article", 1)
            .public(false)
            .approved(true)
            .submitted_at(Timestamp::from_millis(2))
            .finish(),
    );
    seed(
        &db,
        Comment::build()
            .id("hidden")
            .owner("article", 1)
            .public(false)
            .submitted_at(Timestamp::from_millis(3))
            .finish(),
    );

    let nodes = build_comment_tree(&db, &article(), Visibility::Public).unwrap();

    let ids: Vec<_> = nodes.iter().map(|node| node.comment.id.as_str()).collect();
    assert_eq!(vec!["visible", "approved-only"], ids);
}
