//! The authorization rules on post mutation, including the check order:
//! a missing post answers "not found" before any auth question, and "not
//! logged in" stays distinct from "not the owner".

use blog_core::{Blog, BlogError, PostPatch};

fn blog_with_two_authors() -> Blog {
    let mut blog = Blog::new();
    blog.sign_up("brians", "abc123").unwrap();
    blog.sign_up("mj23", "sixrings").unwrap();

    blog.log_in("brians", "abc123").unwrap();
    blog.create_post("First Post", "This is my first post").unwrap();
    blog.log_in("mj23", "sixrings").unwrap();
    blog.create_post("Second Post", "This is my second post").unwrap();
    blog.log_out();
    blog
}

#[test]
fn missing_post_wins_over_auth_checks() {
    let mut blog = blog_with_two_authors();

    // logged out: still "not found", not "not authenticated"
    let err = blog.edit_post(99, PostPatch::title("X")).unwrap_err();
    assert_eq!(err, BlogError::PostNotFound(99));
    let err = blog.delete_post(99).unwrap_err();
    assert_eq!(err, BlogError::PostNotFound(99));

    // logged in: same answer
    blog.log_in("brians", "abc123").unwrap();
    let err = blog.edit_post(99, PostPatch::title("X")).unwrap_err();
    assert_eq!(err, BlogError::PostNotFound(99));
}

#[test]
fn mutation_while_logged_out_is_not_authenticated() {
    let mut blog = blog_with_two_authors();

    let err = blog.edit_post(1, PostPatch::title("X")).unwrap_err();
    assert_eq!(err, BlogError::NotAuthenticated);
    let err = blog.delete_post(1).unwrap_err();
    assert_eq!(err, BlogError::NotAuthenticated);

    // nothing was touched
    assert_eq!(blog.post(1).unwrap().title, "First Post");
    assert_eq!(blog.posts().len(), 2);
}

#[test]
fn mutating_someone_elses_post_is_forbidden() {
    let mut blog = blog_with_two_authors();
    blog.log_in("mj23", "sixrings").unwrap();

    let err = blog.edit_post(1, PostPatch::title("Hijacked")).unwrap_err();
    assert_eq!(err, BlogError::Forbidden);
    let err = blog.delete_post(1).unwrap_err();
    assert_eq!(err, BlogError::Forbidden);

    let post = blog.post(1).unwrap();
    assert_eq!(post.title, "First Post");
    assert_eq!(post.body, "This is my first post");
}

#[test]
fn the_author_may_edit_and_delete_their_own_post() {
    let mut blog = blog_with_two_authors();
    blog.log_in("mj23", "sixrings").unwrap();

    let post = blog.edit_post(2, PostPatch::title("Updated")).unwrap();
    assert_eq!(post.title, "Updated");

    blog.delete_post(2).unwrap();
    assert_eq!(blog.posts().len(), 1);
    assert_eq!(blog.post(2).unwrap_err(), BlogError::PostNotFound(2));
}

/// The seeded demo scenario, end to end.
#[test]
fn seeded_demo_scenario() {
    let mut blog = blog_with_two_authors();

    blog.log_in("mj23", "sixrings").unwrap();

    let first = blog.posts()[0].id;
    let second = blog.posts()[1].id;

    let err = blog.edit_post(first, PostPatch::title("X")).unwrap_err();
    assert_eq!(err, BlogError::Forbidden);

    blog.edit_post(second, PostPatch::title("Updated")).unwrap();
    assert_eq!(blog.post(second).unwrap().title, "Updated");
    assert_eq!(blog.post(first).unwrap().title, "First Post");
}
