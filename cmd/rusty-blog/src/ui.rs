//! UI layer: the interactive menu loop, built on `dialoguer`.
//!
//! Everything presentational lives here: prompting, parsing post ids,
//! title-casing, and mapping each `BlogError` to its message. The session
//! itself is only ever touched through the `blog_core::Blog` API, one
//! operation per menu action.

use anyhow::Result;
use blog_core::{Blog, BlogError, Post, PostPatch};
use console::style;
use dialoguer::{Confirm, Input, Password, Select};

/// Runs the menu loop until the user quits. There are two menus, one for
/// visitors and one for logged-in users, switching on the session state.
pub fn run(blog: &mut Blog) -> Result<()> {
    loop {
        if blog.current_user().is_none() {
            let items = [
                "Sign Up",
                "Log In",
                "View All Posts",
                "View Single Post",
                "Quit",
            ];
            match Select::new()
                .with_prompt("What would you like to do?")
                .items(&items)
                .default(0)
                .interact()?
            {
                0 => sign_up(blog)?,
                1 => log_in(blog)?,
                2 => view_all_posts(blog),
                3 => view_single_post(blog)?,
                _ => {
                    println!("Thanks for checking out the blog!");
                    return Ok(());
                }
            }
        } else {
            let items = [
                "Log Out",
                "Create A New Post",
                "View All Posts",
                "View Single Post",
                "Edit A Post",
                "Delete A Post",
            ];
            match Select::new()
                .with_prompt("What would you like to do?")
                .items(&items)
                .default(0)
                .interact()?
            {
                0 => {
                    blog.log_out();
                    println!("You have successfully logged out");
                }
                1 => create_post(blog)?,
                2 => view_all_posts(blog),
                3 => view_single_post(blog)?,
                4 => edit_post(blog)?,
                5 => delete_post(blog)?,
                _ => {}
            }
        }
    }
}

fn sign_up(blog: &mut Blog) -> Result<()> {
    let username: String = Input::new()
        .with_prompt("Please enter a username")
        .interact_text()?;
    let password = Password::new()
        .with_prompt("Please enter a password")
        .interact()?;
    match blog.sign_up(&username, &password) {
        Ok(user) => println!("{user} has been created!"),
        Err(BlogError::DuplicateUsername(name)) => {
            warn_user(&format!("User with username {name} already exists"));
        }
        Err(err) => render_error(&err),
    }
    Ok(())
}

fn log_in(blog: &mut Blog) -> Result<()> {
    let username: String = Input::new()
        .with_prompt("What is your username?")
        .interact_text()?;
    let password = Password::new()
        .with_prompt("What is your password?")
        .interact()?;
    match blog.log_in(&username, &password) {
        Ok(user) => println!("{user} has been logged in"),
        Err(err) => render_error(&err),
    }
    Ok(())
}

fn create_post(blog: &mut Blog) -> Result<()> {
    let title: String = Input::new()
        .with_prompt("Enter the title of your post")
        .interact_text()?;
    let body: String = Input::new()
        .with_prompt("Enter the body of your post")
        .interact_text()?;
    match blog.create_post(&title_case(&title), &body) {
        Ok(post) => println!("{} has been created!", post.title),
        Err(err) => render_error(&err),
    }
    Ok(())
}

fn view_all_posts(blog: &Blog) {
    if blog.posts().is_empty() {
        println!("There are currently no posts for this blog :(");
        return;
    }
    for post in blog.posts() {
        print_post(blog, post);
    }
}

fn view_single_post(blog: &Blog) -> Result<()> {
    let id = prompt_post_id("view")?;
    match blog.post(id) {
        Ok(post) => print_post(blog, post),
        Err(err) => render_error(&err),
    }
    Ok(())
}

fn edit_post(blog: &mut Blog) -> Result<()> {
    let id = prompt_post_id("edit")?;
    match blog.post(id) {
        Ok(post) => print_post(blog, post),
        Err(err) => {
            render_error(&err);
            return Ok(());
        }
    }

    let items = ["Title", "Body", "Both", "Back"];
    let choice = Select::new()
        .with_prompt("Which part would you like to edit?")
        .items(&items)
        .default(0)
        .interact()?;
    if choice == 3 {
        return Ok(());
    }

    let mut patch = PostPatch::default();
    if choice == 0 || choice == 2 {
        let title: String = Input::new()
            .with_prompt("Enter the new title")
            .interact_text()?;
        patch.title = Some(title_case(&title));
    }
    if choice == 1 || choice == 2 {
        let body: String = Input::new()
            .with_prompt("Enter the new body")
            .interact_text()?;
        patch.body = Some(body);
    }

    match blog.edit_post(id, patch) {
        Ok(post) => println!("{} has been updated", post.title),
        Err(BlogError::Forbidden) => {
            warn_user("You do not have permission to edit this post");
        }
        Err(err) => render_error(&err),
    }
    Ok(())
}

fn delete_post(blog: &mut Blog) -> Result<()> {
    let id = prompt_post_id("delete")?;
    if !Confirm::new()
        .with_prompt("Really delete this post?")
        .default(false)
        .interact()?
    {
        return Ok(());
    }
    match blog.delete_post(id) {
        Ok(post) => println!("{} has been deleted", post.title),
        Err(BlogError::Forbidden) => {
            warn_user("You do not have permission to delete this post");
        }
        Err(err) => render_error(&err),
    }
    Ok(())
}

/// The multi-line post view: id and title, author, body.
fn print_post(blog: &Blog, post: &Post) {
    let author = blog
        .author_of(post)
        .map(|u| u.username.as_str())
        .unwrap_or("unknown");
    println!();
    println!("{} - {}", post.id, style(&post.title).bold());
    println!("By: {author}");
    println!("{}", post.body);
}

/// Keeps asking until the input parses as an id. Validation is a prompt
/// concern; the session only ever sees a well-formed id.
fn prompt_post_id(action: &str) -> Result<u64> {
    let id = Input::new()
        .with_prompt(format!(
            "What is the id of the post you would like to {action}?"
        ))
        .interact_text()?;
    Ok(id)
}

/// Fallback rendering for error kinds without a bespoke message. The
/// wording keeps the 401 / 403 / 404 kinds distinguishable.
fn render_error(err: &BlogError) {
    let message = match err {
        BlogError::InvalidCredentials => "Username and/or Password is incorrect.".to_string(),
        BlogError::NotAuthenticated => "You must be logged in to perform this action".to_string(),
        BlogError::PostNotFound(id) => format!("Post with an ID of {id} does not exist"),
        other => format!("Something went wrong: {other}"),
    };
    warn_user(&message);
}

fn warn_user(message: &str) {
    println!("{}", style(message).red());
}

/// Title-cases free-form input before it reaches the session: the first
/// letter of every alphabetic run is uppercased, the rest lowercased.
/// Purely a presentation convention, not a post invariant.
pub(crate) fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alphabetic = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("my first post"), "My First Post");
        assert_eq!(title_case("RUST 101"), "Rust 101");
    }

    #[test]
    fn title_case_restarts_after_non_letters() {
        assert_eq!(title_case("post-mortem notes"), "Post-Mortem Notes");
    }

    #[test]
    fn title_case_leaves_empty_input_alone() {
        assert_eq!(title_case(""), "");
    }
}
