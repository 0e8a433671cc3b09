//! # rusty-blog
//!
//! The interactive terminal front-end. All domain rules live in
//! `blog-core`; this binary prompts, calls one session operation at a time,
//! and renders whatever comes back.

mod config;
mod ui;

use anyhow::Context;
use blog_core::Blog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cfg = CliConfig::load().context("invalid BLOG_* environment configuration")?;

    // Logs go to stderr so they never interleave with the menus.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut blog = Blog::new();
    if cfg.seed_demo {
        seed_demo_data(&mut blog).context("seeding demo data")?;
    }
    info!(seeded = cfg.seed_demo, "session ready");

    ui::run(&mut blog)
}

/// The fixture the demo boots with: two accounts, one post each. Everything
/// goes through the public session API, so the seeded state is exactly what
/// a user could have produced by hand.
fn seed_demo_data(blog: &mut Blog) -> anyhow::Result<()> {
    blog.sign_up("brians", "abc123")?;
    blog.sign_up("mj23", "sixrings")?;

    blog.log_in("brians", "abc123")?;
    blog.create_post("First Post", "This is my first post")?;
    // re-login replaces the session user, no logout needed in between
    blog.log_in("mj23", "sixrings")?;
    blog.create_post("Second Post", "This is my second post")?;
    blog.log_out();
    Ok(())
}
