//! Runtime configuration for the `rusty-blog` binary.
//!
//! Defaults are baked in; `BLOG_`-prefixed environment variables override
//! them (`BLOG_SEED_DEMO=false`, `BLOG_LOG=debug`). `main` loads a `.env`
//! file before this runs, so either source works.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Seed the session with the demo users and posts on startup.
    pub seed_demo: bool,
    /// Default tracing filter; `RUST_LOG` still wins when set.
    pub log: String,
}

impl CliConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("seed_demo", true)?
            .set_default("log", "info")?
            .add_source(Environment::with_prefix("BLOG").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let cfg = CliConfig::load().unwrap();
        assert!(cfg.seed_demo);
        assert_eq!(cfg.log, "info");
    }
}
