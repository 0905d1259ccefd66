//! XTask - Release automation for the crate
//!
//! This library provides the `release` and `upload-docs` tasks: running
//! the verification gauntlet (tests, formatting, clean working tree),
//! tagging and pushing a new version, publishing to crates.io, and
//! optionally force-pushing rebuilt rustdoc output to GitHub Pages.
//!
//! External tools (cargo, git, rustfmt) are invoked as subprocesses
//! through the [`utils::process::CommandRunner`] seam, so the task
//! sequences can be exercised in tests without touching the real tools.
//!
//! # Examples
//!
//! ## Releasing a version
//!
//! ```no_run
//! use xtask::{commands::release, config::TaskConfig, utils::process::SystemRunner};
//!
//! # async fn doc() -> xtask::Result<()> {
//! let args = release::CommandArgs {
//!     version: Some("1.2.3".to_string()),
//! };
//! release::run(args, &TaskConfig::default(), &SystemRunner).await?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod utils;

pub use commands::release;
pub use commands::upload_docs;
pub use config::TaskConfig;
pub use error::TaskError;

pub use semver::Version;

pub type Result<T> = anyhow::Result<T>;
