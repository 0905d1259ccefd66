use std::path::PathBuf;

/// Feature flags and repository constants for the tasks, resolved once
/// at startup and passed into the task functions.
#[derive(Debug, Clone)]
pub struct TaskConfig {
    /// Publish to crates.io: a dry run before tagging, the real upload
    /// after the tag is pushed.
    pub cargo_publish: bool,
    /// Chain the doc-upload task after a successful release.
    pub push_docs: bool,
    /// Remote that receives the branch, the tag, and the docs.
    pub remote: String,
    /// Branch pushed on release and mapped onto `gh-pages`.
    pub primary_branch: String,
    /// Rustdoc output directory used as the doc-upload staging area.
    /// `None` means discover it through `cargo metadata` when needed.
    pub doc_dir: Option<PathBuf>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        TaskConfig {
            cargo_publish: true,
            push_docs: false,
            remote: "origin".to_string(),
            primary_branch: "master".to_string(),
            doc_dir: None,
        }
    }
}
