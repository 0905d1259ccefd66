use {
    anyhow::{Context, Result},
    cargo_metadata::MetadataCommand,
    std::path::PathBuf,
};

/// Resolves the rustdoc output directory (`<target-directory>/doc`),
/// honoring `CARGO_TARGET_DIR` overrides.
pub fn doc_output_dir() -> Result<PathBuf> {
    let metadata = MetadataCommand::new()
        .no_deps()
        .exec()
        .context("failed to query cargo metadata")?;
    Ok(metadata.target_directory.into_std_path_buf().join("doc"))
}
