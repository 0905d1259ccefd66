use {
    crate::{config::TaskConfig, utils::process::CommandRunner},
    anyhow::Result,
    log::info,
};

/// Rebuilds the crate's rustdoc output and force-pushes it to the
/// remote's `gh-pages` branch.
///
/// The rustdoc directory gets a disposable git repository; its history
/// replaces whatever `gh-pages` held before.
pub async fn run(config: &TaskConfig, runner: &impl CommandRunner) -> Result<()> {
    let origin_url = crate::utils::git::get_remote_url(runner, &config.remote).await?;

    runner.run("cargo", &["clean", "--doc"], None).await?;
    runner.run("cargo", &["doc", "--no-deps"], None).await?;

    let doc_dir = match &config.doc_dir {
        Some(dir) => dir.clone(),
        None => crate::utils::cargo::doc_output_dir()?,
    };
    let doc_dir = Some(doc_dir.as_path());

    let refspec = format!("{}:gh-pages", config.primary_branch);
    runner.run("git", &["init"], doc_dir).await?;
    runner.run("git", &["add", "."], doc_dir).await?;
    runner.run("git", &["commit", "-am", "(doc upload)"], doc_dir).await?;
    runner
        .run("git", &["push", "-f", &origin_url, &refspec], doc_dir)
        .await?;

    info!("docs uploaded to {}", config.remote);
    Ok(())
}
