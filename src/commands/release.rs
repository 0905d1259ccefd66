use {
    crate::{config::TaskConfig, error::TaskError, utils::process::CommandRunner},
    anyhow::Result,
    clap::Args,
    log::info,
    semver::Version,
};

#[derive(Args, Debug)]
pub struct CommandArgs {
    #[arg(long, env = "XTASK_VERSION", help = "Version to release, e.g. 1.2.3")]
    pub version: Option<String>,
}

/// Releases a new version of the crate.
///
/// Validates the version, runs the verification steps, tags the
/// release, pushes branch and tag, and publishes. Each step gates the
/// next; steps already executed are never rolled back.
pub async fn run(
    args: CommandArgs,
    config: &TaskConfig,
    runner: &impl CommandRunner,
) -> Result<()> {
    let Some(version) = args.version else {
        return Err(TaskError::configuration("the version to release was not specified").into());
    };
    if Version::parse(&version).is_err() {
        return Err(
            TaskError::validation(format!("`{version}` is not a valid SemVer string")).into(),
        );
    }

    runner.run("cargo", &["test", "--all-features"], None).await?;
    runner.run("cargo", &["fmt", "--", "--check"], None).await?;
    check_clean_working_tree(runner).await?;

    if config.cargo_publish {
        runner.run("cargo", &["publish", "--dry-run"], None).await?;
    }

    let tag_name = format!("v{version}");
    let tag_message = format!("Release {tag_name}");
    runner
        .run("git", &["tag", "-a", &tag_name, "-m", &tag_message], None)
        .await?;
    runner
        .run("git", &["push", &config.remote, &config.primary_branch], None)
        .await?;
    runner.run("git", &["push", &config.remote, &tag_name], None).await?;

    if config.cargo_publish {
        runner.run("cargo", &["publish"], None).await?;
    }

    if config.push_docs {
        crate::commands::upload_docs::run(config, runner).await?;
    }

    info!("released {tag_name}");
    Ok(())
}

async fn check_clean_working_tree(runner: &impl CommandRunner) -> Result<()> {
    let capture = runner
        .run_capture("git", &["diff", "HEAD", "--exit-code", "--name-only"], None)
        .await?;
    // Any output at all counts as a dirty tree, in addition to the exit
    // code.
    if capture.code != 0 || !capture.stdout.is_empty() {
        return Err(TaskError::subprocess(format!(
            "the working tree has uncommitted changes:\n{}",
            capture.stdout.trim_end()
        ))
        .into());
    }
    Ok(())
}
