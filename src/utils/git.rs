use {
    crate::{error::TaskError, utils::process::CommandRunner},
    anyhow::Result,
};

/// Queries git for the fetch url of `remote`, trimming surrounding
/// whitespace from the captured output.
pub async fn get_remote_url(runner: &impl CommandRunner, remote: &str) -> Result<String> {
    let capture = runner
        .run_capture("git", &["remote", "get-url", remote], None)
        .await?;
    if capture.code != 0 {
        return Err(
            TaskError::environment(format!("could not determine {remote}'s url from git")).into(),
        );
    }
    Ok(capture.stdout.trim().to_string())
}
