use {
    anyhow::Result,
    clap::{Args, Parser, Subcommand},
    log::error,
    xtask::{config::TaskConfig, utils::process::SystemRunner},
};

#[derive(Parser)]
#[command(name = "xtask", about = "Release automation tasks", version)]
struct Xtask {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Release a new version of the crate")]
    Release(xtask::commands::release::CommandArgs),
    #[command(about = "Upload docs to GitHub Pages")]
    UploadDocs,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        error!("Error: {err}");
        for (i, cause) in err.chain().skip(1).enumerate() {
            error!("  {}: {}", i.saturating_add(1), cause);
        }
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let xtask = Xtask::parse();

    if xtask.global.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = TaskConfig::default();
    match xtask.command {
        Commands::Release(args) => {
            xtask::commands::release::run(args, &config, &SystemRunner).await?;
        }
        Commands::UploadDocs => {
            xtask::commands::upload_docs::run(&config, &SystemRunner).await?;
        }
    }

    Ok(())
}
