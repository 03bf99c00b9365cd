use anyhow::Result;
use bwfetch::github::{self, GitHub};
use clap::Parser;

/// bwfetch - BoxWallet release locator
///
/// Resolve the download URL of the latest BoxWallet release for the
/// current operating system and CPU architecture.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Print only the download URL, without the release tag
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let client = reqwest::Client::builder()
        .user_agent(github::USER_AGENT)
        .build()?;
    let github = GitHub::new(client, cli.api_url);

    let uri = github.latest_download_uri().await?;

    if cli.quiet {
        println!("{}", uri.url);
    } else {
        println!("{} {}", uri.tag, uri.url);
    }

    Ok(())
}
