use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use log::{debug, info};

use portfolio_server::{
    FetcherCache, FileSystemAssetReader, GITHUB_REST_ENDPOINT, HtmlRenderer, PortfolioServer,
    PortfolioService, Profile, RepositoryFetcher, RestFetcher, StdResult,
};

/// Command line arguments for the portfolio server
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub account whose repositories are listed
    #[arg(long, env = "PORTFOLIO_GITHUB_HANDLE", default_value = "ASWINa1636")]
    handle: String,

    /// Address the HTTP server listens on
    #[arg(short, long, env = "PORTFOLIO_BIND_ADDRESS", default_value = "127.0.0.1:8501")]
    bind_address: SocketAddr,

    /// Root of the GitHub REST API
    #[arg(long, env = "PORTFOLIO_API_ENDPOINT", default_value = GITHUB_REST_ENDPOINT)]
    api_endpoint: String,

    /// Directory holding the profile picture and the resume
    #[arg(short, long, env = "PORTFOLIO_ASSETS_DIR", default_value = "assets")]
    assets_dir: PathBuf,

    /// How long fetched repositories are reused before asking GitHub again
    #[arg(long, default_value_t = 3600)]
    cache_ttl_seconds: u64,

    /// Timeout of a request to the GitHub API
    #[arg(long, default_value_t = 15)]
    timeout_seconds: u64,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    info!("Starting portfolio server");
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let server = build_server(&args)?;
    server.serve(args.bind_address).await?;

    Ok(())
}

fn build_server(args: &Args) -> StdResult<PortfolioServer> {
    let fetcher: Arc<dyn RepositoryFetcher> = Arc::new(FetcherCache::new(
        Arc::new(RestFetcher::try_new(
            &args.api_endpoint,
            Duration::from_secs(args.timeout_seconds),
        )?),
        Duration::from_secs(args.cache_ttl_seconds),
    ));
    let service = PortfolioService::try_new(
        &args.handle,
        fetcher,
        Arc::new(FileSystemAssetReader::new(&args.assets_dir)),
        Arc::new(HtmlRenderer::new()),
        Profile::default(),
    )?;

    Ok(PortfolioServer::new(Arc::new(service)))
}
