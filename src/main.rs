use anyhow::Result;
use clap::{Parser, Subcommand};
use sinatra_genres::aggregate::genre_snapshot;
use sinatra_genres::api::DEFAULT_API_BASE_URL;
use sinatra_genres::render::{GenreView, TextRenderer};
use sinatra_genres::{GenrePipeline, ProfileConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "sinatra-genres")]
#[command(about = "Show the genre breakdown of a public music profile", long_about = None)]
struct Args {
    /// Backend base URL
    #[arg(long, env = "SINATRA_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Read the genre map from a local JSON file instead of the backend
    #[arg(long, env = "SINATRA_GENRE_MAP_FILE")]
    genre_map_file: Option<String>,

    /// Entries in the meta-genre view
    #[arg(long, env = "SINATRA_META_LIMIT", default_value = "5")]
    meta_limit: usize,

    /// Entries in the sub-genre view
    #[arg(long, env = "SINATRA_SUB_LIMIT", default_value = "5")]
    sub_limit: usize,

    /// Request timeout in seconds
    #[arg(long, env = "SINATRA_TIMEOUT_SECS", default_value = "10")]
    timeout_secs: u64,

    /// Restrict the meta-genre vocabulary (comma separated)
    #[arg(long, env = "SINATRA_META_GENRES", value_delimiter = ',')]
    meta_genres: Vec<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a profile's current taste and both genre views
    Profile { user_id: String },

    /// Print a profile's top genre names, unfiltered
    Snapshot {
        user_id: String,

        /// Meta-genre names to show
        #[arg(long, default_value = "3")]
        meta: usize,

        /// Sub-genre names to show
        #[arg(long, default_value = "5")]
        sub: usize,
    },

    /// Load the genre map and report its state
    Map,
}

impl Args {
    fn config(&self) -> ProfileConfig {
        let mut config = ProfileConfig::new(self.api_base_url.clone())
            .with_limits(self.meta_limit, self.sub_limit)
            .with_timeout(Duration::from_secs(self.timeout_secs));

        if let Some(path) = &self.genre_map_file {
            let expanded = shellexpand::tilde(path);
            config = config.with_genre_map_file(PathBuf::from(expanded.as_ref()));
        }

        if !self.meta_genres.is_empty() {
            config = config.with_meta_genres(self.meta_genres.clone());
        }

        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = args.config();
    log::debug!("Configuration: {:?}", config);

    match &args.command {
        Command::Profile { user_id } => show_profile(&config, user_id).await,
        Command::Snapshot { user_id, meta, sub } => {
            let client = config.client()?;
            let profile = GenrePipeline::load_profile(&client, user_id).await?;
            let snapshot = genre_snapshot(&profile, *meta, *sub);

            println!("Top Meta-genres:");
            for name in &snapshot.meta_genres {
                println!("  {}", name);
            }
            println!("Top Sub-genres:");
            for name in &snapshot.sub_genres {
                println!("  {}", name);
            }
            Ok(())
        }
        Command::Map => {
            let resolver = config.resolver()?;
            let map = resolver.load().await;
            println!("Genre map: {:?}, {} entries", resolver.state(), map.len());
            Ok(())
        }
    }
}

async fn show_profile(config: &ProfileConfig, user_id: &str) -> Result<()> {
    let client = config.client()?;
    let resolver = Arc::new(config.resolver()?);
    let mut pipeline = GenrePipeline::new(resolver, config.aggregator());

    // Profile and genre map load concurrently
    let (profile, _) = tokio::join!(
        GenrePipeline::load_profile(&client, user_id),
        pipeline.resolver().load()
    );
    let profile = profile?;

    if profile.is_empty() {
        log::warn!("Profile {} has no genre data yet", user_id);
    }

    let charts = pipeline.charts(&profile).await;
    let renderer = TextRenderer::new();

    if let Some(top) = &profile.top_genre {
        println!("Top genre: {}", top);
    }
    if let Some(taste) = &charts.current_taste {
        println!("Current taste: {}", taste.sub_genre);
    }
    println!();

    for view in GenreView::ALL {
        println!("{}", renderer.render_view(view, charts.for_view(view)));
    }

    Ok(())
}
