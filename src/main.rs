//! unsplash-random - fetch one random Unsplash photo.

mod cli;

use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{debug, warn};
use unsplash_random::client::{RandomFixed, RandomTagged, UnsplashRandom};
use unsplash_random::config::{self, Config, ACCESS_KEY_ENV};
use unsplash_random::context::ServiceContext;
use unsplash_random::error::UnsplashError;

use crate::cli::Cli;

/// Cassette to replay instead of contacting the API.
const REPLAY_ENV: &str = "UNSPLASH_RANDOM_REPLAY";

/// Set to `1` or `true` to record live exchanges to a cassette.
const RECORD_ENV: &str = "UNSPLASH_RANDOM_REC";

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), UnsplashError> {
    cli.validate().map_err(UnsplashError::Config)?;
    debug!(?cli, "arguments parsed");

    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path)?;

    let mut paths = config.paths.clone();
    if let Some(dir) = &cli.cache_dir {
        paths.cache_dir.clone_from(dir);
    }
    if let Some(dir) = &cli.image_dir {
        paths.image_dir.clone_from(dir);
    }

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var(REPLAY_ENV).ok();
    let is_recording = std::env::var(RECORD_ENV).is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        debug!(cassette = %cassette_path, "replaying");
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        debug!("recording mode enabled");
        let (ctx, session) = ServiceContext::recording();
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let api_key = match config.unsplash_key() {
        Some(key) => key,
        None if replay_path.is_some() => String::from("replay"),
        None => return Err(UnsplashError::MissingApiKey { env_var: ACCESS_KEY_ENV.into() }),
    };

    let endpoint = config.api.endpoint.clone();
    let mut client: Box<dyn UnsplashRandom> = match &cli.category {
        Some(category) => {
            let c = RandomTagged::new(&ctx, api_key, category.trim().to_string(), paths);
            Box::new(match endpoint {
                Some(e) => c.with_endpoint(e),
                None => c,
            })
        }
        None => {
            let c = RandomFixed::new(&ctx, api_key, paths);
            Box::new(match endpoint {
                Some(e) => c.with_endpoint(e),
                None => c,
            })
        }
    };

    let result = fetch(client.as_mut(), cli);

    // Finish recording if active, even when the fetch failed
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    result
}

fn fetch(client: &mut dyn UnsplashRandom, cli: &Cli) -> Result<(), UnsplashError> {
    client.init()?;

    if !cli.no_json {
        let path = client.persist_metadata()?;
        eprintln!("Metadata: {}", path.display());
    }

    match client.metadata() {
        Ok(meta) => eprintln!(
            "Photo: {} {} {}, created {}",
            client.client().image_id().unwrap_or_default(),
            meta.dimension,
            meta.color,
            meta.created_at
        ),
        Err(e) => warn!(error = %e, "photo metadata incomplete"),
    }

    if cli.json_only {
        return Ok(());
    }

    let path = match &cli.name {
        Some(name) => client.fetch_image_named(name)?,
        None => client.fetch_image()?,
    };
    eprintln!("Saved: {}", path.display());

    Ok(())
}
