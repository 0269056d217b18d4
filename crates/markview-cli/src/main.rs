mod outline;

use anyhow::{Context, Result};
use markview_config::Config;
use markview_engine::{Document, ImageLoader, parse_document};
use std::{
    env,
    path::{Path, PathBuf},
    process,
    sync::Arc,
};

#[derive(Debug, PartialEq)]
struct Options {
    path: PathBuf,
    json: bool,
    images: bool,
    styles: bool,
}

impl Options {
    /// Flags may appear anywhere; exactly one positional path is required.
    fn parse(args: &[String]) -> Option<Self> {
        let mut path = None;
        let mut options = Options {
            path: PathBuf::new(),
            json: false,
            images: false,
            styles: false,
        };
        for arg in args {
            match arg.as_str() {
                "--json" => options.json = true,
                "--images" => options.images = true,
                "--styles" => options.styles = true,
                flag if flag.starts_with("--") => return None,
                p if path.is_none() => path = Some(PathBuf::from(p)),
                _ => return None,
            }
        }
        options.path = path?;
        Some(options)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("markview-cli", String::as_str);

    let Some(options) = Options::parse(args.get(1..).unwrap_or_default()) else {
        eprintln!("Usage: {program} <file.md> [--json] [--images] [--styles]");
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            Config::default()
        }
    };

    let text = std::fs::read_to_string(&options.path)
        .with_context(|| format!("Failed to read {}", options.path.display()))?;
    let mut doc = parse_document(&text);
    log::debug!("Parsed {} blocks from {}", doc.len(), options.path.display());

    if options.images {
        let base_dir = options.path.parent().unwrap_or(Path::new("."));
        resolve_images(&config, base_dir, &mut doc)?;
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        let styles = options.styles.then_some(&config.style);
        for line in outline::render(&doc, styles) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Resolves every image node concurrently and stores the results on `doc`.
fn resolve_images(config: &Config, base_dir: &Path, doc: &mut Document) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let resolver = Arc::new(config.images.resolver()?.with_base_dir(base_dir));

    runtime.block_on(async {
        let mut updates = ImageLoader::spawn(Arc::clone(&resolver), doc);
        while let Some(update) = updates.recv().await {
            doc.apply_image(update);
        }
    });

    let stats = resolver.cache().stats();
    log::info!(
        "Resolved images: {} cache misses, {} cache hits",
        stats.misses,
        stats.hits
    );
    Ok(())
}
