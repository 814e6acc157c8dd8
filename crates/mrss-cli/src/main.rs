use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mrss_core::{FeedItem, MediaOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mrss-cli", version, about = "Extract Media RSS metadata from RSS and Atom feeds")]
struct Cli {
    /// Feed documents to read
    #[arg(required = true)]
    feeds: Vec<PathBuf>,

    /// Options file (JSON); flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Print enclosure elements instead of JSON
    #[arg(long)]
    enclosures: bool,

    /// Skip media elements that fail to extract instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Extract items in parallel
    #[arg(long)]
    parallel: bool,

    /// Element name for --enclosures output
    #[arg(long)]
    node_name: Option<String>,

    /// URL attribute for plain enclosures and --enclosures output
    #[arg(long)]
    url_attribute: Option<String>,
}

#[derive(serde::Serialize)]
struct FeedReport<'a> {
    feed: &'a PathBuf,
    items: &'a [FeedItem],
}

fn build_options(cli: &Cli) -> anyhow::Result<MediaOptions> {
    let mut options = match &cli.config {
        Some(path) => MediaOptions::from_json_file(path)
            .with_context(|| format!("reading options from {}", path.display()))?,
        None => MediaOptions::default(),
    };
    if cli.skip_invalid {
        options.skip_invalid = true;
    }
    if cli.parallel {
        options.parallel = true;
    }
    if let Some(name) = &cli.node_name {
        options.node_name = name.clone();
    }
    if let Some(name) = &cli.url_attribute {
        options.url_attribute = name.clone();
    }
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = build_options(&cli)?;
    let t_total = std::time::Instant::now();
    let mut total_media = 0usize;

    for path in &cli.feeds {
        let root = mrss_core::load_document(path)
            .with_context(|| format!("loading {}", path.display()))?;
        let items = mrss_core::extract_feed(&root, &options)
            .with_context(|| format!("extracting media from {}", path.display()))?;
        total_media += items.iter().map(|i| i.medias.len()).sum::<usize>();

        if cli.enclosures {
            for item in &items {
                for media in &item.medias {
                    let element = mrss_core::media_element(media, &options);
                    println!("{}", mrss_core::to_xml_string(&element)?);
                }
            }
        } else {
            let report = FeedReport { feed: path, items: &items };
            let json = if cli.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
    }

    tracing::info!(
        feeds = cli.feeds.len(),
        media = total_media,
        elapsed_secs = t_total.elapsed().as_secs_f64(),
        "done"
    );

    Ok(())
}
