use atlas_core::SearchCategory;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for volcano-atlas
#[derive(Debug, Parser)]
#[command(
    name = "volcano-atlas",
    version,
    about = "Inspect the VolcanoAtlas content tree and geo dataset"
)]
pub struct CliArgs {
    /// Data directory holding the site files and `content/` (default: data)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to the geo dataset, `.json` or `.json.gz` (default: volcanoes.json)
    #[arg(short = 'g', long = "geo", global = true)]
    pub geo: Option<PathBuf>,

    /// Public site URL used for sitemap links
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// More logging (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the content tree and the geo dataset
    Stats,

    /// Resolve a volcano page (curated, dynamic or not found)
    Volcano {
        /// Page slug (e.g. mount-fuji)
        slug: String,
    },

    /// Country page with its merged volcano list
    Country {
        /// Country slug (e.g. japan)
        slug: String,
    },

    /// Special or ranking page
    Special {
        /// Page slug (e.g. active-volcanoes)
        slug: String,
    },

    /// Coordinates for volcano names in the geo dataset
    Coords {
        /// Volcano names (case-insensitive)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Search volcanoes, countries and pages
    Search {
        /// Query (at least two characters)
        q: String,

        /// Maximum number of results
        #[arg(short = 'l', long = "limit", default_value_t = 20)]
        limit: usize,

        /// all | volcanoes | countries | pages
        #[arg(short = 'c', long = "category", default_value = "all")]
        category: SearchCategory,
    },

    /// Fetch the live alert and weekly report feeds (needs the `feeds` feature)
    Activity,

    /// Write sitemap.xml and robots.txt
    Sitemap {
        /// Output directory
        #[arg(short = 'o', long = "out", default_value = "public")]
        out: PathBuf,
    },
}
