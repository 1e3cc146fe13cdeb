use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use streamline_core::client::{ProductType, DEFAULT_LIMIT, DEFAULT_PNG_SIZE};
use streamline_core::config::default_config_path;
use streamline_core::StreamlineError;

mod commands;
mod format;
mod output;

use commands::{Context, SearchArgs};

#[derive(Parser, Debug)]
#[clap(
    name = "streamline",
    author,
    version,
    about = "Search and download icons from Streamline"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(
        long,
        help = "Streamline API key (or use the STREAMLINE_API_KEY environment variable)"
    )]
    api_key: Option<String>,

    #[clap(long, short, help = "Enable debug logging")]
    verbose: bool,

    #[clap(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for icons
    Search {
        #[clap(subcommand)]
        action: SearchCommands,
    },
    /// Get icon details
    Get {
        #[clap(subcommand)]
        action: GetCommands,
    },
    /// Download icons
    Download {
        #[clap(subcommand)]
        action: DownloadCommands,
    },
    /// List icon sets, or the families of one set
    Families {
        #[clap(help = "Set name or key, e.g. \"sharp\" or \"Material Pro\"")]
        set: Option<String>,
    },
    /// Create a config file with a placeholder API key
    Init,
}

#[derive(Subcommand, Debug)]
enum SearchCommands {
    /// Search across all families
    Global {
        query: String,

        #[clap(flatten)]
        filters: SearchFlags,
    },
    /// Search within a family, a set, or an alias such as "mat"
    Family {
        #[clap(help = "Family slug, set name, or alias")]
        family: String,

        #[clap(default_value = "*")]
        query: String,

        #[clap(flatten)]
        filters: SearchFlags,
    },
}

#[derive(Args, Debug)]
struct SearchFlags {
    #[clap(long = "type", short = 't', default_value = "icons", help = "icons, illustrations, emoji or elements")]
    product_type: ProductType,

    #[clap(long, short, default_value_t = DEFAULT_LIMIT, help = "Number of results (1-100)")]
    limit: u32,

    #[clap(long, short, default_value_t = 0)]
    offset: u32,

    #[clap(long, help = "Filter by style, e.g. line, solid, duo")]
    style: Option<String>,

    #[clap(long, help = "Filter by category")]
    category: Option<String>,

    #[clap(long, help = "Only show free icons")]
    free_only: bool,

    #[clap(long, help = "Streamline API key")]
    api_key: Option<String>,
}

impl SearchFlags {
    fn split(self) -> (SearchArgs, Option<String>) {
        (
            SearchArgs {
                product_type: self.product_type,
                limit: self.limit,
                offset: self.offset,
                style: self.style,
                category: self.category,
                free_only: self.free_only,
            },
            self.api_key,
        )
    }
}

#[derive(Subcommand, Debug)]
enum GetCommands {
    /// Show metadata for one icon
    Icon {
        hash: String,

        #[clap(long, help = "Streamline API key")]
        api_key: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum DownloadCommands {
    /// Download an icon as SVG
    Svg {
        hash: String,

        #[clap(long, short, default_value = ".", help = "Output directory")]
        output: PathBuf,

        #[clap(long, help = "Custom file name (without extension)")]
        name: Option<String>,

        #[clap(long, help = "Keep fixed width and height instead of a responsive SVG")]
        no_responsive: bool,

        #[clap(long, help = "Streamline API key")]
        api_key: Option<String>,
    },
    /// Download an icon as PNG
    Png {
        hash: String,

        #[clap(long, short, default_value = ".", help = "Output directory")]
        output: PathBuf,

        #[clap(long, help = "Custom file name (without extension)")]
        name: Option<String>,

        #[clap(long, short, default_value_t = DEFAULT_PNG_SIZE, help = "Edge length in pixels")]
        size: u32,

        #[clap(long, help = "Streamline API key")]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = if cli.verbose {
        LevelFilter::Debug
    } else {
        cli.log_level.parse().unwrap_or(LevelFilter::Warn)
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();

    let ctx = Context {
        global_api_key: cli.api_key,
        config_path: default_config_path(),
    };

    if let Err(e) = run(&ctx, cli.command).await {
        match e.downcast_ref::<StreamlineError>() {
            Some(err) => eprint!("{}", format::error(err, &ctx.config_path)),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(ctx: &Context, command: Commands) -> Result<()> {
    match command {
        Commands::Search { action } => match action {
            SearchCommands::Global { query, filters } => {
                let (args, api_key) = filters.split();
                commands::search_global(ctx, &query, args, api_key).await
            }
            SearchCommands::Family {
                family,
                query,
                filters,
            } => {
                let (args, api_key) = filters.split();
                commands::search_family(ctx, &family, &query, args, api_key).await
            }
        },
        Commands::Get { action } => match action {
            GetCommands::Icon { hash, api_key } => commands::get_icon(ctx, &hash, api_key).await,
        },
        Commands::Download { action } => match action {
            DownloadCommands::Svg {
                hash,
                output,
                name,
                no_responsive,
                api_key,
            } => {
                commands::download_svg(ctx, &hash, &output, name.as_deref(), !no_responsive, api_key)
                    .await
            }
            DownloadCommands::Png {
                hash,
                output,
                name,
                size,
                api_key,
            } => commands::download_png(ctx, &hash, &output, name.as_deref(), size, api_key).await,
        },
        Commands::Families { set } => commands::families(set.as_deref()),
        Commands::Init => commands::init(ctx).await,
    }
}
