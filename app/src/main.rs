#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use lumen_core::Feature;
use lumen_detect::DetectorKind;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    AdaptInput, AdaptStrategy, CommandStrategy, DetectInput, DetectStrategy, InfoStrategy,
    InitStrategy, RitualInput, RitualStrategy, TiersInput, TiersStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "lumen spiritual wellness toolkit", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan text for attachment indicators
    Detect {
        /// Text to scan
        text: String,

        /// Detector to run (entity, marriage)
        #[arg(short, long, default_value = "entity")]
        detector: DetectorKind,

        /// Print the detection event as JSON
        #[arg(long)]
        json: bool,
    },
    /// Adapt a template to a tradition and emotional state
    Adapt {
        /// Template with {deity}, {protectionSymbol}, {lightColor}, {prayer}, {culturalReference}
        template: String,

        /// Tradition (defaults to user.tradition from config)
        #[arg(short, long)]
        tradition: Option<String>,

        /// Emotional state: crisis, distressed, calm, neutral
        #[arg(short, long)]
        state: Option<String>,

        /// Content type: protection, healing, cleansing, guidance, ...
        #[arg(short, long, default_value = "guidance")]
        content_type: String,

        /// Seed for reproducible cultural reference selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Suggest rituals for the current environment
    Ritual {
        /// Hour of day (0-23); defaults to local time
        #[arg(long)]
        hour: Option<u32>,

        /// Month (1-12); defaults to local date
        #[arg(long)]
        month: Option<u32>,

        /// Weather description, e.g. "light rain"
        #[arg(short, long)]
        weather: Option<String>,
    },
    /// List subscription tiers and their features
    Tiers {
        /// Only show which tier unlocks this feature, e.g. "entity_detection"
        #[arg(short, long)]
        feature: Option<Feature>,
    },
    /// Show configuration
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Detect {
            text,
            detector,
            json,
        } => {
            DetectStrategy
                .execute(DetectInput {
                    text,
                    detector,
                    json,
                })
                .await?;
        }
        Commands::Adapt {
            template,
            tradition,
            state,
            content_type,
            seed,
        } => {
            AdaptStrategy
                .execute(AdaptInput {
                    template,
                    tradition,
                    state,
                    content_type,
                    seed,
                })
                .await?;
        }
        Commands::Ritual {
            hour,
            month,
            weather,
        } => {
            RitualStrategy
                .execute(RitualInput {
                    hour,
                    month,
                    weather,
                })
                .await?;
        }
        Commands::Tiers { feature } => TiersStrategy.execute(TiersInput { feature }).await?,
        Commands::Info => InfoStrategy.execute(()).await?,
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
