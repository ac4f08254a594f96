mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::LayoutArgs;
use mdstamp_core::paths;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mdstamp",
    about = "Stamp markdown trees with inferred YAML frontmatter and patch generated tests",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory to operate on (default: current directory)
    #[arg(long, global = true, env = "MDSTAMP_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepend inferred frontmatter to every markdown file under the root
    Stamp {
        /// Print a notice and exit without touching any file
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show the frontmatter that would be generated for the given files
    Classify {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Fill in missing default parameters and null assertions in generated tests
    FixTests {
        /// Directory holding *.test.ts files, relative to the root
        #[arg(long, default_value = paths::TEST_DIR)]
        dir: PathBuf,

        /// Test file names to leave untouched (repeatable)
        #[arg(long = "skip", value_name = "NAME", default_value = paths::PATCHED_TEST_FILE)]
        skip: Vec<String>,

        /// YAML file replacing the built-in default-parameter table
        #[arg(long, value_name = "YAML")]
        params: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Stamp { dry_run, layout } => cmd::stamp::run(&root, &layout, dry_run, cli.json),
        Commands::Classify { files, layout } => {
            cmd::classify::run(&root, &layout, &files, cli.json)
        }
        Commands::FixTests { dir, skip, params } => {
            cmd::fix_tests::run(&root, &dir, &skip, params.as_deref(), cli.json)
        }
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
