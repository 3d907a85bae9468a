use clap::{Parser, Subcommand, ValueEnum};
use sidebar_tree::{check, config, output, sidebar, tree};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "sidebar-tree")]
#[command(about = "Build documentation sidebars from numbered markdown directories")]
#[command(long_about = "\
Build documentation sidebars from numbered markdown directories

Your filesystem is the data source. Directories become collapsible groups,
markdown files become links, and the ordering prefix is stripped from labels.

Content structure:

  docs/
  ├── sidebar.toml                 # Sections and tree settings
  └── src/                         # Content root (links are relative to it)
      └── page/
          ├── typescript/          # Directory mode
          │   ├── 01-intro.md      # → { text: \"intro\", link: ... }
          │   ├── 02-advanced/     # → collapsible group \"advanced\"
          │   │   └── 01-deep.md
          │   └── images/          # Excluded, never listed
          └── framework/           # Manifest mode
              ├── tree.json        # [{\"text\":\"vue\",\"items\":[{\"text\":\"life-cycle\"}]}]
              └── vue/life-cycle.md

Run 'sidebar-tree gen-config' to generate a documented sidebar.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the tree for a single directory
    Tree {
        /// Section directory
        dir: PathBuf,
        /// Where order and grouping come from
        #[arg(long, value_enum, default_value_t = Mode::Auto)]
        mode: Mode,
        /// Print an outline instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// Build every configured section into a sidebar JSON file
    Build {
        /// Output file
        #[arg(long, default_value = "sidebar.json")]
        output: PathBuf,
    },
    /// Build every section and verify that all links resolve
    Check,
    /// Print a stock sidebar.toml with all options documented
    GenConfig,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Manifest if the directory has one, filesystem otherwise
    Auto,
    Directory,
    Manifest,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_tracing(cli.log_level);
    debug!("Parsed CLI arguments: {cli:?}");

    match cli.command {
        Command::Tree { dir, mode, text } => {
            let config = config::load_config(&cli.config)?;
            let options = config.tree.to_options();
            let nodes = match mode {
                Mode::Auto => tree::build_tree(&dir, &options)?,
                Mode::Directory => tree::build_tree_from_directory(&dir, &options)?,
                Mode::Manifest => tree::build_tree_from_manifest(&dir, &options)?,
            };
            if text {
                output::print_tree(&nodes);
            } else {
                println!("{}", serde_json::to_string_pretty(&nodes)?);
            }
        }
        Command::Build { output: out_path } => {
            let config = config::load_config(&cli.config)?;
            let sidebar = sidebar::build_sidebar(&config, config_dir(&cli.config))?;
            let json = serde_json::to_string_pretty(&sidebar)?;
            std::fs::write(&out_path, json)?;
            output::print_sidebar_output(&sidebar);
            println!("==> Wrote {}", out_path.display());
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            println!("==> Checking {}", cli.config.display());
            let sidebar = sidebar::build_sidebar(&config, config_dir(&cli.config))?;
            output::print_sidebar_output(&sidebar);
            let missing = check::check_sidebar(&sidebar, config.tree.link_style);
            if !missing.is_empty() {
                output::print_missing_targets(&missing);
                return Err(format!("{} link target(s) do not exist", missing.len()).into());
            }
            println!("==> Sidebar is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

/// Directory that relative section paths are resolved against.
fn config_dir(config_path: &Path) -> &Path {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
