//! Terminal task list.
//!
//! Starts an interactive session on stdin/stdout: type a title to add a
//! task, `toggle <n>` / `delete <n>` to act on a row, `theme` to switch
//! between light and dark. Tasks live in memory for the session only.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tasklist::core::sample::sample_tasks;
use tasklist::core::store::TaskStore;
use tasklist::core::theme::{ThemeMode, ThemeSelector};
use tasklist::exit_codes;
use tasklist::host::run_host;
use tasklist::io::config::{DEFAULT_CONFIG_FILE, TasklistConfig, load_config, write_config};
use tasklist::io::render::{JsonRenderer, TextRenderer};
use tasklist::logging;
use tasklist::session::Session;
use tracing::info;

#[derive(Parser)]
#[command(name = "tasklist", version, about = "Single-screen terminal task list")]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session (the default).
    Run(RunArgs),
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the effective configuration.
    Config,
}

#[derive(Args, Default)]
struct RunArgs {
    /// Start with this theme instead of the configured one.
    #[arg(long)]
    theme: Option<ThemeMode>,
    /// Start with the sample tasks.
    #[arg(long)]
    seed: bool,
    /// Emit one JSON object per frame instead of text.
    #[arg(long)]
    json: bool,
    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => cmd_run(&cli.config, args),
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Config => cmd_config(&cli.config),
    }
}

fn cmd_run(config_path: &Path, args: RunArgs) -> Result<()> {
    let mut cfg = load_config(config_path)?;
    if let Some(theme) = args.theme {
        cfg.theme = theme;
    }
    if args.seed {
        cfg.seed_sample_tasks = true;
    }
    if args.no_color || !io::stdout().is_terminal() {
        cfg.color = false;
    }

    let store = if cfg.seed_sample_tasks {
        TaskStore::from_tasks(sample_tasks()).map_err(|err| anyhow!(err))?
    } else {
        TaskStore::new()
    };
    let mut session = Session::new(store, ThemeSelector::new(cfg.theme));
    let mut input = io::stdin().lock();

    if args.json {
        let mut renderer = JsonRenderer::new(io::stdout());
        run_host(&mut session, &mut input, &mut renderer, &mut io::stderr())
    } else {
        let mut renderer = TextRenderer::new(
            io::stdout(),
            cfg.color,
            cfg.empty_placeholder,
            cfg.input_placeholder,
        );
        run_host(&mut session, &mut input, &mut renderer, &mut io::stdout())
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        info!(path = %config_path.display(), "config exists, leaving it alone");
        println!("{} already exists (use --force to overwrite)", config_path.display());
        return Ok(());
    }
    write_config(config_path, &TasklistConfig::default())?;
    println!("wrote {}", config_path.display());
    Ok(())
}

fn cmd_config(config_path: &Path) -> Result<()> {
    let cfg = load_config(config_path)?;
    let rendered = toml::to_string_pretty(&cfg)?;
    print!("{}", rendered);
    Ok(())
}
