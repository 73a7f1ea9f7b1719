//! CLI entry point for pagetree

use std::io::IsTerminal;
use std::process;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use pagetree::{
    Backend, DirectoryLister, FilerClient, LocalLister, Location, OutputConfig, TreeFormatter,
    WalkerConfig, walk_with_config,
};
use tracing::{Level, info};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pagetree")]
#[command(about = "Recursively list all files under a directory of a filer, like tree")]
#[command(version)]
struct Args {
    /// Where to start: http://<filer_server>:<port>/dir/, file:///dir or a local directory.
    /// Without a trailing slash the last path element is shown as a single entry.
    #[arg(default_value = "http://localhost:8888/")]
    url: String,

    /// Entries requested per listing call
    #[arg(short = 'n', long = "page-size", default_value = "1000",
          value_parser = clap::value_parser!(u32).range(1..))]
    page_size: u32,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_parser = clap::value_parser!(u32).range(1..))]
    level: Option<u32>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print a directory and file count after the tree
    #[arg(long = "summary")]
    summary: bool,

    /// Per-request timeout for filer listings (e.g. 30s, 2m; 0 to disable)
    #[arg(long = "timeout", value_name = "DURATION", default_value = "30s",
          value_parser = parse_duration_string)]
    timeout: Duration,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Parse a duration string like "30s" or "2m" using humantime.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> pagetree::Result<()> {
    let location = Location::parse(&args.url)?;
    let (dir, name) = location.dir_and_name()?;

    let timeout = Some(args.timeout).filter(|t| !t.is_zero());
    let lister: Box<dyn DirectoryLister> = match location.backend {
        Backend::Filer(base) => {
            info!(filer = %base, ?timeout, "connecting to filer");
            Box::new(FilerClient::new(base, timeout)?)
        }
        Backend::Local(root) => {
            info!(root = %root.display(), "serving local directory");
            Box::new(LocalLister::new(root))
        }
    };

    let walker_config = WalkerConfig {
        page_size: args.page_size as usize,
        max_depth: args.level.map(|l| l as usize),
    };
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        show_summary: args.summary,
    };

    info!(directory = %dir, name = %name, page_size = args.page_size, "walking");
    let mut formatter = TreeFormatter::stdout(output_config);
    let stats = walk_with_config(&*lister, &dir, &name, &walker_config, &mut formatter)?;
    info!(
        directories = stats.directories,
        files = stats.files,
        requests = stats.requests,
        "done"
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("pagetree: {}", e);
        process::exit(1);
    }
}
