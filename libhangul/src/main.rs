use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libhangul::{decompose, differ, DiffStats, DrillFeedback, HangulConfig, Segment, SyllableDrill};
use libtyping_core::{first_mismatch_offset, Markers};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "libhangul")]
#[command(about = "Compare typed Hangul against a reference text")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare typed text against a reference once
    Diff {
        /// What the user typed
        typed: String,
        /// Reference text at the same positions
        reference: String,
        /// Untruncated reference used for lookahead (defaults to REFERENCE)
        #[arg(long)]
        full: Option<String>,
        /// Start each new run with the reference character instead of the typed one
        #[arg(long)]
        replace_with_reference: bool,
        /// Print segments and stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the jamo typed for each character
    Decompose {
        text: String,
    },
    /// Practice typing a reference text, one attempt per line
    Practice {
        reference: String,
    },
    /// Single-syllable drill, one attempt per line
    Drill {
        /// Syllables to drill (defaults to the configured list)
        syllables: Option<String>,
        /// Seed for a reproducible syllable order
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<HangulConfig> {
    match path {
        Some(path) => HangulConfig::load_toml(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(HangulConfig::default()),
    }
}

fn render(segments: &[Segment], markers: &Markers) -> String {
    segments
        .iter()
        .map(|seg| markers.for_style(seg.state.style()).wrap(&seg.text))
        .collect()
}

fn print_stats(stats: &DiffStats) {
    println!(
        "  equal={} pending={} wrong={} accuracy={:.1}%",
        stats.equal,
        stats.intermediate,
        stats.unequal,
        stats.accuracy() * 100.0
    );
}

fn handle_diff(
    config: &HangulConfig,
    typed: &str,
    reference: &str,
    full: Option<&str>,
    json: bool,
) -> Result<()> {
    let full = full.unwrap_or(reference);
    let segments = differ().diff(typed, reference, full, config.base().preserve_typed);
    let stats = DiffStats::from_segments(&segments);

    if json {
        let out = serde_json::json!({ "segments": segments, "stats": stats });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", render(&segments, &config.base.markers));
        print_stats(&stats);
    }
    Ok(())
}

fn handle_decompose(text: &str) {
    for ch in text.chars() {
        let spelling = decompose(ch);
        if spelling.is_empty() {
            println!("{ch:?}: (opaque)");
        } else {
            println!("{ch}: {}", spelling.iter().collect::<String>());
        }
    }
}

fn run_practice(config: &HangulConfig, reference: &str) -> Result<()> {
    let differ = differ();
    println!("Type the text below and press Enter. Ctrl-D to exit.");
    println!("  {reference}");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let typed = line.trim_end_matches(['\r', '\n']);
        if typed.is_empty() {
            continue;
        }
        let segments = differ.diff_window(typed, reference, config.base.preserve_typed);
        println!("  {}", render(&segments, &config.base.markers));
        print_stats(&DiffStats::from_segments(&segments));

        if typed == reference {
            println!("Done!");
            break;
        }
        let offset = first_mismatch_offset(&segments);
        if offset < reference.chars().count() {
            println!("  check position {}", offset + 1);
        }
    }
    Ok(())
}

fn run_drill(syllables: &str, seed: Option<u64>) -> Result<()> {
    let drill = match seed {
        Some(seed) => SyllableDrill::with_seed(syllables, seed),
        None => SyllableDrill::new(syllables),
    };
    let mut drill = drill.context("cannot start drill")?;
    println!("Type each syllable and press Enter. Ctrl-D to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} > ", drill.current());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read stdin")? == 0 {
            break;
        }
        match drill.feed(line.trim()) {
            DrillFeedback::Cleared => {}
            DrillFeedback::Advanced => println!("  ok ({} done)", drill.completed()),
            DrillFeedback::Pending => println!("  keep going"),
            DrillFeedback::Incorrect => println!("  wrong"),
        }
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Diff {
            typed,
            reference,
            full,
            replace_with_reference,
            json,
        }) => {
            if replace_with_reference {
                config.base_mut().preserve_typed = false;
            }
            handle_diff(&config, &typed, &reference, full.as_deref(), json)
        }
        Some(Commands::Decompose { text }) => {
            handle_decompose(&text);
            Ok(())
        }
        Some(Commands::Practice { reference }) => run_practice(&config, &reference),
        Some(Commands::Drill { syllables, seed }) => {
            run_drill(syllables.as_deref().unwrap_or(&config.drill_syllables), seed)
        }
        // No subcommand: start the drill with the configured syllables
        None => run_drill(&config.drill_syllables, None),
    }
}
