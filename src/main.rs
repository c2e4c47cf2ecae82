//! Lanai Spell - Main entrypoint.
//!
//! This is the main entry point for the Lanai Spell application.
//! It loads configuration, initializes the logging system, and runs the
//! selected command.

use clap::{Parser, Subcommand};
use lanai_spell_lib::config::{ConfigLoader, LanaiConfig, LogConfig, Validate, ENV_PREFIX};
use lanai_spell_lib::data_structures::lanai_trie::SearchStrategy;
use lanai_spell_lib::error::{
    ErrorContext, ErrorReporting, LanaiError, LanaiResult, TracingErrorReporter,
};
use lanai_spell_lib::session::{load_word_list, read_headed_dictionary, OutputFormat, SpellChecker};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai Spell.
#[derive(Parser, Debug)]
#[clap(name = "Lanai Spell", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check query words against a dictionary
    Check(CheckArgs),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Check(_) => "check",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Options for the `check` command.
#[derive(clap::Args, Debug, Default)]
struct CheckArgs {
    /// Word list with one word per line. Without it the input starts with
    /// a size line followed by that many dictionary words.
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Read queries from this file instead of stdin
    #[clap(short, long, value_parser)]
    input: Option<PathBuf>,

    /// Largest edit distance a suggestion may have
    #[clap(short, long)]
    max_mistakes: Option<usize>,

    /// Order in which the trie is explored
    #[clap(short, long, value_enum)]
    strategy: Option<SearchStrategy>,

    /// Output format for verdicts
    #[clap(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Runs a spell-check session.
fn run_check(args: CheckArgs, mut config: LanaiConfig) -> LanaiResult<()> {
    if let Some(max_mistakes) = args.max_mistakes {
        config.search.max_mistakes = max_mistakes;
    }
    if let Some(strategy) = args.strategy {
        config.search.strategy = strategy;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    config.validate()?;

    let trie_config = config.trie.to_trie_config();
    let options = config.search.to_search_options();

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut lines = input.lines();

    let trie = match &args.dictionary {
        Some(path) => load_word_list(BufReader::new(File::open(path)?), trie_config)?,
        None => read_headed_dictionary(&mut lines, trie_config)?,
    };
    info!(
        words = trie.len(),
        nodes = trie.node_count(),
        max_mistakes = options.max_mistakes,
        strategy = ?options.strategy,
        "Dictionary ready"
    );

    let checker = SpellChecker::new(trie, options);
    let mut out = BufWriter::new(io::stdout().lock());
    checker.run(lines, &mut out, config.output.format)?;

    Ok(())
}

/// Writes the default configuration as TOML.
fn gen_config(output: PathBuf) -> LanaiResult<()> {
    info!("Generating default configuration");

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&LanaiConfig::default())
        .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(&output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();
    let command = args
        .command
        .unwrap_or_else(|| Command::Check(CheckArgs::default()));

    let config = match &command {
        Command::GenConfig { .. } => LanaiConfig::default(),
        _ => match ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                process::exit(1);
            }
        },
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }

    let reporting = ErrorReporting::new(Arc::new(TracingErrorReporter));
    let component = command.name();

    let result = match command {
        Command::Check(check) => run_check(check, config),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => gen_config(output),
    };

    if let Err(error) = result {
        reporting.report(ErrorContext::new(error, component));
        process::exit(1);
    }
}
