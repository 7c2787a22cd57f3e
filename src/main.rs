use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sax::output;
use sax::search::{self, Dictionary};
use sax::utils::{load_text, BuildSpinner, TextMode};
use sax::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sax")]
#[command(about = "Suffix array construction and text search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with suffix array settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fold ASCII case when building and querying
    #[arg(short = 'i', long, global = true)]
    ignore_case: bool,

    /// Log index build details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            ColorMode::Auto | ColorMode::Never => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show every occurrence of a keyword with surrounding context
    Kwic {
        /// Text file to search (lines are joined)
        file: PathBuf,

        /// Keyword to look for
        query: String,

        /// Bytes of context on each side
        #[arg(short, long, default_value_t = 20)]
        context: usize,
    },
    /// Find the longest substring that occurs at least twice
    Lrs {
        /// Text file (whitespace-separated words)
        file: PathBuf,
    },
    /// Find the longest substring shared by two files
    Lcs {
        /// First text file
        first: PathBuf,

        /// Second text file
        second: PathBuf,
    },
    /// List words of an input file that are not in a dictionary
    Spell {
        /// Dictionary, one word per line
        dictionary: PathBuf,

        /// Words to check, one per line
        input: PathBuf,
    },
    /// List dictionary words starting with a prefix
    Complete {
        /// Dictionary, one word per line
        dictionary: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of completions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print the sorted suffixes with their offsets and LCPs
    Table {
        /// Text file (lines are joined)
        file: PathBuf,

        /// Maximum suffix bytes shown per row
        #[arg(short, long, default_value_t = 50)]
        width: usize,
    },
    /// Show index statistics
    Stats {
        /// Text file, indexed as is
        file: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.ignore_case)?;
    let color = ColorChoice::from(cli.color);

    match cli.command {
        Commands::Kwic {
            file,
            query,
            context,
        } => {
            let text = load_text(&file, TextMode::Joined)?;
            let index = build_index(&config, text.clone())?;
            let hits = search::kwic(&index, query.as_bytes(), context);
            info!(hits = hits.len(), "keyword search done");
            output::print_kwic_hits(&hits, &text, color)?;
        }
        Commands::Lrs { file } => {
            let text = load_text(&file, TextMode::Words)?;
            let index = build_index(&config, text.clone())?;
            let lrs = search::longest_repeated_substring(&index)
                .map(|s| String::from_utf8_lossy(s.bytes(&text)).into_owned())
                .unwrap_or_default();
            println!("LRS: '{}'", lrs);
        }
        Commands::Lcs { first, second } => {
            let a = load_text(&first, TextMode::Joined)?;
            let b = load_text(&second, TextMode::Joined)?;
            let builder = SuffixArrayBuilder::new(config)?;
            let lcs = search::longest_common_substring(builder, &a, &b)
                .map(|c| String::from_utf8_lossy(&a[c.a_offset..c.a_offset + c.len]).into_owned())
                .unwrap_or_default();
            println!("The longest common substring is: '{}'", lcs);
        }
        Commands::Spell { dictionary, input } => {
            let dictionary = load_dictionary(&dictionary)?;
            let input = read_to_string(&input)?;
            let misspelled = dictionary.misspelled(input.lines());
            output::print_misspelled(&misspelled, color)?;
        }
        Commands::Complete {
            dictionary,
            prefix,
            limit,
        } => {
            let dictionary = load_dictionary(&dictionary)?;
            for word in dictionary.complete(&prefix, limit) {
                println!("{}", word);
            }
        }
        Commands::Table { file, width } => {
            let text = load_text(&file, TextMode::Joined)?;
            let index = build_index(&config, text)?;
            output::print_suffix_table(&index, width)?;
        }
        Commands::Stats { file, json } => {
            let text = load_text(&file, TextMode::Raw)?;
            let index = build_index(&config, text)?;
            let stats = index.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Suffix array statistics:");
                println!("  Text size: {} bytes", stats.text_size);
                println!("  Suffixes: {}", stats.suffix_count);
                println!("  Longest adjacent LCP: {}", stats.max_lcp);
                println!("  Insertion cutoff: {}", stats.insertion_cutoff);
                println!("  Case insensitive: {}", stats.case_insensitive);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Read settings from `path` if given, then apply flag overrides
fn load_config(path: Option<&Path>, ignore_case: bool) -> Result<SuffixArrayConfig> {
    let mut config = match path {
        Some(path) => {
            let data = read_to_string(path)?;
            serde_json::from_str(&data)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => SuffixArrayConfig::default(),
    };

    if ignore_case {
        config.case_insensitive = true;
    }
    config.validate()?;

    debug!(?config, "loaded configuration");
    Ok(config)
}

fn build_index(config: &SuffixArrayConfig, text: Vec<u8>) -> Result<SuffixArray> {
    let builder = SuffixArrayBuilder::new(config.clone())?;
    let spinner = BuildSpinner::start(
        format!("Sorting {} suffixes", text.len()),
        std::io::stderr().is_terminal(),
    );
    let index = builder.build(text);
    spinner.finish();
    Ok(index)
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let words = read_to_string(path)?;
    let dictionary = Dictionary::from_lines(words.lines());
    info!(words = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
