//! Bee Solver - CLI
//!
//! One-shot spelling-bee puzzle solver: prefilters a Hunspell word list by
//! puzzle constraints, validates the survivors with the hunspell process, and
//! prints pangrams, longest words, and a top-word preview.

use anyhow::{Context, Result};
use bee_solver::{
    config::{self, Config},
    core::PuzzleConstraints,
    dictionary::{load_base_words, load_blacklist, resolve_dictionary},
    filter::{FilterOptions, prefilter},
    oracle::{HunspellOracle, Oracle},
    output::{print_prefilter_summary, print_report},
    solver::solve,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bee_solver",
    about = "Spelling-bee puzzle solver backed by Hunspell dictionaries",
    version,
    author
)]
struct Cli {
    /// The 7 distinct allowed letters, e.g. "aelnrst"
    allowed: String,

    /// The mandatory letter, e.g. "e"
    mandatory: String,

    /// Directory containing Hunspell dictionaries
    #[arg(long, env = "HUNSPELL_DIR", default_value = config::DEFAULT_DICT_DIR)]
    dict_dir: PathBuf,

    /// Dictionary names to try in order; the first existing .dic/.aff pair wins
    #[arg(
        long,
        env = "HUNSPELL_DICT_CANDIDATES",
        value_delimiter = ',',
        default_value = config::DEFAULT_DICT_CANDIDATES
    )]
    dict_candidates: Vec<String>,

    /// Text encodings to try in order when decoding the .dic file
    #[arg(
        long,
        env = "HUNSPELL_DIC_ENCODINGS",
        value_delimiter = ',',
        default_value = config::DEFAULT_ENCODINGS
    )]
    encodings: Vec<String>,

    /// Minimum acceptable word length
    #[arg(long, env = "MINLEN", default_value_t = config::DEFAULT_MIN_LEN)]
    min_len: usize,

    /// Toggle the heuristic "looks reasonable" candidate filter
    #[arg(
        long,
        env = "FILTER_REASONABLE",
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_parser = config::parse_toggle
    )]
    reasonable_filter: bool,

    /// Path to a blacklist file, one excluded word per line
    #[arg(long, env = "BLACKLIST_PATH")]
    blacklist: Option<PathBuf>,

    /// How many valid words to preview in the report
    #[arg(long, env = "TOP_WORDS", default_value_t = config::DEFAULT_TOP_WORDS)]
    top_words: usize,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            dict_dir: self.dict_dir.clone(),
            dict_candidates: config::clean_list(&self.dict_candidates),
            encodings: config::clean_list(&self.encodings),
            min_len: self.min_len,
            reasonable_filter: self.reasonable_filter,
            blacklist_path: self.blacklist.clone(),
            top_words: self.top_words,
        }
    }
}

fn main() -> Result<()> {
    load_dotenv();

    let cli = Cli::parse();
    let config = cli.config();

    run(&cli.allowed, &cli.mandatory, &config)
}

/// Load a `.env` file before clap reads the environment
///
/// The path is overridable via `DOTENV_PATH`; a missing file is not an error.
fn load_dotenv() {
    match std::env::var_os("DOTENV_PATH") {
        Some(path) => drop(dotenvy::from_path(path)),
        None => drop(dotenvy::dotenv()),
    }
}

/// Run the full pipeline: load, prefilter, validate, solve, report
fn run(allowed: &str, mandatory: &str, config: &Config) -> Result<()> {
    let constraints = PuzzleConstraints::new(allowed, mandatory)?;

    let dict = resolve_dictionary(&config.dict_dir, &config.dict_candidates)?;
    let base_words = load_base_words(&dict.dic_path, &config.encodings)
        .with_context(|| format!("failed to read dictionary {}", dict.dic_path.display()))?;

    let options = FilterOptions {
        min_len: config.min_len,
        reasonable_filter: config.reasonable_filter,
        blacklist: load_blacklist(config.blacklist_path.as_deref()),
    };
    let candidates = prefilter(&base_words, &constraints, &options);
    print_prefilter_summary(candidates.len(), base_words.len());

    let oracle = HunspellOracle::new(&dict.dict_base, &config.dict_dir);
    let accepted = oracle.validate(&candidates)?;
    let accepted_words: Vec<String> = candidates
        .iter()
        .filter(|word| accepted.contains(*word))
        .cloned()
        .collect();

    let results = solve(&constraints, &accepted_words);
    print_report(&constraints, &results, config.top_words);

    Ok(())
}
