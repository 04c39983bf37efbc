//! Binary entrypoint for rs-words.
//!
//! Parses arguments, sets up logging and delegates to `rs-words-core`.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{LevelFilter, debug};

use rs_words_core::config::GeneratorConfig;
use rs_words_core::{Dictionary, FormatSpec, Seed, SelectionRequest, WordGenerator, WordStyle};

/// Create and format random collections of words
#[derive(Debug, Parser)]
#[command(name = "rs-words", version, about)]
struct Cli {
	/// Word list to use instead of the bundled one
	#[arg(short, long, value_name = "FILE")]
	dictionary: Option<PathBuf>,

	/// Number of words to return (default 2)
	#[arg(short, long, value_name = "N")]
	count: Option<usize>,

	/// Letters used to form the word list, one word per letter; overrides --count
	#[arg(short, long, value_name = "LETTERS")]
	initials: Option<String>,

	/// Seed for the random number generator (any 64-bit integer); the same
	/// seed with the same settings gives repeatable results
	#[arg(short, long, value_name = "N", allow_negative_numbers = true)]
	seed: Option<i64>,

	/// How to style the individual words (lowercase, uppercase, capitalize, mixedcase, camelcase)
	#[arg(long = "wordstyle", visible_alias = "ws", value_name = "STYLE")]
	wordstyle: Option<String>,

	/// How to separate words (default: a space)
	#[arg(long = "separator", visible_alias = "sep", value_name = "SEP", allow_hyphen_values = true)]
	separator: Option<String>,

	/// Compound format such as `hyphenated-mixedcase`, sets both style and separator
	#[arg(short = 'f', long = "format", value_name = "FORMAT", conflicts_with_all = ["wordstyle", "separator"])]
	format: Option<String>,

	/// YAML file with default settings
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Print the seed that was used; repeat to increase log verbosity
	#[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
	verbose: u8,
}

/// Options whose value is the next argument when not given as `--opt=value`.
const VALUE_OPTIONS: [&str; 17] = [
	"-d", "--dictionary", "-c", "--count", "-i", "--initials", "-s", "--seed", "-ws", "--wordstyle",
	"--ws", "-sep", "--separator", "--sep", "-f", "--format", "--config",
];

/// Rewrites the historical single-dash long flags (`-ws`, `-sep`) to their
/// `--` form so clap can parse them.
///
/// Only tokens in flag position are rewritten: option values (`--separator -sep`)
/// and everything after `--` are left untouched.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
	I: IntoIterator<Item = OsString>,
{
	let mut normalized = Vec::new();
	let mut expects_value = false;
	let mut positional_only = false;

	for arg in args {
		if expects_value || positional_only {
			expects_value = false;
			normalized.push(arg);
			continue;
		}
		let rewritten = match arg.to_str() {
			Some("--") => {
				positional_only = true;
				None
			}
			Some("-ws") => Some(OsString::from("--wordstyle")),
			Some("-sep") => Some(OsString::from("--separator")),
			Some(s) if s.starts_with("-ws=") => Some(OsString::from(format!("--wordstyle={}", &s[4..]))),
			Some(s) if s.starts_with("-sep=") => Some(OsString::from(format!("--separator={}", &s[5..]))),
			_ => None,
		};
		expects_value = arg.to_str().is_some_and(|s| VALUE_OPTIONS.contains(&s));
		normalized.push(rewritten.unwrap_or(arg));
	}
	normalized
}

/// Log levels for the library and for this binary at a given `-v` count.
///
/// Without `-v` only the library's info notices (count/initials precedence)
/// reach stderr; the binary itself stays at warn.
fn log_levels(verbosity: u8) -> (LevelFilter, LevelFilter) {
	match verbosity {
		0 => (LevelFilter::Info, LevelFilter::Warn),
		1 => (LevelFilter::Debug, LevelFilter::Debug),
		_ => (LevelFilter::Trace, LevelFilter::Trace),
	}
}

fn init_logging(verbosity: u8) {
	// RUST_LOG still wins
	let (library, binary) = log_levels(verbosity);
	env_logger::Builder::new()
		.filter_level(LevelFilter::Warn)
		.filter_module("rs_words_core", library)
		.filter_module("rs_words", binary)
		.parse_default_env()
		.format_timestamp(None)
		.init();
}

impl Cli {
	fn load_config(&self) -> Result<GeneratorConfig> {
		match &self.config {
			Some(path) => GeneratorConfig::from_yaml_file(path)
				.with_context(|| format!("loading config from {}", path.display())),
			None => Ok(GeneratorConfig::default()),
		}
	}

	/// Resolves style and separator: `--format`, then flags, then the config file.
	fn format_spec(&self, config: &GeneratorConfig) -> Result<FormatSpec> {
		if let Some(format) = &self.format {
			return Ok(FormatSpec::from_compound(format)?);
		}
		let mut spec = config.format_spec();
		if let Some(style) = &self.wordstyle {
			spec.style = style.parse::<WordStyle>()?;
		}
		if let Some(separator) = &self.separator {
			spec.separator = separator.clone();
		}
		Ok(spec)
	}

	fn dictionary(&self, config: &GeneratorConfig) -> Result<Dictionary> {
		match &self.dictionary {
			Some(path) => Ok(Dictionary::load(path)?),
			None => Ok(config.load_dictionary()?),
		}
	}

	fn request(&self, config: &GeneratorConfig) -> SelectionRequest {
		let count = self.count.or(if self.initials.is_none() { config.count } else { None });
		SelectionRequest::resolve(count, self.initials.clone())
	}
}

/// Runs one invocation and returns the line to print.
fn run(cli: &Cli) -> Result<String> {
	let config = cli.load_config()?;
	let format = cli.format_spec(&config)?;
	let dictionary = cli.dictionary(&config)?;
	let request = cli.request(&config);

	let seed = cli.seed.or(config.seed).map_or(Seed::Random, Seed::from_signed);
	let mut generator = WordGenerator::new(dictionary, format, seed);
	if cli.verbose > 0 {
		eprintln!("seed: {}", generator.signed_seed());
	}
	debug!("generating {} word(s)", request.len());

	Ok(generator.generate(&request)?)
}

fn main() -> Result<()> {
	let cli = Cli::parse_from(normalize_args(std::env::args_os()));
	init_logging(cli.verbose);

	println!("{}", run(&cli)?);
	Ok(())
}
