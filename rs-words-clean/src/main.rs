//! Removes duplicate entries from dictionaries.
//!
//! Rewrites the dictionary in place, sorted, and optionally stores the
//! per-letter word counts as YAML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rs_words_core::{CleanReport, Dictionary};

/// Deduplicate and sort a word dictionary in place
#[derive(Debug, Parser)]
#[command(name = "rs-words-clean", version, about)]
struct Cli {
	/// Dictionary to clean, will be overwritten
	dictionary: PathBuf,

	/// Where to put the statistics log
	statistics: Option<PathBuf>,
}

fn write_statistics(path: &Path, report: &CleanReport) -> Result<()> {
	let yaml = serde_yaml::to_string(report).context("serializing statistics")?;
	std::fs::write(path, yaml).with_context(|| format!("writing statistics to {}", path.display()))
}

fn run(cli: &Cli) -> Result<CleanReport> {
	info!("removing duplicates from {}", cli.dictionary.display());
	let report = Dictionary::clean_file(&cli.dictionary)
		.with_context(|| format!("cleaning {}", cli.dictionary.display()))?;

	for (letter, old) in &report.old {
		println!("{letter} {old} {}", report.new.get(letter).copied().unwrap_or_default());
	}
	if let Some(path) = &cli.statistics {
		write_statistics(path, &report)?;
	}
	println!("Removed a total of: {} words", report.removed);
	Ok(report)
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let cli = Cli::parse();
	run(&cli)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cleans_and_writes_statistics() {
		let dir = tempfile::tempdir().unwrap();
		let dictionary = dir.path().join("words.dict");
		let statistics = dir.path().join("stats.yaml");
		std::fs::write(&dictionary, "moon\nable\nMoon\nbear\nable\n").unwrap();

		let cli = Cli { dictionary: dictionary.clone(), statistics: Some(statistics.clone()) };
		let report = run(&cli).unwrap();

		assert_eq!(report.removed, 2);
		assert_eq!(std::fs::read_to_string(&dictionary).unwrap(), "able\nbear\nmoon\n");

		let stored: CleanReport = serde_yaml::from_str(&std::fs::read_to_string(&statistics).unwrap()).unwrap();
		assert_eq!(stored, report);
		assert_eq!(stored.old[&'m'], 2);
		assert_eq!(stored.new[&'m'], 1);
	}

	#[test]
	fn missing_dictionary_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let cli = Cli { dictionary: dir.path().join("missing.dict"), statistics: None };
		assert!(run(&cli).is_err());
	}

	#[test]
	fn statistics_argument_is_optional() {
		let cli = Cli::try_parse_from(["rs-words-clean", "words.dict"]).unwrap();
		assert_eq!(cli.dictionary, PathBuf::from("words.dict"));
		assert!(cli.statistics.is_none());
	}
}
