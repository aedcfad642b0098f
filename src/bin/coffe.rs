//! CoFFE Analyzer - Command Line Interface
//!
//! Reads a CoFFE table from a delimited text file and prints one minimized
//! expression per outcome.

use clap::Parser;
use coffe_analyzer::{AnalysisConfig, MinimizerConfig, Table};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "coffe")]
#[command(about = "Minimize a Combinational Functional Failures Effects table", long_about = None)]
#[command(version)]
struct Args {
    /// Input table (delimited text, header first, outcome in the last column)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Field delimiter
    #[arg(short = 'd', long = "delimiter", default_value_t = coffe_analyzer::DEFAULT_DELIMITER)]
    delimiter: char,

    /// State that never produces a literal (repeatable)
    #[arg(short = 'i', long = "ignore-state", value_name = "STATE")]
    ignored_states: Vec<String>,

    /// Outcome excluded from the analysis (repeatable)
    #[arg(short = 'x', long = "ignore-outcome", value_name = "OUTCOME")]
    ignored_outcomes: Vec<String>,

    /// Names used in literals instead of the column headers
    #[arg(short = 'H', long = "headers", value_name = "NAME", value_delimiter = ',')]
    headers: Option<Vec<String>>,

    /// Print the minimal sum-of-products without factorisation
    #[arg(long = "flat")]
    flat: bool,

    /// Fail when the filters leave nothing to analyze
    #[arg(long = "strict")]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::new()
            .ignore_states(&self.ignored_states)
            .ignore_outcomes(&self.ignored_outcomes)
            .strict(self.strict)
            .minimizer(MinimizerConfig {
                factorise: !self.flat,
                ..MinimizerConfig::default()
            });
        if let Some(headers) = &self.headers {
            config = config.custom_headers(headers);
        }
        config
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        args.log_level(),
        ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let table = match Table::from_file(&args.input, args.delimiter) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading table '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let analysis = match table.analyze(&args.config()) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Error analyzing '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    print!("{}", analysis);

    for outcome in analysis.filtered_outcomes() {
        eprintln!("note: outcome '{}' was ignored", outcome);
    }
    for outcome in analysis.vacuous_outcomes() {
        eprintln!(
            "note: outcome '{}' has a row of ignored states only, its expression is TRUE",
            outcome
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["coffe", "table.csv"]);
        assert_eq!(args.input, PathBuf::from("table.csv"));
        assert_eq!(args.delimiter, ';');
        assert!(args.ignored_states.is_empty());
        assert!(args.headers.is_none());
        assert_eq!(args.log_level(), LevelFilter::Warn);

        let config = args.config();
        assert!(config.minimizer.factorise);
        assert!(!config.strict);
    }

    #[test]
    fn test_repeated_filters() {
        let args = parse(&[
            "coffe",
            "table.csv",
            "-i",
            "O",
            "--ignore-state",
            "D",
            "-x",
            "No overrun",
            "-x",
            "Low-speed overrun",
        ]);
        let config = args.config();
        assert_eq!(config.ignored_states.len(), 2);
        assert!(config.ignored_outcomes.contains("Low-speed overrun"));
    }

    #[test]
    fn test_headers_are_comma_separated() {
        let args = parse(&["coffe", "t.csv", "-H", "WBrake,GrndSpoiler,ThrustRev,Flap"]);
        let headers: Vec<String> = args
            .config()
            .custom_headers
            .unwrap()
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(headers, vec!["WBrake", "GrndSpoiler", "ThrustRev", "Flap"]);
    }

    #[test]
    fn test_flags() {
        let args = parse(&["coffe", "t.csv", "-d", ",", "--flat", "--strict", "-vv"]);
        assert_eq!(args.delimiter, ',');
        assert_eq!(args.log_level(), LevelFilter::Debug);
        let config = args.config();
        assert!(!config.minimizer.factorise);
        assert!(config.strict);
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert!(Args::try_parse_from(["coffe"]).is_err());
        assert!(Args::try_parse_from(["coffe", "t.csv", "-d", ";;"]).is_err());
    }
}
