use std::{env, ffi::OsString, path::{Path, PathBuf}};

use clap::Parser;
use clap_verbosity_flag::WarnLevel;
use libencsniff::encsniff::config::MAX_BLOCK_SIZE;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
	#[command(flatten)]
	pub verbose: clap_verbosity_flag::Verbosity<WarnLevel>,
	/// Path to the file to classify. A path starting with '-' can be given after "--", or on its own if the file exists
	#[arg(value_parser = clap::value_parser!(PathBuf))]
	pub path: PathBuf,
	/// Path to the TOML config file. Defaults to "encsniff.toml" in the current working directory, if one exists
	#[arg(short, long)]
	pub config: Option<String>,
	/// Number of bytes to read from the file at a time. Overrides the config file
	#[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=MAX_BLOCK_SIZE))]
	pub block_size: Option<u64>,
	/// Report files larger than this many bytes as data without classifying them. Overrides the config file
	#[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
	pub max_bytes: Option<u64>
}

impl Args {
	/// Parses the process arguments, exiting with usage on error
	pub fn parse_args() -> Self {
		Args::parse_from(disambiguate_lone_path(env::args_os().collect(), |path| path.exists()))
	}
}

/// When the only argument looks like an option but names an existing file, marks it as positional so it is classified
/// rather than rejected as an unknown option
pub fn disambiguate_lone_path(mut argv: Vec<OsString>, exists: impl Fn(&Path) -> bool) -> Vec<OsString> {
	if argv.len() == 2 && argv[1].to_string_lossy().starts_with('-') && exists(Path::new(&argv[1])) {
		argv.insert(1, OsString::from("--"));
	}
	argv
}

#[cfg(test)]
mod test {
	use std::{ffi::OsString, path::Path};

	use clap::Parser;

	use super::{disambiguate_lone_path, Args};

	fn argv(args: &[&str]) -> Vec<OsString> {
		args.iter().map(OsString::from).collect()
	}

	#[test]
	fn test_single_path() {
		let args = Args::try_parse_from([ "encsniff", "notes.txt" ]).unwrap();

		assert_eq!(args.path, Path::new("notes.txt"));
		assert!(args.config.is_none());
	}

	#[test]
	fn test_wrong_argument_count() {
		assert!(Args::try_parse_from([ "encsniff" ]).is_err());
		assert!(Args::try_parse_from([ "encsniff", "a.txt", "b.txt" ]).is_err());
	}

	#[test]
	fn test_overrides() {
		let args = Args::try_parse_from([ "encsniff", "-c", "custom.toml", "--block-size", "512", "-m", "1000", "data.bin" ]).unwrap();

		assert_eq!(args.config.as_deref(), Some("custom.toml"));
		assert_eq!(args.block_size, Some(512));
		assert_eq!(args.max_bytes, Some(1000));
		assert_eq!(args.path, Path::new("data.bin"));
	}

	#[test]
	fn test_out_of_range_overrides_rejected() {
		assert!(Args::try_parse_from([ "encsniff", "--block-size", "0", "a.txt" ]).is_err());
		assert!(Args::try_parse_from([ "encsniff", "--block-size", "18446744073709551615", "a.txt" ]).is_err());
		assert!(Args::try_parse_from([ "encsniff", "--max-bytes", "0", "a.txt" ]).is_err());
	}

	#[test]
	fn test_dash_path_after_separator() {
		let args = Args::try_parse_from([ "encsniff", "--", "-notes" ]).unwrap();

		assert_eq!(args.path, Path::new("-notes"));
	}

	#[test]
	fn test_lone_dash_path_that_exists() {
		let fixed = disambiguate_lone_path(argv(&[ "encsniff", "-notes" ]), |path| path == Path::new("-notes"));
		assert_eq!(fixed, argv(&[ "encsniff", "--", "-notes" ]));

		let args = Args::try_parse_from(fixed).unwrap();
		assert_eq!(args.path, Path::new("-notes"));
	}

	#[test]
	fn test_dash_arguments_left_alone_when_missing() {
		let original = argv(&[ "encsniff", "--no-such-option-or-file" ]);
		assert_eq!(disambiguate_lone_path(original.clone(), |_| false), original);

		// Only a lone argument is ever treated as the path
		let with_flag = argv(&[ "encsniff", "-v", "x" ]);
		assert_eq!(disambiguate_lone_path(with_flag.clone(), |_| true), with_flag);
	}

	#[cfg(unix)]
	#[test]
	fn test_non_utf8_path() {
		use std::os::unix::ffi::OsStringExt;

		let name = OsString::from_vec(b"caf\xe9.txt".to_vec());
		let args = Args::try_parse_from(vec![OsString::from("encsniff"), name.clone()]).unwrap();

		assert_eq!(args.path.as_os_str(), name.as_os_str());
	}
}
