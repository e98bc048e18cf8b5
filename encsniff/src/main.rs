mod args;
mod report;

use std::{fs, io::Write, path::Path, process::ExitCode, time::Instant};

use args::Args;
use libencsniff::{Classifier, ClassifierConfig};
use log::{debug, error, warn};

const DEFAULT_CONFIG_PATH: &str = "encsniff.toml";

fn main() -> ExitCode {
	let args = Args::parse_args();

	env_logger::Builder::new()
		.filter_level(args.verbose.log_level_filter())
		.format(|f, record| {
			let level_style = f.default_level_style(record.level());
			writeln!(f, "[{} {}/{}{}{}]: {}", f.timestamp(), record.target(), level_style.render(), record.level(), level_style.render_reset(), record.args())
		})
		.init();

	debug!("Args: {:?}", args);

	let config = match load_config(&args) {
		Ok(config) => config,
		Err(msg) => {
			error!("{}", msg);
			return ExitCode::FAILURE;
		}
	};

	debug!("Config: {:?}", config);

	let classifier = match Classifier::new(config) {
		Ok(classifier) => classifier,
		Err(e) => {
			error!("{}", e);
			return ExitCode::FAILURE;
		}
	};

	let start = Instant::now();

	// Failing to open or read the file is still a successful run, it just can't be classified
	match classifier.classify_path(&args.path) {
		Ok(category) => println!("{}", report::category_line(&args.path, category)),
		Err(e) => println!("{}", report::cannot_determine_line(&args.path, &e))
	}

	debug!("Finished with \"{}\" in {}", args.path.display(), humantime::format_duration(start.elapsed()));

	ExitCode::SUCCESS
}

/// Reads the config file named on the command line, or the default config file if it exists, or falls back to the default
/// config. Problems with an explicitly named config file are fatal, problems with the default one only produce a warning.
/// Command line overrides are applied on top
fn load_config(args: &Args) -> Result<ClassifierConfig, String> {
	let mut config = match &args.config {
		Some(path) => read_config(path)?,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => match read_config(DEFAULT_CONFIG_PATH) {
			Ok(config) => config,
			Err(msg) => {
				warn!("{} - Using the default config", msg);
				ClassifierConfig::default()
			}
		},
		None => ClassifierConfig::default()
	};

	if let Some(block_size) = args.block_size {
		config.block_size = block_size;
	}
	if let Some(max_bytes) = args.max_bytes {
		config.max_scan_bytes = Some(max_bytes);
	}

	Ok(config)
}

fn read_config(path: &str) -> Result<ClassifierConfig, String> {
	let config_string = fs::read_to_string(path).map_err(|e| format!("Could not open config file \"{}\": {}", path, e))?;
	let config: ClassifierConfig = toml::from_str(&config_string).map_err(|e| format!("Error processing config file \"{}\": {}", path, e))?;
	config.validate().map_err(|e| format!("Invalid config file \"{}\": {}", path, e))?;

	Ok(config)
}
