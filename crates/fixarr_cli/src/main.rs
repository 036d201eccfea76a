/* 📖 # Why is the CLI minimal and hardcoded?

The CLI takes no arguments. It reads one integer N from standard input, builds the
array `[1, 2, ..., N]` and prints every aggregation the engine offers. The only knobs
live in an optional `fixarr.toml` in the current directory (size limit, output format,
traversal parameters, row count), so the same input always produces the same output
in a given directory.

Exit codes:
- 0: Success (report printed)
- 1: Error (bad config, bad input, or an aggregation failed)
*/

mod input;

use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use fixarr_base::{FixarrError, FixarrResult};
use fixarr_base::tracing::init_tracing;
use fixarr_engine::{
    ArrayReport, CONFIG_FILE_NAME, Config, FixedArray, OutputFormat, load_config_or_default,
};
use tracing::info;

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    let current_dir = env::current_dir().unwrap_or_else(|e| {
        eprintln!("Error: Failed to get current directory: {}", e);
        process::exit(1);
    });

    let config = match load_settings(&current_dir) {
        Ok(config) => config,
        Err(e) => {
            eprint!("Error: {:?}", e);
            process::exit(1);
        }
    };

    match run(&config, io::stdin().lock()) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprint!("Error: {:?}", e);
            process::exit(1);
        }
    }
}

/// Load `fixarr.toml` from `dir`, falling back to defaults when it does not exist.
fn load_settings(dir: &Path) -> FixarrResult<Config> {
    load_config_or_default(&dir.join(CONFIG_FILE_NAME)).map_err(|e| {
        Box::new(
            FixarrError::message(format!("Failed to load config from {}", CONFIG_FILE_NAME))
                .caused_by(e),
        )
    })
}

/// Read the array size from `input` and render the report in the configured format.
fn run(config: &Config, input: impl BufRead) -> FixarrResult<String> {
    let size = input::read_size(input, config.max_size)?;
    info!(size, "building array");
    let array = FixedArray::from_fn(size, |i| i as i64 + 1)?;
    let report = ArrayReport::build(&array, config)?;
    match config.format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => Ok(report.render_json()? + "\n"),
    }
}
