//! Command-line runner for the viewport ad density audit.
//!
//! Reads collected page artifacts as JSON and writes the audit product as
//! JSON to stdout.

use ad_density::{Artifacts, Audit as _, DensityConfig, ViewportAdDensity};
use anyhow::{Context as _, Result, anyhow};
use log::info;
use serde_json::{from_str, to_string_pretty};
use std::env;
use std::fs::read_to_string;
use std::io::{Read as _, Write as _, stderr, stdin, stdout};

/// Parsed command-line invocation.
#[derive(Debug, PartialEq)]
struct Invocation {
    /// Print audit metadata instead of running the audit.
    meta: bool,
    /// Policy from `--threshold`, overriding the environment.
    config: Option<DensityConfig>,
    /// Artifacts file; `None` reads stdin.
    input: Option<String>,
}

/// Print usage information to stderr.
fn print_usage() {
    drop(writeln!(
        stderr(),
        "Usage:\n  ad-density [--threshold <RATIO>] [ARTIFACTS.json | -]\n  ad-density --meta"
    ));
}

/// Parse arguments following the program name.
///
/// # Errors
/// Returns an error for unknown flags, a missing or invalid threshold, or
/// more than one input path.
fn parse_args(args: &[String]) -> Result<Invocation> {
    let mut invocation = Invocation {
        meta: false,
        config: None,
        input: None,
    };
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--meta" => invocation.meta = true,
            "--threshold" => {
                let raw = args
                    .get(index + 1)
                    .ok_or_else(|| anyhow!("--threshold requires a value"))?;
                let config = raw
                    .parse::<f64>()
                    .ok()
                    .and_then(DensityConfig::with_threshold)
                    .ok_or_else(|| anyhow!("threshold '{raw}' is not a ratio in [0, 1]"))?;
                invocation.config = Some(config);
                index += 1;
            }
            "-" => invocation.input = None,
            flag if flag.starts_with("--") => return Err(anyhow!("unknown flag '{flag}'")),
            path => {
                if invocation.input.is_some() {
                    return Err(anyhow!("only one artifacts file may be given"));
                }
                invocation.input = Some(path.to_owned());
            }
        }
        index += 1;
    }
    Ok(invocation)
}

/// Read the artifacts document from a file or stdin.
///
/// # Errors
/// Returns an error if the input cannot be read or is not valid artifacts JSON.
fn load_artifacts(input: Option<&str>) -> Result<Artifacts> {
    let text = match input {
        Some(path) => {
            read_to_string(path).with_context(|| format!("failed to read artifacts from {path}"))?
        }
        None => {
            let mut buf = String::new();
            stdin()
                .read_to_string(&mut buf)
                .context("failed to read artifacts from stdin")?;
            buf
        }
    };
    from_str(&text).context("artifacts are not valid JSON")
}

/// Main entry point for the ad-density CLI tool.
///
/// # Errors
/// Returns an error if arguments, input, or the viewport are invalid.
fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = parse_args(&args).inspect_err(|_| print_usage())?;

    let config = invocation.config.unwrap_or_else(DensityConfig::from_env);
    let audit = ViewportAdDensity::new(config);

    let json = if invocation.meta {
        to_string_pretty(audit.meta())?
    } else {
        let artifacts = load_artifacts(invocation.input.as_deref())?;
        info!(
            "auditing {} ad slots in a {}x{} viewport",
            artifacts.rendered_ad_slots.len(),
            artifacts.viewport_dimensions.inner_width,
            artifacts.viewport_dimensions.inner_height
        );
        let product = audit
            .audit(&artifacts)
            .context("viewport ad density audit failed")?;
        to_string_pretty(&product)?
    };
    writeln!(stdout(), "{json}")?;
    Ok(())
}
