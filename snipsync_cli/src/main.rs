use std::path::Path;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use snipsync_cli::Mode;
use snipsync_cli::OutputFormat;
use snipsync_cli::SnipsyncCli;
use snipsync_core::AnyResult;
use snipsync_core::DocumentOutcome;
use snipsync_core::Registry;
use snipsync_core::SnipsyncConfig;
use snipsync_core::process_file;
use snipsync_core::write_atomic;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = SnipsyncCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	match run(&args) {
		Ok(stale) => {
			if stale {
				process::exit(1);
			}
		}
		Err(e) => {
			// Try to render through miette for rich diagnostics with help
			// text and error codes.
			match e.downcast::<snipsync_core::SnipsyncError>() {
				Ok(err) => {
					let report: miette::Report = (*err).into();
					eprintln!("{report:?}");
				}
				Err(e) => {
					eprintln!("{} {e}", colored!("error:", red));
				}
			}
			process::exit(1);
		}
	}
}

/// Process every file strictly in order. Returns `Ok(true)` when a verify
/// run found a stale document; the run stops there and later files are never
/// inspected.
fn run(args: &SnipsyncCli) -> AnyResult<bool> {
	let root = std::env::current_dir()?;
	let config = SnipsyncConfig::resolve(args.config.as_ref(), &root)?;
	let registry = Registry::default();

	if args.verbose {
		eprintln!(
			"formatter: {}, wrap: {}, number: {}",
			config.formatter.command, config.format.wrap, config.format.number
		);
	}

	for file in &args.files {
		let outcome = process_file(file, &registry, &config)?;
		let display = file.display();

		if !outcome.changed {
			if matches!(args.format, OutputFormat::Text) {
				println!("{display} is up-to-date");
			}
			continue;
		}

		match args.mode {
			Mode::Update => {
				write_atomic(file, &outcome.result)?;
				println!("{display} {}", colored!("updated", green));
			}
			Mode::Verify => {
				report_stale(args, file, &outcome);
				return Ok(true);
			}
		}
	}

	if matches!(args.format, OutputFormat::Json) {
		println!("{}", serde_json::json!({ "ok": true, "stale": [] }));
	}

	Ok(false)
}

/// Report a stale document in the requested output format.
fn report_stale(args: &SnipsyncCli, file: &Path, outcome: &DocumentOutcome) {
	let display = file.display();

	match args.format {
		OutputFormat::Text => {
			eprintln!(
				"{display} {}, run snipsync in update mode",
				colored!("requires update", yellow)
			);
			if args.diff {
				print_diff(&outcome.original, &outcome.result);
			}
		}
		OutputFormat::Json => {
			let output = serde_json::json!({
				"ok": false,
				"stale": [display.to_string()],
			});
			println!("{output}");
		}
		OutputFormat::Github => {
			println!("::error file={display}::document requires update, run snipsync in update mode");
		}
	}
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
