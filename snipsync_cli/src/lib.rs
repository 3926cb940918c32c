use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Keep code snippets in documentation synchronized with their source files.",
	long_about = "snipsync replaces marked regions in documentation files with freshly rendered, \
	              formatted excerpts of the referenced source files.\n\nA region looks \
	              like:\n  <!-- { render(\"example.cpp\") -->\n  ...replaced content...\n  <!-- } \
	              -->\n\nQuick start:\n  snipsync readme.md                 Verify the document is \
	              up to date\n  snipsync readme.md --mode update   Rewrite stale regions in place"
)]
pub struct SnipsyncCli {
	/// Documentation file(s) to process, in order.
	#[arg(required = true)]
	pub files: Vec<PathBuf>,

	/// `update` the files in place, or `verify` that they are up to date.
	#[arg(long, value_enum, default_value_t = Mode::Verify)]
	pub mode: Mode,

	/// Show a unified diff for each stale document in verify mode.
	#[arg(long, default_value_t = false)]
	pub diff: bool,

	/// Output format for verify results.
	#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Path to an explicit config file. Defaults to discovering
	/// `snipsync.toml` in the working directory.
	#[arg(long)]
	pub config: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
	/// Report staleness without modifying any file. The run stops at the
	/// first stale document with a non-zero exit code.
	Verify,
	/// Rewrite stale documents in place.
	Update,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
	/// GitHub Actions annotation format. Emits `::error` annotations that
	/// appear inline on pull request diffs.
	Github,
}
