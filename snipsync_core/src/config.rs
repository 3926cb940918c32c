use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::SnipsyncError;
use crate::SnipsyncResult;

/// Default external formatter command for C++ sources.
pub const DEFAULT_FORMATTER_COMMAND: &str = "clang-format";

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"snipsync.toml",
	".snipsync.toml",
	".config/snipsync.toml",
];

/// Configuration loaded from a `snipsync.toml` file.
///
/// ```toml
/// [formatter]
/// command = "clang-format"
///
/// [format]
/// wrap = 80
/// number = true
/// enabled = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnipsyncConfig {
	/// External source formatter configuration.
	#[serde(default)]
	pub formatter: FormatterConfig,
	/// Document formatting options applied after region processing.
	#[serde(default)]
	pub format: FormatOptions,
}

/// Configuration for the external source-code formatter that snippet content
/// is piped through before fencing.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatterConfig {
	/// The formatter binary to invoke. The snippet content is written to its
	/// standard input and its standard output becomes the snippet content.
	#[serde(default = "default_formatter_command")]
	pub command: String,
}

impl Default for FormatterConfig {
	fn default() -> Self {
		Self {
			command: default_formatter_command(),
		}
	}
}

/// Options controlling how the processed document text is re-flowed.
///
/// These are threaded explicitly into the document formatter rather than
/// living in process-wide state.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatOptions {
	/// Maximum line width for paragraph text. `0` disables wrapping.
	#[serde(default = "default_wrap")]
	pub wrap: usize,
	/// Renumber ordered lists sequentially (`1.`, `2.`, `3.`, ...).
	#[serde(default = "default_true")]
	pub number: bool,
	/// When `false`, the document formatter is a no-op and region processing
	/// output is written verbatim.
	#[serde(default = "default_true")]
	pub enabled: bool,
}

impl Default for FormatOptions {
	fn default() -> Self {
		Self {
			wrap: default_wrap(),
			number: true,
			enabled: true,
		}
	}
}

impl SnipsyncConfig {
	/// Load configuration by checking the candidate file names under `root` in
	/// discovery order. Returns `Ok(None)` when no config file exists.
	pub fn load(root: &Path) -> SnipsyncResult<Option<Self>> {
		for candidate in CONFIG_FILE_CANDIDATES {
			let path = root.join(candidate);
			if path.is_file() {
				return Self::load_file(&path).map(Some);
			}
		}

		Ok(None)
	}

	/// Load configuration from an explicit file path.
	pub fn load_file(path: &Path) -> SnipsyncResult<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| {
			if error.kind() == std::io::ErrorKind::NotFound {
				SnipsyncError::FileNotFound {
					path: path.display().to_string(),
				}
			} else {
				SnipsyncError::Io(error)
			}
		})?;
		let config: Self =
			toml::from_str(&content).map_err(|e| SnipsyncError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Resolve the effective configuration for a run: an explicit `--config`
	/// path wins, otherwise candidates are discovered under `root`, otherwise
	/// defaults apply.
	pub fn resolve(explicit: Option<&PathBuf>, root: &Path) -> SnipsyncResult<Self> {
		match explicit {
			Some(path) => Self::load_file(path),
			None => Ok(Self::load(root)?.unwrap_or_default()),
		}
	}
}

fn default_formatter_command() -> String {
	DEFAULT_FORMATTER_COMMAND.to_string()
}

fn default_wrap() -> usize {
	80
}

fn default_true() -> bool {
	true
}
