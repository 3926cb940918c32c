use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SnipsyncError {
	#[error(transparent)]
	#[diagnostic(code(snipsync::io_error))]
	Io(#[from] std::io::Error),

	#[error("file not found: `{path}`")]
	#[diagnostic(
		code(snipsync::file_not_found),
		help("paths in render expressions resolve relative to the working directory")
	)]
	FileNotFound { path: String },

	#[error("unsupported file type: `{0}`")]
	#[diagnostic(
		code(snipsync::unsupported_file_type),
		help("supported source files: `.cpp`/`.hpp`/`.h` and `CMakeLists.txt`")
	)]
	UnsupportedFileType(String),

	#[error("formatter `{command}` failed: {reason}")]
	#[diagnostic(
		code(snipsync::formatter_failure),
		help(
			"ensure the formatter binary is installed and on PATH, or override `[formatter] \
			 command` in snipsync.toml"
		)
	)]
	FormatterFailure { command: String, reason: String },

	#[error("end marker without a matching begin marker at line {line}")]
	#[diagnostic(
		code(snipsync::stack_underflow),
		help("remove the stray `<!-- }} -->` or add a `<!-- {{ ... -->` marker above it")
	)]
	StackUnderflow { line: usize },

	#[error("region opened at line {line} is never closed")]
	#[diagnostic(
		code(snipsync::unclosed_region),
		help("add `<!-- }} -->` to close this region")
	)]
	UnclosedRegion { line: usize },

	#[error("malformed expression `{expression}`: {reason}")]
	#[diagnostic(
		code(snipsync::malformed_expression),
		help("expressions take the form `render(\"path\")` or `render(\"path\", \"scope\")`")
	)]
	MalformedExpression { expression: String, reason: String },

	#[error("unknown function: `{0}`")]
	#[diagnostic(code(snipsync::unknown_function), help("available functions: render"))]
	UnknownFunction(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(snipsync::config_parse),
		help("check that snipsync.toml is valid TOML with [formatter] and/or [format] sections")
	)]
	ConfigParse(String),
}

pub type SnipsyncResult<T> = Result<T, SnipsyncError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
