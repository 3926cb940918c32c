use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::process::Stdio;

use crate::SnipsyncError;
use crate::SnipsyncResult;
use crate::config::FormatterConfig;
use crate::scope::extract;

/// The recognized source file kinds and their fenced code block labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
	/// C++ headers and sources: `.cpp`, `.hpp`, `.h`.
	Cpp,
	/// The reserved build file name `CMakeLists.txt`.
	CMake,
}

impl SourceKind {
	/// Determine the kind from a path. The kind is checked before the file is
	/// read so an unsupported reference fails fast.
	pub fn for_path(path: &Path) -> SnipsyncResult<Self> {
		if path.file_name().is_some_and(|name| name == "CMakeLists.txt") {
			return Ok(Self::CMake);
		}

		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(str::to_lowercase);

		match extension.as_deref() {
			Some("cpp" | "hpp" | "h") => Ok(Self::Cpp),
			_ => Err(SnipsyncError::UnsupportedFileType(
				path.display().to_string(),
			)),
		}
	}

	/// The label written after the opening fence.
	pub fn label(self) -> &'static str {
		match self {
			Self::Cpp => "c++",
			Self::CMake => "CMake",
		}
	}

	/// Only C++ content runs through the external formatter.
	fn uses_formatter(self) -> bool {
		matches!(self, Self::Cpp)
	}
}

/// Pipe `input` through the external formatter and return its stdout.
///
/// Stdin is fed from a separate thread so a formatter that emits output
/// while still consuming input cannot deadlock the pipes. The child is
/// reaped on every exit path by `wait_with_output`.
pub fn run_formatter(command: &str, input: &str) -> SnipsyncResult<String> {
	let failure = |reason: String| SnipsyncError::FormatterFailure {
		command: command.to_string(),
		reason,
	};

	tracing::debug!(command, bytes = input.len(), "invoking formatter");

	let mut child = Command::new(command)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.map_err(|e| failure(e.to_string()))?;

	let mut stdin = child
		.stdin
		.take()
		.ok_or_else(|| failure("failed to open stdin".to_string()))?;
	let bytes = input.as_bytes().to_vec();
	let writer = std::thread::spawn(move || stdin.write_all(&bytes));

	let output = child
		.wait_with_output()
		.map_err(|e| failure(e.to_string()))?;
	let write_result = writer
		.join()
		.map_err(|_| failure("stdin writer thread panicked".to_string()))?;

	if !output.status.success() {
		let stderr = String::from_utf8_lossy(&output.stderr);
		return Err(failure(format!(
			"exited with {}: {}",
			output.status,
			stderr.trim()
		)));
	}

	// A broken pipe only matters when the formatter itself succeeded.
	write_result.map_err(|e| failure(format!("failed to write stdin: {e}")))?;

	String::from_utf8(output.stdout).map_err(|_| failure("produced invalid UTF-8".to_string()))
}

/// Render a fenced snippet for the given source file and optional scope.
///
/// The result is a label line linking to the source, an opening fence tagged
/// with the source kind, the (possibly reformatted) content lines, and a
/// closing fence.
pub fn render_snippet(
	path: &Path,
	scope: Option<&str>,
	formatter: &FormatterConfig,
) -> SnipsyncResult<Vec<String>> {
	let kind = SourceKind::for_path(path)?;
	let mut lines = extract(path, scope)?;

	if kind.uses_formatter() {
		let joined: String = lines.concat();
		let formatted = run_formatter(&formatter.command, &joined)?;
		lines = formatted
			.split('\n')
			.map(|line| format!("{line}\n"))
			.collect();
		// Splitting leaves an empty fragment after a trailing newline.
		if lines.last().is_some_and(|line| line.trim().is_empty()) {
			lines.pop();
		}
	}

	let display = path.display();
	let mut result = Vec::with_capacity(lines.len() + 3);
	result.push(format!("Example code included from [{display}]({display}):\n"));
	result.push(format!("```{}\n", kind.label()));
	result.extend(lines);
	result.push("```\n".to_string());

	Ok(result)
}
