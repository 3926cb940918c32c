use std::path::Path;

use crate::SnipsyncError;
use crate::SnipsyncResult;

/// Split text into lines that keep their trailing `\n`. The final line may
/// lack one, mirroring the input.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
	text.split_inclusive('\n').map(ToString::to_string).collect()
}

/// Extract the lines of `path` belonging to the named scope, or every line
/// when `scope` is `None`.
///
/// A scope is delimited by two occurrences of a line whose trimmed content
/// starts with the literal `scope` string. The toggle lines themselves are
/// excluded from the output. A scope that is opened but never closed
/// truncates silently at end of file; a scope marker that never appears
/// yields an empty result. Neither case is an error.
pub fn extract(path: &Path, scope: Option<&str>) -> SnipsyncResult<Vec<String>> {
	let content = std::fs::read_to_string(path).map_err(|error| {
		if error.kind() == std::io::ErrorKind::NotFound {
			SnipsyncError::FileNotFound {
				path: path.display().to_string(),
			}
		} else {
			SnipsyncError::Io(error)
		}
	})?;
	let lines = split_lines(&content);

	let Some(scope) = scope else {
		return Ok(lines);
	};

	let mut result = Vec::new();
	let mut in_scope = false;
	let mut toggles = 0usize;

	for line in lines {
		if line.trim().starts_with(scope) {
			in_scope = !in_scope;
			toggles += 1;
		} else if in_scope {
			result.push(line);
		}
	}

	if toggles % 2 != 0 {
		tracing::warn!(
			path = %path.display(),
			scope,
			"scope opened but never closed; extraction truncated at end of file"
		);
	}

	Ok(result)
}
