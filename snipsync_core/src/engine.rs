use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::CallExpr;
use crate::Marker;
use crate::SnipsyncError;
use crate::SnipsyncResult;
use crate::config::FormatterConfig;
use crate::config::SnipsyncConfig;
use crate::docfmt::format_document;
use crate::markers::classify;
use crate::parser::parse_expression;
use crate::scope::split_lines;
use crate::snippet::render_snippet;

/// The signature of a registered rendering function: string arguments from
/// the marker expression in, rendered lines out.
pub type RenderFn = fn(&[String], &FormatterConfig) -> SnipsyncResult<Vec<String>>;

/// An explicit table mapping expression function names to implementations.
///
/// Marker expressions are dispatched through this registry instead of being
/// evaluated as code, so documents can only call what the registry exposes.
/// The default registry contains exactly `render`.
pub struct Registry {
	functions: HashMap<&'static str, RenderFn>,
}

impl Default for Registry {
	fn default() -> Self {
		let mut functions: HashMap<&'static str, RenderFn> = HashMap::new();
		functions.insert("render", render);
		Self { functions }
	}
}

impl Registry {
	/// Register an additional function, replacing any existing entry with the
	/// same name.
	pub fn with_function(mut self, name: &'static str, function: RenderFn) -> Self {
		self.functions.insert(name, function);
		self
	}

	/// Dispatch a parsed call expression to its registered implementation.
	pub fn dispatch(
		&self,
		call: &CallExpr,
		formatter: &FormatterConfig,
	) -> SnipsyncResult<Vec<String>> {
		let function = self
			.functions
			.get(call.name.as_str())
			.ok_or_else(|| SnipsyncError::UnknownFunction(call.name.clone()))?;

		function(&call.args, formatter)
	}
}

/// The default `render(path)` / `render(path, scope)` function.
fn render(args: &[String], formatter: &FormatterConfig) -> SnipsyncResult<Vec<String>> {
	let [path, rest @ ..] = args else {
		return Err(SnipsyncError::MalformedExpression {
			expression: "render".to_string(),
			reason: format!("expected 1 or 2 arguments, got {}", args.len()),
		});
	};
	let scope = match rest {
		[] => None,
		[scope] => Some(scope.as_str()),
		_ => {
			return Err(SnipsyncError::MalformedExpression {
				expression: "render".to_string(),
				reason: format!("expected 1 or 2 arguments, got {}", args.len()),
			});
		}
	};

	render_snippet(Path::new(path), scope, formatter)
}

/// An open region on the processing stack.
struct Frame {
	/// The expression text from the begin marker.
	expression: String,
	/// 1-indexed line number of the begin marker.
	line: usize,
	/// The stale body collected so far. It exists only to be replaced by the
	/// freshly rendered snippet when the region closes.
	body: Vec<String>,
}

/// Scan document lines for region markers and splice freshly rendered
/// snippets over each region's stale body.
///
/// Marker lines pass through verbatim. Regions may nest; an end marker
/// always closes the most recently opened region. Output line order matches
/// input order apart from the body replacement.
pub fn process_lines(
	lines: &[String],
	registry: &Registry,
	formatter: &FormatterConfig,
) -> SnipsyncResult<Vec<String>> {
	let mut stack: Vec<Frame> = Vec::new();
	let mut result = Vec::with_capacity(lines.len());

	for (index, line) in lines.iter().enumerate() {
		match classify(line) {
			Some(Marker::Begin { expression }) => {
				result.push(line.clone());
				stack.push(Frame {
					expression,
					line: index + 1,
					body: Vec::new(),
				});
			}
			Some(Marker::End) => {
				let Some(frame) = stack.pop() else {
					return Err(SnipsyncError::StackUnderflow { line: index + 1 });
				};

				tracing::debug!(
					expression = %frame.expression,
					stale_lines = frame.body.len(),
					"rendering region"
				);

				let call = parse_expression(&frame.expression)?;
				result.extend(registry.dispatch(&call, formatter)?);
				result.push(line.clone());
			}
			None => {
				if let Some(frame) = stack.last_mut() {
					frame.body.push(line.clone());
				} else {
					result.push(line.clone());
				}
			}
		}
	}

	if let Some(frame) = stack.pop() {
		return Err(SnipsyncError::UnclosedRegion { line: frame.line });
	}

	Ok(result)
}

/// Run the full pipeline over document text: region processing followed by
/// document formatting.
pub fn sync_document(
	content: &str,
	registry: &Registry,
	config: &SnipsyncConfig,
) -> SnipsyncResult<String> {
	let lines = split_lines(content);
	let processed = process_lines(&lines, registry, &config.formatter)?;

	Ok(format_document(&processed.concat(), &config.format))
}

/// The result of processing one documentation file.
#[derive(Debug)]
pub struct DocumentOutcome {
	/// The processed file.
	pub path: PathBuf,
	/// Whether the freshly computed content differs from what is on disk.
	pub changed: bool,
	/// The file content as read.
	pub original: String,
	/// The freshly computed content.
	pub result: String,
}

/// Read a documentation file and compute its synchronized content. Nothing
/// is written; the caller decides between verifying and updating.
pub fn process_file(
	path: &Path,
	registry: &Registry,
	config: &SnipsyncConfig,
) -> SnipsyncResult<DocumentOutcome> {
	let original = std::fs::read_to_string(path).map_err(|error| {
		if error.kind() == std::io::ErrorKind::NotFound {
			SnipsyncError::FileNotFound {
				path: path.display().to_string(),
			}
		} else {
			SnipsyncError::Io(error)
		}
	})?;

	let result = sync_document(&original, registry, config)?;
	let changed = result != original;

	Ok(DocumentOutcome {
		path: path.to_path_buf(),
		changed,
		original,
		result,
	})
}

/// Overwrite `path` by writing to a temporary file in the same directory and
/// renaming it into place, so a crash mid-write cannot corrupt the document.
pub fn write_atomic(path: &Path, content: &str) -> SnipsyncResult<()> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut file = tempfile::NamedTempFile::new_in(dir)?;
	file.write_all(content.as_bytes())?;

	// the temp file is created with restrictive permissions; carry the
	// document's existing mode across the rename
	if let Ok(metadata) = std::fs::metadata(path) {
		file.as_file().set_permissions(metadata.permissions())?;
	}

	file.persist(path).map_err(|e| SnipsyncError::Io(e.error))?;

	Ok(())
}
