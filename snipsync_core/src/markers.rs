/// A region marker found in a documentation line.
///
/// Markers are HTML comments: `<!-- { render("main.cpp") -->` opens a region
/// and `<!-- } -->` closes the innermost open region. The marker lines
/// themselves always survive processing verbatim; only the lines between
/// them are replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
	/// A begin marker carrying the trimmed expression text found between the
	/// opening `{` and the closing `-->`.
	Begin { expression: String },
	/// An end marker: a comment containing a bare `}`.
	End,
}

/// Classify a documentation line as a begin marker, an end marker, or
/// ordinary content (`None`).
pub fn classify(line: &str) -> Option<Marker> {
	let start = line.find("<!--")?;
	let rest = line[start + 4..].trim_start();

	if let Some(rest) = rest.strip_prefix('{') {
		let end = rest.find("-->")?;
		return Some(Marker::Begin {
			expression: rest[..end].trim().to_string(),
		});
	}

	if let Some(rest) = rest.strip_prefix('}') {
		if rest.trim_start().starts_with("-->") {
			return Some(Marker::End);
		}
	}

	None
}
