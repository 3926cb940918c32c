use crate::config::FormatOptions;

/// Re-flow processed document text to a canonical shape: paragraph lines are
/// wrapped at `options.wrap` columns and ordered lists are renumbered
/// sequentially when `options.number` is set.
///
/// Structure is never touched: fenced code blocks, headings, tables, block
/// quotes, unordered lists, indented code, and HTML comment lines (which
/// includes the region markers) pass through verbatim. The function is a
/// deterministic pure mapping from text to text and is idempotent.
pub fn format_document(text: &str, options: &FormatOptions) -> String {
	if !options.enabled {
		return text.to_string();
	}

	let mut out = String::with_capacity(text.len());
	let mut paragraph: Vec<String> = Vec::new();
	let mut in_fence = false;
	let mut list_counter: Option<u64> = None;

	for line in text.lines() {
		let trimmed = line.trim_start();

		if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
			flush_paragraph(&mut out, &mut paragraph, options.wrap);
			list_counter = None;
			in_fence = !in_fence;
			out.push_str(line);
			out.push('\n');
			continue;
		}

		if in_fence {
			out.push_str(line);
			out.push('\n');
			continue;
		}

		if line.trim().is_empty() {
			// Blank lines separate paragraphs but keep a loose list alive.
			flush_paragraph(&mut out, &mut paragraph, options.wrap);
			out.push('\n');
			continue;
		}

		if let Some(rest) = ordered_item(trimmed) {
			flush_paragraph(&mut out, &mut paragraph, options.wrap);
			let number = list_counter.map_or(1, |n| n + 1);
			list_counter = Some(number);

			if options.number {
				let indent = &line[..line.len() - trimmed.len()];
				out.push_str(indent);
				out.push_str(&number.to_string());
				out.push_str(". ");
				out.push_str(rest);
			} else {
				out.push_str(line);
			}
			out.push('\n');
			continue;
		}

		if is_passthrough(line, trimmed) {
			flush_paragraph(&mut out, &mut paragraph, options.wrap);
			list_counter = None;
			out.push_str(line);
			out.push('\n');
			continue;
		}

		// Plain paragraph text: accumulate words for re-wrapping.
		list_counter = None;
		paragraph.extend(line.split_whitespace().map(ToString::to_string));
	}

	flush_paragraph(&mut out, &mut paragraph, options.wrap);
	out
}

/// Return the item text after an ordered list prefix (`12. item`), or `None`
/// when the line is not an ordered list item.
fn ordered_item(trimmed: &str) -> Option<&str> {
	let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
	if digits == 0 {
		return None;
	}

	trimmed[digits..].strip_prefix(". ")
}

/// Lines that carry markdown structure and must never be re-wrapped.
fn is_passthrough(line: &str, trimmed: &str) -> bool {
	trimmed.starts_with('#')
		|| trimmed.starts_with("<!--")
		|| trimmed.starts_with('|')
		|| trimmed.starts_with('>')
		|| trimmed.starts_with("- ")
		|| trimmed.starts_with("* ")
		|| trimmed.starts_with("+ ")
		|| trimmed.starts_with("---")
		|| trimmed.starts_with("===")
		|| line.starts_with("    ")
		|| line.starts_with('\t')
}

/// Emit the accumulated paragraph words greedily wrapped at `wrap` columns.
/// A word longer than the width gets a line of its own; words are never
/// broken.
fn flush_paragraph(out: &mut String, words: &mut Vec<String>, wrap: usize) {
	if words.is_empty() {
		return;
	}

	if wrap == 0 {
		out.push_str(&words.join(" "));
		out.push('\n');
		words.clear();
		return;
	}

	let mut line = String::new();
	for word in words.iter() {
		if line.is_empty() {
			line.push_str(word);
		} else if line.len() + 1 + word.len() <= wrap {
			line.push(' ');
			line.push_str(word);
		} else {
			out.push_str(&line);
			out.push('\n');
			line.clone_from(word);
		}
	}

	if !line.is_empty() {
		out.push_str(&line);
		out.push('\n');
	}

	words.clear();
}
