use crate::SnipsyncError;
use crate::SnipsyncResult;
use crate::lexer::Token;
use crate::lexer::tokenize;

/// A parsed marker expression: a function name applied to string literal
/// arguments, e.g. `render("main.cpp", "usage")`.
///
/// Begin-marker expressions are never executed as code. They are parsed
/// against this constrained call grammar and dispatched through an explicit
/// [`Registry`](crate::Registry), so a document author can only invoke the
/// functions the registry exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
	/// The function name before the parentheses.
	pub name: String,
	/// The string literal arguments, in order.
	pub args: Vec<String>,
}

/// Parse a begin-marker expression into a [`CallExpr`].
///
/// Grammar: `ident '(' [ string { ',' string } ] ')'`. String literals may be
/// single or double quoted.
pub fn parse_expression(expression: &str) -> SnipsyncResult<CallExpr> {
	let tokens = tokenize(expression)?;
	let malformed = |reason: &str| SnipsyncError::MalformedExpression {
		expression: expression.to_string(),
		reason: reason.to_string(),
	};

	let mut cursor = tokens.iter();

	let name = match cursor.next() {
		Some(Token::Ident(name)) => name.clone(),
		_ => return Err(malformed("expected a function name")),
	};

	if cursor.next() != Some(&Token::ParenOpen) {
		return Err(malformed("expected `(` after the function name"));
	}

	let mut args = Vec::new();
	loop {
		match cursor.next() {
			Some(Token::ParenClose) if args.is_empty() => break,
			Some(Token::String(value)) => {
				args.push(value.clone());
				match cursor.next() {
					Some(Token::Comma) => {}
					Some(Token::ParenClose) => break,
					_ => return Err(malformed("expected `,` or `)` after an argument")),
				}
			}
			_ => return Err(malformed("expected a string literal argument")),
		}
	}

	if cursor.next().is_some() {
		return Err(malformed("unexpected trailing content after `)`"));
	}

	Ok(CallExpr { name, args })
}
