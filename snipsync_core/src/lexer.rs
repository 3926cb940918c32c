use logos::Logos;
use snailquote::unescape;

use crate::SnipsyncError;
use crate::SnipsyncResult;

/// Raw tokens produced by logos for flat tokenization of marker expressions.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[token("(")]
	ParenOpen,
	#[token(")")]
	ParenClose,
	#[token(",")]
	Comma,
	#[regex(r"[ \t\r\n]+")]
	Whitespace,
	#[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
	Ident,
	#[regex(r#""([^"\\]|\\.)*""#)]
	DoubleQuotedString,
	#[regex(r"'([^'\\]|\\.)*'")]
	SingleQuotedString,
}

/// Tokens of the constrained call grammar used inside begin markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// `(`
	ParenOpen,
	/// `)`
	ParenClose,
	/// `,`
	Comma,
	/// A function name, e.g. `render`.
	Ident(String),
	/// A string literal argument with quotes stripped and escapes resolved.
	String(String),
}

/// Tokenize a marker expression. Whitespace is discarded; anything the
/// grammar does not recognize is a malformed expression.
pub(crate) fn tokenize(expression: &str) -> SnipsyncResult<Vec<Token>> {
	let mut tokens = Vec::new();

	for (result, span) in RawToken::lexer(expression).spanned() {
		let slice = &expression[span];
		let raw = result.map_err(|()| SnipsyncError::MalformedExpression {
			expression: expression.to_string(),
			reason: format!("unexpected character sequence `{slice}`"),
		})?;

		match raw {
			RawToken::ParenOpen => tokens.push(Token::ParenOpen),
			RawToken::ParenClose => tokens.push(Token::ParenClose),
			RawToken::Comma => tokens.push(Token::Comma),
			RawToken::Whitespace => {}
			RawToken::Ident => tokens.push(Token::Ident(slice.to_string())),
			RawToken::DoubleQuotedString | RawToken::SingleQuotedString => {
				tokens.push(Token::String(process_string(expression, slice)?));
			}
		}
	}

	Ok(tokens)
}

/// Strip the surrounding quotes from a string literal and resolve escape
/// sequences when present.
fn process_string(expression: &str, slice: &str) -> SnipsyncResult<String> {
	let inner = &slice[1..slice.len() - 1];

	if !inner.contains('\\') {
		return Ok(inner.to_string());
	}

	unescape(inner).map_err(|e| SnipsyncError::MalformedExpression {
		expression: expression.to_string(),
		reason: format!("invalid escape in string literal: {e}"),
	})
}
