//! # Chord parser
//!
//! Parses plain-text chord definitions such as `"ctrl-alt-shift-q"` or
//! `"f12"` into a [`Chord`].
//!
//! ## Supported syntax
//!
//! ```text
//! chord     = modifiers* key
//! modifiers = modifier "-"
//! modifier  = "ctrl" | "alt" | "shift"
//! key       = fn-key | named-key | char
//! fn-key    = "f" digit digit?
//! named-key = "space" | "enter" | "escape" | ...
//! char      = any single character
//! ```

use crate::chord::{Chord, Key, Modifiers, NAMED_KEYS};

/// Represents an error that occurred while parsing a chord.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParseError {
	/// Human-readable description of the parse error.
	pub message: String,
	/// Byte offset in the input where the error occurred.
	pub position: usize,
}

impl std::fmt::Display for ParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "chord parse error at position {}: {}", self.position, self.message)
	}
}

impl std::error::Error for ParseError {}

/// Maintains the parser's state.
struct Parser<'a> {
	/// Remaining unparsed input.
	input: &'a str,
	/// Current byte position in the original input.
	position: usize,
}

impl<'a> Parser<'a> {
	fn new(input: &'a str) -> Self {
		Self { input, position: 0 }
	}

	/// Peeks at the next character without consuming it.
	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	/// Consumes and returns the next character, advancing the parser.
	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.position += ch.len_utf8();
		self.input = &self.input[ch.len_utf8()..];
		Some(ch)
	}

	/// Returns `true` if the parser has consumed all input.
	fn is_end(&self) -> bool {
		self.input.is_empty()
	}

	/// Consumes and returns characters that satisfy a predicate.
	fn take_while<F>(&mut self, predicate: F) -> String
	where
		F: Fn(char) -> bool,
	{
		let mut result = String::new();
		while let Some(ch) = self.peek() {
			if !predicate(ch) {
				break;
			}
			result.push(ch);
			self.next();
		}
		result
	}

	/// Attempts a parse, restoring the parser state on `None`.
	fn try_parse<T, F>(&mut self, f: F) -> Option<T>
	where
		F: FnOnce(&mut Parser<'a>) -> Option<T>,
	{
		let snapshot = (self.input, self.position);
		match f(self) {
			Some(val) => Some(val),
			None => {
				self.input = snapshot.0;
				self.position = snapshot.1;
				None
			}
		}
	}

	fn error(&self, message: impl Into<String>) -> ParseError {
		ParseError {
			message: message.into(),
			position: self.position,
		}
	}

	fn error_at(&self, position: usize, message: impl Into<String>) -> ParseError {
		ParseError {
			message: message.into(),
			position,
		}
	}
}

/// Parses a complete chord, requiring the parser to consume all input.
pub(crate) fn parse_chord(input: &str) -> Result<Chord, ParseError> {
	let mut parser = Parser::new(input);
	if parser.is_end() {
		return Err(parser.error("empty chord"));
	}

	let modifiers = parse_modifiers(&mut parser)?;
	let key = parse_key(&mut parser)?;

	if !parser.is_end() {
		return Err(parser.error("unexpected trailing input"));
	}

	Ok(Chord::new(key, modifiers))
}

/// Parses zero or more `modifier "-"` prefixes, rejecting duplicates.
fn parse_modifiers(parser: &mut Parser) -> Result<Modifiers, ParseError> {
	let mut modifiers = Modifiers::NONE;
	loop {
		let start = parser.position;
		let Some(name) = parser.try_parse(|p| {
			let word = p.take_while(|c| c.is_ascii_lowercase());
			// A modifier is only a modifier when followed by a separator;
			// a bare word here is the key itself.
			match word.as_str() {
				"ctrl" | "alt" | "shift" if p.peek() == Some('-') => {
					p.next();
					Some(word)
				}
				_ => None,
			}
		}) else {
			return Ok(modifiers);
		};

		let already_set = match name.as_str() {
			"ctrl" => std::mem::replace(&mut modifiers.ctrl, true),
			"alt" => std::mem::replace(&mut modifiers.alt, true),
			_ => std::mem::replace(&mut modifiers.shift, true),
		};
		if already_set {
			return Err(parser.error_at(start, format!("duplicate modifier '{name}'")));
		}
	}
}

/// Parses the final key: a function key, a named key, or a single character.
fn parse_key(parser: &mut Parser) -> Result<Key, ParseError> {
	let start = parser.position;
	let word = parser.take_while(|c| c.is_ascii_alphanumeric());

	let mut chars = word.chars();
	match (chars.next(), chars.next()) {
		// Not alphanumeric: any single remaining character is a key.
		(None, _) => match parser.next() {
			Some(ch) => Ok(Key::Char(ch)),
			None => Err(parser.error("expected a key")),
		},
		(Some(ch), None) => Ok(Key::Char(ch)),
		(Some('f'), Some(digit)) if digit.is_ascii_digit() => {
			match word[1..].parse::<u8>() {
				Ok(n @ 1..=24) => Ok(Key::F(n)),
				_ => Err(parser.error_at(start, format!("invalid function key: '{word}'"))),
			}
		}
		_ => NAMED_KEYS
			.iter()
			.find(|(name, _)| *name == word)
			.map(|(_, key)| *key)
			.ok_or_else(|| parser.error_at(start, format!("unknown key name: '{word}'"))),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn parse(input: &str) -> Result<Chord, ParseError> {
		input.parse()
	}

	#[test]
	fn parses_bare_character() {
		assert_eq!(parse("q"), Ok(Chord::char('q')));
		assert_eq!(parse("1"), Ok(Chord::char('1')));
		assert_eq!(parse("-"), Ok(Chord::char('-')));
	}

	#[test]
	fn parses_modifier_combinations() {
		assert_eq!(parse("ctrl-q"), Ok(Chord::char('q').with_ctrl()));
		assert_eq!(
			parse("ctrl-alt-shift-q"),
			Ok(Chord::char('q').with_ctrl().with_alt().with_shift())
		);
		// Order in the input does not matter.
		assert_eq!(
			parse("shift-ctrl-w"),
			Ok(Chord::char('w').with_ctrl().with_shift())
		);
	}

	#[test]
	fn parses_named_keys() {
		assert_eq!(parse("space"), Ok(Chord::new(Key::Space, Modifiers::NONE)));
		assert_eq!(
			parse("ctrl-pagedown"),
			Ok(Chord::new(Key::PageDown, Modifiers::NONE.ctrl()))
		);
	}

	#[test]
	fn parses_function_keys() {
		assert_eq!(parse("f1"), Ok(Chord::new(Key::F(1), Modifiers::NONE)));
		assert_eq!(parse("f24"), Ok(Chord::new(Key::F(24), Modifiers::NONE)));
		assert_eq!(
			parse("alt-f12"),
			Ok(Chord::new(Key::F(12), Modifiers::NONE.alt()))
		);
	}

	#[test]
	fn modifier_without_separator_is_a_key_name_error() {
		let err = parse("ctrl").unwrap_err();
		assert_eq!(err.position, 0);
		assert!(err.message.contains("unknown key name"), "{}", err.message);
	}

	#[test]
	fn rejects_empty_input() {
		let err = parse("").unwrap_err();
		assert_eq!(err.message, "empty chord");
	}

	#[test]
	fn rejects_duplicate_modifier() {
		let err = parse("ctrl-ctrl-q").unwrap_err();
		assert_eq!(err.position, 5);
		assert_eq!(err.message, "duplicate modifier 'ctrl'");
	}

	#[test]
	fn rejects_function_key_out_of_range() {
		let err = parse("f25").unwrap_err();
		assert_eq!(err.message, "invalid function key: 'f25'");
		assert_eq!(parse("f0").unwrap_err().position, 0);
	}

	#[test]
	fn rejects_unknown_key_name() {
		let err = parse("ctrl-bogus").unwrap_err();
		assert_eq!(err.position, 5);
		assert_eq!(err.message, "unknown key name: 'bogus'");
	}

	#[test]
	fn rejects_trailing_input() {
		let err = parse("q w").unwrap_err();
		assert_eq!(err.position, 1);
		assert_eq!(err.message, "unexpected trailing input");
	}
}
