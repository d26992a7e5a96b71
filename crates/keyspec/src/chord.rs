//! Key, modifier, and chord types.

use std::fmt;
use std::str::FromStr;

use crate::parser::{ParseError, parse_chord};

/// Key modifiers (Ctrl, Alt, Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	pub ctrl: bool,
	pub alt: bool,
	pub shift: bool,
}

impl Modifiers {
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	pub const fn ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	pub const fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	pub const fn shift(self) -> Self {
		Self {
			shift: true,
			..self
		}
	}

	pub const fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}

/// A key code: a printable character, a function key, or a named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	Char(char),
	/// Function key, `F(1)` through `F(24)`.
	F(u8),
	Space,
	Enter,
	Escape,
	Tab,
	Backspace,
	Delete,
	Up,
	Down,
	Left,
	Right,
	Home,
	End,
	PageUp,
	PageDown,
}

/// Named keys recognized by the chord parser, paired with their key codes.
pub(crate) const NAMED_KEYS: &[(&str, Key)] = &[
	("space", Key::Space),
	("enter", Key::Enter),
	("escape", Key::Escape),
	("tab", Key::Tab),
	("backspace", Key::Backspace),
	("delete", Key::Delete),
	("up", Key::Up),
	("down", Key::Down),
	("left", Key::Left),
	("right", Key::Right),
	("home", Key::Home),
	("end", Key::End),
	("pageup", Key::PageUp),
	("pagedown", Key::PageDown),
];

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Char(c) => write!(f, "{c}"),
			Key::F(n) => write!(f, "f{n}"),
			Key::Space => f.write_str("space"),
			Key::Enter => f.write_str("enter"),
			Key::Escape => f.write_str("escape"),
			Key::Tab => f.write_str("tab"),
			Key::Backspace => f.write_str("backspace"),
			Key::Delete => f.write_str("delete"),
			Key::Up => f.write_str("up"),
			Key::Down => f.write_str("down"),
			Key::Left => f.write_str("left"),
			Key::Right => f.write_str("right"),
			Key::Home => f.write_str("home"),
			Key::End => f.write_str("end"),
			Key::PageUp => f.write_str("pageup"),
			Key::PageDown => f.write_str("pagedown"),
		}
	}
}

/// A key with a modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
	pub key: Key,
	pub modifiers: Modifiers,
}

impl Chord {
	pub const fn new(key: Key, modifiers: Modifiers) -> Self {
		Self { key, modifiers }
	}

	/// A character key with no modifiers.
	pub const fn char(c: char) -> Self {
		Self {
			key: Key::Char(c),
			modifiers: Modifiers::NONE,
		}
	}

	pub const fn with_ctrl(self) -> Self {
		Self {
			modifiers: self.modifiers.ctrl(),
			..self
		}
	}

	pub const fn with_alt(self) -> Self {
		Self {
			modifiers: self.modifiers.alt(),
			..self
		}
	}

	pub const fn with_shift(self) -> Self {
		Self {
			modifiers: self.modifiers.shift(),
			..self
		}
	}
}

impl fmt::Display for Chord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.ctrl {
			write!(f, "ctrl-")?;
		}
		if self.modifiers.alt {
			write!(f, "alt-")?;
		}
		if self.modifiers.shift {
			write!(f, "shift-")?;
		}
		write!(f, "{}", self.key)
	}
}

impl FromStr for Chord {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_chord(s)
	}
}
