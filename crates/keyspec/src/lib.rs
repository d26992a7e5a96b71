//! Key chord model and plain-text chord parsing.
//!
//! A [`Chord`] is a single key plus a modifier set, the unit a keybinding
//! table maps to an action. Chords are `const`-constructible for builtin
//! tables and parse from text such as `"ctrl-alt-shift-q"` for
//! configuration files. [`Chord`]'s `Display` output round-trips through
//! its `FromStr` implementation.

pub use chord::{Chord, Key, Modifiers};
pub use parser::ParseError;

mod chord;
mod parser;
