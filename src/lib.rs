// SPDX-License-Identifier: MIT OR Apache-2.0 OR Zlib

//! A generator that takes an X11 "keysymdef" header and compiles its
//! keysym definitions into C `case` statements mapping keysym values to
//! Unicode codepoints.
//!
//! The official source of truth for X11 keysyms are the keysymdef files
//! distributed in the X11 package, which are C preprocessor headers rather
//! than anything conventionally parseable. The definitions are grouped into
//! character-set categories by `#ifdef` blocks; only a fixed whitelist of
//! those categories is extracted (see [`CATEGORIES`]). Codepoints below
//! U+0100 are dropped from the output, since Latin-1 is expected to be
//! handled by a direct mapping in the consuming switch statement.
//!
//! The output is meant to be spliced into a larger `switch` by hand; it is
//! not a standalone compilation unit.

mod categories;
mod emit;
mod errors;
mod extract;

pub use categories::CATEGORIES;
pub use emit::{write_cases, INDENT};
pub use errors::ExtractError;
pub use extract::{extract_path, Entry, Extraction, Extractor};
