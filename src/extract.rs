// SPDX-License-Identifier: MIT OR Apache-2.0 OR Zlib

use std::collections::HashSet;
use std::fs::File;
use std::io::{prelude::*, BufReader};
use std::path::Path;

use regex::Regex;

use crate::categories::CATEGORIES;
use crate::errors::ExtractError;

/// One qualifying keysym definition, in the order it appeared in the header.
///
/// `codepoint` keeps the exact 4-hex-digit spelling from the `U+XXXX`
/// annotation so the output echoes the header's casing; `codepoint_value`
/// is its parsed value, used for the U+0100 output threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub symbol: String,
    pub value: u32,
    pub codepoint: String,
    pub codepoint_value: u32,
    pub comment: String,
}

/// The result of a full pass over a keysymdef header.
#[derive(Debug)]
pub struct Extraction {
    pub entries: Vec<Entry>,

    /// Length of the longest symbol name seen. Kept for parity with the
    /// original generator, which tracked it for column alignment that was
    /// never wired into the output format.
    pub max_symbol_len: usize,
}

/// A single-pass extractor over keysymdef lines.
///
/// Lines of the form `#ifdef <CATEGORY>` / `#endif` open and close visibility
/// scopes; a definition is only considered while the innermost scope's
/// category is whitelisted. Note that a nested `#ifdef` is visible purely on
/// its own category's merits, without conjoining with the enclosing scope.
/// keysymdef.h never nests a whitelisted category inside an excluded one, so
/// the distinction is not observable on real input; the behavior is kept
/// as-is rather than second-guessed.
pub struct Extractor {
    ifdef: Regex,
    define: Regex,

    // one entry per open #ifdef, plus the base sentinel
    visibility: Vec<bool>,
    seen: HashSet<u32>,
    entries: Vec<Entry>,
    max_symbol_len: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        // we're looking for lines of the following forms:
        // #ifdef XK_{some category}
        // #define XK_{some key name} {some key code} /* U+XXXX {description} */
        let ifdef = Regex::new(r"^#ifdef\s+(\S+)").unwrap();
        let define = Regex::new(r"^#define\s+(XK_\w*)\s+(\S+)").unwrap();

        Self {
            ifdef,
            define,
            visibility: vec![true],
            seen: HashSet::new(),
            entries: Vec::new(),
            max_symbol_len: 0,
        }
    }

    /// Processes one header line, recording an [`Entry`] if it qualifies.
    ///
    /// # Panics
    ///
    /// Panics if a qualifying line carries a malformed `U+` annotation or an
    /// unparseable value literal, or if an `#endif` closes a block that was
    /// never opened. The generator is run by hand against a known header;
    /// a format surprise is for the operator to look at, not to paper over.
    pub fn feed_line(&mut self, line: &str) {
        let line = line.trim();

        if let Some(caps) = self.ifdef.captures(line) {
            self.visibility.push(CATEGORIES.contains(&caps[1]));
            return;
        }

        if line.starts_with("#endif") {
            self.visibility.pop();
            assert!(!self.visibility.is_empty(), "unbalanced #endif");
            return;
        }

        // skip sections that are not whitelisted
        if !self.visibility.last().copied().unwrap_or_default() {
            return;
        }

        let Some(caps) = self.define.captures(line) else {
            return;
        };

        // only definitions annotated with a Unicode codepoint are useful
        let Some(annotation) = line.find("U+") else {
            return;
        };

        let value_literal = &caps[2];
        let digits = value_literal.get(2..).unwrap_or_default();
        let value = u32::from_str_radix(digits, 16).unwrap_or_else(|_| {
            panic!("unparseable keysym value {value_literal:?} in line: {line}")
        });

        // several symbols alias the same keysym value; first one wins
        if !self.seen.insert(value) {
            return;
        }

        let codepoint = line
            .get(annotation + 2..annotation + 6)
            .map(str::trim)
            .unwrap_or_default();
        assert!(
            codepoint.len() == 4,
            "codepoint annotation is not 4 hex digits in line: {line}"
        );
        let codepoint_value = u32::from_str_radix(codepoint, 16)
            .unwrap_or_else(|_| panic!("codepoint {codepoint:?} is not hexadecimal in line: {line}"));

        // the description sits between the codepoint and the closing "*/"
        let comment = match line.find("*/") {
            Some(end) => {
                let description = line
                    .get(annotation + 7..end)
                    .unwrap_or_default()
                    .trim();
                format!(" / {description}")
            }
            None => String::new(),
        };

        let symbol = caps[1].to_string();
        self.max_symbol_len = self.max_symbol_len.max(symbol.len());

        self.entries.push(Entry {
            symbol,
            value,
            codepoint: codepoint.to_string(),
            codepoint_value,
            comment,
        });
    }

    pub fn finish(self) -> Extraction {
        Extraction {
            entries: self.entries,
            max_symbol_len: self.max_symbol_len,
        }
    }
}

/// Runs the extractor over the header at `path`, line by line.
pub fn extract_path(path: &Path) -> Result<Extraction, ExtractError> {
    tracing::info!("Opening {:?}", path);

    let file = File::open(path).map_err(|error| ExtractError::FailedToOpen {
        path: path.to_path_buf(),
        error,
    })?;

    let mut extractor = Extractor::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|error| ExtractError::FailedToRead {
            path: path.to_path_buf(),
            error,
        })?;
        extractor.feed_line(&line);
    }

    let extraction = extractor.finish();
    tracing::info!("Extracted {} keysym mappings", extraction.entries.len());

    Ok(extraction)
}
