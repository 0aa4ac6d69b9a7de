// SPDX-License-Identifier: MIT OR Apache-2.0 OR Zlib

use std::io::{self, Write};

use crate::extract::Entry;

/// The generated lines land five levels deep in the consuming switch.
pub const INDENT: &str = "\t\t\t\t\t";

/// Writes the provenance comment followed by one `case` line per entry,
/// in input order.
///
/// `invocation` is the space-joined command line that produced the output,
/// echoed verbatim so a regenerated file records how to regenerate it.
/// Entries below U+0100 are skipped; the Latin-1 range maps straight
/// through in the consuming code and has no business being spelled out.
pub fn write_cases<W: Write>(mut w: W, invocation: &str, entries: &[Entry]) -> io::Result<()> {
    writeln!(w, "{INDENT}// auto-generated with `{invocation}`")?;

    for entry in entries {
        if entry.codepoint_value < 0x100 {
            continue;
        }

        writeln!(
            w,
            "{INDENT}case {:#x}: ks = 0x{}; break; // {}{}",
            entry.value, entry.codepoint, entry.symbol, entry.comment
        )?;
    }

    Ok(())
}
