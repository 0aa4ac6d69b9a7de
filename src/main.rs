// SPDX-License-Identifier: MIT OR Apache-2.0 OR Zlib

use std::env;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process;

use anyhow::Result;

use keysym_case_gen::{extract_path, write_cases};

fn main() -> Result<()> {
    // stdout carries the generated source; logs must stay off it
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("keysym-case-gen");
        eprintln!("Usage: {program} <path/to/keysymdef.h>");
        eprintln!("/usr/include/X11/keysymdef.h on my end");
        process::exit(1);
    }

    let extraction = extract_path(Path::new(&args[1]))?;

    let stdout = io::stdout().lock();
    write_cases(BufWriter::new(stdout), &args.join(" "), &extraction.entries)?;

    Ok(())
}
