use std::{
    ffi::OsString,
    io::{self, Write},
    os::unix::ffi::OsStrExt,
};

use crate::core::command::ExitOutcome;

/// `echo [-n] [args...]`. Only an exact leading `-n` suppresses the newline.
pub fn run(args: &[OsString], out: &mut impl Write) -> ExitOutcome {
    if args.is_empty() {
        return ExitOutcome::Failure;
    }

    match write_words(&args[1..], out) {
        Ok(()) => ExitOutcome::Success,
        Err(e) => {
            log::debug!("echo: write failed: {}", e);
            ExitOutcome::Failure
        }
    }
}

fn write_words(words: &[OsString], out: &mut impl Write) -> io::Result<()> {
    let (newline, words) = match words.split_first() {
        Some((first, rest)) if first == "-n" => (false, rest),
        _ => (true, words),
    };

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        out.write_all(word.as_bytes())?;
    }
    if newline {
        writeln!(out)?;
    }
    out.flush()
}
