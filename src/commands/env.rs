use std::{
    ffi::OsString,
    io::{self, Write},
    os::unix::ffi::OsStrExt,
};

use crate::core::command::ExitOutcome;

/// Prints `KEY=VALUE` for every variable, keeping the order it is given in.
/// An empty table counts as a failure.
pub fn run<I>(vars: I, out: &mut impl Write) -> ExitOutcome
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    match write_vars(vars, out) {
        Ok(0) => ExitOutcome::Failure,
        Ok(_) => ExitOutcome::Success,
        Err(e) => {
            log::debug!("env: write failed: {}", e);
            ExitOutcome::Failure
        }
    }
}

fn write_vars<I>(vars: I, out: &mut impl Write) -> io::Result<usize>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut count = 0;
    for (key, value) in vars {
        out.write_all(key.as_bytes())?;
        out.write_all(b"=")?;
        out.write_all(value.as_bytes())?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
        pairs
            .iter()
            .map(|(k, v)| (OsString::from(k), OsString::from(v)))
            .collect()
    }

    #[test]
    fn test_env_keeps_order() {
        let mut out = Vec::new();
        let outcome = run(vars(&[("ZED", "1"), ("ALPHA", "a=b"), ("EMPTY", "")]), &mut out);
        assert_eq!(outcome, ExitOutcome::Success);
        assert_eq!(out, b"ZED=1\nALPHA=a=b\nEMPTY=\n");
    }

    #[test]
    fn test_env_empty_table_fails() {
        let mut out = Vec::new();
        assert_eq!(run(vars(&[]), &mut out), ExitOutcome::Failure);
        assert!(out.is_empty());
    }
}
