use colored::Colorize;
use std::{
    ffi::{OsStr, OsString},
    io::{self, ErrorKind},
    os::unix::process::ExitStatusExt,
    process::{Child, Command, ExitStatus},
};

use crate::error::ShellError;

/// Status recorded when the program cannot be found or executed (EX_UNAVAILABLE).
pub const EXEC_FAILURE_STATUS: i32 = 69;

/// Status recorded when waiting on the child fails.
pub const WAIT_FAILURE_STATUS: i32 = 1;

/// Runs external programs one at a time, always waiting for them to finish.
#[derive(Debug, Clone, Default)]
pub struct ExternalCommand;

impl ExternalCommand {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `args[0]` (resolved through `PATH`) with `args[1..]` and waits
    /// for it. Returns the status to record for the shell.
    ///
    /// Only process creation running out of resources is an error; programs
    /// that cannot be executed yield [`EXEC_FAILURE_STATUS`].
    pub fn launch(&self, args: &[OsString]) -> Result<i32, ShellError> {
        let Some((command, rest)) = args.split_first() else {
            return Ok(0);
        };

        let mut child = match self.spawn_command(command, rest) {
            Ok(child) => child,
            Err(e) if is_resource_exhaustion(&e) => {
                return Err(ShellError::Spawn {
                    command: command.to_string_lossy().into_owned(),
                    source: e,
                });
            }
            Err(e) => {
                log::debug!("exec of {:?} failed: {:?}", command, e.kind());
                eprintln!(
                    "{}",
                    format!("cell: {}: {}", command.to_string_lossy(), e).red()
                );
                return Ok(EXEC_FAILURE_STATUS);
            }
        };

        log::debug!("spawned {:?} as pid {}", command, child.id());

        match child.wait() {
            Ok(status) => {
                let code = status_code(status);
                log::debug!("pid {} finished with {}", child.id(), code);
                Ok(code)
            }
            Err(e) => {
                eprintln!("{}", format!("cell: wait failed: {}", e).red());
                Ok(WAIT_FAILURE_STATUS)
            }
        }
    }

    fn spawn_command(&self, command: &OsStr, args: &[OsString]) -> io::Result<Child> {
        Command::new(command).args(args).spawn()
    }
}

/// Exit code of a finished child, or `128 + signal` when it was killed.
pub fn status_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => status.into_raw(),
    }
}

fn is_resource_exhaustion(e: &io::Error) -> bool {
    matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::OutOfMemory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn argv(parts: &[&str]) -> Vec<OsString> {
        parts.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_launch_basic_command() {
        let tmp_dir = TempDir::new().expect("Failed to create temp dir");
        let test_file = tmp_dir.path().join("test.txt");

        let status = ExternalCommand::new()
            .launch(&argv(&["touch", test_file.to_str().unwrap()]))
            .unwrap();
        assert_eq!(status, 0);
        assert!(test_file.exists());
    }

    #[test]
    fn test_launch_reports_exit_code() {
        let status = ExternalCommand::new()
            .launch(&argv(&["sh", "-c", "exit 7"]))
            .unwrap();
        assert_eq!(status, 7);
    }

    #[test]
    fn test_launch_signal_status() {
        let status = ExternalCommand::new()
            .launch(&argv(&["sh", "-c", "kill -9 $$"]))
            .unwrap();
        assert_eq!(status, 128 + 9);
    }

    #[test]
    fn test_launch_unknown_command() {
        let status = ExternalCommand::new()
            .launch(&argv(&["not_a_real_cmd123"]))
            .unwrap();
        assert_eq!(status, EXEC_FAILURE_STATUS);
    }

    #[test]
    fn test_launch_not_executable() {
        let tmp_dir = TempDir::new().unwrap();
        let script = tmp_dir.path().join("script.sh");
        fs::write(&script, "#!/bin/sh\necho hi\n").unwrap();

        let status = ExternalCommand::new()
            .launch(&argv(&[script.to_str().unwrap()]))
            .unwrap();
        assert_eq!(status, EXEC_FAILURE_STATUS);
    }

    #[test]
    fn test_launch_passes_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let tmp_dir = TempDir::new().unwrap();
        let target = tmp_dir.path().join(OsStr::from_bytes(b"latin\xe9\xff"));

        let status = ExternalCommand::new()
            .launch(&[OsString::from("touch"), target.clone().into_os_string()])
            .unwrap();
        assert_eq!(status, 0);
        assert!(target.exists());
    }

    #[test]
    fn test_launch_empty_vector() {
        assert_eq!(ExternalCommand::new().launch(&[]).unwrap(), 0);
    }

    #[test]
    fn test_resource_exhaustion_kinds() {
        assert!(is_resource_exhaustion(&io::Error::from(ErrorKind::WouldBlock)));
        assert!(is_resource_exhaustion(&io::Error::from(ErrorKind::OutOfMemory)));
        assert!(!is_resource_exhaustion(&io::Error::from(ErrorKind::NotFound)));
        assert!(!is_resource_exhaustion(&io::Error::from(
            ErrorKind::PermissionDenied
        )));
    }
}
