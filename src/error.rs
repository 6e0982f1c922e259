use std::io;

use rustyline::error::ReadlineError;

/// Exit code used when a child process cannot be created (EX_OSERR).
pub const EX_OSERR: u8 = 71;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("line editor: {0}")]
    Editor(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("cannot create a process for {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("cd: path argument required")]
    MissingDirectory,
    #[error("cd failed: {path}: {source}")]
    ChangeDirectory {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ShellError {
    /// Process exit code for errors that end the shell.
    pub fn exit_code(&self) -> u8 {
        match self {
            ShellError::Spawn { .. } => EX_OSERR,
            _ => 1,
        }
    }
}
