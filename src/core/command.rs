use std::{env, ffi::OsString, io::Write};

use crate::commands::{echo, env as env_cmd, exit};

/// Result of running a builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    Failure,
    /// Stop the whole shell now.
    Terminate,
}

impl ExitOutcome {
    /// Shell status recorded for this outcome, if the shell keeps running.
    pub fn status(self) -> Option<i32> {
        match self {
            ExitOutcome::Success => Some(0),
            ExitOutcome::Failure => Some(1),
            ExitOutcome::Terminate => None,
        }
    }
}

/// Commands implemented inside the shell process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Echo,
    Env,
    Exit,
}

impl Builtin {
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Echo => "echo",
            Builtin::Env => "env",
            Builtin::Exit => "exit",
        }
    }

    /// Runs the builtin with the full argument vector (`args[0]` is the name).
    pub fn execute(&self, args: &[OsString], out: &mut impl Write) -> ExitOutcome {
        match self {
            Builtin::Echo => echo::run(args, out),
            Builtin::Env => env_cmd::run(env::vars_os(), out),
            Builtin::Exit => exit::run(args),
        }
    }
}
