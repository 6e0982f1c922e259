use std::{env, ffi::OsString, path::PathBuf};

use crate::error::ShellError;

pub const NAME: &str = "cd";

/// Changes the process working directory to `args[1]`. Extra arguments are
/// ignored. Returns the new working directory.
pub fn change_directory(args: &[OsString]) -> Result<PathBuf, ShellError> {
    let path = args.get(1).ok_or(ShellError::MissingDirectory)?;
    env::set_current_dir(path).map_err(|source| ShellError::ChangeDirectory {
        path: path.to_string_lossy().into_owned(),
        source,
    })?;
    Ok(env::current_dir()?)
}
