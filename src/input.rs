//! Input size detection
//!
//! Percentages need the dump size up front. Redirected files report their
//! length; pipes and terminals report 0, which disables percentages.

use std::fs::File;
use std::io;

use crate::error::SqlpvError;

/// Size in bytes of whatever stdin is connected to
pub fn stdin_size() -> Result<u64, SqlpvError> {
    let file = stdin_as_file().map_err(SqlpvError::InputStat)?;
    input_size(&file).map_err(SqlpvError::InputStat)
}

/// Size of a regular file, or 0 for pipes and other streams
pub fn input_size(file: &File) -> io::Result<u64> {
    let metadata = file.metadata()?;
    if metadata.is_file() {
        Ok(metadata.len())
    } else {
        Ok(0)
    }
}

#[cfg(unix)]
fn stdin_as_file() -> io::Result<File> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    Ok(File::from(fd))
}

#[cfg(windows)]
fn stdin_as_file() -> io::Result<File> {
    use std::os::windows::io::AsHandle;

    let handle = io::stdin().as_handle().try_clone_to_owned()?;
    Ok(File::from(handle))
}
