use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Error type for I/O operations
#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("IO error: {0}")]
    StdIo(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reads JSON from a file, mapping a missing file to [`IoError::FileNotFound`]
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, IoError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound(path.to_path_buf())
        } else {
            IoError::StdIo(e)
        }
    })?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Reads JSON from any reader (stdin for the CLI)
pub fn read_json<T: DeserializeOwned>(mut reader: impl Read) -> Result<T, IoError> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(serde_json::from_str(&buffer)?)
}

/// Writes JSON to a file, creating parent directories if needed
pub fn write_json_file<T: Serialize>(
    path: impl AsRef<Path>,
    data: &T,
    pretty: bool,
) -> Result<(), IoError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_json(BufWriter::new(file), data, pretty)
}

/// Writes JSON followed by a newline
pub fn write_json<T: Serialize>(mut writer: impl Write, data: &T, pretty: bool) -> Result<(), IoError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, data)?;
    } else {
        serde_json::to_writer(&mut writer, data)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
