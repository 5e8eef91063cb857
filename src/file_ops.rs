use log::{debug, info};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::data::{GroupId, IdCounts};
use crate::error::{Error, Result};

pub const DEFAULT_FILE_NAME: &str = "id_counts.json";

const INDENT: &[u8] = b"    ";

/// Build the id counts mapping and write it to `path`, replacing any existing file.
pub fn create_id_counts(
    num_folders: usize,
    num_groups: GroupId,
    path: &Path,
) -> Result<IdCounts> {
    let id_counts = IdCounts::new(num_folders, num_groups);
    debug!("Built {} groups of {} folders", id_counts.len(), num_folders);

    write_id_counts(&id_counts, path)?;
    info!(
        "Wrote {} groups x {} folders to {}",
        num_groups,
        num_folders,
        path.display()
    );

    Ok(id_counts)
}

pub fn write_id_counts(id_counts: &IdCounts, path: &Path) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    id_counts.serialize(&mut serializer).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    writer.flush().map_err(io_err)?;
    Ok(())
}

pub fn read_id_counts(path: &Path) -> Result<IdCounts> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let id_counts: IdCounts = serde_json::from_reader(reader).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} groups from {}", id_counts.len(), path.display());

    Ok(id_counts)
}
