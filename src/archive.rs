//! Archive assembly: materialized files into an in-memory ZIP.

use crate::error::Result;
use crate::format::slugify;
use crate::materialize::MaterializedFile;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Encodes the materialized file list into ZIP bytes, in list order.
/// Duplicate destination paths are not rejected; extractors keep the last
/// entry written.
pub fn encode_zip(files: &[MaterializedFile]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        writer.start_file(file.destination_path.as_str(), options)?;
        writer.write_all(file.content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Computes the archive filename from a project name.
pub fn archive_name(project_name: &str) -> String {
    format!("{}.zip", slugify(project_name))
}
