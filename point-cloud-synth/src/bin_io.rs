/// Flat binary xyz serialisation: little-endian f32 triples, no header.
use crate::cloud::Point;
use crate::error::{Result, SynthError};
use constants::output::BYTES_PER_POINT;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write points as raw x,y,z f32 values, replacing any existing file.
/// Returns the number of bytes written.
pub fn write_xyz_bin(path: &Path, points: &[Point]) -> Result<u64> {
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(points.len() * BYTES_PER_POINT)?;
    for point in points {
        bytes.extend_from_slice(&point.to_le_bytes());
    }

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;

    Ok(bytes.len() as u64)
}

/// Decode a flat xyz file back into points.
pub fn read_xyz_bin(path: &Path) -> Result<Vec<Point>> {
    let bytes = std::fs::read(path)?;
    if bytes.len() % BYTES_PER_POINT != 0 {
        return Err(SynthError::MalformedBinary {
            len: bytes.len() as u64,
        });
    }

    Ok(bytes
        .chunks_exact(BYTES_PER_POINT)
        .map(|chunk| {
            let mut triple = [0u8; BYTES_PER_POINT];
            triple.copy_from_slice(chunk);
            Point::from_le_bytes(&triple)
        })
        .collect())
}
