/// Fixed output filename, written to the current working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "lidar_000111.bin";

/// Coordinates stored per point (x, y, z).
pub const COORDINATES_PER_POINT: usize = 3;

/// Bytes per serialised point: three little-endian f32 values.
pub const BYTES_PER_POINT: usize = COORDINATES_PER_POINT * std::mem::size_of::<f32>();
