/// Point and point cloud types for the synthetic fixture
use constants::output::BYTES_PER_POINT;
use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Narrow an f64 sample to stored precision.
    pub fn from_f64(coords: [f64; 3]) -> Self {
        Self::new(coords[0] as f32, coords[1] as f32, coords[2] as f32)
    }

    pub fn to_le_bytes(&self) -> [u8; BYTES_PER_POINT] {
        let mut bytes = [0u8; BYTES_PER_POINT];
        bytes[0..4].copy_from_slice(&self.x.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.y.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.z.to_le_bytes());
        bytes
    }

    pub fn from_le_bytes(bytes: &[u8; BYTES_PER_POINT]) -> Self {
        let coord =
            |i: usize| f32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        Self::new(coord(0), coord(4), coord(8))
    }

    fn as_f64(&self) -> [f64; 3] {
        [self.x as f64, self.y as f64, self.z as f64]
    }
}

/// Contiguous run of points drawn for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSegment {
    pub name: String,
    pub class_id: u8,
    /// Index of the first point of this class.
    pub start: usize,
    pub len: usize,
}

impl ClassSegment {
    pub fn byte_offset(&self) -> u64 {
        (self.start * BYTES_PER_POINT) as u64
    }

    pub fn byte_len(&self) -> u64 {
        (self.len * BYTES_PER_POINT) as u64
    }
}

/// Class-concatenated point sequence.
/// Labels live only in the segment table, never in the serialised bytes.
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    points: Vec<Point>,
    segments: Vec<ClassSegment>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `capacity` points up front, failing instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut points = Vec::new();
        points.try_reserve_exact(capacity)?;
        Ok(Self {
            points,
            segments: Vec::new(),
        })
    }

    /// Append the points of one class, recording its segment.
    pub fn push_class(
        &mut self,
        name: &str,
        class_id: u8,
        points: impl IntoIterator<Item = Point>,
    ) {
        let start = self.points.len();
        self.points.extend(points);
        self.segments.push(ClassSegment {
            name: name.to_string(),
            class_id,
            start,
            len: self.points.len() - start,
        });
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn segments(&self) -> &[ClassSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn byte_len(&self) -> u64 {
        (self.points.len() * BYTES_PER_POINT) as u64
    }

    /// Points of the first segment with the given class name.
    pub fn class_points(&self, name: &str) -> Option<&[Point]> {
        self.segments
            .iter()
            .find(|s| s.name == name)
            .map(|s| &self.points[s.start..s.start + s.len])
    }
}

/// Arithmetic mean of each axis.
pub fn centroid(points: &[Point]) -> Option<[f64; 3]> {
    if points.is_empty() {
        return None;
    }

    let mut sum = [0.0f64; 3];
    for p in points {
        let c = p.as_f64();
        for axis in 0..3 {
            sum[axis] += c[axis];
        }
    }

    let n = points.len() as f64;
    Some([sum[0] / n, sum[1] / n, sum[2] / n])
}

/// Population standard deviation of each axis.
pub fn axis_std_dev(points: &[Point]) -> Option<[f64; 3]> {
    let mean = centroid(points)?;

    let mut sq = [0.0f64; 3];
    for p in points {
        let c = p.as_f64();
        for axis in 0..3 {
            let d = c[axis] - mean[axis];
            sq[axis] += d * d;
        }
    }

    let n = points.len() as f64;
    Some([(sq[0] / n).sqrt(), (sq[1] / n).sqrt(), (sq[2] / n).sqrt()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;

    #[test]
    fn point_bytes_are_little_endian_xyz() {
        let p = Point::new(1.0, -2.5, 0.25);
        let bytes = p.to_le_bytes();
        assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[4..8], &(-2.5f32).to_le_bytes());
        assert_eq!(&bytes[8..12], &0.25f32.to_le_bytes());
        assert_eq!(Point::from_le_bytes(&bytes), p);
    }

    #[test]
    fn segments_track_class_offsets() {
        let mut cloud = PointCloud::new();
        cloud.push_class("a", 0, vec![Point::new(0.0, 0.0, 0.0); 3]);
        cloud.push_class("empty", 1, Vec::new());
        cloud.push_class("b", 2, vec![Point::new(1.0, 1.0, 1.0); 2]);

        assert_eq!(cloud.len(), 5);
        assert_eq!(cloud.byte_len(), 60);

        let segments = cloud.segments();
        assert_eq!(segments[1].start, 3);
        assert_eq!(segments[1].len, 0);
        assert_eq!(segments[2].byte_offset(), 36);
        assert_eq!(segments[2].byte_len(), 24);

        assert_eq!(cloud.class_points("b").map(<[Point]>::len), Some(2));
        assert_eq!(cloud.class_points("empty").map(<[Point]>::len), Some(0));
        assert!(cloud.class_points("missing").is_none());
    }

    #[test]
    fn unreservable_capacity_maps_to_allocation_error() {
        let result = PointCloud::try_with_capacity(usize::MAX).map_err(SynthError::from);
        assert!(matches!(result, Err(SynthError::Allocation(_))));
    }

    #[test]
    fn reserved_cloud_starts_empty() {
        let cloud = PointCloud::try_with_capacity(230).unwrap();
        assert!(cloud.is_empty());
        assert!(cloud.segments().is_empty());
    }

    #[test]
    fn centroid_and_std_dev() {
        let points = [Point::new(1.0, 0.0, -2.0), Point::new(3.0, 0.0, 2.0)];
        assert_eq!(centroid(&points), Some([2.0, 0.0, 0.0]));
        assert_eq!(axis_std_dev(&points), Some([1.0, 0.0, 2.0]));
    }

    #[test]
    fn statistics_of_empty_slice_are_none() {
        assert!(centroid(&[]).is_none());
        assert!(axis_std_dev(&[]).is_none());
    }
}
