/// Synthetic street-scene point cloud fixtures for annotation tooling
pub mod bin_io;
pub mod bounds;
pub mod cloud;
pub mod config;
pub mod error;
pub mod greeting;
pub mod synthesizer;

pub use bin_io::{read_xyz_bin, write_xyz_bin};
pub use bounds::PointCloudBounds;
pub use cloud::{ClassSegment, Point, PointCloud};
pub use config::{ClassDefinition, SynthesisConfig};
pub use error::{Result, SynthError};
pub use synthesizer::{ClassSummary, PointCloudSynthesizer, SynthesisReport};
