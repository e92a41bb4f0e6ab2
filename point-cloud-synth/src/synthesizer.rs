/// Gaussian class-cluster synthesis and flat binary output.
use crate::bin_io::write_xyz_bin;
use crate::bounds::PointCloudBounds;
use crate::cloud::{Point, PointCloud, centroid};
use crate::config::{ClassDefinition, SynthesisConfig};
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-class entry of a synthesis report.
#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    pub name: String,
    pub class_id: u8,
    pub count: usize,
    /// Offset of the class's first byte in the output file.
    pub byte_offset: u64,
    pub byte_len: u64,
    pub centroid: Option<[f64; 3]>,
    pub bounds: Option<PointCloudBounds>,
}

/// Summary of one generate call. Printed, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisReport {
    pub output_path: PathBuf,
    pub seed: Option<u64>,
    pub total_points: usize,
    pub byte_len: u64,
    pub bounds: Option<PointCloudBounds>,
    pub classes: Vec<ClassSummary>,
}

/// Draws class clusters from independent per-axis normal distributions.
/// Classes are concatenated in configuration order into a single cloud.
pub struct PointCloudSynthesizer {
    config: SynthesisConfig,
}

impl PointCloudSynthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Sample, serialise and write the cloud to `output_path`.
    /// Creates or overwrites exactly that file; nothing is written if validation fails.
    pub fn generate(&self, output_path: &Path) -> Result<SynthesisReport> {
        self.config.validate()?;

        println!(
            "Synthesising {} points across {} classes into {}...",
            self.config.total_points(),
            self.config.classes.len(),
            output_path.display()
        );

        let cloud = self.synthesize()?;
        let byte_len = write_xyz_bin(output_path, cloud.points())?;
        debug_assert_eq!(byte_len, self.config.expected_byte_len());

        let report = self.build_report(output_path, &cloud, byte_len);
        self.print_summary(&report);

        println!("Saved {} ({} bytes)", output_path.display(), byte_len);
        Ok(report)
    }

    /// Sample the configured classes in memory.
    /// Draw order is class, then point, then axis (x, y, z), so a fixed seed is reproducible.
    pub fn synthesize(&self) -> Result<PointCloud> {
        self.config.validate()?;

        let total_points = self.config.total_points();
        let mut cloud = PointCloud::try_with_capacity(point_capacity(total_points))?;
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let pb = ProgressBar::new(total_points);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} points ({percent}%) {msg}")?
                .progress_chars("▉▊▋▌▍▎▏ "),
        );

        for class in &self.config.classes {
            pb.set_message(format!("Sampling {}", class.name));
            let points = sample_class(class, &mut rng)?;
            pb.inc(points.len() as u64);
            cloud.push_class(&class.name, class.class_id, points);
        }

        pb.finish_with_message("Points sampled");
        Ok(cloud)
    }

    fn build_report(
        &self,
        output_path: &Path,
        cloud: &PointCloud,
        byte_len: u64,
    ) -> SynthesisReport {
        let classes = cloud
            .segments()
            .iter()
            .map(|segment| {
                let points = &cloud.points()[segment.start..segment.start + segment.len];
                ClassSummary {
                    name: segment.name.clone(),
                    class_id: segment.class_id,
                    count: segment.len,
                    byte_offset: segment.byte_offset(),
                    byte_len: segment.byte_len(),
                    centroid: centroid(points),
                    bounds: PointCloudBounds::from_points(points),
                }
            })
            .collect();

        SynthesisReport {
            output_path: output_path.to_path_buf(),
            seed: self.config.seed,
            total_points: cloud.len(),
            byte_len,
            bounds: PointCloudBounds::from_points(cloud.points()),
            classes,
        }
    }

    /// Print per-class layout and overall bounds for verification.
    fn print_summary(&self, report: &SynthesisReport) {
        println!("Class layout:");
        for class in &report.classes {
            match class.centroid {
                Some([x, y, z]) => println!(
                    "  {}: {} points, bytes {}..{}, centroid ({:.2}, {:.2}, {:.2})",
                    class.name,
                    class.count,
                    class.byte_offset,
                    class.byte_offset + class.byte_len,
                    x,
                    y,
                    z
                ),
                None => println!("  {}: empty", class.name),
            }
        }

        if let Some(bounds) = &report.bounds {
            println!("Bounds:");
            println!("  X: {:.2} to {:.2}", bounds.min_x, bounds.max_x);
            println!("  Y: {:.2} to {:.2}", bounds.min_y, bounds.max_y);
            println!("  Z: {:.2} to {:.2}", bounds.min_z, bounds.max_z);

            let (dx, dy, dz) = bounds.dimensions();
            println!("  Extent: {:.2} x {:.2} x {:.2}", dx, dy, dz);
        }
    }
}

/// Buffer capacity for `total` points.
/// Totals beyond the address space saturate so the reservation reports capacity overflow.
fn point_capacity(total: u64) -> usize {
    usize::try_from(total).unwrap_or(usize::MAX)
}

/// Draw `class.count` points, sampling x, y and z independently.
fn sample_class(class: &ClassDefinition, rng: &mut StdRng) -> Result<Vec<Point>> {
    let axes = [
        Normal::new(class.mean[0], class.stddev[0])?,
        Normal::new(class.mean[1], class.stddev[1])?,
        Normal::new(class.mean[2], class.stddev[2])?,
    ];

    let mut points = Vec::new();
    points.try_reserve_exact(class.count as usize)?;
    for _ in 0..class.count {
        let x = axes[0].sample(rng);
        let y = axes[1].sample(rng);
        let z = axes[2].sample(rng);
        points.push(Point::from_f64([x, y, z]));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::axis_std_dev;
    use crate::error::SynthError;

    fn assert_close(actual: [f64; 3], expected: [f64; 3], tolerance: f64) {
        for axis in 0..3 {
            assert!(
                (actual[axis] - expected[axis]).abs() < tolerance,
                "axis {axis}: {} not within {tolerance} of {}",
                actual[axis],
                expected[axis]
            );
        }
    }

    #[test]
    fn default_config_produces_230_points_in_class_order() {
        let synth = PointCloudSynthesizer::new(SynthesisConfig::default().with_seed(7));
        let cloud = synth.synthesize().unwrap();

        assert_eq!(cloud.len(), 230);
        let lens: Vec<usize> = cloud.segments().iter().map(|s| s.len).collect();
        assert_eq!(lens, [100, 80, 50]);
        assert_eq!(cloud.segments()[2].start, 180);
    }

    #[test]
    fn same_seed_reproduces_points() {
        let config = SynthesisConfig::default().with_seed(0x5EED);
        let a = PointCloudSynthesizer::new(config.clone()).synthesize().unwrap();
        let b = PointCloudSynthesizer::new(config).synthesize().unwrap();

        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn different_seeds_differ() {
        let a = PointCloudSynthesizer::new(SynthesisConfig::default().with_seed(1))
            .synthesize()
            .unwrap();
        let b = PointCloudSynthesizer::new(SynthesisConfig::default().with_seed(2))
            .synthesize()
            .unwrap();

        assert_eq!(a.len(), b.len());
        assert_ne!(a.points(), b.points());
    }

    #[test]
    fn anisotropic_class_matches_per_axis_spread() {
        let config = SynthesisConfig::default()
            .with_seed(42)
            .with_classes(vec![ClassDefinition::new(
                "tree",
                1,
                [0.0, 5.0, 0.0],
                [0.3, 1.0, 0.3],
                20_000,
            )]);
        let cloud = PointCloudSynthesizer::new(config).synthesize().unwrap();
        let tree = cloud.class_points("tree").unwrap();

        assert_close(centroid(tree).unwrap(), [0.0, 5.0, 0.0], 0.05);
        assert_close(axis_std_dev(tree).unwrap(), [0.3, 1.0, 0.3], 0.05);
    }

    #[test]
    fn zero_stddev_collapses_onto_mean() {
        let config = SynthesisConfig::default()
            .with_seed(3)
            .with_classes(vec![ClassDefinition::isotropic(
                "fixed",
                0,
                [1.5, -2.0, 0.25],
                0.0,
                5,
            )]);
        let cloud = PointCloudSynthesizer::new(config).synthesize().unwrap();

        assert!(cloud.points().iter().all(|p| *p == Point::new(1.5, -2.0, 0.25)));
    }

    #[test]
    fn oversized_point_total_surfaces_as_allocation_error() {
        let capacity = point_capacity(u64::MAX);
        assert_eq!(capacity, usize::MAX);

        let result = PointCloud::try_with_capacity(capacity).map_err(SynthError::from);
        assert!(matches!(result, Err(SynthError::Allocation(_))));
    }

    #[test]
    fn point_capacity_keeps_representable_totals() {
        assert_eq!(point_capacity(230), 230);
        assert_eq!(point_capacity(0), 0);
    }

    #[test]
    fn invalid_class_fails_before_sampling() {
        let config = SynthesisConfig::default().with_classes(vec![ClassDefinition::isotropic(
            "broken",
            0,
            [0.0; 3],
            f64::INFINITY,
            10,
        )]);

        assert!(PointCloudSynthesizer::new(config).synthesize().is_err());
    }
}
