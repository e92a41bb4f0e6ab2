/// Synthetic lidar fixture generator main entry point
use constants::output::DEFAULT_OUTPUT_FILE;
use point_cloud_synth::greeting::greet;
use point_cloud_synth::{PointCloudSynthesizer, SynthesisConfig};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    greet("lidar");

    let synthesizer = PointCloudSynthesizer::new(SynthesisConfig::default());
    let report = synthesizer.generate(Path::new(DEFAULT_OUTPUT_FILE))?;

    println!("Synthesis report: {}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
