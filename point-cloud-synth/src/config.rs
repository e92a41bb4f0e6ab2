/// Class cluster configuration for synthesis
use crate::error::{Result, SynthError};
use constants::class::{ClassDefinitionLiteral, DEFAULT_CLASSES, get_class_name};
use constants::output::BYTES_PER_POINT;
use serde::{Deserialize, Serialize};

/// One Gaussian cluster: per-axis independent normal distributions around `mean`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub name: String,
    pub class_id: u8,
    pub mean: [f64; 3],
    pub stddev: [f64; 3],
    pub count: u32,
}

impl ClassDefinition {
    pub fn new(name: &str, class_id: u8, mean: [f64; 3], stddev: [f64; 3], count: u32) -> Self {
        Self {
            name: name.to_string(),
            class_id,
            mean,
            stddev,
            count,
        }
    }

    /// Same standard deviation on every axis.
    pub fn isotropic(name: &str, class_id: u8, mean: [f64; 3], stddev: f64, count: u32) -> Self {
        Self::new(name, class_id, mean, [stddev; 3], count)
    }

    /// Reject parameters the normal sampler cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("class name is empty"));
        }

        if let Some(axis) = self.mean.iter().position(|m| !m.is_finite()) {
            return Err(self.invalid(&format!("mean[{axis}] is not finite")));
        }

        // Zero spread is allowed and collapses the class onto its mean.
        if let Some(axis) = self
            .stddev
            .iter()
            .position(|s| !s.is_finite() || *s < 0.0)
        {
            return Err(self.invalid(&format!(
                "stddev[{axis}] must be finite and non-negative, got {}",
                self.stddev[axis]
            )));
        }

        Ok(())
    }

    fn invalid(&self, reason: &str) -> SynthError {
        SynthError::InvalidClass {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

impl From<&ClassDefinitionLiteral> for ClassDefinition {
    fn from(literal: &ClassDefinitionLiteral) -> Self {
        Self::new(
            &get_class_name(literal.id),
            literal.id,
            literal.mean,
            literal.stddev,
            literal.count,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Classes in serialisation order.
    pub classes: Vec<ClassDefinition>,
    /// Random seed. Without one every run draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            classes: DEFAULT_CLASSES.iter().map(ClassDefinition::from).collect(),
            seed: None,
        }
    }
}

impl SynthesisConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_classes(mut self, classes: Vec<ClassDefinition>) -> Self {
        self.classes = classes;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.classes.iter().try_for_each(ClassDefinition::validate)
    }

    pub fn total_points(&self) -> u64 {
        self.classes.iter().map(|c| c.count as u64).sum()
    }

    /// Size of the flat binary this configuration produces.
    pub fn expected_byte_len(&self) -> u64 {
        self.total_points() * BYTES_PER_POINT as u64
    }
}
