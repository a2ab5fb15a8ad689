//! Generation and evaluation options.

use crate::generate::ResponseClamp;
use thiserror::Error;

/// Maximum number of features a synthetic dataset may carry.
pub const MAX_FEATURES: usize = 2;

/// Default number of outliers reported by the evaluator.
pub const DEFAULT_TOP_K: usize = 5;

/// Configuration for the synthetic data generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Number of records to generate (default: 500).
    pub n_samples: usize,
    /// Seed for the per-call random generator (default: 42).
    pub seed: u64,
    /// True coefficient for each feature, in feature order.
    pub coefficients: Vec<f64>,
    /// True intercept.
    pub intercept: f64,
    /// Variance of the zero-mean Gaussian noise added to each response.
    pub noise_variance: f64,
    /// Half-open range `[lo, hi)` every feature is drawn from.
    pub feature_range: (f64, f64),
    /// Optional clamp applied to the observed response after noise.
    pub clamp: Option<ResponseClamp>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            n_samples: 500,
            seed: 42,
            coefficients: vec![2.0],
            intercept: 0.0,
            noise_variance: 0.0,
            feature_range: (-10.0, 10.0),
            clamp: None,
        }
    }
}

/// Errors that can occur when validating playground options.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("n_samples must be at least 1, got {0}")]
    InvalidSampleCount(usize),
    #[error("at least one coefficient is required")]
    NoCoefficients,
    #[error("at most {max} features are supported, got {got}")]
    TooManyFeatures { max: usize, got: usize },
    #[error("coefficient {index} must be finite, got {value}")]
    InvalidCoefficient { index: usize, value: f64 },
    #[error("intercept must be finite, got {0}")]
    InvalidIntercept(f64),
    #[error("noise_variance must be finite and non-negative, got {0}")]
    InvalidNoiseVariance(f64),
    #[error("feature range must satisfy lo < hi with finite bounds, got [{lo}, {hi}]")]
    InvalidFeatureRange { lo: f64, hi: f64 },
    #[error("clamp bounds must satisfy lo <= hi with finite bounds, got [{lo}, {hi}]")]
    InvalidClamp { lo: f64, hi: f64 },
}

impl GenerationOptions {
    /// Create a new builder for generation options.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }

    /// Two-feature plane `y = 2.0*x1 + 1.5*x2 + 5.0 + noise` over `[-10, 10]`.
    pub fn multiple_regression() -> Self {
        Self {
            n_samples: 500,
            seed: 42,
            coefficients: vec![2.0, 1.5],
            intercept: 5.0,
            noise_variance: 100.0,
            feature_range: (-10.0, 10.0),
            clamp: None,
        }
    }

    /// Page-load time (1 to 8 seconds) against bounce rate.
    ///
    /// The response is a rate, so it is clamped into `[0.05, 0.9]` after the
    /// noise (standard deviation 0.05) is added.
    pub fn bounce_rate() -> Self {
        Self {
            n_samples: 200,
            seed: 42,
            coefficients: vec![0.12],
            intercept: 0.1,
            noise_variance: 0.05 * 0.05,
            feature_range: (1.0, 8.0),
            clamp: Some(ResponseClamp::new(0.05, 0.9)),
        }
    }

    /// Number of features each record carries.
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Standard deviation of the noise distribution.
    pub fn noise_std(&self) -> f64 {
        self.noise_variance.sqrt()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.n_samples == 0 {
            return Err(OptionsError::InvalidSampleCount(self.n_samples));
        }
        if self.coefficients.is_empty() {
            return Err(OptionsError::NoCoefficients);
        }
        if self.coefficients.len() > MAX_FEATURES {
            return Err(OptionsError::TooManyFeatures {
                max: MAX_FEATURES,
                got: self.coefficients.len(),
            });
        }
        if let Some((index, &value)) = self
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite())
        {
            return Err(OptionsError::InvalidCoefficient { index, value });
        }
        if !self.intercept.is_finite() {
            return Err(OptionsError::InvalidIntercept(self.intercept));
        }
        if !self.noise_variance.is_finite() || self.noise_variance < 0.0 {
            return Err(OptionsError::InvalidNoiseVariance(self.noise_variance));
        }
        let (lo, hi) = self.feature_range;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(OptionsError::InvalidFeatureRange { lo, hi });
        }
        if let Some(clamp) = &self.clamp {
            clamp.validate()?;
        }
        Ok(())
    }
}

/// Builder for `GenerationOptions`.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptionsBuilder {
    options: GenerationOptions,
}

impl GenerationOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of options (e.g. a preset).
    pub fn from_options(options: GenerationOptions) -> Self {
        Self { options }
    }

    /// Set the number of records to generate.
    pub fn n_samples(mut self, n: usize) -> Self {
        self.options.n_samples = n;
        self
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = seed;
        self
    }

    /// Set all feature coefficients at once.
    pub fn coefficients(mut self, coefficients: impl Into<Vec<f64>>) -> Self {
        self.options.coefficients = coefficients.into();
        self
    }

    /// Set the intercept.
    pub fn intercept(mut self, intercept: f64) -> Self {
        self.options.intercept = intercept;
        self
    }

    /// Set the noise variance.
    pub fn noise_variance(mut self, variance: f64) -> Self {
        self.options.noise_variance = variance;
        self
    }

    /// Set the noise level as a standard deviation.
    pub fn noise_std(mut self, std: f64) -> Self {
        self.options.noise_variance = std * std;
        self
    }

    /// Set the range features are drawn from.
    pub fn feature_range(mut self, lo: f64, hi: f64) -> Self {
        self.options.feature_range = (lo, hi);
        self
    }

    /// Clamp the observed response into `[lo, hi]`.
    pub fn clamp(mut self, lo: f64, hi: f64) -> Self {
        self.options.clamp = Some(ResponseClamp::new(lo, hi));
        self
    }

    /// Disable response clamping.
    pub fn no_clamp(mut self) -> Self {
        self.options.clamp = None;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<GenerationOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> GenerationOptions {
        self.options
    }
}

/// Configuration for the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Number of outliers to report (default: 5).
    pub top_k: usize,
    /// Whether to compute adjusted R² (default: true).
    pub adjusted_r_squared: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            adjusted_r_squared: true,
        }
    }
}

impl EvaluationOptions {
    /// Create a new builder for evaluation options.
    pub fn builder() -> EvaluationOptionsBuilder {
        EvaluationOptionsBuilder::default()
    }
}

/// Builder for `EvaluationOptions`.
#[derive(Debug, Clone, Default)]
pub struct EvaluationOptionsBuilder {
    options: EvaluationOptions,
}

impl EvaluationOptionsBuilder {
    /// Set how many outliers to report.
    pub fn top_k(mut self, k: usize) -> Self {
        self.options.top_k = k;
        self
    }

    /// Set whether to compute adjusted R².
    pub fn adjusted_r_squared(mut self, compute: bool) -> Self {
        self.options.adjusted_r_squared = compute;
        self
    }

    /// Build the options.
    pub fn build(self) -> EvaluationOptions {
        self.options
    }
}

/// Everything one recomputation needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaygroundParams {
    pub generation: GenerationOptions,
    pub evaluation: EvaluationOptions,
}

impl PlaygroundParams {
    pub fn new(generation: GenerationOptions, evaluation: EvaluationOptions) -> Self {
        Self {
            generation,
            evaluation,
        }
    }

    /// Validate the generation options.
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.generation.validate()
    }
}

impl From<GenerationOptions> for PlaygroundParams {
    fn from(generation: GenerationOptions) -> Self {
        Self {
            generation,
            evaluation: EvaluationOptions::default(),
        }
    }
}
