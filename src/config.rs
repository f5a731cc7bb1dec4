use crate::error::{Error, Result};

pub const DEFAULT_FREQUENCY_RANGE: (f64, f64) = (0.0, 800.0);
pub const DEFAULT_FRATE: usize = 1;
pub const DEFAULT_FACTOR: f64 = 1.0;
pub const DEFAULT_ELEVATION_FLOOR: f64 = 1e-7;

// Shape of the frequency-localizing Gaussian
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowParams {
    /// Width scaling: the standard deviation is `freq / (2π · factor)`
    pub factor: f64,
    /// Clamp small weights up to `elevation_floor`
    pub elevated: bool,
    pub elevation_floor: f64,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            factor: DEFAULT_FACTOR,
            elevated: true,
            elevation_floor: DEFAULT_ELEVATION_FLOOR,
        }
    }
}

impl WindowParams {
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_elevation(mut self, elevation_floor: f64) -> Self {
        self.elevated = true;
        self.elevation_floor = elevation_floor;
        self
    }

    pub fn without_elevation(mut self) -> Self {
        self.elevated = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() || self.factor <= 0.0 {
            return Err(Error::DegenerateInput {
                parameter: "factor",
                reason: format!("expected a positive finite value, got {}", self.factor),
            });
        }
        if self.elevated && (!self.elevation_floor.is_finite() || self.elevation_floor < 0.0) {
            return Err(Error::DegenerateInput {
                parameter: "elevation_floor",
                reason: format!(
                    "expected a non-negative finite value, got {}",
                    self.elevation_floor
                ),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct STransformConfig {
    /// Analysis band `(low, high)` in Hz
    pub frange: (f64, f64),
    /// Bins skipped between successive rows
    pub frate: usize,
    pub window: WindowParams,
}

impl Default for STransformConfig {
    fn default() -> Self {
        Self {
            frange: DEFAULT_FREQUENCY_RANGE,
            frate: DEFAULT_FRATE,
            window: WindowParams::default(),
        }
    }
}

impl STransformConfig {
    pub fn with_frange(mut self, low: f64, high: f64) -> Self {
        self.frange = (low, high);
        self
    }

    pub fn with_frate(mut self, frate: usize) -> Self {
        self.frate = frate;
        self
    }

    pub fn with_window(mut self, window: WindowParams) -> Self {
        self.window = window;
        self
    }
}
