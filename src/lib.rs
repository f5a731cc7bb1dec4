pub mod config;
pub mod error;
pub mod fft;
pub mod inverse;
pub mod s_transform;
pub mod window;

pub use config::{STransformConfig, WindowParams};
pub use error::{Error, Result};
pub use inverse::{inverse_s, inverse_s_with, InverseSTransform};
pub use s_transform::{
    dominant_row, row_magnitudes, s_transform, FrequencyBins, STransform, SpectrogramTable,
};
pub use window::{gaussian, generate_window};
