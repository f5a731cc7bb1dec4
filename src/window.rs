use std::f64::consts::PI;

use ndarray::Array1;
use num_traits::{AsPrimitive, Float};

use crate::config::WindowParams;

/// Symmetric Gaussian of `length` points, peaking at the middle sample(s).
///
/// A zero `std` yields the degenerate zero-width Gaussian, 0 at every sample
/// regardless of parity.
pub fn gaussian<T>(length: usize, std: T) -> Array1<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    if length == 0 || std.is_zero() {
        return Array1::zeros(length);
    }

    let two = T::one() + T::one();
    let last: T = (length - 1).as_();
    let center = last / two;
    let denominator = two * std * std;

    Array1::from_shape_fn(length, |i| {
        let i: T = i.as_();
        let n = i - center;
        (-(n * n) / denominator).exp()
    })
}

/// Gaussian window localizing a spectrum around frequency bin `freq`.
///
/// The bell is rotated by `length / 2` so its peak lands on index 0 and its
/// left tail wraps to the end, matching the circular layout of a DFT.
pub fn generate_window(length: usize, freq: usize, params: &WindowParams) -> Array1<f64> {
    let std = freq as f64 / (2.0 * PI * params.factor);
    let mut gauss = gaussian(length, std);

    if params.elevated {
        let floor = params.elevation_floor;
        gauss.mapv_inplace(|w| if w < floor { floor } else { w });
    }

    let half = length / 2;
    Array1::from_shape_fn(length, |j| gauss[(j + half) % length])
}
