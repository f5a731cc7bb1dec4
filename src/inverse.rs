use log::debug;
use nalgebra::Complex;
use ndarray::{Array1, ArrayBase, Data, Ix2};
use ndarray_stats::QuantileExt;

use crate::config::WindowParams;
use crate::error::{Error, Result};
use crate::fft::{FourierTransform, InverseFourierTransform};
use crate::window::generate_window;

pub trait InverseSTransform {
    // Quick inverse: only the lowest-frequency row is used
    fn ist(&self, low_freq: usize) -> Result<Array1<Complex<f64>>>;
}

impl<S> InverseSTransform for ArrayBase<S, Ix2>
where
    S: Data<Elem = Complex<f64>>,
{
    fn ist(&self, low_freq: usize) -> Result<Array1<Complex<f64>>> {
        inverse_s(self, low_freq)
    }
}

pub fn inverse_s<S>(table: &ArrayBase<S, Ix2>, low_freq: usize) -> Result<Array1<Complex<f64>>>
where
    S: Data<Elem = Complex<f64>>,
{
    inverse_s_with(table, low_freq, &WindowParams::default())
}

/// Approximate time series from row 0 of `table`.
///
/// The row's spectrum is divided by the window that produced it. Elevation-floor
/// weights turn into large gains here, so noise in the tails of the window is
/// amplified accordingly.
pub fn inverse_s_with<S>(
    table: &ArrayBase<S, Ix2>,
    low_freq: usize,
    params: &WindowParams,
) -> Result<Array1<Complex<f64>>>
where
    S: Data<Elem = Complex<f64>>,
{
    let (rows, n) = table.dim();
    if rows == 0 || n == 0 {
        return Err(Error::DegenerateInput {
            parameter: "table",
            reason: format!("cannot invert a {rows}x{n} table"),
        });
    }
    params.validate()?;

    let window = generate_window(n, low_freq, params);
    if let Some(index) = window.iter().position(|&w| w == 0.0) {
        return Err(Error::NumericDomain {
            index,
            freq: low_freq,
        });
    }
    debug!(
        "inverting a {}x{} table at bin {}, smallest divisor {:e}",
        rows,
        n,
        low_freq,
        window.min_skipnan()
    );

    let spectrum = table.row(0).fft();
    let recovered = &spectrum / &window.mapv(|w| Complex::new(w, 0.0));

    Ok(recovered.ifft())
}
