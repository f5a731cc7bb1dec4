// R. G. Stockwell, L. Mansinha and R. P. Lowe, "Localization of the complex spectrum: the S transform," in IEEE Transactions on Signal Processing, vol. 44, no. 4, pp. 998-1001, April 1996, doi: 10.1109/78.492555.

use log::{debug, trace, warn};
use nalgebra::Complex;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
use ndarray_stats::QuantileExt;

use crate::config::{STransformConfig, WindowParams};
use crate::error::{Error, Result};
use crate::fft::FftPlan;
use crate::window::generate_window;

/// Complex amplitudes, shape `[frequency, time]`, lower frequencies first
pub type SpectrogramTable = Array2<Complex<f64>>;

/// Mapping of a frequency range in Hz onto DFT bins of an `len`-point signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyBins {
    pub low: usize,
    pub high: usize,
    pub step: usize,
    len: usize,
    sample_rate: u32,
}

impl FrequencyBins {
    pub fn new(len: usize, sample_rate: u32, config: &STransformConfig) -> Result<Self> {
        let (low, high) = config.frange;

        if len == 0 {
            return Err(Error::DegenerateInput {
                parameter: "signal",
                reason: "signal is empty".into(),
            });
        }
        if sample_rate == 0 {
            return Err(Error::DegenerateInput {
                parameter: "sample_rate",
                reason: "sample rate must be positive".into(),
            });
        }
        if config.frate == 0 {
            return Err(Error::DegenerateInput {
                parameter: "frate",
                reason: "frequency step must be at least 1".into(),
            });
        }

        let invalid = |reason: String| Error::InvalidRange { low, high, reason };

        if !low.is_finite() || !high.is_finite() {
            return Err(invalid("bounds must be finite".into()));
        }
        if low < 0.0 {
            return Err(invalid("lower bound must be non-negative".into()));
        }
        if low >= high {
            return Err(invalid("lower bound must be below the upper bound".into()));
        }

        // floor(f·N / sr), with the product taken before the division
        let low_bin = (low * len as f64 / sample_rate as f64).floor();
        let high_bin = (high * len as f64 / sample_rate as f64).floor();

        // Offsets past `len` would read beyond the doubled spectrum
        if high_bin > len as f64 {
            return Err(invalid(format!(
                "upper bound maps to bin {high_bin}, beyond bin {len} of a {len}-point signal at {sample_rate} Hz (must stay below {} Hz)",
                (len + 1) as f64 * sample_rate as f64 / len as f64
            )));
        }

        Ok(Self {
            low: low_bin as usize,
            high: high_bin as usize,
            step: config.frate,
            len,
            sample_rate,
        })
    }

    pub fn rows(&self) -> usize {
        (self.high - self.low) / self.step + 1
    }

    /// Spectrum offset (and window frequency) of a row; row 0 is the unshifted DC row
    pub fn offset(&self, row: usize) -> usize {
        if row == 0 {
            0
        } else {
            self.low + row * self.step
        }
    }

    pub fn frequency(&self, row: usize) -> f64 {
        self.offset(row) as f64 * self.sample_rate as f64 / self.len as f64
    }

    pub fn frequency_axis(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.rows(), |row| self.frequency(row))
    }
}

pub trait STransform {
    // Stockwell Transform over a frequency band
    // Computations are done in the Fourier Transform form
    fn st(&self, sample_rate: u32, config: &STransformConfig) -> Result<SpectrogramTable>;
}

impl<S, A> STransform for ArrayBase<S, Ix1>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
{
    fn st(&self, sample_rate: u32, config: &STransformConfig) -> Result<SpectrogramTable> {
        s_transform(self, sample_rate, config)
    }
}

pub fn s_transform<S, A>(
    ts: &ArrayBase<S, Ix1>,
    sample_rate: u32,
    config: &STransformConfig,
) -> Result<SpectrogramTable>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
{
    let n = ts.len();
    let bins = FrequencyBins::new(n, sample_rate, config)?;
    config.window.validate()?;

    debug!(
        "S-transform of {} samples at {} Hz: bins {}..={} step {} ({} rows)",
        n,
        sample_rate,
        bins.low,
        bins.high,
        bins.step,
        bins.rows()
    );
    if bins.high > n / 2 {
        warn!(
            "bin {} is above the Nyquist bin {}, upper rows analyze mirrored negative frequencies",
            bins.high,
            n / 2
        );
    }

    let plan = FftPlan::new(n);

    // Compute FFT of signal
    let mut spectrum = ts.iter().map(|&x| x.into()).collect::<Vec<Complex<f64>>>();
    plan.forward(&mut spectrum);

    let mut table = Array2::zeros((bins.rows(), n));
    fill_rows(&mut table, &spectrum, &bins, &config.window, &plan);

    Ok(table)
}

/// One row of the table: the spectrum rotated to the row's offset, weighted by
/// the frequency-scaled Gaussian and brought back to the time domain.
pub fn transform_row(
    spectrum: &[Complex<f64>],
    bins: &FrequencyBins,
    row: usize,
    params: &WindowParams,
    plan: &FftPlan,
) -> Array1<Complex<f64>> {
    let n = spectrum.len();
    let offset = bins.offset(row);
    let window = generate_window(n, offset, params);

    trace!("row {row}: spectrum offset {offset}");

    // `offset <= n`, so a single wrap stands in for slicing `spectrum ++ spectrum`
    let mut filtered = window
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let mut k = i + offset;
            if k >= n {
                k -= n;
            }
            spectrum[k] * w
        })
        .collect::<Vec<Complex<f64>>>();

    plan.inverse(&mut filtered);

    Array1::from_vec(filtered)
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(
    table: &mut SpectrogramTable,
    spectrum: &[Complex<f64>],
    bins: &FrequencyBins,
    params: &WindowParams,
    plan: &FftPlan,
) {
    for (row, mut out) in table.axis_iter_mut(Axis(0)).enumerate() {
        out.assign(&transform_row(spectrum, bins, row, params, plan));
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(
    table: &mut SpectrogramTable,
    spectrum: &[Complex<f64>],
    bins: &FrequencyBins,
    params: &WindowParams,
    plan: &FftPlan,
) {
    use ndarray::parallel::prelude::*;

    table
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut out)| {
            out.assign(&transform_row(spectrum, bins, row, params, plan));
        });
}

/// Mean magnitude of every row
pub fn row_magnitudes<S>(table: &ArrayBase<S, Ix2>) -> Result<Array1<f64>>
where
    S: Data<Elem = Complex<f64>>,
{
    table
        .mapv(|z| z.norm())
        .mean_axis(Axis(1))
        .filter(|means| !means.is_empty())
        .ok_or_else(|| Error::DegenerateInput {
            parameter: "table",
            reason: format!("cannot average rows of a {:?} table", table.dim()),
        })
}

/// Row holding the most energy on average
pub fn dominant_row<S>(table: &ArrayBase<S, Ix2>) -> Result<usize>
where
    S: Data<Elem = Complex<f64>>,
{
    row_magnitudes(table)?
        .argmax_skipnan()
        .map_err(|e| Error::DegenerateInput {
            parameter: "table",
            reason: e.to_string(),
        })
}
