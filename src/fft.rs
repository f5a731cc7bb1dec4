use std::sync::Arc;

use nalgebra::Complex;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use rustfft::{Fft, FftPlanner};

/// Forward and inverse FFTs of one length, planned once and shared across rows
#[derive(Clone)]
pub struct FftPlan {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl FftPlan {
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);

        Self {
            len,
            forward,
            inverse,
        }
    }

    // Unnormalized
    pub fn forward(&self, buffer: &mut [Complex<f64>]) {
        if buffer.is_empty() {
            return;
        }
        self.forward.process(buffer);
    }

    // Scaled by 1/N so that `inverse(forward(x)) == x`
    pub fn inverse(&self, buffer: &mut [Complex<f64>]) {
        if buffer.is_empty() {
            return;
        }
        self.inverse.process(buffer);

        let scale = 1.0 / self.len as f64;
        buffer.iter_mut().for_each(|z| *z *= scale);
    }
}

pub trait FourierTransform {
    fn fft(&self) -> Array1<Complex<f64>>;
}

pub trait InverseFourierTransform {
    fn ifft(&self) -> Array1<Complex<f64>>;
}

impl<S> FourierTransform for ArrayBase<S, Ix1>
where
    S: Data<Elem = Complex<f64>>,
{
    fn fft(&self) -> Array1<Complex<f64>> {
        let mut buffer = self.to_vec();
        if !buffer.is_empty() {
            FftPlan::new(buffer.len()).forward(&mut buffer);
        }

        Array1::from_vec(buffer)
    }
}

impl<S> InverseFourierTransform for ArrayBase<S, Ix1>
where
    S: Data<Elem = Complex<f64>>,
{
    fn ifft(&self) -> Array1<Complex<f64>> {
        let mut buffer = self.to_vec();
        if !buffer.is_empty() {
            FftPlan::new(buffer.len()).inverse(&mut buffer);
        }

        Array1::from_vec(buffer)
    }
}
