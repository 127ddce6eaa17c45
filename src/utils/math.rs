use ndarray::{ArrayView1, ArrayViewMut1, ArrayViewMut2, Zip};

/// Plain inner product, accumulated left to right.
pub fn dot_product(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).fold(0.0, |acc, (&x, &y)| acc + x * y)
}

/// `acc[k] += scale * x[k]` for every `k`.
pub fn accumulate_scaled(mut acc: ArrayViewMut1<f64>, x: ArrayView1<f64>, scale: f64) {
    Zip::from(&mut acc).and(&x).for_each(|a, &v| {
        *a += v * scale;
    });
}

/// Applies `tanh` to every element in place.
pub fn tanh_inplace(matrix: &mut ArrayViewMut2<f64>) {
    matrix.mapv_inplace(f64::tanh);
}
