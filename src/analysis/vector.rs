// Vector primitives for the cohesion computation.
//
// Everything operates on f64 slices of equal dimensionality — the store
// guarantees that for vectors drawn from one corpus.

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// L2 norm.
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Scale `v` to unit length. A zero vector is returned unchanged — callers
/// treat it as carrying no direction.
pub fn l2_normalize(v: &[f64]) -> Vec<f64> {
    let mag = magnitude(v);
    if mag < f64::EPSILON {
        return v.to_vec();
    }
    v.iter().map(|x| x / mag).collect()
}

/// Arithmetic mean of a non-empty set of equal-length vectors.
/// Returns an empty vector for empty input.
pub fn mean_vector(vectors: &[Vec<f64>]) -> Vec<f64> {
    let Some(first) = vectors.first() else {
        return Vec::new();
    };

    let n = vectors.len() as f64;
    let mut mean = vec![0.0_f64; first.len()];
    for v in vectors {
        for (acc, &x) in mean.iter_mut().zip(v.iter()) {
            *acc += x;
        }
    }
    for acc in &mut mean {
        *acc /= n;
    }
    mean
}
