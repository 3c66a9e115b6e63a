//! Fixed-size vectors used for positions, velocities and forces.

/// A point, velocity or force in `DIM`-dimensional space.
pub type Vector<const DIM: usize> = [f32; DIM];

/// Returns the zero vector.
#[must_use]
pub const fn zero<const DIM: usize>() -> Vector<DIM> {
    [0.0; DIM]
}

/// Returns `a - b`.
#[must_use]
pub fn sub<const DIM: usize>(a: &Vector<DIM>, b: &Vector<DIM>) -> Vector<DIM> {
    let mut out = [0.0; DIM];
    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = x - y;
    }
    out
}

/// Adds `b` to `a` in place.
pub fn add_assign<const DIM: usize>(a: &mut Vector<DIM>, b: &Vector<DIM>) {
    for (x, &y) in a.iter_mut().zip(b.iter()) {
        *x += y;
    }
}

/// Returns `a * s`.
#[must_use]
pub fn scaled<const DIM: usize>(a: &Vector<DIM>, s: f32) -> Vector<DIM> {
    a.map(|x| x * s)
}

/// Returns the squared Euclidean norm of `a`.
#[must_use]
pub fn norm_sq<const DIM: usize>(a: &Vector<DIM>) -> f32 {
    a.iter().map(|x| x * x).sum()
}

/// Returns the Euclidean norm of `a`.
#[must_use]
pub fn norm<const DIM: usize>(a: &Vector<DIM>) -> f32 {
    norm_sq(a).sqrt()
}

/// Whether every component of `a` is finite.
#[must_use]
pub fn is_finite<const DIM: usize>(a: &Vector<DIM>) -> bool {
    a.iter().all(|x| x.is_finite())
}
