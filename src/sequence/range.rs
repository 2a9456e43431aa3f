//! Half-open numeric ranges.

use std::ops::Add;

/// Numeric types that [`lay_by`] can step through.
///
/// Implemented for every primitive integer and floating point type.
pub trait Step: Copy + PartialOrd + Add<Output = Self> {
    /// The additive identity.
    const ZERO: Self;

    /// The default step.
    const ONE: Self;

    /// Returns `self + step`, or `None` if the sum is not representable or
    /// does not move away from `self`.
    fn advance(self, step: Self) -> Option<Self>;
}

macro_rules! impl_step_for_integer {
    ($($type:ty),*) => {
        $(
            impl Step for $type {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_step_for_float {
    ($($type:ty),*) => {
        $(
            impl Step for $type {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                #[allow(clippy::float_cmp)]
                fn advance(self, step: Self) -> Option<Self> {
                    let next = self + step;
                    (next != self).then_some(next)
                }
            }
        )*
    };
}

impl_step_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_step_for_float!(f32, f64);

/// Returns `0, 1, 2, ...` up to but excluding `end`.
///
/// # Examples
///
/// ```rust
/// use sheaf::sequence::lay;
///
/// assert_eq!(lay(5), vec![0, 1, 2, 3, 4]);
/// assert!(lay(0).is_empty());
/// assert!(lay(-3).is_empty());
/// ```
pub fn lay<N: Step>(end: N) -> Vec<N> {
    lay_by(end, N::ZERO, N::ONE)
}

/// Returns `start, start + 1, ...` up to but excluding `end`.
///
/// # Examples
///
/// ```rust
/// use sheaf::sequence::lay_from;
///
/// assert_eq!(lay_from(53, 50), vec![50, 51, 52]);
/// ```
pub fn lay_from<N: Step>(end: N, start: N) -> Vec<N> {
    lay_by(end, start, N::ONE)
}

/// Returns `start, start + step, start + 2 * step, ...`, excluding `end`.
///
/// A positive step runs while the value is below `end`, a negative step while
/// it is above `end`. A zero (or `NaN`) step yields an empty vector. Integer
/// ranges stop early rather than overflow, and floating point ranges stop
/// once the step is too small to change the value.
///
/// # Examples
///
/// ```rust
/// use sheaf::sequence::lay_by;
///
/// assert_eq!(lay_by(4, 8, -1), vec![8, 7, 6, 5]);
/// assert_eq!(lay_by(10, 0, 3), vec![0, 3, 6, 9]);
/// assert_eq!(lay_by(1.0, 0.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
/// assert!(lay_by(5, 0, 0).is_empty());
/// ```
pub fn lay_by<N: Step>(end: N, start: N, step: N) -> Vec<N> {
    let ascending = if step > N::ZERO {
        true
    } else if step < N::ZERO {
        false
    } else {
        tracing::trace!("lay called with a zero step");
        return Vec::new();
    };

    let within = |value: N| {
        if ascending {
            value < end
        } else {
            value > end
        }
    };

    let mut values = Vec::new();
    let mut current = Some(start);
    while let Some(value) = current.filter(|value| within(*value)) {
        values.push(value);
        current = value.advance(step);
    }
    values
}
