use std::fmt::Debug;
use std::ops::Add;

mod private {
    pub trait Sealed {}
}

/// A primitive integer or floating point type.
///
/// This is sealed and implemented for every primitive numeric type. The
/// aggregate helpers in this crate seed their accumulators from
/// [`Number::ZERO`], and ranges step by [`Number::ONE`].
pub trait Number:
    private::Sealed + Copy + PartialOrd + Add<Output = Self> + Default + Debug + Send + Sync + 'static
{
    /// The additive identity.
    const ZERO: Self;
    /// The step used by `make_range`.
    const ONE: Self;

    /// How many values `low..=high` holds when stepping by `ONE`. `None` if the
    /// range is empty or cannot be counted in a `usize`.
    fn range_len(low: Self, high: Self) -> Option<usize>;

    /// The value `index` steps of `ONE` above `low`. Only meaningful while the
    /// result lies within `low..=high` for a range counted by `range_len`.
    fn offset(low: Self, index: usize) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Number for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn range_len(low: Self, high: Self) -> Option<usize> {
                    if low > high {
                        return None;
                    }
                    usize::try_from(high.abs_diff(low)).ok()?.checked_add(1)
                }

                fn offset(low: Self, index: usize) -> Self {
                    // The true result is in range, so the truncated index
                    // wraps back onto it.
                    low.wrapping_add(index as $t)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Number for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn range_len(low: Self, high: Self) -> Option<usize> {
                    // Also rejects NaN bounds.
                    if !(low <= high) {
                        return None;
                    }
                    let steps = (high - low).floor();
                    if !steps.is_finite() {
                        return None;
                    }
                    (steps as usize).checked_add(1)
                }

                fn offset(low: Self, index: usize) -> Self {
                    low + index as $t
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);
