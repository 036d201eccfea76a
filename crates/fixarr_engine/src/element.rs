/* 📖 # Why an Element trait instead of generic num bounds?

The array only needs four facts about its element type: the additive identity, an addition
that reports overflow instead of wrapping, whether the type is integral, and parity.
Spelling them out as one small trait keeps the numeric semantics of every operation explicit.
Integer addition never wraps. Floats keep IEEE-754 addition and have no parity.
*/

use std::fmt::Debug;

/// Broad numeric category of an element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCategory {
    /// Signed or unsigned primitive integer.
    Integral,
    /// IEEE-754 floating point.
    Floating,
}

/// Numeric element storable in a [`FixedArray`](crate::FixedArray).
pub trait Element: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Additive identity, used to seed accumulation.
    const ZERO: Self;
    /// Name reported in errors.
    const TYPE_NAME: &'static str;
    /// Whether integer-only operations apply.
    const CATEGORY: ElementCategory;

    /// Add two elements with the type's own arithmetic.
    ///
    /// Returns `None` when integer addition leaves the representable range.
    /// Floating point addition always succeeds (overflow yields infinity).
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// `Some(true)` if `self mod 2 == 0`, `None` for non-integral types.
    fn is_even(self) -> Option<bool>;
}

macro_rules! impl_integral_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;
                const TYPE_NAME: &'static str = stringify!($t);
                const CATEGORY: ElementCategory = ElementCategory::Integral;

                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline]
                fn is_even(self) -> Option<bool> {
                    Some(self % 2 == 0)
                }
            }
        )*
    };
}

macro_rules! impl_floating_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0.0;
                const TYPE_NAME: &'static str = stringify!($t);
                const CATEGORY: ElementCategory = ElementCategory::Floating;

                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn is_even(self) -> Option<bool> {
                    None
                }
            }
        )*
    };
}

impl_integral_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_floating_element!(f32, f64);
