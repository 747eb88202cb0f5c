use num::{BigInt, BigUint};
use num_traits::ToPrimitive;

/// Values that can be widened to an `f64`.
pub trait Numeric {
    fn double_value(&self) -> f64;
}

// every primitive gets the same plain widening cast
macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn double_value(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    }
}

impl_numeric!(i8, i16, i32, i64, i128, isize);
impl_numeric!(u8, u16, u32, u64, u128, usize);
impl_numeric!(f32, f64);

// to_f64 saturates to +-inf for big magnitudes
impl Numeric for BigInt {
    fn double_value(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Numeric for BigUint {
    fn double_value(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    #[inline]
    fn double_value(&self) -> f64 {
        (**self).double_value()
    }
}
