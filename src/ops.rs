use crate::numeric::Numeric;

/// Sums a slice of numbers as `f64`, left to right.
///
/// An empty slice sums to `0.0`.
pub fn sum<T: Numeric>(numbers: &[T]) -> f64 {
    let mut sum = 0.0;
    for n in numbers.iter() {
        sum += n.double_value();
    }
    tracing::trace!(len = numbers.len(), total = sum, "summed");
    return sum;
}
