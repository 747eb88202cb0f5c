use std::io::{self, Write};

use crate::ops::sum;

/// Sums a fixed integer list and a fixed float list, one line each.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let ints: Vec<i32> = vec![1, 2, 3, 4, 5];
    let int_sum = sum(&ints);
    tracing::debug!(int_sum, "summed ints");
    // {:?} keeps the trailing .0
    writeln!(out, "{:?}", int_sum)?;

    let doubles: Vec<f64> = vec![1.5, 2.3, 4.2];
    let double_sum = sum(&doubles);
    tracing::debug!(double_sum, "summed doubles");
    writeln!(out, "{:?}", double_sum)?;

    Ok(())
}
