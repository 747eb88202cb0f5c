use generic_addition::{driver, sum, Numeric};

// a caller-defined type only needs the conversion
struct Cents(i64);

impl Numeric for Cents {
    fn double_value(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

#[test]
fn test_custom_numeric_type() {
    let prices = vec![Cents(150), Cents(250), Cents(100)];
    assert_eq!(sum(&prices), 5.0);
}

#[test]
fn test_mixed_widths_same_total() {
    assert_eq!(sum(&[1u8, 2, 3]), sum(&[1i64, 2, 3]));
    assert_eq!(sum(&[0.5f32, 0.25]), sum(&[0.5f64, 0.25]));
}

#[test]
fn test_sub_slice() {
    let data = [1, 2, 3, 4, 5];
    assert_eq!(sum(&data[1..4]), 9.0);
    assert_eq!(sum(&data[..0]), 0.0);
}

#[test]
fn test_driver_prints_two_lines() {
    let mut out = Vec::new();
    driver::run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["15.0", "8.0"]);
}
