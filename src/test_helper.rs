use crate::{Color, Fraction, Scalar};

pub fn fraction(f: Scalar) -> Fraction {
    Fraction::new(f).unwrap()
}

pub fn assert_channels_not_decreasing(c1: &Color, c2: &Color) {
    assert!(c1.r <= c2.r, "red decreased from {} to {}", c1, c2);
    assert!(c1.g <= c2.g, "green decreased from {} to {}", c1, c2);
    assert!(c1.b <= c2.b, "blue decreased from {} to {}", c1, c2);
}
