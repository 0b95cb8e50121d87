//! Generated closed-form expression functions.
//!
//! Each function mirrors the operator order of the expression it was generated
//! from, redundant terms included. Rewriting any of them into a simpler but
//! equivalent form changes what the benchmark measures.

/// Simple Power: `x^2 + y^2 + z^2`
pub fn simple_power(x: f64, y: f64, z: f64) -> f64 {
    x.powf(2.0) + y.powf(2.0) + z.powf(2.0)
}

/// Polynomial: `x^4 + 3x^3 + 2x^2 + x + 1`
pub fn polynomial(x: f64) -> f64 {
    x.powf(4.0) + 3.0 * x.powf(3.0) + 2.0 * x.powf(2.0) + x + 1.0
}

/// Trigonometric: `sin(x) + cos(y) + tan(z)`
pub fn trigonometric(x: f64, y: f64, z: f64) -> f64 {
    x.sin() + y.cos() + z.tan()
}

/// Nested Expression: `sqrt((x-a)^2 + (y-b)^2 + (z-c)^2)`
pub fn nested_expression(x: f64, y: f64, z: f64, a: f64, b: f64, c: f64) -> f64 {
    ((-a + x).powf(2.0) + (-b + y).powf(2.0) + (-c + z).powf(2.0)).sqrt()
}

/// Large Expression (50 terms).
///
/// Sums to `x^9 + x^8 + x^7 + x^6 + x^5 + 46x^4 + 46x^3 + 46x^2 + 46x + 1`
/// but is evaluated term by term, left to right.
#[rustfmt::skip]
pub fn large_expression_50_terms(x: f64) -> f64 {
    x.powf(9.0) + x.powf(8.0) + x.powf(7.0) + x.powf(6.0) + x.powf(5.0)
        + 0.0 * x.powf(4.0) + 2.0 * x.powf(4.0) + 3.0 * x.powf(4.0) + 4.0 * x.powf(4.0)
        + 5.0 * x.powf(4.0) + 6.0 * x.powf(4.0) + 7.0 * x.powf(4.0) + 8.0 * x.powf(4.0)
        + 9.0 * x.powf(4.0) + x.powf(4.0) + x.powf(4.0)
        + 0.0 * x.powf(3.0) + 2.0 * x.powf(3.0) + 3.0 * x.powf(3.0) + 4.0 * x.powf(3.0)
        + 5.0 * x.powf(3.0) + 6.0 * x.powf(3.0) + 7.0 * x.powf(3.0) + 8.0 * x.powf(3.0)
        + 9.0 * x.powf(3.0) + x.powf(3.0) + x.powf(3.0)
        + 0.0 * x.powf(2.0) + 2.0 * x.powf(2.0) + 3.0 * x.powf(2.0) + 4.0 * x.powf(2.0)
        + 5.0 * x.powf(2.0) + 6.0 * x.powf(2.0) + 7.0 * x.powf(2.0) + 8.0 * x.powf(2.0)
        + 9.0 * x.powf(2.0) + x.powf(2.0) + x.powf(2.0)
        + x + x + 0.0 * x + 2.0 * x + 3.0 * x + 4.0 * x + 5.0 * x + 6.0 * x + 7.0 * x
        + 8.0 * x + 9.0 * x
        + x.powf(0.0)
}

/// Many Variables (20 vars): `x_0 + x_1 + ... + x_19`
///
/// The generator emits the terms sorted by name, so `x_10..x_19` come before `x_2`.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn many_variables_20_vars(
    x_0: f64, x_1: f64, x_2: f64, x_3: f64, x_4: f64,
    x_5: f64, x_6: f64, x_7: f64, x_8: f64, x_9: f64,
    x_10: f64, x_11: f64, x_12: f64, x_13: f64, x_14: f64,
    x_15: f64, x_16: f64, x_17: f64, x_18: f64, x_19: f64,
) -> f64 {
    x_0 + x_1 + x_10 + x_11 + x_12 + x_13 + x_14 + x_15 + x_16 + x_17 + x_18 + x_19
        + x_2 + x_3 + x_4 + x_5 + x_6 + x_7 + x_8 + x_9
}

/// Distance Formula: `sqrt((x_2-x_1)^2 + (y_2-y_1)^2)`
pub fn distance_formula(x_1: f64, y_1: f64, x_2: f64, y_2: f64) -> f64 {
    ((-x_1 + x_2).powf(2.0) + (-y_1 + y_2).powf(2.0)).sqrt()
}

/// Quadratic Formula, `+` root: `(-b + sqrt(b^2 - 4ac)) / 2a`
pub fn quadratic_formula(a: f64, b: f64, c: f64) -> f64 {
    (-b + (b.powf(2.0) + -4.0 * a * c).sqrt()) / (2.0 * a)
}

/// Kinematics: `u*t + 1/2 * a * t^2`
pub fn kinematics(u: f64, a: f64, t: f64) -> f64 {
    0.5 * a * t.powf(2.0) + t * u
}
