//! Currency rounding helpers

/// One cent
pub const CENT: f64 = 0.01;

/// Round to 2 decimal places (cents), half away from zero
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Whether two amounts agree to within a cent
pub fn within_cent(a: f64, b: f64) -> bool {
    (a - b).abs() <= CENT + 1e-9
}
