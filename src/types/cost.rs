use std::fmt;

/// A newtype wrapper for cost values in USD
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    /// Create a new Cost from a raw value
    #[inline]
    pub fn new(value: f64) -> Self {
        Cost(value)
    }

    /// Format as currency string (e.g., "$1.23")
    pub fn to_formatted_string(&self) -> String {
        // Handle negative zero case
        let formatted_value = if self.0.abs() < 0.005 { 0.00 } else { self.0 };
        format!("${:.2}", formatted_value)
    }

    /// Format with enough precision for per-execution amounts (e.g., "$0.000150")
    pub fn to_precise_string(&self) -> String {
        format!("${:.6}", self.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}
