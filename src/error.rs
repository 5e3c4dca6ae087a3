//! Error type shared by every calculator.

/// Failure raised by a core calculation.
///
/// The core performs no I/O, so these are the only two ways it can fail:
/// a parameter outside its physical domain, or a formula evaluated where it
/// is mathematically undefined.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{operation} undefined for {value}: {reason}")]
    DomainError {
        operation: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ImpactError>;

impl ImpactError {
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, ImpactError::InvalidParameter { .. })
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(self, ImpactError::DomainError { .. })
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ImpactError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(ImpactError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Require a finite, non-negative value.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ImpactError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ImpactError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

/// Require a finite value inside `[min, max]`.
pub(crate) fn ensure_within(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if !value.is_finite() || value < min || value > max {
        return Err(ImpactError::InvalidParameter {
            name,
            value,
            reason: "out of range",
        });
    }
    Ok(value)
}
