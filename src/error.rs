use thiserror::Error;

/// Errors produced while composing beverages or broadcasting an order.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("beverage description must not be empty")]
    BlankDescription,

    #[error("cost must be non-negative, got {value}")]
    NegativeCost { value: f64 },

    #[error("decorator chain depth {depth} exceeds the limit of {limit}")]
    ChainTooDeep { depth: usize, limit: usize },

    #[error("observer '{name}' failed to accept delivery: {reason}")]
    DeliveryFailed { name: String, reason: String },
}

impl OrderError {
    pub fn delivery_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DeliveryFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
