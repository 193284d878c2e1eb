use thiserror::Error;

/// Errors returned by the pricing operations
///
/// Messages are shown to riders as-is, in Hindi with the English text in
/// parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Distance is NaN, zero or negative
    #[error("कृपया एक वैध दूरी दर्ज करें (Please enter a valid distance)")]
    InvalidInput,
    /// Distance exceeds the 100 km service limit
    #[error("अधिकतम दूरी 100 किमी है (Maximum distance is 100 km)")]
    DistanceTooLarge,
}

impl PricingError {
    /// Machine-readable name used in JSON output
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::DistanceTooLarge => "distance_too_large",
        }
    }

    /// JSON body in the same shape the CLI prints for failed lookups
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "message": self.to_string(),
                "type": self.type_name(),
            }
        })
    }
}
