#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("{0} is unavailable")]
    DomUnavailable(&'static str),
    #[error("element `{selector}` was not found")]
    MissingElement { selector: String },
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to decode configuration: {0}")]
    ConfigDecode(#[from] serde_json::Error),
    #[error("newsletter request failed: {0}")]
    Network(String),
}

pub type HubResult<T> = Result<T, HubError>;

impl HubError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    /// Missing elements are expected on trimmed-down pages and only mean the
    /// component has nothing to bind to.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_is_distinguished_from_hard_failures() {
        let missing = HubError::missing("#backToTop");
        assert!(missing.is_missing_element());
        assert_eq!(missing.to_string(), "element `#backToTop` was not found");

        let js = HubError::Js("observe threw".to_string());
        assert!(!js.is_missing_element());
    }

    #[test]
    fn serde_errors_convert_into_config_decode() {
        let error = serde_json::from_str::<serde_json::Value>("{").map_err(HubError::from);
        assert!(matches!(error, Err(HubError::ConfigDecode(_))));
    }

    #[test]
    fn config_failures_split_into_invalid_and_decode() {
        let invalid = HubError::InvalidConfig("reveal.threshold must be within 0..=1".to_string());
        assert_eq!(
            invalid.to_string(),
            "invalid configuration: reveal.threshold must be within 0..=1"
        );
        assert!(!invalid.is_missing_element());

        let decode = crate::HubConfig::from_json("\"not an object\"").map(|_| ());
        assert!(matches!(decode, Err(HubError::ConfigDecode(_))));
    }
}
