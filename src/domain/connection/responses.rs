use serde::{Deserialize, Serialize};

/// Outcome of validating a draft against its data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub valid: bool,
    #[serde(default)]
    pub message: String,
}

impl TestResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Falls back to a generic text when the backend sent no message.
    pub fn display_message(&self) -> &str {
        match (self.message.is_empty(), self.valid) {
            (false, _) => &self.message,
            (true, true) => "Connection successful!",
            (true, false) => "Connection failed!",
        }
    }
}

/// Acknowledgement of a re-index trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReindexResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ReindexResponse {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Backend message, ignoring blank ones.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TestResult::success("Authenticated as octocat"), "Authenticated as octocat")]
    #[case(TestResult::success(""), "Connection successful!")]
    #[case(TestResult::failure(""), "Connection failed!")]
    #[case(TestResult::failure("bad token"), "bad token")]
    fn display_message_falls_back_when_empty(#[case] result: TestResult, #[case] expected: &str) {
        assert_eq!(result.display_message(), expected);
    }

    #[rstest]
    #[case(ReindexResponse::with_message("queued"), Some("queued"))]
    #[case(ReindexResponse::with_message("  "), None)]
    #[case(ReindexResponse::default(), None)]
    fn reindex_message_ignores_blank(
        #[case] response: ReindexResponse,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(response.message(), expected);
    }

    #[test]
    fn test_result_without_message_deserializes() {
        let result: TestResult = serde_json::from_str(r#"{"valid": true}"#).unwrap();
        assert!(result.valid);
        assert!(result.message.is_empty());
    }
}
