//! Request and response payloads for the demo endpoints.

use serde::{Deserialize, Serialize};

use super::extract::ValidateBody;

/// Body for `POST /error-validation-error`.
///
/// The smallest schema that can demonstrate a constraint failure: one integer
/// field with a lower bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationDemoRequest {
    /// Must be at least [`ValidationDemoRequest::MIN_A`].
    pub a: i64,
}

impl ValidationDemoRequest {
    /// Lower bound on `a`.
    pub const MIN_A: i64 = 10;
}

impl ValidateBody for ValidationDemoRequest {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();
        if self.a < Self::MIN_A {
            issues.push(format!(
                "a: must be greater than or equal to {} (got {})",
                Self::MIN_A,
                self.a
            ));
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// Acknowledgment body for `GET /clickable-log`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
