// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// The fault returned by the service when it rejects a request.
///
/// Malformed statements, missing permissions, and exceeded quotas are all
/// reported this way. The service may report several problems for a single
/// request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ApiFault {
    /// A summary of the problem.
    pub message: String,

    /// The individual errors.
    pub errors: Vec<ApiError>,
}

impl ApiFault {
    /// Sets the value of [message][ApiFault::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [errors][ApiFault::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ApiError>,
    {
        self.errors = v.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if any of the errors has the given `error_string`.
    ///
    /// # Example
    /// ```
    /// # use google_ads_gax::error::fault::{ApiError, ApiFault};
    /// let fault = ApiFault::default().set_errors([
    ///     ApiError::default().set_error_string("PermissionError.PERMISSION_DENIED"),
    /// ]);
    /// assert!(fault.has_error("PermissionError.PERMISSION_DENIED"));
    /// ```
    pub fn has_error(&self, error_string: &str) -> bool {
        self.errors.iter().any(|e| e.error_string == error_string)
    }
}

impl std::fmt::Display for ApiFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        for (i, e) in self.errors.iter().enumerate() {
            let sep = if i == 0 { " [" } else { ", " };
            write!(f, "{sep}{e}")?;
        }
        if !self.errors.is_empty() {
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// A single problem reported by the service.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ApiError {
    /// The error type and reason, for example `StatementError.INVALID_QUERY`.
    pub error_string: String,

    /// The path to the request field that caused the error, if any.
    pub field_path: String,

    /// The value that caused the error, if any.
    pub trigger: String,

    /// The reason code within the error type, for example `INVALID_QUERY`.
    pub reason: String,
}

impl ApiError {
    /// Sets the value of [error_string][ApiError::error_string].
    pub fn set_error_string<T: Into<String>>(mut self, v: T) -> Self {
        self.error_string = v.into();
        self
    }

    /// Sets the value of [field_path][ApiError::field_path].
    pub fn set_field_path<T: Into<String>>(mut self, v: T) -> Self {
        self.field_path = v.into();
        self
    }

    /// Sets the value of [trigger][ApiError::trigger].
    pub fn set_trigger<T: Into<String>>(mut self, v: T) -> Self {
        self.trigger = v.into();
        self
    }

    /// Sets the value of [reason][ApiError::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error_string)?;
        if !self.field_path.is_empty() {
            write!(f, " @ {}", self.field_path)?;
        }
        if !self.trigger.is_empty() {
            write!(f, "; trigger:'{}'", self.trigger)?;
        }
        Ok(())
    }
}
