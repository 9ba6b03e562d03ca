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

mod core_error;
pub use core_error::*;

/// Errors and error details returned by the Ads services.
///
/// The client libraries distinguish between errors detected while trying to
/// send a request (e.g. cannot open a connection), errors trying to receive a
/// response, and errors returned by the service itself. The service reports
/// its errors as an [ApiFault][fault::ApiFault], a message and a list of
/// individual [ApiError][fault::ApiError] values.
///
/// # Examples
///
/// ```
/// use google_ads_gax::error::Error;
/// fn handle_error(e: Error) {
///     if let Some(fault) = e.fault() {
///         for error in &fault.errors {
///             println!("the service reported {} on {}", error.error_string, error.field_path);
///         }
///     }
/// }
/// ```
pub mod fault;
