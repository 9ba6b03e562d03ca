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

//! Google Ads API client library for Rust - AdWords service registry.
//!
//! AdWords groups its services into endpoint categories, and each category
//! has its own SOAP namespace. This crate maps each service of a given API
//! version to its [signature][signature::ServiceSignature], which transports
//! use to address the requests.
//!
//! # Example
//! ```
//! use google_ads_adwords::v201609::Service;
//! let signature = Service::CampaignService.signature();
//! assert_eq!(
//!     signature.namespace(),
//!     "https://adwords.google.com/api/adwords/cm/v201609"
//! );
//! ```

pub mod signature;
pub mod v201609;

/// The error returned when looking up an unknown service name.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("unknown AdWords {version} service: {name}")]
pub struct UnknownServiceError {
    version: &'static str,
    name: String,
}

impl UnknownServiceError {
    pub(crate) fn new<T: Into<String>>(version: &'static str, name: T) -> Self {
        Self {
            version,
            name: name.into(),
        }
    }

    /// The name that failed the lookup.
    pub fn name(&self) -> &str {
        &self.name
    }
}
