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

//! The DFP services supported by this library.
//!
//! Transports use this registry to find the SOAP namespace and the endpoint
//! path of each service.
//!
//! # Example
//! ```
//! # use google_ads_dfp::service::DfpService;
//! let service: DfpService = "OrderService".parse()?;
//! assert_eq!(service.version(), "v201605");
//! assert_eq!(
//!     service.endpoint_url(google_ads_dfp::service::DEFAULT_ENDPOINT),
//!     "https://ads.google.com/apis/ads/publisher/v201605/OrderService"
//! );
//! # Ok::<(), google_ads_dfp::service::UnknownServiceError>(())
//! ```

/// The API version implemented by the clients in this crate.
pub const VERSION: &str = "v201605";

/// The default endpoint for all DFP services.
pub const DEFAULT_ENDPOINT: &str = "https://ads.google.com";

/// A DFP service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DfpService {
    CustomTargetingService,
    OrderService,
    ProductService,
    UserService,
}

const ALL: [DfpService; 4] = [
    DfpService::CustomTargetingService,
    DfpService::OrderService,
    DfpService::ProductService,
    DfpService::UserService,
];

impl DfpService {
    /// All the services, in alphabetical order.
    pub fn all() -> &'static [DfpService] {
        &ALL
    }

    /// The service name, as used in the endpoint path.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CustomTargetingService => "CustomTargetingService",
            Self::OrderService => "OrderService",
            Self::ProductService => "ProductService",
            Self::UserService => "UserService",
        }
    }

    /// The API version.
    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// The XML namespace of the SOAP messages.
    pub fn namespace(&self) -> String {
        format!("https://www.google.com/apis/ads/publisher/{}", self.version())
    }

    /// The path of the service, relative to the endpoint.
    pub fn endpoint_path(&self) -> String {
        format!("/apis/ads/publisher/{}/{}", self.version(), self.name())
    }

    /// The full URL of the service for the given endpoint.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", endpoint.trim_end_matches('/'), self.endpoint_path())
    }
}

impl std::fmt::Display for DfpService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when parsing an unknown service name.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("unknown DFP service: {0}")]
pub struct UnknownServiceError(String);

impl std::str::FromStr for DfpService {
    type Err = UnknownServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .find(|svc| svc.name() == s)
            .copied()
            .ok_or_else(|| UnknownServiceError(s.to_string()))
    }
}
