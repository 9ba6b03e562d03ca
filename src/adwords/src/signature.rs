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

//! Service signatures: the version, endpoint category and name of a service.

/// The default endpoint for all AdWords services.
pub const DEFAULT_ENDPOINT: &str = "https://adwords.google.com";

/// The endpoint category of an AdWords service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ServiceGroup {
    /// Campaign management, `cm`.
    CampaignManagement,
    /// Billing, `billing`.
    Billing,
    /// Remarketing, `rm`.
    Remarketing,
    /// Optimization, `o`.
    Optimization,
    /// Change history, `ch`.
    ChangeHistory,
    /// Account management, `mcm`.
    AccountManagement,
}

impl ServiceGroup {
    /// The path segment used in the namespace and endpoint of the services.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignManagement => "cm",
            Self::Billing => "billing",
            Self::Remarketing => "rm",
            Self::Optimization => "o",
            Self::ChangeHistory => "ch",
            Self::AccountManagement => "mcm",
        }
    }
}

impl std::fmt::Display for ServiceGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a service in a specific API version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ServiceSignature {
    version: &'static str,
    group: ServiceGroup,
    service_name: &'static str,
}

impl ServiceSignature {
    pub const fn new(version: &'static str, group: ServiceGroup, service_name: &'static str) -> Self {
        Self {
            version,
            group,
            service_name,
        }
    }

    /// The API version, for example `v201609`.
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// The endpoint category.
    pub fn group(&self) -> ServiceGroup {
        self.group
    }

    /// The service name, for example `CampaignService`.
    pub fn service_name(&self) -> &'static str {
        self.service_name
    }

    /// The XML namespace of the SOAP messages.
    ///
    /// # Example
    /// ```
    /// # use google_ads_adwords::signature::{ServiceGroup, ServiceSignature};
    /// let signature = ServiceSignature::new("v201609", ServiceGroup::Optimization, "TargetingIdeaService");
    /// assert_eq!(signature.namespace(), "https://adwords.google.com/api/adwords/o/v201609");
    /// ```
    pub fn namespace(&self) -> String {
        format!(
            "https://adwords.google.com/api/adwords/{}/{}",
            self.group, self.version
        )
    }

    /// The path of the service, relative to the endpoint.
    pub fn endpoint_path(&self) -> String {
        format!(
            "/api/adwords/{}/{}/{}",
            self.group, self.version, self.service_name
        )
    }

    /// The full URL of the service for the given endpoint.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", endpoint.trim_end_matches('/'), self.endpoint_path())
    }
}

impl std::fmt::Display for ServiceSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.version, self.service_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(ServiceGroup::CampaignManagement, "cm")]
    #[test_case(ServiceGroup::Billing, "billing")]
    #[test_case(ServiceGroup::Remarketing, "rm")]
    #[test_case(ServiceGroup::Optimization, "o")]
    #[test_case(ServiceGroup::ChangeHistory, "ch")]
    #[test_case(ServiceGroup::AccountManagement, "mcm")]
    fn group(group: ServiceGroup, want: &str) {
        assert_eq!(group.as_str(), want);
        assert_eq!(group.to_string(), want);
    }

    #[test]
    fn signature() {
        let signature =
            ServiceSignature::new("v201609", ServiceGroup::Billing, "BudgetOrderService");
        assert_eq!(signature.version(), "v201609");
        assert_eq!(signature.group(), ServiceGroup::Billing);
        assert_eq!(signature.service_name(), "BudgetOrderService");
        assert_eq!(
            signature.namespace(),
            "https://adwords.google.com/api/adwords/billing/v201609"
        );
        assert_eq!(
            signature.endpoint_url(DEFAULT_ENDPOINT),
            "https://adwords.google.com/api/adwords/billing/v201609/BudgetOrderService"
        );
        assert_eq!(signature.to_string(), "billing/v201609/BudgetOrderService");
    }
}
