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

//! The services available in the `v201609` version of the AdWords API.

use crate::UnknownServiceError;
use crate::signature::{ServiceGroup, ServiceSignature};

/// The API version.
pub const VERSION: &str = "v201609";

macro_rules! services {
    ($($group:ident => [$($name:ident),* $(,)?]),* $(,)?) => {
        /// A service in the `v201609` version of the AdWords API.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Service {
            $($($name,)*)*
        }

        impl Service {
            const ALL: &'static [Service] = &[$($(Service::$name,)*)*];

            /// The service name, for example `CampaignService`.
            pub const fn name(&self) -> &'static str {
                match self {
                    $($(Self::$name => stringify!($name),)*)*
                }
            }

            /// The endpoint category of the service.
            pub const fn group(&self) -> ServiceGroup {
                match self {
                    $($(Self::$name => ServiceGroup::$group,)*)*
                }
            }
        }
    };
}

services! {
    CampaignManagement => [
        AdGroupAdService,
        AdGroupBidModifierService,
        AdGroupCriterionService,
        AdGroupFeedService,
        AdGroupService,
        AdParamService,
        BatchJobService,
        BiddingStrategyService,
        BudgetService,
        CampaignCriterionService,
        CampaignFeedService,
        CampaignService,
        CampaignSharedSetService,
        ConstantDataService,
        ConversionTrackerService,
        CustomerFeedService,
        DataService,
        ExperimentService,
        FeedItemService,
        FeedMappingService,
        FeedService,
        LabelService,
        LocationCriterionService,
        MediaService,
        OfflineConversionFeedService,
        OfflineCallConversionFeedService,
        ReportDefinitionService,
        SharedCriterionService,
        SharedSetService,
        DraftService,
        DraftAsyncErrorService,
        TrialService,
        TrialAsyncErrorService,
        AdCustomizerFeedService,
        AdGroupExtensionSettingService,
        CampaignExtensionSettingService,
        CustomerExtensionSettingService,
    ],
    Billing => [BudgetOrderService],
    Remarketing => [AdwordsUserListService],
    Optimization => [TargetingIdeaService, TrafficEstimatorService],
    ChangeHistory => [CustomerSyncService],
    AccountManagement => [AccountLabelService, CustomerService, ManagedCustomerService],
}

impl Service {
    /// All the services, in registration order.
    pub fn all() -> &'static [Service] {
        Self::ALL
    }

    /// Finds a service by name.
    ///
    /// The lookup is case sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|s| s.name() == name).copied()
    }

    /// The signature of the service.
    ///
    /// # Example
    /// ```
    /// # use google_ads_adwords::v201609::Service;
    /// let signature = Service::ManagedCustomerService.signature();
    /// assert_eq!(signature.namespace(), "https://adwords.google.com/api/adwords/mcm/v201609");
    /// ```
    pub const fn signature(&self) -> ServiceSignature {
        ServiceSignature::new(VERSION, self.group(), self.name())
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Service {
    type Err = UnknownServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownServiceError::new(VERSION, s))
    }
}

impl From<Service> for ServiceSignature {
    fn from(value: Service) -> Self {
        value.signature()
    }
}
