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

//! Sample programs for the DFP client library.
//!
//! Each sample is an async function taking a client and printing the results
//! it finds. The clients need a stub implementing the transport, the tests in
//! this crate use an in-memory dataset.

pub mod custom_targeting_service;
pub mod order_service;
pub mod product_service;
pub mod user_service;

use google_ads_dfp::client::{CustomTargetingService, OrderService, ProductService, UserService};

/// The clients used by [run_all_examples].
#[derive(Clone, Debug)]
pub struct Clients {
    pub orders: OrderService,
    pub products: ProductService,
    pub users: UserService,
    pub custom_targeting: CustomTargetingService,
}

/// Runs every sample in sequence, stopping at the first error.
pub async fn run_all_examples(clients: &Clients) -> anyhow::Result<()> {
    let _guard = google_ads_test_utils::tracing::enable_tracing();

    tracing::info!("running get_all_orders example");
    order_service::get_all_orders::sample(&clients.orders).await?;
    tracing::info!("running get_all_products example");
    product_service::get_all_products::sample(&clients.products).await?;
    tracing::info!("running get_all_users example");
    user_service::get_all_users::sample(&clients.users).await?;
    tracing::info!("running get_predefined_custom_targeting_keys_and_values example");
    custom_targeting_service::get_predefined_custom_targeting_keys_and_values::sample(
        &clients.custom_targeting,
    )
    .await?;
    Ok(())
}
