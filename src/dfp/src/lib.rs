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

//! Google Ads API client library for Rust - DoubleClick for Publishers.
//!
//! This crate contains the clients for the v201605 DFP listing services:
//! orders, products, users, and custom targeting. Each client sends statements
//! through a stub, and walks the paged results with the paginators from
//! [gax::paginator].
//!
//! The clients do not include a SOAP transport. Applications provide one by
//! implementing the traits in [stub], and tests can mock the same traits.
//!
//! # Example
//! ```
//! # use google_ads_dfp::client::OrderService;
//! # use gax::statement::{SortOrder, StatementBuilder, SUGGESTED_PAGE_LIMIT};
//! # async fn sample(client: &OrderService) -> anyhow::Result<()> {
//! let statement = StatementBuilder::new()
//!     .order_by("id", SortOrder::Ascending)
//!     .limit(SUGGESTED_PAGE_LIMIT);
//! let mut items = client
//!     .get_orders_by_statement()
//!     .with_statement(statement)
//!     .by_item();
//! while let Some(order) = items.next().await.transpose()? {
//!     println!("{order:?}");
//! }
//! # Ok(()) }
//! ```

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod model;
pub mod service;
pub mod stub;

pub(crate) mod tracing;

/// The environment variable with the default network code.
pub const NETWORK_CODE_VAR: &str = "DFP_NETWORK_CODE";

/// The environment variable with the default application name.
pub const APPLICATION_NAME_VAR: &str = "DFP_APPLICATION_NAME";

/// The application name used when none is configured.
pub const DEFAULT_APPLICATION_NAME: &str = "google-ads-rust-dfp";
