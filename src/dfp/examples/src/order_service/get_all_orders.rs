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

use anyhow::Context;
use gax::statement::{SUGGESTED_PAGE_LIMIT, SortOrder, StatementBuilder};
use google_ads_dfp::client::OrderService;

/// Gets all orders, returns the number of orders found.
pub async fn sample(client: &OrderService) -> anyhow::Result<u32> {
    let statement = StatementBuilder::new()
        .order_by("id", SortOrder::Ascending)
        .limit(SUGGESTED_PAGE_LIMIT);

    let mut pages = client
        .get_orders_by_statement()
        .with_statement(statement)
        .by_page();
    while let Some(page) = pages.next().await {
        let page =
            page.with_context(|| format!("failed to get orders at offset {}", pages.offset()))?;
        for (i, order) in (page.start_index..).zip(page.results) {
            println!(
                "{i}) Order with ID \"{}\" and name \"{}\" was found.",
                order.id, order.name
            );
        }
    }

    let total = pages.total_result_set_size().unwrap_or_default();
    println!("Number of results found: {total}");
    Ok(total)
}
