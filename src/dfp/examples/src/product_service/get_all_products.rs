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
use google_ads_dfp::client::ProductService;

/// Gets all products, returns the number of products found.
pub async fn sample(client: &ProductService) -> anyhow::Result<u32> {
    let statement = StatementBuilder::new()
        .order_by("id", SortOrder::Ascending)
        .limit(SUGGESTED_PAGE_LIMIT);

    let mut pages = client
        .get_products_by_statement()
        .with_statement(statement)
        .by_page();
    while let Some(page) = pages.next().await {
        let page =
            page.with_context(|| format!("failed to get products at offset {}", pages.offset()))?;
        for (i, product) in (page.start_index..).zip(page.results) {
            println!(
                "{i}) Product with ID \"{}\" and name \"{}\" was found.",
                product.id, product.name
            );
        }
    }

    let total = pages.total_result_set_size().unwrap_or_default();
    println!("Number of results found: {total}");
    Ok(total)
}
