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
use google_ads_dfp::client::CustomTargetingService;
use google_ads_dfp::model::CustomTargetingKeyType;

/// Gets the predefined custom targeting keys, and then the values of each key.
///
/// A failure fetching the values of one key is reported and the sample moves
/// on to the next key. Returns the number of values found.
pub async fn sample(client: &CustomTargetingService) -> anyhow::Result<u32> {
    let key_ids = predefined_key_ids(client).await?;

    // Each key gets a fresh builder, starting at offset zero.
    let values = StatementBuilder::new()
        .where_clause("customTargetingKeyId = :customTargetingKeyId")
        .order_by("id", SortOrder::Ascending)
        .limit(SUGGESTED_PAGE_LIMIT);

    let mut found = 0;
    for key_id in key_ids {
        match print_values(client, values.clone().add_value("customTargetingKeyId", key_id)).await
        {
            Ok(total) => found += total,
            Err(e) => println!("Failed to get custom targeting values. Exception says \"{e:#}\""),
        }
    }
    Ok(found)
}

/// Prints the predefined custom targeting keys and returns their ids.
pub async fn predefined_key_ids(client: &CustomTargetingService) -> anyhow::Result<Vec<i64>> {
    let statement = StatementBuilder::new()
        .where_clause("type = :type")
        .order_by("id", SortOrder::Ascending)
        .limit(SUGGESTED_PAGE_LIMIT)
        .add_value("type", CustomTargetingKeyType::Predefined);

    let mut ids = Vec::new();
    let mut pages = client
        .get_custom_targeting_keys_by_statement()
        .with_statement(statement)
        .by_page();
    while let Some(page) = pages.next().await {
        let page = page.with_context(|| {
            format!(
                "failed to get custom targeting keys at offset {}",
                pages.offset()
            )
        })?;
        for (i, key) in (page.start_index..).zip(page.results) {
            println!(
                "{i}) Custom targeting key with ID \"{}\", name \"{}\", and display name \"{}\" was found.",
                key.id, key.name, key.display_name
            );
            ids.push(key.id);
        }
    }
    Ok(ids)
}

async fn print_values(
    client: &CustomTargetingService,
    statement: StatementBuilder,
) -> anyhow::Result<u32> {
    let mut pages = client
        .get_custom_targeting_values_by_statement()
        .with_statement(statement)
        .by_page();
    while let Some(page) = pages.next().await {
        let page = page.with_context(|| {
            format!(
                "failed to get custom targeting values at offset {}",
                pages.offset()
            )
        })?;
        for (i, value) in (page.start_index..).zip(page.results) {
            println!(
                "{i}) Custom targeting value with ID \"{}\", name \"{}\", display name \"{}\", and custom targeting key ID \"{}\" was found.",
                value.id, value.name, value.display_name, value.custom_targeting_key_id
            );
        }
    }

    let total = pages.total_result_set_size().unwrap_or_default();
    println!("Number of results found: {total}");
    Ok(total)
}
