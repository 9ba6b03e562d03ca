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
use google_ads_dfp::client::UserService;

/// Gets all users, returns the number of users found.
///
/// This sample iterates over the users directly, the paginator tracks the
/// position of each user in the result set.
pub async fn sample(client: &UserService) -> anyhow::Result<u32> {
    let statement = StatementBuilder::new()
        .order_by("id", SortOrder::Ascending)
        .limit(SUGGESTED_PAGE_LIMIT);

    let mut users = client
        .get_users_by_statement()
        .with_statement(statement)
        .by_item();
    while let Some(user) = users.next().await {
        let user =
            user.with_context(|| format!("failed to get users at offset {}", users.offset()))?;
        println!(
            "{}) User with ID = '{}', email = '{}', and role = '{}' was found.",
            users.position().unwrap_or_default(),
            user.id,
            user.email,
            user.role_name
        );
    }

    let total = users.total_result_set_size().unwrap_or_default();
    println!("Number of results found: {total}");
    Ok(total)
}
