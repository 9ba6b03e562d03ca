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

//! An in-memory dataset to implement fake stubs.
//!
//! Fake stubs answer `get*ByStatement` calls by slicing the dataset with the
//! statement's `LIMIT` and `OFFSET`, the way the service does.

use gax::statement::{SUGGESTED_PAGE_LIMIT, Statement};
use std::sync::Mutex;

/// One page of a [Dataset].
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetPage<T> {
    pub start_index: u32,
    pub total_result_set_size: u32,
    pub results: Vec<T>,
}

/// A fixed list of items served page by page.
///
/// The dataset also records the statements it receives, so tests can verify
/// the queries sent by the code under test.
///
/// # Example
/// ```
/// use gax::statement::StatementBuilder;
/// use google_ads_test_utils::dataset::Dataset;
/// let dataset = Dataset::new(0..5);
/// let page = dataset.page(&StatementBuilder::new().limit(2).with_offset(4).build());
/// assert_eq!(page.start_index, 4);
/// assert_eq!(page.total_result_set_size, 5);
/// assert_eq!(page.results, vec![4]);
/// ```
#[derive(Debug)]
pub struct Dataset<T> {
    items: Vec<T>,
    statements: Mutex<Vec<Statement>>,
}

impl<T: Clone> Dataset<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self {
            items: items.into_iter().collect(),
            statements: Mutex::new(Vec::new()),
        }
    }

    /// The number of items in the dataset.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the page selected by `statement`.
    ///
    /// A statement without a limit gets [SUGGESTED_PAGE_LIMIT] items. An
    /// offset past the end returns an empty page with the correct total.
    pub fn page(&self, statement: &Statement) -> DatasetPage<T> {
        self.statements.lock().unwrap().push(statement.clone());
        let offset = statement.offset.unwrap_or(0) as usize;
        let limit = statement.limit.unwrap_or(SUGGESTED_PAGE_LIMIT) as usize;
        let results = self
            .items
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        DatasetPage {
            start_index: offset as u32,
            total_result_set_size: self.items.len() as u32,
            results,
        }
    }

    /// The statements received so far.
    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    /// The offsets of the statements received so far.
    pub fn offsets(&self) -> Vec<u32> {
        self.statements
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.offset.unwrap_or(0))
            .collect()
    }
}
