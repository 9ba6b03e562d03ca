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

//! The `get*ByStatement` RPCs return one page of results at a time. Each page
//! reports its start index and the size of the full result set, and the next
//! page is requested by advancing the statement offset by the page size.
//!
//! [Paginator] runs that loop: it fetches a page, advances the offset by the
//! statement limit, and stops once the offset reaches the total reported by
//! the most recent page. [ItemPaginator] flattens the pages into items.
//!
//! # Example
//! ```
//! # use google_ads_gax::paginator::{PageableResponse, Paginator};
//! # use google_ads_gax::statement::{Statement, StatementBuilder};
//! struct NamePage { start_index: u32, total: u32, names: Vec<String> }
//! impl PageableResponse for NamePage {
//!     type PageItem = String;
//!     fn start_index(&self) -> u32 { self.start_index }
//!     fn total_result_set_size(&self) -> u32 { self.total }
//!     fn into_items(self) -> Vec<String> { self.names }
//! }
//!
//! async fn fetch(statement: Statement) -> Result<NamePage, std::io::Error> {
//!     // ... send the statement to the service ...
//! # let start_index = statement.offset.unwrap_or(0);
//! # Ok(NamePage { start_index, total: 2, names: vec!["a".into(), "b".into()] })
//! }
//!
//! # tokio_test::block_on(async {
//! let mut items = Paginator::new(StatementBuilder::new().limit(2), fetch).items();
//! while let Some(name) = items.next().await.transpose()? {
//!     println!("{}) {name}", items.position().unwrap_or_default());
//! }
//! println!("Number of results found: {:?}", items.total_result_set_size());
//! # Ok::<(), std::io::Error>(()) });
//! ```

use crate::statement::{SUGGESTED_PAGE_LIMIT, Statement, StatementBuilder};
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::future::Future;

/// Describes a page returned by a `get*ByStatement` RPC.
pub trait PageableResponse {
    type PageItem: Send;

    /// The index of the first result of this page within the full result set.
    fn start_index(&self) -> u32;

    /// The number of rows matching the statement when the page was fetched.
    ///
    /// The value may change between pages if the underlying data changes.
    fn total_result_set_size(&self) -> u32;

    /// Consumes the page and returns its results, in the order returned by
    /// the service.
    fn into_items(self) -> Vec<Self::PageItem>;
}

type Execute<P, E> = Box<dyn Fn(Statement) -> BoxFuture<'static, Result<P, E>> + Send>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopState {
    Initial,
    HasPage,
    Done,
}

/// Fetches all the pages of a `get*ByStatement` RPC.
///
/// The paginator owns the [StatementBuilder] and advances its offset after
/// each page. It always performs at least one fetch, even if the result set
/// turns out to be empty. Errors are returned once, and end the iteration: the
/// paginator never retries a fetch.
///
/// A paginator cannot be restarted. Create a new one, with a fresh builder, to
/// enumerate the results again.
pub struct Paginator<P, E> {
    builder: StatementBuilder,
    limit: u32,
    state: LoopState,
    total: Option<u32>,
    fetch_count: u32,
    execute: Execute<P, E>,
}

impl<P, E> Paginator<P, E>
where
    P: PageableResponse,
{
    /// Creates a new [Paginator] given the initial statement and a function to
    /// fetch each page.
    ///
    /// If the builder has no limit, or a zero limit, the paginator uses
    /// [SUGGESTED_PAGE_LIMIT].
    pub fn new<F, X>(builder: StatementBuilder, execute: X) -> Self
    where
        X: Fn(Statement) -> F + Send + 'static,
        F: Future<Output = Result<P, E>> + Send + 'static,
    {
        let limit = match builder.limit_value() {
            None | Some(0) => SUGGESTED_PAGE_LIMIT,
            Some(n) => n,
        };
        let execute: Execute<P, E> = Box::new(move |statement| Box::pin(execute(statement)));
        Self {
            builder: builder.limit(limit),
            limit,
            state: LoopState::Initial,
            total: None,
            fetch_count: 0,
            execute,
        }
    }

    /// Fetches the next page.
    ///
    /// Returns `None` once the offset reaches the total reported by the last
    /// page, or after an error.
    pub async fn next(&mut self) -> Option<Result<P, E>> {
        if self.state == LoopState::Done {
            return None;
        }
        let statement = self.builder.build();
        tracing::debug!(
            offset = self.builder.offset(),
            limit = self.limit,
            "fetching page"
        );
        let response = (self.execute)(statement).await;
        self.fetch_count += 1;
        let page = match response {
            Ok(page) => page,
            Err(e) => {
                tracing::debug!(offset = self.builder.offset(), "page fetch failed");
                self.state = LoopState::Done;
                return Some(Err(e));
            }
        };
        let total = page.total_result_set_size();
        tracing::debug!(start_index = page.start_index(), total, "received page");
        self.total = Some(total);
        self.builder.increase_offset_by(self.limit);
        self.state = if self.builder.offset() < total {
            LoopState::HasPage
        } else {
            LoopState::Done
        };
        Some(Ok(page))
    }

    /// Returns an [ItemPaginator] over the results of each page.
    pub fn items(self) -> ItemPaginator<P, E> {
        ItemPaginator {
            pages: self,
            buffer: VecDeque::new(),
            next_index: 0,
            position: None,
        }
    }

    /// Converts the paginator into a [futures::Stream] of pages.
    #[cfg(feature = "unstable-stream")]
    pub fn into_stream(self) -> impl futures::Stream<Item = Result<P, E>> {
        futures::stream::unfold(self, |mut paginator| async move {
            paginator.next().await.map(|page| (page, paginator))
        })
    }
}

impl<P, E> Paginator<P, E> {
    /// The offset of the next page to fetch.
    ///
    /// After an error this is the offset of the page that failed.
    pub fn offset(&self) -> u32 {
        self.builder.offset()
    }

    /// The number of rows requested by each fetch.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// The total reported by the most recent page, `None` before the first
    /// page is received.
    pub fn total_result_set_size(&self) -> Option<u32> {
        self.total
    }

    /// The number of fetches attempted so far.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count
    }

    /// Returns true once the enumeration is complete or failed.
    pub fn is_done(&self) -> bool {
        self.state == LoopState::Done
    }
}

impl<P, E> std::fmt::Debug for Paginator<P, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("builder", &self.builder)
            .field("limit", &self.limit)
            .field("state", &self.state)
            .field("total", &self.total)
            .field("fetch_count", &self.fetch_count)
            .finish()
    }
}

/// Fetches all the items of a `get*ByStatement` RPC, one item at a time.
///
/// Pages with no results are skipped, the iteration only ends when the
/// underlying [Paginator] ends.
pub struct ItemPaginator<P, E>
where
    P: PageableResponse,
{
    pages: Paginator<P, E>,
    buffer: VecDeque<P::PageItem>,
    next_index: u32,
    position: Option<u32>,
}

impl<P, E> ItemPaginator<P, E>
where
    P: PageableResponse,
{
    /// Returns the next item, fetching a new page if needed.
    pub async fn next(&mut self) -> Option<Result<P::PageItem, E>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                self.position = Some(self.next_index);
                self.next_index = self.next_index.saturating_add(1);
                return Some(Ok(item));
            }
            match self.pages.next().await? {
                Ok(page) => {
                    self.next_index = page.start_index();
                    self.buffer.extend(page.into_items());
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// The index, within the full result set, of the item most recently
    /// returned by [next][ItemPaginator::next].
    ///
    /// Computed from the start index of its page. Use it for display only.
    pub fn position(&self) -> Option<u32> {
        self.position
    }

    /// The offset of the next page to fetch.
    pub fn offset(&self) -> u32 {
        self.pages.offset()
    }

    /// The total reported by the most recent page.
    pub fn total_result_set_size(&self) -> Option<u32> {
        self.pages.total_result_set_size()
    }

    /// The number of page fetches attempted so far.
    pub fn fetch_count(&self) -> u32 {
        self.pages.fetch_count()
    }

    /// Converts the paginator into a [futures::Stream] of items.
    #[cfg(feature = "unstable-stream")]
    pub fn into_stream(self) -> impl futures::Stream<Item = Result<P::PageItem, E>> {
        futures::stream::unfold(self, |mut paginator| async move {
            paginator.next().await.map(|item| (item, paginator))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    #[derive(Clone, Debug, PartialEq)]
    struct TestPage {
        start_index: u32,
        total: u32,
        results: Vec<String>,
    }

    impl PageableResponse for TestPage {
        type PageItem = String;
        fn start_index(&self) -> u32 {
            self.start_index
        }
        fn total_result_set_size(&self) -> u32 {
            self.total
        }
        fn into_items(self) -> Vec<String> {
            self.results
        }
    }

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("simulated failure at offset {0}")]
    struct TestError(u32);

    type Calls = Arc<Mutex<Vec<Statement>>>;

    fn dataset(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i}")).collect()
    }

    fn serve(data: &[String], statement: &Statement) -> TestPage {
        let offset = statement.offset.unwrap_or(0);
        let limit = statement.limit.unwrap_or(u32::MAX) as usize;
        TestPage {
            start_index: offset,
            total: data.len() as u32,
            results: data.iter().skip(offset as usize).take(limit).cloned().collect(),
        }
    }

    fn paginator(
        builder: StatementBuilder,
        data: Vec<String>,
    ) -> (Paginator<TestPage, TestError>, Calls) {
        let calls = Calls::default();
        let recorder = calls.clone();
        let execute = move |statement: Statement| {
            recorder.lock().unwrap().push(statement.clone());
            let page = serve(&data, &statement);
            async move { Ok(page) }
        };
        (Paginator::new(builder, execute), calls)
    }

    fn offsets(calls: &Calls) -> Vec<u32> {
        calls
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.offset.unwrap_or(0))
            .collect()
    }

    #[tokio::test]
    async fn seven_items_limit_three() {
        let (mut pages, calls) = paginator(StatementBuilder::new().limit(3), dataset(7));
        let mut got = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.unwrap();
            assert_eq!(page.total, 7);
            got.push(page.results);
        }
        assert_eq!(
            got,
            vec![
                vec!["item-0", "item-1", "item-2"],
                vec!["item-3", "item-4", "item-5"],
                vec!["item-6"],
            ]
        );
        assert_eq!(offsets(&calls), vec![0, 3, 6]);
        assert_eq!(pages.offset(), 9);
        assert_eq!(pages.fetch_count(), 3);
        assert_eq!(pages.total_result_set_size(), Some(7));
        assert!(pages.is_done(), "{pages:?}");
        assert!(pages.next().await.is_none());
        assert_eq!(calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn empty_result_set_fetches_once() {
        let (mut pages, calls) = paginator(StatementBuilder::new().limit(3), Vec::new());
        let page = pages.next().await;
        assert!(
            matches!(&page, Some(Ok(p)) if p.results.is_empty() && p.total == 0),
            "{page:?}"
        );
        assert!(pages.next().await.is_none());
        assert_eq!(offsets(&calls), vec![0]);
        assert_eq!(pages.total_result_set_size(), Some(0));
    }

    #[test_case(0, 3, 1)]
    #[test_case(1, 3, 1)]
    #[test_case(3, 3, 1)]
    #[test_case(4, 3, 2)]
    #[test_case(7, 3, 3)]
    #[test_case(10, 1, 10)]
    #[test_case(500, 500, 1)]
    #[test_case(501, 500, 2)]
    #[test_case(1200, 500, 3)]
    #[tokio::test]
    async fn fetch_count(total: usize, limit: u32, want: u32) {
        let data = dataset(total);
        let (pages, calls) = paginator(StatementBuilder::new().limit(limit), data.clone());
        let mut items = pages.items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.unwrap());
        }
        assert_eq!(got, data);
        assert_eq!(items.fetch_count(), want);
        assert_eq!(calls.lock().unwrap().len() as u32, want);
    }

    #[tokio::test]
    async fn offset_advances_by_limit() {
        let (mut pages, _) = paginator(StatementBuilder::new().limit(4), dataset(17));
        let mut n = 0;
        while let Some(page) = pages.next().await {
            n += 1;
            assert!(page.is_ok(), "{page:?}");
            assert_eq!(pages.offset(), n * 4);
        }
        assert_eq!(n, 5);
    }

    #[tokio::test]
    async fn error_ends_iteration() {
        let data = dataset(7);
        let calls = Calls::default();
        let recorder = calls.clone();
        let execute = move |statement: Statement| {
            let mut calls = recorder.lock().unwrap();
            calls.push(statement.clone());
            let response = match calls.len() {
                2 => Err(TestError(statement.offset.unwrap_or(0))),
                _ => Ok(serve(&data, &statement)),
            };
            async move { response }
        };
        let mut items = Paginator::new(StatementBuilder::new().limit(3), execute).items();
        let mut got = Vec::new();
        let mut errors = Vec::new();
        while let Some(item) = items.next().await {
            match item {
                Ok(i) => got.push(i),
                Err(e) => errors.push(e),
            }
        }
        assert_eq!(got, vec!["item-0", "item-1", "item-2"]);
        assert_eq!(errors, vec![TestError(3)]);
        assert_eq!(items.offset(), 3);
        assert_eq!(calls.lock().unwrap().len(), 2);
        assert!(items.next().await.is_none());
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn error_on_first_fetch() {
        let execute = |_| async { Err::<TestPage, TestError>(TestError(0)) };
        let mut pages = Paginator::new(StatementBuilder::new(), execute);
        assert!(matches!(pages.next().await, Some(Err(TestError(0)))));
        assert!(pages.next().await.is_none());
        assert_eq!(pages.fetch_count(), 1);
        assert_eq!(pages.total_result_set_size(), None);
    }

    #[tokio::test]
    async fn empty_page_before_the_end() {
        let data = dataset(7);
        let execute = move |statement: Statement| {
            let mut page = serve(&data, &statement);
            if page.start_index == 3 {
                page.results.clear();
            }
            async move { Ok::<_, TestError>(page) }
        };
        let mut items = Paginator::new(StatementBuilder::new().limit(3), execute).items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.unwrap());
        }
        assert_eq!(got, vec!["item-0", "item-1", "item-2", "item-6"]);
        assert_eq!(items.fetch_count(), 3);
    }

    #[tokio::test]
    async fn shrinking_total_ends_early() {
        let data = dataset(7);
        let execute = move |statement: Statement| {
            let mut page = serve(&data, &statement);
            if page.start_index > 0 {
                page.total = 2;
            }
            async move { Ok::<_, TestError>(page) }
        };
        let mut pages = Paginator::new(StatementBuilder::new().limit(3), execute);
        let mut count = 0;
        while let Some(page) = pages.next().await {
            assert!(page.is_ok(), "{page:?}");
            count += 1;
        }
        assert_eq!(count, 2);
        assert_eq!(pages.total_result_set_size(), Some(2));
        assert_eq!(pages.offset(), 6);
    }

    #[test_case(StatementBuilder::new())]
    #[test_case(StatementBuilder::new().limit(0))]
    #[tokio::test]
    async fn default_limit(builder: StatementBuilder) {
        let (mut pages, calls) = paginator(builder, dataset(3));
        assert_eq!(pages.limit(), SUGGESTED_PAGE_LIMIT);
        let page = pages.next().await;
        assert!(matches!(&page, Some(Ok(p)) if p.results.len() == 3), "{page:?}");
        let statement = calls.lock().unwrap()[0].clone();
        assert_eq!(statement.limit, Some(SUGGESTED_PAGE_LIMIT));
    }

    #[tokio::test]
    async fn statement_is_preserved() {
        let builder = StatementBuilder::new()
            .where_clause("type = :type")
            .order_by("id", crate::statement::SortOrder::Ascending)
            .limit(2)
            .add_value("type", "PREDEFINED");
        let (mut pages, calls) = paginator(builder, dataset(5));
        while let Some(page) = pages.next().await {
            assert!(page.is_ok(), "{page:?}");
        }
        let queries = calls
            .lock()
            .unwrap()
            .iter()
            .map(Statement::query)
            .collect::<Vec<_>>();
        assert_eq!(
            queries,
            vec![
                "WHERE type = :type ORDER BY id ASC LIMIT 2",
                "WHERE type = :type ORDER BY id ASC LIMIT 2 OFFSET 2",
                "WHERE type = :type ORDER BY id ASC LIMIT 2 OFFSET 4",
            ]
        );
        for statement in calls.lock().unwrap().iter() {
            assert_eq!(
                statement.value("type"),
                Some(&crate::statement::Value::Text("PREDEFINED".to_string()))
            );
        }
    }

    #[tokio::test]
    async fn starts_at_builder_offset() {
        let builder = StatementBuilder::new().limit(3).with_offset(3);
        let (pages, calls) = paginator(builder, dataset(7));
        let mut items = pages.items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push((items.position(), item.unwrap()));
        }
        assert_eq!(offsets(&calls), vec![3, 6]);
        assert_eq!(
            got,
            vec![
                (Some(3), "item-3".to_string()),
                (Some(4), "item-4".to_string()),
                (Some(5), "item-5".to_string()),
                (Some(6), "item-6".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn item_positions() {
        let (pages, _) = paginator(StatementBuilder::new().limit(2), dataset(3));
        let mut items = pages.items();
        assert_eq!(items.position(), None);
        let mut positions = Vec::new();
        while let Some(item) = items.next().await {
            assert!(item.is_ok(), "{item:?}");
            positions.push(items.position());
        }
        assert_eq!(positions, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(items.total_result_set_size(), Some(3));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn paginators_are_send() -> anyhow::Result<()> {
        static_assertions::assert_impl_all!(Paginator<TestPage, TestError>: Send);
        static_assertions::assert_impl_all!(ItemPaginator<TestPage, TestError>: Send);

        let (pages, _) = paginator(StatementBuilder::new().limit(2), dataset(5));
        let join = tokio::spawn(async move {
            let mut items = pages.items();
            let mut count = 0;
            while let Some(item) = items.next().await {
                item?;
                count += 1;
            }
            Ok::<_, TestError>(count)
        });
        assert_eq!(join.await??, 5);
        Ok(())
    }

    #[cfg(feature = "unstable-stream")]
    #[tokio::test]
    async fn streams() {
        use futures::StreamExt;

        let (pages, _) = paginator(StatementBuilder::new().limit(3), dataset(7));
        let got = pages
            .into_stream()
            .map(|p| p.map(|p| p.start_index))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(got, vec![Ok(0), Ok(3), Ok(6)]);

        let (pages, _) = paginator(StatementBuilder::new().limit(3), dataset(7));
        let got = pages.items().into_stream().collect::<Vec<_>>().await;
        assert_eq!(got.len(), 7);
        assert!(got.iter().all(Result::is_ok), "{got:?}");
    }
}
