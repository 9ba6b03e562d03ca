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

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::{Subscriber, field, span};
use tracing_subscriber::{Layer, layer::Context, prelude::*, registry::LookupSpan};

/// A span captured by [TestLayer].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CapturedSpan {
    /// The name of the span, for instrumented functions this is the function
    /// name.
    pub name: String,
    /// The target, typically the module path of the code creating the span.
    pub target: String,
    /// The span fields, formatted as strings.
    pub attributes: BTreeMap<String, String>,
}

struct Visitor<'a>(&'a mut BTreeMap<String, String>);

impl field::Visit for Visitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

// Stored in the span extensions to find the captured span on `on_record()`.
struct Index(usize);

/// A tracing layer that records the spans created while it is installed.
///
/// The layer is installed as the default subscriber for the current thread,
/// use it with the (default) single threaded runtime in `#[tokio::test]`.
///
/// # Example
/// ```
/// use google_ads_test_utils::test_layer::TestLayer;
/// let (_guard, layer) = TestLayer::initialize();
/// tracing::info_span!("my_operation", foo = "bar").in_scope(|| {
///     tracing::info!("inside the span");
/// });
/// let captured = layer.capture();
/// assert_eq!(captured.len(), 1);
/// assert_eq!(captured[0].name, "my_operation");
/// assert_eq!(captured[0].attributes.get("foo").map(String::as_str), Some("bar"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TestLayer {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

impl TestLayer {
    /// Installs a new layer as the default subscriber for this thread.
    ///
    /// The layer stops capturing spans when the guard is dropped.
    pub fn initialize() -> (tracing::subscriber::DefaultGuard, Self) {
        let layer = Self::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        (tracing::subscriber::set_default(subscriber), layer)
    }

    /// Returns the spans captured so far, in creation order.
    pub fn capture(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    /// Returns the names of the spans captured so far.
    pub fn names(&self) -> Vec<String> {
        self.spans
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.name.clone())
            .collect()
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let mut captured = CapturedSpan {
            name: attrs.metadata().name().to_string(),
            target: attrs.metadata().target().to_string(),
            ..Default::default()
        };
        attrs.record(&mut Visitor(&mut captured.attributes));
        let mut spans = self.spans.lock().unwrap();
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Index(spans.len()));
        }
        spans.push(captured);
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let extensions = span.extensions();
        let Some(Index(index)) = extensions.get::<Index>() else {
            return;
        };
        if let Some(captured) = self.spans.lock().unwrap().get_mut(*index) {
            values.record(&mut Visitor(&mut captured.attributes));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_spans() {
        let (_guard, layer) = TestLayer::initialize();
        let _outer = tracing::info_span!("outer", answer = 42).entered();
        let _inner = tracing::debug_span!("inner", name = "value").entered();

        assert_eq!(layer.names(), vec!["outer", "inner"]);
        let captured = layer.capture();
        assert_eq!(
            captured[0].attributes.get("answer").map(String::as_str),
            Some("42")
        );
        assert_eq!(
            captured[1].attributes.get("name").map(String::as_str),
            Some("value")
        );
        assert_eq!(captured[0].target, module_path!());
    }

    #[test]
    fn recorded_fields() {
        let (_guard, layer) = TestLayer::initialize();
        let span = tracing::info_span!("recorded", late = field::Empty);
        span.record("late", "now");
        span.record("late", field::debug(&[1, 2]));

        let captured = layer.capture();
        assert_eq!(captured.len(), 1);
        assert_eq!(
            captured[0].attributes.get("late").map(String::as_str),
            Some("[1, 2]")
        );
    }

    #[test]
    fn scoped_to_guard() {
        let layer = {
            let (_guard, layer) = TestLayer::initialize();
            let _span = tracing::info_span!("inside").entered();
            layer
        };
        let _span = tracing::info_span!("outside").entered();
        assert_eq!(layer.names(), vec!["inside"]);
    }

    #[tokio::test]
    async fn instrumented_async() {
        #[tracing::instrument]
        async fn work(input: u32) -> u32 {
            input + 1
        }

        let (_guard, layer) = TestLayer::initialize();
        assert_eq!(work(1).await, 2);
        let captured = layer.capture();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].name, "work");
        assert_eq!(
            captured[0].attributes.get("input").map(String::as_str),
            Some("1")
        );
    }
}
