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

//! Statements select, order, and bound the rows returned by a listing RPC.
//!
//! The `get*ByStatement` RPCs accept a [Statement]: a filter written in the
//! Publisher Query Language (PQL), the values bound to the placeholders in
//! that filter, an ordering, and a window (limit and offset) into the full
//! result set. Applications rarely create a [Statement] directly, instead
//! they configure a [StatementBuilder] and let the paginators advance the
//! window.
//!
//! # Example
//! ```
//! use google_ads_gax::statement::{SortOrder, StatementBuilder, SUGGESTED_PAGE_LIMIT};
//! let builder = StatementBuilder::new()
//!     .where_clause("type = :type")
//!     .order_by("id", SortOrder::Ascending)
//!     .limit(SUGGESTED_PAGE_LIMIT)
//!     .add_value("type", "PREDEFINED");
//! let statement = builder.build();
//! assert_eq!(
//!     statement.query(),
//!     "WHERE type = :type ORDER BY id ASC LIMIT 500"
//! );
//! ```

use std::collections::BTreeMap;

/// The recommended maximum number of rows requested by each page.
///
/// Larger pages risk timeouts and truncated responses in the service.
pub const SUGGESTED_PAGE_LIMIT: u32 = 500;

/// A value bound to a named placeholder in a [Statement] filter.
///
/// Values are sent to the service separately from the query text, so they
/// never need quoting or escaping.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", content = "value")]
#[non_exhaustive]
pub enum Value {
    #[serde(rename = "TextValue")]
    Text(String),
    /// Numbers are carried as decimal text, matching the wire format.
    #[serde(rename = "NumberValue")]
    Number(String),
    #[serde(rename = "BooleanValue")]
    Boolean(bool),
    #[serde(rename = "SetValue")]
    Set(Vec<Value>),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! number_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Number(value.to_string())
                }
            }
        )*
    };
}

number_value!(i32, i64, u32, u64, usize, f64);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Set(value.into_iter().map(Into::into).collect())
    }
}

/// The direction of the single sort key in a [Statement].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The PQL keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable query sent to a `get*ByStatement` RPC.
///
/// Use [StatementBuilder] to create statements. The paginators create a new
/// statement for each page they fetch.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Statement {
    /// The filter predicate, without the `WHERE` keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<String>,

    /// The sort key and direction, for example `id ASC`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// The maximum number of rows returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// The index of the first row returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// The values bound to the placeholders in `where_clause`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, Value>,
}

impl Statement {
    /// Renders the PQL query text for this statement.
    ///
    /// Clauses that are not set are omitted.
    ///
    /// # Example
    /// ```
    /// # use google_ads_gax::statement::{SortOrder, StatementBuilder};
    /// let statement = StatementBuilder::new()
    ///     .order_by("id", SortOrder::Descending)
    ///     .limit(10)
    ///     .with_offset(20)
    ///     .build();
    /// assert_eq!(statement.query(), "ORDER BY id DESC LIMIT 10 OFFSET 20");
    /// ```
    pub fn query(&self) -> String {
        let mut clauses = Vec::new();
        if let Some(w) = &self.where_clause {
            clauses.push(format!("WHERE {w}"));
        }
        if let Some(o) = &self.order_by {
            clauses.push(format!("ORDER BY {o}"));
        }
        if let Some(l) = self.limit {
            clauses.push(format!("LIMIT {l}"));
        }
        if let Some(o) = self.offset {
            clauses.push(format!("OFFSET {o}"));
        }
        clauses.join(" ")
    }

    /// Returns the value bound to `name`, if any.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// Accumulates the parts of a [Statement].
///
/// The setters consume the builder and return it, so a configured builder has
/// a single owner. The paginators take ownership of the builder and advance
/// its offset after each page. To run the same query twice, clone the builder
/// before handing it to a paginator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatementBuilder {
    where_clause: Option<String>,
    order_by: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    values: BTreeMap<String, Value>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces the filter predicate.
    ///
    /// The predicate is sent to the service as-is, the service reports any
    /// syntax errors. A leading `WHERE` keyword is removed.
    pub fn where_clause<T: Into<String>>(mut self, predicate: T) -> Self {
        self.where_clause = Some(remove_keyword(&predicate.into(), "WHERE"));
        self
    }

    /// Sets the sort key, replacing any previous one.
    pub fn order_by<T: Into<String>>(mut self, column: T, order: SortOrder) -> Self {
        self.order_by = Some(format!("{} {order}", column.into().trim()));
        self
    }

    /// Sets the page size.
    ///
    /// Values larger than [SUGGESTED_PAGE_LIMIT] are reduced to it.
    pub fn limit(mut self, n: u32) -> Self {
        if n > SUGGESTED_PAGE_LIMIT {
            tracing::warn!(
                requested = n,
                limit = SUGGESTED_PAGE_LIMIT,
                "statement limit reduced to the suggested page limit"
            );
        }
        self.limit = Some(n.min(SUGGESTED_PAGE_LIMIT));
        self
    }

    /// Sets the index of the first row to fetch.
    pub fn with_offset(mut self, n: u32) -> Self {
        self.offset = Some(n);
        self
    }

    /// Binds `value` to the `:name` placeholder.
    ///
    /// Binding the same name again replaces the previous value.
    pub fn add_value<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Clears the limit and offset, selecting the full result set.
    ///
    /// Useful for actions applied to every row matching a filter.
    pub fn remove_limit_and_offset(mut self) -> Self {
        self.limit = None;
        self.offset = None;
        self
    }

    /// Advances the offset by `n` rows.
    ///
    /// An unset offset counts as zero.
    pub fn increase_offset_by(&mut self, n: u32) {
        self.offset = Some(self.offset().saturating_add(n));
    }

    /// The current offset, zero when it was never set.
    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    /// The configured page size, if any.
    pub fn limit_value(&self) -> Option<u32> {
        self.limit
    }

    /// Creates a [Statement] reflecting the current state of the builder.
    pub fn build(&self) -> Statement {
        Statement {
            where_clause: self.where_clause.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
            values: self.values.clone(),
        }
    }
}

fn remove_keyword(clause: &str, keyword: &str) -> String {
    let clause = clause.trim();
    let head = clause.get(..keyword.len());
    let tail = clause.get(keyword.len()..).unwrap_or_default();
    match head {
        Some(h) if h.eq_ignore_ascii_case(keyword) && tail.starts_with(char::is_whitespace) => {
            tail.trim_start().to_string()
        }
        _ => clause.to_string(),
    }
}
