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

//! Google Ads API helpers.
//!
//! This crate contains the types and functions shared by the Google Ads client
//! libraries for Rust: the statements used to query the listing RPCs, the
//! paginators that walk through their results, and the error type returned by
//! every RPC.
//!
//! <div class="warning">
//! All the types, traits, and functions defined in the <code>internal</code>
//! modules are <b>not</b> intended for general use. They are used by the
//! client libraries and may change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client libraries.
pub mod error;

/// Build the statements used to query listing RPCs.
pub mod statement;

/// Adapts offset-based listing RPCs into page and item iterators.
pub mod paginator;

pub mod client_builder;
pub mod options;
pub mod response;
