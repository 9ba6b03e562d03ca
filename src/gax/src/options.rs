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

//! Per request options.
//!
//! Clients initialize the options of each request from their configuration:
//! the application name becomes the user agent and the network code selects
//! the account. Applications sometimes need to customize a single call, for
//! example to change its timeout. The request builders returned by each client
//! method implement the [RequestOptionsBuilder] trait where applications can
//! override these defaults.

/// The options of a single request.
///
/// These options are passed to the stub unchanged. The transport decides how
/// to honor them, the paginators never interpret them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    network_code: Option<String>,
    endpoint: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
}

impl RequestOptions {
    /// Sets the user agent, usually the application name.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user agent.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the network code of the account targeted by the request.
    pub fn set_network_code<T: Into<String>>(&mut self, v: T) {
        self.network_code = Some(v.into());
    }

    /// Gets the current network code.
    pub fn network_code(&self) -> &Option<String> {
        &self.network_code
    }

    /// Sets the URL of the service receiving the request.
    ///
    /// Clients set this from their configured endpoint and the service path.
    pub fn set_endpoint<T: Into<String>>(&mut self, v: T) {
        self.endpoint = Some(v.into());
    }

    /// Gets the current endpoint URL.
    pub fn endpoint(&self) -> &Option<String> {
        &self.endpoint
    }

    /// Sets the per-attempt timeout.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries define a request builder for each RPC. These builders
/// implement this trait.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Set the network code for this request.
    fn with_network_code<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    ///
    /// When a paginator fetches several pages each fetch gets this timeout.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_network_code<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_network_code(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }
}
