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

//! Response types.
//!
//! Stubs return a [Response]: the decoded page plus the metadata the service
//! sends in the SOAP `ResponseHeader` and the transport headers.
//!
//! # Example
//!
//! Creating a response for mocks
//!
//! ```
//! # use google_ads_gax::Result;
//! # use google_ads_gax::response::{Parts, Response};
//! struct Page {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Page) -> Result<Response<Page>> {
//!     let parts = Parts::new().set_request_id("mock-request").set_response_time(25_i64);
//!     Ok(Response::from_parts(parts, body))
//! }
//! ```

/// A page, or any other body, returned by a service call.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with empty metadata.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// The request id assigned by the service, include it in support requests.
    pub fn request_id(&self) -> Option<&str> {
        self.parts.request_id.as_deref()
    }

    /// The time, in milliseconds, the service spent on the request.
    pub fn response_time(&self) -> Option<i64> {
        self.parts.response_time
    }

    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

/// The metadata of a [Response].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Parts {
    /// The `requestId` field of the SOAP response header.
    pub request_id: Option<String>,
    /// The `responseTime` field of the SOAP response header, in milliseconds.
    pub response_time: Option<i64>,
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    pub fn new() -> Self {
        Parts::default()
    }

    pub fn set_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_id = Some(v.into());
        self
    }

    pub fn set_response_time<V: Into<i64>>(mut self, v: V) -> Self {
        self.response_time = Some(v.into());
        self
    }

    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from() {
        let response = Response::from("abc123".to_string());
        assert_eq!(response.request_id(), None);
        assert_eq!(response.response_time(), None);
        assert!(response.headers().is_empty());
        assert_eq!(response.body(), "abc123");
        assert_eq!(response.into_body(), "abc123");
    }

    #[test]
    fn parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("text/xml"));
        let parts = Parts::new()
            .set_request_id("r-123")
            .set_response_time(42_i64)
            .set_headers(headers.clone());
        let response = Response::from_parts(parts.clone(), vec![1, 2]);
        assert_eq!(response.request_id(), Some("r-123"));
        assert_eq!(response.response_time(), Some(42));
        assert_eq!(response.headers(), &headers);
        let (got, body) = response.into_parts();
        assert_eq!(got, parts);
        assert_eq!(body, vec![1, 2]);
    }
}
