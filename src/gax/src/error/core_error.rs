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

use super::fault::ApiFault;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error type for every request sent by the Ads clients.
///
/// A request can fail in the service, which answers with an [ApiFault], or
/// before reaching it: the statement may not serialize, the credentials may be
/// rejected, the connection may drop, or the deadline may expire.
///
/// Use the predicates to classify the failure. The fault, the HTTP status and
/// the payload are available through accessors, and the underlying cause (if
/// any) through [source][std::error::Error::source].
///
/// # Example
/// ```
/// use google_ads_gax::error::Error;
/// match example_function() {
///     Err(e) if e.fault().is_some() => {
///         println!("rejected by the service {e}, details {:?}", e.fault());
///     },
///     Err(e) if e.is_timeout() => { println!("deadline expired {e}"); },
///     Err(e) => { println!("request failed {e}"); },
///     Ok(_) => { println!("done"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     # use google_ads_gax::error::fault::ApiFault;
///     # Err(Error::service(ApiFault::default().set_message("NOT FOUND")))
///     // ... details omitted ...
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    fn with_source<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: Some(source.into()),
        }
    }

    /// Creates an error with the fault returned by the service.
    ///
    /// # Example
    /// ```
    /// use google_ads_gax::error::Error;
    /// use google_ads_gax::error::fault::ApiFault;
    /// let fault = ApiFault::default().set_message("NOT FOUND");
    /// let error = Error::service(fault.clone());
    /// assert_eq!(error.fault(), Some(&fault));
    /// ```
    pub fn service(fault: ApiFault) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(fault), None),
            source: None,
        }
    }

    /// Like [Error::service], for faults received with an HTTP error status.
    pub fn service_with_http_status(fault: ApiFault, status_code: u16) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(fault), Some(status_code)),
            source: None,
        }
    }

    /// The fault reported by the service, if any.
    ///
    /// Statements with syntax errors, unknown columns, or unbound placeholders
    /// are rejected by the service, and their details appear here.
    pub fn fault(&self) -> Option<&ApiFault> {
        match &self.kind {
            ErrorKind::Service(fault, _) => Some(fault.as_ref()),
            _ => None,
        }
    }

    /// Creates an error for a request that did not complete in time.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_ads_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Timeout, source)
    }

    /// The attempt deadline expired.
    ///
    /// The client gives up waiting, the service may still run the request.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error for requests rejected because of their credentials.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Authentication, source)
    }

    /// The request could not be authenticated.
    ///
    /// # Troubleshooting
    ///
    /// Verify the OAuth2 credentials and the network code configured in the
    /// client. The network code must belong to an account the credentials can
    /// access.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error for a request that could not be encoded.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Serialization, source)
    }

    /// The request, typically a statement with a bad bind value, could not
    /// be encoded. Nothing was sent to the service.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error for a response that could not be decoded.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Deserialization, source)
    }

    /// The response did not match the expected page or entity shape.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error for an HTTP response without a fault.
    ///
    /// Proxies and load balancers may reject a request before it reaches the
    /// service.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let response = HttpResponse {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Http(Box::new(response)),
            source: None,
        }
    }

    /// Creates an error for a connection problem, where no response arrived.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Io, source)
    }

    /// No response was received.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Either [is_io][Error::is_io] or an HTTP response without a fault.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Io | ErrorKind::Http(_))
    }

    /// The HTTP status code, if known.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http(r) => Some(r.status_code),
            ErrorKind::Service(_, status_code) => *status_code,
            _ => None,
        }
    }

    /// The HTTP headers of a response without a fault.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Http(r) => Some(&r.headers),
            _ => None,
        }
    }

    /// The HTTP payload of a response without a fault.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Http(r) => Some(&r.payload),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match &self.kind {
            ErrorKind::Service(fault, _) => {
                return write!(f, "the service rejected the request: {fault}");
            }
            ErrorKind::Http(r) => {
                let code = r.status_code;
                return match std::str::from_utf8(r.payload.as_ref()) {
                    Ok(text) => write!(f, "HTTP error [{code}] without a fault: {text}"),
                    Err(_) => write!(f, "HTTP error [{code}] without a fault: {:?}", r.payload),
                };
            }
            ErrorKind::Serialization => "cannot encode the request",
            ErrorKind::Deserialization => "cannot decode the response",
            ErrorKind::Authentication => "cannot authenticate the request",
            ErrorKind::Timeout => "the attempt deadline expired",
            ErrorKind::Io => "the connection failed",
        };
        match &self.source {
            Some(e) => write!(f, "{prefix}: {e}"),
            None => f.write_str(prefix),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

#[derive(Debug)]
enum ErrorKind {
    Service(Box<ApiFault>, Option<u16>),
    Http(Box<HttpResponse>),
    Io,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
}

#[derive(Debug)]
struct HttpResponse {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}
