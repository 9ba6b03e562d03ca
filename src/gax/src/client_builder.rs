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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to target a different network, or to change the
//! application name reported to the service. The client libraries provide a
//! uniform interface to configure clients in the [ClientBuilder] type.
//!
//! The clients do not contain a SOAP transport. Applications provide the
//! transport as a stub, that is, an implementation of the stub trait for each
//! service.

pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use google_ads_gax::client_builder::examples;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// match Client::builder().build().await {
///     Ok(c) => { /* use the client */ },
///     Err(e) if e.is_missing_network_code() => {
///         println!("set DFP_NETWORK_CODE or call with_network_code() {e}");
///     }
///     Err(e) => { println!("unexpected error while creating client {e}"); }
/// }
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client was built without a stub.
    pub fn is_missing_stub(&self) -> bool {
        matches!(&self.0, ErrorKind::MissingStub)
    }

    /// If true, no network code was configured or found in the environment.
    pub fn is_missing_network_code(&self) -> bool {
        matches!(&self.0, ErrorKind::MissingNetworkCode)
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn missing_stub() -> Self {
        Self(ErrorKind::MissingStub)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn missing_network_code() -> Self {
        Self(ErrorKind::MissingNetworkCode)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("no stub configured, call with_stub() before build()")]
    MissingStub,
    #[error("no network code configured")]
    MissingNetworkCode,
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the Google Ads client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use google_ads_gax::client_builder::examples;
/// # use google_ads_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// To create a client with the default configuration just invoke the
/// `.build()` method:
/// ```
/// # use google_ads_gax::client_builder::examples;
/// # use google_ads_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_stub(examples::Stub)
///     .with_network_code("123456")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, S> {
    config: internal::ClientConfig<S>,
    factory: F,
}

impl<F, S> ClientBuilder<F, S> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Stub = S>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// ```
    /// # use google_ads_gax::client_builder::examples;
    /// # use google_ads_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_stub(examples::Stub)
    ///     .with_endpoint("https://ads.example.com")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the application name.
    ///
    /// The clients report this name as the user agent of each request.
    pub fn with_application_name<V: Into<String>>(mut self, v: V) -> Self {
        self.config.application_name = Some(v.into());
        self
    }

    /// Sets the network code.
    ///
    /// The network code identifies the account targeted by each request.
    pub fn with_network_code<V: Into<String>>(mut self, v: V) -> Self {
        self.config.network_code = Some(v.into());
        self
    }

    /// Sets the stub used to send the requests.
    ///
    /// ```
    /// # use google_ads_gax::client_builder::examples;
    /// # use google_ads_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_stub(examples::Stub)
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_stub<T: Into<S>>(mut self, v: T) -> Self {
        self.config.stub = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    /// Setting the `GOOGLE_ADS_RUST_LOGGING` environment variable to `true`
    /// has the same effect.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    pub const LOGGING_VAR: &str = "GOOGLE_ADS_RUST_LOGGING";

    pub trait ClientFactory {
        type Client;
        type Stub;
        fn build(
            self,
            config: internal::ClientConfig<Self::Stub>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, S, C>(factory: F) -> super::ClientBuilder<F, S>
    where
        F: ClientFactory<Client = C, Stub = S>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// Each client library completes this configuration with its own defaults,
    /// for example, from environment variables.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<S> {
        pub endpoint: Option<String>,
        pub application_name: Option<String>,
        pub network_code: Option<String>,
        pub stub: Option<S>,
        pub tracing: bool,
    }

    impl<S> ClientConfig<S> {
        /// Returns true if the client should be instrumented.
        pub fn tracing_enabled(&self) -> bool {
            if self.tracing {
                return true;
            }
            std::env::var(LOGGING_VAR)
                .map(|v| v == "true")
                .unwrap_or(false)
        }
    }

    impl<S> std::default::Default for ClientConfig<S> {
        fn default() -> Self {
            Self {
                endpoint: None,
                application_name: None,
                network_code: None,
                stub: None,
                tracing: false,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.

    type Config = super::internal::ClientConfig<Stub>;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            if config.stub.is_none() {
                return Err(super::Error::missing_stub());
            }
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Stub>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Stub = super::Stub;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Stub>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// A placeholder stub.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Stub;

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn build_default() {
            let client = Client::builder().with_stub(Stub).build().await.unwrap();
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.application_name, None);
            assert_eq!(config.network_code, None);
            assert_eq!(config.stub, Some(Stub));
            assert!(!config.tracing);
        }

        #[tokio::test]
        async fn missing_stub() {
            let err = Client::builder().build().await.err().unwrap();
            assert!(err.is_missing_stub(), "{err:?}");
        }

        #[tokio::test]
        async fn endpoint() {
            let client = Client::builder()
                .with_stub(Stub)
                .with_endpoint("https://ads.example.com")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.endpoint.as_deref(), Some("https://ads.example.com"));
        }

        #[tokio::test]
        async fn application_name_and_network_code() {
            let client = Client::builder()
                .with_stub(Stub)
                .with_application_name("test-app")
                .with_network_code("123456")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.application_name.as_deref(), Some("test-app"));
            assert_eq!(config.network_code.as_deref(), Some("123456"));
        }

        #[tokio::test]
        async fn tracing() {
            let client = Client::builder()
                .with_stub(Stub)
                .with_tracing()
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert!(config.tracing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::{ClientConfig, LOGGING_VAR};
    use super::*;
    use scoped_env::ScopedEnv;
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("simulated connection failure")]
    struct Simulated;

    #[test]
    fn missing_stub() {
        let error = Error::missing_stub();
        assert!(error.is_missing_stub(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("with_stub()"), "{error}");
    }

    #[test]
    fn missing_network_code() {
        let error = Error::missing_network_code();
        assert!(error.is_missing_network_code(), "{error:?}");
        assert!(error.to_string().contains("network code"), "{error}");
        assert!(error.source().is_none(), "{error:?}");
    }

    #[test]
    fn transport() {
        let error = Error::transport(Simulated);
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
        let got = error.source().and_then(|e| e.downcast_ref::<Simulated>());
        assert!(matches!(got, Some(Simulated)), "{error:?}");
    }

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::<()>::default();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
        let mut config = ClientConfig::<()>::default();
        config.tracing = true;
        assert!(config.tracing_enabled(), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::<()>::default();
        assert!(config.tracing_enabled(), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::<()>::default();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
    }
}
