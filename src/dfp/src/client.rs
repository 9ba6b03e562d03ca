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

//! Clients for the DFP v201605 listing services.

use crate::builder;
use crate::service::{DEFAULT_ENDPOINT, DfpService};
use crate::stub::dynamic;
use crate::{APPLICATION_NAME_VAR, DEFAULT_APPLICATION_NAME, NETWORK_CODE_VAR};
use gax::client_builder::Error as BuilderError;
use gax::client_builder::Result as ClientBuilderResult;
use gax::client_builder::internal::ClientConfig;
use gax::options::RequestOptions;
use std::sync::Arc;

/// Implements a client for the DFP OrderService.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_ads_dfp::client::OrderService;
/// # #[derive(Debug)] struct MyTransport;
/// # impl google_ads_dfp::stub::OrderService for MyTransport {}
/// let client = OrderService::builder()
///     .with_stub(MyTransport)
///     .with_network_code("123456")
///     .build()
///     .await?;
/// let mut orders = client.get_orders_by_statement().by_item();
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `OrderService` use the `with_*` methods in the type returned
/// by [builder()][OrderService::builder]. The network code defaults to the
/// value of the `DFP_NETWORK_CODE` environment variable, and the application
/// name to `DFP_APPLICATION_NAME`.
///
/// # Pooling and Cloning
///
/// `OrderService` holds a stub behind an `Arc`. Cloning is cheap, prefer
/// clones over creating new clients.
#[derive(Clone, Debug)]
pub struct OrderService {
    inner: Arc<dyn dynamic::OrderService>,
    options: RequestOptions,
}

impl OrderService {
    /// Returns a builder for [OrderService].
    pub fn builder() -> builder::order_service::ClientBuilder {
        gax::client_builder::internal::new_builder(builder::order_service::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior. Requests carry default options, with no network
    /// code.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::OrderService + 'static,
    {
        Self {
            inner: Arc::new(stub),
            options: RequestOptions::default(),
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<builder::order_service::Stub>,
    ) -> ClientBuilderResult<Self> {
        let resolved = resolve(config, DfpService::OrderService)?;
        let inner: Arc<dyn dynamic::OrderService> = if resolved.tracing {
            Arc::new(crate::tracing::OrderService::new(resolved.stub.0))
        } else {
            resolved.stub.0
        };
        Ok(Self {
            inner,
            options: resolved.options,
        })
    }

    /// Gets a page of orders matching the statement.
    ///
    /// Use [by_item][builder::order_service::GetOrdersByStatement::by_item] to
    /// iterate over all the orders.
    pub fn get_orders_by_statement(&self) -> builder::order_service::GetOrdersByStatement {
        builder::order_service::GetOrdersByStatement::new(self.inner.clone(), self.options.clone())
    }
}

/// Implements a client for the DFP ProductService.
///
/// `ProductService` holds a stub behind an `Arc`. Cloning is cheap, prefer
/// clones over creating new clients.
#[derive(Clone, Debug)]
pub struct ProductService {
    inner: Arc<dyn dynamic::ProductService>,
    options: RequestOptions,
}

impl ProductService {
    /// Returns a builder for [ProductService].
    pub fn builder() -> builder::product_service::ClientBuilder {
        gax::client_builder::internal::new_builder(builder::product_service::client::Factory)
    }

    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::ProductService + 'static,
    {
        Self {
            inner: Arc::new(stub),
            options: RequestOptions::default(),
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<builder::product_service::Stub>,
    ) -> ClientBuilderResult<Self> {
        let resolved = resolve(config, DfpService::ProductService)?;
        let inner: Arc<dyn dynamic::ProductService> = if resolved.tracing {
            Arc::new(crate::tracing::ProductService::new(resolved.stub.0))
        } else {
            resolved.stub.0
        };
        Ok(Self {
            inner,
            options: resolved.options,
        })
    }

    /// Gets a page of products matching the statement.
    pub fn get_products_by_statement(&self) -> builder::product_service::GetProductsByStatement {
        builder::product_service::GetProductsByStatement::new(
            self.inner.clone(),
            self.options.clone(),
        )
    }
}

/// Implements a client for the DFP UserService.
///
/// `UserService` holds a stub behind an `Arc`. Cloning is cheap, prefer clones
/// over creating new clients.
#[derive(Clone, Debug)]
pub struct UserService {
    inner: Arc<dyn dynamic::UserService>,
    options: RequestOptions,
}

impl UserService {
    /// Returns a builder for [UserService].
    pub fn builder() -> builder::user_service::ClientBuilder {
        gax::client_builder::internal::new_builder(builder::user_service::client::Factory)
    }

    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::UserService + 'static,
    {
        Self {
            inner: Arc::new(stub),
            options: RequestOptions::default(),
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<builder::user_service::Stub>,
    ) -> ClientBuilderResult<Self> {
        let resolved = resolve(config, DfpService::UserService)?;
        let inner: Arc<dyn dynamic::UserService> = if resolved.tracing {
            Arc::new(crate::tracing::UserService::new(resolved.stub.0))
        } else {
            resolved.stub.0
        };
        Ok(Self {
            inner,
            options: resolved.options,
        })
    }

    /// Gets a page of users matching the statement.
    pub fn get_users_by_statement(&self) -> builder::user_service::GetUsersByStatement {
        builder::user_service::GetUsersByStatement::new(self.inner.clone(), self.options.clone())
    }
}

/// Implements a client for the DFP CustomTargetingService.
///
/// `CustomTargetingService` holds a stub behind an `Arc`. Cloning is cheap,
/// prefer clones over creating new clients.
#[derive(Clone, Debug)]
pub struct CustomTargetingService {
    inner: Arc<dyn dynamic::CustomTargetingService>,
    options: RequestOptions,
}

impl CustomTargetingService {
    /// Returns a builder for [CustomTargetingService].
    pub fn builder() -> builder::custom_targeting_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            builder::custom_targeting_service::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::CustomTargetingService + 'static,
    {
        Self {
            inner: Arc::new(stub),
            options: RequestOptions::default(),
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<builder::custom_targeting_service::Stub>,
    ) -> ClientBuilderResult<Self> {
        let resolved = resolve(config, DfpService::CustomTargetingService)?;
        let inner: Arc<dyn dynamic::CustomTargetingService> = if resolved.tracing {
            Arc::new(crate::tracing::CustomTargetingService::new(resolved.stub.0))
        } else {
            resolved.stub.0
        };
        Ok(Self {
            inner,
            options: resolved.options,
        })
    }

    /// Gets a page of custom targeting keys matching the statement.
    pub fn get_custom_targeting_keys_by_statement(
        &self,
    ) -> builder::custom_targeting_service::GetCustomTargetingKeysByStatement {
        builder::custom_targeting_service::GetCustomTargetingKeysByStatement::new(
            self.inner.clone(),
            self.options.clone(),
        )
    }

    /// Gets a page of custom targeting values matching the statement.
    pub fn get_custom_targeting_values_by_statement(
        &self,
    ) -> builder::custom_targeting_service::GetCustomTargetingValuesByStatement {
        builder::custom_targeting_service::GetCustomTargetingValuesByStatement::new(
            self.inner.clone(),
            self.options.clone(),
        )
    }
}

#[derive(Debug)]
struct Resolved<S> {
    stub: S,
    options: RequestOptions,
    tracing: bool,
}

/// Completes the configuration with the defaults and environment variables.
fn resolve<S>(config: ClientConfig<S>, service: DfpService) -> ClientBuilderResult<Resolved<S>> {
    let tracing = config.tracing_enabled();
    let stub = config.stub.ok_or_else(BuilderError::missing_stub)?;
    let network_code = config
        .network_code
        .or_else(|| env_var(NETWORK_CODE_VAR))
        .ok_or_else(BuilderError::missing_network_code)?;
    let application_name = config
        .application_name
        .or_else(|| env_var(APPLICATION_NAME_VAR))
        .unwrap_or_else(|| DEFAULT_APPLICATION_NAME.to_string());
    let endpoint = service.endpoint_url(
        config
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT),
    );
    tracing::debug!(
        %service,
        %endpoint,
        %network_code,
        %application_name,
        "creating client"
    );
    let mut options = RequestOptions::default();
    options.set_user_agent(application_name);
    options.set_network_code(network_code);
    options.set_endpoint(endpoint);
    Ok(Resolved {
        stub,
        options,
        tracing,
    })
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
