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

//! Request builders for each client.
//!
//! Each client method returns a request builder. Applications set the
//! statement, optionally override the request options, and then either send a
//! single request or iterate over all the results.

use gax::options::RequestOptions;
use gax::paginator::{PageableResponse, Paginator};
use gax::response::Response;
use gax::statement::{Statement, StatementBuilder};
use std::future::Future;
use std::sync::Arc;

/// Common implementation for the request builders of all the services.
#[derive(Debug)]
pub(crate) struct RequestBuilder<S: ?Sized> {
    stub: Arc<S>,
    statement: StatementBuilder,
    options: RequestOptions,
}

impl<S: ?Sized> Clone for RequestBuilder<S> {
    fn clone(&self) -> Self {
        Self {
            stub: self.stub.clone(),
            statement: self.statement.clone(),
            options: self.options.clone(),
        }
    }
}

impl<S> RequestBuilder<S>
where
    S: ?Sized + Send + Sync + 'static,
{
    pub(crate) fn new(stub: Arc<S>, options: RequestOptions) -> Self {
        Self {
            stub,
            statement: StatementBuilder::default(),
            options,
        }
    }

    async fn send<P, F, X>(self, call: X) -> crate::Result<P>
    where
        X: FnOnce(Arc<S>, Statement, RequestOptions) -> F,
        F: Future<Output = crate::Result<Response<P>>>,
    {
        call(self.stub, self.statement.build(), self.options)
            .await
            .map(into_body)
    }

    fn paginator<P, F, X>(self, call: X) -> Paginator<P, crate::Error>
    where
        P: PageableResponse,
        X: Fn(Arc<S>, Statement, RequestOptions) -> F + Send + 'static,
        F: Future<Output = crate::Result<Response<P>>> + Send + 'static,
    {
        let Self {
            stub,
            statement,
            options,
        } = self;
        Paginator::new(statement, move |statement| {
            let response = call(stub.clone(), statement, options.clone());
            async move { response.await.map(into_body) }
        })
    }
}

fn into_body<P>(response: Response<P>) -> P {
    tracing::debug!(
        request_id = response.request_id(),
        response_time = response.response_time(),
        "response received"
    );
    response.into_body()
}

macro_rules! request_builder_impls {
    ($name:ident, $page:ty) => {
        impl $name {
            /// Sets the statement.
            ///
            /// The paginators returned by [by_page][Self::by_page] and
            /// [by_item][Self::by_item] take ownership of the builder and
            /// advance its offset after each page.
            pub fn with_statement(mut self, v: gax::statement::StatementBuilder) -> Self {
                self.0.statement = v;
                self
            }

            /// Streams each page in the collection.
            pub fn by_page(self) -> gax::paginator::Paginator<$page, crate::Error> {
                self.0.paginator(|stub, statement, options| async move {
                    Self::call(stub, statement, options).await
                })
            }

            /// Streams each item in the collection.
            pub fn by_item(self) -> gax::paginator::ItemPaginator<$page, crate::Error> {
                self.by_page().items()
            }

            /// Sends the request with the current statement, returning a
            /// single page.
            pub async fn send(self) -> crate::Result<$page> {
                self.0
                    .send(|stub, statement, options| async move {
                        Self::call(stub, statement, options).await
                    })
                    .await
            }
        }

        impl gax::options::internal::RequestBuilder for $name {
            fn request_options(&mut self) -> &mut gax::options::RequestOptions {
                &mut self.0.options
            }
        }
    };
}

/// Request builders for [OrderService][crate::client::OrderService].
pub mod order_service {
    use crate::model::OrderPage;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use gax::statement::Statement;
    use std::sync::Arc;

    /// A builder for [OrderService][crate::client::OrderService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_ads_dfp::*;
    /// # use builder::order_service::ClientBuilder;
    /// # use client::OrderService;
    /// # #[derive(Debug)] struct MyTransport;
    /// # impl stub::OrderService for MyTransport {}
    /// let builder : ClientBuilder = OrderService::builder();
    /// let client = builder
    ///     .with_stub(MyTransport)
    ///     .with_network_code("123456")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory, Stub>;

    pub(crate) mod client {
        use crate::client::OrderService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = OrderService;
            type Stub = super::Stub;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Stub>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The stub used by a [ClientBuilder].
    ///
    /// Any implementation of [crate::stub::OrderService] converts into this
    /// type.
    #[derive(Clone, Debug)]
    pub struct Stub(pub(crate) Arc<dyn dynamic::OrderService>);

    impl<T> From<T> for Stub
    where
        T: crate::stub::OrderService + 'static,
    {
        fn from(stub: T) -> Self {
            Self(Arc::new(stub))
        }
    }

    /// The request builder for [OrderService::get_orders_by_statement][crate::client::OrderService::get_orders_by_statement] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_ads_dfp::builder::order_service::GetOrdersByStatement;
    /// # use gax::statement::StatementBuilder;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(order) = items.next().await {
    ///     let order = order?;
    ///     println!("{order:?}");
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetOrdersByStatement {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetOrdersByStatement(super::RequestBuilder<dyn dynamic::OrderService>);

    impl GetOrdersByStatement {
        pub(crate) fn new(stub: Arc<dyn dynamic::OrderService>, options: RequestOptions) -> Self {
            Self(super::RequestBuilder::new(stub, options))
        }

        async fn call(
            stub: Arc<dyn dynamic::OrderService>,
            statement: Statement,
            options: RequestOptions,
        ) -> crate::Result<Response<OrderPage>> {
            stub.get_orders_by_statement(statement, options).await
        }
    }

    request_builder_impls!(GetOrdersByStatement, OrderPage);
}

/// Request builders for [ProductService][crate::client::ProductService].
pub mod product_service {
    use crate::model::ProductPage;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use gax::statement::Statement;
    use std::sync::Arc;

    /// A builder for [ProductService][crate::client::ProductService].
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory, Stub>;

    pub(crate) mod client {
        use crate::client::ProductService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ProductService;
            type Stub = super::Stub;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Stub>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The stub used by a [ClientBuilder].
    #[derive(Clone, Debug)]
    pub struct Stub(pub(crate) Arc<dyn dynamic::ProductService>);

    impl<T> From<T> for Stub
    where
        T: crate::stub::ProductService + 'static,
    {
        fn from(stub: T) -> Self {
            Self(Arc::new(stub))
        }
    }

    /// The request builder for [ProductService::get_products_by_statement][crate::client::ProductService::get_products_by_statement] calls.
    #[derive(Clone, Debug)]
    pub struct GetProductsByStatement(super::RequestBuilder<dyn dynamic::ProductService>);

    impl GetProductsByStatement {
        pub(crate) fn new(stub: Arc<dyn dynamic::ProductService>, options: RequestOptions) -> Self {
            Self(super::RequestBuilder::new(stub, options))
        }

        async fn call(
            stub: Arc<dyn dynamic::ProductService>,
            statement: Statement,
            options: RequestOptions,
        ) -> crate::Result<Response<ProductPage>> {
            stub.get_products_by_statement(statement, options).await
        }
    }

    request_builder_impls!(GetProductsByStatement, ProductPage);
}

/// Request builders for [UserService][crate::client::UserService].
pub mod user_service {
    use crate::model::UserPage;
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use gax::statement::Statement;
    use std::sync::Arc;

    /// A builder for [UserService][crate::client::UserService].
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory, Stub>;

    pub(crate) mod client {
        use crate::client::UserService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = UserService;
            type Stub = super::Stub;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Stub>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The stub used by a [ClientBuilder].
    #[derive(Clone, Debug)]
    pub struct Stub(pub(crate) Arc<dyn dynamic::UserService>);

    impl<T> From<T> for Stub
    where
        T: crate::stub::UserService + 'static,
    {
        fn from(stub: T) -> Self {
            Self(Arc::new(stub))
        }
    }

    /// The request builder for [UserService::get_users_by_statement][crate::client::UserService::get_users_by_statement] calls.
    #[derive(Clone, Debug)]
    pub struct GetUsersByStatement(super::RequestBuilder<dyn dynamic::UserService>);

    impl GetUsersByStatement {
        pub(crate) fn new(stub: Arc<dyn dynamic::UserService>, options: RequestOptions) -> Self {
            Self(super::RequestBuilder::new(stub, options))
        }

        async fn call(
            stub: Arc<dyn dynamic::UserService>,
            statement: Statement,
            options: RequestOptions,
        ) -> crate::Result<Response<UserPage>> {
            stub.get_users_by_statement(statement, options).await
        }
    }

    request_builder_impls!(GetUsersByStatement, UserPage);
}

/// Request builders for [CustomTargetingService][crate::client::CustomTargetingService].
pub mod custom_targeting_service {
    use crate::model::{CustomTargetingKeyPage, CustomTargetingValuePage};
    use crate::stub::dynamic;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use gax::statement::Statement;
    use std::sync::Arc;

    /// A builder for [CustomTargetingService][crate::client::CustomTargetingService].
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory, Stub>;

    pub(crate) mod client {
        use crate::client::CustomTargetingService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = CustomTargetingService;
            type Stub = super::Stub;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Stub>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The stub used by a [ClientBuilder].
    #[derive(Clone, Debug)]
    pub struct Stub(pub(crate) Arc<dyn dynamic::CustomTargetingService>);

    impl<T> From<T> for Stub
    where
        T: crate::stub::CustomTargetingService + 'static,
    {
        fn from(stub: T) -> Self {
            Self(Arc::new(stub))
        }
    }

    /// The request builder for [CustomTargetingService::get_custom_targeting_keys_by_statement][crate::client::CustomTargetingService::get_custom_targeting_keys_by_statement] calls.
    #[derive(Clone, Debug)]
    pub struct GetCustomTargetingKeysByStatement(
        super::RequestBuilder<dyn dynamic::CustomTargetingService>,
    );

    impl GetCustomTargetingKeysByStatement {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::CustomTargetingService>,
            options: RequestOptions,
        ) -> Self {
            Self(super::RequestBuilder::new(stub, options))
        }

        async fn call(
            stub: Arc<dyn dynamic::CustomTargetingService>,
            statement: Statement,
            options: RequestOptions,
        ) -> crate::Result<Response<CustomTargetingKeyPage>> {
            stub.get_custom_targeting_keys_by_statement(statement, options)
                .await
        }
    }

    request_builder_impls!(GetCustomTargetingKeysByStatement, CustomTargetingKeyPage);

    /// The request builder for [CustomTargetingService::get_custom_targeting_values_by_statement][crate::client::CustomTargetingService::get_custom_targeting_values_by_statement] calls.
    #[derive(Clone, Debug)]
    pub struct GetCustomTargetingValuesByStatement(
        super::RequestBuilder<dyn dynamic::CustomTargetingService>,
    );

    impl GetCustomTargetingValuesByStatement {
        pub(crate) fn new(
            stub: Arc<dyn dynamic::CustomTargetingService>,
            options: RequestOptions,
        ) -> Self {
            Self(super::RequestBuilder::new(stub, options))
        }

        async fn call(
            stub: Arc<dyn dynamic::CustomTargetingService>,
            statement: Statement,
            options: RequestOptions,
        ) -> crate::Result<Response<CustomTargetingValuePage>> {
            stub.get_custom_targeting_values_by_statement(statement, options)
                .await
        }
    }

    request_builder_impls!(
        GetCustomTargetingValuesByStatement,
        CustomTargetingValuePage
    );
}
