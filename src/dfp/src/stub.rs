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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.
//!
//! The same traits are the seam where applications plug their SOAP transport.

#![allow(rustdoc::broken_intra_doc_links)]

use crate::model::{
    CustomTargetingKeyPage, CustomTargetingValuePage, OrderPage, ProductPage, UserPage,
};
use gax::options::RequestOptions;
use gax::response::Response;
use gax::statement::Statement;

pub(crate) mod dynamic;

const UNIMPLEMENTED: &str = concat!(
    "this method is not implemented by the stub. ",
    "Implement it, or use a stub that supports it."
);

/// Defines the trait used to implement [super::client::OrderService].
///
/// Application developers may need to implement this trait to mock
/// `client::OrderService`. In other use-cases, application developers only
/// use `client::OrderService` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic with an
/// `unimplemented!` message.
pub trait OrderService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::OrderService::get_orders_by_statement].
    fn get_orders_by_statement(
        &self,
        _statement: Statement,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<OrderPage>>> + Send {
        unimplemented_stub::<OrderPage>()
    }
}

/// Defines the trait used to implement [super::client::ProductService].
///
/// Application developers may need to implement this trait to mock
/// `client::ProductService`. In other use-cases, application developers only
/// use `client::ProductService` and need not be concerned with this trait or
/// its implementations.
pub trait ProductService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::ProductService::get_products_by_statement].
    fn get_products_by_statement(
        &self,
        _statement: Statement,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<ProductPage>>> + Send {
        unimplemented_stub::<ProductPage>()
    }
}

/// Defines the trait used to implement [super::client::UserService].
///
/// Application developers may need to implement this trait to mock
/// `client::UserService`. In other use-cases, application developers only
/// use `client::UserService` and need not be concerned with this trait or
/// its implementations.
pub trait UserService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::UserService::get_users_by_statement].
    fn get_users_by_statement(
        &self,
        _statement: Statement,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<UserPage>>> + Send {
        unimplemented_stub::<UserPage>()
    }
}

/// Defines the trait used to implement [super::client::CustomTargetingService].
///
/// Application developers may need to implement this trait to mock
/// `client::CustomTargetingService`. In other use-cases, application
/// developers only use `client::CustomTargetingService` and need not be
/// concerned with this trait or its implementations.
pub trait CustomTargetingService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::CustomTargetingService::get_custom_targeting_keys_by_statement].
    fn get_custom_targeting_keys_by_statement(
        &self,
        _statement: Statement,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<CustomTargetingKeyPage>>> + Send
    {
        unimplemented_stub::<CustomTargetingKeyPage>()
    }

    /// Implements [super::client::CustomTargetingService::get_custom_targeting_values_by_statement].
    fn get_custom_targeting_values_by_statement(
        &self,
        _statement: Statement,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<Response<CustomTargetingValuePage>>> + Send
    {
        unimplemented_stub::<CustomTargetingValuePage>()
    }
}

async fn unimplemented_stub<T: Send>() -> crate::Result<Response<T>> {
    unimplemented!("{UNIMPLEMENTED}");
}
