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

use crate::model::{
    CustomTargetingKeyPage, CustomTargetingValuePage, OrderPage, ProductPage, UserPage,
};
use gax::options::RequestOptions;
use gax::response::Response;
use gax::statement::Statement;

/// A dyn-compatible, crate-private version of [super::OrderService].
#[async_trait::async_trait]
pub trait OrderService: std::fmt::Debug + Send + Sync {
    async fn get_orders_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<OrderPage>>;
}

/// All implementations of [super::OrderService] also implement [OrderService].
#[async_trait::async_trait]
impl<T: super::OrderService> OrderService for T {
    async fn get_orders_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<OrderPage>> {
        T::get_orders_by_statement(self, statement, options).await
    }
}

/// A dyn-compatible, crate-private version of [super::ProductService].
#[async_trait::async_trait]
pub trait ProductService: std::fmt::Debug + Send + Sync {
    async fn get_products_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<ProductPage>>;
}

/// All implementations of [super::ProductService] also implement [ProductService].
#[async_trait::async_trait]
impl<T: super::ProductService> ProductService for T {
    async fn get_products_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<ProductPage>> {
        T::get_products_by_statement(self, statement, options).await
    }
}

/// A dyn-compatible, crate-private version of [super::UserService].
#[async_trait::async_trait]
pub trait UserService: std::fmt::Debug + Send + Sync {
    async fn get_users_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<UserPage>>;
}

/// All implementations of [super::UserService] also implement [UserService].
#[async_trait::async_trait]
impl<T: super::UserService> UserService for T {
    async fn get_users_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<UserPage>> {
        T::get_users_by_statement(self, statement, options).await
    }
}

/// A dyn-compatible, crate-private version of [super::CustomTargetingService].
#[async_trait::async_trait]
pub trait CustomTargetingService: std::fmt::Debug + Send + Sync {
    async fn get_custom_targeting_keys_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<CustomTargetingKeyPage>>;

    async fn get_custom_targeting_values_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<CustomTargetingValuePage>>;
}

/// All implementations of [super::CustomTargetingService] also implement
/// [CustomTargetingService].
#[async_trait::async_trait]
impl<T: super::CustomTargetingService> CustomTargetingService for T {
    async fn get_custom_targeting_keys_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<CustomTargetingKeyPage>> {
        T::get_custom_targeting_keys_by_statement(self, statement, options).await
    }

    async fn get_custom_targeting_values_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> crate::Result<Response<CustomTargetingValuePage>> {
        T::get_custom_targeting_values_by_statement(self, statement, options).await
    }
}
