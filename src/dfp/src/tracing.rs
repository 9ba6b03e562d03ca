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

use crate::Result;
use crate::model::{
    CustomTargetingKeyPage, CustomTargetingValuePage, OrderPage, ProductPage, UserPage,
};
use crate::stub::dynamic;
use crate::stub::dynamic::CustomTargetingService as _;
use crate::stub::dynamic::OrderService as _;
use crate::stub::dynamic::ProductService as _;
use crate::stub::dynamic::UserService as _;
use gax::options::RequestOptions;
use gax::response::Response;
use gax::statement::Statement;
use std::sync::Arc;

/// Implements a [OrderService](super::stub::OrderService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct OrderService {
    inner: Arc<dyn dynamic::OrderService>,
}

impl OrderService {
    pub fn new(inner: Arc<dyn dynamic::OrderService>) -> Self {
        Self { inner }
    }
}

impl super::stub::OrderService for OrderService {
    #[tracing::instrument(ret)]
    async fn get_orders_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> Result<Response<OrderPage>> {
        self.inner.get_orders_by_statement(statement, options).await
    }
}

/// Implements a [ProductService](super::stub::ProductService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ProductService {
    inner: Arc<dyn dynamic::ProductService>,
}

impl ProductService {
    pub fn new(inner: Arc<dyn dynamic::ProductService>) -> Self {
        Self { inner }
    }
}

impl super::stub::ProductService for ProductService {
    #[tracing::instrument(ret)]
    async fn get_products_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> Result<Response<ProductPage>> {
        self.inner.get_products_by_statement(statement, options).await
    }
}

/// Implements a [UserService](super::stub::UserService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct UserService {
    inner: Arc<dyn dynamic::UserService>,
}

impl UserService {
    pub fn new(inner: Arc<dyn dynamic::UserService>) -> Self {
        Self { inner }
    }
}

impl super::stub::UserService for UserService {
    #[tracing::instrument(ret)]
    async fn get_users_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> Result<Response<UserPage>> {
        self.inner.get_users_by_statement(statement, options).await
    }
}

/// Implements a [CustomTargetingService](super::stub::CustomTargetingService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct CustomTargetingService {
    inner: Arc<dyn dynamic::CustomTargetingService>,
}

impl CustomTargetingService {
    pub fn new(inner: Arc<dyn dynamic::CustomTargetingService>) -> Self {
        Self { inner }
    }
}

impl super::stub::CustomTargetingService for CustomTargetingService {
    #[tracing::instrument(ret)]
    async fn get_custom_targeting_keys_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> Result<Response<CustomTargetingKeyPage>> {
        self.inner
            .get_custom_targeting_keys_by_statement(statement, options)
            .await
    }

    #[tracing::instrument(ret)]
    async fn get_custom_targeting_values_by_statement(
        &self,
        statement: Statement,
        options: RequestOptions,
    ) -> Result<Response<CustomTargetingValuePage>> {
        self.inner
            .get_custom_targeting_values_by_statement(statement, options)
            .await
    }
}
