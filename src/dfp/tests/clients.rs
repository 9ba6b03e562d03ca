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

#[cfg(test)]
mod tests {
    use gax::error::Error;
    use gax::error::fault::{ApiError, ApiFault};
    use gax::options::RequestOptions;
    use gax::response::Response;
    use gax::statement::{SUGGESTED_PAGE_LIMIT, SortOrder, Statement, StatementBuilder, Value};
    use google_ads_dfp::client;
    use google_ads_dfp::model::*;
    use pretty_assertions::assert_eq;

    mockall::mock! {
        #[derive(Debug)]
        OrderService {}
        impl google_ads_dfp::stub::OrderService for OrderService {
            async fn get_orders_by_statement(&self, statement: Statement, options: RequestOptions) -> gax::Result<Response<OrderPage>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        ProductService {}
        impl google_ads_dfp::stub::ProductService for ProductService {
            async fn get_products_by_statement(&self, statement: Statement, options: RequestOptions) -> gax::Result<Response<ProductPage>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        UserService {}
        impl google_ads_dfp::stub::UserService for UserService {
            async fn get_users_by_statement(&self, statement: Statement, options: RequestOptions) -> gax::Result<Response<UserPage>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        CustomTargetingService {}
        impl google_ads_dfp::stub::CustomTargetingService for CustomTargetingService {
            async fn get_custom_targeting_keys_by_statement(&self, statement: Statement, options: RequestOptions) -> gax::Result<Response<CustomTargetingKeyPage>>;
            async fn get_custom_targeting_values_by_statement(&self, statement: Statement, options: RequestOptions) -> gax::Result<Response<CustomTargetingValuePage>>;
        }
    }

    fn order_page(start: u32, total: u32, ids: std::ops::Range<i64>) -> OrderPage {
        OrderPage::new()
            .set_start_index(start)
            .set_total_result_set_size(total)
            .set_results(ids.map(|id| Order::new().set_id(id).set_name(format!("order-{id}"))))
    }

    #[tokio::test]
    async fn orders_by_item() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockOrderService::new();
        mock.expect_get_orders_by_statement()
            .once()
            .in_sequence(&mut seq)
            .withf(|s, _| s.query() == "ORDER BY id ASC LIMIT 3")
            .return_once(|_, _| Ok(Response::from(order_page(0, 7, 0..3))));
        mock.expect_get_orders_by_statement()
            .once()
            .in_sequence(&mut seq)
            .withf(|s, _| s.query() == "ORDER BY id ASC LIMIT 3 OFFSET 3")
            .return_once(|_, _| Ok(Response::from(order_page(3, 7, 3..6))));
        mock.expect_get_orders_by_statement()
            .once()
            .in_sequence(&mut seq)
            .withf(|s, _| s.query() == "ORDER BY id ASC LIMIT 3 OFFSET 6")
            .return_once(|_, _| Ok(Response::from(order_page(6, 7, 6..7))));

        let client = client::OrderService::from_stub(mock);
        let mut items = client
            .get_orders_by_statement()
            .with_statement(
                StatementBuilder::new()
                    .order_by("id", SortOrder::Ascending)
                    .limit(3),
            )
            .by_item();
        let mut names = Vec::new();
        while let Some(order) = items.next().await.transpose()? {
            names.push((items.position(), order.name));
        }
        assert_eq!(names.len(), 7);
        assert_eq!(names[0], (Some(0), "order-0".to_string()));
        assert_eq!(names[6], (Some(6), "order-6".to_string()));
        assert_eq!(items.total_result_set_size(), Some(7));
        Ok(())
    }

    #[tokio::test]
    async fn products_empty() -> anyhow::Result<()> {
        let mut mock = MockProductService::new();
        mock.expect_get_products_by_statement()
            .once()
            .withf(|s, _| s.limit == Some(SUGGESTED_PAGE_LIMIT) && s.offset.is_none())
            .return_once(|_, _| Ok(Response::from(ProductPage::new())));

        let client = client::ProductService::from_stub(mock);
        let mut pages = client.get_products_by_statement().by_page();
        let page = pages.next().await.transpose()?;
        assert_eq!(page, Some(ProductPage::new()));
        assert!(pages.next().await.is_none());
        assert_eq!(pages.total_result_set_size(), Some(0));
        Ok(())
    }

    #[tokio::test]
    async fn users_error() -> anyhow::Result<()> {
        let mut mock = MockUserService::new();
        mock.expect_get_users_by_statement()
            .once()
            .withf(|s, _| s.offset.is_none())
            .return_once(|_, _| {
                let page = UserPage::new()
                    .set_total_result_set_size(4_u32)
                    .set_results([User::new().set_id(1), User::new().set_id(2)]);
                Ok(Response::from(page))
            });
        mock.expect_get_users_by_statement()
            .once()
            .withf(|s, _| s.offset == Some(2))
            .return_once(|_, _| {
                let fault = ApiFault::default()
                    .set_message("[PermissionError.PERMISSION_DENIED @ ]")
                    .set_errors([ApiError::default()
                        .set_error_string("PermissionError.PERMISSION_DENIED")
                        .set_reason("PERMISSION_DENIED")]);
                Err(Error::service_with_http_status(fault, 500))
            });

        let client = client::UserService::from_stub(mock);
        let mut items = client
            .get_users_by_statement()
            .with_statement(StatementBuilder::new().limit(2))
            .by_item();
        let mut ids = Vec::new();
        let mut errors = Vec::new();
        while let Some(user) = items.next().await {
            match user {
                Ok(u) => ids.push(u.id),
                Err(e) => errors.push(e),
            }
        }
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(errors.len(), 1, "{errors:?}");
        let fault = errors[0].fault();
        assert!(
            fault.is_some_and(|f| f.has_error("PermissionError.PERMISSION_DENIED")),
            "{errors:?}"
        );
        assert_eq!(errors[0].http_status_code(), Some(500));
        assert_eq!(items.offset(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn custom_targeting_send() -> anyhow::Result<()> {
        let mut mock = MockCustomTargetingService::new();
        mock.expect_get_custom_targeting_keys_by_statement()
            .once()
            .withf(|s, _| {
                s.query() == "WHERE type = :type ORDER BY id ASC LIMIT 500"
                    && s.value("type") == Some(&Value::from("PREDEFINED"))
            })
            .return_once(|_, _| {
                let page = CustomTargetingKeyPage::new()
                    .set_total_result_set_size(1_u32)
                    .set_results([CustomTargetingKey::new()
                        .set_id(42)
                        .set_name("genre")
                        .set_type(CustomTargetingKeyType::Predefined)]);
                Ok(Response::from(page))
            });
        mock.expect_get_custom_targeting_values_by_statement()
            .once()
            .withf(|s, _| s.value("customTargetingKeyId") == Some(&Value::from(42_i64)))
            .return_once(|_, _| {
                let page = CustomTargetingValuePage::new()
                    .set_total_result_set_size(1_u32)
                    .set_results([CustomTargetingValue::new()
                        .set_id(7)
                        .set_custom_targeting_key_id(42)
                        .set_name("comedy")]);
                Ok(Response::from(page))
            });

        let client = client::CustomTargetingService::from_stub(mock);
        let keys = client
            .get_custom_targeting_keys_by_statement()
            .with_statement(
                StatementBuilder::new()
                    .where_clause("type = :type")
                    .order_by("id", SortOrder::Ascending)
                    .limit(SUGGESTED_PAGE_LIMIT)
                    .add_value("type", CustomTargetingKeyType::Predefined),
            )
            .send()
            .await?;
        assert_eq!(keys.results.len(), 1);

        let values = client
            .get_custom_targeting_values_by_statement()
            .with_statement(
                StatementBuilder::new()
                    .where_clause("customTargetingKeyId = :customTargetingKeyId")
                    .add_value("customTargetingKeyId", keys.results[0].id),
            )
            .send()
            .await?;
        assert_eq!(values.results[0].name, "comedy");
        Ok(())
    }

    #[tokio::test]
    async fn endpoint_from_builder() -> anyhow::Result<()> {
        let mut mock = MockOrderService::new();
        mock.expect_get_orders_by_statement()
            .times(2)
            .withf(|_, o| {
                o.endpoint().as_deref()
                    == Some("https://x/apis/ads/publisher/v201605/OrderService")
            })
            .returning(|s, _| {
                let start = s.offset.unwrap_or(0);
                Ok(Response::from(order_page(start, 2, start as i64..start as i64 + 1)))
            });

        let client = client::OrderService::builder()
            .with_stub(mock)
            .with_endpoint("https://x")
            .with_network_code("123456")
            .build()
            .await?;
        let mut pages = client
            .get_orders_by_statement()
            .with_statement(StatementBuilder::new().limit(1))
            .by_page();
        let mut count = 0;
        while let Some(page) = pages.next().await.transpose()? {
            count += page.results.len();
        }
        assert_eq!(count, 2);
        Ok(())
    }

    #[cfg(feature = "unstable-stream")]
    #[tokio::test]
    async fn orders_stream() -> anyhow::Result<()> {
        use futures::TryStreamExt;

        let mut mock = MockOrderService::new();
        mock.expect_get_orders_by_statement()
            .times(3)
            .returning(|s, _| {
                let start = s.offset.unwrap_or(0);
                let end = (start + 3).min(7);
                Ok(Response::from(order_page(start, 7, start as i64..end as i64)))
            });

        let client = client::OrderService::from_stub(mock);
        let names = client
            .get_orders_by_statement()
            .with_statement(StatementBuilder::new().limit(3))
            .by_item()
            .into_stream()
            .map_ok(|order| order.name)
            .try_collect::<Vec<_>>()
            .await?;
        assert_eq!(names.len(), 7);
        assert_eq!(names.last().map(String::as_str), Some("order-6"));
        Ok(())
    }
}
