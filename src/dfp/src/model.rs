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

//! The messages returned by the DFP v201605 listing services.
//!
//! Field names follow the service, serialized in `camelCase`. The types only
//! carry the fields used by the client libraries and samples; unknown fields
//! are ignored when deserializing.

use gax::paginator::PageableResponse;
use gax::statement::Value;

/// An order, a group of line items for one advertiser.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Order {
    pub id: i64,
    pub name: String,
    pub advertiser_id: i64,
    pub trafficker_id: i64,
    /// The status, for example `APPROVED` or `DRAFT`.
    pub status: String,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Order::id].
    pub fn set_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][Order::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [advertiser_id][Order::advertiser_id].
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.advertiser_id = v.into();
        self
    }

    /// Sets the value of [trafficker_id][Order::trafficker_id].
    pub fn set_trafficker_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.trafficker_id = v.into();
        self
    }

    /// Sets the value of [status][Order::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }
}

/// A product, the sellable template for proposal line items.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub product_template_id: i64,
    pub status: String,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Product::id].
    pub fn set_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][Product::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [product_template_id][Product::product_template_id].
    pub fn set_product_template_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.product_template_id = v.into();
        self
    }

    /// Sets the value of [status][Product::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }
}

/// A user of the network.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role_id: i64,
    pub role_name: String,
    pub is_active: bool,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][User::id].
    pub fn set_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][User::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [email][User::email].
    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = v.into();
        self
    }

    /// Sets the value of [role_id][User::role_id].
    pub fn set_role_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.role_id = v.into();
        self
    }

    /// Sets the value of [role_name][User::role_name].
    pub fn set_role_name<T: Into<String>>(mut self, v: T) -> Self {
        self.role_name = v.into();
        self
    }

    /// Sets the value of [is_active][User::is_active].
    pub fn set_is_active<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_active = v.into();
        self
    }
}

/// The kind of a [CustomTargetingKey].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomTargetingKeyType {
    /// The key has a fixed set of values, created ahead of time.
    #[default]
    Predefined,
    /// Ad requests may carry any value for this key.
    Freeform,
}

impl CustomTargetingKeyType {
    /// The name of the enum value, as used in statements.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Predefined => "PREDEFINED",
            Self::Freeform => "FREEFORM",
        }
    }
}

impl std::fmt::Display for CustomTargetingKeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CustomTargetingKeyType> for Value {
    fn from(value: CustomTargetingKeyType) -> Self {
        Value::Text(value.as_str().to_string())
    }
}

/// A key used to target ad requests.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CustomTargetingKey {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub r#type: CustomTargetingKeyType,
}

impl CustomTargetingKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][CustomTargetingKey::id].
    pub fn set_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][CustomTargetingKey::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][CustomTargetingKey::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [type][CustomTargetingKey::r#type].
    pub fn set_type<T: Into<CustomTargetingKeyType>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }
}

/// A value of a [CustomTargetingKey].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CustomTargetingValue {
    pub custom_targeting_key_id: i64,
    pub id: i64,
    pub name: String,
    pub display_name: String,
    /// How the value is matched, for example `EXACT` or `BROAD`.
    pub match_type: String,
}

impl CustomTargetingValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [custom_targeting_key_id][CustomTargetingValue::custom_targeting_key_id].
    pub fn set_custom_targeting_key_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.custom_targeting_key_id = v.into();
        self
    }

    /// Sets the value of [id][CustomTargetingValue::id].
    pub fn set_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][CustomTargetingValue::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][CustomTargetingValue::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [match_type][CustomTargetingValue::match_type].
    pub fn set_match_type<T: Into<String>>(mut self, v: T) -> Self {
        self.match_type = v.into();
        self
    }
}

macro_rules! page {
    ($(#[$attr:meta])* $name:ident, $item:ty) => {
        $(#[$attr])*
        #[serde_with::serde_as]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct $name {
            /// The size of the full result set, as of this fetch.
            pub total_result_set_size: u32,
            /// The index of the first element of [results][Self::results].
            pub start_index: u32,
            /// The results, possibly empty. A `null` list is an empty page.
            #[serde_as(as = "serde_with::DefaultOnNull")]
            pub results: Vec<$item>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [total_result_set_size][Self::total_result_set_size].
            pub fn set_total_result_set_size<T: Into<u32>>(mut self, v: T) -> Self {
                self.total_result_set_size = v.into();
                self
            }

            /// Sets the value of [start_index][Self::start_index].
            pub fn set_start_index<T: Into<u32>>(mut self, v: T) -> Self {
                self.start_index = v.into();
                self
            }

            /// Sets the value of [results][Self::results].
            pub fn set_results<T, V>(mut self, v: T) -> Self
            where
                T: IntoIterator<Item = V>,
                V: Into<$item>,
            {
                self.results = v.into_iter().map(Into::into).collect();
                self
            }
        }

        impl PageableResponse for $name {
            type PageItem = $item;

            fn start_index(&self) -> u32 {
                self.start_index
            }

            fn total_result_set_size(&self) -> u32 {
                self.total_result_set_size
            }

            fn into_items(self) -> Vec<$item> {
                self.results
            }
        }
    };
}

page!(
    /// A page of [Order] results.
    OrderPage,
    Order
);
page!(
    /// A page of [Product] results.
    ProductPage,
    Product
);
page!(
    /// A page of [User] results.
    UserPage,
    User
);
page!(
    /// A page of [CustomTargetingKey] results.
    CustomTargetingKeyPage,
    CustomTargetingKey
);
page!(
    /// A page of [CustomTargetingValue] results.
    CustomTargetingValuePage,
    CustomTargetingValue
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize_order_page() -> anyhow::Result<()> {
        let input = json!({
            "totalResultSetSize": 7,
            "startIndex": 3,
            "results": [
                { "id": 123, "name": "Summer campaign", "advertiserId": 42, "status": "APPROVED" },
                { "id": 124, "name": "Winter campaign", "unknownField": true },
            ]
        });
        let got = serde_json::from_value::<OrderPage>(input)?;
        let want = OrderPage::new()
            .set_total_result_set_size(7_u32)
            .set_start_index(3_u32)
            .set_results([
                Order::new()
                    .set_id(123)
                    .set_name("Summer campaign")
                    .set_advertiser_id(42)
                    .set_status("APPROVED"),
                Order::new().set_id(124).set_name("Winter campaign"),
            ]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn absent_results() -> anyhow::Result<()> {
        let got = serde_json::from_value::<UserPage>(json!({"totalResultSetSize": 0}))?;
        assert_eq!(got, UserPage::new());
        assert_eq!(got.total_result_set_size(), 0);
        assert!(got.into_items().is_empty());
        Ok(())
    }

    #[test]
    fn null_results() -> anyhow::Result<()> {
        let got = serde_json::from_value::<OrderPage>(
            json!({"totalResultSetSize": 0, "startIndex": 0, "results": null}),
        )?;
        assert_eq!(got, OrderPage::new());
        let got = serde_json::from_value::<CustomTargetingValuePage>(
            json!({"totalResultSetSize": 3, "startIndex": 500, "results": null}),
        )?;
        assert!(got.results.is_empty(), "{got:?}");
        assert_eq!(got.start_index, 500);
        Ok(())
    }

    #[test]
    fn custom_targeting_key() -> anyhow::Result<()> {
        let key = CustomTargetingKey::new()
            .set_id(1)
            .set_name("genre")
            .set_display_name("Genre")
            .set_type(CustomTargetingKeyType::Freeform);
        let got = serde_json::to_value(&key)?;
        assert_eq!(
            got,
            json!({"id": 1, "name": "genre", "displayName": "Genre", "type": "FREEFORM"})
        );
        let roundtrip = serde_json::from_value::<CustomTargetingKey>(got)?;
        assert_eq!(roundtrip, key);
        Ok(())
    }

    #[test]
    fn key_type_binds_as_text() {
        assert_eq!(
            Value::from(CustomTargetingKeyType::Predefined),
            Value::Text("PREDEFINED".to_string())
        );
        assert_eq!(CustomTargetingKeyType::Freeform.to_string(), "FREEFORM");
        assert_eq!(
            CustomTargetingKeyType::default(),
            CustomTargetingKeyType::Predefined
        );
    }

    #[test]
    fn pageable() {
        let page = CustomTargetingValuePage::new()
            .set_total_result_set_size(10_u32)
            .set_start_index(5_u32)
            .set_results([CustomTargetingValue::new()
                .set_id(7)
                .set_custom_targeting_key_id(1)
                .set_match_type("EXACT")]);
        assert_eq!(page.start_index(), 5);
        assert_eq!(page.total_result_set_size(), 10);
        let items = page.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].custom_targeting_key_id, 1);
    }
}
