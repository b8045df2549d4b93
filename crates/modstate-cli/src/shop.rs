//! Sample shop store: a `system` module and a `basket` module.
//!
//! The state types deserialize from camelCase JSON, so a shop state file
//! looks like:
//!
//! ```json
//! {
//!   "system": { "userLogin": "ada", "maxAllowedItems": 5 },
//!   "basket": {
//!     "items": [
//!       { "product": { "id": 1, "name": "clock", "unitPrice": 12.5 }, "isSelected": true }
//!     ],
//!     "totalAmount": 12.5
//!   }
//! }
//! ```

use modstate_model::{AccessError, Direct, Getter, GetterContext, GetterFn, Module, Parametric};
use modstate_store::{Store, StoreError, StoreOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopState {
    pub system: SystemState,
    pub basket: BasketState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    pub user_login: String,
    pub max_allowed_items: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketState {
    pub items: Vec<BasketItem>,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
    pub product: Product,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub unit_price: f64,
}

impl BasketItem {
    pub fn new(id: u32, name: &str, unit_price: f64, is_selected: bool) -> Self {
        Self {
            product: Product {
                id,
                name: name.to_string(),
                unit_price,
            },
            is_selected,
        }
    }
}

impl BasketState {
    /// Builds a basket and sets `total_amount` to the sum of its unit prices.
    pub fn with_items(items: Vec<BasketItem>) -> Self {
        let total_amount = items.iter().map(|item| item.product.unit_price).sum();
        Self {
            items,
            total_amount,
        }
    }
}

/// The state the CLI uses when no `--state` file is given.
pub fn sample_state() -> ShopState {
    ShopState {
        system: SystemState {
            user_login: "shopper".to_string(),
            max_allowed_items: 5,
        },
        basket: BasketState::with_items(vec![
            BasketItem::new(1, "clock", 12.5, true),
            BasketItem::new(2, "newspaper", 1.25, false),
            BasketItem::new(3, "candy", 0.75, false),
        ]),
    }
}

pub struct System;

impl Module for System {
    type Root = ShopState;
    type State = SystemState;
    const NAME: &'static str = "system";

    fn state(root: &ShopState) -> &SystemState {
        &root.system
    }
}

pub struct Basket;

impl Module for Basket {
    type Root = ShopState;
    type State = BasketState;
    const NAME: &'static str = "basket";

    fn state(root: &ShopState) -> &BasketState {
        &root.basket
    }
}

pub struct IsLoggedIn;

impl Getter for IsLoggedIn {
    type Module = System;
    type Shape = Direct<bool>;
    const NAME: &'static str = "isLoggedIn";

    fn compute(cx: &GetterContext<'_, System>) -> Result<bool, AccessError> {
        Ok(!cx.state().user_login.trim().is_empty())
    }
}

/// Product names in basket order.
pub struct ProductNames;

impl Getter for ProductNames {
    type Module = Basket;
    type Shape = Direct<Vec<String>>;
    const NAME: &'static str = "productNames";

    fn compute(cx: &GetterContext<'_, Basket>) -> Result<Vec<String>, AccessError> {
        Ok(cx
            .state()
            .items
            .iter()
            .map(|item| item.product.name.clone())
            .collect())
    }
}

pub struct SelectedItems;

impl Getter for SelectedItems {
    type Module = Basket;
    type Shape = Direct<Vec<BasketItem>>;
    const NAME: &'static str = "selectedItems";

    fn compute(cx: &GetterContext<'_, Basket>) -> Result<Vec<BasketItem>, AccessError> {
        Ok(cx
            .state()
            .items
            .iter()
            .filter(|item| item.is_selected)
            .cloned()
            .collect())
    }
}

/// Items whose selection flag equals the argument, in basket order.
pub struct ItemsByStatus;

impl Getter for ItemsByStatus {
    type Module = Basket;
    type Shape = Parametric<bool, Vec<BasketItem>>;
    const NAME: &'static str = "itemsByStatus";

    fn compute(
        cx: &GetterContext<'_, Basket>,
    ) -> Result<GetterFn<bool, Vec<BasketItem>>, AccessError> {
        let items = cx.state().items.clone();
        Ok(GetterFn::new(move |selected| {
            items
                .iter()
                .filter(|item| item.is_selected == selected)
                .cloned()
                .collect()
        }))
    }
}

/// The first `system.maxAllowedItems` basket items.
pub struct LimitedItems;

impl Getter for LimitedItems {
    type Module = Basket;
    type Shape = Direct<Vec<BasketItem>>;
    const NAME: &'static str = "limitedItems";

    fn compute(cx: &GetterContext<'_, Basket>) -> Result<Vec<BasketItem>, AccessError> {
        let limit = cx.root_state().system.max_allowed_items;
        Ok(cx.state().items.iter().take(limit).cloned().collect())
    }
}

/// Sum of unit prices over the selected items.
pub struct TotalSelected;

impl Getter for TotalSelected {
    type Module = Basket;
    type Shape = Direct<f64>;
    const NAME: &'static str = "totalSelected";

    fn compute(cx: &GetterContext<'_, Basket>) -> Result<f64, AccessError> {
        let selected = cx.getter::<SelectedItems>()?;
        Ok(selected.iter().map(|item| item.product.unit_price).sum())
    }
}

/// Builds a store over `root` with both shop modules and all their getters.
pub fn create_store(root: ShopState, options: StoreOptions) -> Result<Store<ShopState>, StoreError> {
    let mut builder = Store::builder(root).with_options(options);
    builder.module::<System>()?.getter::<IsLoggedIn>()?;
    builder
        .module::<Basket>()?
        .getter::<ProductNames>()?
        .getter::<SelectedItems>()?
        .getter::<ItemsByStatus>()?
        .getter::<LimitedItems>()?
        .getter::<TotalSelected>()?;
    let store = builder.build();
    debug!(
        modules = ?store.module_names(),
        getters = store.registered_keys().len(),
        cache = store.options().cache_getters,
        "shop store ready"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_state_round_trips_through_camel_case_json() {
        let json = serde_json::to_value(sample_state()).unwrap();
        assert_eq!(json["system"]["maxAllowedItems"], 5);
        assert_eq!(json["basket"]["items"][0]["product"]["unitPrice"], 12.5);
        assert_eq!(json["basket"]["items"][0]["isSelected"], true);
        assert_eq!(json["basket"]["totalAmount"], 14.5);
        let back: ShopState = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample_state());
    }

    #[test]
    fn create_store_registers_every_getter() {
        let store = create_store(sample_state(), StoreOptions::default()).unwrap();
        let paths: Vec<String> = store
            .registered_keys()
            .into_iter()
            .map(|(key, _)| key.path())
            .collect();
        assert_eq!(
            paths,
            [
                "basket/itemsByStatus",
                "basket/limitedItems",
                "basket/productNames",
                "basket/selectedItems",
                "basket/totalSelected",
                "system/isLoggedIn",
            ]
        );
    }
}
