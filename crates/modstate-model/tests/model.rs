//! Tests for modstate-model types.

use modstate_model::{
    AccessError, Direct, Getter, GetterContext, GetterKind, GetterName, GetterShape, Module,
    ModuleName, Parametric, QualifiedKey,
};

struct Shop {
    basket: Basket,
}

struct Basket {
    items: Vec<String>,
}

struct BasketModule;

impl Module for BasketModule {
    type Root = Shop;
    type State = Basket;
    const NAME: &'static str = "basket";

    fn state(root: &Shop) -> &Basket {
        &root.basket
    }
}

struct ItemCount;

impl Getter for ItemCount {
    type Module = BasketModule;
    type Shape = Direct<usize>;
    const NAME: &'static str = "itemCount";

    fn compute(cx: &GetterContext<'_, BasketModule>) -> Result<usize, AccessError> {
        Ok(cx.state().items.len())
    }
}

struct ItemAt;

impl Getter for ItemAt {
    type Module = BasketModule;
    type Shape = Parametric<usize, Option<String>>;
    const NAME: &'static str = "itemAt";

    fn compute(
        cx: &GetterContext<'_, BasketModule>,
    ) -> Result<modstate_model::GetterFn<usize, Option<String>>, AccessError> {
        let items = cx.state().items.clone();
        Ok(modstate_model::GetterFn::new(move |index| {
            items.get(index).cloned()
        }))
    }
}

#[test]
fn key_is_built_from_type_constants() {
    let key = QualifiedKey::of::<ItemCount>();
    assert_eq!(key.module().as_str(), "basket");
    assert_eq!(key.getter().as_str(), "itemCount");
    assert_eq!(key.path(), "basket/itemCount");
    assert_eq!(key.to_string(), key.path());
}

#[test]
fn key_from_validated_parts_matches_type_key() {
    let key = QualifiedKey::new(
        ModuleName::new("basket").unwrap(),
        GetterName::new("itemAt").unwrap(),
    );
    assert_eq!(key, QualifiedKey::of::<ItemAt>());
}

#[test]
fn key_serializes_as_parts() {
    let key = QualifiedKey::of::<ItemAt>();
    let json = serde_json::to_value(&key).expect("serialize key");
    assert_eq!(
        json,
        serde_json::json!({ "module": "basket", "getter": "itemAt" })
    );
    let bad = serde_json::json!({ "module": "basket/extra", "getter": "itemAt" });
    assert!(serde_json::from_value::<QualifiedKey>(bad).is_err());
}

#[test]
fn shapes_classify_getters() {
    assert_eq!(
        <<ItemCount as Getter>::Shape as GetterShape>::KIND,
        GetterKind::Direct
    );
    assert_eq!(
        <<ItemAt as Getter>::Shape as GetterShape>::KIND,
        GetterKind::Parametric
    );
    assert_eq!(GetterKind::Parametric.to_string(), "parametric");
}

#[test]
fn unresolved_key_message_names_the_path() {
    let err = AccessError::unresolved(QualifiedKey::of::<ItemCount>());
    assert_eq!(err.to_string(), "unresolved getter key: basket/itemCount");
    assert_eq!(err.key().path(), "basket/itemCount");
}
