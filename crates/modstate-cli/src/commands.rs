use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use modstate_access::bind;
use modstate_model::{
    AccessError, Direct, Getter, GetterKind, GetterName, GetterSource, ModuleName, Parametric,
    QualifiedKey,
};
use modstate_store::Store;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::shop::{
    IsLoggedIn, ItemsByStatus, LimitedItems, ProductNames, SelectedItems, ShopState,
    TotalSelected, sample_state,
};

/// Reads one getter through a typed accessor and renders its result as JSON.
type RenderFn = fn(&dyn GetterSource, Option<&Value>) -> Result<Value>;

/// Loads the shop state from a JSON file, or the built-in sample without one.
pub fn load_state(path: Option<&Path>) -> Result<ShopState> {
    let Some(path) = path else {
        debug!("using built-in sample state");
        return Ok(sample_state());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read state file {}", path.display()))?;
    let state = serde_json::from_str(&text)
        .with_context(|| format!("parse state file {}", path.display()))?;
    info!(path = %path.display(), "loaded shop state");
    Ok(state)
}

/// Registered getters as `{module, getter, kind}` rows, in registry order.
pub fn getter_rows(store: &Store<ShopState>) -> Vec<Value> {
    store
        .registered_keys()
        .into_iter()
        .map(|(key, kind)| {
            json!({
                "module": key.module().as_str(),
                "getter": key.getter().as_str(),
                "kind": kind.as_str(),
            })
        })
        .collect()
}

pub fn getters_table(store: &Store<ShopState>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Module", "Getter", "Kind", "Key"]);
    apply_table_style(&mut table);
    for (key, kind) in store.registered_keys() {
        table.add_row(vec![
            key.module().to_string(),
            key.getter().to_string(),
            kind.to_string(),
            key.path(),
        ]);
    }
    table
}

pub fn run_getters(store: &Store<ShopState>) -> Result<()> {
    println!("{}", getters_table(store));
    Ok(())
}

/// Reads `module/getter` from the store.
///
/// `arg` is the JSON argument for a parametric getter and must be absent for
/// a direct one.
///
/// # Errors
///
/// Fails with [`AccessError::UnresolvedKey`] when no shop getter has that key,
/// and with a plain error when the argument is missing, unexpected or of the
/// wrong type.
pub fn read_getter(
    store: &Store<ShopState>,
    module: &str,
    getter: &str,
    arg: Option<&Value>,
) -> Result<Value> {
    let key = QualifiedKey::new(
        ModuleName::new(module).context("module name")?,
        GetterName::new(getter).context("getter name")?,
    );
    let Some((_, render)) = renderers().into_iter().find(|(candidate, _)| *candidate == key)
    else {
        return Err(AccessError::unresolved(key).into());
    };
    debug!(key = %key, "reading getter");
    render(store, arg)
}

pub fn run_read(
    store: &Store<ShopState>,
    module: &str,
    getter: &str,
    arg: Option<&str>,
) -> Result<()> {
    let arg = arg
        .map(serde_json::from_str::<Value>)
        .transpose()
        .context("parse --arg as JSON")?;
    let value = read_getter(store, module, getter, arg.as_ref())?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn renderers() -> [(QualifiedKey, RenderFn); 6] {
    [
        (
            QualifiedKey::of::<IsLoggedIn>(),
            render_direct::<IsLoggedIn, _>,
        ),
        (
            QualifiedKey::of::<ProductNames>(),
            render_direct::<ProductNames, _>,
        ),
        (
            QualifiedKey::of::<SelectedItems>(),
            render_direct::<SelectedItems, _>,
        ),
        (
            QualifiedKey::of::<ItemsByStatus>(),
            render_parametric::<ItemsByStatus, _, _>,
        ),
        (
            QualifiedKey::of::<LimitedItems>(),
            render_direct::<LimitedItems, _>,
        ),
        (
            QualifiedKey::of::<TotalSelected>(),
            render_direct::<TotalSelected, _>,
        ),
    ]
}

fn render_direct<G, T>(source: &dyn GetterSource, arg: Option<&Value>) -> Result<Value>
where
    G: Getter<Shape = Direct<T>>,
    T: Serialize + Send + Sync + 'static,
{
    let accessor = bind::<G>(source)?;
    if arg.is_some() {
        bail!(
            "{} is a {} getter and takes no argument",
            accessor.key(),
            GetterKind::Direct
        );
    }
    let value = accessor.get()?;
    Ok(serde_json::to_value(&*value)?)
}

fn render_parametric<G, A, T>(source: &dyn GetterSource, arg: Option<&Value>) -> Result<Value>
where
    G: Getter<Shape = Parametric<A, T>>,
    A: DeserializeOwned + 'static,
    T: Serialize + 'static,
{
    let accessor = bind::<G>(source)?;
    let arg = arg.ok_or_else(|| {
        anyhow!(
            "{} is a {} getter; pass its argument with --arg <JSON>",
            accessor.key(),
            GetterKind::Parametric
        )
    })?;
    let arg: A = serde_json::from_value(arg.clone())
        .with_context(|| format!("argument for {}", accessor.key()))?;
    let value = accessor.call(arg)?;
    Ok(serde_json::to_value(value)?)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}
