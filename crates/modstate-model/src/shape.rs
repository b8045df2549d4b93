//! Getter shapes.
//!
//! Every getter declares its shape as an associated type. The shape decides
//! what a store caches for the getter and therefore what an accessor hands
//! back to its caller:
//!
//! | Shape | Cached value | Accessor result |
//! |-------|--------------|-----------------|
//! | [`Direct<T>`] | `T` | `Arc<T>` |
//! | [`Parametric<A, T>`] | [`GetterFn<A, T>`] | `Arc<GetterFn<A, T>>` |
//!
//! The discriminant is resolved by the compiler; nothing inspects a cached
//! value to find out which kind of getter produced it.

use std::fmt;
use std::marker::PhantomData;

/// Runtime mirror of a getter's shape, for listings and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GetterKind {
    Direct,
    Parametric,
}

impl GetterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GetterKind::Direct => "direct",
            GetterKind::Parametric => "parametric",
        }
    }
}

impl fmt::Display for GetterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time description of what a getter produces.
pub trait GetterShape: 'static {
    /// The value a store caches for the getter.
    type Value: Send + Sync + 'static;

    const KIND: GetterKind;
}

/// A getter that yields its value directly.
pub struct Direct<T>(PhantomData<fn() -> T>);

impl<T: Send + Sync + 'static> GetterShape for Direct<T> {
    type Value = T;

    const KIND: GetterKind = GetterKind::Direct;
}

/// A getter that yields a function of one argument.
///
/// The function is computed once per store state; the argument is supplied by
/// the caller later and is never seen by the store or the accessor.
pub struct Parametric<A, T>(PhantomData<fn(A) -> T>);

impl<A: 'static, T: 'static> GetterShape for Parametric<A, T> {
    type Value = GetterFn<A, T>;

    const KIND: GetterKind = GetterKind::Parametric;
}

/// The function produced by a [`Parametric`] getter.
pub struct GetterFn<A, T> {
    inner: Box<dyn Fn(A) -> T + Send + Sync>,
}

impl<A, T> GetterFn<A, T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> T + Send + Sync + 'static,
    {
        Self { inner: Box::new(f) }
    }

    /// Applies the getter function to `arg`.
    pub fn call(&self, arg: A) -> T {
        (self.inner)(arg)
    }
}

impl<A, T> fmt::Debug for GetterFn<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetterFn")
            .field("argument", &std::any::type_name::<A>())
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}
