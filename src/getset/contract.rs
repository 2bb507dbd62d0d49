//! The getter/setter contract traits.
//!
//! A getter/setter is a plain data-carrying type (usually a
//! `#[repr(transparent)]` wrapper over the actual storage) that declares its
//! classification through [`GetSet::Shape`] and exposes reads through
//! [`ProxyGet`] or [`ValueGet`]. Writable value getters additionally
//! implement [`Set`], possibly for several argument types (the analogue of a
//! setter overload set).
//!
//! Capability detection is structural at the use site: an accessor method
//! that needs a setter is bounded by `G: Set<Y>`, so calling it without one
//! is "no matching method" at compile time. There is no runtime probe.

use crate::primitives::shape::{ByProxy, ByValue, Shape};

/// Classification of a getter/setter type.
///
/// `Value` is the wrapped value type, with reference-ness stripped; `Shape`
/// records whether `get` yields `&Value` ([`ByProxy`]) or an owned `Value`
/// ([`ByValue`]). Exactly one holds, by construction.
pub trait GetSet {
    /// The wrapped value type.
    type Value;

    /// [`ByProxy`] or [`ByValue`].
    type Shape: Shape;
}

/// Read access for proxy-shaped getter/setters.
///
/// `get` must return a reference into storage the getter/setter already
/// borrows from; the accessor adds no reads or writes of its own. The
/// `&self`/`&mut self` pair takes the place of C-style const/non-const
/// accessor overloads.
pub trait ProxyGet: GetSet<Shape = ByProxy> {
    fn get(&self) -> &Self::Value;
    fn get_mut(&mut self) -> &mut Self::Value;
}

/// Read access for value-shaped getter/setters.
///
/// Every call materializes an independent copy; the caller owns it and the
/// underlying storage is untouched by anything done to it.
pub trait ValueGet: GetSet<Shape = ByValue> {
    fn get(&self) -> Self::Value;
}

/// Write access for value-shaped getter/setters.
///
/// Implement once per accepted argument type. The `Shape = ByValue`
/// supertrait bound enforces, at the type level, that a proxy never declares
/// a setter: a reference already provides mutation, so a setter would be
/// redundant and ambiguous.
pub trait Set<Y>: GetSet<Shape = ByValue> {
    fn set(&mut self, value: Y);
}

/// The accessor type synthesized for a getter/setter.
///
/// This alias is the sole consumption surface: it resolves to
/// [`Proxy<G>`](crate::accessor::proxy::Proxy) or
/// [`Value<G>`](crate::accessor::value::Value) purely from `G::Shape`.
pub type Property<G> = <<G as GetSet>::Shape as Shape>::Accessor<G>;
