//! The closed Proxy/Value classification.
//!
//! Every getter/setter type declares its shape exactly once through
//! [`GetSet::Shape`](crate::getset::contract::GetSet). The shape selects:
//!
//! - the accessor type synthesized for it (`Proxy<G>` or `Value<G>`), and
//! - the member-projection adapter variant (`ProxyMember` or `ValueMember`),
//!   so a projection always mirrors the classification of its outer accessor.
//!
//! The trait is sealed: there is no third shape. A getter that yields
//! anything other than `&T` (proxy) or an owned `T` (value) is
//! unrepresentable in the contract traits, so the classification is total.

use crate::accessor::members::Overlay;
use crate::accessor::proxy::Proxy;
use crate::accessor::value::Value;
use crate::getset::contract::GetSet;
use crate::getset::member::{Project, ProxyMember, ValueMember};
use crate::primitives::bool::{Bool, False, True};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ByProxy {}
    impl Sealed for super::ByValue {}
}

/// Accessor shape selector.
///
/// Implemented only by [`ByProxy`] and [`ByValue`].
pub trait Shape: sealed::Sealed + 'static {
    const BY_PROXY: bool;

    /// Type-level rendering of `BY_PROXY`.
    type IsProxy: Bool;

    /// The accessor synthesized for a getter/setter of this shape.
    type Accessor<G: GetSet<Shape = Self>>: Overlay<G>;

    /// The member-projection adapter for a getter/setter of this shape.
    ///
    /// The adapter is itself a getter/setter of the same shape, wrapping the
    /// outer one with identical layout.
    type MemberOf<G: GetSet<Shape = Self>, P: Project<G::Value>>: GetSet<Shape = Self, Value = P::Field>
        + Overlay<G>;
}

/// Shape of a getter returning an lvalue reference. Mutating operators act on
/// the referent in place; no temporary is ever created.
pub struct ByProxy;

/// Shape of a getter returning an owned object. Every read materializes an
/// independent copy; every write materializes, mutates, then calls `set`.
pub struct ByValue;

impl Shape for ByProxy {
    const BY_PROXY: bool = true;
    type IsProxy = True;
    type Accessor<G: GetSet<Shape = Self>> = Proxy<G>;
    type MemberOf<G: GetSet<Shape = Self>, P: Project<G::Value>> = ProxyMember<G, P>;
}

impl Shape for ByValue {
    const BY_PROXY: bool = false;
    type IsProxy = False;
    type Accessor<G: GetSet<Shape = Self>> = Value<G>;
    type MemberOf<G: GetSet<Shape = Self>, P: Project<G::Value>> = ValueMember<G, P>;
}
