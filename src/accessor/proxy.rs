//! The proxy accessor: a synthetic field backed by a reference-returning
//! getter.

use core::ops::{Deref, DerefMut};

use crate::accessor::common_surface;
use crate::accessor::members::Members;
use crate::getset::contract::ProxyGet;
use crate::primitives::bool::True;

/// Accessor over a proxy-shaped getter/setter.
///
/// All mutating operations act on the referent in place; no temporary is
/// ever created and the underlying storage is read and written exactly as
/// often as the caller's operations demand. The accessor dereferences to the
/// wrapped value, so members and methods of the referent are reachable with
/// plain dot syntax.
///
/// `Proxy` is never constructed, copied or moved as an owned value: it is
/// materialized by reference-cast over an existing getter/setter
/// ([`Proxy::from_ref`]) and carries no state beyond it.
#[repr(transparent)]
pub struct Proxy<G> {
    getset: G,
}

common_surface!(Proxy, ProxyGet);

impl<G: ProxyGet> Proxy<G> {
    /// A reference to the referent. Also available through `Deref`.
    #[inline(always)]
    pub fn get(&self) -> &G::Value {
        self.getset.get()
    }

    /// A mutable reference to the referent: the address-of operation of a
    /// proxy accessor.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut G::Value {
        self.getset.get_mut()
    }

    /// Assign through the reference.
    #[inline(always)]
    pub fn set<Y: Into<G::Value>>(&mut self, value: Y) {
        *self.getset.get_mut() = value.into();
    }

    /// Assign through the reference, returning the previous value.
    #[inline(always)]
    pub fn replace<Y: Into<G::Value>>(&mut self, value: Y) -> G::Value {
        core::mem::replace(self.getset.get_mut(), value.into())
    }

    /// Mutate the referent in place.
    #[inline(always)]
    pub fn modify<R>(&mut self, f: impl FnOnce(&mut G::Value) -> R) -> R {
        f(self.getset.get_mut())
    }

    /// Assign from another accessor of the same instantiated type: reads the
    /// right-hand accessor's current value rather than duplicating accessor
    /// state (accessors have none).
    #[inline(always)]
    pub fn assign_from(&mut self, other: &Self)
    where
        G::Value: Clone,
    {
        *self.getset.get_mut() = other.get().clone();
    }

    /// Convert the current value to `T`. The explicit conversion path,
    /// always available.
    #[inline(always)]
    pub fn to<T>(&self) -> T
    where
        G::Value: Clone,
        T: From<G::Value>,
    {
        T::from(self.get().clone())
    }

    /// Convert the current value to `T` without naming the getter; only for
    /// value types that opted in with `ImplicitConversion = True`.
    #[inline(always)]
    pub fn coerce<T>(&self) -> T
    where
        G::Value: Members<ImplicitConversion = True> + Clone,
        T: From<G::Value>,
    {
        T::from(self.get().clone())
    }
}

impl<G: ProxyGet> Deref for Proxy<G> {
    type Target = G::Value;

    #[inline(always)]
    fn deref(&self) -> &G::Value {
        self.getset.get()
    }
}

impl<G: ProxyGet> DerefMut for Proxy<G> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut G::Value {
        self.getset.get_mut()
    }
}

impl<G: ProxyGet> AsRef<G::Value> for Proxy<G> {
    #[inline(always)]
    fn as_ref(&self) -> &G::Value {
        self.getset.get()
    }
}
