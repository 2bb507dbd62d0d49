//! The value accessor: a synthetic field backed by an object-returning
//! getter and, optionally, a setter.

use core::ops::Deref;

use crate::accessor::common_surface;
use crate::accessor::members::Members;
use crate::getset::contract::{GetSet, Set, ValueGet};
use crate::primitives::bool::True;

/// Accessor over a value-shaped getter/setter.
///
/// Every read materializes an independent copy with expression lifetime;
/// every write runs the setter. Compound mutation goes through
/// [`Value::modify`]: exactly one `get`, the mutation on a local temporary,
/// exactly one `set`. Callers reasoning about the underlying object's
/// synchronization discipline can treat it as a single logical critical
/// section bounded by those two calls.
///
/// There is no stable address for a transient value, so `Value` does not
/// dereference; use [`Value::read`] for dotted access to a materialized
/// copy.
#[repr(transparent)]
pub struct Value<G> {
    getset: G,
}

common_surface!(Value, ValueGet);

impl<G: ValueGet> Value<G> {
    /// Materialize the current value. Each call yields an independently
    /// owned copy; mutating it never affects the underlying storage.
    #[inline(always)]
    pub fn get(&self) -> G::Value {
        self.getset.get()
    }

    /// Materialize the current value behind a guard, for dotted access to
    /// its members and methods. The guard owns the copy.
    #[inline(always)]
    pub fn read(&self) -> Snapshot<G::Value> {
        Snapshot { value: self.getset.get() }
    }

    /// Run the setter. Enabled for every argument type the getter/setter
    /// accepts.
    #[inline(always)]
    pub fn set<Y>(&mut self, value: Y)
    where
        G: Set<Y>,
    {
        self.getset.set(value);
    }

    /// Run the setter, returning the pre-mutation value. One `get`, one
    /// `set`.
    #[inline(always)]
    pub fn replace(&mut self, value: G::Value) -> G::Value
    where
        G: Set<<G as GetSet>::Value>,
    {
        let previous = self.getset.get();
        self.getset.set(value);
        previous
    }

    /// Read-modify-write through a temporary: exactly one `get`, then `f`,
    /// then exactly one `set`.
    #[inline(always)]
    pub fn modify<R>(&mut self, f: impl FnOnce(&mut G::Value) -> R) -> R
    where
        G: Set<<G as GetSet>::Value>,
    {
        let mut value = self.getset.get();
        let result = f(&mut value);
        self.getset.set(value);
        result
    }

    /// Assign from another accessor of the same instantiated type: reads the
    /// right-hand accessor's current value and runs this one's setter.
    #[inline(always)]
    pub fn assign_from(&mut self, other: &Self)
    where
        G: Set<<G as GetSet>::Value>,
    {
        let value = other.getset.get();
        self.getset.set(value);
    }

    /// Convert the current value to `T`. The explicit conversion path,
    /// always available.
    #[inline(always)]
    pub fn to<T>(&self) -> T
    where
        T: From<G::Value>,
    {
        T::from(self.get())
    }

    /// Convert the current value to `T` without naming the getter; only for
    /// value types that opted in with `ImplicitConversion = True`.
    #[inline(always)]
    pub fn coerce<T>(&self) -> T
    where
        G::Value: Members<ImplicitConversion = True>,
        T: From<G::Value>,
    {
        T::from(self.get())
    }
}

/// An owned copy materialized by a value accessor, held for dotted access.
///
/// The guard is read-only: mutating a snapshot would silently discard the
/// changes on drop, so mutation must go through
/// [`Value::modify`]/[`Value::set`] instead.
pub struct Snapshot<T> {
    value: T,
}

impl<T> Snapshot<T> {
    /// Take ownership of the materialized copy.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.value
    }
}
