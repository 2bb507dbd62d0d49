//! Member projection: deriving a getter/setter for one field of a wrapped
//! value.
//!
//! [`Project`] is the Rust rendering of a pointer-to-member: a zero-sized
//! marker naming one field of an owner type. Composing a projection with an
//! existing getter/setter yields a new getter/setter whose classification
//! mirrors the outer one:
//!
//! - outer proxy -> [`ProxyMember`]: reads and writes go through the outer
//!   reference for free;
//! - outer value -> [`ValueMember`]: a read copies the whole outer value and
//!   moves the field out; a write copies the whole outer value, assigns the
//!   one field, and hands the modified copy to the outer setter.
//!
//! The whole-object copy in the value variant is contractual, not an
//! implementation shortcut: the outer getter's result has expression
//! lifetime, so no reference into it can outlive the call. Each write costs
//! exactly one outer `get` and one outer `set`.

use core::marker::PhantomData;

use crate::accessor::members::Overlay;
use crate::getset::contract::{GetSet, Property, ProxyGet, Set, ValueGet};
use crate::primitives::shape::{ByProxy, ByValue, Shape};

/// A zero-sized marker projecting one field out of `T`.
///
/// Usually generated with [`project!`](crate::project) or as part of a
/// [`members!`](crate::members) block.
pub trait Project<T> {
    /// The field's type.
    type Field;

    fn project(owner: &T) -> &Self::Field;
    fn project_mut(owner: &mut T) -> &mut Self::Field;

    /// Move the field out of an owned value.
    fn take(owner: T) -> Self::Field;
}

/// The member-projection adapter selected by the outer shape.
pub type Member<G, P> = <<G as GetSet>::Shape as Shape>::MemberOf<G, P>;

/// The accessor synthesized over a member projection.
pub type MemberAccessor<G, P> = Property<Member<G, P>>;

// =============================================================================
// Proxy variant
// =============================================================================

/// Projection through a proxy-shaped outer getter/setter.
#[repr(transparent)]
pub struct ProxyMember<G, P> {
    outer: G,
    _marker: PhantomData<fn() -> P>,
}

impl<G, P> GetSet for ProxyMember<G, P>
where
    G: GetSet<Shape = ByProxy>,
    P: Project<G::Value>,
{
    type Value = P::Field;
    type Shape = ByProxy;
}

impl<G, P> ProxyGet for ProxyMember<G, P>
where
    G: ProxyGet,
    P: Project<G::Value>,
{
    #[inline(always)]
    fn get(&self) -> &P::Field {
        P::project(self.outer.get())
    }

    #[inline(always)]
    fn get_mut(&mut self) -> &mut P::Field {
        P::project_mut(self.outer.get_mut())
    }
}

// SAFETY: `#[repr(transparent)]` over `G` (the marker is zero-sized).
unsafe impl<G, P> Overlay<G> for ProxyMember<G, P> {}

// =============================================================================
// Value variant
// =============================================================================

/// Projection through a value-shaped outer getter/setter.
#[repr(transparent)]
pub struct ValueMember<G, P> {
    outer: G,
    _marker: PhantomData<fn() -> P>,
}

impl<G, P> GetSet for ValueMember<G, P>
where
    G: GetSet<Shape = ByValue>,
    P: Project<G::Value>,
{
    type Value = P::Field;
    type Shape = ByValue;
}

impl<G, P> ValueGet for ValueMember<G, P>
where
    G: ValueGet,
    P: Project<G::Value>,
{
    #[inline(always)]
    fn get(&self) -> P::Field {
        P::take(self.outer.get())
    }
}

impl<G, P> Set<P::Field> for ValueMember<G, P>
where
    G: ValueGet + Set<<G as GetSet>::Value>,
    P: Project<G::Value>,
{
    fn set(&mut self, field: P::Field) {
        // One outer get, one outer set. Never a reference into the temporary.
        let mut whole = self.outer.get();
        *P::project_mut(&mut whole) = field;
        self.outer.set(whole);
    }
}

// SAFETY: `#[repr(transparent)]` over `G` (the marker is zero-sized).
unsafe impl<G, P> Overlay<G> for ValueMember<G, P> {}

// =============================================================================
// Projection entry points
// =============================================================================

/// View a getter/setter as the accessor of one projected member.
///
/// Both casts are layout-checked: the adapter overlays `G` and the accessor
/// overlays the adapter, so the result points at the same storage as
/// `getset`. The `Member<G, P>: 'a` bound covers the intermediate adapter
/// reference, which does not appear in the signature.
#[inline(always)]
pub fn project_ref<'a, G, P>(getset: &'a G) -> &'a MemberAccessor<G, P>
where
    G: GetSet,
    P: Project<G::Value>,
    Member<G, P>: 'a,
{
    let member = <Member<G, P> as Overlay<G>>::of_ref(getset);
    <MemberAccessor<G, P> as Overlay<Member<G, P>>>::of_ref(member)
}

/// Mutable counterpart of [`project_ref`].
#[inline(always)]
pub fn project_mut<'a, G, P>(getset: &'a mut G) -> &'a mut MemberAccessor<G, P>
where
    G: GetSet,
    P: Project<G::Value>,
    Member<G, P>: 'a,
{
    let member = <Member<G, P> as Overlay<G>>::of_mut(getset);
    <MemberAccessor<G, P> as Overlay<Member<G, P>>>::of_mut(member)
}

/// Generate a [`Project`] marker for one named field.
///
/// ```
/// struct Point { x: f32, y: f32 }
///
/// prop_access::project!(pub PointX for Point => x: f32);
/// ```
#[macro_export]
macro_rules! project {
    ($(#[$meta:meta])* $vis:vis $Marker:ident for $Owner:ty => $field:ident : $Field:ty) => {
        $(#[$meta])*
        $vis struct $Marker;

        impl $crate::Project<$Owner> for $Marker {
            type Field = $Field;

            #[inline(always)]
            fn project(owner: &$Owner) -> &$Field {
                &owner.$field
            }

            #[inline(always)]
            fn project_mut(owner: &mut $Owner) -> &mut $Field {
                &mut owner.$field
            }

            #[inline(always)]
            fn take(owner: $Owner) -> $Field {
                owner.$field
            }
        }
    };
}
