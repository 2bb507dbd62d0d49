//! The layout slot: same-storage views and the per-type customization point.
//!
//! The whole design rests on one guarantee: every view layered over a
//! getter/setter (the accessor itself, a member-projection adapter, a named
//! member view) occupies exactly the bytes of that getter/setter, which in
//! turn occupies exactly the bytes of the actual storage. Many differently
//! typed views over one memory region, mutually exclusive by borrow rules.
//!
//! [`Overlay`] is that guarantee as a trait. Its casts evaluate a `const`
//! assertion comparing size and alignment, so a view that breaks the layout
//! contract is a hard compile error, never a warning: aliasing through a
//! mismatched view would be undefined behavior, so the violation is treated
//! as fatal and non-recoverable.

use crate::getset::contract::GetSet;
use crate::primitives::bool::Bool;

/// A view with the exact memory layout of `G`.
///
/// # Safety
///
/// Implementors must be `#[repr(transparent)]` over `G` (a zero-sized marker
/// field is fine). The provided casts additionally assert size and alignment
/// equality at monomorphization time, which catches declaration mistakes but
/// cannot prove field-order transparency; that part is the implementor's
/// promise. The default bodies must not be overridden.
pub unsafe trait Overlay<G>: Sized {
    /// Cast a getter/setter reference to this view.
    #[inline(always)]
    fn of_ref(getset: &G) -> &Self {
        const {
            assert!(
                core::mem::size_of::<Self>() == core::mem::size_of::<G>()
                    && core::mem::align_of::<Self>() == core::mem::align_of::<G>(),
                "overlay layout must be identical to the getter/setter it covers"
            )
        }
        // SAFETY: layout equality asserted above; transparency is the
        // implementor's contract.
        unsafe { &*core::ptr::from_ref(getset).cast::<Self>() }
    }

    /// Mutable counterpart of [`Overlay::of_ref`].
    #[inline(always)]
    fn of_mut(getset: &mut G) -> &mut Self {
        const {
            assert!(
                core::mem::size_of::<Self>() == core::mem::size_of::<G>()
                    && core::mem::align_of::<Self>() == core::mem::align_of::<G>(),
                "overlay layout must be identical to the getter/setter it covers"
            )
        }
        // SAFETY: as in `of_ref`.
        unsafe { &mut *core::ptr::from_mut(getset).cast::<Self>() }
    }
}

/// Per-value-type accessor customization.
///
/// Implementing `Members` for a wrapped value type `T` gives every accessor
/// whose getter yields `T` a named member view ([`Members::View`], reached
/// through `accessor.members()`) and a pair of behavior flags. Types without
/// an impl simply use the accessors' built-in surface (dereference, raw
/// projection, the operator set), which is the default "the accessor behaves
/// like a pointer to its value" behavior.
///
/// Usually declared with the [`members!`](crate::members) macro.
pub trait Members: Sized {
    /// The named member view overlaid on any getter/setter wrapping `Self`.
    ///
    /// Must satisfy the [`Overlay`] layout contract: the view holds the
    /// getter/setter and nothing else.
    type View<G: GetSet<Value = Self>>: Overlay<G>;

    /// When `True`, the view derefs through to the plain accessor, so the
    /// built-in surface stays reachable alongside the named members.
    type PointerEmulation: Bool;

    /// When `True`, accessors over `Self` allow
    /// [`coerce`](crate::accessor::value::Value::coerce)-style conversion to
    /// any `T: From<Self>`. Off by default: an unconstrained conversion
    /// surface invites inference ambiguity, so it must be opted into.
    type ImplicitConversion: Bool;
}

/// The named member view of `T` over getter/setter `G`.
pub type MembersOverlay<T, G> = <T as Members>::View<G>;

/// The default, fully opaque view: holds the getter/setter alone and names
/// nothing. Useful for hand-written [`Members`] impls that only want to set
/// flags.
#[repr(transparent)]
pub struct Opaque<G> {
    getset: G,
}

impl<G> Opaque<G> {
    #[inline(always)]
    pub fn getset(&self) -> &G {
        &self.getset
    }
}

// SAFETY: `#[repr(transparent)]` over `G`.
unsafe impl<G> Overlay<G> for Opaque<G> {}
