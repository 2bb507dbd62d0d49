//! # Layer 2: Accessors
//!
//! The accessor types themselves and their customization point.
//!
//! - **Layout slot** (`members.rs`): `Overlay` (the layout contract behind
//!   every same-storage view) and `Members` (per-value-type customization:
//!   named member views plus behavior flags).
//! - **Shapes** (`proxy.rs`, `value.rs`): `Proxy<G>` mutates the referent in
//!   place; `Value<G>` reads, modifies a temporary, and writes back.
//! - **Operators** (`ops.rs`): the forwarded operator surface for both
//!   shapes.

pub mod members;
pub mod ops;
pub mod proxy;
pub mod value;

pub use members::{Members, MembersOverlay, Opaque, Overlay};
pub use proxy::Proxy;
pub use value::{Snapshot, Value};

/// Generates the shape-independent accessor surface: construction by
/// reference-cast, getter/setter plumbing, member projection, the named
/// member view, and formatting forwarded to the read value.
///
/// The two accessor shapes differ only in how they read and write; everything
/// here is common to both.
macro_rules! common_surface {
    ($Acc:ident, $GetTrait:ident) => {
        // SAFETY: `$Acc<G>` is `#[repr(transparent)]` over `G`.
        unsafe impl<G> crate::accessor::members::Overlay<G> for $Acc<G> {}

        impl<G: crate::getset::contract::GetSet> $Acc<G> {
            /// View a getter/setter as this accessor. The cast is
            /// layout-checked; no data moves.
            #[inline(always)]
            pub fn from_ref(getset: &G) -> &Self {
                <Self as crate::accessor::members::Overlay<G>>::of_ref(getset)
            }

            /// Mutable counterpart of [`Self::from_ref`].
            #[inline(always)]
            pub fn from_mut(getset: &mut G) -> &mut Self {
                <Self as crate::accessor::members::Overlay<G>>::of_mut(getset)
            }

            /// The embedded getter/setter, the accessor's only state.
            #[inline(always)]
            pub fn getset(&self) -> &G {
                &self.getset
            }

            #[inline(always)]
            pub fn getset_mut(&mut self) -> &mut G {
                &mut self.getset
            }

            /// The accessor of one projected member of the wrapped value.
            ///
            /// Available with no `Members` declaration: any accessor over a
            /// struct-valued getter can reach the struct's fields through a
            /// [`Project`](crate::getset::member::Project) marker.
            #[inline(always)]
            pub fn project<'a, P>(&'a self) -> &'a crate::getset::member::MemberAccessor<G, P>
            where
                P: crate::getset::member::Project<G::Value>,
                crate::getset::member::Member<G, P>: 'a,
            {
                crate::getset::member::project_ref(&self.getset)
            }

            /// Mutable counterpart of [`Self::project`].
            #[inline(always)]
            pub fn project_mut<'a, P>(
                &'a mut self,
            ) -> &'a mut crate::getset::member::MemberAccessor<G, P>
            where
                P: crate::getset::member::Project<G::Value>,
                crate::getset::member::Member<G, P>: 'a,
            {
                crate::getset::member::project_mut(&mut self.getset)
            }

            /// The named member view declared by the wrapped value's
            /// [`Members`](crate::accessor::members::Members) impl.
            #[inline(always)]
            pub fn members(&self) -> &crate::accessor::members::MembersOverlay<G::Value, G>
            where
                G::Value: crate::accessor::members::Members,
            {
                crate::accessor::members::Overlay::of_ref(&self.getset)
            }

            /// Mutable counterpart of [`Self::members`].
            #[inline(always)]
            pub fn members_mut(&mut self) -> &mut crate::accessor::members::MembersOverlay<G::Value, G>
            where
                G::Value: crate::accessor::members::Members,
            {
                crate::accessor::members::Overlay::of_mut(&mut self.getset)
            }
        }

        impl<G: crate::getset::contract::$GetTrait> core::fmt::Display for $Acc<G>
        where
            G::Value: core::fmt::Display,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.get(), f)
            }
        }

        impl<G: crate::getset::contract::$GetTrait> core::fmt::Debug for $Acc<G>
        where
            G::Value: core::fmt::Debug,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(&self.get(), f)
            }
        }
    };
}

pub(crate) use common_surface;
