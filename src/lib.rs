#![cfg_attr(not(feature = "std"), no_std)]

//! # prop-access
//!
//! Synthetic struct fields ("properties") with zero runtime overhead.
//!
//! A property accessor makes arbitrary getter/setter logic look like an
//! ordinary data member: it supports dereferencing, arithmetic, comparison,
//! indexing and assignment-style mutation, yet every operation compiles down
//! to a direct call on the user's `get`/`set` code. The accessor carries no
//! state of its own: it is a layout-checked view over the storage the
//! getter/setter already owns.
//!
//! ## Architecture
//!
//! Every getter/setter type resolves, exactly once, to one of two shapes:
//!
//! ```text
//! GetSet::Shape -> ByProxy  -> Proxy<G>   (get() yields &T; mutation is in place)
//!               -> ByValue  -> Value<G>   (get() yields T; mutation is get/modify/set)
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (True/False), Shape (ByProxy/ByValue, accessor selector)  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Getter/Setter Contract                                  |
//! |  - GetSet, ProxyGet, ValueGet, Set (capability traits)            |
//! |  - Project, ProxyMember, ValueMember (member projection)          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Accessors                                               |
//! |  - Overlay, Members (layout slot / customization point)           |
//! |  - Proxy, Value, Snapshot (accessor shapes + operator surface)    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Syntax                                                  |
//! |  - properties!, members!, project! (generate conforming types)    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use prop_access::properties;
//!
//! #[derive(Clone, Copy)]
//! struct Rect { x1: i32, x2: i32 }
//!
//! properties! {
//!     pub struct Span for Rect {
//!         // Proxy property: behaves like a reference to `x1`.
//!         proxy x1: i32 { |r| r.x1 }
//!         // Value property: a derived quantity with read/write transforms.
//!         value width: i32 {
//!             get |r| r.x2 - r.x1;
//!             set |r, w| r.x2 = r.x1 + w;
//!         }
//!     }
//! }
//!
//! let mut s = Span::new(Rect { x1: 0, x2: 2 });
//! assert_eq!(*s.x1(), 0);
//! assert_eq!(s.width().get(), 2);
//! *s.width_mut() += 2;                 // one get, one set
//! assert_eq!(s.actual().x2, 4);
//! ```
//!
//! ## Error model
//!
//! There is exactly one error taxonomy: compile-time constraint violation.
//! Contract violations (a proxy that declares a setter, a shape outside the
//! closed `ByProxy`/`ByValue` set) are unimplementable by construction;
//! unsupported operations surface as unmet trait bounds at the call site;
//! layout mismatches fail a `const` assertion during monomorphization.
//! Nothing in this crate can fail at runtime.

// Re-export paste for the code-generating macros.
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Getter/Setter Contract
// =============================================================================
pub mod getset;

// =============================================================================
// Layer 2: Accessors
// =============================================================================
pub mod accessor;

// =============================================================================
// Layer 3: Syntax macros (properties!, members!, project!)
// =============================================================================
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Bool, False, True};
pub use primitives::shape::{ByProxy, ByValue, Shape};

pub use getset::contract::{GetSet, Property, ProxyGet, Set, ValueGet};
pub use getset::member::{
    Member, MemberAccessor, Project, ProxyMember, ValueMember, project_mut, project_ref,
};

pub use accessor::members::{Members, MembersOverlay, Opaque, Overlay};
pub use accessor::proxy::Proxy;
pub use accessor::value::{Snapshot, Value};

/// Common items for declaring and consuming property accessors.
pub mod prelude {
    pub use crate::accessor::members::{Members, Overlay};
    pub use crate::accessor::proxy::Proxy;
    pub use crate::accessor::value::{Snapshot, Value};
    pub use crate::getset::contract::{GetSet, Property, ProxyGet, Set, ValueGet};
    pub use crate::getset::member::{Member, MemberAccessor, Project};
    pub use crate::primitives::shape::{ByProxy, ByValue, Shape};
    // members!, project! and properties! are #[macro_export] so they live at
    // the crate root.
    pub use crate::{members, project, properties};
}
