//! # Layer 1: Getter/Setter Contract
//!
//! The traits a user-authored getter/setter must satisfy, plus the
//! member-projection adapters that derive new getter/setters from existing
//! ones.
//!
//! - **Contract** (`contract.rs`): `GetSet` classifies, `ProxyGet`/`ValueGet`
//!   read, `Set` writes. Capability detection is a trait bound, never a
//!   runtime check.
//! - **Projection** (`member.rs`): `Project` names one field of a wrapped
//!   value; `ProxyMember`/`ValueMember` turn that name into a getter/setter
//!   mirroring the outer accessor's shape.

pub mod contract;
pub mod member;

pub use contract::{GetSet, Property, ProxyGet, Set, ValueGet};
pub use member::{Member, MemberAccessor, Project, ProxyMember, ValueMember};
