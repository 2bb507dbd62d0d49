//! # Layer 3: Declarative syntax
//!
//! `properties!` and `members!` generate conforming contract types; they add
//! no semantics of their own. Everything they emit can be hand-written with
//! the traits from the lower layers.
//!
//! - [`properties!`](crate::properties) declares a property block: a
//!   `#[repr(transparent)]` wrapper over the actual storage exposing one
//!   accessor per declared property, all views of the same bytes.
//! - [`members!`](crate::members) declares the named member view for a
//!   wrapped value type (the `Members` customization point).
//! - [`project!`](crate::project) (defined next to the `Project` trait)
//!   generates a single field marker.

/// Declare a property block over an actual storage type.
///
/// ```
/// use prop_access::properties;
///
/// struct Angle { radians: f64 }
///
/// properties! {
///     pub struct AngleView for Angle {
///         proxy radians: f64 { |a| a.radians }
///         value degrees: f64 {
///             get |a| a.radians.to_degrees();
///             set |a, d| a.radians = d.to_radians();
///         }
///     }
/// }
///
/// let mut angle = AngleView::new(Angle { radians: core::f64::consts::PI });
/// assert_eq!(angle.degrees().get(), 180.0);
/// angle.degrees_mut().set(90.0);
/// assert_eq!(*angle.radians(), core::f64::consts::FRAC_PI_2);
/// ```
///
/// Entry forms:
///
/// - `proxy NAME: TYPE { |r| EXPR }`: `EXPR` must be a place within `r`;
///   the property behaves like a reference to it.
/// - `value NAME: TYPE { get |r| EXPR; }`: read-only derived value.
/// - `value NAME: TYPE { get |r| EXPR; set |r, v| EXPR; }`: read/write
///   derived value; the get and set expressions need not be inverses.
///
/// Each property is reached through `block.NAME()` / `block.NAME_mut()`.
#[macro_export]
macro_rules! properties {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Block:ident for $Actual:ty {
            $($entries:tt)*
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        $vis struct $Block {
            actual: $Actual,
        }

        impl $Block {
            /// Wrap the actual storage in the property block.
            #[inline(always)]
            $vis fn new(actual: $Actual) -> Self {
                Self { actual }
            }

            /// The actual storage.
            #[inline(always)]
            $vis fn actual(&self) -> &$Actual {
                &self.actual
            }

            #[inline(always)]
            $vis fn actual_mut(&mut self) -> &mut $Actual {
                &mut self.actual
            }

            #[inline(always)]
            $vis fn into_actual(self) -> $Actual {
                self.actual
            }
        }

        $crate::__properties_entries! { ($Block, $Actual, $vis) $($entries)* }
    };
}

/// Implementation detail of [`properties!`]: one recursion step per entry.
#[doc(hidden)]
#[macro_export]
macro_rules! __properties_entries {
    ( ($Block:ident, $Actual:ty, $vis:vis) ) => {};

    // ---- proxy entry ---------------------------------------------------
    ( ($Block:ident, $Actual:ty, $vis:vis)
      $(#[$meta:meta])*
      proxy $name:ident : $T:ty { |$r:ident| $place:expr }
      $($rest:tt)*
    ) => {
        $crate::paste::paste! {
            #[doc(hidden)]
            #[repr(transparent)]
            $vis struct [<$Block $name:camel GetSet>] {
                actual: $Actual,
            }

            impl $crate::GetSet for [<$Block $name:camel GetSet>] {
                type Value = $T;
                type Shape = $crate::ByProxy;
            }

            impl $crate::ProxyGet for [<$Block $name:camel GetSet>] {
                #[inline(always)]
                fn get(&self) -> &$T {
                    let $r = &self.actual;
                    &$place
                }

                #[inline(always)]
                fn get_mut(&mut self) -> &mut $T {
                    let $r = &mut self.actual;
                    &mut $place
                }
            }

            // SAFETY: `#[repr(transparent)]` over the actual storage.
            unsafe impl $crate::Overlay<$Actual> for [<$Block $name:camel GetSet>] {}

            impl $Block {
                $(#[$meta])*
                #[inline(always)]
                $vis fn $name(&self) -> &$crate::Property<[<$Block $name:camel GetSet>]> {
                    let getset = <[<$Block $name:camel GetSet>]
                        as $crate::Overlay<$Actual>>::of_ref(&self.actual);
                    <$crate::Property<[<$Block $name:camel GetSet>]>
                        as $crate::Overlay<[<$Block $name:camel GetSet>]>>::of_ref(getset)
                }

                $(#[$meta])*
                #[inline(always)]
                $vis fn [<$name _mut>](&mut self) -> &mut $crate::Property<[<$Block $name:camel GetSet>]> {
                    let getset = <[<$Block $name:camel GetSet>]
                        as $crate::Overlay<$Actual>>::of_mut(&mut self.actual);
                    <$crate::Property<[<$Block $name:camel GetSet>]>
                        as $crate::Overlay<[<$Block $name:camel GetSet>]>>::of_mut(getset)
                }
            }
        }

        $crate::__properties_entries! { ($Block, $Actual, $vis) $($rest)* }
    };

    // ---- value entry (optional setter) ---------------------------------
    ( ($Block:ident, $Actual:ty, $vis:vis)
      $(#[$meta:meta])*
      value $name:ident : $T:ty {
          get |$g:ident| $get:expr ;
          $( set |$s:ident, $v:ident| $set:expr ; )?
      }
      $($rest:tt)*
    ) => {
        $crate::paste::paste! {
            #[doc(hidden)]
            #[repr(transparent)]
            $vis struct [<$Block $name:camel GetSet>] {
                actual: $Actual,
            }

            impl $crate::GetSet for [<$Block $name:camel GetSet>] {
                type Value = $T;
                type Shape = $crate::ByValue;
            }

            impl $crate::ValueGet for [<$Block $name:camel GetSet>] {
                #[inline(always)]
                fn get(&self) -> $T {
                    let $g = &self.actual;
                    $get
                }
            }

            $(
                impl $crate::Set<$T> for [<$Block $name:camel GetSet>] {
                    #[inline(always)]
                    fn set(&mut self, value: $T) {
                        let $s = &mut self.actual;
                        let $v = value;
                        $set;
                    }
                }
            )?

            // SAFETY: `#[repr(transparent)]` over the actual storage.
            unsafe impl $crate::Overlay<$Actual> for [<$Block $name:camel GetSet>] {}

            impl $Block {
                $(#[$meta])*
                #[inline(always)]
                $vis fn $name(&self) -> &$crate::Property<[<$Block $name:camel GetSet>]> {
                    let getset = <[<$Block $name:camel GetSet>]
                        as $crate::Overlay<$Actual>>::of_ref(&self.actual);
                    <$crate::Property<[<$Block $name:camel GetSet>]>
                        as $crate::Overlay<[<$Block $name:camel GetSet>]>>::of_ref(getset)
                }

                $(#[$meta])*
                #[inline(always)]
                $vis fn [<$name _mut>](&mut self) -> &mut $crate::Property<[<$Block $name:camel GetSet>]> {
                    let getset = <[<$Block $name:camel GetSet>]
                        as $crate::Overlay<$Actual>>::of_mut(&mut self.actual);
                    <$crate::Property<[<$Block $name:camel GetSet>]>
                        as $crate::Overlay<[<$Block $name:camel GetSet>]>>::of_mut(getset)
                }
            }
        }

        $crate::__properties_entries! { ($Block, $Actual, $vis) $($rest)* }
    };
}

/// Declare the named member view for a wrapped value type.
///
/// ```
/// use prop_access::{members, properties};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// pub struct Point { pub x: f32, pub y: f32 }
///
/// members! {
///     pub impl Point {
///         x: f32,
///         y: f32,
///     }
/// }
///
/// pub struct Segment { a: Point, b: Point }
///
/// properties! {
///     pub struct SegmentView for Segment {
///         proxy a: Point { |s| s.a }
///     }
/// }
///
/// let mut seg = SegmentView::new(Segment {
///     a: Point { x: 1.0, y: 2.0 },
///     b: Point { x: 3.0, y: 4.0 },
/// });
/// **seg.a_mut().members_mut().x_mut() = 9.0;
/// assert_eq!(seg.actual().a.x, 9.0);
/// ```
///
/// Modifiers before `impl` set the behavior flags:
///
/// - `implicit` sets `ImplicitConversion = True`, enabling `coerce` on
///   accessors over `T`.
/// - `detached` sets `PointerEmulation = False`: the view exposes only the
///   named members and does not fall through to the plain accessor surface.
///
/// Both may be combined, in the order `detached implicit`.
#[macro_export]
macro_rules! members {
    (
        $(#[$meta:meta])*
        $vis:vis impl $Owner:ident {
            $($field:ident : $T:ty),+ $(,)?
        }
    ) => {
        $crate::__members_impl! {
            ($vis, $Owner, $crate::True, $crate::False) $(#[$meta])* { $($field : $T),+ }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis implicit impl $Owner:ident {
            $($field:ident : $T:ty),+ $(,)?
        }
    ) => {
        $crate::__members_impl! {
            ($vis, $Owner, $crate::True, $crate::True) $(#[$meta])* { $($field : $T),+ }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis detached impl $Owner:ident {
            $($field:ident : $T:ty),+ $(,)?
        }
    ) => {
        $crate::__members_impl! {
            ($vis, $Owner, $crate::False, $crate::False) $(#[$meta])* { $($field : $T),+ }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis detached implicit impl $Owner:ident {
            $($field:ident : $T:ty),+ $(,)?
        }
    ) => {
        $crate::__members_impl! {
            ($vis, $Owner, $crate::False, $crate::True) $(#[$meta])* { $($field : $T),+ }
        }
    };
}

/// Implementation detail of [`members!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __members_impl {
    ( ($vis:vis, $Owner:ident, $Pointer:ty, $Implicit:ty)
      $(#[$meta:meta])*
      { $($field:ident : $T:ty),+ }
    ) => {
        $crate::paste::paste! {
            $(
                #[doc(hidden)]
                $vis struct [<$Owner $field:camel Field>];

                impl $crate::Project<$Owner> for [<$Owner $field:camel Field>] {
                    type Field = $T;

                    #[inline(always)]
                    fn project(owner: &$Owner) -> &$T {
                        &owner.$field
                    }

                    #[inline(always)]
                    fn project_mut(owner: &mut $Owner) -> &mut $T {
                        &mut owner.$field
                    }

                    #[inline(always)]
                    fn take(owner: $Owner) -> $T {
                        owner.$field
                    }
                }
            )+

            $(#[$meta])*
            #[repr(transparent)]
            $vis struct [<$Owner Members>]<G> {
                getset: G,
            }

            // SAFETY: `#[repr(transparent)]` over `G`.
            unsafe impl<G: $crate::GetSet<Value = $Owner>> $crate::Overlay<G>
                for [<$Owner Members>]<G> {}

            impl $crate::Members for $Owner {
                type View<G: $crate::GetSet<Value = Self>> = [<$Owner Members>]<G>;
                type PointerEmulation = $Pointer;
                type ImplicitConversion = $Implicit;
            }

            impl<G: $crate::GetSet<Value = $Owner>> [<$Owner Members>]<G> {
                $(
                    #[inline(always)]
                    $vis fn $field(&self)
                        -> &$crate::MemberAccessor<G, [<$Owner $field:camel Field>]>
                    {
                        $crate::project_ref(&self.getset)
                    }

                    #[inline(always)]
                    $vis fn [<$field _mut>](&mut self)
                        -> &mut $crate::MemberAccessor<G, [<$Owner $field:camel Field>]>
                    {
                        $crate::project_mut(&mut self.getset)
                    }
                )+
            }

            // Pointer-emulating views deref through to the plain accessor,
            // so the built-in surface stays reachable. The flag bound keeps
            // this impl inert for `detached` declarations.
            impl<G: $crate::GetSet<Value = $Owner>> ::core::ops::Deref for [<$Owner Members>]<G>
            where
                <G as $crate::GetSet>::Value:
                    $crate::Members<PointerEmulation = $crate::True>,
            {
                type Target = $crate::Property<G>;

                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    <$crate::Property<G> as $crate::Overlay<G>>::of_ref(&self.getset)
                }
            }
        }
    };
}
