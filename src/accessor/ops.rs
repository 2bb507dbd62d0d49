//! The forwarded operator surface.
//!
//! Read-only operators (arithmetic, bitwise, comparison, unary negation and
//! not) forward to the read value for both shapes; a value accessor never
//! runs its setter for these, even when the getter's result is a derived
//! quantity. Read-only operators never write back.
//!
//! Compound assignment is the mutating group: a proxy forwards it to the
//! referent in place; a value accessor performs exactly one `get`, the
//! operation on a temporary, and exactly one `set`.
//!
//! Member operator impls cover the accessor-as-left-operand case only, so a
//! separate grid lets the primitive numeric types take an accessor as the
//! right operand (`5 + acc`).

use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use crate::accessor::proxy::Proxy;
use crate::accessor::value::Value;
use crate::getset::contract::{GetSet, ProxyGet, Set, ValueGet};

// =============================================================================
// Read-only binary operators
// =============================================================================

macro_rules! read_only_binop {
    ($($Trait:ident :: $method:ident),+ $(,)?) => { $(
        impl<'a, G, Y> $Trait<Y> for &'a Proxy<G>
        where
            G: ProxyGet,
            &'a G::Value: $Trait<Y>,
        {
            type Output = <&'a G::Value as $Trait<Y>>::Output;

            #[inline(always)]
            fn $method(self, rhs: Y) -> Self::Output {
                self.get().$method(rhs)
            }
        }

        impl<G, Y> $Trait<Y> for &Value<G>
        where
            G: ValueGet,
            G::Value: $Trait<Y>,
        {
            type Output = <G::Value as $Trait<Y>>::Output;

            #[inline(always)]
            fn $method(self, rhs: Y) -> Self::Output {
                self.get().$method(rhs)
            }
        }
    )+ };
}

read_only_binop!(
    Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem,
    Shl::shl, Shr::shr, BitAnd::bitand, BitOr::bitor, BitXor::bitxor,
);

// =============================================================================
// Read-only unary operators
// =============================================================================

macro_rules! read_only_unop {
    ($($Trait:ident :: $method:ident),+ $(,)?) => { $(
        impl<'a, G> $Trait for &'a Proxy<G>
        where
            G: ProxyGet,
            &'a G::Value: $Trait,
        {
            type Output = <&'a G::Value as $Trait>::Output;

            #[inline(always)]
            fn $method(self) -> Self::Output {
                self.get().$method()
            }
        }

        impl<G> $Trait for &Value<G>
        where
            G: ValueGet,
            G::Value: $Trait,
        {
            type Output = <G::Value as $Trait>::Output;

            #[inline(always)]
            fn $method(self) -> Self::Output {
                self.get().$method()
            }
        }
    )+ };
}

read_only_unop!(Neg::neg, Not::not);

// =============================================================================
// Comparisons
// =============================================================================

impl<G, Y> PartialEq<Y> for Proxy<G>
where
    G: ProxyGet,
    G::Value: PartialEq<Y>,
{
    #[inline(always)]
    fn eq(&self, other: &Y) -> bool {
        self.get().eq(other)
    }
}

impl<G, Y> PartialOrd<Y> for Proxy<G>
where
    G: ProxyGet,
    G::Value: PartialOrd<Y>,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Y) -> Option<Ordering> {
        self.get().partial_cmp(other)
    }
}

impl<G, Y> PartialEq<Y> for Value<G>
where
    G: ValueGet,
    G::Value: PartialEq<Y>,
{
    #[inline(always)]
    fn eq(&self, other: &Y) -> bool {
        self.get().eq(other)
    }
}

impl<G, Y> PartialOrd<Y> for Value<G>
where
    G: ValueGet,
    G::Value: PartialOrd<Y>,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Y) -> Option<Ordering> {
        self.get().partial_cmp(other)
    }
}

// =============================================================================
// Subscript (proxy only: the result borrows from the referent)
// =============================================================================

impl<G, I> Index<I> for Proxy<G>
where
    G: ProxyGet,
    G::Value: Index<I>,
{
    type Output = <G::Value as Index<I>>::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &Self::Output {
        self.get().index(index)
    }
}

impl<G, I> IndexMut<I> for Proxy<G>
where
    G: ProxyGet,
    G::Value: IndexMut<I>,
{
    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.get_mut().index_mut(index)
    }
}

// =============================================================================
// Compound assignment
// =============================================================================

macro_rules! compound_assign {
    ($($Trait:ident :: $method:ident),+ $(,)?) => { $(
        // Proxy: mutate the referent in place, no temporary.
        impl<G, Y> $Trait<Y> for Proxy<G>
        where
            G: ProxyGet,
            G::Value: $Trait<Y>,
        {
            #[inline(always)]
            fn $method(&mut self, rhs: Y) {
                self.get_mut().$method(rhs);
            }
        }

        // Value: one get, the operation on a temporary, one set.
        impl<G, Y> $Trait<Y> for Value<G>
        where
            G: ValueGet + Set<<G as GetSet>::Value>,
            G::Value: $Trait<Y>,
        {
            #[inline(always)]
            fn $method(&mut self, rhs: Y) {
                self.modify(|value| value.$method(rhs));
            }
        }
    )+ };
}

compound_assign!(
    AddAssign::add_assign, SubAssign::sub_assign, MulAssign::mul_assign,
    DivAssign::div_assign, RemAssign::rem_assign,
    ShlAssign::shl_assign, ShrAssign::shr_assign,
    BitAndAssign::bitand_assign, BitOrAssign::bitor_assign, BitXorAssign::bitxor_assign,
);

// =============================================================================
// Right-hand-operand forwarding for primitive numerics
// =============================================================================

macro_rules! rhs_forward_ops {
    ($T:ty => $($Trait:ident :: $method:ident),+ $(,)?) => { $(
        impl<'a, G> $Trait<&'a Proxy<G>> for $T
        where
            G: ProxyGet<Value = $T>,
        {
            type Output = $T;

            #[inline(always)]
            fn $method(self, rhs: &'a Proxy<G>) -> $T {
                self.$method(*rhs.get())
            }
        }

        impl<'a, G> $Trait<&'a Value<G>> for $T
        where
            G: ValueGet<Value = $T>,
        {
            type Output = $T;

            #[inline(always)]
            fn $method(self, rhs: &'a Value<G>) -> $T {
                self.$method(rhs.get())
            }
        }
    )+ };
}

macro_rules! rhs_forward_int {
    ($($T:ty),+ $(,)?) => { $(
        rhs_forward_ops!($T =>
            Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem,
            Shl::shl, Shr::shr, BitAnd::bitand, BitOr::bitor, BitXor::bitxor,
        );
    )+ };
}

macro_rules! rhs_forward_float {
    ($($T:ty),+ $(,)?) => { $(
        rhs_forward_ops!($T => Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
    )+ };
}

rhs_forward_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
rhs_forward_float!(f32, f64);
