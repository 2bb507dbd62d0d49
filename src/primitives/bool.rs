//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.
//!
//! The accessor layer carries behavior flags (pointer emulation, implicit
//! conversion) as associated `Bool` types rather than `const bool`s, so that
//! methods can be gated by associated-type equality on stable Rust, e.g.
//! `where T: Members<ImplicitConversion = True>`.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else>.
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level true.
#[derive(Debug)]
pub struct True;

/// Type-level false.
#[derive(Debug)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// Conditional type alias.
pub type If<B, T, E> = <B as Bool>::If<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditional_selects_the_branch() {
        let chosen: If<True, u8, u16> = 7u8;
        let other: If<False, u8, u16> = 7u16;
        assert_eq!(u32::from(chosen), u32::from(other));
    }

    #[test]
    fn truth_table() {
        assert!(<True as Bool>::VALUE);
        assert!(!<False as Bool>::VALUE);
        assert!(<<True as Bool>::And<True> as Bool>::VALUE);
        assert!(!<<True as Bool>::And<False> as Bool>::VALUE);
        assert!(<<False as Bool>::Or<True> as Bool>::VALUE);
        assert!(<<False as Bool>::Not as Bool>::VALUE);
    }
}
