//! The forwarded operator surface on both accessor shapes.

use prop_access::prelude::*;

struct Machine {
    word: i32,
    flags: u8,
    ratio: f64,
}

properties! {
    struct MachineView for Machine {
        proxy word: i32 { |m| m.word }
        proxy flags: u8 { |m| m.flags }

        value scaled: i32 {
            get |m| m.word * 10;
            set |m, v| m.word = v / 10;
        }

        value ratio: f64 {
            get |m| m.ratio;
            set |m, r| m.ratio = r;
        }
    }
}

fn sample() -> MachineView {
    MachineView::new(Machine { word: 7, flags: 0b1010_0110, ratio: 1.5 })
}

// =============================================================================
// Read-only binary operators
// =============================================================================

#[test]
fn arithmetic_on_a_proxy() {
    let m = sample();
    assert_eq!(m.word() + 3, 10);
    assert_eq!(m.word() - 2, 5);
    assert_eq!(m.word() * 3, 21);
    assert_eq!(m.word() / 2, 3);
    assert_eq!(m.word() % 4, 3);
}

#[test]
fn bitwise_and_shifts_on_a_proxy() {
    let m = sample();
    assert_eq!(m.flags() & 0x0Fu8, 0b0110);
    assert_eq!(m.flags() | 0x01u8, 0b1010_0111);
    assert_eq!(m.flags() ^ 0xFFu8, 0b0101_1001);
    assert_eq!(m.flags() << 1u8, 0b0100_1100);
    assert_eq!(m.flags() >> 2u8, 0b0010_1001);
}

#[test]
fn arithmetic_on_a_value() {
    let m = sample();
    assert_eq!(m.scaled() + 1, 71);
    assert_eq!(m.scaled() % 7, 0);
    assert_eq!(m.ratio() * 2.0, 3.0);
    assert_eq!(m.ratio() - 0.5, 1.0);
}

// =============================================================================
// Unary operators
// =============================================================================

#[test]
fn negation_and_not() {
    let m = sample();
    assert_eq!(-m.word(), -7);
    assert_eq!(!m.flags(), 0b0101_1001);
    assert_eq!(-m.scaled(), -70);
}

// =============================================================================
// Comparisons
// =============================================================================

#[test]
fn comparisons_read_the_current_value() {
    let m = sample();
    assert!(*m.word() == 7);
    assert!(*m.word() < 8);
    assert!(*m.scaled() == 70);
    assert!(*m.scaled() >= 70);
    assert!(*m.ratio() > 1.0);
}

// =============================================================================
// Compound assignment
// =============================================================================

#[test]
fn proxy_compound_assignment_mutates_in_place() {
    let mut m = sample();
    *m.word_mut() += 5;
    assert_eq!(m.actual().word, 12);

    *m.word_mut() *= 2;
    assert_eq!(m.actual().word, 24);

    *m.flags_mut() &= 0x0F;
    assert_eq!(m.actual().flags, 0b0110);

    *m.flags_mut() <<= 1;
    assert_eq!(m.actual().flags, 0b1100);
}

#[test]
fn value_compound_assignment_round_trips_the_setter() {
    let mut m = sample();
    // get sees 70, the temporary becomes 80, the setter stores 80 / 10.
    *m.scaled_mut() += 10;
    assert_eq!(m.actual().word, 8);
    assert_eq!(m.scaled().get(), 80);

    *m.ratio_mut() /= 3.0;
    assert_eq!(m.actual().ratio, 0.5);
}

// =============================================================================
// Accessor as the right operand
// =============================================================================

#[test]
fn primitives_take_a_proxy_on_the_right() {
    let m = sample();
    assert_eq!(10 + m.word(), 17);
    assert_eq!(10 - m.word(), 3);
    assert_eq!(2 * m.word(), 14);
    assert_eq!(100 / m.word(), 14);
    assert_eq!(100 % m.word(), 2);
    assert_eq!(0xF0u8 & m.flags(), 0b1010_0000);
}

#[test]
fn primitives_take_a_value_on_the_right() {
    let m = sample();
    assert_eq!(1 + m.scaled(), 71);
    assert_eq!(700 / m.scaled(), 10);
    assert_eq!(6.0 * m.ratio(), 9.0);
    assert_eq!(2.0 - m.ratio(), 0.5);
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn formatting_forwards_to_the_read_value() {
    let m = sample();
    assert_eq!(format!("{}", m.word()), "7");
    assert_eq!(format!("{}", m.scaled()), "70");
    assert_eq!(format!("{:?}", m.ratio()), "1.5");
}
