//! Value accessors: independent copies, setter transforms, and the
//! one-get-one-set contract for compound mutation.

use core::cell::Cell;

use prop_access::prelude::*;

// =============================================================================
// Instrumented storage: every get and set is counted
// =============================================================================

struct Counted {
    stored: i32,
    gets: Cell<u32>,
    sets: Cell<u32>,
}

properties! {
    struct CountedView for Counted {
        // Getter and setter are deliberately not inverses: reads see
        // `stored + 2`, writes store `v - 1`.
        value skewed: i32 {
            get |c| {
                c.gets.set(c.gets.get() + 1);
                c.stored + 2
            };
            set |c, v| {
                c.sets.set(c.sets.get() + 1);
                c.stored = v - 1;
            };
        }
    }
}

fn counted(stored: i32) -> CountedView {
    CountedView::new(Counted { stored, gets: Cell::new(0), sets: Cell::new(0) })
}

#[test]
fn round_trip_applies_both_transforms() {
    let mut view = counted(0);
    view.skewed_mut().set(10);
    assert_eq!(view.actual().stored, 9);
    // Reading reflects the getter's transform, not the assigned value.
    assert_eq!(view.skewed().get(), 11);
}

#[test]
fn compound_assignment_is_one_get_one_set() {
    let mut view = counted(5);
    *view.skewed_mut() += 2;

    assert_eq!(view.actual().gets.get(), 1);
    assert_eq!(view.actual().sets.get(), 1);
    // get saw 7, wrote back 9, setter stored 8.
    assert_eq!(view.actual().stored, 8);
}

#[test]
fn modify_is_one_get_one_set() {
    let mut view = counted(5);
    let doubled = view.skewed_mut().modify(|v| {
        *v *= 2;
        *v
    });

    assert_eq!(doubled, 14);
    assert_eq!(view.actual().gets.get(), 1);
    assert_eq!(view.actual().sets.get(), 1);
}

#[test]
fn replace_returns_the_pre_mutation_copy() {
    let mut view = counted(5);
    let before = view.skewed_mut().replace(100);

    assert_eq!(before, 7);
    assert_eq!(view.actual().stored, 99);
    assert_eq!(view.actual().gets.get(), 1);
    assert_eq!(view.actual().sets.get(), 1);
}

#[test]
fn read_only_operators_never_run_the_setter() {
    let view = counted(5);
    let _ = view.skewed() + 1;
    let _ = view.skewed() * 3;
    let _ = -view.skewed();
    assert!(*view.skewed() == 7);
    assert!(*view.skewed() < 8);

    assert_eq!(view.actual().sets.get(), 0);
}

// =============================================================================
// Copies are independent
// =============================================================================

struct Inventory {
    items: Vec<&'static str>,
}

properties! {
    struct InventoryView for Inventory {
        value items: Vec<&'static str> {
            get |i| i.items.clone();
            set |i, v| i.items = v;
        }
    }
}

#[test]
fn each_read_is_an_independent_copy() {
    let view = InventoryView::new(Inventory { items: vec!["sword", "shield"] });

    let mut first = view.items().get();
    let second = view.items().get();

    first.push("potion");
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 2);
    assert_eq!(view.actual().items.len(), 2);
}

#[test]
fn snapshot_gives_dotted_access_to_the_copy() {
    let view = InventoryView::new(Inventory { items: vec!["sword", "shield"] });
    assert_eq!(view.items().read().len(), 2);
    assert_eq!(view.items().read()[0], "sword");
}

#[test]
fn assign_from_reads_the_source_accessor() {
    let mut a = InventoryView::new(Inventory { items: vec!["sword"] });
    let b = InventoryView::new(Inventory { items: vec!["bow", "arrow"] });

    a.items_mut().assign_from(b.items());

    assert_eq!(a.actual().items, vec!["bow", "arrow"]);
}
