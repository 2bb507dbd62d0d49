//! Proxy accessors: one piece of storage, many views.

use prop_access::prelude::*;

// =============================================================================
// Hand-written contract types (no macros)
// =============================================================================

struct Player {
    name: &'static str,
    scores: [i32; 3],
}

#[repr(transparent)]
struct NameGetSet {
    actual: Player,
}

impl GetSet for NameGetSet {
    type Value = &'static str;
    type Shape = ByProxy;
}

impl ProxyGet for NameGetSet {
    fn get(&self) -> &&'static str {
        &self.actual.name
    }

    fn get_mut(&mut self) -> &mut &'static str {
        &mut self.actual.name
    }
}

// SAFETY: `#[repr(transparent)]` over `Player`.
unsafe impl Overlay<Player> for NameGetSet {}

#[repr(transparent)]
struct ScoresGetSet {
    actual: Player,
}

impl GetSet for ScoresGetSet {
    type Value = [i32; 3];
    type Shape = ByProxy;
}

impl ProxyGet for ScoresGetSet {
    fn get(&self) -> &[i32; 3] {
        &self.actual.scores
    }

    fn get_mut(&mut self) -> &mut [i32; 3] {
        &mut self.actual.scores
    }
}

// SAFETY: `#[repr(transparent)]` over `Player`.
unsafe impl Overlay<Player> for ScoresGetSet {}

fn name_of(player: &Player) -> &Proxy<NameGetSet> {
    Proxy::from_ref(Overlay::of_ref(player))
}

fn scores_of_mut(player: &mut Player) -> &mut Proxy<ScoresGetSet> {
    Proxy::from_mut(Overlay::of_mut(player))
}

fn sample() -> Player {
    Player { name: "ada", scores: [3, 1, 4] }
}

// =============================================================================
// Aliasing
// =============================================================================

#[test]
fn accessor_writes_are_visible_in_storage() {
    let mut player = sample();
    scores_of_mut(&mut player).modify(|s| s[0] = 10);
    assert_eq!(player.scores, [10, 1, 4]);
}

#[test]
fn storage_writes_are_visible_through_accessor() {
    let mut player = sample();
    player.name = "grace";
    assert_eq!(*name_of(&player).get(), "grace");
}

#[test]
fn deref_assignment_writes_the_referent() {
    let mut player = sample();
    // One deref reaches the accessor place, the second reaches the referent.
    **scores_of_mut(&mut player) = [5, 5, 5];
    assert_eq!(player.scores, [5, 5, 5]);
}

#[test]
fn set_assigns_through_the_reference() {
    let mut player = sample();
    scores_of_mut(&mut player).set([7, 7, 7]);
    assert_eq!(player.scores, [7, 7, 7]);
}

#[test]
fn replace_returns_the_previous_value() {
    let mut player = sample();
    let old = scores_of_mut(&mut player).replace([0, 0, 0]);
    assert_eq!(old, [3, 1, 4]);
    assert_eq!(player.scores, [0, 0, 0]);
}

// =============================================================================
// The proxy behaves like the value
// =============================================================================

#[test]
fn deref_reaches_the_referent() {
    let player = sample();
    // Methods of the referent via auto-deref.
    assert_eq!(name_of(&player).len(), 3);
}

#[test]
fn subscript_forwards_to_the_referent() {
    let mut player = sample();
    let scores = scores_of_mut(&mut player);
    assert_eq!(scores[2], 4);
    scores[2] = 1;
    assert_eq!(player.scores[2], 1);
}

#[test]
fn display_forwards_to_the_referent() {
    let player = sample();
    assert_eq!(format!("{}", name_of(&player)), "ada");
    assert_eq!(format!("{:?}", name_of(&player)), "\"ada\"");
}

#[test]
fn comparison_reads_the_referent() {
    let player = sample();
    assert!(*name_of(&player) == "ada");
    assert!(name_of(&player).get() < &"bob");
}

// =============================================================================
// Same-type assignment reads the right-hand accessor's value
// =============================================================================

#[test]
fn assign_from_copies_the_current_value() {
    let mut a = sample();
    let b = Player { name: "alan", scores: [9, 9, 9] };

    // Two accessors of the same instantiated type over different storage.
    let source: &Proxy<NameGetSet> = name_of(&b);
    let target: &mut Proxy<NameGetSet> = Proxy::from_mut(Overlay::of_mut(&mut a));
    target.assign_from(source);

    assert_eq!(a.name, "alan");
    assert_eq!(b.name, "alan");
}
