use super::*;
use crate::{lower, validate};
use alder_ir::{DeclTree, TreeBuilder};
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

struct Fixture {
    interner: StringInterner,
    hierarchy: Hierarchy,
    root: NodeId,
    mammal: NodeId,
    dog: NodeId,
    cat: NodeId,
    bird: NodeId,
    sparrow: NodeId,
    pinguin: NodeId,
    fish: NodeId,
}

fn animal_fixture() -> Fixture {
    let mut interner = StringInterner::new();
    let mut b = TreeBuilder::new(&mut interner, "Animal");
    let root = b.root();
    let mammal = b.group(root, "Mammal");
    let dog = b.leaf(mammal, "Dog");
    let cat = b.leaf(mammal, "Cat");
    let bird = b.group(root, "Bird");
    let sparrow = b.leaf(bird, "Sparrow");
    let pinguin = b.leaf(bird, "Pinguin");
    let fish = b.leaf(root, "Fish");
    let tree = b.finish();

    let hierarchy = {
        let validated = validate(&tree, &FxHashSet::default(), &interner).unwrap();
        lower(&validated)
    };
    Fixture {
        interner,
        hierarchy,
        root,
        mammal,
        dog,
        cat,
        bird,
        sparrow,
        pinguin,
        fish,
    }
}

fn build_tree(interner: &mut StringInterner, f: impl FnOnce(&mut TreeBuilder<'_>)) -> DeclTree {
    let mut b = TreeBuilder::new(interner, "Root");
    f(&mut b);
    b.finish()
}

#[test]
fn animal_frontier_is_depth_first_left_to_right() {
    let fixture = animal_fixture();
    let index = LeafIndex::build(&fixture.hierarchy, fixture.root);
    assert_eq!(
        index.values(),
        &[
            fixture.dog,
            fixture.cat,
            fixture.sparrow,
            fixture.pinguin,
            fixture.fish
        ]
    );
    for (expected, &leaf) in index.values().iter().enumerate() {
        assert_eq!(index.ordinal(leaf), Some(expected));
    }
}

#[test]
fn subgroup_frontier_has_its_own_ordinals() {
    let fixture = animal_fixture();
    let mammal = LeafIndex::build(&fixture.hierarchy, fixture.mammal);
    assert_eq!(mammal.values(), &[fixture.dog, fixture.cat]);
    assert_eq!(mammal.ordinal(fixture.dog), Some(0));
    assert_eq!(mammal.ordinal(fixture.cat), Some(1));
    // Fish is outside Mammal's subtree entirely.
    assert_eq!(mammal.ordinal(fixture.fish), None);
    assert!(!mammal.contains(fixture.fish));
}

#[test]
fn ordinals_are_local_to_the_queried_group() {
    let fixture = animal_fixture();
    let animal = LeafIndex::build(&fixture.hierarchy, fixture.root);
    let bird = LeafIndex::build(&fixture.hierarchy, fixture.bird);

    // Sparrow: ordinal 2 under Animal, 0 under Bird. Both are valid
    // indices into their respective frontiers.
    assert_eq!(animal.ordinal(fixture.sparrow), Some(2));
    assert_eq!(bird.ordinal(fixture.sparrow), Some(0));
    assert!(animal.ordinal(fixture.sparrow).unwrap() < animal.len());
    assert!(bird.ordinal(fixture.sparrow).unwrap() < bird.len());
}

#[test]
fn groups_are_spliced_never_appended() {
    let fixture = animal_fixture();
    let index = LeafIndex::build(&fixture.hierarchy, fixture.root);
    assert!(!index.contains(fixture.mammal));
    assert!(!index.contains(fixture.bird));
}

#[test]
fn building_twice_is_deterministic() {
    let fixture = animal_fixture();
    let first = LeafIndex::build(&fixture.hierarchy, fixture.root);
    let second = LeafIndex::build(&fixture.hierarchy, fixture.root);
    assert_eq!(first, second);
}

#[test]
fn value_of_bare_name_finds_the_unique_leaf() {
    let mut fixture = animal_fixture();
    let index = LeafIndex::build(&fixture.hierarchy, fixture.root);
    let query = [fixture.interner.intern("Pinguin")];
    let found = index
        .value_of(&fixture.hierarchy, &fixture.interner, &query)
        .unwrap();
    assert_eq!(found, fixture.pinguin);
}

#[test]
fn value_of_missing_name_is_no_such_leaf() {
    let mut fixture = animal_fixture();
    let index = LeafIndex::build(&fixture.hierarchy, fixture.root);
    let query = [fixture.interner.intern("Unicorn")];
    let err = index
        .value_of(&fixture.hierarchy, &fixture.interner, &query)
        .unwrap_err();
    assert_eq!(
        err,
        LeafLookupError::NoSuchLeaf {
            name: "Unicorn".to_string(),
            scope: "Animal".to_string(),
        }
    );
}

#[test]
fn value_of_group_name_is_no_such_leaf() {
    // A Group never sits in the frontier, so its bare name finds nothing.
    let mut fixture = animal_fixture();
    let index = LeafIndex::build(&fixture.hierarchy, fixture.root);
    let query = [fixture.interner.intern("Mammal")];
    assert!(matches!(
        index.value_of(&fixture.hierarchy, &fixture.interner, &query),
        Err(LeafLookupError::NoSuchLeaf { .. })
    ));
}

#[test]
fn ambiguous_bare_name_requires_qualified_path() {
    let mut interner = StringInterner::new();
    let tree = build_tree(&mut interner, |b| {
        let root = b.root();
        let warm = b.group(root, "Warm");
        b.leaf(warm, "Red");
        let dark = b.group(root, "Dark");
        b.leaf(dark, "Red");
    });
    let validated = validate(&tree, &FxHashSet::default(), &interner).unwrap();
    let hierarchy = lower(&validated);
    let index = LeafIndex::build(&hierarchy, hierarchy.root());

    let red = interner.intern("Red");
    let err = index.value_of(&hierarchy, &interner, &[red]).unwrap_err();
    assert_eq!(
        err,
        LeafLookupError::AmbiguousLeafName {
            name: "Red".to_string(),
            scope: "Root".to_string(),
            candidates: vec!["Root.Warm.Red".to_string(), "Root.Dark.Red".to_string()],
        }
    );

    // The qualified path disambiguates.
    let warm = interner.intern("Warm");
    let found = index.value_of(&hierarchy, &interner, &[warm, red]).unwrap();
    assert_eq!(hierarchy.qualified_path(found, &interner), "Root.Warm.Red");
}

#[test]
fn qualified_lookup_is_relative_to_the_queried_group() {
    let mut fixture = animal_fixture();
    let mammal_index = LeafIndex::build(&fixture.hierarchy, fixture.mammal);

    // Relative to Mammal the path is just the bare leaf name; the
    // Animal-relative path does not resolve from here.
    let dog = fixture.interner.intern("Dog");
    let mammal = fixture.interner.intern("Mammal");
    assert_eq!(
        mammal_index
            .value_of(&fixture.hierarchy, &fixture.interner, &[dog])
            .unwrap(),
        fixture.dog
    );
    assert!(matches!(
        mammal_index.value_of(&fixture.hierarchy, &fixture.interner, &[mammal, dog]),
        Err(LeafLookupError::NoSuchLeaf { .. })
    ));
}

#[test]
fn index_set_caches_every_group_including_the_root() {
    let fixture = animal_fixture();
    let set = LeafIndexSet::build(&fixture.hierarchy);
    assert_eq!(set.len(), 3);
    assert_eq!(set.index(fixture.root).unwrap().len(), 5);
    assert_eq!(set.index(fixture.mammal).unwrap().len(), 2);
    assert_eq!(set.index(fixture.bird).unwrap().len(), 2);
    // Leaves have no frontier.
    assert!(set.index(fixture.dog).is_none());
}

#[test]
fn empty_group_has_an_empty_frontier() {
    let mut interner = StringInterner::new();
    let tree = build_tree(&mut interner, |b| {
        let root = b.root();
        b.group(root, "Empty");
        b.leaf(root, "Only");
    });
    let validated = validate(&tree, &FxHashSet::default(), &interner).unwrap();
    let hierarchy = lower(&validated);
    let set = LeafIndexSet::build(&hierarchy);

    let empty_group = hierarchy.descriptor(hierarchy.root()).children[0];
    let empty = set.index(empty_group).unwrap();
    assert!(empty.is_empty());

    // The root still sees the lone leaf, and the empty Group splices in
    // nothing rather than appearing itself.
    assert_eq!(set.index(hierarchy.root()).unwrap().len(), 1);
}
