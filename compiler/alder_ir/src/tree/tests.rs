use super::*;
use pretty_assertions::assert_eq;

fn animal_tree(interner: &mut StringInterner) -> DeclTree {
    let mut b = TreeBuilder::new(interner, "Animal");
    let root = b.root();
    let mammal = b.group(root, "Mammal");
    b.leaf(mammal, "Dog");
    b.leaf(mammal, "Cat");
    let bird = b.group(root, "Bird");
    b.leaf(bird, "Sparrow");
    b.leaf(bird, "Pinguin");
    b.leaf(root, "Fish");
    b.finish()
}

#[test]
fn builder_assigns_source_indices_in_declaration_order() {
    let mut interner = StringInterner::new();
    let tree = animal_tree(&mut interner);
    let root = tree.node(tree.root());

    let indices: Vec<u32> = root
        .children
        .iter()
        .map(|&id| tree.node(id).source_index)
        .collect();
    assert_eq!(indices, vec![0, 1, 2]);

    let names: Vec<&str> = root
        .children
        .iter()
        .map(|&id| interner.lookup(tree.node(id).name))
        .collect();
    assert_eq!(names, vec!["Mammal", "Bird", "Fish"]);
}

#[test]
fn leaves_have_no_children() {
    let mut interner = StringInterner::new();
    let tree = animal_tree(&mut interner);
    for id in tree.ids() {
        let node = tree.node(id);
        if node.is_leaf() {
            assert!(node.children.is_empty());
        }
    }
}

#[test]
fn root_is_a_group() {
    let mut interner = StringInterner::new();
    let tree = animal_tree(&mut interner);
    assert!(tree.node(tree.root()).is_group());
    assert_eq!(tree.len(), 8);
}

#[test]
fn ctor_and_type_params_are_recorded_in_order() {
    let mut interner = StringInterner::new();
    let mut b = TreeBuilder::new(&mut interner, "Result");
    let root = b.root();
    b.add_type_param(root, "T", Variance::Covariant);
    b.add_type_param(root, "E", Variance::Covariant);
    let err = b.leaf(root, "Err");
    b.add_ctor_param(err, "reason", "str");
    b.add_ctor_param(err, "code", "int");
    let tree = b.finish();

    let root_node = tree.node(tree.root());
    assert_eq!(root_node.type_params.len(), 2);
    assert_eq!(interner.lookup(root_node.type_params[0].name), "T");

    let err_node = tree.node(root_node.children[0]);
    let params: Vec<(&str, &str)> = err_node
        .ctor_params
        .iter()
        .map(|p| (interner.lookup(p.name), interner.lookup(p.ty)))
        .collect();
    assert_eq!(params, vec![("reason", "str"), ("code", "int")]);
}

#[test]
fn declared_supertype_is_optional() {
    let mut interner = StringInterner::new();
    let mut b = TreeBuilder::new(&mut interner, "Animal");
    let root = b.root();
    let fish = b.leaf(root, "Fish");
    b.set_supertype(fish, "Swimmer");
    let tree = b.finish();

    let fish_node = tree.node(tree.node(tree.root()).children[0]);
    let target = fish_node.declared_supertype.map(|n| interner.lookup(n));
    assert_eq!(target, Some("Swimmer"));
    assert_eq!(tree.node(tree.root()).declared_supertype, None);
}
