use super::addition;
use crate::{AdditionKind, AdditionList, FieldInput, MetaDataError};

fn names(list: &AdditionList) -> Vec<String> {
    list.iter()
        .map(|x| x.get_string("name").unwrap().to_string())
        .collect()
}

fn abc() -> AdditionList {
    let mut list = AdditionList::default();
    list.append(addition(AdditionKind::Image, "a"));
    list.append(addition(AdditionKind::Material, "b"));
    list.append(addition(AdditionKind::Model, "c"));
    list
}

#[test]
fn move_down_swaps_and_relabels() {
    let mut list = abc();
    assert!(list.move_down(0).unwrap());
    assert_eq!(names(&list), vec!["b", "a", "c"]);
    assert_eq!(
        list.labels(),
        vec!["material : b", "image : a", "model : c"]
    );
    assert_eq!(list.selection(), Some(1));
}

#[test]
fn move_up_then_down_restores_order_and_selection() {
    let mut list = AdditionList::default();
    list.append(addition(AdditionKind::Image, "a"));
    list.append(addition(AdditionKind::Model, "b"));
    list.select(Some(1)).unwrap();

    assert!(list.move_up(1).unwrap());
    assert_eq!(names(&list), vec!["b", "a"]);
    assert_eq!(list.selection(), Some(0));

    assert!(list.move_down(0).unwrap());
    assert_eq!(names(&list), vec!["a", "b"]);
    assert_eq!(list.selection(), Some(1));
}

#[test]
fn moves_at_the_ends_are_no_ops() {
    let mut list = abc();
    list.select(Some(0)).unwrap();
    assert!(!list.move_up(0).unwrap());
    assert!(!list.move_down(2).unwrap());
    assert_eq!(names(&list), vec!["a", "b", "c"]);
    assert_eq!(list.selection(), Some(0));

    let mut single = AdditionList::default();
    single.append(addition(AdditionKind::Tweak, "t"));
    assert!(!single.move_down(0).unwrap());
    assert!(!single.move_up(0).unwrap());
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut list = abc();
    let err = MetaDataError::IndexOutOfRange { index: 3, len: 3 };
    assert_eq!(list.move_up(3).unwrap_err(), err);
    assert_eq!(list.move_down(3).unwrap_err(), err);
    assert_eq!(list.remove(3).unwrap_err(), err);
    assert_eq!(
        list.replace(3, addition(AdditionKind::Image, "x")).unwrap_err(),
        err
    );
    assert_eq!(list.select(Some(3)).unwrap_err(), err);
    assert_eq!(list.len(), 3);
}

#[test]
fn remove_closes_the_gap() {
    let mut list = abc();
    list.select(Some(2)).unwrap();

    let removed = list.remove(0).unwrap();
    assert_eq!(removed.get_string("name"), Some("a"));
    assert_eq!(names(&list), vec!["b", "c"]);
    assert_eq!(list.labels().len(), list.len());
    // selection follows "c"
    assert_eq!(list.selection(), Some(1));

    list.remove(1).unwrap();
    assert_eq!(list.selection(), Some(0));
    list.remove(0).unwrap();
    assert_eq!(list.selection(), None);
    assert!(list.is_empty());
}

#[test]
fn remove_then_append_keeps_membership() {
    let mut list = abc();
    let removed = list.remove(1).unwrap();
    list.append(removed);

    assert_eq!(list.len(), 3);
    assert_eq!(names(&list), vec!["a", "c", "b"]);

    let mut sorted = names(&list);
    sorted.sort();
    assert_eq!(sorted, vec!["a", "b", "c"]);
}

#[test]
fn replace_updates_the_label() {
    let mut list = abc();
    let mut edited = list.get(1).unwrap().clone();
    edited.set("name", FieldInput::Text("metal")).unwrap();

    let previous = list.replace(1, edited).unwrap();
    assert_eq!(previous.get_string("name"), Some("b"));
    assert_eq!(list.label(1).unwrap(), "material : metal");
}

#[test]
fn edits_in_place_are_reflected_in_labels() {
    let mut list = abc();
    list.get_mut(2)
        .unwrap()
        .set("name", FieldInput::Text("head"))
        .unwrap();
    assert_eq!(list.labels()[2], "model : head");
}

#[test]
fn append_default_uses_the_kind_schema() {
    let mut list = AdditionList::default();
    let index = list.append_default(AdditionKind::Sequence);
    assert_eq!(index, 0);
    assert_eq!(list.label(0).unwrap(), "sequence : ");
    assert_eq!(list.get(0).unwrap().get_string("mode"), Some("repeat"));
}
