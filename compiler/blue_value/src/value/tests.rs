use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_value_reports_its_type_name() {
    let cases = [
        (Value::int(1), "int"),
        (Value::float(1.0), "float"),
        (Value::bool(true), "bool"),
        (Value::Nil, "nil"),
        (Value::range(0, 3), "range"),
        (Value::string("s"), "string"),
        (Value::list(vec![]), "list"),
        (Value::map(MapStorage::new()), "map"),
        (Value::class("Point", None), "class"),
        (Value::Type(&types::INT), "type"),
    ];
    for (value, name) in cases {
        assert_eq!(value.type_name(), name);
    }
}

#[test]
fn identity_is_by_allocation_for_heap_values() {
    let a = Value::list(vec![Value::int(1)]);
    let b = a.clone();
    let c = Value::list(vec![Value::int(1)]);
    assert!(a.is_same(&b));
    assert!(!a.is_same(&c));
}

#[test]
fn identity_is_by_value_for_scalars() {
    assert!(Value::int(3).is_same(&Value::int(3)));
    assert!(Value::Nil.is_same(&Value::Nil));
    assert!(!Value::int(3).is_same(&Value::float(3.0)));
}

#[test]
fn range_len_never_negative() {
    assert_eq!(RangeValue { start: 2, end: 5 }.len(), 3);
    assert_eq!(RangeValue { start: 5, end: 2 }.len(), 0);
    assert!(RangeValue { start: 1, end: 1 }.is_empty());
}

#[test]
fn cloned_list_shares_storage() {
    let a = Value::list(vec![]);
    let b = a.clone();
    if let Value::List(items) = &b {
        items.write().push(Value::int(7));
    }
    assert_eq!(a.list_items().map(|v| v.len()), Some(1));
}

#[test]
fn instance_starts_with_empty_members() {
    let Value::Class(class) = Value::class("A", None) else {
        unreachable!()
    };
    let inst = Value::instance(class);
    assert!(inst.members().is_some_and(Scope::is_empty));
}
