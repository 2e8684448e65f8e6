mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::Inner;
use pretty_assertions::assert_eq;
use registrar_model::{
    ArrayOf, ConversionError, Converter, Entity, EnumIndex, FlagOrEntity, IdentityConverter,
    IntegerConverter, NestedEntity, RelabeledKeys, Symbol, SymbolConverter, TimeConverter, Value,
};
use serde_json::json;
use std::collections::BTreeMap;

fn sym(s: &str) -> Value {
    Value::Symbol(Symbol::new(s))
}

// ── Identity ─────────────────────────────────────────────────────

#[test]
fn identity_passes_scalars_through() {
    let c = IdentityConverter;
    assert_eq!(c.from_wire(&json!("x")).unwrap(), Value::from("x"));
    assert_eq!(c.from_wire(&json!(3)).unwrap(), Value::Integer(3));
    assert_eq!(c.to_wire(&Value::Bool(true)).unwrap(), json!(true));
    assert_eq!(c.to_wire(&Value::Null).unwrap(), json!(null));
}

#[test]
fn identity_reads_objects_as_maps() {
    let value = IdentityConverter.from_wire(&json!({"a": [1, "b"]})).unwrap();
    let map = value.as_map().unwrap();
    assert_eq!(map["a"], Value::List(vec![Value::Integer(1), Value::from("b")]));
}

// ── SymbolConverter ──────────────────────────────────────────────

#[test]
fn symbol_round_trip() {
    let c = SymbolConverter;
    let wire = c.to_wire(&sym("example")).unwrap();
    assert_eq!(wire, json!("example"));
    assert_eq!(c.from_wire(&wire).unwrap(), sym("example"));
}

#[test]
fn symbol_null_maps_to_null() {
    let c = SymbolConverter;
    assert_eq!(c.to_wire(&Value::Null).unwrap(), json!(null));
    assert_eq!(c.from_wire(&json!(null)).unwrap(), Value::Null);
}

#[test]
fn symbol_stringifies_plain_scalars() {
    let c = SymbolConverter;
    assert_eq!(c.to_wire(&Value::from("text")).unwrap(), json!("text"));
    assert_eq!(c.to_wire(&Value::Integer(4)).unwrap(), json!("4"));
    assert_eq!(c.to_wire(&Value::Bool(false)).unwrap(), json!("false"));
}

#[test]
fn symbol_rejects_non_string_wire() {
    let err = SymbolConverter.from_wire(&json!(true)).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnexpectedType {
            expected: "string",
            found: "bool",
        }
    );
}

// ── IntegerConverter ─────────────────────────────────────────────

#[test]
fn integer_renders_as_string() {
    assert_eq!(IntegerConverter.to_wire(&Value::Integer(-42)).unwrap(), json!("-42"));
}

#[test]
fn integer_parses_string_and_number() {
    let c = IntegerConverter;
    assert_eq!(c.from_wire(&json!("1234")).unwrap(), Value::Integer(1234));
    assert_eq!(c.from_wire(&json!(77)).unwrap(), Value::Integer(77));
    assert_eq!(c.from_wire(&json!(null)).unwrap(), Value::Null);
}

#[test]
fn integer_rejects_garbage() {
    let err = IntegerConverter.from_wire(&json!("12abc")).unwrap_err();
    assert_eq!(err, ConversionError::InvalidInteger("12abc".into()));
    let err = IntegerConverter.from_wire(&json!(1.5)).unwrap_err();
    assert_eq!(err, ConversionError::InvalidInteger("1.5".into()));
}

// ── TimeConverter ────────────────────────────────────────────────

fn precise_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 11, 30, 23, 59, 58).unwrap() + chrono::Duration::milliseconds(750)
}

#[test]
fn time_renders_whole_seconds_utc() {
    let wire = TimeConverter.to_wire(&Value::Time(precise_instant())).unwrap();
    assert_eq!(wire, json!("2023-11-30T23:59:58Z"));
}

#[test]
fn time_round_trip_truncates_sub_seconds() {
    let c = TimeConverter;
    let original = precise_instant();
    let back = c.from_wire(&c.to_wire(&Value::Time(original)).unwrap()).unwrap();

    let expected = Utc.with_ymd_and_hms(2023, 11, 30, 23, 59, 58).unwrap();
    assert_eq!(back, Value::Time(expected));
    assert_ne!(back, Value::Time(original));
}

#[test]
fn time_parses_offsets_into_utc() {
    let value = TimeConverter.from_wire(&json!("2024-02-29T12:00:00-05:00")).unwrap();
    assert_eq!(
        value,
        Value::Time(Utc.with_ymd_and_hms(2024, 2, 29, 17, 0, 0).unwrap())
    );
}

#[test]
fn time_null_maps_to_null() {
    assert_eq!(TimeConverter.to_wire(&Value::Null).unwrap(), json!(null));
    assert_eq!(TimeConverter.from_wire(&json!(null)).unwrap(), Value::Null);
}

#[test]
fn time_refuses_years_it_cannot_read_back() {
    let far = Value::Time(Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap());
    let err = TimeConverter.to_wire(&far).unwrap_err();
    assert!(matches!(err, ConversionError::TimeOutOfRange(_)));
    assert!(far.to_wire().is_err());

    let last = Value::Time(Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap());
    let c = TimeConverter;
    assert_eq!(c.from_wire(&c.to_wire(&last).unwrap()).unwrap(), last);
}

#[test]
fn time_rejects_unparsable_string() {
    let err = TimeConverter.from_wire(&json!("yesterday")).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidTimestamp { .. }));
}

// ── ArrayOf ──────────────────────────────────────────────────────

#[test]
fn array_of_propagates_null() {
    let c = ArrayOf::new(SymbolConverter);
    assert_eq!(c.to_wire(&Value::Null).unwrap(), json!(null));
    assert_eq!(c.from_wire(&json!(null)).unwrap(), Value::Null);
}

#[test]
fn array_of_keeps_empty_list() {
    let c = ArrayOf::new(SymbolConverter);
    assert_eq!(c.to_wire(&Value::List(Vec::new())).unwrap(), json!([]));
    assert_eq!(c.from_wire(&json!([])).unwrap(), Value::List(Vec::new()));
}

#[test]
fn array_of_converts_each_element() {
    let c = ArrayOf::new(IntegerConverter);
    assert_eq!(
        c.from_wire(&json!(["1", "2"])).unwrap(),
        Value::List(vec![Value::Integer(1), Value::Integer(2)])
    );
    assert_eq!(
        c.to_wire(&Value::List(vec![Value::Integer(3)])).unwrap(),
        json!(["3"])
    );
}

#[test]
fn array_of_fails_on_first_bad_element() {
    let err = ArrayOf::new(IntegerConverter)
        .from_wire(&json!(["1", "x", "y"]))
        .unwrap_err();
    assert_eq!(err, ConversionError::InvalidInteger("x".into()));
}

#[test]
fn array_of_rejects_scalar() {
    let err = ArrayOf::new(SymbolConverter).from_wire(&json!("a")).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnexpectedType {
            expected: "array",
            found: "string",
        }
    );
}

// ── NestedEntity ─────────────────────────────────────────────────

#[test]
fn nested_entity_reads_object() {
    let value = NestedEntity::of::<Inner>()
        .from_wire(&json!({"label": "x", "code": "y"}))
        .unwrap();
    let inner = Inner::try_from_record(value.as_record().unwrap().clone()).unwrap();
    assert_eq!(inner.code(), &sym("y"));
}

#[test]
fn nested_entity_rejects_scalar() {
    let err = NestedEntity::of::<Inner>().from_wire(&json!(1)).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnexpectedType {
            expected: "object",
            found: "number",
        }
    );
}

// ── EnumIndex ────────────────────────────────────────────────────

const LEVELS: EnumIndex = EnumIndex::new(&["off", "low", "high"]);

#[test]
fn enum_index_reads_index_as_symbol() {
    assert_eq!(LEVELS.from_wire(&json!(0)).unwrap(), sym("off"));
    assert_eq!(LEVELS.from_wire(&json!(2)).unwrap(), sym("high"));
}

#[test]
fn enum_index_renders_position() {
    assert_eq!(LEVELS.to_wire(&sym("low")).unwrap(), json!(1));
}

#[test]
fn enum_index_rejects_out_of_range() {
    assert_eq!(
        LEVELS.from_wire(&json!(3)).unwrap_err(),
        ConversionError::UnknownVariant("3".into())
    );
    assert_eq!(
        LEVELS.from_wire(&json!(-1)).unwrap_err(),
        ConversionError::UnknownVariant("-1".into())
    );
}

#[test]
fn enum_index_rejects_unknown_name() {
    assert_eq!(
        LEVELS.to_wire(&sym("extreme")).unwrap_err(),
        ConversionError::UnknownVariant("extreme".into())
    );
}

// ── FlagOrEntity ─────────────────────────────────────────────────

#[test]
fn flag_or_entity_keeps_false() {
    let c = FlagOrEntity::of::<Inner>();
    assert_eq!(c.from_wire(&json!(false)).unwrap(), Value::Bool(false));
    assert_eq!(c.to_wire(&Value::Bool(false)).unwrap(), json!(false));
}

#[test]
fn flag_or_entity_reads_object_as_entity() {
    let c = FlagOrEntity::of::<Inner>();
    let value = c.from_wire(&json!({"label": "on"})).unwrap();
    let record = value.as_record().unwrap();
    assert_eq!(record.entity_type(), "inner");
    assert_eq!(c.to_wire(&value).unwrap(), json!({"label": "on", "code": null}));
}

#[test]
fn flag_or_entity_rejects_string() {
    let err = FlagOrEntity::of::<Inner>().from_wire(&json!("yes")).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnexpectedType {
            expected: "bool or object",
            found: "string",
        }
    );
}

// ── RelabeledKeys ────────────────────────────────────────────────

const PRIVACY: RelabeledKeys = RelabeledKeys::new(&[("hideEmail", "hide_email"), ("hidePhone", "hide_phone")]);

#[test]
fn relabeled_keys_renames_on_read() {
    let value = PRIVACY
        .from_wire(&json!({"hideEmail": true, "hidePhone": false, "extra": 1}))
        .unwrap();
    let expected: BTreeMap<String, Value> = [
        ("hide_email".to_string(), Value::Bool(true)),
        ("hide_phone".to_string(), Value::Bool(false)),
        ("extra".to_string(), Value::Integer(1)),
    ]
    .into_iter()
    .collect();
    assert_eq!(value, Value::Map(expected));
}

#[test]
fn relabeled_keys_round_trip() {
    let wire = json!({"hideEmail": true, "extra": "kept"});
    let value = PRIVACY.from_wire(&wire).unwrap();
    assert_eq!(PRIVACY.to_wire(&value).unwrap(), wire);
}

#[test]
fn relabeled_keys_rejects_wire_and_internal_spelling_together() {
    let err = PRIVACY
        .from_wire(&json!({"hideEmail": true, "hide_email": false}))
        .unwrap_err();
    assert_eq!(err, ConversionError::KeyCollision("hide_email".into()));
}

#[test]
fn relabeled_keys_rejects_colliding_internal_map() {
    let value: BTreeMap<String, Value> = [
        ("hideEmail".to_string(), Value::Bool(true)),
        ("hide_email".to_string(), Value::Bool(false)),
    ]
    .into_iter()
    .collect();
    let err = PRIVACY.to_wire(&Value::Map(value)).unwrap_err();
    assert_eq!(err, ConversionError::KeyCollision("hideEmail".into()));
}
