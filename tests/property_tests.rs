//! Property-based tests for classification, conversion and the writer.

use proptest::prelude::*;
use snbt::{
    from_str, from_str_at, parser::classify, to_string, to_string_pretty, Array, Compound,
    Converter, FromSnbt, Kind, Primitive, Tag,
};

fn scalar() -> impl Strategy<Value = Primitive> {
    prop_oneof![
        any::<bool>().prop_map(Primitive::Bool),
        any::<i8>().prop_map(Primitive::Byte),
        any::<i16>().prop_map(Primitive::Short),
        any::<i32>().prop_map(Primitive::Int),
        any::<i64>().prop_map(Primitive::Long),
        any::<f32>()
            .prop_filter("finite", |v| v.is_finite())
            .prop_map(Primitive::Float),
        any::<f64>()
            .prop_filter("finite", |v| v.is_finite())
            .prop_map(Primitive::Double),
        ".*".prop_map(Primitive::String),
    ]
}

fn tag() -> impl Strategy<Value = Tag> {
    let leaf = scalar().prop_map(Tag::Primitive);
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(|tags| Tag::Array(Array::from(tags))),
            prop::collection::vec(any::<i8>(), 0..6).prop_map(|bytes| {
                let tags = bytes.into_iter().map(Tag::from);
                Tag::Array(Array::from_tags(Kind::Byte, tags).unwrap())
            }),
            prop::collection::btree_map("[a-zA-Z_][a-zA-Z0-9_]{0,6}|.{0,6}", inner, 0..6)
                .prop_map(|entries| {
                    let mut compound = Compound::new();
                    for (key, value) in entries {
                        compound.insert(key, value).unwrap();
                    }
                    Tag::Compound(compound)
                }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_classification_is_stable(text in "[A-Za-z0-9+\\-_.]{1,12}") {
        let first = classify(&text);
        if let Primitive::String(ref s) = first {
            prop_assert_eq!(s, &text);
        }
        let written = to_string(&Tag::Primitive(first.clone()));
        prop_assert_eq!(from_str(&written).unwrap(), Tag::Primitive(first));
    }

    #[test]
    fn prop_writer_output_reparses(tag in tag()) {
        let compact = to_string(&tag);
        prop_assert_eq!(&from_str(&compact).unwrap(), &tag, "compact: {}", compact);
        let pretty = to_string_pretty(&tag);
        prop_assert_eq!(&from_str(&pretty).unwrap(), &tag, "pretty: {}", pretty);
    }

    #[test]
    fn prop_parse_advances_cursor(tag in tag(), suffix in "[ ]{0,3}#") {
        let text = format!("{}{}", to_string(&tag), suffix);
        let mut cursor = 0;
        from_str_at(&text, &mut cursor).unwrap();
        prop_assert!(cursor > 0);
        prop_assert_eq!(&text[cursor..], "#");
    }

    #[test]
    fn prop_widening_round_trips(v in any::<i8>()) {
        let wide = Primitive::Byte(v).value_as::<i64>().unwrap();
        prop_assert_eq!(wide, i64::from(v));
        let narrowing = Converter::standard().clone().with_checked_narrowing();
        prop_assert_eq!(Primitive::Long(wide).value_as_with::<i8>(&narrowing).unwrap(), v);
    }

    #[test]
    fn prop_narrowing_never_truncates(v in any::<i64>()) {
        let narrowing = Converter::standard().clone().with_checked_narrowing();
        let result = Primitive::Long(v).value_as_with::<i16>(&narrowing);
        match i16::try_from(v) {
            Ok(expected) => prop_assert_eq!(result.unwrap(), expected),
            Err(_) => prop_assert!(result.is_err()),
        }
        prop_assert!(Primitive::Long(v).value_as::<i16>().is_err());
    }

    #[test]
    fn prop_strings_never_convert(s in ".*") {
        let primitive = Primitive::String(s);
        for kind in Kind::SCALARS {
            if kind != Kind::String {
                prop_assert!(primitive.convert(kind).is_err());
            }
        }
    }

    #[test]
    fn prop_float_double_round_trip(v in any::<f32>().prop_filter("finite", |v| v.is_finite())) {
        let double = Primitive::Float(v).value_as::<f64>().unwrap();
        prop_assert_eq!(Primitive::Double(double).value_as::<f32>().unwrap(), v);
    }

    #[test]
    fn prop_typed_arrays_hold_their_kind(values in prop::collection::vec(any::<i64>(), 0..10)) {
        let text = format!(
            "[L; {}]",
            values.iter().map(|v| format!("{}L", v)).collect::<Vec<_>>().join(", ")
        );
        let array = Array::parse(&text).unwrap();
        prop_assert!(array.items_are::<i64>());
        prop_assert_eq!(array.items_as::<i64>().unwrap(), values);
    }
}
