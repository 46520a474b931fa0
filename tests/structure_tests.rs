use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use serde_packstream::structure::tag;
use serde_packstream::{
    encode, packstream, to_value, to_vec, Date, DateTime, DateTimeZoneId, Dictionary, Duration,
    Error, GenericStructure, LocalDateTime, LocalTime, Node, Path, Point2D, Point3D,
    Relationship, Structure, Time, UnboundRelationship, Value,
};

fn properties(value: Value) -> Dictionary {
    match value {
        Value::Dictionary(dict) => dict,
        other => panic!("expected dictionary, got {}", other.type_name()),
    }
}

#[test]
fn test_node_header() {
    let node = Node::new(1, vec!["Person".to_string()], Dictionary::new());
    let bytes = encode(&node).unwrap();
    assert_eq!(&bytes[..2], &[0xB3, 0x4E]);
}

#[test]
fn test_date_encoding() {
    assert_eq!(encode(&Date::new(0)).unwrap(), vec![0xB1, 0x44, 0x00]);
    assert_eq!(
        encode(&Date::new(-365)).unwrap(),
        vec![0xB1, 0x44, 0xC9, 0xFE, 0x93]
    );
}

#[test]
fn test_duration_encoding() {
    let bytes = encode(&Duration::new(12, 30, 3600, 0)).unwrap();
    assert_eq!(
        bytes,
        vec![0xB4, 0x45, 0x0C, 0x1E, 0xC9, 0x0E, 0x10, 0x00]
    );
}

#[test]
fn test_relationship_encoding() {
    let rel = Relationship::new(
        10,
        1,
        2,
        "KNOWS",
        properties(packstream!({ "since": 1999 })),
    );
    let bytes = encode(&rel).unwrap();

    let mut expected = vec![0xB5, 0x52, 0x0A, 0x01, 0x02, 0x85];
    expected.extend_from_slice(b"KNOWS");
    expected.extend_from_slice(&[0xA1, 0x85]);
    expected.extend_from_slice(b"since");
    expected.extend_from_slice(&[0xC9, 0x07, 0xCF]);
    assert_eq!(bytes, expected);
}

#[test]
fn test_path_nests_structures() {
    let alice = Node::new(1, vec!["Person".to_string()], Dictionary::new());
    let bob = Node::new(2, vec!["Person".to_string()], Dictionary::new());
    let knows = UnboundRelationship::new(3, "KNOWS", Dictionary::new());
    let path = Path::new(vec![alice.clone(), bob.clone()], vec![knows.clone()], vec![1, 1]);

    let bytes = encode(&path).unwrap();
    assert_eq!(&bytes[..3], &[0xB3, 0x50, 0x92]);

    let mut expected = vec![0xB3, 0x50, 0x92];
    expected.extend(encode(&alice).unwrap());
    expected.extend(encode(&bob).unwrap());
    expected.push(0x91);
    expected.extend(encode(&knows).unwrap());
    expected.extend_from_slice(&[0x92, 0x01, 0x01]);
    assert_eq!(bytes, expected);
}

#[test]
fn test_temporal_headers() {
    let cases: Vec<(Structure, [u8; 2])> = vec![
        (Time::new(0, 0).into(), [0xB2, tag::TIME]),
        (LocalTime::new(0).into(), [0xB1, tag::LOCAL_TIME]),
        (DateTime::new(0, 0, 0).into(), [0xB3, tag::DATE_TIME]),
        (
            DateTimeZoneId::new(0, 0, "UTC").into(),
            [0xB3, tag::DATE_TIME_ZONE_ID],
        ),
        (LocalDateTime::new(0, 0).into(), [0xB2, tag::LOCAL_DATE_TIME]),
    ];

    for (structure, expected) in cases {
        let bytes = encode(&structure).unwrap();
        assert_eq!(&bytes[..2], &expected, "{}", structure.type_name());
    }
}

#[test]
fn test_point_encoding() {
    let bytes = encode(&Point2D::new(4326, 12.5, 55.75)).unwrap();
    let mut expected = vec![0xB3, 0x58, 0xC9, 0x10, 0xE6, 0xC1];
    expected.extend_from_slice(&12.5f64.to_be_bytes());
    expected.push(0xC1);
    expected.extend_from_slice(&55.75f64.to_be_bytes());
    assert_eq!(bytes, expected);

    let bytes = encode(&Point3D::new(4979, 0.0, 0.0, 1.0)).unwrap();
    assert_eq!(&bytes[..2], &[0xB4, 0x59]);
}

#[test]
fn test_chrono_conversions_encode() {
    let date = Date::from(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(date.days, 19_782);

    let time = Time::from_chrono(
        NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        FixedOffset::west_opt(5 * 3600).unwrap(),
    );
    assert_eq!(time.tz_offset_seconds, -18_000);
    assert_eq!(time.to_utc_nanoseconds(), 17 * 3_600_000_000_000);

    let offset = FixedOffset::east_opt(3600).unwrap();
    let dt = DateTime::from(offset.with_ymd_and_hms(2000, 1, 1, 1, 0, 0).unwrap());
    assert_eq!(dt.to_utc_nanoseconds(), 946_684_800 * 1_000_000_000);

    let zoned = DateTimeZoneId::from_local(
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 1, 0)
            .unwrap(),
        "Europe/Paris",
    );
    assert_eq!(zoned.seconds, 60);
    assert_eq!(zoned.tz_id, "Europe/Paris");
}

#[test]
fn test_generic_structure_limits() {
    let fifteen = GenericStructure::new(0x7F, (0..15).map(Value::from).collect());
    let bytes = encode(&fifteen).unwrap();
    assert_eq!(&bytes[..2], &[0xBF, 0x7F]);

    let sixteen = GenericStructure::new(0x7F, (0..16).map(Value::from).collect());
    assert_eq!(
        encode(&sixteen).unwrap_err(),
        Error::FieldCountExceeded {
            tag: 0x7F,
            count: 16
        }
    );
}

#[test]
fn test_field_count_error_inside_list() {
    let bad = Structure::generic(0x01, (0..20).map(Value::from).collect());
    let value = Value::from(vec![Value::from(1), Value::Structure(bad)]);
    assert!(matches!(
        encode(&value).unwrap_err(),
        Error::FieldCountExceeded { tag: 0x01, count: 20 }
    ));
}

#[test]
fn test_serde_path_matches_pack_path() {
    let node = Node::new(
        7,
        vec!["A".to_string(), "B".to_string()],
        properties(packstream!({ "name": "n", "score": 1.5 })),
    );
    assert_eq!(to_vec(&node).unwrap(), encode(&node).unwrap());

    let point = Point2D::new(7203, 1.0, -1.0);
    assert_eq!(to_vec(&point).unwrap(), encode(&point).unwrap());

    let zoned = DateTimeZoneId::new(1, 2, "Asia/Tokyo");
    assert_eq!(to_vec(&zoned).unwrap(), encode(&zoned).unwrap());
}

#[test]
fn test_structure_inside_derived_type() {
    #[derive(serde::Serialize)]
    struct Row {
        born: Date,
    }

    let bytes = to_vec(&Row {
        born: Date::new(1),
    })
    .unwrap();
    assert_eq!(
        bytes,
        vec![0xA1, 0x84, b'b', b'o', b'r', b'n', 0xB1, 0x44, 0x01]
    );
}

#[test]
fn test_to_value_yields_generic_structure() {
    let value = to_value(&Duration::new(1, 2, 3, 4)).unwrap();
    match &value {
        Value::Structure(Structure::Generic(generic)) => {
            assert_eq!(generic.tag, tag::DURATION);
            assert_eq!(generic.fields.len(), 4);
        }
        other => panic!("expected structure, got {}", other.type_name()),
    }
    assert_eq!(
        encode(&value).unwrap(),
        encode(&Duration::new(1, 2, 3, 4)).unwrap()
    );
}

#[test]
fn test_structure_through_serde_json() {
    let json = serde_json::to_value(Date::new(3)).unwrap();
    assert_eq!(json, serde_json::json!([68, [3]]));
}
