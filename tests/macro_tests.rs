use serde_packstream::{encode, packstream, Dictionary, List, Value};

#[test]
fn test_packstream_macro_null() {
    assert_eq!(packstream!(null), Value::Null);
}

#[test]
fn test_packstream_macro_booleans() {
    assert_eq!(packstream!(true), Value::Bool(true));
    assert_eq!(packstream!(false), Value::Bool(false));
}

#[test]
fn test_packstream_macro_numbers() {
    assert_eq!(packstream!(42), Value::Integer(42));
    assert_eq!(packstream!(3.5), Value::Float(3.5));
    assert_eq!(packstream!((-123)), Value::Integer(-123));
}

#[test]
fn test_packstream_macro_strings() {
    assert_eq!(packstream!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(packstream!(""), Value::String(String::new()));
}

#[test]
fn test_packstream_macro_lists() {
    assert_eq!(packstream!([]), Value::List(List::new()));

    let nested = packstream!([[1, 2], [], ["x"]]);
    let items = nested.as_list().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items.get(1), Some(&Value::List(List::new())));
}

#[test]
fn test_packstream_macro_dictionaries() {
    assert_eq!(packstream!({}), Value::Dictionary(Dictionary::new()));

    let user = packstream!({
        "name": "Alice",
        "age": 30,
        "address": { "city": "Malmö" },
        "tags": ["a", "b"],
    });

    let dict = user.as_dictionary().unwrap();
    assert_eq!(dict.len(), 4);
    assert_eq!(dict.get("age"), Some(&Value::Integer(30)));
    assert_eq!(
        dict.get("address")
            .and_then(Value::as_dictionary)
            .and_then(|d| d.get("city"))
            .and_then(Value::as_str),
        Some("Malmö")
    );
}

#[test]
fn test_packstream_macro_expressions() {
    let count = 3;
    let name = String::from("n");
    let value = packstream!({ "count": count, "name": name });
    assert_eq!(
        encode(&value).unwrap(),
        vec![0xA2, 0x85, b'c', b'o', b'u', b'n', b't', 0x03, 0x84, b'n', b'a', b'm', b'e', 0x81, b'n']
    );
}

#[test]
fn test_packstream_macro_encodes() {
    let value = packstream!([true, false]);
    assert_eq!(encode(&value).unwrap(), vec![0x92, 0xC3, 0xC2]);
}
