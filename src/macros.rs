/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Lists use `[...]`, dictionaries use `{"key": value, ...}`. Any other token
/// is converted with `Value::from`, so parenthesize compound expressions such
/// as `(-1)` or `(a + b)`.
///
/// ```rust
/// use serde_packstream::{packstream, Pack};
///
/// let value = packstream!({ "ok": true, "ids": [1, 2] });
/// assert_eq!(
///     value.to_packstream().unwrap(),
///     vec![0xA2, 0x83, b'i', b'd', b's', 0x92, 0x01, 0x02, 0x82, b'o', b'k', 0xC3]
/// );
/// ```
#[macro_export]
macro_rules! packstream {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List($crate::List::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List($crate::List::from(vec![$($crate::packstream!($elem)),*]))
    };

    ({}) => {
        $crate::Value::Dictionary($crate::Dictionary::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut dictionary = $crate::Dictionary::new();
        $(
            dictionary.insert($key.to_string(), $crate::packstream!($value));
        )*
        $crate::Value::Dictionary(dictionary)
    }};

    ($s:expr) => {
        $crate::Value::from($s)
    };
}
