/// Builds a [`Tag`](crate::Tag) from SNBT-like Rust syntax.
///
/// Scalars go through `Tag::from`, so their Rust type picks the kind: `1i8` is
/// a Byte, `1` an Int, `1.0` a Double. Negative numbers inside arrays and
/// compounds need parentheses, as in `[(-5), 3]`.
///
/// ```rust
/// use snbt::{snbt, Kind};
///
/// let tag = snbt!({
///     "id": "minecraft:stone",
///     "Count": 14i16,
///     "pos": [1.5, 64.0, (-3.25)],
///     "bytes": [B; 1i8, 2i8]
/// });
/// let compound = tag.cast::<&snbt::Compound>().unwrap();
/// assert_eq!(compound.item_as::<i16>("Count").unwrap(), 14);
/// assert_eq!(
///     compound.item_as::<&snbt::Array>("bytes").unwrap().element_kind(),
///     Kind::Byte
/// );
/// ```
///
/// # Panics
///
/// Panics on a repeated key, or on an element that does not fit a `B;`, `I;`
/// or `L;` array.
#[macro_export]
macro_rules! snbt {
    (@typed $kind:ident [ $($elem:tt),* ]) => {{
        let mut array = $crate::Array::of($crate::Kind::$kind);
        $(
            if let Err(err) = array.push($crate::snbt!($elem)) {
                panic!("snbt!: {}", err);
            }
        )*
        $crate::Tag::Array(array)
    }};

    ([]) => {
        $crate::Tag::Array($crate::Array::new())
    };

    ([ B; $($elem:tt),* $(,)? ]) => {
        $crate::snbt!(@typed Byte [ $($elem),* ])
    };

    ([ I; $($elem:tt),* $(,)? ]) => {
        $crate::snbt!(@typed Int [ $($elem),* ])
    };

    ([ L; $($elem:tt),* $(,)? ]) => {
        $crate::snbt!(@typed Long [ $($elem),* ])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Tag::Array($crate::Array::from(vec![$($crate::snbt!($elem)),*]))
    };

    ({}) => {
        $crate::Tag::Compound($crate::Compound::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut compound = $crate::Compound::new();
        $(
            if let Err(err) = compound.insert($key, $crate::snbt!($value)) {
                panic!("snbt!: {}", err);
            }
        )*
        $crate::Tag::Compound(compound)
    }};

    ($value:expr) => {
        $crate::Tag::from($value)
    };
}
