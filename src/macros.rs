/// Builds a [`DataObject`](crate::DataObject) tree declaratively.
///
/// A leaf is `(tag, label, max_length, value)`; a branch replaces the value
/// with a bracketed list of nested objects, each in the same form.
///
/// ```rust
/// use sgqr::data_object;
///
/// let mai = data_object!("26", "Merchant Account Information", 99, [
///     ("00", "PayNow Indicator", 32, "SG.PAYNOW"),
///     ("01", "Mobile Or UEN Account", 1, "0"),
/// ]);
/// assert_eq!(mai.children().map(|c| c.len()), Some(2));
/// ```
#[macro_export]
macro_rules! data_object {
    // Branch with nested objects
    ($tag:expr, $label:expr, $max:expr, [ $( ( $($child:tt)* ) ),* $(,)? ]) => {
        $crate::DataObject::new(
            $tag,
            $label,
            $max,
            $crate::Content::Branch(vec![ $( $crate::data_object!($($child)*) ),* ]),
        )
    };

    // Leaf
    ($tag:expr, $label:expr, $max:expr, $value:expr) => {
        $crate::DataObject::leaf($tag, $label, $max, $value)
    };
}
