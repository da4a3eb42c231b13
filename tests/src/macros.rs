/// Asserts that two collections hold the same elements, ignoring order.
///
/// Rows read back from a key join come in whatever order the server picks,
/// so comparisons against the input go through this macro. Duplicates are
/// counted.
#[macro_export]
macro_rules! assert_eq_unordered {
    ($actual:expr, $expect:expr) => {{
        let mut remaining: Vec<_> = $actual.into_iter().collect();

        for expected in $expect {
            match remaining.iter().position(|row| *row == expected) {
                Some(index) => {
                    remaining.swap_remove(index);
                }
                None => panic!("`{:#?}` missing from actual rows", expected),
            }
        }

        assert!(remaining.is_empty(), "unexpected rows: {:#?}", remaining);
    }};
}
