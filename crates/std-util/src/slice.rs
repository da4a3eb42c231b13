use std::collections::HashSet;
use std::hash::Hash;

pub trait SliceUtil<T> {
    /// Returns `true` if no two elements are equal.
    fn is_unique(&self) -> bool
    where
        T: Eq + Hash;
}

impl<T> SliceUtil<T> for [T] {
    fn is_unique(&self) -> bool
    where
        T: Eq + Hash,
    {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter().all(|item| seen.insert(item))
    }
}

#[macro_export]
macro_rules! assert_unique {
    ($e:expr) => {{
        use $crate::slice::SliceUtil;
        let items = &$e[..];
        assert!(items.is_unique(), "expected unique items; actual={:?}", items);
    }};
}
