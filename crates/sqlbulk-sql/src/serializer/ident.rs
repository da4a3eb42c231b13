use super::{Formatter, ToSql};

/// A bracket quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let ident = self.0.as_ref();

        f.dst.push('[');
        for ch in ident.chars() {
            if ch == ']' {
                f.dst.push(']');
            }
            f.dst.push(ch);
        }
        f.dst.push(']');
    }
}
