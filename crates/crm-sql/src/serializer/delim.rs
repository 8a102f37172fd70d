use super::{Formatter, Params, ToSql};

/// Serializes each item, separated by `, `.
pub(super) struct Comma<L>(pub(super) L);

impl<L, I> ToSql for Comma<L>
where
    L: IntoIterator<Item = I>,
    I: ToSql,
{
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let mut s = "";
        for item in self.0 {
            f.dst.push_str(s);
            item.to_sql(f);
            s = ", ";
        }
    }
}
