use super::{Comma, Delimited, Formatter, Ident, ToSql};

use crate::stmt::{self, KeyColumn, SelectColumn};

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::StageTable(stmt) => stmt.to_sql(f),
            stmt::Statement::MergeInsert(stmt) => stmt.to_sql(f),
            stmt::Statement::MergeInsertAndSelect(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::StageTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = || Comma(self.columns.iter().map(Ident));
        let (staging, source) = (&self.staging, &self.source);

        fmt!(f, "SELECT TOP 0 " columns() " INTO " staging " FROM " source " target WITH(NOLOCK)");

        if self.detach_identity {
            fmt!(f, " UNION ALL SELECT TOP 0 " columns() " FROM " source " WITH(NOLOCK)");
        }

        fmt!(f, ";");
    }
}

/// `SET IDENTITY_INSERT <target> ON|OFF;` followed by a newline
struct IdentityInsert<'a>(&'a stmt::MergeInsert, &'static str);

impl ToSql for IdentityInsert<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Self(insert, toggle) = self;
        let target = &insert.target;

        if insert.identity_insert {
            fmt!(f, "SET IDENTITY_INSERT " target " " toggle ";\n");
        }
    }
}

/// `INSERT INTO <target> (<cols>) [<output>] SELECT <cols> FROM <staging>;`
struct InsertFromStaging<'a, O>(&'a stmt::MergeInsert, Option<O>);

impl<O: ToSql> ToSql for InsertFromStaging<'_, O> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Self(insert, output) = self;
        let columns = || Comma(insert.columns.iter().map(Ident));
        let (target, staging) = (&insert.target, &insert.staging);

        fmt!(f, "INSERT INTO " target " (" columns() ") ");
        fmt!(f, output.map(|output| (output, " ")));
        fmt!(f, "SELECT " columns() " FROM " staging ";\n");
    }
}

impl ToSql for &stmt::MergeInsert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let staging = &self.staging;

        fmt!(
            f,
            IdentityInsert(self, "ON")
            InsertFromStaging::<&str>(self, None)
            IdentityInsert(self, "OFF")
            "DROP TABLE " staging ";"
        );
    }
}

impl ToSql for &stmt::MergeInsertAndSelect {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let keys = || self.keys.iter();
        let key_names = Comma(keys().map(|key| Ident(&key.name)));
        let output = (
            "OUTPUT ",
            Comma(keys().map(|key| ("inserted.", Ident(&key.name)))),
            (" INTO ", &self.inserted, (" (", key_names, ")")),
        );
        let join = Delimited(keys().map(KeyJoin), " AND ");
        let (inserted, insert) = (&self.inserted, &self.insert);
        let (target, staging) = (&insert.target, &insert.staging);

        fmt!(
            f,
            IdentityInsert(insert, "ON")
            "DECLARE " inserted " TABLE (" Comma(keys()) ");\n"
            InsertFromStaging(insert, Some(output))
            IdentityInsert(insert, "OFF")
            "SELECT " Comma(&self.select) " FROM " target " target INNER JOIN "
            inserted " ins ON " join ";\n"
            "DROP TABLE " staging ";"
        );
    }
}

impl ToSql for &KeyColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.name) " " self.ty.as_sql());
    }
}

impl ToSql for &SelectColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "target." Ident(&self.column) " AS " Ident(&self.alias));
    }
}

/// `target.[k] = ins.[k]`
struct KeyJoin<'a>(&'a KeyColumn);

impl ToSql for KeyJoin<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "target." Ident(&self.0.name) " = ins." Ident(&self.0.name));
    }
}
