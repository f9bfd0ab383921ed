use crate::value::Value;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub(crate) type TestRow = BTreeMap<String, Value>;

pub(crate) const ISBN: &str = "9787111641247";
pub(crate) const ID_2: &str = "2";
pub(crate) const PAGE: i64 = 540;

///
/// row
/// build a record from field/value pairs
///

pub(crate) fn row<const N: usize>(fields: [(&str, Value); N]) -> TestRow {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

///
/// books
///
/// Ten-record reference set: one book at exactly `PAGE` pages (the one
/// carrying `ISBN`), four above, five below; id "2" is below.
///

pub(crate) fn books() -> Vec<TestRow> {
    const BOOKS: [(&str, &str, i64, (i32, u32, u32)); 10] = [
        ("1", "9787115417305", 800, (2016, 3, 1)),
        ("2", "9787121361975", 320, (2019, 4, 1)),
        ("3", "9787111213826", 612, (2007, 6, 1)),
        ("4", "9787302517597", 410, (2019, 1, 1)),
        ("5", ISBN, 540, (2020, 1, 1)),
        ("6", "9787115480655", 275, (2018, 5, 1)),
        ("7", "9787111407010", 704, (2013, 1, 1)),
        ("8", "9787115496140", 998, (2019, 1, 1)),
        ("9", "9787121362132", 188, (2019, 5, 1)),
        ("10", "9787111605591", 496, (2018, 8, 1)),
    ];

    BOOKS
        .iter()
        .map(|&(id, isbn, pages, (y, m, d))| {
            row([
                ("id", Value::from(id)),
                ("isbn", Value::from(isbn)),
                ("totalPage", Value::Int(pages)),
                (
                    "publishAt",
                    NaiveDate::from_ymd_opt(y, m, d).map_or(Value::Null, Value::Date),
                ),
            ])
        })
        .collect()
}

/// Ids of the rows a predicate selects, in input order.
pub(crate) fn ids<'a>(rows: impl IntoIterator<Item = &'a TestRow>) -> Vec<String> {
    rows.into_iter()
        .filter_map(|row| row.get("id").and_then(Value::as_text).map(str::to_string))
        .collect()
}
