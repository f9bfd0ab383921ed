use chrono::NaiveDate;
use condkit::prelude::*;
use serde::Deserialize;
use std::{collections::HashMap, sync::Once};
use tracing_subscriber::EnvFilter;

pub const ISBN: &str = "9787111641247";
pub const ID_2: &str = "2";
pub const PAGE: i64 = 540;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

///
/// Book
///

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub isbn: String,
    pub author: String,
    pub total_page: i64,
    pub publish_at: NaiveDate,
}

impl Row for Book {
    fn field(&self, name: &str) -> FieldPresence {
        let value = match name {
            "id" => self.id.to_value(),
            "name" => self.name.to_value(),
            "isbn" => self.isbn.to_value(),
            "author" => self.author.to_value(),
            "totalPage" => self.total_page.to_value(),
            "publishAt" => self.publish_at.to_value(),
            _ => return FieldPresence::Missing,
        };

        FieldPresence::Present(value)
    }
}

pub fn books() -> Vec<Book> {
    serde_json::from_str(include_str!("../data/books.json")).expect("book fixture parses")
}

/// Shared read-only parameter map, built once.
pub fn params() -> HashMap<&'static str, Value> {
    HashMap::from([
        ("isbn", Value::from(ISBN)),
        ("id", Value::from(ID_2)),
        ("totalPage", Value::Int(PAGE)),
    ])
}

/// Run a tree through the in-memory backend over the fixture set.
pub fn find_all(tree: &FilterTree) -> Vec<Book> {
    let books = books();
    let filter = compile(&MemoryBackend, &(), tree).expect("tree compiles");

    filter.filter(&books).into_iter().cloned().collect()
}
