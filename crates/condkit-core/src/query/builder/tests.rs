use super::*;
use crate::{
    error::QueryError,
    obs::CountingSink,
    query::{
        adapter::FilterContext,
        predicate::{Combinator, CompareOp, Condition, Expr, FilterTree},
    },
    test_fixtures::{ID_2, ISBN, PAGE, TestRow, books, ids},
    value::{Value, ValueTag},
};
use std::sync::Arc;

fn leaf(field: &str, op: CompareOp, value: impl Into<Value>) -> Arc<Expr> {
    Arc::new(Expr::Compare(Condition::new(field, op, value.into())))
}

fn combine(combinator: Combinator, left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
    Arc::new(Expr::Combine {
        combinator,
        left,
        right,
    })
}

fn select(tree: &FilterTree) -> Vec<String> {
    let rows = books();
    ids(rows.iter().filter(|row| tree.matches(*row)))
}

struct Catalog;

impl FilterContext for Catalog {
    fn name(&self) -> &str {
        "catalog"
    }
}

// ---- shape -------------------------------------------------------------

#[test]
fn fluent_chain_builds_left_associative_tree() {
    let tree = FilterBuilder::new(&())
        .and_equals("a", 1)
        .and_then(|b| b.and_greater_than("b", 2))
        .and_then(|b| b.or_less_than("c", 3))
        .and_then(|b| b.build())
        .unwrap();

    let expected = combine(
        Combinator::Or,
        combine(
            Combinator::And,
            leaf("a", CompareOp::Eq, 1),
            leaf("b", CompareOp::Gt, 2),
        ),
        leaf("c", CompareOp::Lt, 3),
    );

    assert_eq!(tree, FilterTree::Expr(expected));
    assert_eq!(tree.to_string(), "(((a = 1) AND (b > 2)) OR (c < 3))");
}

#[test]
fn first_condition_discards_its_combinator() {
    let via_or = FilterBuilder::new(&()).or_equals("a", 1).unwrap().build().unwrap();
    let via_and = FilterBuilder::new(&()).and_equals("a", 1).unwrap().build().unwrap();

    assert_eq!(via_or, via_and);
    assert_eq!(via_or, FilterTree::Expr(leaf("a", CompareOp::Eq, 1)));
}

#[test]
fn empty_builder_builds_match_all() {
    let tree = FilterBuilder::new(&()).build().unwrap();

    assert!(tree.is_match_all());
    assert_eq!(tree.len(), 0);
    assert_eq!(select(&tree).len(), 10);
}

#[test]
fn build_is_repeatable_and_keeps_state() {
    let builder = FilterBuilder::new(&()).and_equals("isbn", ISBN).unwrap();
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);

    let third = builder.or_equals("id", ID_2).unwrap().build().unwrap();
    assert_eq!(third.len(), 2);
    assert_eq!(first.len(), 1);
}

// ---- activation --------------------------------------------------------

#[test]
fn inactive_conditions_leave_no_trace() {
    let with_skips = FilterBuilder::new(&())
        .and_equals_if("isbn", ISBN, false)
        .unwrap()
        .and_equals("id", ID_2)
        .unwrap()
        .or_greater_than_if("totalPage", PAGE, false)
        .unwrap()
        .build()
        .unwrap();
    let without = FilterBuilder::new(&())
        .and_equals("id", ID_2)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(with_skips, without);
}

#[test]
fn blank_and_null_text_skip_two_argument_form() {
    let absent: Option<&str> = None;
    let tree = FilterBuilder::new(&())
        .and_equals("isbn", "")
        .unwrap()
        .and_equals("isbn", "   ")
        .unwrap()
        .and_equals("isbn", absent)
        .unwrap()
        .build()
        .unwrap();

    assert!(tree.is_match_all());

    let tree = FilterBuilder::new(&())
        .and_equals("isbn", "x")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(tree.len(), 1);
}

#[test]
fn zero_is_an_active_numeric_value() {
    let tree = FilterBuilder::new(&())
        .and_greater_than("totalPage", 0)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(select(&tree).len(), 10);
}

#[test]
fn explicit_activation_overrides_presence() {
    // an active blank string is still a real condition
    let tree = FilterBuilder::new(&())
        .and_equals_if("isbn", "", true)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(tree.len(), 1);
    assert!(select(&tree).is_empty());
}

#[test]
fn long_chains_build_match_and_drop() {
    const LEN: i64 = 100_000;

    let builder = (0..LEN)
        .try_fold(FilterBuilder::new(&()), |b, pages| b.or_equals("totalPage", pages))
        .unwrap();
    let tree = builder.build().unwrap();
    drop(builder);

    assert_eq!(tree.len(), 100_000);
    assert_eq!(tree.depth(), 100_000);
    assert_eq!(select(&tree).len(), 10);
    assert!(!tree.matches(&TestRow::from([("totalPage".to_string(), Value::Int(LEN))])));

    let rendered = tree.to_string();
    assert!(rendered.starts_with("(((("));
    assert!(rendered.ends_with(" OR (totalPage = 99999))"));

    let shared = tree.clone();
    drop(tree);
    assert_eq!(shared.len(), 100_000);
    drop(shared);
}

// ---- errors ------------------------------------------------------------

#[test]
fn empty_field_is_rejected_when_active() {
    let err = FilterBuilder::new(&()).and_equals("", 1).unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidField {
            field: String::new()
        }
    );

    let err = FilterBuilder::new(&()).or_less_than_if("  ", 1, true).unwrap_err();
    assert!(matches!(err, QueryError::InvalidField { .. }));
}

#[test]
fn empty_field_is_ignored_when_inactive() {
    let tree = FilterBuilder::new(&())
        .and_equals_if("", 1, false)
        .unwrap()
        .and_equals("", None::<i32>)
        .unwrap()
        .build()
        .unwrap();

    assert!(tree.is_match_all());
}

#[test]
fn ordering_on_bool_fails_at_build() {
    let builder = FilterBuilder::new(&())
        .and_equals("isbn", ISBN)
        .unwrap()
        .or_greater_than("active", true)
        .unwrap();

    let err = builder.build().unwrap_err();
    assert_eq!(
        err,
        QueryError::UnsupportedOperator {
            field: "active".to_string(),
            op: CompareOp::Gt,
            kind: ValueTag::Bool,
        }
    );
}

#[test]
fn explicitly_active_null_fails_at_build() {
    let err = FilterBuilder::new(&())
        .and_equals_if("isbn", None::<&str>, true)
        .unwrap()
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        QueryError::UnsupportedOperator {
            kind: ValueTag::Null,
            ..
        }
    ));
}

// ---- reference scenarios ----------------------------------------------

#[test]
fn or_equals_unions_two_records() {
    let tree = FilterBuilder::of(&(), |b| {
        b.and_equals("isbn", ISBN)?.or_equals("id", ID_2)?.build()
    })
    .unwrap();

    assert_eq!(select(&tree), vec!["2", "5"]);
}

#[test]
fn inactive_or_branch_contributes_nothing() {
    let tree = FilterBuilder::of(&(), |b| {
        b.and_equals("isbn", ISBN)?
            .or_equals_if("id", ID_2, false)?
            .build()
    })
    .unwrap();

    assert_eq!(select(&tree), vec!["5"]);
}

#[test]
fn inactive_first_condition_lets_or_stand_alone() {
    let tree = FilterBuilder::of(&(), |b| {
        b.and_equals_if("isbn", ISBN, false)?
            .or_equals_if("id", ID_2, !ID_2.trim().is_empty())?
            .build()
    })
    .unwrap();

    assert_eq!(select(&tree), vec!["2"]);
}

#[test]
fn isbn_or_greater_than_has_no_duplicates() {
    let tree = FilterBuilder::of(&(), |b| {
        b.and_equals("isbn", ISBN)?
            .or_greater_than("totalPage", PAGE)?
            .build()
    })
    .unwrap();

    assert_eq!(select(&tree), vec!["1", "3", "5", "7", "8"]);

    // a record satisfying both branches still appears once
    let tree = FilterBuilder::of(&(), |b| {
        b.and_equals("isbn", ISBN)?
            .or_greater_than_equal("totalPage", PAGE)?
            .build()
    })
    .unwrap();
    assert_eq!(select(&tree), vec!["1", "3", "5", "7", "8"]);
}

#[test]
fn not_equals_excludes_one_record() {
    let tree = FilterBuilder::of(&(), |b| b.or_not_equals("isbn", ISBN)?.build()).unwrap();
    assert_eq!(select(&tree).len(), 9);

    let tree =
        FilterBuilder::of(&(), |b| b.or_not_equals_if("isbn", ISBN, false)?.build()).unwrap();
    assert_eq!(select(&tree).len(), 10);
}

// ---- context & metrics -------------------------------------------------

#[test]
fn builder_carries_its_context() {
    let catalog = Catalog;
    let builder = FilterBuilder::new(&catalog);

    assert_eq!(builder.context().name(), "catalog");
}

#[test]
fn sink_counts_only_accepted_conditions() {
    let sink = CountingSink::new();
    let builder = FilterBuilder::new(&())
        .with_sink(&sink)
        .and_equals("isbn", ISBN)
        .unwrap()
        .or_equals_if("id", ID_2, false)
        .unwrap()
        .and_less_than("totalPage", PAGE)
        .unwrap();
    builder.build().unwrap();
    builder.build().unwrap();

    let report = sink.report();
    assert_eq!(report.conditions_folded, 2);
    assert_eq!(report.builds, 2);
    assert_eq!(report.built_conditions, 4);
    assert_eq!(report.validation_failures, 0);
}

#[test]
fn sink_counts_validation_failures() {
    let sink = CountingSink::new();
    let result = FilterBuilder::new(&())
        .with_sink(&sink)
        .and_less_than("blob", vec![1_u8, 2])
        .unwrap()
        .build();

    assert!(result.is_err());
    assert_eq!(sink.report().validation_failures, 1);
    assert_eq!(sink.report().builds, 0);
}

#[test]
fn rows_can_be_borrowed_maps() {
    let tree = FilterBuilder::new(&())
        .and_equals("id", ID_2)
        .unwrap()
        .build()
        .unwrap();
    let row: TestRow = books().swap_remove(1);

    assert!(tree.matches(&row));
}
