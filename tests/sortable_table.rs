// tests/sortable_table.rs
//
// Table behavior as a page driver sees it: build, click headers, type queries.

use capita_score::core::format::int_cell;
use capita_score::error::TableError;
use capita_score::record;
use capita_score::record::RowRecord;
use capita_score::table::{ColumnSpec, SortDir, SortableTable, TableConfig};

fn scores() -> Vec<RowRecord> {
    ["3", "NaN", "1", "2"]
        .iter()
        .enumerate()
        .map(|(i, v)| record! { "id" => i.to_string(), "v" => *v })
        .collect()
}

fn numeric_table(dir: SortDir) -> SortableTable {
    let cols = vec![ColumnSpec::text("id", "Id"), ColumnSpec::numeric("v", "V")];
    SortableTable::new(TableConfig::new(cols, scores()).sort_by("v", dir)).unwrap()
}

fn column(t: &SortableTable, key: &str) -> Vec<String> {
    t.snapshot().column(key).into_iter().map(String::from).collect()
}

#[test]
fn numbers_sort_with_nan_last_both_ways() {
    // "NaN" cells decode to "" upstream; the table sees a non-number either way
    assert_eq!(column(&numeric_table(SortDir::Descending), "v"), ["3", "2", "1", "NaN"]);
    assert_eq!(column(&numeric_table(SortDir::Ascending), "v"), ["1", "2", "3", "NaN"]);
}

#[test]
fn header_toggle_round_trips() {
    let mut t = numeric_table(SortDir::Descending);
    let initial = column(&t, "v");

    assert!(t.activate_header("v"));
    assert_eq!(t.sort_dir(), SortDir::Ascending);
    assert_eq!(column(&t, "v"), ["1", "2", "3", "NaN"]);

    assert!(t.activate_header("v"));
    assert_eq!(t.sort_dir(), SortDir::Descending);
    assert_eq!(column(&t, "v"), initial);
}

#[test]
fn other_header_uses_column_default_direction() {
    let cols = vec![
        ColumnSpec::text("nick", "Nick").default_dir(SortDir::Ascending),
        ColumnSpec::numeric("m", "M"),
    ];
    let rows = vec![
        record! { "nick" => "bia", "m" => "1" },
        record! { "nick" => "Ana", "m" => "2" },
    ];
    let mut t = SortableTable::new(TableConfig::new(cols, rows).sort_by("m", SortDir::Descending)).unwrap();

    assert!(t.activate_header("nick"));
    assert_eq!(t.sort_key(), Some("nick"));
    assert_eq!(t.sort_dir(), SortDir::Ascending);
    assert_eq!(column(&t, "nick"), ["Ana", "bia"]);

    // unknown and unsortable keys change nothing
    assert!(!t.activate_header("nope"));
    assert_eq!(t.sort_key(), Some("nick"));
}

#[test]
fn unsortable_column_ignores_clicks() {
    let cols = vec![ColumnSpec::numeric("m", "M"), ColumnSpec::text("note", "Note").unsortable()];
    let mut t = SortableTable::new(TableConfig::new(cols, vec![])).unwrap();
    assert_eq!(t.sort_key(), Some("m"));
    assert!(!t.activate_header("note"));
    assert_eq!(t.sort_key(), Some("m"));
}

#[test]
fn diacritic_insensitive_filter_and_reset() {
    let cols = vec![ColumnSpec::text("nick", "Nick"), ColumnSpec::numeric("m", "M")];
    let rows = vec![
        record! { "nick" => "José", "m" => "1" },
        record! { "nick" => "Ana", "m" => "3" },
        record! { "nick" => "Joana", "m" => "2" },
    ];
    let mut t = SortableTable::new(TableConfig::new(cols, rows).sort_by("m", SortDir::Descending)).unwrap();

    t.filter_by_text("JOSE", None);
    assert_eq!(column(&t, "nick"), ["José"]);

    // survivors keep the active sort
    t.filter_by_text("jo", Some(&["nick"]));
    assert_eq!(column(&t, "nick"), ["Joana", "José"]);

    t.filter_by_text("", None);
    assert_eq!(column(&t, "nick"), ["Ana", "Joana", "José"]);
    assert_eq!(t.rows().len(), 3);
}

#[test]
fn filter_never_touches_stored_rows() {
    let mut t = numeric_table(SortDir::Descending);
    let before = t.rows().to_vec();
    t.filter_by_text("zzz", None);
    assert_eq!(t.visible_len(), 0);
    assert_eq!(t.rows(), before.as_slice());
}

#[test]
fn header_click_drops_filter() {
    let mut t = numeric_table(SortDir::Descending);
    t.filter_by_text("2", Some(&["v"]));
    assert_eq!(t.visible_len(), 1);
    t.activate_header("v");
    assert_eq!(t.visible_len(), 4);
}

#[test]
fn replace_rows_keeps_sort() {
    let mut t = numeric_table(SortDir::Ascending);
    t.filter_by_text("3", None);
    t.replace_rows(vec![record! { "id" => "a", "v" => "9" }, record! { "id" => "b", "v" => "4" }]);
    assert_eq!(column(&t, "v"), ["4", "9"]);
    assert_eq!(t.sort_key(), Some("v"));
}

#[test]
fn sorts_by_computed_value() {
    let cols = vec![
        ColumnSpec::numeric("total", "Total").compute(|r| (r.number("a") + r.number("b")).to_string()),
    ];
    let rows = vec![
        record! { "a" => "1", "b" => "1" },
        record! { "a" => "5", "b" => "0" },
        record! { "a" => "2", "b" => "2" },
    ];
    let t = SortableTable::new(TableConfig::new(cols, rows)).unwrap();
    assert_eq!(column(&t, "total"), ["5", "4", "2"]);
}

#[test]
fn render_applies_compute_format_and_placeholder() {
    let cols = vec![
        ColumnSpec::text("nick", "Nick").compute(|r| format!("{}#{}", r.value("nick"), r.value("tag"))),
        ColumnSpec::numeric("m", "P").format(int_cell),
        ColumnSpec::text("note", "Note"),
    ];
    let rows = vec![record! { "nick" => "Ana", "tag" => "BR1", "m" => "1234.4", "note" => "" }];
    let snap = SortableTable::new(TableConfig::new(cols, rows)).unwrap().snapshot();

    assert_eq!(snap.ncols(), 3);
    assert_eq!(snap.rows[0].iter().map(|c| c.text.as_str()).collect::<Vec<_>>(), ["Ana#BR1", "1,234", "—"]);
}

#[test]
fn header_indicator_tracks_sort() {
    let mut t = numeric_table(SortDir::Descending);
    let snap = t.snapshot();
    let h = snap.sorted_header().unwrap();
    assert_eq!((h.key.as_str(), h.text()), ("v", String::from("V ▼")));

    t.activate_header("v");
    assert_eq!(t.snapshot().sorted_header().unwrap().text(), "V ▲");
}

#[test]
fn bad_initial_sort_keys_are_rejected() {
    let cols = || vec![ColumnSpec::numeric("m", "M"), ColumnSpec::text("n", "N").unsortable()];
    let err = SortableTable::new(TableConfig::new(cols(), vec![]).sort_by("x", SortDir::Descending)).unwrap_err();
    assert_eq!(err, TableError::UnknownSortKey(String::from("x")));
    let err = SortableTable::new(TableConfig::new(cols(), vec![]).sort_by("n", SortDir::Descending)).unwrap_err();
    assert_eq!(err, TableError::UnsortableSortKey(String::from("n")));
}
