// tests/columns.rs
use serde_json::json;

use cricket_stats::fetch::parse_rows;
use cricket_stats::table::{
    ColumnConfig, ColumnRole, RenderedTable, TableSchema, TableView, format_value, medal, rank_for_row,
};
use cricket_stats::table::columns::{discover, generated_label, label_for, width_for, DEFAULT_WIDTH};
use cricket_stats::table::order::reorder;

fn keys(schema: &TableSchema) -> Vec<&str> {
    schema.keys().collect()
}

#[test]
fn two_row_runs_table_renders_with_medals() {
    let rows = parse_rows(r#"[{"no":1,"name":"A","runs":50},{"no":2,"name":"B","runs":30}]"#).unwrap();
    let schema = TableSchema::infer(&rows);

    assert_eq!(keys(&schema), ["no", "name", "runs"]);
    assert_eq!(schema.labels(), ["#", "Player", "Runs"]);

    let cols = schema.columns();
    assert_eq!(cols[0].role, ColumnRole::Rank);
    assert_eq!(cols[1].role, ColumnRole::Name);
    assert!(cols[2].highlight);
    assert_eq!([cols[0].width, cols[1].width, cols[2].width], [50, 160, 65]);

    let table = RenderedTable::render(&schema, &rows);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].cells, ["1", "A", "50"]);
    assert_eq!(table.rows[0].medal, Some("🥇"));
    assert_eq!(table.rows[1].medal, Some("🥈"));
    assert_eq!(table.rows[0].display_cell(&schema, 0), "🥇");
    assert_eq!(table.rows[0].display_cell(&schema, 1), "A");
    assert_eq!(table.record_count_label(), "2 records");
}

#[test]
fn columns_come_from_row_zero_only() {
    let rows = parse_rows(r#"[{"name":"A","runs":5},{"name":"B","runs":7,"extra":1}]"#).unwrap();
    let schema = TableSchema::infer(&rows);
    assert_eq!(keys(&schema), ["name", "runs"]);

    let table = RenderedTable::render(&schema, &rows);
    assert_eq!(table.rows[1].cells, ["B", "7"]);
}

#[test]
fn missing_fields_render_placeholder() {
    let rows = parse_rows(r#"[{"name":"A","hs":"101*","avg":null},{"name":"B"}]"#).unwrap();
    let schema = TableSchema::infer(&rows);
    let table = RenderedTable::render(&schema, &rows);

    assert_eq!(keys(&schema), ["name", "avg", "hs"]);
    assert_eq!(table.rows[0].cells, ["A", "-", "101*"]);
    assert_eq!(table.rows[1].cells, ["B", "-", "-"]);
}

#[test]
fn reorder_puts_identity_then_important_stats() {
    let rows = parse_rows(r#"[{"mts":3,"runs":120,"name":"A","avg":40.0,"no":1,"hs":"77","wkts":2}]"#).unwrap();
    let schema = TableSchema::infer(&rows);
    assert_eq!(keys(&schema), ["no", "name", "runs", "wkts", "avg", "mts", "hs"]);

    let ranks: Vec<usize> = schema.columns().iter().map(|c| c.sort_rank).collect();
    assert_eq!(ranks, [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn reorder_is_idempotent() {
    let rows = parse_rows(r#"[{"venue":"X","bat2":"B","score":10,"bat1":"A","wkt":"1st","total":99}]"#).unwrap();
    let once = reorder(discover(&rows));
    let twice = reorder(once.clone());
    assert_eq!(once, twice);

    let order: Vec<&str> = once.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(order, ["bat1", "bat2", "total", "score", "venue", "wkt"]);
}

#[test]
fn no_rows_no_columns() {
    assert!(discover(&[]).is_empty());
    assert!(TableSchema::infer(&[]).is_empty());
}

#[test]
fn labels_known_and_generated() {
    assert_eq!(label_for("sr"), ("SR".to_string(), Some("Strike Rate".to_string())));
    assert_eq!(label_for("runs"), ("Runs".to_string(), None));
    assert_eq!(label_for("strike_rate").0, "Strike rate");
    assert_eq!(generated_label("last_matchDate"), "Last match Date");
    assert_eq!(generated_label("_x"), "X");
    assert_eq!(generated_label(""), "");

    assert_eq!(ColumnConfig::for_key("econ").tooltip(), "Economy Rate");
    assert_eq!(ColumnConfig::for_key("venue").tooltip(), "Venue");
}

#[test]
fn widths_exact_then_group_then_default() {
    assert_eq!(width_for("name"), 160);
    assert_eq!(width_for("mts"), 55);
    assert_eq!(width_for("econ"), 70);
    assert_eq!(width_for("wkts"), 65);
    assert_eq!(width_for("something_new"), DEFAULT_WIDTH);
}

#[test]
fn number_formatting() {
    assert_eq!(format_value(Some(&json!(45.5)), "avg"), "45.50");
    assert_eq!(format_value(Some(&json!(40)), "avg"), "40.00");
    assert_eq!(format_value(Some(&json!(3.0)), "runs"), "3");
    assert_eq!(format_value(Some(&json!(12)), "runs"), "12");
    assert_eq!(format_value(Some(&json!(2.5)), "overs"), "2.5");
    // exact ties round up, as a scorer would
    assert_eq!(format_value(Some(&json!(12.125)), "avg"), "12.13");
    assert_eq!(format_value(Some(&json!(0.125)), "econ"), "0.13");
    assert_eq!(format_value(Some(&json!(4.125)), "econ"), "4.13");
    assert_eq!(format_value(Some(&json!("5/23")), "bb"), "5/23");
    assert_eq!(format_value(Some(&json!(true)), "captain"), "true");
    assert_eq!(format_value(Some(&json!("")), "venue"), "-");
    assert_eq!(format_value(Some(&json!(null)), "venue"), "-");
    assert_eq!(format_value(None, "venue"), "-");
}

#[test]
fn rank_prefers_positive_no_else_position() {
    let rows = parse_rows(r#"[{"no":7},{"no":0},{"no":"x"},{},{"no":2.0}]"#).unwrap();
    let ranks: Vec<Option<u64>> = rows.iter().enumerate().map(|(i, r)| rank_for_row(r, i)).collect();
    assert_eq!(ranks, [Some(7), None, Some(3), Some(4), Some(2)]);

    assert_eq!(medal(3), Some("🥉"));
    assert_eq!(medal(4), None);
    assert_eq!(medal(0), None);
}

#[test]
fn fractional_or_negative_no_gets_no_medal() {
    let rows = parse_rows(r#"[{"no":1.5,"name":"A"},{"no":-2,"name":"B"},{"no":3,"name":"C"}]"#).unwrap();
    let table = RenderedTable::render(&TableSchema::infer(&rows), &rows);

    let ranks: Vec<Option<u64>> = table.rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, [None, None, Some(3)]);
    let medals: Vec<Option<&str>> = table.rows.iter().map(|r| r.medal).collect();
    assert_eq!(medals, [None, None, Some("🥉")]);

    // the rank column keeps the server's value when there is no medal
    assert_eq!(table.rows[0].display_cell(&table.schema, 0), "1.5");
    assert_eq!(table.rows[1].display_cell(&table.schema, 0), "-2");
}

#[test]
fn medal_follows_position_when_no_is_absent() {
    let rows = parse_rows(r#"[{"name":"A"},{"name":"B"},{"name":"C"},{"name":"D"}]"#).unwrap();
    let table = RenderedTable::render(&TableSchema::infer(&rows), &rows);
    let medals: Vec<Option<&str>> = table.rows.iter().map(|r| r.medal).collect();
    assert_eq!(medals, [Some("🥇"), Some("🥈"), Some("🥉"), None]);
}

#[test]
fn view_states_from_fetch_outcome() {
    use cricket_stats::catalog::{Category, Report};
    use cricket_stats::fetch::FetchError;

    let report = Report {
        id: "report-0-most-runs".into(),
        title: "Most Runs".into(),
        url: "http://x/runs".into(),
        icon: "🏏",
        category: Category::Batting,
    };

    assert!(matches!(TableView::default(), TableView::NoReportSelected));
    assert!(TableView::loading(&report).is_loading());

    let empty = TableView::resolved(report.clone(), Ok(Vec::new()));
    assert!(matches!(empty, TableView::Empty(_)));
    assert!(empty.rendered().is_none());

    let err = TableView::resolved(
        report.clone(),
        Err(FetchError::Status { code: 404, reason: "Not Found".into() }),
    );
    match err {
        TableView::Error(msg) => assert_eq!(msg, "Failed to fetch data: 404 Not Found"),
        other => panic!("expected error view, got {:?}", other),
    }

    // row zero without columns has nothing to show
    let shapeless = parse_rows(r#"[1, {"name":"A"}]"#).unwrap();
    let blank = TableView::resolved(report.clone(), Ok(shapeless));
    assert!(matches!(blank, TableView::Empty(_)));
    assert_eq!(blank.row_count(), 0);

    let rows = parse_rows(r#"[{"no":1,"name":"A","runs":50}]"#).unwrap();
    let full = TableView::resolved(report, Ok(rows));
    assert_eq!(full.row_count(), 1);
    assert_eq!(full.report().map(|r| r.title.as_str()), Some("Most Runs"));
    assert_eq!(full.rendered().unwrap().record_count_label(), "1 record");
}
