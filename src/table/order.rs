// src/table/order.rs
//
// Display order: identity columns, then highlighted stats by importance,
// then everything else in discovery order. Sorts are stable, so applying
// `reorder` twice gives the same order.

use super::columns::ColumnConfig;

pub static IDENTITY_ORDER: &[&str] = &["no", "name", "player", "bat1", "bat2"];

pub static IMPORTANCE_ORDER: &[&str] = &["runs", "wkts", "avg", "total", "score", "points", "catches"];

fn position(list: &[&str], key: &str) -> usize {
    list.iter().position(|k| *k == key).unwrap_or(usize::MAX)
}

pub fn reorder(columns: Vec<ColumnConfig>) -> Vec<ColumnConfig> {
    let mut identity = Vec::new();
    let mut highlighted = Vec::new();
    let mut rest = Vec::new();

    for col in columns {
        if IDENTITY_ORDER.contains(&col.key.as_str()) {
            identity.push(col);
        } else if col.highlight {
            highlighted.push(col);
        } else {
            rest.push(col);
        }
    }

    identity.sort_by_key(|c| position(IDENTITY_ORDER, &c.key));
    highlighted.sort_by_key(|c| position(IMPORTANCE_ORDER, &c.key));

    let mut out = identity;
    out.append(&mut highlighted);
    out.append(&mut rest);
    for (i, col) in out.iter_mut().enumerate() {
        col.sort_rank = i;
    }
    out
}
