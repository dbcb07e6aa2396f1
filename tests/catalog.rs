// tests/catalog.rs
use cricket_stats::catalog::{
    self, Catalog, Category, ReportLink, ReportLinks, category_for_title, icon_for_title, report_id, slug,
};

fn links(pairs: &[(&str, &str)]) -> Vec<ReportLink> {
    pairs.iter().map(|(t, u)| ReportLink::new(*t, *u)).collect()
}

#[test]
fn duplicate_urls_keep_first_and_ids_follow_dedup_position() {
    let cat = Catalog::build(&links(&[
        ("Most Runs", "http://x/runs"),
        ("Most Wickets", "http://x/wkts"),
        ("Leading Run Scorers", "http://x/runs"),
        ("Most Catches", "http://x/catches"),
    ]));

    let ids: Vec<&str> = cat.all().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["report-0-most-runs", "report-1-most-wickets", "report-2-most-catches"]);
    assert_eq!(cat.all()[0].title, "Most Runs");
}

#[test]
fn ids_are_unique_even_when_titles_slug_alike() {
    let cat = Catalog::build(&links(&[("Most Runs", "http://x/a"), ("most runs!", "http://x/b")]));
    assert_eq!(cat.all()[0].id, "report-0-most-runs");
    assert_eq!(cat.all()[1].id, "report-1-most-runs-");
    assert_ne!(cat.all()[0].id, cat.all()[1].id);
}

#[test]
fn slug_collapses_punctuation_and_truncates() {
    assert_eq!(slug("Best Bowling in an Innings"), "best-bowling-in-an-innings");
    assert_eq!(slug("All-Rounder  Rankings"), "all-rounder-rankings");
    assert_eq!(slug("A Very Long Report Title That Goes On"), "a-very-long-report-title-that-");
    assert_eq!(report_id("Most Sixes", 8), "report-8-most-sixes");
}

#[test]
fn primary_and_secondary_partition_in_order() {
    let pairs: Vec<(String, String)> = (0..5)
        .map(|i| (format!("Report {i}"), format!("http://x/{i}")))
        .collect();
    let list: Vec<ReportLink> = pairs.iter().map(|(t, u)| ReportLink::new(t.as_str(), u.as_str())).collect();

    let cat = Catalog::build_with_primary(&list, 3);
    assert_eq!(cat.primary().len(), 3);
    assert_eq!(cat.secondary().len(), 2);
    assert_eq!(cat.secondary()[0].title, "Report 3");

    // cutoff larger than the list: everything is primary
    let small = Catalog::build_with_primary(&list[..2], 3);
    assert_eq!(small.primary().len(), 2);
    assert!(small.secondary().is_empty());
}

#[test]
fn empty_link_list_builds_empty_catalog() {
    let cat = Catalog::build(&[]);
    assert!(cat.is_empty());
    assert!(cat.primary().is_empty());
    assert!(cat.all_by_category().is_empty());
    assert!(cat.get("report-0-anything").is_none());
}

#[test]
fn icons_follow_first_matching_keyword() {
    assert_eq!(icon_for_title("Most Runs"), "🏏");
    assert_eq!(icon_for_title("Most Wickets"), "⚾");
    // "average" is listed before "bowling"
    assert_eq!(icon_for_title("Bowling Averages"), "📊");
    assert_eq!(icon_for_title("Highest Partnerships"), "🤝");
    assert_eq!(icon_for_title("Captaincy Record"), "👑");
    assert_eq!(icon_for_title("MOST CATCHES"), "🧤");
    assert_eq!(icon_for_title("Toss Record"), "📊");
}

#[test]
fn categories_follow_first_matching_rule() {
    assert_eq!(category_for_title("Most Runs"), Category::Batting);
    assert_eq!(category_for_title("Bowling Averages"), Category::Bowling);
    assert_eq!(category_for_title("Most Catches"), Category::Fielding);
    assert_eq!(category_for_title("Highest Partnerships"), Category::Partnerships);
    assert_eq!(category_for_title("Captaincy Record"), Category::Player);
    assert_eq!(category_for_title("Highest Innings Totals"), Category::Team);
    assert_eq!(category_for_title("Top Performers"), Category::Milestones);
    assert_eq!(category_for_title("Groundsman Notes"), Category::Other);
}

#[test]
fn grouping_keeps_category_order_and_catalog_order() {
    let cat = Catalog::build_with_primary(
        &links(&[
            ("Most Wickets", "http://x/1"),
            ("Most Runs", "http://x/2"),
            ("Most Catches", "http://x/3"),
            ("Most Sixes", "http://x/4"),
            ("Best Economy Rate", "http://x/5"),
        ]),
        1,
    );

    let all = cat.all_by_category();
    let cats: Vec<Category> = all.keys().copied().collect();
    assert_eq!(cats, [Category::Batting, Category::Bowling, Category::Fielding]);

    let batting: Vec<&str> = all[&Category::Batting].iter().map(|r| r.title.as_str()).collect();
    assert_eq!(batting, ["Most Runs", "Most Sixes"]);

    // "Most Wickets" is primary, so only the economy report is left under bowling
    let sec = cat.secondary_by_category();
    let bowling: Vec<&str> = sec[&Category::Bowling].iter().map(|r| r.title.as_str()).collect();
    assert_eq!(bowling, ["Best Economy Rate"]);

    assert_eq!(cat.in_category(Category::Fielding).len(), 1);
    assert!(cat.in_category(Category::Team).is_empty());
}

#[test]
fn category_keys_round_trip_for_cli() {
    for c in Category::ALL {
        assert_eq!(Category::from_key(c.key()), Some(c));
    }
    assert_eq!(Category::from_key(" Bowling "), Some(Category::Bowling));
    assert_eq!(Category::from_key("cricket"), None);
    assert_eq!(Category::Player.label(), "Player Stats");
}

#[test]
fn bundled_list_builds_the_dashboard_catalog() {
    let links = ReportLinks::bundled().unwrap();
    assert_eq!(links.links.len(), 28);

    let cat = Catalog::from_links(&links);
    assert_eq!(cat.len(), 27);
    assert_eq!(cat.primary().len(), 13);
    assert_eq!(cat.secondary().len(), 14);

    assert_eq!(cat.all()[0].id, "report-0-most-runs");
    assert_eq!(cat.all()[9].title, "Most Fours");
    let last = cat.all().last().unwrap();
    assert_eq!(last.id, "report-26-all-time-most-appearances");

    let r = cat.get("report-3-bowling-averages").unwrap();
    assert_eq!(r.category, Category::Bowling);

    assert_eq!(catalog::global().len(), 27);
}

#[test]
fn link_list_parse_tolerates_missing_count() {
    let parsed = ReportLinks::parse(r#"{"links":[{"title":"Most Runs","url":"http://x/r"}]}"#).unwrap();
    assert_eq!(parsed.count, 0);
    assert_eq!(parsed.links.len(), 1);

    assert!(ReportLinks::parse("{\"links\": 3}").is_err());
}
