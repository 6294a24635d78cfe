use super::*;

fn directory() -> Vec<LocationEntry> {
    let mut bakery = LocationEntry::new("1", "Bread & Butter Bakery");
    bakery.category = Some("Bakery".to_string());
    bakery.address = Some("12 High Street, Reigate".to_string());
    bakery.tags = vec!["bread".to_string(), "cakes".to_string()];

    let mut veg = LocationEntry::new("2", "Veg Box Co");
    veg.category = Some("Grocer".to_string());
    veg.address = Some("Unit 4, Redhill Farm".to_string());

    let mut cafe = LocationEntry::new("3", "Bell Street Coffee");
    cafe.tags = vec!["coffee".to_string(), "bread".to_string()];
    cafe.address = Some("40 Bell Street, Reigate".to_string());

    vec![bakery, veg, cafe]
}

fn ids(entries: &[&LocationEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn query_is_trimmed_and_lowercased() {
    let query = SearchQuery::new("  Bread  BUTTER ");
    assert_eq!(query.as_str(), "bread  butter");
    assert_eq!(query.terms(), ["bread".to_string(), "butter".to_string()]);
}

#[test]
fn empty_query_returns_everything_in_order() {
    let entries = directory();
    let result = filter(&entries, &SearchQuery::new(""));
    assert_eq!(ids(&result), ["1", "2", "3"]);

    let whitespace = filter(&entries, &SearchQuery::new("   "));
    assert_eq!(ids(&whitespace), ["1", "2", "3"]);
}

#[test]
fn matches_name_substring() {
    let entries = directory();
    let result = filter(&entries, &SearchQuery::from("veg"));
    assert_eq!(ids(&result), ["2"]);
}

#[test]
fn matches_tags_category_and_address() {
    let entries = directory();
    assert_eq!(ids(&filter(&entries, &"coffee".into())), ["3"]);
    assert_eq!(ids(&filter(&entries, &"grocer".into())), ["2"]);
    assert_eq!(ids(&filter(&entries, &"redhill".into())), ["2"]);
}

#[test]
fn result_preserves_store_order() {
    let entries = directory();
    let result = filter(&entries, &"bread".into());
    assert_eq!(ids(&result), ["1", "3"]);
}

#[test]
fn every_term_must_match_some_field() {
    let entries = directory();
    // "bread" is a tag on both, "bell" only appears on the coffee shop.
    assert_eq!(ids(&filter(&entries, &"bread bell".into())), ["3"]);
    assert!(filter(&entries, &"bread redhill".into()).is_empty());
}

#[test]
fn terms_can_match_different_fields() {
    let entries = directory();
    assert_eq!(ids(&filter(&entries, &"bakery high".into())), ["1"]);
}

#[test]
fn case_and_whitespace_do_not_matter() {
    let entries = directory();
    assert_eq!(
        filter(&entries, &" Bread ".into()),
        filter(&entries, &"bread".into())
    );
}

#[test]
fn filtering_twice_changes_nothing() {
    let entries = directory();
    let query = SearchQuery::new("reigate");
    let once = filter(&entries, &query);
    let twice = filter(once.iter().copied(), &query);
    assert_eq!(once, twice);
}

#[test]
fn no_match_yields_empty() {
    let entries = directory();
    assert!(filter(&entries, &"plumber".into()).is_empty());
}
