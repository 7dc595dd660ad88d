use teamrank::app::location::{Location, Route};
use teamrank::util::date::DateRange;

fn default_range() -> DateRange {
    DateRange::new("28/07/2025", "25/08/2025")
}

#[test]
fn test_parse_root() {
    let location = Location::parse("/").unwrap();
    assert_eq!(location, Location::root());
}

#[test]
fn test_parse_member_with_query() {
    let location = Location::parse("/member/alice?from=01%2F08%2F2025&to=31%2F08%2F2025").unwrap();
    assert_eq!(location.route, Route::Member("alice".into()));
    assert_eq!(location.from.as_deref(), Some("01/08/2025"));
    assert_eq!(location.to.as_deref(), Some("31/08/2025"));
}

#[test]
fn test_parse_ignores_unrelated_params() {
    let location = Location::parse("/?tab=reviews&from=01%2F08%2F2025").unwrap();
    assert_eq!(location.route, Route::Dashboard);
    assert_eq!(location.from.as_deref(), Some("01/08/2025"));
    assert!(location.to.is_none());
}

#[test]
fn test_parse_unknown_route_fails() {
    assert!(Location::parse("/settings").is_err());
    assert!(Location::parse("/member").is_err());
}

#[test]
fn test_display_encodes_query() {
    let location = Location::member("alice").with_date_range(&default_range());
    assert_eq!(
        location.to_string(),
        "/member/alice?from=28%2F07%2F2025&to=25%2F08%2F2025"
    );
}

#[test]
fn test_display_without_query() {
    assert_eq!(Location::root().to_string(), "/");
    assert_eq!(Location::member("bob").to_string(), "/member/bob");
}

#[test]
fn test_display_parse_round_trip() {
    let location = Location::member("FOXCODE-Kiro").with_date_range(&default_range());
    assert_eq!(Location::parse(&location.to_string()).unwrap(), location);
}

#[test]
fn test_missing_query_uses_default_range() {
    assert_eq!(Location::root().date_range_or(&default_range()), default_range());
}

#[test]
fn test_query_overrides_default_range() {
    let location = Location::parse("/?from=01%2F08%2F2025&to=15%2F08%2F2025").unwrap();
    assert_eq!(
        location.date_range_or(&default_range()),
        DateRange::new("01/08/2025", "15/08/2025")
    );
}

#[test]
fn test_malformed_query_value_falls_back_per_end() {
    let location = Location::parse("/?from=garbage&to=15%2F08%2F2025").unwrap();
    assert_eq!(
        location.date_range_or(&default_range()),
        DateRange::new("28/07/2025", "15/08/2025")
    );
}

#[test]
fn test_with_date_range_keeps_route() {
    let location = Location::member("alice");
    let replaced = location.with_date_range(&DateRange::new("01/08/2025", "02/08/2025"));
    assert_eq!(replaced.route, Route::Member("alice".into()));
    assert_eq!(replaced.from.as_deref(), Some("01/08/2025"));
}
