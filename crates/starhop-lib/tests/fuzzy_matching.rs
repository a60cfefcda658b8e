mod common;

use common::fixture_navigator;

#[test]
fn fuzzy_matches_returns_similar_names() {
    let navigator = fixture_navigator();
    let catalog = navigator.catalog();

    let exact = catalog.fuzzy_matches("Y:170N", 3);
    assert!(exact.contains(&"Y:170N".to_string()));

    // Typo: O instead of 0
    let typo = catalog.fuzzy_matches("Y:17ON", 3);
    assert!(typo.contains(&"Y:170N".to_string()), "should suggest Y:170N for Y:17ON");

    let partial = catalog.fuzzy_matches("AlphaTst", 3);
    assert!(partial.contains(&"AlphaTest".to_string()), "should suggest AlphaTest");
}

#[test]
fn fuzzy_matches_respects_limit() {
    let navigator = fixture_navigator();
    let matches = navigator.catalog().fuzzy_matches("Test", 1);
    assert!(matches.len() <= 1, "should respect limit of 1");
}

#[test]
fn unknown_system_includes_suggestions() {
    let navigator = fixture_navigator();
    let err = navigator
        .calculate_route("Y:17ON", "Brana", 10.0)
        .expect_err("should fail with unknown system");

    let message = err.to_string();
    assert!(message.contains("unknown system name"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Y:170N"));
}
