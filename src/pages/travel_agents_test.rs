use super::*;

fn agent() -> UserProfile {
    UserProfile {
        email: "Sales@Sunway.test".to_owned(),
        company_name: "Sunway Travel".to_owned(),
        city: Some("Dayton".to_owned()),
        state: Some("OH".to_owned()),
        ..UserProfile::named("sunway")
    }
}

#[test]
fn search_covers_identity_and_location() {
    let user = agent();
    for term in ["SUNWAY", "sales@", "travel", "dayton", "oh", "  "] {
        assert!(matches_search(&user, term), "term {term:?}");
    }
    assert!(!matches_search(&user, "phoenix"));
}

#[test]
fn search_ignores_missing_fields() {
    let user = UserProfile::named("bare");
    assert!(matches_search(&user, "bar"));
    assert!(!matches_search(&user, "ohio"));
}

#[test]
fn location_text_joins_known_parts() {
    assert_eq!(location_text(&agent()), "Dayton, OH");
    let city_only = UserProfile { city: Some("Dayton".to_owned()), ..UserProfile::default() };
    assert_eq!(location_text(&city_only), "Dayton");
    assert_eq!(location_text(&UserProfile::default()), "-");
}

#[test]
fn status_and_dash_fallbacks() {
    assert_eq!(status_label(&agent()), "Pending");
    assert_eq!(status_label(&UserProfile { approved: true, ..agent() }), "Approved");
    assert_eq!(or_dash(None), "-");
    assert_eq!(or_dash(Some("  ")), "-");
    assert_eq!(or_dash(Some("x")), "x");
}
