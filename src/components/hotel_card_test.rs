use super::*;

#[test]
fn contact_rows_skip_blank_values() {
    let hotel = Hotel {
        id: "1".to_owned(),
        email1: "desk@inn.test".to_owned(),
        mobile_phone_contact: " 555 ".to_owned(),
        email2: Some("  ".to_owned()),
        website: Some("https://inn.test".to_owned()),
        ..Hotel::default()
    };
    assert_eq!(
        contact_rows(&hotel),
        [
            ("Email", "desk@inn.test".to_owned()),
            ("Mobile", "555".to_owned()),
            ("Website", "https://inn.test".to_owned()),
        ]
    );
}

#[test]
fn contact_rows_empty_for_bare_hotel() {
    assert!(contact_rows(&Hotel::default()).is_empty());
}
