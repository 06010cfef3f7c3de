use super::*;

#[test]
fn hotel_decodes_backend_record() {
    let raw = r#"{
        "id": 3,
        "hotelName": "Lakeside Inn",
        "email1": "front@lakeside.test",
        "email2": null,
        "address": "9 Shore Rd",
        "mobilePhoneContact": "555-0199",
        "landlineContact": "555-0100",
        "concerningPersonName": "Pat",
        "preferred": true,
        "city": "Sandusky",
        "state": "OH",
        "website": "https://lakeside.test"
    }"#;
    let hotel: Hotel = serde_json::from_str(raw).unwrap();
    assert_eq!(hotel.id, "3");
    assert_eq!(hotel.hotel_name, "Lakeside Inn");
    assert_eq!(hotel.email2, None);
    assert_eq!(hotel.landline_contact.as_deref(), Some("555-0100"));
    assert!(hotel.preferred);
}

#[test]
fn hotel_tolerates_null_and_missing_strings() {
    let hotel: Hotel = serde_json::from_str(r#"{"id":"h-1","hotelName":null}"#).unwrap();
    assert_eq!(hotel.id, "h-1");
    assert_eq!(hotel.hotel_name, "");
    assert_eq!(hotel.city, "");
    assert!(!hotel.preferred);
}

#[test]
fn hotel_without_id_is_rejected() {
    assert!(serde_json::from_str::<Hotel>(r#"{"hotelName":"x"}"#).is_err());
}

#[test]
fn hotel_location_skips_blank_parts() {
    let mut hotel = Hotel { city: "Dayton".to_owned(), state: "OH".to_owned(), ..Hotel::default() };
    assert_eq!(hotel.location(), "Dayton, OH");
    hotel.state.clear();
    assert_eq!(hotel.location(), "Dayton");
    hotel.city.clear();
    assert_eq!(hotel.location(), "");
}

#[test]
fn new_hotel_serializes_camel_case_with_nulls() {
    let hotel = NewHotel {
        hotel_name: "A".to_owned(),
        email1: "a@b.test".to_owned(),
        mobile_phone_contact: "1".to_owned(),
        ..NewHotel::default()
    };
    let json = serde_json::to_value(&hotel).unwrap();
    assert_eq!(json["hotelName"], "A");
    assert_eq!(json["mobilePhoneContact"], "1");
    assert!(json["email2"].is_null());
    assert!(json["website"].is_null());
    assert_eq!(json["preferred"], false);
}

#[test]
fn credentials_use_user_name_key() {
    let creds = Credentials { user_name: "alice".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&creds).unwrap(), serde_json::json!({ "userName": "alice", "password": "pw" }));
}

#[test]
fn login_response_with_missing_parts() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
    assert_eq!(resp.token.as_deref(), Some("t"));
    assert!(resp.user.is_none());
}

#[test]
fn user_check_decodes_role() {
    let check: UserCheck = serde_json::from_str(r#"{"exists":true,"approved":false,"role":"ADMIN"}"#).unwrap();
    assert!(check.exists);
    assert!(!check.approved);
    assert_eq!(check.role, Some(Role::Admin));
}

#[test]
fn upload_summary_counts_hotels() {
    let summary: CsvUploadSummary = serde_json::from_str(r#"{"hotels":[{"id":1},{"id":2}]}"#).unwrap();
    assert_eq!(summary.hotels.len(), 2);
    let empty: CsvUploadSummary = serde_json::from_str("{}").unwrap();
    assert!(empty.hotels.is_empty());
}

#[test]
fn registration_serializes_all_fields() {
    let reg = Registration { user_name: "agent".to_owned(), ..Registration::default() };
    let json = serde_json::to_value(&reg).unwrap();
    for key in [
        "companyName",
        "address",
        "contactNumber",
        "mobileNumber",
        "email",
        "userName",
        "password",
        "concerningPersonName",
        "city",
        "state",
        "website",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}
