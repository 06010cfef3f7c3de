use super::*;

fn filled() -> HotelDraft {
    HotelDraft {
        hotel_name: " Grand Plaza ".to_owned(),
        email1: "desk@plaza.test".to_owned(),
        address: "1 Main St".to_owned(),
        mobile_phone_contact: "555-0100".to_owned(),
        concerning_person_name: "Lee".to_owned(),
        city: "Columbus".to_owned(),
        state: "OH".to_owned(),
        ..HotelDraft::default()
    }
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn empty_draft_reports_hotel_name_first() {
    assert_eq!(HotelDraft::default().validate(), Err("Hotel name is required".to_owned()));
}

#[test]
fn required_fields_are_checked_in_order() {
    let mut draft = filled();
    draft.city = "  ".to_owned();
    draft.address.clear();
    assert_eq!(draft.validate(), Err("Address is required".to_owned()));
    draft.address = "1 Main St".to_owned();
    assert_eq!(draft.validate(), Err("City is required".to_owned()));
}

#[test]
fn valid_draft_is_trimmed_and_blank_optionals_are_null() {
    let mut draft = filled();
    draft.email2 = "   ".to_owned();
    draft.landline_contact = " 555-0101 ".to_owned();
    draft.preferred = true;
    let hotel = draft.validate().unwrap();
    assert_eq!(hotel.hotel_name, "Grand Plaza");
    assert_eq!(hotel.email2, None);
    assert_eq!(hotel.landline_contact.as_deref(), Some("555-0101"));
    assert_eq!(hotel.website, None);
    assert!(hotel.preferred);
}

#[test]
fn website_needs_http_scheme() {
    let mut draft = filled();
    draft.website = "plaza.test".to_owned();
    assert_eq!(draft.validate(), Err(INVALID_WEBSITE.to_owned()));
    draft.website = " https://plaza.test ".to_owned();
    assert_eq!(draft.validate().unwrap().website.as_deref(), Some("https://plaza.test"));
    draft.website = "http://plaza.test".to_owned();
    assert!(draft.validate().is_ok());
}

#[test]
fn field_accessors_cover_every_field() {
    let mut draft = HotelDraft::default();
    for field in HotelField::ALL {
        *draft.value_mut(field) = field.label().to_owned();
    }
    for field in HotelField::ALL {
        assert_eq!(draft.value(field), field.label());
    }
    assert_eq!(HotelField::ALL.into_iter().filter(|f| f.required()).count(), HotelField::REQUIRED.len());
}

// =============================================================
// Save errors
// =============================================================

#[test]
fn duplicate_conflicts_get_a_hint() {
    let msg = save_error_message(&ApiError::from_status(400, r#"{"message":"Hotel already exists"}"#)).unwrap();
    assert!(msg.starts_with("Validation Error: Hotel already exists."));
    assert!(msg.contains("Please use different values"));
    let plain = save_error_message(&ApiError::from_status(400, "email invalid")).unwrap();
    assert_eq!(plain, "Validation Error: email invalid");
}

#[test]
fn other_save_errors() {
    assert_eq!(save_error_message(&ApiError::Network("x".to_owned())).as_deref(), Some(NETWORK_ERROR));
    assert_eq!(save_error_message(&ApiError::from_status(500, "db down")).as_deref(), Some("Server Error: db down"));
    assert_eq!(save_error_message(&ApiError::from_status(401, "")), None);
    assert_eq!(save_error_message(&ApiError::from_status(403, "")), None);
}

#[test]
fn duplicate_detection_keywords() {
    assert!(is_duplicate_message("duplicate key value"));
    assert!(is_duplicate_message("violates unique constraint"));
    assert!(!is_duplicate_message("bad phone"));
}

// =============================================================
// CSV
// =============================================================

#[test]
fn csv_accepted_by_type_or_extension() {
    assert!(is_csv_file("hotels.csv", ""));
    assert!(is_csv_file("HOTELS.CSV", "application/octet-stream"));
    assert!(is_csv_file("export", "text/csv"));
    assert!(is_csv_file("export.txt", "text/plain"));
    assert!(is_csv_file("export.xls", "application/vnd.ms-excel"));
    assert!(!is_csv_file("photo.png", "image/png"));
}

#[test]
fn csv_messages() {
    assert_eq!(invalid_csv_message("image/png"), "Please select a valid CSV file. Selected: image/png");
    assert_eq!(upload_success_message(3), "Successfully uploaded 3 hotels");
}

#[test]
fn template_has_header_and_example_with_matching_columns() {
    let mut lines = HOTEL_CSV_TEMPLATE.lines();
    let header = lines.next().unwrap();
    let example = lines.next().unwrap();
    assert!(lines.next().is_none());
    assert!(header.starts_with("hotelName,email1,"));
    assert_eq!(header.split(',').count(), 11);
    assert_eq!(example.split(',').count(), 11);
}
