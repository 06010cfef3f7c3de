use super::*;

fn complete() -> Registration {
    let mut form = Registration::default();
    for field in Field::ALL {
        *field.value_mut(&mut form) = format!(" {} ", field.label());
    }
    form
}

#[test]
fn every_field_maps_to_its_own_slot() {
    let form = complete();
    for field in Field::ALL {
        assert_eq!(field.value(&form).trim(), field.label());
    }
}

#[test]
fn only_website_is_optional() {
    let optional: Vec<_> = Field::ALL.into_iter().filter(|f| !f.required()).collect();
    assert_eq!(optional, [Field::Website]);
}

#[test]
fn validation_trims_everything_but_password() {
    let clean = validate_registration(&complete()).unwrap();
    assert_eq!(clean.company_name, "Company name");
    assert_eq!(clean.password, " Password ");
}

#[test]
fn validation_accepts_blank_website() {
    let mut form = complete();
    form.website = "   ".to_owned();
    assert_eq!(validate_registration(&form).unwrap().website, "");
}

#[test]
fn validation_names_first_missing_field() {
    let mut form = complete();
    form.city.clear();
    form.email = "  ".to_owned();
    assert_eq!(validate_registration(&form), Err("City is required".to_owned()));
}

#[test]
fn error_message_prefers_server_text() {
    assert_eq!(registration_error_message(&ApiError::from_status(400, r#"{"message":"Username taken"}"#)), "Username taken");
    assert_eq!(registration_error_message(&ApiError::Network("down".to_owned())), REGISTRATION_FAILED);
}

#[test]
fn input_types_follow_field() {
    assert_eq!(Field::Email.input_type(), "email");
    assert_eq!(Field::Password.input_type(), "password");
    assert_eq!(Field::City.input_type(), "text");
}
