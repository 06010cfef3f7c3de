use super::*;

#[test]
fn not_found_is_reported_by_name() {
    assert_eq!(details_error_message(&ApiError::NotFound), NOT_FOUND);
}

#[test]
fn other_failures_are_generic() {
    for err in [ApiError::from_status(500, "boom"), ApiError::Network("offline".to_owned()), ApiError::Decode("eof".to_owned())] {
        assert_eq!(details_error_message(&err), LOAD_FAILED);
    }
}
