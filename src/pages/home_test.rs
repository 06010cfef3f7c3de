use session::Token;

use super::*;

#[test]
fn view_all_goes_to_login_for_guests() {
    assert_eq!(view_all_path(&Session::anonymous()), LOGIN_PATH);
    let signed_in = Session::authenticated(Token::new("t").unwrap(), None, None);
    assert_eq!(view_all_path(&signed_in), "/hotels");
}

#[test]
fn blank_query_means_no_search() {
    assert_eq!(search_term(""), None);
    assert_eq!(search_term("   "), None);
    assert_eq!(search_term(" plaza "), Some("plaza"));
}
