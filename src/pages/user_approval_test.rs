use super::*;

fn with_id(id: &str) -> UserProfile {
    UserProfile { id: Some(id.to_owned()), ..UserProfile::named(format!("agent-{id}")) }
}

#[test]
fn summary_for_empty_and_pending() {
    assert_eq!(pending_summary(0), "No pending approval requests at this time.");
    assert_eq!(pending_summary(2), "You have 2 user registration(s) pending approval.");
}

#[test]
fn remove_user_by_id() {
    let mut users = vec![with_id("1"), with_id("2"), UserProfile::named("no-id")];
    remove_user(&mut users, "1");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id.as_deref(), Some("2"));
    remove_user(&mut users, "missing");
    assert_eq!(users.len(), 2);
}

#[test]
fn rows_without_id_get_distinct_keys() {
    let keys = [row_key(&UserProfile::named("a")), row_key(&UserProfile::named("b")), row_key(&with_id("1"))];
    assert_ne!(keys[0], keys[1]);
    assert_eq!(keys[2], (Some("1".to_owned()), "agent-1".to_owned()));
}
