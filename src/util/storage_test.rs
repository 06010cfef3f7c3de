use session::{Session, SessionStore, Token};

use super::*;

#[cfg(not(feature = "csr"))]
#[test]
fn native_storage_reads_nothing() {
    assert_eq!(BrowserStorage.get("token").unwrap(), None);
    assert_eq!(SessionStore::new(BrowserStorage).load(), Session::anonymous());
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_storage_rejects_writes() {
    let store = SessionStore::new(BrowserStorage);
    let session = Session::authenticated(Token::new("t").unwrap(), None, None);
    assert!(matches!(store.save(&session), Err(StorageError::Unavailable)));
    assert!(matches!(BrowserStorage.remove("token"), Err(StorageError::Unavailable)));
}
