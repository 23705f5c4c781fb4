use std::time::Duration;

use crate::error::StateError;
use crate::key::StateKey;
use crate::store::StateStore;

fn test_key(id: &str) -> StateKey {
    StateKey::new("test-ns", id)
}

/// Run the full state store conformance test suite.
///
/// Call this from your backend's test module with a fresh store instance.
///
/// # Errors
///
/// Returns an error if any conformance test fails.
pub async fn run_store_conformance_tests(store: &dyn StateStore) -> Result<(), StateError> {
    test_get_missing(store).await?;
    test_set_and_get(store).await?;
    test_overwrite(store).await?;
    test_delete(store).await?;
    test_ttl_set(store).await?;
    test_namespaces_are_isolated(store).await?;
    Ok(())
}

async fn test_get_missing(store: &dyn StateStore) -> Result<(), StateError> {
    let key = test_key("missing");
    let val = store.get(&key).await?;
    assert!(val.is_none(), "get on missing key should return None");
    Ok(())
}

async fn test_set_and_get(store: &dyn StateStore) -> Result<(), StateError> {
    let key = test_key("set-get");
    store.set(&key, "hello", None).await?;
    let val = store.get(&key).await?;
    assert_eq!(val.as_deref(), Some("hello"));
    Ok(())
}

async fn test_overwrite(store: &dyn StateStore) -> Result<(), StateError> {
    let key = test_key("overwrite");
    store.set(&key, "first", None).await?;
    store.set(&key, "second", None).await?;
    let val = store.get(&key).await?;
    assert_eq!(val.as_deref(), Some("second"), "last write should win");
    Ok(())
}

async fn test_delete(store: &dyn StateStore) -> Result<(), StateError> {
    let key = test_key("to-delete");
    store.set(&key, "bye", None).await?;
    let existed = store.delete(&key).await?;
    assert!(existed, "delete should return true for existing key");
    let val = store.get(&key).await?;
    assert!(val.is_none(), "get after delete should return None");

    let existed = store.delete(&key).await?;
    assert!(!existed, "delete on missing key should return false");
    Ok(())
}

async fn test_ttl_set(store: &dyn StateStore) -> Result<(), StateError> {
    let key = test_key("ttl-test");
    store
        .set(&key, "ephemeral", Some(Duration::from_secs(3600)))
        .await?;
    let val = store.get(&key).await?;
    assert_eq!(val.as_deref(), Some("ephemeral"));
    Ok(())
}

async fn test_namespaces_are_isolated(store: &dyn StateStore) -> Result<(), StateError> {
    let a = StateKey::new("ns-a", "shared-id");
    let b = StateKey::new("ns-b", "shared-id");
    store.set(&a, "from-a", None).await?;
    assert!(
        store.get(&b).await?.is_none(),
        "a key in another namespace should not be visible"
    );
    Ok(())
}
