use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_set_get_remove_round_trip() {
    let repo = SqliteRepository::open("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("open");

    assert_eq!(repo.get_item("access_token").await.unwrap(), None);

    repo.set_item("access_token", "T1").await.unwrap();
    repo.set_item("user", r#"{"id":1,"name":"A"}"#).await.unwrap();
    assert_eq!(
        repo.get_item("access_token").await.unwrap().as_deref(),
        Some("T1")
    );

    repo.set_item("access_token", "T2").await.unwrap();
    assert_eq!(
        repo.get_item("access_token").await.unwrap().as_deref(),
        Some("T2")
    );

    repo.remove_item("access_token").await.unwrap();
    repo.remove_item("access_token").await.unwrap();
    assert_eq!(repo.get_item("access_token").await.unwrap(), None);
    assert!(repo.get_item("user").await.unwrap().is_some());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::open("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("open");
    repo.migrate().await.expect("second migrate");

    repo.set_item("refresh_token", "R1").await.unwrap();
    assert_eq!(
        repo.get_item("refresh_token").await.unwrap().as_deref(),
        Some("R1")
    );
}

#[tokio::test]
async fn plain_memory_url_keeps_items_between_calls() {
    let storage = Storage::sqlite("sqlite::memory:").await.expect("open");

    storage.items.set_item("access_token", "T1").await.unwrap();
    storage.items.set_item("user", "{}").await.unwrap();

    assert_eq!(
        storage.items.get_item("access_token").await.unwrap().as_deref(),
        Some("T1")
    );
    assert!(storage.items.get_item("user").await.unwrap().is_some());
}

#[tokio::test]
async fn values_survive_reopening_the_database() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("reopen.sqlite3");
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    let url = format!("sqlite://{}", path.display());

    {
        let storage = Storage::sqlite(&url).await.expect("open");
        storage.items.set_item("access_token", "T1").await.unwrap();
    }

    let reopened = Storage::sqlite(&url).await.expect("reopen");
    assert_eq!(
        reopened.items.get_item("access_token").await.unwrap().as_deref(),
        Some("T1")
    );
}

#[tokio::test]
async fn invalid_url_is_an_init_error() {
    assert!(Storage::sqlite("postgres://nope").await.is_err());
}
