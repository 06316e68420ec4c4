use lazytodo_core::{
    JsonFileRepository, PositionError, ServiceError, TodoService,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn service_in(dir: &tempfile::TempDir) -> (TodoService<JsonFileRepository>, PathBuf) {
    let path = dir.path().join("lazytodo.json");
    (TodoService::new(JsonFileRepository::new(&path)), path)
}

#[test]
fn list_initializes_storage_on_first_use() {
    let dir = tempdir().expect("temp dir should be created");
    let (service, path) = service_in(&dir);

    let list = service.list().expect("first list should initialize");
    assert!(list.is_empty());
    assert!(path.exists());
}

#[test]
fn add_returns_the_updated_list_and_persists_it() {
    let dir = tempdir().expect("temp dir should be created");
    let (service, _) = service_in(&dir);

    let list = service.add_todo("buy milk").expect("add should succeed");
    assert_eq!(list.len(), 1);

    // A fresh service sees the persisted item: each call is an independent
    // load-mutate-save cycle, nothing is cached in memory.
    let (second_service, _) = service_in(&dir);
    let reloaded = second_service.list().expect("list should succeed");
    assert_eq!(reloaded, list);
}

#[test]
fn mark_done_persists_the_done_flag() {
    let dir = tempdir().expect("temp dir should be created");
    let (service, path) = service_in(&dir);

    service.add_todo("buy milk").expect("add should succeed");
    let list = service.mark_done(1).expect("mark should succeed");
    assert_eq!(list.pending().count(), 0);

    let contents = fs::read_to_string(&path).expect("storage file should exist");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("document should parse");
    assert_eq!(value["todos"][0]["done"], true);
}

#[test]
fn out_of_range_mark_leaves_the_document_untouched() {
    let dir = tempdir().expect("temp dir should be created");
    let (service, path) = service_in(&dir);
    service.add_todo("buy milk").expect("add should succeed");

    let before = fs::read(&path).expect("storage file should exist");
    let err = service
        .mark_done(9)
        .expect_err("position 9 must be rejected");
    assert!(matches!(
        err,
        ServiceError::Position(PositionError { given: 9, len: 1 })
    ));

    let after = fs::read(&path).expect("storage file should exist");
    assert_eq!(before, after);
}

#[test]
fn re_marking_a_done_item_succeeds_silently() {
    let dir = tempdir().expect("temp dir should be created");
    let (service, _) = service_in(&dir);
    service.add_todo("buy milk").expect("add should succeed");

    service.mark_done(1).expect("first mark should succeed");
    let list = service.mark_done(1).expect("re-mark should succeed");

    let (_, item) = list.entries().next().expect("item should exist");
    assert!(item.done);
}

#[test]
fn repository_failures_surface_as_repo_errors() {
    let dir = tempdir().expect("temp dir should be created");
    let service = TodoService::new(JsonFileRepository::new(
        dir.path().join("missing").join("lazytodo.json"),
    ));

    let err = service.list().expect_err("inaccessible storage must fail");
    assert!(matches!(err, ServiceError::Repo(_)));
}
