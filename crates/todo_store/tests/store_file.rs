use todo_store::{
    JsonFileTodoRepository, StoreSnapshot, Todo, TodoRepository, TodoService, TodoStore,
};

#[test]
fn persisted_file_is_pretty_printed_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = TodoStore::open(dir.path().join("db"));
    let todo = store.create("write docs").unwrap();

    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with("{\n  \"todos\": [\n    {\n      \"id\": "));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["todos"][0]["id"], todo.id.as_str());
    assert_eq!(value["todos"][0]["date"], todo.date.as_str());
    assert_eq!(value["todos"][0]["content"], "write docs");
    assert_eq!(value["todos"][0]["done"], false);
}

#[test]
fn malformed_file_reads_as_empty_and_is_not_modified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    std::fs::write(&path, "{ definitely not json").unwrap();

    let repo = JsonFileTodoRepository::new(&path);
    assert!(matches!(repo.snapshot().unwrap(), StoreSnapshot::Malformed(_)));

    let store = TodoService::new(&repo);
    assert!(store.read().unwrap().is_empty());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{ definitely not json"
    );
}

#[test]
fn create_on_malformed_file_replaces_it_with_valid_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let repo = JsonFileTodoRepository::new(&path);
    let store = TodoService::new(&repo);
    let todo = store.create("recovered").unwrap();

    assert_eq!(repo.snapshot().unwrap(), StoreSnapshot::Loaded(vec![todo]));
}

#[test]
fn document_without_todos_field_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    std::fs::write(&path, "{}").unwrap();

    let repo = JsonFileTodoRepository::new(&path);
    assert_eq!(repo.snapshot().unwrap(), StoreSnapshot::Empty);
    assert!(TodoService::new(&repo).read().unwrap().is_empty());
}

#[test]
fn externally_written_ids_are_addressable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    std::fs::write(
        &path,
        r#"{"todos": [{"id": "legacy-1", "date": "2021-05-01T12:00:00.000Z", "content": "old", "done": false}]}"#,
    )
    .unwrap();

    let store = TodoStore::open(&path);
    let toggled = store.update_status_by_id("legacy-1").unwrap();
    assert!(toggled.done);
    assert_eq!(
        store.read().unwrap(),
        vec![Todo {
            id: "legacy-1".to_string(),
            date: "2021-05-01T12:00:00.000Z".to_string(),
            content: "old".to_string(),
            done: true,
        }]
    );
}

#[test]
fn unwritable_path_propagates_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = TodoStore::open(dir.path().join("missing-dir").join("db"));

    let err = store.create("nowhere").unwrap_err();
    assert!(matches!(err, todo_store::RepoError::Db(todo_store::DbError::Io { .. })));
}

#[test]
fn record_missing_done_flag_survives_later_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    std::fs::write(
        &path,
        r#"{"todos": [
            {"id": "a", "date": "2021-05-01T12:00:00.000Z", "content": "complete", "done": true},
            {"id": "b", "date": "2021-05-02T12:00:00.000Z", "content": "no flag"}
        ]}"#,
    )
    .unwrap();

    let store = TodoStore::open(&path);
    let loaded = store.read().unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(!loaded[1].done);

    let created = store.create("new").unwrap();
    let ids: Vec<String> = store
        .read()
        .unwrap()
        .into_iter()
        .map(|todo| todo.id)
        .collect();
    assert_eq!(ids, vec!["a".to_string(), "b".to_string(), created.id]);
}

#[test]
fn top_level_array_is_not_loaded_as_a_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    std::fs::write(
        &path,
        r#"[[{"id": "x", "date": "2021-05-01T12:00:00.000Z", "content": "c", "done": false}]]"#,
    )
    .unwrap();

    let repo = JsonFileTodoRepository::new(&path);
    assert!(matches!(repo.snapshot().unwrap(), StoreSnapshot::Malformed(_)));
    assert!(TodoService::new(&repo).read().unwrap().is_empty());
}
