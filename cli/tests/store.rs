use pretty_assertions::assert_eq;
use roundstats::store::StoreError;
use roundstats::{FileStore, LogSource};

#[test]
fn lists_matching_logs_sorted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("L0102001.log"), "").unwrap();
    std::fs::write(dir.path().join("L0102000.log"), "").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "").unwrap();
    std::fs::create_dir(dir.path().join("old.log")).unwrap();

    let store = FileStore::new(dir.path());

    assert_eq!(
        vec!["L0102000.log".to_owned(), "L0102001.log".to_owned()],
        store.list(".log").unwrap()
    );
    assert_eq!(vec!["notes.txt".to_owned()], store.duplicate().list(".txt").unwrap());
}

#[test]
fn loads_lines() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("L0102000.log"),
        "L 01/02/2015 - 20:10:15: World triggered \"Round_Start\"\r\nL 01/02/2015 - 20:12:30: Log file closed\n",
    )
    .unwrap();

    let store = FileStore::new(dir.path());
    let lines: Vec<String> = store.load("L0102000.log").unwrap().collect();

    assert_eq!(
        vec![
            "L 01/02/2015 - 20:10:15: World triggered \"Round_Start\"".to_owned(),
            "L 01/02/2015 - 20:12:30: Log file closed".to_owned(),
        ],
        lines
    );
}

#[test]
fn rejects_paths() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    assert!(matches!(
        store.load("../secret.log"),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(store.load("missing.log"), Err(StoreError::Read { .. })));
}

#[test]
fn missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("logs"));

    assert!(matches!(store.list(".log"), Err(StoreError::List { .. })));
}
