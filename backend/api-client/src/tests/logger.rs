use crate::logger::initialize;

#[test]
fn given_log_dir_when_initialized_twice_then_file_exists_and_second_call_is_noop() {
    let dir = tempfile::tempdir().unwrap();

    initialize(dir.path()).unwrap();
    initialize(dir.path()).unwrap();

    assert!(dir.path().join("api-client.log").exists());
}
