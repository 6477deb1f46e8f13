// Unit tests for logger module initialization logic
// Tests focus on idempotence and error handling

use crate::logger::initialize;

use std::path::PathBuf;

use log::LevelFilter;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Logger initialization can be reached from `main` and from
/// tests in the same process. If the second call errors, startup fails for no reason.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when trying to set a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path(), LevelFilter::Debug);
    let result2 = initialize(temp_dir.path(), LevelFilter::Debug);

    // THEN: Both return Ok (the second one only warns)
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}

/// **VALUE**: Verifies the logger never panics on an unusable directory.
///
/// **WHY THIS MATTERS**: A bad `BLOG_WEB_LOG_DIR` must surface as a startup error
/// instead of a panic with no context.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped.
#[test]
fn given_invalid_log_dir_when_initialize_called_then_does_not_panic() {
    // GIVEN: A path that cannot be a directory
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Calling initialize
    let result = initialize(&invalid_dir, LevelFilter::Info);

    // THEN: Either an error (first call in process) or Ok (already initialized)
    if let Err(err) = result {
        let err_string = format!("{err:?}");
        assert!(
            err_string.contains("Frontend"),
            "Error should be FrontendError::Frontend variant"
        );
    }
}
