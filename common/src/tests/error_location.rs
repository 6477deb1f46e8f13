use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that the captured location points at this test file.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries an `ErrorLocation`.
/// If capture breaks, log lines about failed API calls stop telling us where they came from.
///
/// **BUG THIS CATCHES**: Would catch if `ErrorLocation::from()` stopped copying the
/// file, line or column out of the panic location.
#[test]
fn given_caller_location_when_error_location_created_then_captures_this_file() {
    // GIVEN / WHEN: Capturing the current location
    let location = ErrorLocation::from(Location::caller());

    // THEN: The file is this test module and line/column are populated
    assert!(location.file.contains("error_location.rs"));
    assert!(location.line > 0, "Line should be captured");
    assert!(location.column > 0, "Column should be captured");
}

/// **VALUE**: Verifies the bracketed `[file:line:column]` display format.
///
/// **WHY THIS MATTERS**: Error messages append the location verbatim. A format change
/// would make every logged API failure harder to grep.
///
/// **BUG THIS CATCHES**: Would catch if the Display impl dropped the brackets or a field.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_triplet() {
    // GIVEN: A known location
    let location = ErrorLocation {
        file: "src/api_client/mod.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting
    let formatted = location.to_string();

    // THEN: Exact bracketed format
    assert_eq!(formatted, "[src/api_client/mod.rs:42:7]");
}

/// **VALUE**: Verifies `#[track_caller]` propagation through helper constructors.
///
/// **WHY THIS MATTERS**: Error constructors like `ApiClientError::missing_token()` rely on
/// `#[track_caller]` so the reported line is the call site, not the constructor.
///
/// **BUG THIS CATCHES**: Would catch if location capture stopped honouring `#[track_caller]`.
#[test]
fn given_two_call_sites_when_capturing_through_helper_then_lines_differ() {
    // GIVEN: A helper that captures the caller
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing from consecutive lines
    let first = capture_location();
    let second = capture_location();

    // THEN: Same file, consecutive lines
    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line);
}
