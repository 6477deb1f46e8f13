use crate::BearerToken;

/// **VALUE**: Verifies tokens never appear in Debug or Display output.
///
/// **WHY THIS MATTERS**: Sessions get logged (`debug!("{session:?}")`) while diagnosing
/// authorization failures. A leaked token in a log file is a credential leak.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual Debug impl with a derive.
#[test]
fn given_token_when_formatted_then_value_is_redacted() {
    // GIVEN: A token with a recognisable value
    let token = BearerToken::parse("super-secret-jwt").unwrap();

    // WHEN: Formatting with Debug and Display
    let debug = format!("{token:?}");
    let display = format!("{token}");

    // THEN: Neither contains the secret
    assert!(!debug.contains("super-secret-jwt"));
    assert!(!display.contains("super-secret-jwt"));
    assert!(debug.contains("REDACTED"));
}

/// **VALUE**: Verifies blank input never becomes a token.
///
/// **WHY THIS MATTERS**: Sending `Authorization: Bearer ` with an empty value was a known
/// inconsistency in older admin pages. A blank credential must be impossible to build.
///
/// **BUG THIS CATCHES**: Would catch `parse` accepting empty or whitespace-only strings.
#[test]
fn given_blank_input_when_parsed_then_returns_none() {
    assert!(BearerToken::parse("").is_none());
    assert!(BearerToken::parse("   \t").is_none());
}

#[test]
fn given_padded_input_when_parsed_then_value_is_trimmed() {
    let token = BearerToken::parse("  abc.def  ").unwrap();
    assert_eq!(token.as_str(), "abc.def");
    assert_eq!(token.len(), 7);
}

/// **VALUE**: Verifies serialization is refused.
///
/// **WHY THIS MATTERS**: View state is sometimes dumped as JSON for debugging; a token
/// nested inside must make that fail loudly instead of leaking.
///
/// **BUG THIS CATCHES**: Would catch a derived `Serialize` replacing the refusing impl.
#[test]
fn given_token_when_serialized_then_returns_error() {
    let token = BearerToken::parse("abc").unwrap();
    let result = serde_json::to_string(&token);
    assert!(result.is_err());
}
