//! Tests for credential resolution.

use taleweaver_models::{ApiToken, TOKEN_ENV_VAR};

#[test]
fn test_missing_token_is_config_error() {
    let err = ApiToken::resolve(None).unwrap_err();

    assert!(err.message.contains(TOKEN_ENV_VAR));
    assert!(err.message.contains("not set"));
}

#[test]
fn test_blank_token_is_config_error() {
    let err = ApiToken::resolve(Some("  ".into())).unwrap_err();

    assert!(err.message.contains("empty"));
}

#[test]
fn test_token_is_trimmed() {
    let token = ApiToken::resolve(Some(" hf_x \n".into())).unwrap();

    assert_eq!(token.expose(), "hf_x");
}

#[test]
fn test_debug_hides_secret() {
    let token = ApiToken::resolve(Some("hf_secret".into())).unwrap();

    assert!(!format!("{:?}", token).contains("hf_secret"));
}
