use trove_core::errors::{ErrorInfo, TroveError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("field", "radius")
        .with_context("value", "-1")
}

#[test]
fn shape_error_surface() {
    let err = TroveError::Shape(sample_info("non-positive-dimension", "radius must be positive"));
    assert_eq!(err.info().code, "non-positive-dimension");
    assert!(err.info().context.contains_key("field"));
}

#[test]
fn serde_error_surface() {
    let err = TroveError::Serde(sample_info("malformed-shape", "unknown kind tag"));
    assert_eq!(err.info().code, "malformed-shape");
    assert!(err.info().context.contains_key("value"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = TroveError::Shape(
        ErrorInfo::new("non-finite-dimension", "width must be finite")
            .with_context("width", "NaN")
            .with_hint("pass a finite positive value"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("non-finite-dimension"));
    assert!(rendered.contains("width=NaN"));
    assert!(rendered.contains("hint: pass a finite positive value"));
}

#[test]
fn errors_roundtrip_through_json() {
    let err = TroveError::Serde(sample_info("malformed-shape", "unknown kind tag"));
    let json = serde_json::to_string(&err).unwrap();
    let restored: TroveError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, restored);
}
