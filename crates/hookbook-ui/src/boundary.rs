use std::panic::{AssertUnwindSafe, catch_unwind};

use hookbook_core::View;

pub struct ErrorInfo {
    pub message: String,
    pub component: String,
}

/// Compose `content`; if it panics, compose `fallback` in its place so the
/// rest of the page keeps rendering.
pub fn ErrorBoundary(
    component: &str,
    fallback: impl FnOnce(ErrorInfo) -> View,
    content: impl FnOnce() -> View,
) -> View {
    match catch_unwind(AssertUnwindSafe(content)) {
        Ok(view) => view,
        Err(err) => {
            let message = if let Some(s) = err.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = err.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("{component} failed to compose: {message}");

            fallback(ErrorInfo {
                message,
                component: component.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;

    #[test]
    fn test_boundary_passes_through() {
        let v = ErrorBoundary("ok", |_| Text("fallback"), || Text("content"));
        assert_eq!(v.text_content(), "content");
    }

    #[test]
    fn test_boundary_catches_panic() {
        let v = ErrorBoundary(
            "broken",
            |info| Text(format!("{}: {}", info.component, info.message)),
            || panic!("boom"),
        );
        assert_eq!(v.text_content(), "broken: boom");
    }
}
