//! Browser-side calls to the landing page API
//!
//! Waitlist submissions report a [`SubmissionError`]; analytics emission
//! reports nothing at all.

use crate::core::{EventKind, SubmissionError, WaitlistSignup};

#[cfg(not(feature = "ssr"))]
use crate::core::{AnalyticsEvent, ApiError, ClientContext, best_effort};

/// Send a signup to the waitlist endpoint
#[cfg(not(feature = "ssr"))]
pub async fn submit_waitlist(signup: &WaitlistSignup) -> Result<(), SubmissionError> {
    use gloo_net::http::Request;

    let response = Request::post("/api/waitlist")
        .json(signup)
        .map_err(|e| SubmissionError::SubmissionFailed(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmissionError::SubmissionFailed(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let code = response.json::<ApiError>().await.ok().map(|body| body.code);
    let err = SubmissionError::from_response(response.status(), code.as_deref());
    leptos::logging::log!("Waitlist signup not accepted: {}", err);
    Err(err)
}

#[cfg(feature = "ssr")]
pub async fn submit_waitlist(_signup: &WaitlistSignup) -> Result<(), SubmissionError> {
    Err(SubmissionError::SubmissionFailed(
        "Waitlist submission not available on server".to_string(),
    ))
}

/// Report a milestone. Never fails and never blocks the caller's flow on an
/// error.
#[cfg(not(feature = "ssr"))]
pub async fn emit_event(kind: EventKind) {
    use gloo_net::http::Request;

    let event = AnalyticsEvent::new(kind, &client_context());

    let result = async {
        let response = Request::post("/api/analytics").json(&event)?.send().await?;
        if !response.ok() {
            return Err(gloo_net::Error::GlooError(format!(
                "HTTP {}",
                response.status()
            )));
        }
        Ok(())
    }
    .await;

    best_effort(result, "analytics event");
}

#[cfg(feature = "ssr")]
pub async fn emit_event(_kind: EventKind) {}

/// Collect user agent, viewport and referrer from the browser
#[cfg(not(feature = "ssr"))]
fn client_context() -> ClientContext {
    let Some(window) = web_sys::window() else {
        return ClientContext::default();
    };

    let user_agent = window.navigator().user_agent().unwrap_or_default();

    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v as u32)
    };
    let viewport = dimension(window.inner_width()).zip(dimension(window.inner_height()));

    let referrer = window.document().map(|document| document.referrer());

    ClientContext {
        user_agent,
        viewport,
        referrer,
    }
}
