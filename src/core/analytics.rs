//! Coarse, best-effort visitor analytics
//!
//! Events carry only a device class, a browser family, the viewport size and
//! the referrer. Emission never influences the page: callers route every
//! result through [`best_effort`].

use std::fmt::Display;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Milestones that are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EventKind {
    #[display("random_idea_click")]
    RandomIdeaClick,
    #[display("waitlist_signup")]
    WaitlistSignup,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event kind: {0}")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random_idea_click" => Ok(EventKind::RandomIdeaClick),
            "waitlist_signup" => Ok(EventKind::WaitlistSignup),
            other => Err(UnknownEventKind(other.to_string())),
        }
    }
}

/// Device class guessed from the user agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DeviceClass {
    #[display("phone")]
    Phone,
    #[display("tablet")]
    Tablet,
    #[display("desktop")]
    Desktop,
}

impl DeviceClass {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();

        // Android tablets omit "mobile" from their user agent
        let android_tablet = ua.contains("android") && !ua.contains("mobi");
        if ua.contains("ipad")
            || ua.contains("tablet")
            || ua.contains("playbook")
            || ua.contains("silk")
            || android_tablet
        {
            return DeviceClass::Tablet;
        }

        const PHONE_MARKERS: [&str; 7] = [
            "mobi",
            "iphone",
            "ipod",
            "android",
            "blackberry",
            "opera mini",
            "iemobile",
        ];
        if PHONE_MARKERS.iter().any(|marker| ua.contains(marker)) {
            return DeviceClass::Phone;
        }

        DeviceClass::Desktop
    }
}

/// Browser family guessed from the user agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BrowserFamily {
    #[display("edge")]
    Edge,
    #[display("opera")]
    Opera,
    #[display("chrome")]
    Chrome,
    #[display("firefox")]
    Firefox,
    #[display("safari")]
    Safari,
    #[display("other")]
    Other,
}

impl BrowserFamily {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();

        // Order matters: Edge and Opera also announce Chrome and Safari,
        // Chrome also announces Safari.
        if ua.contains("edg/") || ua.contains("edge/") || ua.contains("edga/") {
            BrowserFamily::Edge
        } else if ua.contains("opr/") || ua.contains("opera") {
            BrowserFamily::Opera
        } else if ua.contains("chrome/") || ua.contains("crios/") || ua.contains("chromium/") {
            BrowserFamily::Chrome
        } else if ua.contains("firefox/") || ua.contains("fxios/") {
            BrowserFamily::Firefox
        } else if ua.contains("safari/") {
            BrowserFamily::Safari
        } else {
            BrowserFamily::Other
        }
    }
}

/// What the browser exposes about the current visit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientContext {
    pub user_agent: String,
    /// Viewport width and height in CSS pixels
    pub viewport: Option<(u32, u32)>,
    pub referrer: Option<String>,
}

/// Insert payload for an analytics event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event_type: String,
    pub device_type: String,
    pub browser: String,
    pub screen_width: Option<u32>,
    pub screen_height: Option<u32>,
    pub referrer: Option<String>,
}

impl AnalyticsEvent {
    pub fn new(kind: EventKind, context: &ClientContext) -> Self {
        Self {
            event_type: kind.to_string(),
            device_type: DeviceClass::from_user_agent(&context.user_agent).to_string(),
            browser: BrowserFamily::from_user_agent(&context.user_agent).to_string(),
            screen_width: context.viewport.map(|(width, _)| width),
            screen_height: context.viewport.map(|(_, height)| height),
            referrer: context
                .referrer
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
        }
    }

    pub fn kind(&self) -> Result<EventKind, UnknownEventKind> {
        self.event_type.parse()
    }
}

/// Swallow the outcome of a fire-and-forget operation.
///
/// Errors are logged to the console (or the server log) and dropped; they are
/// never returned to the caller.
pub fn best_effort<T, E: Display>(result: Result<T, E>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            leptos::logging::warn!("{what} failed (ignored): {err}");
            None
        }
    }
}
