use leptos::prelude::*;

/// Inline image of an SVG served from `/icons`
#[component]
pub fn Icon(
    /// Icon name without the .svg extension
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=icon_path(name)
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

fn icon_path(name: &str) -> String {
    format!("/icons/{}.svg", name)
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const SHUFFLE: &str = "shuffle";
    pub const SPARKLES: &str = "sparkles";
    pub const PLAY: &str = "play";
    pub const INSTAGRAM: &str = "instagram";
    pub const GLOBE: &str = "globe";
    pub const ZAP: &str = "zap";
    pub const X: &str = "x";
    pub const CHECK: &str = "check";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const COMPASS: &str = "compass";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_path() {
        assert_eq!(icon_path(icons::ZAP), "/icons/zap.svg");
    }
}
