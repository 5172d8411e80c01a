//! Reveal-on-Scroll Section
//!
//! An anchored `section` that starts offset and transparent, eases into
//! place when about half of it is on screen, and eases back out when it
//! leaves. The animation replays on every crossing unless the configured
//! [`RevealMode`](folio_core::RevealMode) is `Once`.
//!
//! Each section owns its own state signal and its own observer task. The task
//! lives in the section's scope and is cancelled with it; the host-side
//! observer is released from a drop hook.

use dioxus::prelude::*;
use folio_core::{run_reveal, RevealConfig, RevealState, SectionIcon};

use super::eval_observer::EvalObserver;
use super::icon::SectionIconGlyph;

/// Reveal settings from context, or defaults when none were provided.
pub fn use_reveal_config() -> RevealConfig {
    try_use_context::<RevealConfig>().unwrap_or_default()
}

/// Per-section reveal state, starting `Hidden`.
///
/// Releases the host observer for `id` when the calling component unmounts.
/// Start observation with [`observe_reveal`] once the element is mounted.
pub fn use_reveal(id: &str) -> Signal<RevealState> {
    let state = use_signal(RevealState::default);
    let target = id.to_string();
    use_drop(move || EvalObserver::release(&target));
    state
}

/// Spawn the observer task driving `state` for the element with DOM id `id`.
pub fn observe_reveal(id: String, config: RevealConfig, mut state: Signal<RevealState>) {
    spawn(async move {
        let mut observer = EvalObserver::new();
        let outcome = run_reveal(&mut observer, &id, &config, |transition| {
            state.set(transition.to)
        })
        .await;
        tracing::debug!(section = %id, ?outcome, "Stopped observing section");
    });
}

fn section_class(state: RevealState) -> String {
    format!("reveal-section {}", state.class())
}

/// Properties for the RevealSection component
#[derive(Clone, PartialEq, Props)]
pub struct RevealSectionProps {
    /// Anchor identifier, unique on the page
    pub id: String,
    /// Heading text
    pub title: String,
    /// Glyph shown beside the heading
    pub icon: SectionIcon,
    /// Section content
    pub children: Element,
}

/// Titled content block that reveals itself on scroll
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RevealSection {
///         id: "experience",
///         title: "Work Experience",
///         icon: SectionIcon::Briefcase,
///         p { "Data Engineer @ Accenture" }
///     }
/// }
/// ```
#[component]
pub fn RevealSection(props: RevealSectionProps) -> Element {
    let config = use_reveal_config();
    let state = use_reveal(&props.id);

    let current = state();
    let class = section_class(current);
    let style = current.style(&config);
    let target = props.id.clone();

    rsx! {
        section {
            id: "{props.id}",
            class: "{class}",
            style: "{style}",
            "data-reveal": "{current}",
            onmounted: move |_| observe_reveal(target.clone(), config, state),

            div { class: "timeline-node", "aria-hidden": "true" }

            header { class: "section-heading",
                SectionIconGlyph { icon: props.icon, size: 32, class: "accent".to_string() }
                h2 { class: "section-title", "{props.title}" }
            }

            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_class_tracks_state() {
        assert_eq!(section_class(RevealState::Hidden), "reveal-section reveal-hidden");
        assert_eq!(
            section_class(RevealState::Revealed),
            "reveal-section reveal-revealed"
        );
    }

    #[test]
    fn hidden_style_uses_config_offset() {
        let config = RevealConfig {
            offset_px: 12.0,
            duration_ms: 200,
            ..Default::default()
        };
        let style = RevealState::Hidden.style(&config);
        assert!(style.contains("translateY(12px)"));
        assert!(style.contains("200ms"));
    }
}
