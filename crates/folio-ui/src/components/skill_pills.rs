//! Skill Pills Component
//!
//! Wrapping row of monospace skill chips.

use dioxus::prelude::*;

/// Properties for the SkillPills component
#[derive(Clone, PartialEq, Props)]
pub struct SkillPillsProps {
    /// Skills in display order
    pub skills: Vec<String>,
    /// Accessible name for the list
    #[props(default = "Skills".to_string())]
    pub label: String,
}

/// Displays skills as a wrapping list of pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SkillPills { skills: vec!["Python".to_string(), "SQL".to_string()] }
/// }
/// ```
#[component]
pub fn SkillPills(props: SkillPillsProps) -> Element {
    rsx! {
        ul {
            class: "skill-pills",
            "aria-label": "{props.label}",
            for skill in props.skills.iter() {
                li { key: "{skill}", class: "pill", "{skill}" }
            }
        }
    }
}
