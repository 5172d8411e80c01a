//! Section bodies.
//!
//! One layout per [`SectionBody`] variant, rendered inside a reveal section.

use dioxus::prelude::*;
use folio_core::SectionBody;
use folio_ui::SkillPills;

use super::markdown::MarkdownText;

#[component]
pub fn SectionContent(body: SectionBody) -> Element {
    match body {
        SectionBody::Experience { roles } => rsx! {
            for role in roles {
                div { class: "card glass",
                    h3 { class: "role-heading", "{role.heading()}" }
                    p { class: "role-summary", "{role.summary}" }
                    ul { class: "highlights",
                        for highlight in role.highlights.iter() {
                            li { "{highlight}" }
                        }
                    }
                }
            }
        },
        SectionBody::Projects { projects } => rsx! {
            div { class: "project-grid",
                for project in projects {
                    div { key: "{project.name}", class: "card project-card",
                        h4 { class: "project-name", "{project.name}" }
                        p { class: "muted", "{project.description}" }
                    }
                }
            }
        },
        SectionBody::Skills { skills } => rsx! {
            SkillPills { skills: skills, label: "Technical skills".to_string() }
        },
        SectionBody::Publications { publications } => rsx! {
            div { class: "publications",
                for publication in publications {
                    article { class: "publication",
                        h4 { class: "publication-title", "“{publication.title}”" }
                        p { class: "muted", "{publication.citation()}" }
                    }
                }
            }
        },
        SectionBody::Achievements { awards, certifications } => rsx! {
            div { class: "achievements-grid",
                div {
                    h3 { class: "subheading", "Awards" }
                    for award in awards {
                        p { class: "award", "{award}" }
                    }
                }
                div {
                    h3 { class: "subheading", "Certifications" }
                    ul { class: "certifications",
                        for certification in certifications {
                            li { "{certification}" }
                        }
                    }
                }
            }
        },
        SectionBody::Narrative { markdown } => rsx! {
            div { class: "card narrative",
                MarkdownText { markdown: markdown, class: "lead".to_string() }
            }
        },
    }
}
