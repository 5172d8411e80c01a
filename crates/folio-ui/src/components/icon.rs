//! Section Glyphs
//!
//! Inline SVG outlines in the lucide style (24x24 grid, 2px round strokes),
//! one per [`SectionIcon`].

use dioxus::prelude::*;
use folio_core::SectionIcon;

/// SVG path data for a glyph. Rects, circles and ellipses are expressed as
/// paths so every glyph renders through the same element.
pub fn glyph_paths(icon: SectionIcon) -> &'static [&'static str] {
    match icon {
        SectionIcon::Briefcase => &[
            "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
            "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
        ],
        SectionIcon::Cpu => &[
            "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M10 9h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1h-4a1 1 0 0 1-1-1v-4a1 1 0 0 1 1-1z",
            "M15 2v2",
            "M15 20v2",
            "M2 15h2",
            "M2 9h2",
            "M20 15h2",
            "M20 9h2",
            "M9 2v2",
            "M9 20v2",
        ],
        SectionIcon::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
        SectionIcon::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        SectionIcon::Award => &[
            "M18 8a6 6 0 1 1-12 0a6 6 0 1 1 12 0z",
            "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
        ],
        SectionIcon::Database => &[
            "M21 5a9 3 0 1 1-18 0a9 3 0 1 1 18 0z",
            "M3 5v14a9 3 0 0 0 18 0V5",
            "M3 12a9 3 0 0 0 18 0",
        ],
    }
}

fn glyph_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("section-icon {}", extra),
        _ => "section-icon".to_string(),
    }
}

/// Properties for the SectionIconGlyph component
#[derive(Clone, PartialEq, Props)]
pub struct SectionIconGlyphProps {
    pub icon: SectionIcon,
    /// Rendered width and height in pixels (default: 32)
    #[props(default = 32)]
    pub size: u32,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Renders a section glyph as an inline SVG
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionIconGlyph { icon: SectionIcon::Briefcase, size: 32 }
/// }
/// ```
#[component]
pub fn SectionIconGlyph(props: SectionIconGlyphProps) -> Element {
    let size = props.size;
    let class = glyph_class(props.class.as_deref());

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "img",
            "aria-label": "{props.icon.label()}",
            for d in glyph_paths(props.icon).iter() {
                path { d: "{d}" }
            }
        }
    }
}
