//! Page footer.

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::Footer;

/// "© <year> | <notice>"
fn footer_line(year: i32, notice: &str) -> String {
    format!("\u{00A9} {} | {}", year, notice)
}

#[component]
pub fn PageFooter(footer: Footer) -> Element {
    let line = footer_line(chrono::Local::now().year(), &footer.notice);

    rsx! {
        footer { class: "page-footer", "{line}" }
    }
}
