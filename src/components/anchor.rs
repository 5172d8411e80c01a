//! In-page anchor navigation.

use dioxus::prelude::*;

// Hidden sections are shifted by their reveal offset, so the bounding rect
// is off target until the animation ends. offsetTop ignores transforms.
const SCROLL_SCRIPT: &str = r#"
const id = await dioxus.recv();
const target = document.getElementById(id);
if (target) {
  let top = 0;
  for (let node = target; node; node = node.offsetParent) {
    top += node.offsetTop;
  }
  window.scrollTo({ top, behavior: "smooth" });
}
"#;

/// Smoothly scroll the section with DOM id `id` to the top of the viewport.
///
/// Missing anchors are ignored by the script.
pub fn scroll_to_anchor(id: &str) {
    let eval = document::eval(SCROLL_SCRIPT);
    if let Err(e) = eval.send(id) {
        tracing::warn!(section = id, error = ?e, "Could not scroll to section");
    }
}
