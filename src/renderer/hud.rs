//! DOM text overlay: score, centered messages and the state dump

use web_sys::{Document, Element};

pub struct Hud {
    score: Option<Element>,
    overlay: Option<Element>,
    state: Option<Element>,
}

impl Hud {
    /// Missing elements are tolerated; their updates are skipped
    pub fn new(document: &Document) -> Self {
        let find = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("HUD element #{id} not found");
            }
            el
        };
        Self {
            score: find("score"),
            overlay: find("overlay"),
            state: find("state"),
        }
    }

    pub fn set_score(&self, score: Option<u32>) {
        if let Some(el) = &self.score {
            let text = score.map(|s| s.to_string()).unwrap_or_default();
            if el.text_content().unwrap_or_default() != text {
                el.set_text_content(Some(&text));
            }
        }
    }

    /// Show `lines` centered over the canvas, or hide the overlay when empty
    pub fn set_message(&self, lines: &[String]) {
        let Some(el) = &self.overlay else { return };
        if lines.is_empty() {
            let _ = el.set_attribute("class", "hidden");
            el.set_text_content(None);
        } else {
            el.set_text_content(Some(&lines.join("\n")));
            let _ = el.set_attribute("class", "");
        }
    }

    pub fn set_state(&self, text: &str) {
        if let Some(el) = &self.state {
            el.set_text_content(Some(text));
        }
    }
}
