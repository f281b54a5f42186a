//! Short display strings for generation records.

use pictor_core::{
    history::{GenerationHistory, MAX_HISTORY},
    record::GenerationRecord,
    style::StylePreset,
};

/// `"<prompt>"`, or `"<prompt> (<Style> style)"` when a style was applied.
pub fn caption(prompt: &str, style: StylePreset) -> String {
    if style.is_none() {
        prompt.to_string()
    } else {
        format!("{prompt} ({style} style)")
    }
}

/// Badge shown next to a history entry.
pub fn style_badge(style: StylePreset) -> &'static str {
    if style.is_none() { "No style" } else { style.name() }
}

pub fn record_caption(record: &GenerationRecord) -> String {
    caption(record.original_prompt(), record.style())
}

/// `Image History (n/10)`
pub fn history_heading(history: &GenerationHistory) -> String {
    format!("Image History ({}/{MAX_HISTORY})", history.len())
}
