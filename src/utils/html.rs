// src/utils/html.rs

use crate::models::question::Alternative;

/// Sanitizes model-generated text before it reaches a browser.
///
/// Whitelist-based: safe formatting tags survive, `<script>` blocks and
/// event-handler attributes are dropped.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input.trim())
}

pub fn clean_alternatives(alternatives: &[Alternative]) -> Vec<Alternative> {
    alternatives
        .iter()
        .map(|alt| Alternative {
            id: clean_html(&alt.id),
            text: clean_html(&alt.text),
        })
        .collect()
}
