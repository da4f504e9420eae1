//! Text rendering of the generator page
//!
//! Rendering reads a [`PageState`] snapshot and never mutates it; the same
//! state and spinner frame always produce the same text.

use crate::controller::{PageState, View};

pub const TITLE: &str = "AI Image Generator";
pub const DESCRIPTION: &str = "Transform your ideas into stunning images using artificial intelligence.\nSimply describe what you want to see, and watch as AI brings your vision to life.";
pub const PLACEHOLDER: &str = "Describe the image you want to generate...";
pub const GENERATE_LABEL: &str = "Generate";
pub const BUSY_LABEL: &str = "Generating...";
pub const IMAGE_ALT: &str = "Generated AI Image";

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

pub fn button_label(state: &PageState) -> &'static str {
    if state.busy {
        BUSY_LABEL
    } else {
        GENERATE_LABEL
    }
}

/// Render only the output area (spinner, image or nothing).
pub fn render_output(state: &PageState, frame: usize) -> String {
    match state.view() {
        View::Loading => format!("  {}", SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]),
        View::Image(url) => format!("  {}: {}", IMAGE_ALT, url),
        View::Idle => String::new(),
    }
}

/// Render the whole page.
pub fn render(state: &PageState, frame: usize) -> String {
    let input = if state.prompt.is_empty() {
        PLACEHOLDER
    } else {
        state.prompt.as_str()
    };
    let button = if state.submit_enabled() {
        format!("[ {} ]", button_label(state))
    } else {
        format!("[ {} ] (disabled)", button_label(state))
    };

    let mut out = format!(
        "{}\n{}\n{}\n\n> {}\n{}\n",
        TITLE,
        "=".repeat(TITLE.len()),
        DESCRIPTION,
        input,
        button
    );

    let output = render_output(state, frame);
    if !output.is_empty() {
        out.push('\n');
        out.push_str(&output);
        out.push('\n');
    }

    out
}
