use crate::app::SPINNER_FRAME_COUNT;

const FRAMES: [char; SPINNER_FRAME_COUNT] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn frame(idx: usize) -> char {
    FRAMES[idx % FRAMES.len()]
}

/// Status text shown while the startup load is in flight.
pub fn loading_label(idx: usize) -> String {
    format!("{} Loading records…", frame(idx))
}
