#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::struct_excessive_bools,
    clippy::too_many_lines,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub mod app;
pub mod cli;
pub mod events;
pub mod filter;
pub mod input;
pub mod paging;
pub mod source;
pub mod tui;
