pub mod use_open_sections;

pub use use_open_sections::{use_open_sections, use_section_state, use_sidebar_config};
