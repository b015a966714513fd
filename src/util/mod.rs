//! Utility modules

pub mod text;

pub use text::{
    char_col_to_visual_col, char_width, expand_tabs, visual_col_to_char_col, TABULATOR_WIDTH,
};
