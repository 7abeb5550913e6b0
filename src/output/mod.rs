pub mod formatter;

pub use formatter::{
    format_average, format_error, format_report, format_values, should_use_colors,
    should_use_colors_stderr,
};
