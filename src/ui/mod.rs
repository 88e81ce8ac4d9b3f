//! Terminal output for the command-line front end

pub mod formatter;

pub use formatter::{
    display_error, display_parsed, display_success, format_comparison, format_parsed,
    ordering_symbol,
};
