// ============================================================================
// Format Module
// Human-readable rendering of DecimalValue results
// ============================================================================

mod display;

pub use display::{
    format_fixed, format_fixed_padded, format_integer, group_thousands, round_to_integer,
    DisplayFormatter,
};
