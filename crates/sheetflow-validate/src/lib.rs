pub mod engine;
pub mod overlay;
pub mod rules;

pub use engine::{error_row_offsets, error_sheet_indices, validate, visible_rows};
pub use overlay::EditOverlay;
pub use rules::check_cell;
