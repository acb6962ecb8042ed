//! Pure engine logic: grid mapping, catalog filtering, and the search
//! session that ties options to the reveal window.

pub mod filter;
pub mod grid;
pub mod search;

pub use filter::{distinct_majors, filter_lectures};
pub use grid::{apply_move, clamp_drag_displacement, pixel_delta_to_cell_delta};
pub use search::SearchSession;
