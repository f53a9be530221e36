//! Use-Case-Funktionen für die Selektion.
//!
//! - `pick` — Kanal-Selektion (Replace/Toggle) und Nearest-Point-Pick

mod pick;

pub use pick::{
    clear_selection, select_all_points, select_angle, select_circle, select_line,
    select_nearest_point, select_point,
};
