//! Use-Case-Funktionen für Sketch-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_point` — Freien Punkt hinzufügen
//! - `draw_line` — Linien zeichnen (Marker-Tool-Flow)
//! - `build_angle` — Winkel konstruieren (Winkel-Tool-Flow)
//! - `delete` — Löschoperationen inkl. Kaskade
//! - `move_point` — Punkt-Verschiebung und Drag-Lifecycle
//! - `circle` — Referenzkreis-Operationen

mod add_point;
mod build_angle;
mod circle;
mod delete;
mod draw_line;
mod move_point;

pub use add_point::add_point_at_position;
pub use build_angle::{angle_tool_line_click, cancel_angle_construction};
pub use circle::{circle_tool_click, move_circle, resize_circle};
pub use delete::{
    clear_all, delete_angle, delete_circle, delete_line, delete_point, delete_selected,
};
pub use draw_line::{cancel_active_point, marker_tool_click};
pub use move_point::{
    begin_point_drag, cancel_point_drag, end_point_drag, move_selected_points,
    update_point_drag, update_point_position,
};
