//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],

        // Canvas-Klick: Dispatch je nach aktivem Werkzeug
        AppIntent::CanvasClicked { position, additive } => match state.editor.active_tool {
            EditorTool::Cursor => {
                let base_max_distance = state.options.point_hit_radius;
                let increased_max_distance = state.options.enlarged_hit_radius();

                // Nahe bereits selektierter Punkte greift der vergrößerte Radius
                let mut max_distance = base_max_distance;
                for id in state.selection.selected_point_ids.iter() {
                    if let Some(point) = state.sketch.point(*id) {
                        if (point.position - position).length() <= increased_max_distance {
                            max_distance = increased_max_distance;
                            break;
                        }
                    }
                }

                vec![AppCommand::SelectNearestPoint {
                    position,
                    max_distance,
                    additive,
                }]
            }
            EditorTool::Marker => vec![AppCommand::MarkerToolClick { position }],
            // Das Winkel-Tool reagiert nur auf Linienklicks
            EditorTool::Angle => vec![],
            EditorTool::Circle => vec![AppCommand::CircleToolClick { position }],
        },

        AppIntent::AngleToolLineClicked { line_id } => {
            vec![AppCommand::AngleToolLineClick { line_id }]
        }
        AppIntent::AddPointRequested { position } => {
            vec![AppCommand::AddPointAtPosition { position }]
        }

        AppIntent::PointDragStarted { point_id } => vec![AppCommand::BeginPointDrag { point_id }],
        AppIntent::PointDragUpdated { position } => vec![AppCommand::UpdatePointDrag { position }],
        AppIntent::PointDragEnded => vec![AppCommand::EndPointDrag],
        AppIntent::MovePointRequested { point_id, position } => {
            vec![AppCommand::UpdatePointPosition { point_id, position }]
        }
        AppIntent::MoveSelectedRequested { delta } => {
            vec![AppCommand::MoveSelectedPoints { delta }]
        }

        AppIntent::CircleMoveRequested { delta } => vec![AppCommand::MoveCircle { delta }],
        AppIntent::CircleResizeRequested { handle, pointer } => {
            vec![AppCommand::ResizeCircle { handle, pointer }]
        }

        AppIntent::SelectPointRequested { point_id, additive } => {
            vec![AppCommand::SelectPoint { point_id, additive }]
        }
        AppIntent::SelectLineRequested { line_id, additive } => {
            vec![AppCommand::SelectLine { line_id, additive }]
        }
        AppIntent::SelectAngleRequested { angle_id, additive } => {
            vec![AppCommand::SelectAngle { angle_id, additive }]
        }
        AppIntent::SelectCircleRequested { additive } => {
            vec![AppCommand::SelectCircle { additive }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAllPoints],

        AppIntent::DeletePointRequested { point_id } => {
            vec![AppCommand::DeletePoint { point_id }]
        }
        AppIntent::DeleteLineRequested { line_id } => vec![AppCommand::DeleteLine { line_id }],
        AppIntent::DeleteAngleRequested { angle_id } => {
            vec![AppCommand::DeleteAngle { angle_id }]
        }
        AppIntent::DeleteCircleRequested => vec![AppCommand::DeleteCircle],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],

        // Escape bricht genau die gerade laufende Interaktion ab
        AppIntent::CancelRequested => {
            if state.editor.drag_preview.is_some() {
                vec![AppCommand::CancelPointDrag]
            } else if state.editor.active_point_id.is_some() {
                vec![AppCommand::CancelActivePoint]
            } else if state.editor.first_angle_line_id.is_some() {
                vec![AppCommand::CancelAngleConstruction]
            } else {
                vec![]
            }
        }

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
