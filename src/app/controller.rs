//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Listener-Typ für die Änderungsbenachrichtigung.
pub type ChangeListener = Box<dyn FnMut(&AppState)>;

/// Orchestriert Input-Intents und Use-Cases auf den AppState.
///
/// Nach jedem ausgeführten Command wird der Revisionszähler erhöht und jeder
/// registrierte Listener einmal aufgerufen — der Renderer liest dann den
/// vollständig committeten Zustand, nie einen Zwischenstand.
#[derive(Default)]
pub struct AppController {
    listeners: Vec<ChangeListener>,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Listener für "state changed"-Benachrichtigungen.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Werkzeuge & Canvas-Interaktion ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::MarkerToolClick { position } => {
                handlers::editing::marker_tool_click(state, position)
            }
            AppCommand::CircleToolClick { position } => {
                handlers::editing::circle_tool_click(state, position)
            }
            AppCommand::AngleToolLineClick { line_id } => {
                handlers::editing::angle_tool_line_click(state, line_id)
            }
            AppCommand::AddPointAtPosition { position } => {
                handlers::editing::add_point(state, position)
            }

            // === Punkt-Bewegung ===
            AppCommand::UpdatePointPosition { point_id, position } => {
                handlers::editing::update_point_position(state, point_id, position)
            }
            AppCommand::BeginPointDrag { point_id } => {
                handlers::editing::begin_point_drag(state, point_id)
            }
            AppCommand::UpdatePointDrag { position } => {
                handlers::editing::update_point_drag(state, position)
            }
            AppCommand::EndPointDrag => handlers::editing::end_point_drag(state),
            AppCommand::CancelPointDrag => handlers::editing::cancel_point_drag(state),
            AppCommand::MoveSelectedPoints { delta } => {
                handlers::editing::move_selected_points(state, delta)
            }

            // === Referenzkreis ===
            AppCommand::MoveCircle { delta } => handlers::editing::move_circle(state, delta),
            AppCommand::ResizeCircle { handle, pointer } => {
                handlers::editing::resize_circle(state, handle, pointer)
            }

            // === Selektion ===
            AppCommand::SelectNearestPoint {
                position,
                max_distance,
                additive,
            } => handlers::selection::select_nearest_point(state, position, max_distance, additive),
            AppCommand::SelectPoint { point_id, additive } => {
                handlers::selection::select_point(state, point_id, additive)
            }
            AppCommand::SelectLine { line_id, additive } => {
                handlers::selection::select_line(state, line_id, additive)
            }
            AppCommand::SelectAngle { angle_id, additive } => {
                handlers::selection::select_angle(state, angle_id, additive)
            }
            AppCommand::SelectCircle { additive } => {
                handlers::selection::select_circle(state, additive)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::SelectAllPoints => handlers::selection::select_all(state),

            // === Löschen ===
            AppCommand::DeletePoint { point_id } => handlers::editing::delete_point(state, point_id),
            AppCommand::DeleteLine { line_id } => handlers::editing::delete_line(state, line_id),
            AppCommand::DeleteAngle { angle_id } => handlers::editing::delete_angle(state, angle_id),
            AppCommand::DeleteCircle => handlers::editing::delete_circle(state),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::ClearAll => handlers::editing::clear_all(state),

            // === Abbruch ===
            AppCommand::CancelActivePoint => handlers::editing::cancel_active_point(state),
            AppCommand::CancelAngleConstruction => {
                handlers::editing::cancel_angle_construction(state)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options)?,
            AppCommand::ResetOptions => handlers::options::reset(state)?,
        }

        state.revision += 1;
        self.notify_listeners(state);

        Ok(())
    }

    /// Ruft alle registrierten Listener mit dem committeten Zustand auf.
    fn notify_listeners(&mut self, state: &AppState) {
        for listener in &mut self.listeners {
            listener(state);
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
