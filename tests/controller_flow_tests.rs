//! Integrationstests für die Intent-getriebenen Editier-Flows:
//! - Marker-Tool (Linien zeichnen, Poly-Linien, Abbrüche)
//! - Winkel-Tool (Konstruktion, Duplikate, Kaskaden-Löschung)
//! - Referenzkreis (Lebenszyklus, Resize-Handles)
//! - Selektion (Replace/Toggle über vier Kanäle) und kombiniertes Löschen

use std::cell::Cell;
use std::rc::Rc;

use approx::assert_relative_eq;
use glam::DVec2;
use image_measure_editor::{AppController, AppIntent, AppState, EditorTool, ResizeHandle};

fn click(controller: &mut AppController, state: &mut AppState, x: f64, y: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::CanvasClicked {
                position: DVec2::new(x, y),
                additive: false,
            },
        )
        .expect("CanvasClicked darf nicht fehlschlagen");
}

fn set_tool(controller: &mut AppController, state: &mut AppState, tool: EditorTool) {
    controller
        .handle_intent(state, AppIntent::SetEditorToolRequested { tool })
        .expect("SetEditorToolRequested darf nicht fehlschlagen");
}

/// Zeichnet P0(0,0) — A — P1(100,0) — B — P2(100,100) in einem Klick-Strom.
fn draw_two_lines(controller: &mut AppController, state: &mut AppState) -> [u64; 2] {
    set_tool(controller, state, EditorTool::Marker);
    click(controller, state, 0.0, 0.0);
    click(controller, state, 100.0, 0.0);
    click(controller, state, 100.0, 100.0);

    let mut line_ids: Vec<u64> = state.sketch.lines_iter().map(|l| l.id).collect();
    line_ids.sort_unstable();
    assert_eq!(line_ids.len(), 2);
    [line_ids[0], line_ids[1]]
}

// ─── Marker-Tool ─────────────────────────────────────────────────────────────

#[test]
fn test_marker_klickstrom_zeichnet_polylinie() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let [a, b] = draw_two_lines(&mut controller, &mut state);

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.line_count(), 2);
    assert_eq!(state.sketch.line(a).unwrap().label, "A");
    assert_eq!(state.sketch.line(b).unwrap().label, "B");
    assert_relative_eq!(state.sketch.line_length(a).unwrap(), 100.0, epsilon = 1e-9);

    // Der Endpunkt des Streams bleibt aktiv (Pending)
    assert!(state.editor.active_point_id.is_some());
}

#[test]
fn test_marker_klick_auf_aktiven_punkt_bricht_ab() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    set_tool(&mut controller, &mut state, EditorTool::Marker);
    click(&mut controller, &mut state, 0.0, 0.0);
    // Zweiter Klick innerhalb des Hit-Radius des aktiven Punkts → Self-Loop
    click(&mut controller, &mut state, 5.0, 0.0);

    assert_eq!(state.line_count(), 0);
    assert!(state.editor.active_point_id.is_none());
    // Der Punkt selbst bleibt bestehen (Abbruch ohne Seiteneffekte)
    assert_eq!(state.point_count(), 1);
}

#[test]
fn test_marker_duplikatlinie_ist_noop_aber_punkt_wandert() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    set_tool(&mut controller, &mut state, EditorTool::Marker);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 100.0, 0.0);
    // Zurück zum Startpunkt: Linie existiert bereits (ungeordnet)
    click(&mut controller, &mut state, 0.0, 0.0);

    assert_eq!(state.line_count(), 1);
    assert_eq!(state.point_count(), 2);

    // Der aktive Punkt ist jetzt wieder der Startpunkt → weiterzeichnen möglich
    click(&mut controller, &mut state, 0.0, 100.0);
    assert_eq!(state.line_count(), 2);
}

#[test]
fn test_escape_bricht_zeichnen_ohne_seiteneffekte_ab() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    set_tool(&mut controller, &mut state, EditorTool::Marker);
    click(&mut controller, &mut state, 0.0, 0.0);
    assert!(state.editor.active_point_id.is_some());

    controller
        .handle_intent(&mut state, AppIntent::CancelRequested)
        .expect("CancelRequested darf nicht fehlschlagen");

    assert!(state.editor.active_point_id.is_none());
    assert_eq!(state.point_count(), 1);
}

#[test]
fn test_toolwechsel_entfernt_nie_verbundenen_punkt() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    set_tool(&mut controller, &mut state, EditorTool::Marker);
    click(&mut controller, &mut state, 0.0, 0.0);
    assert_eq!(state.point_count(), 1);

    // Wechsel weg vom Marker-Tool → Orphan-Sweep
    set_tool(&mut controller, &mut state, EditorTool::Cursor);

    assert_eq!(state.point_count(), 0);
    assert!(state.editor.active_point_id.is_none());
}

// ─── Winkel-Tool ─────────────────────────────────────────────────────────────

#[test]
fn test_winkelkonstruktion_ueber_zwei_linienklicks() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let [a, b] = draw_two_lines(&mut controller, &mut state);

    set_tool(&mut controller, &mut state, EditorTool::Angle);
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: a })
        .expect("Linienklick darf nicht fehlschlagen");
    assert_eq!(state.editor.first_angle_line_id, Some(a));

    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: b })
        .expect("Linienklick darf nicht fehlschlagen");

    assert_eq!(state.angle_count(), 1);
    assert!(state.editor.first_angle_line_id.is_none());

    let angle = state.sketch.angles_iter().next().unwrap();
    assert_eq!(angle.label, "θ1");
    assert_relative_eq!(angle.degrees, 90.0, epsilon = 1e-9);

    // Duplikat für dasselbe Linienpaar ist ein No-op
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: b })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: a })
        .unwrap();
    assert_eq!(state.angle_count(), 1);
}

#[test]
fn test_winkeltool_gleiche_linie_bricht_ab() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let [a, _] = draw_two_lines(&mut controller, &mut state);

    set_tool(&mut controller, &mut state, EditorTool::Angle);
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: a })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: a })
        .unwrap();

    assert!(state.editor.first_angle_line_id.is_none());
    assert_eq!(state.angle_count(), 0);
}

#[test]
fn test_punktloeschung_kaskadiert_bis_zum_leeren_sketch() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let [a, b] = draw_two_lines(&mut controller, &mut state);

    set_tool(&mut controller, &mut state, EditorTool::Angle);
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: a })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: b })
        .unwrap();

    // Scheitelpunkt der beiden Linien löschen → alles fällt
    let vertex = state.sketch.angles_iter().next().unwrap().vertex_id;
    controller
        .handle_intent(&mut state, AppIntent::DeletePointRequested { point_id: vertex })
        .expect("DeletePointRequested darf nicht fehlschlagen");

    assert_eq!(state.point_count(), 0);
    assert_eq!(state.line_count(), 0);
    assert_eq!(state.angle_count(), 0);
}

// ─── Drag-Lifecycle ──────────────────────────────────────────────────────────

#[test]
fn test_drag_committet_erst_am_ende_und_rechnet_winkel_neu() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let [a, b] = draw_two_lines(&mut controller, &mut state);

    set_tool(&mut controller, &mut state, EditorTool::Angle);
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: a })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: b })
        .unwrap();

    // P2 (Fernpunkt von B) auf die Verlängerung von A ziehen
    let angle = state.sketch.angles_iter().next().unwrap();
    let vertex = angle.vertex_id;
    let far_b = state
        .sketch
        .line(b)
        .unwrap()
        .other_endpoint(vertex)
        .unwrap();

    set_tool(&mut controller, &mut state, EditorTool::Cursor);
    controller
        .handle_intent(&mut state, AppIntent::PointDragStarted { point_id: far_b })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointDragUpdated {
                position: DVec2::new(200.0, 0.0),
            },
        )
        .unwrap();

    // Vorschau aktiv, Sketch noch unverändert
    assert!(state.editor.drag_preview.is_some());
    assert_relative_eq!(
        state.sketch.point(far_b).unwrap().position.y,
        100.0,
        epsilon = 1e-12
    );

    controller
        .handle_intent(&mut state, AppIntent::PointDragEnded)
        .unwrap();

    assert!(state.editor.drag_preview.is_none());
    let angle = state.sketch.angles_iter().next().unwrap();
    assert_relative_eq!(angle.degrees, 180.0, epsilon = 1e-9);
}

#[test]
fn test_escape_verwirft_drag_vorschau() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let [_, b] = draw_two_lines(&mut controller, &mut state);
    let far_b = state.sketch.line(b).unwrap().end_id;

    set_tool(&mut controller, &mut state, EditorTool::Cursor);
    controller
        .handle_intent(&mut state, AppIntent::PointDragStarted { point_id: far_b })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointDragUpdated {
                position: DVec2::new(500.0, 500.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::CancelRequested)
        .unwrap();

    assert!(state.editor.drag_preview.is_none());
    let position = state.sketch.point(far_b).unwrap().position;
    assert_relative_eq!(position.x, 100.0, epsilon = 1e-12);
    assert_relative_eq!(position.y, 100.0, epsilon = 1e-12);
}

// ─── Referenzkreis ───────────────────────────────────────────────────────────

#[test]
fn test_kreis_lebenszyklus_und_resize_ueber_rechtes_handle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    set_tool(&mut controller, &mut state, EditorTool::Circle);
    click(&mut controller, &mut state, 50.0, 50.0);
    // Zweiter Klick ist ein No-op solange ein Kreis existiert
    click(&mut controller, &mut state, 300.0, 300.0);

    let circle = state.sketch.circle().expect("Kreis erwartet");
    assert_relative_eq!(circle.center.x, 50.0, epsilon = 1e-12);
    assert_relative_eq!(circle.radius, 50.0, epsilon = 1e-12);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CircleResizeRequested {
                handle: ResizeHandle::Right,
                pointer: DVec2::new(120.0, 50.0),
            },
        )
        .expect("CircleResizeRequested darf nicht fehlschlagen");

    let circle = state.sketch.circle().unwrap();
    assert_relative_eq!(circle.radius, 35.0, epsilon = 1e-12);
    assert_relative_eq!(circle.center.y, 50.0, epsilon = 1e-12);
    // Anker (linke Kante) bleibt bei x = 0
    assert_relative_eq!(circle.center.x - circle.radius, 0.0, epsilon = 1e-12);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CircleMoveRequested {
                delta: DVec2::new(10.0, 10.0),
            },
        )
        .unwrap();
    let circle = state.sketch.circle().unwrap();
    assert_relative_eq!(circle.center.x, 45.0, epsilon = 1e-12);
    assert_relative_eq!(circle.radius, 35.0, epsilon = 1e-12);

    controller
        .handle_intent(&mut state, AppIntent::DeleteCircleRequested)
        .unwrap();
    assert!(state.sketch.circle().is_none());
}

// ─── Selektion & kombiniertes Löschen ────────────────────────────────────────

#[test]
fn test_selektion_replace_und_toggle_ueber_kanaele() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let [a, b] = draw_two_lines(&mut controller, &mut state);

    // L1 Replace, L2 additiv → beide Linien selektiert
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectLineRequested {
                line_id: Some(a),
                additive: false,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectLineRequested {
                line_id: Some(b),
                additive: true,
            },
        )
        .unwrap();
    assert_eq!(state.selection.selected_line_ids.len(), 2);
    assert!(state.has_selection());

    // Punkt im Replace-Modus → Linienkanal wird geleert
    let point_id = state.sketch.point_ids()[0];
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectPointRequested {
                point_id: Some(point_id),
                additive: false,
            },
        )
        .unwrap();
    assert!(state.selection.selected_line_ids.is_empty());
    assert_eq!(state.selection.selected_point_ids.len(), 1);

    controller
        .handle_intent(&mut state, AppIntent::ClearSelectionRequested)
        .unwrap();
    assert!(!state.has_selection());
}

#[test]
fn test_cursor_klick_selektiert_naechsten_punkt() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_two_lines(&mut controller, &mut state);

    set_tool(&mut controller, &mut state, EditorTool::Cursor);
    click(&mut controller, &mut state, 98.0, 2.0);

    assert_eq!(state.selection.selected_point_ids.len(), 1);

    // Leer-Klick löscht die Selektion wieder
    click(&mut controller, &mut state, 400.0, 400.0);
    assert!(!state.has_selection());
}

#[test]
fn test_delete_selected_loescht_mehrklassig_ohne_haengende_winkel() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let [a, b] = draw_two_lines(&mut controller, &mut state);

    set_tool(&mut controller, &mut state, EditorTool::Angle);
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: a })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: b })
        .unwrap();

    set_tool(&mut controller, &mut state, EditorTool::Circle);
    click(&mut controller, &mut state, 200.0, 200.0);

    // Linie A und den Kreis selektieren, dann kombiniert löschen
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectLineRequested {
                line_id: Some(a),
                additive: false,
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::SelectCircleRequested { additive: true })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .expect("DeleteSelectedRequested darf nicht fehlschlagen");

    assert!(state.sketch.circle().is_none());
    assert_eq!(state.line_count(), 1);
    assert_eq!(state.angle_count(), 0);
    // B hält seine beiden Endpunkte, der dritte Punkt fiel dem Sweep zum Opfer
    assert_eq!(state.point_count(), 2);
    assert!(!state.has_selection());
}

#[test]
fn test_clear_all_setzt_alles_zurueck() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_two_lines(&mut controller, &mut state);

    set_tool(&mut controller, &mut state, EditorTool::Circle);
    click(&mut controller, &mut state, 10.0, 10.0);

    controller
        .handle_intent(&mut state, AppIntent::ClearAllRequested)
        .unwrap();

    assert!(state.sketch.is_empty());
    assert!(!state.has_selection());
    assert!(state.editor.active_point_id.is_none());
}

// ─── Änderungsbenachrichtigung ───────────────────────────────────────────────

#[test]
fn test_listener_wird_pro_command_einmal_benachrichtigt() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let notifications = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&notifications);
    controller.subscribe(move |_state| {
        counter.set(counter.get() + 1);
    });

    set_tool(&mut controller, &mut state, EditorTool::Marker);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 100.0, 0.0);

    // SetEditorTool + zwei Marker-Klicks = drei Commands
    assert_eq!(notifications.get(), 3);
    assert_eq!(state.revision, 3);
    assert_eq!(state.command_log.len(), 3);

    let scene = controller.build_render_scene(&state);
    assert!(scene.has_data());
    assert!(!scene.has_selection());
    assert_eq!(scene.revision, 3);
    assert_eq!(scene.active_point_id, state.editor.active_point_id);
}

#[test]
fn test_move_selected_verschiebt_punkte_und_rechnet_winkel_neu() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let [a, b] = draw_two_lines(&mut controller, &mut state);

    set_tool(&mut controller, &mut state, EditorTool::Angle);
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: a })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::AngleToolLineClicked { line_id: b })
        .unwrap();

    // Beide Endpunkte von A selektieren und gemeinsam verschieben
    let line_a = state.sketch.line(a).unwrap();
    let (start, end) = (line_a.start_id, line_a.end_id);
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectPointRequested {
                point_id: Some(start),
                additive: false,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectPointRequested {
                point_id: Some(end),
                additive: true,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::MoveSelectedRequested {
                delta: DVec2::new(50.0, 50.0),
            },
        )
        .unwrap();

    // Linie A behält ihre Länge; der Winkel am gemeinsamen Scheitel wird neu
    // berechnet: Schenkel (-100,0) und (-50,50) → 45 Grad
    assert_relative_eq!(state.sketch.line_length(a).unwrap(), 100.0, epsilon = 1e-9);
    let angle = state.sketch.angles_iter().next().unwrap();
    assert_relative_eq!(angle.degrees, 45.0, epsilon = 1e-9);
}

#[test]
fn test_add_point_intent_erstellt_freien_punkt() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::AddPointRequested {
                position: DVec2::new(42.0, 7.0),
            },
        )
        .expect("AddPointRequested darf nicht fehlschlagen");

    assert_eq!(state.point_count(), 1);
    let point = state.sketch.points_iter().next().unwrap();
    assert_relative_eq!(point.position.x, 42.0, epsilon = 1e-12);
}

#[test]
fn test_render_szene_konsultiert_drag_overlay() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let [_, b] = draw_two_lines(&mut controller, &mut state);
    let far_b = state.sketch.line(b).unwrap().end_id;

    set_tool(&mut controller, &mut state, EditorTool::Cursor);
    controller
        .handle_intent(&mut state, AppIntent::PointDragStarted { point_id: far_b })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointDragUpdated {
                position: DVec2::new(150.0, 150.0),
            },
        )
        .unwrap();

    let scene = controller.build_render_scene(&state);
    // Der Renderer sieht die Vorschau-Position, der Sketch die committete
    assert_relative_eq!(
        scene.effective_point_position(far_b).unwrap().x,
        150.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        scene.sketch.point(far_b).unwrap().position.x,
        100.0,
        epsilon = 1e-12
    );
}
