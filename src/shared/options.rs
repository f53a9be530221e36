//! Zentrale Konfiguration für den Bildmess-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Hit-Radius (Canvas-Einheiten): Klick innerhalb dieses Radius trifft einen
/// existierenden Punkt statt einen neuen zu erstellen.
pub const POINT_HIT_RADIUS: f64 = 15.0;
/// Vergrößerungsfaktor des Pick-Radius nahe bereits selektierter Punkte.
pub const SELECTION_SIZE_FACTOR: f64 = 1.8;

// ── Punkt-Darstellung ───────────────────────────────────────────────

/// Darstellungsradius eines Punkts in Canvas-Einheiten.
pub const POINT_DISPLAY_RADIUS: f64 = 5.0;
/// Füllfarbe normaler Punkte (RGBA: Cyan).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe selektierter Entitäten (RGBA: Magenta).
pub const SELECTED_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe des aktiven (pending) Punkts beim Linienzeichnen (RGBA: Gelb).
pub const ACTIVE_POINT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

// ── Linien & Winkel ─────────────────────────────────────────────────

/// Linienstärke in Canvas-Einheiten.
pub const LINE_THICKNESS: f64 = 2.0;
/// Farbe der Messlinien (RGBA: Grün).
pub const LINE_COLOR: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Farbe der Winkelbögen (RGBA: Orange).
pub const ANGLE_COLOR: [f32; 4] = [1.0, 0.5, 0.1, 1.0];

// ── Referenzkreis ───────────────────────────────────────────────────

/// Farbe des Referenzkreises (RGBA: Blau).
pub const CIRCLE_COLOR: [f32; 4] = [0.2, 0.7, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `image_measure_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Hit-Radius für Punkt-Treffer in Canvas-Einheiten
    pub point_hit_radius: f64,
    /// Vergrößerungsfaktor des Pick-Radius nahe selektierter Punkte
    pub selection_size_factor: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Darstellungsradius eines Punkts
    pub point_display_radius: f64,
    /// Linienstärke
    pub line_thickness: f64,
    /// Füllfarbe normaler Punkte
    pub point_color: [f32; 4],
    /// Farbe selektierter Entitäten
    pub selected_color: [f32; 4],
    /// Farbe des aktiven Punkts beim Linienzeichnen
    pub active_point_color: [f32; 4],
    /// Farbe der Messlinien
    pub line_color: [f32; 4],
    /// Farbe der Winkelbögen
    pub angle_color: [f32; 4],
    /// Farbe des Referenzkreises
    pub circle_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_hit_radius: POINT_HIT_RADIUS,
            selection_size_factor: SELECTION_SIZE_FACTOR,

            point_display_radius: POINT_DISPLAY_RADIUS,
            line_thickness: LINE_THICKNESS,
            point_color: POINT_COLOR,
            selected_color: SELECTED_COLOR,
            active_point_color: ACTIVE_POINT_COLOR,
            line_color: LINE_COLOR,
            angle_color: ANGLE_COLOR,
            circle_color: CIRCLE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("image_measure_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("image_measure_editor.toml")
    }

    /// Effektiver Pick-Radius nahe bereits selektierter Punkte.
    pub fn enlarged_hit_radius(&self) -> f64 {
        self.point_hit_radius * self.selection_size_factor
    }
}
