//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt geänderte Optionen und persistiert sie als TOML.
pub fn apply(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&EditorOptions::config_path())?;
    Ok(())
}

/// Setzt die Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.options.save_to_file(&EditorOptions::config_path())?;
    log::info!("Optionen auf Standardwerte zurückgesetzt");
    Ok(())
}
