//! Bildmess-Editor Library.
//! Core-Funktionalität als Library exportiert für Host-UI, Renderer und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use crate::app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, SelectionState,
};
pub use crate::core::{
    ArcParameters, CircleUpdate, MeasureAngle, MeasureLine, ReferenceCircle, RemovalSummary,
    ResizeHandle, Sketch, SketchPoint,
};
pub use crate::core::{SpatialIndex, SpatialMatch};
pub use crate::shared::{EditorOptions, PointDragPreview, RenderScene};
