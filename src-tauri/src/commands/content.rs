//! Tauri commands for modal content lookups.

use serde::Serialize;
use tauri::State;

use crate::content::{CommunicationScript, LearningChapter, Material};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ContentIndex {
    pub scripts: Vec<String>,
    pub chapters: Vec<String>,
    pub materials: Vec<String>,
}

#[tauri::command]
pub fn get_content_index(state: State<'_, AppState>) -> ContentIndex {
    let lib = state.content();
    ContentIndex {
        scripts: lib.script_titles(),
        chapters: lib.chapter_titles(),
        materials: lib.material_titles(),
    }
}

#[tauri::command]
pub fn get_communication_script(state: State<'_, AppState>, title: String) -> CommunicationScript {
    state.content().script(&title)
}

#[tauri::command]
pub fn get_learning_chapter(state: State<'_, AppState>, title: String) -> LearningChapter {
    state.content().chapter(&title)
}

#[tauri::command]
pub fn get_material(state: State<'_, AppState>, title: String) -> Material {
    state.content().material(&title)
}
