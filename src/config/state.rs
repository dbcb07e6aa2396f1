// src/config/state.rs
use super::options::AppOptions;
use crate::catalog::Category;

/// Which navigation scheme the dashboard shows above the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavMode {
    /// Primary reports as tabs, the rest in a category-grouped "More" menu.
    #[default]
    Tabs,
    /// Category chips, then the reports of the active category.
    Categories,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub nav: NavMode,

    /// Id of the report whose table is shown (or being fetched)
    pub active_report: Option<String>,

    /// Chip selected in `NavMode::Categories`
    pub active_category: Category,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            nav: NavMode::default(),
            active_report: None,
            active_category: Category::Batting,
            window_w: 1200,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
