//! Edit session
//!
//! Everything the edit modal holds for one store. A session is created by a
//! successful hydration and dropped when the modal closes or another store is
//! opened; nothing carries over between sessions.

use super::form::ProfileForm;
use super::grid::CategoryGrid;
use super::selection::SelectionSet;

/// Hydrated edit state of one store
#[derive(Debug, Clone)]
pub struct EditSession {
    form: ProfileForm,
    selection: SelectionSet,
    grid: CategoryGrid,
}

impl EditSession {
    pub(crate) fn new(form: ProfileForm, selection: SelectionSet, grid: CategoryGrid) -> Self {
        Self {
            form,
            selection,
            grid,
        }
    }

    pub fn store_id(&self) -> i64 {
        self.form.id
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    /// Scalar fields are plain inputs the user may edit freely
    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn grid(&self) -> &CategoryGrid {
        &self.grid
    }

    /// Report a failed icon load for the tile with `id`
    pub fn icon_failed(&mut self, id: i64) {
        if let Some(tile) = self.grid.tile_mut(id) {
            tile.icon.mark_failed();
        }
    }

    /// Click on a category tile. Returns the new membership of `id`.
    pub fn toggle_category(&mut self, id: i64) -> Option<bool> {
        let selected = self.grid.activate(id, &mut self.selection);
        tracing::debug!(category_id = id, ?selected, "Category toggled");
        selected
    }

    /// Selected ids for the count display
    pub fn selected_categories(&self) -> Vec<i64> {
        self.selection.snapshot()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }
}
