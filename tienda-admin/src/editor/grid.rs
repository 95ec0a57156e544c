//! Category grid renderer
//!
//! Builds the toggle grid shown in the store editor from the master catalog
//! and the session's [`SelectionSet`]. Tiles are plain data; a host turns them
//! into widgets and routes clicks back through [`CategoryGrid::activate`].

use std::collections::HashMap;

use shared::MasterCategory;

use super::host::EditorHost;
use super::selection::SelectionSet;

/// CSS class of every tile
pub const ITEM_CLASS: &str = "categoria-item";
/// Extra CSS class of a selected tile
pub const SELECTED_CLASS: &str = "seleccionada";
/// CSS class of the check mark inside a tile
pub const CHECK_MARK_CLASS: &str = "check-mark";
/// Icon edge length in pixels
pub const ICON_SIZE_PX: u32 = 32;

/// Icon of a tile with its load-failure fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileIcon {
    src: String,
    fallback: String,
    failed: bool,
}

impl TileIcon {
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fallback: fallback.into(),
            failed: false,
        }
    }

    /// Source the host should display right now
    pub fn current_src(&self) -> &str {
        if self.failed || self.src.is_empty() {
            &self.fallback
        } else {
            &self.src
        }
    }

    /// Called by the host when the image fails to load
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

/// One selectable category in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTile {
    pub id: i64,
    pub label: String,
    pub icon: TileIcon,
    selected: bool,
}

impl CategoryTile {
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The check mark is shown only on selected tiles
    pub fn check_mark_visible(&self) -> bool {
        self.selected
    }

    pub fn class_name(&self) -> String {
        if self.selected {
            format!("{} {}", ITEM_CLASS, SELECTED_CLASS)
        } else {
            ITEM_CLASS.to_string()
        }
    }
}

/// Rendered category grid
#[derive(Debug, Clone, Default)]
pub struct CategoryGrid {
    tiles: Vec<CategoryTile>,
    by_id: HashMap<i64, Vec<usize>>,
}

impl CategoryGrid {
    pub fn tiles(&self) -> &[CategoryTile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, id: i64) -> Option<&CategoryTile> {
        self.by_id
            .get(&id)
            .and_then(|positions| positions.first())
            .map(|&pos| &self.tiles[pos])
    }

    pub fn tile_mut(&mut self, id: i64) -> Option<&mut CategoryTile> {
        let pos = *self.by_id.get(&id)?.first()?;
        self.tiles.get_mut(pos)
    }

    /// Number of tiles currently shown as selected
    pub fn selected_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.selected).count()
    }

    /// Click handler for the tile with `id`.
    ///
    /// Toggles the id in `selection`, then syncs only the affected tile(s).
    /// Returns the new membership, or `None` when no tile has that id.
    pub fn activate(&mut self, id: i64, selection: &mut SelectionSet) -> Option<bool> {
        let positions = self.by_id.get(&id)?;
        let selected = selection.toggle(id);
        for &pos in positions {
            self.tiles[pos].selected = selected;
        }
        Some(selected)
    }

    fn clear(&mut self) {
        self.tiles.clear();
        self.by_id.clear();
    }

    fn push(&mut self, tile: CategoryTile) {
        self.by_id.entry(tile.id).or_default().push(self.tiles.len());
        self.tiles.push(tile);
    }
}

/// Builds [`CategoryGrid`]s
#[derive(Debug, Clone)]
pub struct GridRenderer {
    fallback_icon: String,
}

impl GridRenderer {
    pub fn new(fallback_icon: impl Into<String>) -> Self {
        Self {
            fallback_icon: fallback_icon.into(),
        }
    }

    pub fn fallback_icon(&self) -> &str {
        &self.fallback_icon
    }

    /// Rebuild `grid` from scratch. Same inputs always give the same grid.
    ///
    /// Selected ids missing from the catalog render nothing.
    pub fn rebuild(&self, grid: &mut CategoryGrid, catalog: &[MasterCategory], selection: &SelectionSet) {
        grid.clear();
        for category in catalog {
            grid.push(CategoryTile {
                id: category.id,
                label: category.nombre.clone(),
                icon: TileIcon::new(category.icono_url.clone(), self.fallback_icon.clone()),
                selected: selection.contains(category.id),
            });
        }
    }

    /// Rebuild `grid` and tell the host's count display once
    pub fn render<H>(&self, grid: &mut CategoryGrid, catalog: &[MasterCategory], selection: &SelectionSet, host: &mut H)
    where
        H: EditorHost + ?Sized,
    {
        self.rebuild(grid, catalog, selection);
        tracing::debug!(
            rendered = grid.len(),
            selected = grid.selected_count(),
            assigned = selection.len(),
            "Category grid rendered"
        );
        host.update_category_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "/static/img/categoria-default.png";

    fn catalog(ids: &[i64]) -> Vec<MasterCategory> {
        ids.iter()
            .map(|&id| MasterCategory::new(id, format!("Cat {id}"), format!("https://cdn.test/{id}.png")))
            .collect()
    }

    fn build(catalog: &[MasterCategory], selection: &SelectionSet) -> CategoryGrid {
        let mut grid = CategoryGrid::default();
        GridRenderer::new(FALLBACK).rebuild(&mut grid, catalog, selection);
        grid
    }

    #[test]
    fn test_selected_tiles_follow_selection() {
        let selection: SelectionSet = [2, 5].into_iter().collect();
        let grid = build(&catalog(&[1, 2, 3, 4, 5]), &selection);

        assert_eq!(grid.len(), 5);
        let selected: Vec<i64> = grid.tiles().iter().filter(|t| t.is_selected()).map(|t| t.id).collect();
        assert_eq!(selected, vec![2, 5]);
        for id in [1, 3, 4] {
            assert!(!grid.tile(id).unwrap().is_selected());
        }
    }

    #[test]
    fn test_tiles_keep_catalog_order() {
        let grid = build(&catalog(&[9, 1, 4]), &SelectionSet::new());
        let ids: Vec<i64> = grid.tiles().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![9, 1, 4]);
        assert_eq!(grid.tiles()[0].label, "Cat 9");
    }

    #[test]
    fn test_empty_catalog_renders_nothing() {
        let selection: SelectionSet = [1].into_iter().collect();
        let grid = build(&[], &selection);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_orphan_selection_renders_nothing() {
        let selection: SelectionSet = [2, 99].into_iter().collect();
        let grid = build(&catalog(&[1, 2]), &selection);

        assert_eq!(grid.len(), 2);
        assert!(grid.tile(99).is_none());
        assert_eq!(grid.selected_count(), 1);
        assert_eq!(selection.snapshot(), vec![2, 99]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let cats = catalog(&[1, 2, 3]);
        let selection: SelectionSet = [3].into_iter().collect();
        let renderer = GridRenderer::new(FALLBACK);

        let mut grid = CategoryGrid::default();
        renderer.rebuild(&mut grid, &cats, &selection);
        let first = grid.tiles().to_vec();
        renderer.rebuild(&mut grid, &cats, &selection);

        assert_eq!(grid.tiles(), first.as_slice());
    }

    #[test]
    fn test_activate_updates_selection_and_tile() {
        let cats = catalog(&[1, 2, 3]);
        let mut selection: SelectionSet = [2].into_iter().collect();
        let mut grid = build(&cats, &selection);

        assert_eq!(grid.activate(1, &mut selection), Some(true));
        assert!(selection.contains(1));
        assert!(grid.tile(1).unwrap().is_selected());

        assert_eq!(grid.activate(2, &mut selection), Some(false));
        assert!(!selection.contains(2));
        assert!(!grid.tile(2).unwrap().is_selected());

        // Every tile agrees with the set after clicks
        for tile in grid.tiles() {
            assert_eq!(tile.is_selected(), selection.contains(tile.id));
        }
    }

    #[test]
    fn test_activate_unknown_id_leaves_selection_alone() {
        let mut selection: SelectionSet = [7].into_iter().collect();
        let mut grid = build(&catalog(&[1]), &selection);

        assert_eq!(grid.activate(7, &mut selection), None);
        assert!(selection.contains(7));
    }

    #[test]
    fn test_duplicate_catalog_ids_share_state() {
        let mut cats = catalog(&[1, 2]);
        cats.push(MasterCategory::new(1, "Cat 1 bis", "https://cdn.test/1b.png"));
        let mut selection = SelectionSet::new();
        let mut grid = build(&cats, &selection);

        grid.activate(1, &mut selection);
        assert!(grid.tiles()[0].is_selected());
        assert!(grid.tiles()[2].is_selected());
    }

    #[test]
    fn test_tile_presentation() {
        let selection: SelectionSet = [1].into_iter().collect();
        let grid = build(&catalog(&[1, 2]), &selection);

        let on = grid.tile(1).unwrap();
        assert_eq!(on.class_name(), "categoria-item seleccionada");
        assert!(on.check_mark_visible());

        let off = grid.tile(2).unwrap();
        assert_eq!(off.class_name(), "categoria-item");
        assert!(!off.check_mark_visible());
    }

    #[test]
    fn test_icon_falls_back_after_load_failure() {
        let mut selection = SelectionSet::new();
        let mut grid = build(&catalog(&[1]), &selection);

        let tile = grid.tile_mut(1).unwrap();
        assert_eq!(tile.icon.current_src(), "https://cdn.test/1.png");
        tile.icon.mark_failed();
        assert_eq!(tile.icon.current_src(), FALLBACK);

        // Toggling does not reset the icon state
        grid.activate(1, &mut selection);
        assert!(grid.tile(1).unwrap().icon.has_failed());
    }

    #[test]
    fn test_empty_icon_url_uses_fallback() {
        let icon = TileIcon::new("", FALLBACK);
        assert_eq!(icon.current_src(), FALLBACK);
    }
}
