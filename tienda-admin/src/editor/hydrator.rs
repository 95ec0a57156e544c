//! Store profile hydration
//!
//! `Idle -> Loading -> Ready | Failed`. The three fetches run concurrently and
//! are always joined before branching, so a late failure is never masked by
//! an early success and no partial form is ever shown.

use shared::{CategoryAssignment, MasterCategory, StoreProfile};

use super::form::ProfileForm;
use super::grid::{CategoryGrid, GridRenderer};
use super::host::{EditorHost, ToastKind};
use super::selection::SelectionSet;
use super::session::EditSession;
use super::source::StoreDataSource;
use super::truthiness;
use crate::error::{HydrationError, HydrationResult, Resource};

/// Toast title on load failure
pub const LOAD_ERROR_TITLE: &str = "Error";
/// Toast message on load failure
pub const LOAD_ERROR_MESSAGE: &str = "No se pudieron cargar los datos";

/// Lifecycle of the current edit invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HydrationState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// The three payloads of a successful join
struct Loaded {
    store: StoreProfile,
    assignments: Vec<CategoryAssignment>,
    catalog: Vec<MasterCategory>,
}

/// Opens stores for editing
pub struct ProfileEditor<S, H> {
    source: S,
    host: H,
    renderer: GridRenderer,
    state: HydrationState,
    session: Option<EditSession>,
    errors: Vec<HydrationError>,
}

impl<S, H> ProfileEditor<S, H>
where
    S: StoreDataSource,
    H: EditorHost,
{
    pub fn new(source: S, host: H, renderer: GridRenderer) -> Self {
        Self {
            source,
            host,
            renderer,
            state: HydrationState::Idle,
            session: None,
            errors: Vec::new(),
        }
    }

    pub fn state(&self) -> HydrationState {
        self.state
    }

    /// Current session, present only in [`HydrationState::Ready`]
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Mutable session for UI event adapters (tile clicks, icon errors)
    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    /// Failures of the last invocation
    pub fn errors(&self) -> &[HydrationError] {
        &self.errors
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Close the modal and drop the session
    pub fn close(&mut self) {
        self.session = None;
        self.errors.clear();
        self.state = HydrationState::Idle;
    }

    /// Load store `store_id` and open it in the edit modal.
    ///
    /// Completion is observed through the host: either `reveal` or a single
    /// error toast.
    pub async fn edit_profile(&mut self, store_id: i64) {
        self.close();
        self.state = HydrationState::Loading;
        self.host.show_loading();
        tracing::info!(store_id, "Loading store for editing");

        let loaded = self.load(store_id).await;
        match loaded {
            Ok(loaded) => self.finish_ready(loaded),
            Err(errors) => self.finish_failed(store_id, errors),
        }
    }

    /// Fan out the three fetches and wait for all of them
    async fn load(&self, store_id: i64) -> HydrationResult<Loaded> {
        let (store, assignments, catalog) = tokio::join!(
            self.source.fetch_store(store_id),
            self.source.fetch_assignments(store_id),
            self.source.fetch_master_categories(),
        );

        let mut errors = Vec::new();
        let store = store
            .map_err(|e| errors.push(HydrationError::load(Resource::Store, e)))
            .ok();
        let assignments = assignments
            .map_err(|e| errors.push(HydrationError::load(Resource::Assignments, e)))
            .ok();
        let catalog = catalog
            .map_err(|e| errors.push(HydrationError::load(Resource::MasterCategories, e)))
            .ok();

        match (store, assignments, catalog) {
            (Some(store), Some(assignments), Some(catalog)) => Ok(Loaded {
                store,
                assignments,
                catalog,
            }),
            _ => Err(errors),
        }
    }

    fn finish_ready(&mut self, loaded: Loaded) {
        let Loaded {
            store,
            assignments,
            catalog,
        } = loaded;

        self.host.hide_loading();

        let form = ProfileForm::from_profile(&store);
        self.host.set_logo_preview(&form.logo_url);
        self.host.set_banner_preview(&form.banner_url);

        let selection = initial_selection(&assignments);

        let mut grid = CategoryGrid::default();
        self.renderer
            .render(&mut grid, &catalog, &selection, &mut self.host);

        tracing::info!(
            store_id = form.id,
            master = catalog.len(),
            assigned = selection.len(),
            "Store ready for editing"
        );

        let session = EditSession::new(form, selection, grid);
        self.host.reveal(&session);
        self.session = Some(session);
        self.state = HydrationState::Ready;
    }

    fn finish_failed(&mut self, store_id: i64, errors: Vec<HydrationError>) {
        self.host.hide_loading();
        for error in &errors {
            tracing::warn!(store_id, resource = %error.resource(), error = %error, "Store load failed");
        }
        self.host
            .notify(ToastKind::Error, LOAD_ERROR_TITLE, LOAD_ERROR_MESSAGE);
        self.errors = errors;
        self.state = HydrationState::Failed;
    }
}

/// Selection built from the rows whose `asignada` flag is set
pub fn initial_selection(assignments: &[CategoryAssignment]) -> SelectionSet {
    let selection: SelectionSet = assignments
        .iter()
        .filter(|row| truthiness::is_assigned(&row.asignada))
        .map(|row| row.id)
        .collect();

    tracing::debug!(
        rows = assignments.len(),
        assigned = ?selection.snapshot(),
        "Assigned categories normalized"
    );
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_selection_filters_by_flag() {
        let rows = vec![
            CategoryAssignment::new(1, 1),
            CategoryAssignment::new(2, 0),
            CategoryAssignment::new(3, true),
            CategoryAssignment::new(4, false),
            CategoryAssignment::new(5, "1"),
            CategoryAssignment::new(6, "0"),
            CategoryAssignment::new(7, json!(null)),
        ];

        let selection = initial_selection(&rows);
        assert_eq!(selection.snapshot(), vec![1, 3, 5]);
    }

    #[test]
    fn test_initial_selection_empty() {
        assert!(initial_selection(&[]).is_empty());
    }
}
