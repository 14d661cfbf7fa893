//! Application state and frame computation.
//!
//! [`AppState`] owns the render surface, the list presenter (created once the
//! trip has loaded), the selected point, and the last error shown in the
//! footer. The surface starts with two containers under the root: the filter
//! control's container, then the list container.

use crate::app::list_presenter::ListPresenter;
use crate::domain::{FilterType, Point, PointId, SortType};
use crate::infrastructure::strip_host_prefix;
use crate::model::PointsModel;
use crate::storage::TripData;
use crate::ui::components::CHROME_ROWS;
use crate::ui::surface::{NodeId, Surface};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyLine, FooterInfo, HeaderInfo, LoadingState, UIViewModel};
use std::path::PathBuf;

const BROWSE_KEYS: &str =
    "j/k: move | Enter: edit | f: favorite | d/t/$: sort | E/P/N/F: filter | q: quit";
const EDIT_KEYS: &str = "1-9: offer | f: favorite | Enter: save | Esc: close";

pub struct AppState {
    pub surface: Surface,

    /// `None` until the first trip arrives from the worker.
    pub presenter: Option<ListPresenter>,

    /// Point whose row keyboard input goes to.
    pub selected: Option<PointId>,

    pub theme: Theme,

    pub trip_path: PathBuf,

    pub initial_filter: FilterType,

    pub initial_sort: SortType,

    /// Last storage or worker failure, cleared by the next successful load.
    pub last_error: Option<String>,

    filters_container: NodeId,
    list_container: NodeId,
}

impl AppState {
    #[must_use]
    pub fn new(trip_path: PathBuf, theme: Theme) -> Self {
        let mut surface = Surface::new();
        let root = surface.root();
        let filters_container = surface.create_container(root);
        let list_container = surface.create_container(root);

        Self {
            surface,
            presenter: None,
            selected: None,
            theme,
            trip_path,
            initial_filter: FilterType::default(),
            initial_sort: SortType::default(),
            last_error: None,
            filters_container,
            list_container,
        }
    }

    /// Filter and sort the board starts with.
    #[must_use]
    pub const fn with_initial(mut self, filter: FilterType, sort: SortType) -> Self {
        self.initial_filter = filter;
        self.initial_sort = sort;
        self
    }

    /// Trip path as sent to the worker.
    #[must_use]
    pub fn trip_path_string(&self) -> String {
        self.trip_path.to_string_lossy().into_owned()
    }

    /// Builds the presenter from `trip` and renders the board.
    ///
    /// The presenter is initialized once; later trips are ignored and `false`
    /// is returned.
    pub fn load_trip(&mut self, trip: TripData) -> bool {
        if self.presenter.is_some() {
            tracing::debug!("board already initialized, ignoring trip");
            return false;
        }

        let model = PointsModel::from_trip(trip);
        let mut presenter = ListPresenter::new(self.list_container, self.filters_container, model)
            .with_initial(self.initial_filter, self.initial_sort);
        presenter.init(&mut self.surface);

        self.presenter = Some(presenter);
        self.sync_selection();
        true
    }

    /// Ids of the rows that can be selected, in display order.
    fn selectable_ids(&self) -> Vec<PointId> {
        self.presenter
            .as_ref()
            .map_or_else(Vec::new, ListPresenter::active_ids)
    }

    /// Keeps the selection on a visible row, falling back to the first one.
    pub fn sync_selection(&mut self) {
        let ids = self.selectable_ids();
        let still_visible = self.selected.as_ref().is_some_and(|id| ids.contains(id));
        if !still_visible {
            self.selected = ids.into_iter().next();
        }
    }

    pub fn move_selection_down(&mut self) {
        self.step_selection(true);
    }

    pub fn move_selection_up(&mut self) {
        self.step_selection(false);
    }

    fn step_selection(&mut self, forward: bool) {
        let ids = self.selectable_ids();
        if ids.is_empty() {
            self.selected = None;
            return;
        }

        let current = self
            .selected
            .as_ref()
            .and_then(|selected| ids.iter().position(|id| id == selected));

        let next = match (current, forward) {
            (None, _) => 0,
            (Some(index), true) => (index + 1) % ids.len(),
            (Some(0), false) => ids.len() - 1,
            (Some(index), false) => index - 1,
        };
        self.selected = ids.into_iter().nth(next);
    }

    /// The selected point as currently stored.
    #[must_use]
    pub fn selected_point(&self) -> Option<&Point> {
        let selected = self.selected.as_ref()?;
        self.presenter
            .as_ref()?
            .points()
            .iter()
            .find(|point| &point.id == selected)
    }

    /// Whether any row has its editor open.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.presenter
            .as_ref()
            .is_some_and(|presenter| presenter.editing_point().is_some())
    }

    /// Computes the frame for a `rows` × `cols` pane.
    ///
    /// The body is the window of surface lines that fits between the chrome,
    /// centered on the selected row when the board is taller than the pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = self.compute_footer();

        let Some(presenter) = self.presenter.as_ref() else {
            return UIViewModel {
                header,
                body: vec![],
                footer,
                loading: Some(LoadingState {
                    message: "Loading trip…".to_string(),
                    subtitle: strip_host_prefix(&self.trip_path_string()),
                }),
            };
        };

        let selected_element = self
            .selected
            .as_ref()
            .and_then(|id| presenter.element_of(id));

        let lines = self.surface.visible_lines();
        let marked: Vec<BodyLine> = lines
            .into_iter()
            .map(|(node, line)| BodyLine {
                line: line.clone(),
                is_selected: selected_element
                    .is_some_and(|element| self.surface.is_within(node, element)),
            })
            .collect();

        let available_rows = rows.saturating_sub(CHROME_ROWS);
        let anchor = marked.iter().position(|line| line.is_selected).unwrap_or(0);

        let mut visible_start = anchor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(marked.len());
        if visible_end - visible_start < available_rows && marked.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        UIViewModel {
            header,
            body: marked[visible_start..visible_end].to_vec(),
            footer,
            loading: None,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let trip = strip_host_prefix(&self.trip_path_string());
        let subtitle = self.presenter.as_ref().map_or_else(
            || trip.clone(),
            |presenter| {
                format!(
                    "{trip} · {} of {} points · {} · by {}",
                    presenter.list_points().len(),
                    presenter.points().len(),
                    presenter.current_filter().label(),
                    presenter.current_sort().name(),
                )
            },
        );

        HeaderInfo {
            title: "Tripboard".to_string(),
            subtitle,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        FooterInfo {
            keybindings: if self.is_editing() { EDIT_KEYS } else { BROWSE_KEYS }.to_string(),
            error: self.last_error.clone(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("trip_path", &self.trip_path)
            .field("loaded", &self.presenter.is_some())
            .field("selected", &self.selected)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
