//! List presenter coordinating the itinerary board.
//!
//! The presenter owns the full point set (`points`), the current filter and
//! sort, and the derived projection (`list_points`). It mounts the sort and
//! filter controls, one [`PointPresenter`] per visible point, and the
//! filter-specific empty-list message.
//!
//! # Invariants
//!
//! - `points` holds the full set after the most recent external change, kept
//!   in the order of the last render cycle.
//! - After every render cycle `list_points == filter(sort(points, sort), filter)`.
//!   Points with equal keys keep the order they were last shown in.
//! - At most one item controller is in edit mode.
//! - Choosing the current filter or sort again changes nothing and mounts nothing.
//!
//! A data change repaints only the changed row; it does not re-filter or
//! re-sort the list.

use crate::app::point_presenter::{ItemInput, ItemSignal, PointPresenter};
use crate::domain::{
    filter_points, generate_filters, sort_points, FilterEntry, FilterType, Point, PointId,
    SortType,
};
use crate::model::PointsModel;
use crate::ui::component::{self, Component};
use crate::ui::surface::{NodeId, RenderPosition, Surface};
use crate::ui::views::{EmptyListMessageView, FilterView, PointListView, SortView};
use std::collections::HashMap;

pub struct ListPresenter {
    list_container: NodeId,
    filters_container: NodeId,
    model: PointsModel,

    point_list: Component<PointListView>,
    sort_component: Component<SortView>,
    filter_component: Option<Component<FilterView>>,
    message_component: Option<Component<EmptyListMessageView>>,

    points: Vec<Point>,
    list_points: Vec<Point>,
    presenters: HashMap<PointId, PointPresenter>,
    current_filter: FilterType,
    current_sort: SortType,
}

impl ListPresenter {
    /// Creates a presenter rendering rows into `list_container` and the filter
    /// control into `filters_container`. Nothing is mounted until
    /// [`ListPresenter::init`].
    #[must_use]
    pub fn new(list_container: NodeId, filters_container: NodeId, model: PointsModel) -> Self {
        Self {
            list_container,
            filters_container,
            model,
            point_list: Component::new(PointListView),
            sort_component: Component::new(SortView::default()),
            filter_component: None,
            message_component: None,
            points: Vec::new(),
            list_points: Vec::new(),
            presenters: HashMap::new(),
            current_filter: FilterType::default(),
            current_sort: SortType::default(),
        }
    }

    /// Starts from `filter` and `sort` instead of Everything/Day.
    #[must_use]
    pub fn with_initial(mut self, filter: FilterType, sort: SortType) -> Self {
        self.current_filter = filter;
        self.current_sort = sort;
        self.sort_component.view_mut().set_current(sort);
        self
    }

    /// Loads the model's points and renders the board: sort control first in
    /// the list container, filter control, then the list.
    pub fn init(&mut self, surface: &mut Surface) {
        let _span =
            tracing::info_span!("list_init", points = self.model.points().len()).entered();

        self.points = self.model.points().to_vec();
        self.list_points = self.points.clone();

        self.render_sort(surface);
        self.render_filters(surface);
        self.render_list(surface);
    }

    fn render_sort(&mut self, surface: &mut Surface) {
        component::render(
            surface,
            &mut self.sort_component,
            self.list_container,
            RenderPosition::AfterBegin,
        );
    }

    fn render_filters(&mut self, surface: &mut Surface) {
        let filters = generate_filters(&self.points);
        let mut filter_component = Component::new(FilterView::new(filters, self.current_filter));
        component::render(
            surface,
            &mut filter_component,
            self.filters_container,
            RenderPosition::BeforeEnd,
        );
        self.filter_component = Some(filter_component);
    }

    /// Mounts the list element and rebuilds the projection.
    ///
    /// The store is sorted first, so the projection inherits the order and
    /// ties keep their previous positions. A non-empty projection gets one
    /// controller per point. An empty one gets the message for the current
    /// filter, and the sort control is hidden while it shows.
    fn render_list(&mut self, surface: &mut Surface) {
        let _span = tracing::debug_span!(
            "render_list",
            filter = self.current_filter.name(),
            sort = self.current_sort.name()
        )
        .entered();

        let list_element = self.point_list.element(surface);
        component::render(
            surface,
            &mut self.point_list,
            self.list_container,
            RenderPosition::BeforeEnd,
        );

        sort_points(&mut self.points, self.current_sort);
        self.list_points = filter_points(&self.points, self.current_filter);

        if self.list_points.is_empty() {
            self.render_list_message(surface, list_element);
            self.set_sort_hidden(surface, true);
            tracing::debug!("list is empty");
            return;
        }

        self.remove_list_message(surface);
        self.set_sort_hidden(surface, false);

        for point in &self.list_points {
            let mut presenter = PointPresenter::new(list_element);
            presenter.init(surface, point, &self.model);
            self.presenters.insert(point.id.clone(), presenter);
        }

        tracing::debug!(rendered = self.presenters.len(), "list rendered");
    }

    fn render_list_message(&mut self, surface: &mut Surface, list_element: NodeId) {
        self.remove_list_message(surface);
        let mut message = Component::new(EmptyListMessageView::new(self.current_filter));
        component::render(surface, &mut message, list_element, RenderPosition::BeforeEnd);
        self.message_component = Some(message);
    }

    fn remove_list_message(&mut self, surface: &mut Surface) {
        if let Some(mut message) = self.message_component.take() {
            component::remove(surface, &mut message);
        }
    }

    fn set_sort_hidden(&self, surface: &mut Surface, hidden: bool) {
        if let Some(element) = self.sort_component.element_id() {
            surface.set_hidden(element, hidden);
        }
    }

    /// Destroys every item controller.
    pub fn clear_point_list(&mut self, surface: &mut Surface) {
        for presenter in self.presenters.values_mut() {
            presenter.destroy(surface);
        }
        self.presenters.clear();
    }

    /// Replaces the record with `updated.id` and repaints only its row.
    ///
    /// Returns `false` and changes nothing when no stored point has that id.
    pub fn handle_point_change(&mut self, surface: &mut Surface, updated: &Point) -> bool {
        let _span = tracing::debug_span!("point_change", point_id = %updated.id).entered();

        let Some(stored) = self.points.iter_mut().find(|point| point.id == updated.id) else {
            tracing::debug!("unknown point, change dropped");
            return false;
        };
        stored.clone_from(updated);

        if let Some(listed) = self.list_points.iter_mut().find(|point| point.id == updated.id) {
            listed.clone_from(updated);
        }
        if let Some(presenter) = self.presenters.get_mut(&updated.id) {
            presenter.init(surface, updated, &self.model);
        }
        true
    }

    /// Resets every controller except `editing` to display mode.
    pub fn handle_mode_change(&mut self, surface: &mut Surface, editing: &PointId) {
        for (id, presenter) in &mut self.presenters {
            if id != editing {
                presenter.reset_view(surface, &self.model);
            }
        }
    }

    /// Switches the ordering. Returns `false` for the current sort.
    pub fn handle_sort_type_change(&mut self, surface: &mut Surface, sort: SortType) -> bool {
        if self.current_sort == sort {
            return false;
        }
        tracing::debug!(from = self.current_sort.name(), to = sort.name(), "sort changed");

        self.current_sort = sort;
        self.sort_component.view_mut().set_current(sort);
        self.sort_component.refresh(surface);

        self.clear_point_list(surface);
        self.render_list(surface);
        true
    }

    /// Switches the time window. Returns `false` for the current filter.
    pub fn handle_filter_type_change(&mut self, surface: &mut Surface, filter: FilterType) -> bool {
        if self.current_filter == filter {
            return false;
        }
        tracing::debug!(from = self.current_filter.name(), to = filter.name(), "filter changed");

        self.current_filter = filter;
        if let Some(filter_component) = self.filter_component.as_mut() {
            filter_component.view_mut().set_current(filter);
            filter_component.refresh(surface);
        }

        self.clear_point_list(surface);
        self.render_list(surface);
        true
    }

    /// Routes a key to the sort control. Returns `true` if the list changed.
    pub fn handle_sort_input(&mut self, surface: &mut Surface, key: char) -> bool {
        self.sort_component
            .on_key(key)
            .is_some_and(|sort| self.handle_sort_type_change(surface, sort))
    }

    /// Routes a key to the filter control. Returns `true` if the list changed.
    pub fn handle_filter_input(&mut self, surface: &mut Surface, key: char) -> bool {
        self.filter_component
            .as_ref()
            .and_then(|filter_component| filter_component.on_key(key))
            .is_some_and(|filter| self.handle_filter_type_change(surface, filter))
    }

    /// Routes `input` to the controller of `id` and reacts to its signal.
    ///
    /// Returns the replacement record when a data change was applied, so the
    /// caller can persist it.
    pub fn handle_item_input(
        &mut self,
        surface: &mut Surface,
        id: &PointId,
        input: ItemInput,
    ) -> Option<Point> {
        let presenter = self.presenters.get_mut(id)?;
        match presenter.handle_input(surface, &self.model, input)? {
            ItemSignal::ModeChange => {
                self.handle_mode_change(surface, id);
                None
            }
            ItemSignal::DataChange(updated) => self
                .handle_point_change(surface, &updated)
                .then_some(updated),
        }
    }

    /// Full point set, in the order of the last render cycle.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Visible points in display order.
    #[must_use]
    pub fn list_points(&self) -> &[Point] {
        &self.list_points
    }

    #[must_use]
    pub const fn current_filter(&self) -> FilterType {
        self.current_filter
    }

    #[must_use]
    pub const fn current_sort(&self) -> SortType {
        self.current_sort
    }

    #[must_use]
    pub fn filter_entries(&self) -> &[FilterEntry] {
        self.filter_component
            .as_ref()
            .map_or(&[], |filter_component| filter_component.view().entries())
    }

    /// Id of the point whose editor is open.
    #[must_use]
    pub fn editing_point(&self) -> Option<&PointId> {
        self.presenters
            .iter()
            .find(|(_, presenter)| presenter.mode().is_editing())
            .map(|(id, _)| id)
    }

    /// Ids with a mounted controller, in display order.
    #[must_use]
    pub fn active_ids(&self) -> Vec<PointId> {
        self.list_points
            .iter()
            .filter(|point| self.presenters.contains_key(&point.id))
            .map(|point| point.id.clone())
            .collect()
    }

    /// Node currently mounted for `id`.
    #[must_use]
    pub fn element_of(&self, id: &PointId) -> Option<NodeId> {
        self.presenters.get(id).and_then(PointPresenter::element)
    }

    /// Node of the list element.
    #[must_use]
    pub const fn list_element(&self) -> Option<NodeId> {
        self.point_list.element_id()
    }

    #[must_use]
    pub const fn sort_element(&self) -> Option<NodeId> {
        self.sort_component.element_id()
    }

    /// Node of the empty-list message, when one is shown.
    #[must_use]
    pub fn message_element(&self) -> Option<NodeId> {
        self.message_component.as_ref().and_then(Component::element_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DestinationId, PointType};
    use chrono::{Duration, Utc};

    fn point(id: &str, days_from_now: i64, price: u32) -> Point {
        let date_from = Utc::now() + Duration::days(days_from_now);
        Point {
            id: PointId::from(id),
            point_type: PointType::Restaurant,
            date_from,
            date_to: date_from + Duration::hours(2),
            base_price: price,
            destination: DestinationId::from("x"),
            offers: vec![],
            is_favorite: false,
        }
    }

    fn board(points: Vec<Point>) -> (Surface, ListPresenter) {
        let mut surface = Surface::new();
        let root = surface.root();
        let filters = surface.create_container(root);
        let list = surface.create_container(root);
        let model = PointsModel::new(points, Vec::new(), Vec::new());
        let mut presenter = ListPresenter::new(list, filters, model);
        presenter.init(&mut surface);
        (surface, presenter)
    }

    fn ids(points: &[Point]) -> Vec<&str> {
        points.iter().map(|p| p.id.0.as_str()).collect()
    }

    #[test]
    fn init_sorts_by_day_and_mounts_every_point() {
        let (surface, presenter) =
            board(vec![point("b", 3, 10), point("a", -3, 20), point("c", 5, 5)]);

        assert_eq!(ids(presenter.list_points()), vec!["a", "b", "c"]);
        assert_eq!(presenter.active_ids().len(), 3);
        let list = presenter.list_element().unwrap();
        assert_eq!(surface.children(list).len(), 3);
        assert!(presenter.message_element().is_none());
    }

    #[test]
    fn sort_control_is_prepended_to_the_list_container() {
        let (surface, presenter) = board(vec![point("a", 1, 10)]);
        let sort = presenter.sort_element().unwrap();
        let container = surface.parent(sort).unwrap();
        assert_eq!(surface.children(container)[0], sort);
        assert_eq!(surface.children(container)[1], presenter.list_element().unwrap());
    }

    #[test]
    fn price_sort_reorders_rows() {
        let (mut surface, mut presenter) =
            board(vec![point("a", 1, 30), point("b", 2, 10), point("c", 3, 20)]);

        assert!(presenter.handle_sort_input(&mut surface, '$'));

        assert_eq!(presenter.current_sort(), SortType::Price);
        assert_eq!(ids(presenter.list_points()), vec!["b", "c", "a"]);
        let list = presenter.list_element().unwrap();
        let order: Vec<NodeId> = presenter
            .active_ids()
            .iter()
            .filter_map(|id| presenter.element_of(id))
            .collect();
        assert_eq!(surface.children(list), order.as_slice());
    }

    #[test]
    fn price_sort_starts_from_the_day_order() {
        let (mut surface, mut presenter) = board(vec![point("late", 5, 10), point("early", 1, 10)]);
        assert_eq!(ids(presenter.list_points()), vec!["early", "late"]);

        assert!(presenter.handle_sort_type_change(&mut surface, SortType::Price));

        assert_eq!(ids(presenter.list_points()), vec!["early", "late"]);
        assert_eq!(ids(presenter.points()), vec!["early", "late"]);
    }

    #[test]
    fn only_one_controller_edits_at_a_time() {
        let (mut surface, mut presenter) = board(vec![point("a", 1, 10), point("b", 2, 10)]);
        let a = PointId::from("a");
        let b = PointId::from("b");

        presenter.handle_item_input(&mut surface, &a, ItemInput::RollupClick);
        assert_eq!(presenter.editing_point(), Some(&a));

        presenter.handle_item_input(&mut surface, &b, ItemInput::RollupClick);
        assert_eq!(presenter.editing_point(), Some(&b));
        let editing = presenter
            .active_ids()
            .iter()
            .filter(|id| presenter.editing_point() == Some(*id))
            .count();
        assert_eq!(editing, 1);
    }

    #[test]
    fn disabled_filter_key_changes_nothing() {
        let (mut surface, mut presenter) = board(vec![point("a", 1, 10)]);
        let renders = surface.render_count();

        assert!(!presenter.handle_filter_input(&mut surface, 'P'));

        assert_eq!(presenter.current_filter(), FilterType::Everything);
        assert_eq!(surface.render_count(), renders);
    }

    #[test]
    fn empty_list_hides_sort_and_back() {
        let (mut surface, mut presenter) = board(vec![point("past", -2, 10), point("soon", 2, 10)]);
        let sort = presenter.sort_element().unwrap();

        presenter.handle_filter_type_change(&mut surface, FilterType::Present);
        assert!(surface.is_hidden(sort));
        assert!(presenter.message_element().is_some());

        presenter.handle_filter_type_change(&mut surface, FilterType::Past);
        assert!(!surface.is_hidden(sort));
        assert!(presenter.message_element().is_none());
        assert_eq!(ids(presenter.list_points()), vec!["past"]);
    }

    #[test]
    fn consecutive_empty_filters_keep_a_single_message() {
        let (mut surface, mut presenter) = board(vec![point("soon", 2, 10)]);

        presenter.handle_filter_type_change(&mut surface, FilterType::Past);
        presenter.handle_filter_type_change(&mut surface, FilterType::Present);

        let list = presenter.list_element().unwrap();
        assert_eq!(surface.children(list).len(), 1);
        let message = presenter.message_element().unwrap();
        assert_eq!(surface.text(message).trim(), "There are no present events now");
    }

    #[test]
    fn initial_filter_and_sort_apply_on_init() {
        let mut surface = Surface::new();
        let root = surface.root();
        let filters = surface.create_container(root);
        let list = surface.create_container(root);
        let model = PointsModel::new(
            vec![point("old", -4, 10), point("cheap", 4, 10), point("dear", 3, 99)],
            Vec::new(),
            Vec::new(),
        );
        let mut presenter = ListPresenter::new(list, filters, model)
            .with_initial(FilterType::Future, SortType::Price);

        presenter.init(&mut surface);

        assert_eq!(ids(presenter.list_points()), vec!["cheap", "dear"]);
        assert_eq!(ids(presenter.points()).len(), 3);
    }
}
