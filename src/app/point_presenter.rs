//! Item controller owning one point's row.
//!
//! A [`PointPresenter`] keeps two components for its point: the collapsed
//! [`PointView`] and the [`PointEditView`]. Exactly one of them is mounted in
//! the list element, depending on the [`Mode`]. Inputs arrive as
//! [`ItemInput`]s and the controller answers with an optional [`ItemSignal`]
//! for the list presenter.

use crate::app::modes::Mode;
use crate::domain::{Point, PointId};
use crate::model::PointsModel;
use crate::ui::component::{self, Component};
use crate::ui::surface::{NodeId, RenderPosition, Surface};
use crate::ui::views::{PointEditView, PointView};

/// Input routed to one item controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemInput {
    /// Expand the row, or collapse it when editing.
    RollupClick,
    FavoriteClick,
    /// Toggle the offer at this 0-based catalog index in the editor draft.
    ToggleOffer(usize),
    /// Save the editor draft.
    Submit,
    /// Close the editor without saving.
    Escape,
}

/// Notification from an item controller to the list presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSignal {
    /// Replacement record for the controller's point.
    DataChange(Point),
    /// The controller entered edit mode.
    ModeChange,
}

#[derive(Debug)]
pub struct PointPresenter {
    container: NodeId,
    point: Option<Point>,
    point_component: Option<Component<PointView>>,
    edit_component: Option<Component<PointEditView>>,
    mode: Mode,
}

impl PointPresenter {
    /// Creates a controller that mounts rows into `container`.
    #[must_use]
    pub const fn new(container: NodeId) -> Self {
        Self {
            container,
            point: None,
            point_component: None,
            edit_component: None,
            mode: Mode::Default,
        }
    }

    /// (Re)builds both views from `point`.
    ///
    /// The first call appends the row to the container. Later calls swap the
    /// fresh view into the slot of the current one, keeping the mode, and drop
    /// the previous components.
    pub fn init(&mut self, surface: &mut Surface, point: &Point, model: &PointsModel) {
        let _span = tracing::trace_span!("point_presenter_init", point_id = %point.id).entered();

        let mut point_component = Component::new(PointView::new(point, model));
        let mut edit_component = Component::new(PointEditView::new(point, model));

        match (self.point_component.take(), self.edit_component.take()) {
            (Some(mut prev_point), Some(mut prev_edit)) => {
                match self.mode {
                    Mode::Default => {
                        component::replace(surface, &mut point_component, &mut prev_point);
                    }
                    Mode::Editing => {
                        component::replace(surface, &mut edit_component, &mut prev_edit);
                    }
                }
                component::remove(surface, &mut prev_point);
                component::remove(surface, &mut prev_edit);
            }
            (prev_point, prev_edit) => {
                if let Some(mut prev) = prev_point {
                    component::remove(surface, &mut prev);
                }
                if let Some(mut prev) = prev_edit {
                    component::remove(surface, &mut prev);
                }
                self.mode = Mode::Default;
                component::render(
                    surface,
                    &mut point_component,
                    self.container,
                    RenderPosition::BeforeEnd,
                );
            }
        }

        self.point = Some(point.clone());
        self.point_component = Some(point_component);
        self.edit_component = Some(edit_component);
    }

    /// Returns to display mode, discarding the editor draft. No-op when not editing.
    pub fn reset_view(&mut self, surface: &mut Surface, model: &PointsModel) {
        if self.mode.is_editing() {
            self.replace_form_to_card(surface, model);
        }
    }

    /// Removes both views from the surface.
    pub fn destroy(&mut self, surface: &mut Surface) {
        if let Some(mut point_component) = self.point_component.take() {
            component::remove(surface, &mut point_component);
        }
        if let Some(mut edit_component) = self.edit_component.take() {
            component::remove(surface, &mut edit_component);
        }
        self.mode = Mode::Default;
    }

    /// Applies `input` and reports what the list presenter must do.
    pub fn handle_input(
        &mut self,
        surface: &mut Surface,
        model: &PointsModel,
        input: ItemInput,
    ) -> Option<ItemSignal> {
        let point = self.point.clone()?;
        let _span = tracing::debug_span!(
            "point_input",
            point_id = %point.id,
            input = ?input,
            mode = ?self.mode
        )
        .entered();

        match (self.mode, input) {
            (_, ItemInput::FavoriteClick) => {
                Some(ItemSignal::DataChange(point.with_favorite_toggled()))
            }
            (Mode::Default, ItemInput::RollupClick) => {
                self.replace_card_to_form(surface);
                Some(ItemSignal::ModeChange)
            }
            (Mode::Editing, ItemInput::RollupClick | ItemInput::Escape) => {
                self.replace_form_to_card(surface, model);
                None
            }
            (Mode::Editing, ItemInput::ToggleOffer(index)) => {
                let edit = self.edit_component.as_mut()?;
                if edit.view_mut().toggle_offer(index) {
                    edit.refresh(surface);
                }
                None
            }
            (Mode::Editing, ItemInput::Submit) => {
                let draft = self.edit_component.as_ref()?.view().draft().clone();
                self.replace_form_to_card(surface, model);
                (draft != point).then_some(ItemSignal::DataChange(draft))
            }
            (Mode::Default, ItemInput::ToggleOffer(_) | ItemInput::Submit | ItemInput::Escape) => {
                None
            }
        }
    }

    fn replace_card_to_form(&mut self, surface: &mut Surface) {
        if let (Some(card), Some(form)) =
            (self.point_component.as_mut(), self.edit_component.as_mut())
        {
            component::replace(surface, form, card);
            self.mode = Mode::Editing;
        }
    }

    /// Swaps the card back in with a fresh editor so the next expand starts
    /// from the stored record.
    fn replace_form_to_card(&mut self, surface: &mut Surface, model: &PointsModel) {
        let (Some(point), Some(card), Some(form)) = (
            self.point.as_ref(),
            self.point_component.as_mut(),
            self.edit_component.as_mut(),
        ) else {
            return;
        };

        component::replace(surface, card, form);
        component::remove(surface, form);
        *form = Component::new(PointEditView::new(point, model));
        self.mode = Mode::Default;
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn point(&self) -> Option<&Point> {
        self.point.as_ref()
    }

    #[must_use]
    pub fn point_id(&self) -> Option<&PointId> {
        self.point.as_ref().map(|point| &point.id)
    }

    /// Node currently mounted for this point.
    #[must_use]
    pub fn element(&self) -> Option<NodeId> {
        match self.mode {
            Mode::Default => self.point_component.as_ref().and_then(Component::element_id),
            Mode::Editing => self.edit_component.as_ref().and_then(Component::element_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DestinationId, Offer, OfferGroup, OfferId, PointType};
    use chrono::{TimeZone, Utc};

    fn model() -> PointsModel {
        PointsModel::new(
            Vec::new(),
            vec![OfferGroup {
                point_type: PointType::Ship,
                offers: vec![Offer {
                    id: OfferId::from("cabin"),
                    title: "Cabin".into(),
                    price: 80,
                }],
            }],
            Vec::new(),
        )
    }

    fn ship() -> Point {
        Point {
            id: PointId::from("5"),
            point_type: PointType::Ship,
            date_from: Utc.with_ymd_and_hms(2026, 8, 3, 18, 0, 0).unwrap(),
            date_to: Utc.with_ymd_and_hms(2026, 8, 4, 8, 0, 0).unwrap(),
            base_price: 200,
            destination: DestinationId::from("hel"),
            offers: vec![],
            is_favorite: false,
        }
    }

    fn mounted() -> (Surface, NodeId, PointPresenter, PointsModel) {
        let mut surface = Surface::new();
        let list = surface.create_container(surface.root());
        let model = model();
        let mut presenter = PointPresenter::new(list);
        presenter.init(&mut surface, &ship(), &model);
        (surface, list, presenter, model)
    }

    #[test]
    fn first_init_appends_the_card() {
        let (surface, list, presenter, _) = mounted();
        assert_eq!(surface.children(list).len(), 1);
        assert_eq!(presenter.element(), Some(surface.children(list)[0]));
        assert_eq!(surface.render_count(), 1);
    }

    #[test]
    fn rollup_swaps_to_editor_and_back() {
        let (mut surface, list, mut presenter, model) = mounted();

        let signal = presenter.handle_input(&mut surface, &model, ItemInput::RollupClick);
        assert_eq!(signal, Some(ItemSignal::ModeChange));
        assert!(presenter.mode().is_editing());
        assert!(surface.text(surface.children(list)[0]).contains("Ship to hel"));

        assert_eq!(presenter.handle_input(&mut surface, &model, ItemInput::Escape), None);
        assert_eq!(presenter.mode(), Mode::Default);
        assert_eq!(surface.children(list).len(), 1);
        assert_eq!(presenter.element(), Some(surface.children(list)[0]));
        assert_eq!(surface.render_count(), 1);
    }

    #[test]
    fn favorite_emits_replacement_record() {
        let (mut surface, _, mut presenter, model) = mounted();

        let signal = presenter.handle_input(&mut surface, &model, ItemInput::FavoriteClick);

        assert_eq!(signal, Some(ItemSignal::DataChange(ship().with_favorite_toggled())));
        assert!(!presenter.point().unwrap().is_favorite);
    }

    #[test]
    fn submit_emits_the_draft() {
        let (mut surface, _, mut presenter, model) = mounted();
        presenter.handle_input(&mut surface, &model, ItemInput::RollupClick);
        presenter.handle_input(&mut surface, &model, ItemInput::ToggleOffer(0));

        let signal = presenter.handle_input(&mut surface, &model, ItemInput::Submit);

        let expected = ship().with_offer_toggled(&OfferId::from("cabin"));
        assert_eq!(signal, Some(ItemSignal::DataChange(expected)));
        assert_eq!(presenter.mode(), Mode::Default);
    }

    #[test]
    fn unchanged_submit_is_silent() {
        let (mut surface, _, mut presenter, model) = mounted();
        presenter.handle_input(&mut surface, &model, ItemInput::RollupClick);
        assert_eq!(presenter.handle_input(&mut surface, &model, ItemInput::Submit), None);
    }

    #[test]
    fn editor_inputs_are_ignored_in_display_mode() {
        let (mut surface, _, mut presenter, model) = mounted();
        for input in [ItemInput::ToggleOffer(0), ItemInput::Submit, ItemInput::Escape] {
            assert_eq!(presenter.handle_input(&mut surface, &model, input), None);
        }
        assert_eq!(presenter.mode(), Mode::Default);
    }

    #[test]
    fn reinit_while_editing_keeps_the_editor_slot() {
        let (mut surface, list, mut presenter, model) = mounted();
        presenter.handle_input(&mut surface, &model, ItemInput::RollupClick);
        let renders = surface.render_count();

        presenter.init(&mut surface, &ship().with_favorite_toggled(), &model);

        assert!(presenter.mode().is_editing());
        assert_eq!(surface.children(list).len(), 1);
        assert_eq!(presenter.element(), Some(surface.children(list)[0]));
        assert_eq!(surface.render_count(), renders);
    }

    #[test]
    fn destroy_removes_everything() {
        let (mut surface, list, mut presenter, model) = mounted();
        presenter.handle_input(&mut surface, &model, ItemInput::RollupClick);

        presenter.destroy(&mut surface);

        assert!(surface.children(list).is_empty());
        assert!(presenter.element().is_none());
    }
}
