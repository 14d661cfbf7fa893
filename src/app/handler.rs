//! Event handling and state transitions.
//!
//! [`handle_event`] applies one [`Event`] to the [`AppState`] and returns
//! whether the pane must be repainted together with the [`Action`]s to run.
//!
//! Board keys are routed in this order: item keys for the selected row
//! (favorite, offers while its editor is open), then the sort control, then
//! the filter control.

use crate::app::point_presenter::ItemInput;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Point;
use crate::worker::{WorkerMessage, WorkerResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeyDown,
    KeyUp,
    CloseFocus,
    /// Open the selected row's editor, or save it when already open.
    Enter,
    /// Close the open editor without saving.
    Escape,
    ToggleFavorite,
    /// Any other printable key.
    Char(char),

    PermissionsGranted,
    PermissionsDenied,

    WorkerResponse(WorkerResponse),
}

/// Applies `event` to `state`.
///
/// # Errors
///
/// Currently infallible; the signature leaves room for transitions that can
/// fail without changing the plugin shim.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Enter => {
            let input = if editing_is_selected(state) {
                ItemInput::Submit
            } else {
                ItemInput::RollupClick
            };
            Ok(send_to_selected(state, input))
        }
        Event::Escape => {
            let Some(presenter) = state.presenter.as_mut() else {
                return Ok((false, vec![]));
            };
            let Some(editing) = presenter.editing_point().cloned() else {
                return Ok((false, vec![]));
            };
            presenter.handle_item_input(&mut state.surface, &editing, ItemInput::Escape);
            Ok((true, vec![]))
        }
        Event::ToggleFavorite => Ok(send_to_selected(state, ItemInput::FavoriteClick)),
        Event::Char(c) => Ok(handle_char(state, *c)),
        Event::PermissionsGranted => {
            tracing::debug!(path = ?state.trip_path, "permissions granted, loading trip");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::load_trip(state.trip_path_string()))],
            ))
        }
        Event::PermissionsDenied => {
            tracing::warn!("permissions denied, trip file unavailable");
            state.last_error = Some("permission to read the trip file was denied".to_string());
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

fn editing_is_selected(state: &AppState) -> bool {
    let editing = state
        .presenter
        .as_ref()
        .and_then(|presenter| presenter.editing_point());
    editing.is_some() && editing == state.selected.as_ref()
}

/// Routes `input` to the selected row; a resulting data change is saved.
fn send_to_selected(state: &mut AppState, input: ItemInput) -> (bool, Vec<Action>) {
    let Some(selected) = state.selected.clone() else {
        return (false, vec![]);
    };
    let Some(presenter) = state.presenter.as_mut() else {
        return (false, vec![]);
    };

    let changed = presenter.handle_item_input(&mut state.surface, &selected, input);
    (true, save_actions(state, changed))
}

fn save_actions(state: &AppState, changed: Option<Point>) -> Vec<Action> {
    changed.map_or_else(Vec::new, |point| {
        tracing::debug!(point_id = %point.id, "saving changed point");
        vec![Action::PostToWorker(WorkerMessage::save_point(state.trip_path_string(), point))]
    })
}

fn handle_char(state: &mut AppState, c: char) -> (bool, Vec<Action>) {
    if c == '*' {
        return send_to_selected(state, ItemInput::FavoriteClick);
    }

    if let Some(digit) = c.to_digit(10).filter(|d| (1..=9).contains(d)) {
        if !editing_is_selected(state) {
            return (false, vec![]);
        }
        let index = usize::try_from(digit - 1).unwrap_or_default();
        return send_to_selected(state, ItemInput::ToggleOffer(index));
    }

    let Some(presenter) = state.presenter.as_mut() else {
        return (false, vec![]);
    };

    let changed = presenter.handle_sort_input(&mut state.surface, c)
        || presenter.handle_filter_input(&mut state.surface, c);
    if changed {
        state.sync_selection();
    }
    (changed, vec![])
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::TripLoaded { trip } => {
            tracing::info!(points = trip.points.len(), "trip received");
            state.last_error = None;
            let initialized = state.load_trip(trip.clone());
            (initialized, vec![])
        }
        WorkerResponse::PointSaved { id, stored: true } => {
            tracing::debug!(point_id = %id, "point saved");
            (false, vec![])
        }
        WorkerResponse::PointSaved { id, stored: false } => {
            tracing::warn!(point_id = %id, "point not present in trip file");
            state.last_error = Some(format!("point {id} is not in the trip file"));
            (true, vec![])
        }
        WorkerResponse::Error { message } => {
            tracing::error!("worker error: {message}");
            state.last_error = Some(message.clone());
            (true, vec![])
        }
    }
}
