//! Zellij plugin and worker entry points.
//!
//! This file is the only place that talks to Zellij. It maps Zellij events to
//! library [`Event`]s, executes the returned [`Action`]s, and hosts the storage
//! worker.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij plugin thread  │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← board state, key handling
//! │  └──────────────────┘   │
//! │          │ LoadTrip     │
//! │          │ SavePoint    │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   WorkerShim     │   │  ← trip file I/O
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! - `j`/`Down`, `k`/`Up`, `Ctrl+n`/`Ctrl+p`: move selection
//! - `Enter`: open the editor, or save it
//! - `Esc`: close the editor
//! - `f`/`*`: toggle favorite
//! - `1`–`9`: toggle an offer in the editor
//! - `d`/`t`/`$`: sort by day/time/price
//! - `E`/`P`/`N`/`F`: everything/past/present/future
//! - `q`: hide the plugin (outside the editor)

#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use tripboard::worker::{TripWorker, WorkerMessage, WorkerResponse};
use tripboard::{handle_event, Action, Config, Event};

const WORKER_NAME: &str = "tripboard";

register_plugin!(State);
register_worker!(WorkerShim, tripboard_worker, TRIPBOARD_WORKER);

static WORKER_TRACING: AtomicBool = AtomicBool::new(false);

/// Zellij-facing wrapper around the library worker.
#[derive(Default, Serialize, Deserialize)]
struct WorkerShim {
    #[serde(skip)]
    inner: TripWorker,
}

impl ZellijWorker<'_> for WorkerShim {
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING.swap(true, Ordering::SeqCst) {
            tripboard::observability::init_worker_tracing();
        }

        if let Some(response) = self.inner.handle_payload(&payload) {
            post_message_to_plugin(PluginMessage {
                name: message,
                payload: response,
                worker_name: None,
            });
        }
    }
}

struct State {
    app: tripboard::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: tripboard::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        tripboard::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        self.app = tripboard::initialize(&config);
        tracing::debug!(trip_path = ?self.app.trip_path, "app state initialized");

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        tripboard::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Enter,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') if !self.app.is_editing() => Event::CloseFocus,
            BareKey::Char('f') => Event::ToggleFavorite,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(kind = message.kind(), payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}
