//! Main search application window.
//!
//! Implements eframe::App for the search modal: the toggle hotkey, the
//! debounced search input, the help text and keyboard navigation over the
//! result links.

use eframe::egui;
use reqwest::Url;
use tokio::runtime::Handle;

use crate::endpoint::HttpEndpoint;
use crate::keys::{Key, KeyPress, Modifiers};
use crate::session::SearchSession;
use crate::ui::actions;
use crate::ui::results::ResultsView;
use crate::widget::{Focus, KeyOutcome, ResultLink};

/// Id of the search input.
pub const INPUT_ID: &str = "search-site-input";

/// The main search application.
pub struct SearchApp {
    /// Modal, widget and focus.
    session: SearchSession<HttpEndpoint>,
    /// Admin site origin that relative result URLs resolve against.
    base_url: Url,
    /// Text buffer of the search input, kept in sync with the widget value.
    query: String,
    /// Focus moved by the keyboard that still has to be applied to a widget.
    focus_request: Option<Focus>,
    /// Last link action error.
    status: Option<String>,
}

impl SearchApp {
    /// Create a new search application.
    ///
    /// Spawns a task on `runtime` that repaints whenever the search state changes.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: SearchSession<HttpEndpoint>,
        base_url: Url,
        runtime: Handle,
    ) -> Self {
        let mut state_rx = session.widget().subscribe();
        let ctx = cc.egui_ctx.clone();
        runtime.spawn(async move {
            while state_rx.changed().await.is_ok() {
                ctx.request_repaint();
            }
        });

        Self {
            session,
            base_url,
            query: String::new(),
            focus_request: None,
            status: None,
        }
    }

    fn activate(&mut self, link: &ResultLink) {
        match actions::open_link(&self.base_url, link) {
            Ok(()) => self.status = None,
            Err(e) => {
                tracing::error!("Failed to open result: {}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn show_modal(&mut self, ctx: &egui::Context) {
        let state = self.session.widget().snapshot();
        if self.query != state.value() {
            self.query = state.value().to_string();
        }

        let mut open = true;
        egui::Window::new("Search")
            .id(egui::Id::new("search-site-modal"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 40.0])
            .open(&mut open)
            .show(ctx, |ui| {
                let input = egui::TextEdit::singleline(&mut self.query)
                    .id(egui::Id::new(INPUT_ID))
                    .hint_text("Search apps, models and objects")
                    .desired_width(f32::INFINITY)
                    .show(ui)
                    .response;

                if input.changed() {
                    let query = self.query.clone();
                    self.session.on_input(&query);
                }

                if self.focus_request == Some(Focus::Input) {
                    input.request_focus();
                    self.focus_request = None;
                } else if input.has_focus() && self.focus_request.is_none() {
                    self.session.set_focus(Focus::Input);
                }

                ui.weak(state.help_text());
                ui.separator();

                let link_request = match self.focus_request {
                    Some(Focus::Link(index)) => Some(index),
                    _ => None,
                };
                let response = ResultsView::show(ui, state.links(), link_request);

                if link_request.is_some() {
                    self.focus_request = None;
                } else if let Some(index) = response.focused {
                    self.session.set_focus(Focus::Link(index));
                }

                if let Some(link) = response.activated.and_then(|index| state.links().get(index)) {
                    self.activate(link);
                }

                if let Some(status) = &self.status {
                    ui.separator();
                    ui.colored_label(ui.visuals().error_fg_color, status);
                }
            });

        if !open {
            self.session.close();
        }
    }
}

impl eframe::App for SearchApp {
    /// Hotkey, Escape and result navigation.
    ///
    /// Runs before egui sees the input so that suppressed keys never reach its
    /// own focus movement or the Space/Enter click of a focused link.
    fn raw_input_hook(&mut self, _ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        let session = &mut self.session;
        if let Some(focus) = intercept_keys(raw_input, |press| session.handle_key(press)) {
            self.focus_request = Some(focus);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = format!("Search ({})", self.session.toggle().hotkey());
                if ui.button(label).clicked() {
                    self.session.open();
                    self.focus_request = Some(Focus::Input);
                }
                ui.weak(self.base_url.as_str());
            });
        });

        if self.session.modal().is_open() {
            self.show_modal(ctx);
        }
    }
}

/// Feed the key presses in `raw_input` to `handle` and drop every event whose
/// default action it suppressed.
///
/// A suppressed character key also drops the frame's text input. Returns the
/// focus of the last suppressed press.
fn intercept_keys<F>(raw_input: &mut egui::RawInput, mut handle: F) -> Option<Focus>
where
    F: FnMut(&KeyPress) -> Option<KeyOutcome>,
{
    let mut focus = None;
    let mut drop_text = false;

    raw_input.events.retain(|event| {
        let Some(press) = key_press(event) else {
            return true;
        };
        match handle(&press) {
            Some(outcome) if outcome.prevent_default => {
                drop_text |= matches!(press.key, Key::Character(_));
                focus = Some(outcome.focus);
                false
            }
            _ => true,
        }
    });

    if drop_text {
        raw_input
            .events
            .retain(|event| !matches!(event, egui::Event::Text(_)));
    }
    focus
}

/// Translate an egui key event into a [`KeyPress`].
fn key_press(event: &egui::Event) -> Option<KeyPress> {
    let egui::Event::Key {
        key,
        pressed: true,
        modifiers,
        ..
    } = event
    else {
        return None;
    };

    let key = match key {
        egui::Key::ArrowUp => Key::ArrowUp,
        egui::Key::ArrowDown => Key::ArrowDown,
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::ArrowRight => Key::ArrowRight,
        egui::Key::Tab => Key::Tab,
        egui::Key::Enter => Key::Enter,
        egui::Key::Escape => Key::Escape,
        egui::Key::Backspace => Key::Backspace,
        other => Key::from_name(other.name()),
    };

    Some(KeyPress::new(
        key,
        Modifiers {
            ctrl: modifiers.ctrl,
            meta: modifiers.mac_cmd,
            shift: modifiers.shift,
            alt: modifiers.alt,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{AppResult, ModelResult, ObjectResult, ResultSet};
    use crate::ui::results::ResultsResponse;
    use crate::widget::{navigation, ResultLinks};

    fn key_event(key: egui::Key, pressed: bool, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers,
        }
    }

    #[test]
    fn test_arrow_keys_translated() {
        let press = key_press(&key_event(egui::Key::ArrowDown, true, egui::Modifiers::NONE)).unwrap();
        assert_eq!(press, KeyPress::plain(Key::ArrowDown));
    }

    #[test]
    fn test_ctrl_k_translated() {
        let press = key_press(&key_event(egui::Key::K, true, egui::Modifiers::CTRL)).unwrap();
        assert_eq!(press.key, Key::Character('K'));
        assert!(press.modifiers.primary());
    }

    #[test]
    fn test_key_release_ignored() {
        assert_eq!(key_press(&key_event(egui::Key::Escape, false, egui::Modifiers::NONE)), None);
        assert_eq!(key_press(&egui::Event::Text("g".to_string())), None);
    }

    /// One app with a single model holding `objects` objects.
    fn links(objects: usize, with_add: bool) -> ResultLinks {
        let results = ResultSet {
            apps: vec![AppResult {
                id: "auth".to_string(),
                name: "Authentication and Authorization".to_string(),
                url: Some("/admin/auth/".to_string()),
                models: vec![ModelResult {
                    id: "auth.User".to_string(),
                    name: "Users".to_string(),
                    url: "/admin/auth/user/".to_string(),
                    url_add: with_add.then(|| "/admin/auth/user/add/".to_string()),
                    objects: (0..objects)
                        .map(|i| ObjectResult {
                            id: i.to_string(),
                            name: format!("user {}", i),
                            url: format!("/admin/auth/user/{}/", i),
                        })
                        .collect(),
                }],
            }],
        };
        ResultLinks::from_results(&results)
    }

    fn raw_input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    /// Render one frame of the result list.
    fn frame(
        ctx: &egui::Context,
        raw: egui::RawInput,
        links: &ResultLinks,
        request_focus: Option<usize>,
    ) -> ResultsResponse {
        let mut response = ResultsResponse::default();
        let _ = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = ResultsView::show(ui, links, request_focus);
            });
        });
        response
    }

    fn focus_link(ctx: &egui::Context, links: &ResultLinks, index: usize) {
        let response = frame(ctx, raw_input(Vec::new()), links, Some(index));
        assert_eq!(response.focused, Some(index));
    }

    /// Press keys while link `from` has focus, the way the app does it.
    ///
    /// Returns the requested focus, the response of the key frame and the
    /// response of the frame after it.
    fn press_on_link(
        ctx: &egui::Context,
        links: &ResultLinks,
        from: usize,
        events: Vec<egui::Event>,
    ) -> (Option<Focus>, ResultsResponse, ResultsResponse) {
        focus_link(ctx, links, from);

        let mut raw = raw_input(events);
        let request = intercept_keys(&mut raw, |press| {
            Some(navigation::on_key(links, Focus::Link(from), press))
        });
        let link_request = match request {
            Some(Focus::Link(index)) => Some(index),
            _ => None,
        };

        let during = frame(ctx, raw, links, link_request);
        let after = frame(ctx, raw_input(Vec::new()), links, None);
        (request, during, after)
    }

    fn pressed(key: egui::Key) -> egui::Event {
        key_event(key, true, egui::Modifiers::NONE)
    }

    #[test]
    fn test_arrow_down_moves_one_link() {
        let ctx = egui::Context::default();
        let links = links(3, true);
        assert_eq!(links.len(), 6);

        for from in 0..links.len() {
            let (request, _, after) = press_on_link(&ctx, &links, from, vec![pressed(egui::Key::ArrowDown)]);
            let want = (from + 1) % links.len();
            assert_eq!(request, Some(Focus::Link(want)));
            assert_eq!(after.focused, Some(want), "ArrowDown from link {}", from);
        }
    }

    #[test]
    fn test_arrow_keys_wrap_over_three_links() {
        let ctx = egui::Context::default();
        let links = links(1, false);
        assert_eq!(links.len(), 3);

        let (_, _, after) = press_on_link(&ctx, &links, 2, vec![pressed(egui::Key::ArrowDown)]);
        assert_eq!(after.focused, Some(0));

        let (_, _, after) = press_on_link(&ctx, &links, 0, vec![pressed(egui::Key::ArrowUp)]);
        assert_eq!(after.focused, Some(2));

        let (_, _, after) = press_on_link(&ctx, &links, 1, vec![pressed(egui::Key::ArrowUp)]);
        assert_eq!(after.focused, Some(0));
    }

    #[test]
    fn test_space_on_link_does_not_activate() {
        let ctx = egui::Context::default();
        let links = links(1, true);

        // egui alone treats Space on a focused link as a click
        focus_link(&ctx, &links, 1);
        let unfiltered = frame(&ctx, raw_input(vec![pressed(egui::Key::Space)]), &links, None);
        assert_eq!(unfiltered.activated, Some(1));

        let events = vec![pressed(egui::Key::Space), egui::Event::Text(" ".to_string())];
        let (request, during, _) = press_on_link(&ctx, &links, 1, events);
        assert_eq!(request, Some(Focus::Input));
        assert_eq!(during.activated, None);
    }

    #[test]
    fn test_character_on_link_returns_to_input() {
        let ctx = egui::Context::default();
        let links = links(2, false);

        let mut raw = raw_input(vec![pressed(egui::Key::G), egui::Event::Text("g".to_string())]);
        let request = intercept_keys(&mut raw, |press| {
            Some(navigation::on_key(&links, Focus::Link(2), press))
        });
        assert_eq!(request, Some(Focus::Input));
        assert!(raw.events.is_empty());

        let (_, during, _) = press_on_link(&ctx, &links, 2, vec![pressed(egui::Key::G)]);
        assert_eq!(during.activated, None);
    }

    #[test]
    fn test_enter_on_link_keeps_default() {
        let ctx = egui::Context::default();
        let links = links(1, false);

        let (request, during, after) = press_on_link(&ctx, &links, 2, vec![pressed(egui::Key::Enter)]);
        assert_eq!(request, None);
        assert_eq!(during.activated, Some(2));
        assert_eq!(after.focused, Some(2));
    }

    #[test]
    fn test_typing_in_input_not_intercepted() {
        let links = links(1, false);
        let mut raw = raw_input(vec![pressed(egui::Key::A), egui::Event::Text("a".to_string())]);

        let request = intercept_keys(&mut raw, |press| Some(navigation::on_key(&links, Focus::Input, press)));
        assert_eq!(request, None);
        assert_eq!(raw.events.len(), 2);
    }
}
