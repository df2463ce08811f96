//! Search session: the modal, the widget and keyboard focus wired together.
//!
//! Front ends feed every key press and input change into a [`SearchSession`]
//! and render from its state. The modal hotkey is checked first and works
//! whether or not the modal is open; all other keys only reach the widget
//! while it is open.

use tokio::runtime::Handle;

use crate::config::WidgetConfig;
use crate::endpoint::ResultsEndpoint;
use crate::keys::KeyPress;
use crate::modal::{ModalEvent, ModalState, ModalToggle};
use crate::widget::navigation;
use crate::widget::{Focus, KeyOutcome, ResultLink, SearchWidget};
use crate::Result;

/// One search modal with its widget and focus.
pub struct SearchSession<E: ResultsEndpoint> {
    toggle: ModalToggle,
    widget: SearchWidget<E>,
    focus: Focus,
    reset_on_close: bool,
}

impl<E: ResultsEndpoint> SearchSession<E> {
    /// Create a session. `modal` may be shared with other parts of the front end.
    ///
    /// # Errors
    /// Returns error if the configured hotkey does not parse.
    pub fn new(endpoint: E, config: &WidgetConfig, modal: ModalState, runtime: Handle) -> Result<Self> {
        let hotkey = config.parsed_hotkey()?;
        tracing::info!("Search modal hotkey: {}", hotkey);

        Ok(Self {
            toggle: ModalToggle::new(hotkey, modal),
            widget: SearchWidget::new(endpoint, config, runtime),
            focus: Focus::Input,
            reset_on_close: config.reset_on_close,
        })
    }

    pub fn modal(&self) -> &ModalState {
        self.toggle.modal()
    }

    pub fn toggle(&self) -> &ModalToggle {
        &self.toggle
    }

    pub fn widget(&self) -> &SearchWidget<E> {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut SearchWidget<E> {
        &mut self.widget
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Record a focus change the front end made on its own (mouse click, Tab).
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// The link that currently has focus, if any.
    pub fn focused_link(&self) -> Option<ResultLink> {
        match self.focus {
            Focus::Link(index) => self.widget.with_state(|state| state.links().get(index).cloned()),
            Focus::Input => None,
        }
    }

    /// Open the modal (e.g. from a search button) with focus on the input.
    pub fn open(&mut self) {
        self.toggle.modal().open();
        self.focus = Focus::Input;
    }

    /// Close the modal, resetting the widget if configured to.
    pub fn close(&mut self) {
        self.toggle.modal().close();
        self.on_closed();
    }

    /// The input value changed.
    pub fn on_input(&mut self, value: &str) {
        self.focus = Focus::Input;
        self.widget.on_input(value);
    }

    /// Handle a key press. Returns `None` when the session ignored the key.
    pub fn handle_key(&mut self, press: &KeyPress) -> Option<KeyOutcome> {
        if let Some(event) = self.toggle.on_key(press) {
            match event {
                ModalEvent::Opened => self.focus = Focus::Input,
                ModalEvent::Closed => self.on_closed(),
            }
            return Some(KeyOutcome {
                focus: self.focus,
                prevent_default: true,
            });
        }

        if !self.modal().is_open() {
            return None;
        }

        let focus = self.focus;
        let outcome = self
            .widget
            .with_state(|state| navigation::on_key(state.links(), focus, press));
        self.focus = outcome.focus;
        Some(outcome)
    }

    fn on_closed(&mut self) {
        self.focus = Focus::Input;
        if self.reset_on_close {
            self.widget.reset();
        }
    }
}
