//! Keyboard navigation over rendered result links.
//!
//! The links are held in an explicit [`ResultLinks`] list rebuilt from the
//! result set every time it changes, in the order they are rendered:
//! each app, then per model the model link, its objects and its add link.

use crate::endpoint::ResultSet;
use crate::keys::{Key, KeyPress};

/// What a result link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    App,
    Model,
    Object,
    AddModel,
}

/// A focusable result link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLink {
    pub kind: LinkKind,
    /// Accessible name, e.g. `"Users - model"`
    pub label: String,
    /// Admin URL, usually relative to the site origin
    pub url: String,
}

/// The result links in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultLinks {
    links: Vec<ResultLink>,
}

impl ResultLinks {
    /// Flatten a result set into links. Apps without a URL render as plain
    /// text and are not navigable.
    pub fn from_results(results: &ResultSet) -> Self {
        let mut links = Vec::new();

        for app in &results.apps {
            if let Some(url) = &app.url {
                links.push(ResultLink {
                    kind: LinkKind::App,
                    label: format!("{} - app", app.name),
                    url: url.clone(),
                });
            }

            for model in &app.models {
                links.push(ResultLink {
                    kind: LinkKind::Model,
                    label: format!("{} - model", model.name),
                    url: model.url.clone(),
                });

                links.extend(model.objects.iter().map(|object| ResultLink {
                    kind: LinkKind::Object,
                    label: object.name.clone(),
                    url: object.url.clone(),
                }));

                if let Some(url_add) = &model.url_add {
                    links.push(ResultLink {
                        kind: LinkKind::AddModel,
                        label: format!("{} - add", model.name),
                        url: url_add.clone(),
                    });
                }
            }
        }

        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResultLink> {
        self.links.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultLink> {
        self.links.iter()
    }
}

/// Where keyboard focus sits inside the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    /// Result link at this index
    Link(usize),
}

/// Entry point into the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    First,
    Last,
}

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Focus after the key press
    pub focus: Focus,
    /// Whether the key's default action (scrolling, typing) must be suppressed
    pub prevent_default: bool,
}

impl KeyOutcome {
    fn stay(focus: Focus) -> Self {
        Self {
            focus,
            prevent_default: false,
        }
    }

    fn moved(focus: Focus) -> Self {
        Self {
            focus,
            prevent_default: true,
        }
    }
}

/// Focus for entering the list at `target`, or `None` if there are no links.
pub fn focus_on_link(links: &ResultLinks, target: LinkTarget) -> Option<Focus> {
    if links.is_empty() {
        return None;
    }
    let index = match target {
        LinkTarget::First => 0,
        LinkTarget::Last => links.len() - 1,
    };
    Some(Focus::Link(index))
}

/// Handle a key pressed while `focus` is current.
pub fn on_key(links: &ResultLinks, focus: Focus, press: &KeyPress) -> KeyOutcome {
    match focus {
        Focus::Input => on_input_key(links, press),
        Focus::Link(index) => on_link_key(links, index, press),
    }
}

/// Keys on the search input: arrows enter the result list, everything else types.
pub fn on_input_key(links: &ResultLinks, press: &KeyPress) -> KeyOutcome {
    let target = match press.key {
        Key::ArrowDown => LinkTarget::First,
        Key::ArrowUp => LinkTarget::Last,
        _ => return KeyOutcome::stay(Focus::Input),
    };

    match focus_on_link(links, target) {
        Some(focus) => KeyOutcome::moved(focus),
        None => KeyOutcome::moved(Focus::Input),
    }
}

/// Keys on the result link at `current`: arrows cycle through the links with
/// wrap-around, Tab/Shift/Enter pass through, anything else returns to the input.
pub fn on_link_key(links: &ResultLinks, current: usize, press: &KeyPress) -> KeyOutcome {
    let count = links.len();

    match press.key {
        Key::ArrowDown | Key::ArrowUp if count == 0 => KeyOutcome::moved(Focus::Input),
        Key::ArrowDown => {
            // a link no longer in the list counts as "before the first"
            let next = if current < count { (current + 1) % count } else { 0 };
            KeyOutcome::moved(Focus::Link(next))
        }
        Key::ArrowUp => {
            let previous = if current == 0 || current >= count {
                count - 1
            } else {
                current - 1
            };
            KeyOutcome::moved(Focus::Link(previous))
        }
        key if key.is_link_passthrough() => KeyOutcome::stay(Focus::Link(current)),
        _ => KeyOutcome::moved(Focus::Input),
    }
}
