//! Search results list view.
//!
//! Renders the result links in navigation order inside the
//! `search-site-results` container and reports focus and activation back.

use egui::{Align, ScrollArea};

use crate::widget::{LinkKind, ResultLinks};

/// Id salt of the results container.
pub const RESULTS_ID: &str = "search-site-results";

/// What happened to the links during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResultsResponse {
    /// Index of the link holding keyboard focus
    pub focused: Option<usize>,
    /// Index of the link clicked or activated with Enter
    pub activated: Option<usize>,
}

/// View for displaying search results.
pub struct ResultsView;

impl ResultsView {
    /// Display the result links, moving focus to `request_focus` if given.
    pub fn show(ui: &mut egui::Ui, links: &ResultLinks, request_focus: Option<usize>) -> ResultsResponse {
        let mut response = ResultsResponse::default();

        if links.is_empty() {
            return response;
        }

        ScrollArea::vertical()
            .id_salt(RESULTS_ID)
            .max_height(320.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (index, link) in links.iter().enumerate() {
                    let row = ui
                        .push_id((RESULTS_ID, index), |ui| {
                            ui.horizontal(|ui| {
                                ui.add_space(indent(link.kind));
                                ui.link(link.label.as_str())
                            })
                            .inner
                        })
                        .inner;

                    if request_focus == Some(index) {
                        row.request_focus();
                        row.scroll_to_me(Some(Align::Center));
                    }
                    if row.has_focus() {
                        response.focused = Some(index);
                    }
                    if row.clicked() {
                        response.activated = Some(index);
                    }
                }
            });

        response
    }
}

/// Left indentation showing the app > model > object nesting.
fn indent(kind: LinkKind) -> f32 {
    match kind {
        LinkKind::App => 0.0,
        LinkKind::Model | LinkKind::AddModel => 12.0,
        LinkKind::Object => 24.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_follows_nesting() {
        assert!(indent(LinkKind::App) < indent(LinkKind::Model));
        assert!(indent(LinkKind::Model) < indent(LinkKind::Object));
        assert_eq!(indent(LinkKind::Model), indent(LinkKind::AddModel));
    }
}
