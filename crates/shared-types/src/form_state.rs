use serde::{Deserialize, Serialize};

use crate::badge_url::{badge_url_from_path, static_badge_url, BadgeUrl};
use crate::markup::{generate_all_markup, GeneratedMarkup};
use crate::pattern::PathChange;
use crate::query::QueryParams;
use crate::style::BadgeStyle;

pub const PLACEHOLDER_LABEL: &str = "preview";
pub const PLACEHOLDER_MESSAGE: &str = "some parameters missing";
pub const PLACEHOLDER_COLOR: &str = "lightgray";

/// Notification emitted by the query string builder whenever a value changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryParamChange {
    pub query_params: QueryParams,
}

/// Local state of the badge preview form.
///
/// Each field has exactly one writer: the path builder owns `path` and
/// `is_complete`, the query string builder owns `query_params`, and the
/// style selector owns `style`. Everything shown to the user is derived
/// from these on each render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormState {
    pub path: String,
    pub is_complete: bool,
    pub query_params: Option<QueryParams>,
    pub style: BadgeStyle,
    /// Link target for the markup snippets. Nothing edits it yet, so it
    /// stays `None` and renders as no link.
    pub link: Option<String>,
}

impl FormState {
    pub fn apply_path_change(&mut self, change: PathChange) {
        self.path = change.path;
        self.is_complete = change.is_complete;
    }

    pub fn apply_query_change(&mut self, change: QueryParamChange) {
        self.query_params = Some(change.query_params);
    }

    pub fn set_style(&mut self, style: BadgeStyle) {
        self.style = style;
    }

    /// Badge URL for the current path and style.
    pub fn badge_url(&self, base_url: &str) -> String {
        badge_url_from_path(base_url, &self.path, self.style.url_param())
    }

    /// Image source for the live preview: the badge URL once every required
    /// parameter is filled, a static placeholder badge before that.
    pub fn preview_src(&self, base_url: &str) -> String {
        if self.is_complete {
            self.badge_url(base_url)
        } else {
            static_badge_url(
                base_url,
                PLACEHOLDER_LABEL,
                PLACEHOLDER_MESSAGE,
                PLACEHOLDER_COLOR,
            )
        }
    }

    /// `title` becomes the alt text; the form passes the example's display title.
    pub fn markup(&self, base_url: &str, title: &str) -> GeneratedMarkup {
        generate_all_markup(
            &self.badge_url(base_url),
            Some(self.link.as_deref().unwrap_or_default()),
            Some(title),
        )
    }
}

/// Copy value for the full pattern snippet.
pub fn pattern_copy_url(base_url: &str, pattern: &str) -> String {
    BadgeUrl::new(base_url, pattern).format("svg").build()
}
