//! Alert banners and the submit button loading toggle.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const ALERT_LIFETIME_SECS: i64 = 5;
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: AlertKind,
    pub shown_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: AlertKind, shown_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at,
        }
    }

    pub fn css_class(&self) -> String {
        format!("alert alert-{}", self.kind)
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + Duration::seconds(ALERT_LIFETIME_SECS)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

pub trait Notifier {
    fn show_alert(&mut self, message: &str, kind: AlertKind);
}

/// Stack of notices, newest first. Expired notices are dropped lazily.
#[derive(Default, Debug)]
pub struct AlertBoard {
    notices: Vec<Notice>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.notices.insert(0, notice);
    }

    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.notices.retain(|n| !n.is_expired(now));
    }

    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&Notice> {
        self.notices.iter().filter(|n| !n.is_expired(now)).collect()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Notifier for AlertBoard {
    fn show_alert(&mut self, message: &str, kind: AlertKind) {
        let now = Utc::now();
        self.prune(now);
        self.push(Notice::new(message, kind, now));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub disabled: bool,
    pub label: String,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            disabled: false,
            label: label.into(),
        }
    }
}

/// Advisory only: a disabled button does not stop a second request.
pub fn disable_button(button: &mut Button) {
    button.disabled = true;
    button.label = LOADING_LABEL.to_string();
}

pub fn enable_button(button: &mut Button, original_label: &str) {
    button.disabled = false;
    button.label = original_label.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_class_follows_kind() {
        let now = Utc::now();
        assert_eq!(Notice::new("ok", AlertKind::default(), now).css_class(), "alert alert-success");
        assert_eq!(Notice::new("no", AlertKind::Error, now).css_class(), "alert alert-error");
    }

    #[test]
    fn notices_expire_after_five_seconds() {
        let t0 = Utc::now();
        let mut board = AlertBoard::new();
        board.push(Notice::new("Ride published", AlertKind::Success, t0));
        board.push(Notice::new("Seat booked", AlertKind::Info, t0 + Duration::seconds(3)));

        let at_four = board.visible(t0 + Duration::seconds(4));
        assert_eq!(at_four.len(), 2);
        assert_eq!(at_four[0].message, "Seat booked");

        let at_five = board.visible(t0 + Duration::seconds(5));
        assert_eq!(at_five.len(), 1);

        board.prune(t0 + Duration::seconds(9));
        assert!(board.is_empty());
    }

    #[test]
    fn show_alert_puts_newest_on_top() {
        let mut board = AlertBoard::new();
        board.show_alert("first", AlertKind::Info);
        board.show_alert("second", AlertKind::Error);
        let visible = board.visible(Utc::now());
        assert_eq!(visible[0].message, "second");
        assert_eq!(visible[1].message, "first");
    }

    #[test]
    fn button_toggle() {
        let mut button = Button::new("Book Ride");
        disable_button(&mut button);
        assert!(button.disabled);
        assert_eq!(button.label, LOADING_LABEL);

        enable_button(&mut button, "Book Ride");
        assert_eq!(button, Button::new("Book Ride"));
    }
}
