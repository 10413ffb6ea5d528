//! Screens of the client.
//!
//! Each screen runs its own request sequence through [`crate::api::ApiClient`] and renders
//! plain text. Failures never escape a screen: they are logged and shown as an
//! error banner or an empty state.

mod admin;
mod auth;
mod items;
mod my_items;
pub mod routes;

pub use admin::*;
pub use auth::*;
pub use items::*;
pub use my_items::*;

use std::fmt;

use crate::errors::ClientResult;
use crate::models::{ItemKind, ItemReport, ItemStatus};

/// Inline message shown above a screen's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Info(String),
    Error(String),
}

/// Rendered screen.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub title: String,
    pub banner: Option<Banner>,
    pub lines: Vec<String>,
}

impl Screen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            banner: None,
            lines: Vec::new(),
        }
    }

    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.banner = Some(banner);
        self
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn is_error(&self) -> bool {
        matches!(self.banner, Some(Banner::Error(_)))
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
            || match &self.banner {
                Some(Banner::Success(m) | Banner::Info(m) | Banner::Error(m)) => m.contains(needle),
                None => false,
            }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        match &self.banner {
            Some(Banner::Success(msg)) => writeln!(f, "[ok] {}", msg)?,
            Some(Banner::Info(msg)) => writeln!(f, "[i] {}", msg)?,
            Some(Banner::Error(msg)) => writeln!(f, "[error] {}", msg)?,
            None => {}
        }
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Unwrap a list load, logging a failure and falling back to an empty list.
pub(crate) fn list_or_empty<T>(result: ClientResult<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", what, e);
            Vec::new()
        }
    }
}

/// "1 match" / "3 matches".
pub(crate) fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

/// Card-style rendering of an item report.
pub(crate) fn render_item(item: &ItemReport, kind: ItemKind) -> Vec<String> {
    let mut lines = vec![format!("- {} [{}] (id {})", item.title, item.status.as_str(), item.id)];

    if !item.description.is_empty() {
        lines.push(format!("    {}", item.description));
    }
    lines.push(format!(
        "    Category: {} | Location: {}",
        item.category, item.location
    ));
    if let Some(serial) = &item.serial_number {
        lines.push(format!("    Serial number: {}", serial));
    }
    if let Some(passkey) = &item.passkey {
        lines.push(format!("    Passkey: {}", passkey));
    }
    if kind == ItemKind::Lost {
        if let Some(date) = &item.date_lost {
            lines.push(format!("    Date lost: {}", date));
        }
        lines.push(format!(
            "    Status: {}",
            if item.status == ItemStatus::Found {
                "Item has been found!"
            } else {
                "Still searching..."
            }
        ));
    }
    lines
}
