//! UI/backend events and error modeling for the roster window.

use client_core::RosterEvent;

pub enum UiEvent {
    Roster(Vec<RosterEvent>),
    ServerChanged(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Configuration,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
    ServerSettings,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("invalid")
            || lower.contains("url")
            || lower.contains("settings")
        {
            UiErrorCategory::Configuration
        } else if lower.contains("disconnected")
            || lower.contains("queue is full")
            || lower.contains("connection")
            || lower.contains("timed out")
            || lower.contains("runtime")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text for the status banner.
    pub fn banner_text(&self) -> String {
        let label = match self.category {
            UiErrorCategory::Transport => "Backend",
            UiErrorCategory::Configuration => "Configuration",
            UiErrorCategory::Unknown => "Unexpected",
        };
        format!("{label} error: {}", self.message)
    }
}
