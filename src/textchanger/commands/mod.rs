use crate::config::TextChangerConfig;
use crate::pipeline::Stage;
use serde::Serialize;

pub mod clear;
pub mod config;
pub mod convert;
pub mod describe;
pub mod edit;
pub mod list;
pub mod reset;
pub mod select;
pub mod swap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One option of a category as shown in a catalogue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionListing {
    pub name: String,
    /// The option applied to its own name.
    pub preview: String,
    pub selected: bool,
    pub random: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing {
    pub name: String,
    pub options: Vec<OptionListing>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Option<String>,
    pub description: Option<String>,
    pub stages: Vec<Stage>,
    pub catalogue: Vec<CategoryListing>,
    pub config: Option<TextChangerConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    pub fn with_catalogue(mut self, catalogue: Vec<CategoryListing>) -> Self {
        self.catalogue = catalogue;
        self
    }

    pub fn with_config(mut self, config: TextChangerConfig) -> Self {
        self.config = Some(config);
        self
    }
}
