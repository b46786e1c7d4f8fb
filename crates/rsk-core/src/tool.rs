//! Tool selection and toolbar button identities.
//!
//! The toolbar mixes mutually exclusive tool buttons with action buttons
//! (clear, save, sound toggle). Only tool buttons change the active tool.

use serde::{Deserialize, Serialize};

/// The active drawing tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pencil,
    Brush,
    Eraser,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Pencil, ToolKind::Brush, ToolKind::Eraser];

    /// Element id / wire name of the tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pencil => "pencil",
            ToolKind::Brush => "brush",
            ToolKind::Eraser => "eraser",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Only the brush paints with a glow.
    pub fn has_glow(self) -> bool {
        matches!(self, ToolKind::Brush)
    }
}

/// A toolbar button, identified by its element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Tool(ToolKind),
    Clear,
    Save,
    SoundToggle,
}

impl ToolbarButton {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "clear" => Some(Self::Clear),
            "save" => Some(Self::Save),
            "sound-toggle" => Some(Self::SoundToggle),
            other => ToolKind::from_name(other).map(Self::Tool),
        }
    }

    /// The tool this button selects, if it is a tool button at all.
    pub fn selected_tool(self) -> Option<ToolKind> {
        match self {
            Self::Tool(kind) => Some(kind),
            Self::Clear | Self::Save | Self::SoundToggle => None,
        }
    }
}
