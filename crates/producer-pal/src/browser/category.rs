use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level browser roots, named after the browser properties that hold them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AudioEffects,
    Clips,
    CurrentProject,
    Drums,
    Instruments,
    MidiEffects,
    Packs,
    Plugins,
    Samples,
    Sounds,
    #[default]
    UserLibrary,
}

impl Category {
    /// All categories, in the order uri lookups search them.
    pub const ALL: [Category; 11] = [
        Self::AudioEffects,
        Self::Clips,
        Self::CurrentProject,
        Self::Drums,
        Self::Instruments,
        Self::MidiEffects,
        Self::Packs,
        Self::Plugins,
        Self::Samples,
        Self::Sounds,
        Self::UserLibrary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AudioEffects => "audio_effects",
            Self::Clips => "clips",
            Self::CurrentProject => "current_project",
            Self::Drums => "drums",
            Self::Instruments => "instruments",
            Self::MidiEffects => "midi_effects",
            Self::Packs => "packs",
            Self::Plugins => "plugins",
            Self::Samples => "samples",
            Self::Sounds => "sounds",
            Self::UserLibrary => "user_library",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown browser category: {}", s))
    }
}
