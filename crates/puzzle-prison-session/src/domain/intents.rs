//! Player intents, as resolved by the voice platform.

use serde::Deserialize;

/// The name of an intent. Platform intent names are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum IntentName {
    /// Launch or resume the game.
    #[serde(alias = "LaunchRequest", alias = "PlayIntent")]
    Play,
    /// Ask for instructions.
    #[serde(alias = "AMAZON.HelpIntent")]
    Help,
    /// Ask for the room overview again.
    #[serde(alias = "AMAZON.RepeatIntent")]
    Repeat,
    /// Restart from the beginning.
    #[serde(alias = "AMAZON.StartOverIntent")]
    StartOver,
    /// Stop playing.
    #[serde(alias = "AMAZON.StopIntent")]
    Stop,
    /// Cancel; treated like stop.
    #[serde(alias = "AMAZON.CancelIntent")]
    Cancel,
    /// Walk to an object.
    #[serde(alias = "WalkIntent")]
    Walk,
    /// Interact with the remembered object.
    #[serde(alias = "InteractIntent")]
    Interact,
    /// Interact with a named object.
    #[serde(alias = "InteractWithIntent")]
    InteractWith,
    /// Read the letter.
    #[serde(alias = "ReadIntent")]
    Read,
    /// Choose a terminal option.
    #[serde(alias = "OptionIntent")]
    Option,
}

/// An intent with its slot value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Launch or resume the game.
    Play,
    /// Ask for instructions.
    Help,
    /// Ask for the room overview again.
    Repeat,
    /// Restart from the beginning.
    StartOver,
    /// Stop playing.
    Stop,
    /// Cancel; treated like stop.
    Cancel,
    /// Walk to the named object.
    Walk(String),
    /// Interact with the remembered object.
    Interact,
    /// Interact with the named object.
    InteractWith(String),
    /// Read the letter.
    Read,
    /// Choose the named terminal option.
    Option(String),
}

impl Intent {
    /// Builds an intent from its name and slot values. Missing slots are
    /// treated as empty phrases.
    #[must_use]
    pub fn new(name: IntentName, object: Option<String>, option: Option<String>) -> Self {
        match name {
            IntentName::Play => Self::Play,
            IntentName::Help => Self::Help,
            IntentName::Repeat => Self::Repeat,
            IntentName::StartOver => Self::StartOver,
            IntentName::Stop => Self::Stop,
            IntentName::Cancel => Self::Cancel,
            IntentName::Walk => Self::Walk(object.unwrap_or_default()),
            IntentName::Interact => Self::Interact,
            IntentName::InteractWith => Self::InteractWith(object.unwrap_or_default()),
            IntentName::Read => Self::Read,
            IntentName::Option => Self::Option(option.unwrap_or_default()),
        }
    }
}
