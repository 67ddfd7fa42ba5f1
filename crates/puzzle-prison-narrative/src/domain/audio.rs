//! Sound effects played inside narration.

/// A sound effect clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// A letter dropping through the letter box.
    LetterBox,
    /// A sharp click from somewhere in the room.
    SharpClick,
    /// The north wall sliding into place.
    MovingWall,
    /// The statues unfurling into terminals.
    MovingStatue,
    /// The corner computers beeping.
    ComputerBeeping,
    /// The closing jingle.
    FinishJingle,
}

impl AudioCue {
    /// The clip's file name, relative to the audio base URL.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::LetterBox => "LetterBox.mp3",
            Self::SharpClick => "SharpClick.mp3",
            Self::MovingWall => "MovingWall.mp3",
            Self::MovingStatue => "MovingStatue.mp3",
            Self::ComputerBeeping => "Beeps.mp3",
            Self::FinishJingle => "FinishJingle.mp3",
        }
    }
}
