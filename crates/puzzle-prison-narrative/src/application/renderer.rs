//! Renders narration into speech markup and card text.

use tracing::warn;

use crate::domain::narration::{AUDIO_PLACEHOLDER, Narration};

/// Default location of the sound effect clips.
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://s3.amazonaws.com/us.puzzleprison.resources";

/// Where audio clips are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioConfig {
    /// Base URL; clip file names are appended after a `/`.
    pub base_url: String,
}

impl AudioConfig {
    /// Creates a config, dropping any trailing slash from `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIO_BASE_URL)
    }
}

/// Rendered output of a narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    /// SSML document wrapped in `<speak>`.
    pub ssml: String,
    /// Plain card text with audio markers removed.
    pub card: String,
}

/// Renders `narration` to SSML and card text.
///
/// Each audio placeholder becomes an `<audio>` tag for the next cue. Surplus
/// placeholders render as nothing and surplus cues are dropped.
#[must_use]
pub fn render(narration: &Narration, audio: &AudioConfig) -> Speech {
    let segments: Vec<&str> = narration.body.split(AUDIO_PLACEHOLDER).collect();
    let placeholders = segments.len() - 1;
    if placeholders != narration.audio_cues.len() {
        warn!(
            placeholders,
            cues = narration.audio_cues.len(),
            title = %narration.title,
            "audio placeholder count does not match cue count"
        );
    }

    let mut cues = narration.audio_cues.iter();
    let mut ssml = String::from("<speak>");
    for (i, segment) in segments.iter().enumerate() {
        if i > 0
            && let Some(cue) = cues.next()
        {
            ssml.push_str(&format!(
                "<audio src=\"{}/{}\"/>",
                escape(&audio.base_url),
                cue.file_name()
            ));
        }
        ssml.push_str(&escape(segment));
    }
    ssml.push_str("</speak>");

    Speech {
        ssml,
        card: segments.concat(),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::AudioCue;
    use crate::domain::catalogue::narrate;
    use crate::domain::narration::NarrationKey;

    fn narration(body: &str, audio_cues: Vec<AudioCue>) -> Narration {
        Narration {
            title: "Title".to_owned(),
            body: body.to_owned(),
            reprompt: String::new(),
            audio_cues,
        }
    }

    #[test]
    fn test_placeholders_become_audio_tags_in_order() {
        // Arrange
        let audio = AudioConfig::new("https://cdn.example.com/clips/");
        let narration = narration(
            "Moving.{audio} Then {audio}a letter.",
            vec![AudioCue::MovingWall, AudioCue::LetterBox],
        );

        // Act
        let speech = render(&narration, &audio);

        // Assert
        assert_eq!(
            speech.ssml,
            "<speak>Moving.<audio src=\"https://cdn.example.com/clips/MovingWall.mp3\"/> Then \
             <audio src=\"https://cdn.example.com/clips/LetterBox.mp3\"/>a letter.</speak>"
        );
        assert_eq!(speech.card, "Moving. Then a letter.");
    }

    #[test]
    fn test_plain_narration_renders_without_audio() {
        let speech = render(&narration("Hello.", Vec::new()), &AudioConfig::default());
        assert_eq!(speech.ssml, "<speak>Hello.</speak>");
        assert_eq!(speech.card, "Hello.");
    }

    #[test]
    fn test_surplus_placeholders_render_as_nothing() {
        let speech = render(&narration("a{audio}b", Vec::new()), &AudioConfig::default());
        assert_eq!(speech.ssml, "<speak>ab</speak>");
    }

    #[test]
    fn test_markup_characters_in_text_are_escaped() {
        let speech = render(&narration("A & B <c>", Vec::new()), &AudioConfig::default());
        assert_eq!(speech.ssml, "<speak>A &amp; B &lt;c&gt;</speak>");
        assert_eq!(speech.card, "A & B <c>");
    }

    #[test]
    fn test_catalogue_farewell_renders_jingle_from_default_bucket() {
        let speech = render(&narrate(NarrationKey::Farewell), &AudioConfig::default());
        assert!(speech.ssml.contains(
            "<audio src=\"https://s3.amazonaws.com/us.puzzleprison.resources/FinishJingle.mp3\"/>"
        ));
        assert!(!speech.card.contains("{audio}"));
    }
}
