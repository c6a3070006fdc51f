//! Bundled audio tracks and progress flavor text.

use url::Url;

use crate::AudioTrack;

const BUILTIN: &[(&str, &str, &str)] = &[
    (
        "cinematic",
        "Cinematic",
        "https://cdn.pixabay.com/download/audio/2022/08/02/audio_81f2fd72df.mp3",
    ),
    (
        "lofi",
        "Lofi Chill",
        "https://cdn.pixabay.com/download/audio/2022/11/21/audio_a708242967.mp3",
    ),
    (
        "sci-fi",
        "Sci-Fi Ambient",
        "https://cdn.pixabay.com/download/audio/2022/12/28/audio_1085333d59.mp3",
    ),
    (
        "epic",
        "Epic Action",
        "https://cdn.pixabay.com/download/audio/2022/05/29/audio_34354c2979.mp3",
    ),
];

/// The audio tracks bundled with the front-end.
pub fn builtin_tracks() -> Vec<AudioTrack> {
    BUILTIN
        .iter()
        .map(|(id, name, url)| AudioTrack {
            id: (*id).to_string(),
            name: (*name).to_string(),
            url: Url::parse(url).expect("bundled track URL is valid"),
        })
        .collect()
}

/// Flavor messages shown while a generation is in flight.
pub const LOADING_MESSAGES: &[&str] = &[
    "Warming up the AI's creative circuits...",
    "Teaching pixels to dance...",
    "Composing a symphony of light and motion...",
    "Gathering stardust for your scene...",
    "Directing the digital actors...",
    "Rendering your vision into reality...",
    "This can take a few minutes, the magic is happening.",
    "The final masterpiece is almost ready...",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tracks_are_well_formed() {
        let tracks = builtin_tracks();
        assert_eq!(tracks.len(), 4);
        assert!(tracks.iter().any(|t| t.id == "cinematic"));
        for track in &tracks {
            assert_eq!(track.url.scheme(), "https");
            assert!(!track.name.is_empty());
        }
    }
}
