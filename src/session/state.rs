use crate::models::{FeatureWeights, Recommendation, Song};

/// Which screen the shell is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Recommendations,
    LikedSongs,
}

/// Everything the client remembers for one run. Nothing here outlives the
/// process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Favorites typed but not yet successfully submitted
    pub pending_favorites_text: String,
    pub current_recommendation: Option<Recommendation>,
    /// Append-only, in the order songs were liked
    pub liked_songs: Vec<Song>,
    /// Last weights returned by the service. Empty until the first feedback.
    pub feature_weights: FeatureWeights,
    /// One-way switch; once set, new recommendations are never displayed
    pub stopped: bool,
    pub view: View,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn liked_uris(&self) -> Vec<String> {
        self.liked_songs.iter().map(|song| song.uri.clone()).collect()
    }
}
