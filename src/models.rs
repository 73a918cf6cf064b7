use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single suggested track, as returned by the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub uri: String,
    pub title: String,
    pub artist: String,
    pub embed_link: String,
}

/// A liked song kept for the "Your Songs" view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub uri: String,
    pub title: String,
    pub artist: String,
}

impl From<Recommendation> for Song {
    fn from(rec: Recommendation) -> Self {
        Song {
            uri: rec.uri,
            title: rec.title,
            artist: rec.artist,
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}

/// Audio features the service weights when picking the next track
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Feature {
    Acousticness,
    Danceability,
    Energy,
    Instrumentalness,
    Liveness,
    Loudness,
    Speechiness,
    Valence,
    Tempo,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::Acousticness,
        Feature::Danceability,
        Feature::Energy,
        Feature::Instrumentalness,
        Feature::Liveness,
        Feature::Loudness,
        Feature::Speechiness,
        Feature::Valence,
        Feature::Tempo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Acousticness => "acousticness",
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Liveness => "liveness",
            Feature::Loudness => "loudness",
            Feature::Speechiness => "speechiness",
            Feature::Valence => "valence",
            Feature::Tempo => "tempo",
        }
    }
}

pub const DEFAULT_FEATURE_WEIGHT: f64 = 1.0;

/// Feature name -> weight multiplier.
///
/// The map held in session state is whatever the service last returned and
/// may be empty or partial. Use [`FeatureWeights::resolved`] to get the
/// nine-key map that goes on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureWeights(BTreeMap<String, f64>);

impl FeatureWeights {
    /// Every known feature at the default weight
    pub fn defaults() -> Self {
        FeatureWeights(
            Feature::ALL
                .iter()
                .map(|f| (f.as_str().to_string(), DEFAULT_FEATURE_WEIGHT))
                .collect(),
        )
    }

    /// Defaults overlaid with the weights held here. Keys the service does
    /// not know about are dropped so the result always has exactly nine keys.
    pub fn resolved(&self) -> Self {
        FeatureWeights(
            Feature::ALL
                .iter()
                .map(|f| (f.as_str().to_string(), self.get(*f)))
                .collect(),
        )
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0
            .get(feature.as_str())
            .copied()
            .unwrap_or(DEFAULT_FEATURE_WEIGHT)
    }

    pub fn set(&mut self, feature: Feature, weight: f64) {
        self.0.insert(feature.as_str().to_string(), weight);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Like/dislike verdict. The service speaks "yes"/"no".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "yes")]
    Like,
    #[serde(rename = "no")]
    Dislike,
}

/// Request body for POST /recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub favorite_songs: Vec<String>,
    pub liked_songs: Vec<String>,
    pub feature_weights: FeatureWeights,
}

/// Response body for POST /recommendations
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    /// Favorites the service had to add to its catalog for this request
    #[serde(default)]
    pub new_songs: Vec<NewSong>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
}

/// Request body for POST /feedback
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRequest {
    pub song_uri: String,
    pub feedback: Verdict,
    pub liked_songs: Vec<String>,
    pub feature_weights: FeatureWeights,
}

/// Response body for POST /feedback
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackResponse {
    pub feature_weights: FeatureWeights,
    #[serde(default)]
    pub next_recommendation: Option<Recommendation>,
    #[serde(default)]
    pub message: Option<String>,
}
