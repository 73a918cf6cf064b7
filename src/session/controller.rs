use super::state::{Session, View};
use crate::client::RecommendationService;
use crate::error::{ActionError, ServiceError, ServiceResult};
use crate::models::{
    FeedbackRequest, FeedbackResponse, NewSong, Recommendation, RecommendationRequest,
    RecommendationsResponse, Song, Verdict,
};
use tracing::{debug, error, info, warn};

/// Split free-text favorites on commas and trim each entry.
/// Empty entries are kept.
pub fn split_favorites(raw: &str) -> Vec<String> {
    raw.split(',').map(|song| song.trim().to_string()).collect()
}

/// A feedback call that has been sent but not yet applied. Remembers the
/// recommendation that was on screen when the user voted.
#[derive(Debug, Clone)]
pub struct PendingFeedback {
    pub request: FeedbackRequest,
    rated: Option<Recommendation>,
}

/// What a successful fetch did to the session
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// False when the session is stopped and the result was discarded
    pub displayed: bool,
    pub new_songs: Vec<NewSong>,
}

/// Owns the session and drives it against the recommendation service.
///
/// Network actions come in two halves: `prepare_*` snapshots a request from
/// the current state and `apply_*` folds a response back in. The `submit_*`
/// methods do both around a blocking call. Responses are applied in the
/// order they arrive, so when requests overlap the last one applied wins.
pub struct SessionController<S> {
    service: S,
    session: Session,
}

impl<S: RecommendationService> SessionController<S> {
    pub fn new(service: S) -> Self {
        SessionController {
            service,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Record in-progress favorites input without submitting it
    pub fn set_pending_favorites(&mut self, text: &str) {
        self.session.pending_favorites_text = text.to_string();
    }

    pub fn navigate(&mut self, view: View) {
        self.session.view = view;
    }

    pub fn prepare_favorites(&self, raw: &str) -> RecommendationRequest {
        RecommendationRequest {
            favorite_songs: split_favorites(raw),
            liked_songs: self.session.liked_uris(),
            feature_weights: self.session.feature_weights.resolved(),
        }
    }

    pub fn apply_recommendations(
        &mut self,
        result: ServiceResult<RecommendationsResponse>,
    ) -> ServiceResult<FetchOutcome> {
        let response = result.inspect_err(|e| {
            error!(error = %e, "fetching recommendations failed");
        })?;

        // Stopped sessions never look at the list, empty or not
        if self.session.stopped {
            debug!(
                count = response.recommendations.len(),
                "recommendations stopped, discarding result"
            );
            self.session.pending_favorites_text.clear();
            return Ok(FetchOutcome {
                displayed: false,
                new_songs: response.new_songs,
            });
        }

        let Some(first) = response.recommendations.into_iter().next() else {
            let err = ServiceError::EmptyRecommendations;
            error!(error = %err, "fetching recommendations failed");
            return Err(err);
        };

        info!(uri = %first.uri, "showing recommendation");
        self.session.current_recommendation = Some(first);
        self.session.pending_favorites_text.clear();

        Ok(FetchOutcome {
            displayed: true,
            new_songs: response.new_songs,
        })
    }

    /// Submit comma-separated favorites and show the first recommendation.
    /// Pending text is only touched once the call succeeds.
    pub fn submit_favorites(&mut self, raw: &str) -> ServiceResult<FetchOutcome> {
        let request = self.prepare_favorites(raw);
        debug!(favorites = ?request.favorite_songs, "requesting recommendations");
        let result = self.service.fetch_recommendations(&request);
        self.apply_recommendations(result)
    }

    /// Submit whatever favorites text is pending
    pub fn submit_pending(&mut self) -> ServiceResult<FetchOutcome> {
        let raw = self.session.pending_favorites_text.clone();
        self.submit_favorites(&raw)
    }

    /// Hide the current recommendation and never display another one this
    /// session
    pub fn stop_recommendations(&mut self) {
        info!("recommendations stopped");
        self.session.stopped = true;
        self.session.current_recommendation = None;
    }

    pub fn prepare_feedback(&self, song_uri: &str, verdict: Verdict) -> PendingFeedback {
        PendingFeedback {
            request: FeedbackRequest {
                song_uri: song_uri.to_string(),
                feedback: verdict,
                liked_songs: self.session.liked_uris(),
                feature_weights: self.session.feature_weights.resolved(),
            },
            rated: self.session.current_recommendation.clone(),
        }
    }

    pub fn apply_feedback(
        &mut self,
        pending: PendingFeedback,
        result: ServiceResult<FeedbackResponse>,
    ) -> ServiceResult<()> {
        let response = result.inspect_err(|e| {
            error!(error = %e, "submitting feedback failed");
        })?;

        if let Some(message) = &response.message {
            debug!(%message, "feedback acknowledged");
        }
        if response.feature_weights.is_empty() {
            warn!("service returned no feature weights, defaults apply from here on");
        } else {
            debug!(count = response.feature_weights.len(), "feature weights updated");
        }
        self.session.feature_weights = response.feature_weights;

        if pending.request.feedback == Verdict::Like {
            if let Some(rated) = pending.rated {
                info!(uri = %rated.uri, "liked");
                self.session.liked_songs.push(Song::from(rated));
            }
        }

        self.session.current_recommendation = match response.next_recommendation {
            Some(next) if !self.session.stopped => {
                info!(uri = %next.uri, "showing next recommendation");
                Some(next)
            }
            _ => None,
        };

        Ok(())
    }

    /// Rate a song and move on to whatever the service suggests next
    pub fn submit_feedback(&mut self, song_uri: &str, verdict: Verdict) -> ServiceResult<()> {
        let pending = self.prepare_feedback(song_uri, verdict);
        debug!(song_uri, ?verdict, "submitting feedback");
        let result = self.service.submit_feedback(&pending.request);
        self.apply_feedback(pending, result)
    }

    pub fn like_current(&mut self) -> Result<(), ActionError> {
        self.rate_current(Verdict::Like)
    }

    pub fn dislike_current(&mut self) -> Result<(), ActionError> {
        self.rate_current(Verdict::Dislike)
    }

    fn rate_current(&mut self, verdict: Verdict) -> Result<(), ActionError> {
        let uri = match &self.session.current_recommendation {
            Some(rec) => rec.uri.clone(),
            None => return Err(ActionError::NothingToRate),
        };
        Ok(self.submit_feedback(&uri, verdict)?)
    }
}
