use thiserror::Error;

/// The one thing the user is ever told about a failed call
pub const SERVICE_NOTICE: &str =
    "The recommendation service is unreachable or returned an error. Please try again later.";

/// Failures talking to the recommendation service.
///
/// The variants only matter for the developer log. Users see
/// [`SERVICE_NOTICE`] for all of them.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode service response: {0}")]
    Decode(String),

    #[error("service returned an empty recommendation list")]
    EmptyRecommendations,
}

impl ServiceError {
    pub fn notice(&self) -> &'static str {
        SERVICE_NOTICE
    }
}

impl From<ureq::Error> for ServiceError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => ServiceError::Status {
                status,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => ServiceError::Transport(transport.to_string()),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures of a user action on the session
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("there is no recommendation to rate")]
    NothingToRate,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ActionError {
    pub fn notice(&self) -> &'static str {
        match self {
            ActionError::NothingToRate => "Nothing to rate yet. Ask for recommendations first.",
            ActionError::Service(err) => err.notice(),
        }
    }
}
