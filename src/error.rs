use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum Error {
    // Resolution failures; the message is the reply.
    #[error("Unknown location")]
    UnknownLocation,
    #[error("Unknown type")]
    UnknownType,
    #[error("Unknown shiptype")]
    UnknownShiptype,
    #[error("Could not find user \"{0}\"")]
    UnknownUser(String),
    #[error("Could not find a unique apicall for \"{0}\"")]
    UnknownApiCall(String),

    // The query succeeded but the target data is absent. "No market" and
    // "market exists but this type was never priced" are distinct replies.
    #[error("No data for that market")]
    NoMarketData,
    #[error("Prices for {0} not updated yet")]
    PricesNotUpdated(String),

    // Startup configuration. An unresolved corporation blocks every
    // corporation-scoped command until fixed.
    #[error("EVESpai requires that you set a corporation")]
    CorporationNotConfigured,
    #[error("Could not find corporation \"{0}\" in stationspinner database")]
    CorporationNotFound(String),
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },

    #[error("Server status response could not be interpreted: {0}")]
    MalformedStatus(String),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
}

impl Error {
    /// The single reply line shown to the chat user for this failure.
    ///
    /// Upstream failures log their detail and reply with a generic line;
    /// everything else displays as-is. No internal identifiers reach the
    /// channel.
    pub fn reply_line(&self) -> String {
        match self {
            Error::DbErr(err) => {
                error!("Database error: {err}");
                "Database error, try again later".to_string()
            }
            Error::HttpError(err) => {
                error!("Upstream request failed: {err}");
                "Could not reach the Tranquility status service".to_string()
            }
            err => err.to_string(),
        }
    }
}
