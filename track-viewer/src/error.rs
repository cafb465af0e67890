use snafu::{Location, Snafu};
use track_core::{FetchError, ProjectionError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to load settings: {error}"))]
    Settings {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: config::ConfigError,
    },
    #[snafu(display("Failed to create the track client"))]
    Client {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: http_client::Error,
    },
    #[snafu(display("Failed to fetch vessel track: {source}"))]
    Fetch {
        #[snafu(implicit)]
        location: Location,
        source: FetchError,
    },
    #[snafu(display("Failed to project vessel track: {source}"))]
    Projection {
        #[snafu(implicit)]
        location: Location,
        source: ProjectionError,
    },
    #[snafu(display("Failed to serialize map: {error}"))]
    Serialize {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: serde_json::Error,
    },
    #[snafu(display("Failed to write map output: {error}"))]
    Output {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
}

impl Error {
    pub fn fetch_error(&self) -> Option<&FetchError> {
        match self {
            Error::Fetch { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn projection_error(&self) -> Option<&ProjectionError> {
        match self {
            Error::Projection { source, .. } => Some(source),
            _ => None,
        }
    }
}
