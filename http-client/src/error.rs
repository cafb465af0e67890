use reqwest::StatusCode;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to build HTTP client"))]
    Build {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest::Error,
    },
    #[snafu(display("HTTP request could not be completed"))]
    Request {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest_middleware::Error,
    },
    #[snafu(display("Failed to read HTTP response body"))]
    Body {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest::Error,
    },
    #[snafu(display("HTTP request failed, status: '{status}', url: '{url}', body: '{body}'"))]
    FailedRequest {
        #[snafu(implicit)]
        location: Location,
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Build { .. } | Error::Request { .. } | Error::Body { .. } => None,
            Error::FailedRequest { status, .. } => Some(*status),
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Request {
                error: reqwest_middleware::Error::Reqwest(e),
                ..
            } => e.is_timeout(),
            Error::Request { .. } => false,
            Error::Body { error, .. } => error.is_timeout(),
            Error::Build { .. } | Error::FailedRequest { .. } => false,
        }
    }

    pub fn is_connect(&self) -> bool {
        match self {
            Error::Request {
                error: reqwest_middleware::Error::Reqwest(e),
                ..
            } => e.is_connect(),
            Error::Request { .. } => false,
            Error::Build { .. } | Error::Body { .. } | Error::FailedRequest { .. } => false,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    #[track_caller]
    fn from(error: reqwest_middleware::Error) -> Self {
        Error::Request {
            location: caller_location(),
            error,
        }
    }
}

impl From<reqwest::Error> for Error {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        Error::Body {
            location: caller_location(),
            error,
        }
    }
}

#[track_caller]
fn caller_location() -> Location {
    let location = std::panic::Location::caller();
    Location::new(location.file(), location.line(), location.column())
}
