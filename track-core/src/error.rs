use snafu::{Location, Snafu};

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum MmsiError {
    #[snafu(display("Mmsi is required"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Mmsi must consist of exactly nine digits, got '{value}'"))]
    Shape {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum QueryError {
    #[snafu(display("{source}"))]
    Mmsi {
        #[snafu(implicit)]
        location: Location,
        source: MmsiError,
    },
    #[snafu(display("Days are required"))]
    MissingDays {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Days must be a positive integer, got '{value}'"))]
    InvalidDays {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
}

/// Failure to retrieve a vessel track. No partial results accompany either variant.
#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum FetchError {
    #[snafu(display("Track request failed: {cause}"))]
    Transport {
        #[snafu(implicit)]
        location: Location,
        cause: String,
    },
    #[snafu(display("Track response was not in the expected shape: {cause}"))]
    InvalidResponse {
        #[snafu(implicit)]
        location: Location,
        cause: String,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ProjectionError {
    #[snafu(display("Track contained no position records"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("None of the {records} position records had a valid coordinate"))]
    NoValidPoints {
        #[snafu(implicit)]
        location: Location,
        records: usize,
    },
}
