use thiserror::Error;

/// An error that can occur when turning rows into GTFS records.
///
/// Data-quality problems (missing fields, dangling references…) are not errors,
/// see [crate::Problem].
#[derive(Error, Debug)]
pub enum Error {
    /// A mandatory file is not present in the row source
    #[error("Could not find file {0}")]
    MissingFile(String),
    /// The time is not in the `HH:MM:SS` format
    #[error("'{0}' is not a valid time")]
    InvalidTime(String),
    /// The color is not a six characters hexadecimal string
    #[error("'{0}' is not a valid color")]
    InvalidColor(String),
    /// The date is not in the `YYYYMMDD` format
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
    /// Generic input/output error
    #[error("impossible to read or write rows")]
    IO(#[from] std::io::Error),
    /// The csv text could not be tokenized
    #[error("impossible to read csv file '{file_name}'")]
    CSVError {
        /// File name that could not be read
        file_name: String,
        /// The initial error that caused the failure
        #[source]
        source: csv::Error,
    },
}
