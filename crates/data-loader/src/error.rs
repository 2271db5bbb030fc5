//! Error types shared by the loader and the analysis pipeline.
//!
//! Every failure is fatal to a run. The CLI only needs to know which of the
//! three kinds it is looking at (bad input, unreadable file, bad file
//! contents), so each variant reports an [`ErrorKind`] alongside its message.

use thiserror::Error;

/// The broad category of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Grouping, order or count rejected before any file is touched
    Input,
    /// A data file could not be opened or read
    FileAccess,
    /// A data file was read but its contents are not what we expect
    FileFormat,
}

/// Errors that can occur while validating input, loading data, or ranking
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Invalid grouping, order, or result count
    #[error("{0}")]
    Input(String),

    /// File could not be opened or read
    #[error("Unable to open {file} for reading ({source})")]
    FileAccess {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// Line split into the wrong number of fields
    #[error("Invalid data detected in {file} at line {line}, expected [{expected}], got [{content}]")]
    FileFormat {
        file: String,
        line: usize,
        expected: String,
        content: String,
    },

    /// Field present but its value could not be interpreted
    #[error("Invalid {field} in {file} at line {line}: {value}")]
    InvalidField {
        file: String,
        line: usize,
        field: String,
        value: String,
    },

    /// Rating for a movie that movies.dat never declared
    #[error("Rating in {file} at line {line} refers to unknown movie {movie_id}")]
    UnknownMovie {
        file: String,
        line: usize,
        movie_id: u32,
    },

    /// Same user listed twice in users.dat
    #[error("User {user_id} in {file} at line {line} was already listed")]
    DuplicateUser {
        file: String,
        line: usize,
        user_id: u32,
    },

    /// Ranked movie with no entry in the loaded data
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: u32 },
}

impl AnalysisError {
    /// Which of the three error kinds this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Input(_) => ErrorKind::Input,
            AnalysisError::FileAccess { .. } => ErrorKind::FileAccess,
            AnalysisError::FileFormat { .. }
            | AnalysisError::InvalidField { .. }
            | AnalysisError::UnknownMovie { .. }
            | AnalysisError::DuplicateUser { .. }
            | AnalysisError::MissingReference { .. } => ErrorKind::FileFormat,
        }
    }
}

/// Convenience type alias for Results in this workspace
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let input = AnalysisError::Input("bad".to_string());
        assert_eq!(input.kind(), ErrorKind::Input);

        let missing = AnalysisError::UnknownMovie {
            file: "ratings.dat".to_string(),
            line: 3,
            movie_id: 42,
        };
        assert_eq!(missing.kind(), ErrorKind::FileFormat);

        let reference = AnalysisError::MissingReference {
            entity: "Movie".to_string(),
            id: 42,
        };
        assert_eq!(reference.kind(), ErrorKind::FileFormat);
        assert_eq!(reference.to_string(), "Missing reference: Movie with id 42");
    }

    #[test]
    fn test_file_format_message() {
        let err = AnalysisError::FileFormat {
            file: "movies.dat".to_string(),
            line: 7,
            expected: "MovieID::Title::Genres".to_string(),
            content: "1::Toy Story".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid data detected in movies.dat at line 7, expected [MovieID::Title::Genres], got [1::Toy Story]"
        );
    }
}
