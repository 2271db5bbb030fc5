//! Record decoding for the MovieLens .dat files.
//!
//! Each file holds one `::`-separated record per line, no header:
//! - movies.dat: MovieID::Title::Genres
//! - ratings.dat: UserID::MovieID::Rating::Timestamp
//! - users.dat: UserID::Gender::Age::Occupation::Zip-code

use crate::error::{AnalysisError, Result};
use crate::types::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Separator between fields on every line of every file
pub const FIELD_SEPARATOR: &str = "::";

/// The three files a dataset is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Movies,
    Ratings,
    Users,
}

impl FileKind {
    /// Load order. Movies come first so ratings can be checked against them.
    pub const ALL: [FileKind; 3] = [FileKind::Movies, FileKind::Ratings, FileKind::Users];

    pub fn file_name(&self) -> &'static str {
        match self {
            FileKind::Movies => "movies.dat",
            FileKind::Ratings => "ratings.dat",
            FileKind::Users => "users.dat",
        }
    }

    /// Declared layout of one line, shown back to the user on errors
    pub fn line_format(&self) -> &'static str {
        match self {
            FileKind::Movies => "MovieID::Title::Genres",
            FileKind::Ratings => "UserID::MovieID::Rating::Timestamp",
            FileKind::Users => "UserID::Gender::Age::Occupation::Zip-code",
        }
    }

    pub fn field_count(&self) -> usize {
        self.line_format().split(FIELD_SEPARATOR).count()
    }
}

/// Splits lines of one file kind into exactly the expected number of fields.
///
/// The expected count is worked out once when the decoder is built.
#[derive(Debug, Clone, Copy)]
pub struct RecordDecoder {
    kind: FileKind,
    expected: usize,
}

impl RecordDecoder {
    pub fn new(kind: FileKind) -> Self {
        Self {
            kind,
            expected: kind.field_count(),
        }
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Split `line` (1-based `line_no`) into its fields
    pub fn decode<'a>(&self, line_no: usize, line: &'a str) -> Result<Vec<&'a str>> {
        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if parts.len() != self.expected {
            return Err(AnalysisError::FileFormat {
                file: self.kind.file_name().to_string(),
                line: line_no,
                expected: self.kind.line_format().to_string(),
                content: line.to_string(),
            });
        }
        Ok(parts)
    }

    fn parse_number<T: FromStr>(&self, line_no: usize, field: &str, value: &str) -> Result<T> {
        value.trim().parse().map_err(|_| AnalysisError::InvalidField {
            file: self.kind.file_name().to_string(),
            line: line_no,
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    fn invalid(&self, line_no: usize, field: &str, value: &str) -> AnalysisError {
        AnalysisError::InvalidField {
            file: self.kind.file_name().to_string(),
            line: line_no,
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Parse one movies.dat line. Genres are discarded.
pub fn parse_movie(decoder: &RecordDecoder, line_no: usize, line: &str) -> Result<Movie> {
    let parts = decoder.decode(line_no, line)?;
    Ok(Movie {
        id: decoder.parse_number(line_no, "MovieID", parts[0])?,
        title: parts[1].to_string(),
    })
}

/// Parse one ratings.dat line. The timestamp is discarded.
///
/// The rating only has to be an integer; its range is not checked.
pub fn parse_rating(decoder: &RecordDecoder, line_no: usize, line: &str) -> Result<Rating> {
    let parts = decoder.decode(line_no, line)?;
    Ok(Rating {
        user_id: decoder.parse_number(line_no, "UserID", parts[0])?,
        movie_id: decoder.parse_number(line_no, "MovieID", parts[1])?,
        rating: decoder.parse_number(line_no, "Rating", parts[2])?,
    })
}

/// Parse one users.dat line into the group `grouping` selects.
///
/// Only the field the grouping keys on is interpreted; the other one,
/// occupation and zip code are discarded unchecked.
pub fn parse_user(
    decoder: &RecordDecoder,
    grouping: GroupingMode,
    line_no: usize,
    line: &str,
) -> Result<User> {
    let parts = decoder.decode(line_no, line)?;
    let id = decoder.parse_number(line_no, "UserID", parts[0])?;
    let group = match grouping {
        GroupingMode::Gender => {
            let gender = Gender::from_code(parts[1].trim())
                .ok_or_else(|| decoder.invalid(line_no, "Gender", parts[1]))?;
            GroupKey::Gender(gender)
        }
        GroupingMode::AgeGroup => {
            let age_code = decoder.parse_number(line_no, "Age", parts[2])?;
            let age = AgeGroup::from_code(age_code)
                .ok_or_else(|| decoder.invalid(line_no, "Age", parts[2]))?;
            GroupKey::Age(age)
        }
    };
    Ok(User { id, group })
}

/// Feed every line of a data file to `handle`, with its 1-based line number.
///
/// The MovieLens files are ISO-8859-1, not UTF-8. Each byte maps directly to
/// the Unicode code point of the same value, so lines are widened byte by byte.
/// The file is closed when this returns, whether `handle` failed or not.
pub fn for_each_line<F>(path: &Path, kind: FileKind, mut handle: F) -> Result<()>
where
    F: FnMut(usize, &str) -> Result<()>,
{
    let access_error = |source: std::io::Error| AnalysisError::FileAccess {
        file: kind.file_name().to_string(),
        source,
    };

    let file = File::open(path).map_err(access_error)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    let mut line_no = 0;

    loop {
        bytes.clear();
        let read = reader.read_until(b'\n', &mut bytes).map_err(access_error)?;
        if read == 0 {
            break;
        }
        line_no += 1;

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
        }
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line: String = bytes.iter().map(|&b| b as char).collect();
        handle(line_no, &line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_counts() {
        assert_eq!(FileKind::Movies.field_count(), 3);
        assert_eq!(FileKind::Ratings.field_count(), 4);
        assert_eq!(FileKind::Users.field_count(), 5);
    }

    #[test]
    fn test_decode_wrong_field_count() {
        let decoder = RecordDecoder::new(FileKind::Ratings);
        let err = decoder.decode(12, "10::1::5").unwrap_err();
        match err {
            AnalysisError::FileFormat { file, line, expected, content } => {
                assert_eq!(file, "ratings.dat");
                assert_eq!(line, 12);
                assert_eq!(expected, "UserID::MovieID::Rating::Timestamp");
                assert_eq!(content, "10::1::5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_line_is_rejected() {
        let decoder = RecordDecoder::new(FileKind::Movies);
        assert!(decoder.decode(1, "").is_err());
    }

    #[test]
    fn test_parse_movie_keeps_title() {
        let decoder = RecordDecoder::new(FileKind::Movies);
        let movie = parse_movie(&decoder, 1, "1::Toy Story (1995)::Animation|Children's|Comedy").unwrap();
        assert_eq!(movie.id, 1);
        assert_eq!(movie.title, "Toy Story (1995)");
    }

    #[test]
    fn test_parse_rating() {
        let decoder = RecordDecoder::new(FileKind::Ratings);
        let rating = parse_rating(&decoder, 1, "1::1193::5::978300760").unwrap();
        assert_eq!(rating, Rating { user_id: 1, movie_id: 1193, rating: 5 });
    }

    #[test]
    fn test_parse_rating_rejects_non_integer() {
        let decoder = RecordDecoder::new(FileKind::Ratings);
        let err = parse_rating(&decoder, 4, "1::1193::4.5::978300760").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidField { ref field, line: 4, .. } if field == "Rating"));
    }

    #[test]
    fn test_parse_rating_accepts_negative_integer() {
        let decoder = RecordDecoder::new(FileKind::Ratings);
        let rating = parse_rating(&decoder, 1, "10::1::-1::0").unwrap();
        assert_eq!(rating.rating, -1);
    }

    #[test]
    fn test_parse_user_by_gender() {
        let decoder = RecordDecoder::new(FileKind::Users);
        let user = parse_user(&decoder, GroupingMode::Gender, 1, "2::M::56::16::70072").unwrap();
        assert_eq!(user, User { id: 2, group: GroupKey::Gender(Gender::Male) });
    }

    #[test]
    fn test_parse_user_by_age() {
        let decoder = RecordDecoder::new(FileKind::Users);
        let user = parse_user(&decoder, GroupingMode::AgeGroup, 1, "2::M::56::16::70072").unwrap();
        assert_eq!(user, User { id: 2, group: GroupKey::Age(AgeGroup::Age56Plus) });
    }

    #[test]
    fn test_parse_user_unknown_age_code() {
        let decoder = RecordDecoder::new(FileKind::Users);
        let err = parse_user(&decoder, GroupingMode::AgeGroup, 9, "2::M::30::16::70072").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidField { ref field, line: 9, .. } if field == "Age"));
    }

    #[test]
    fn test_parse_user_ignores_field_not_grouped_on() {
        let decoder = RecordDecoder::new(FileKind::Users);

        let user = parse_user(&decoder, GroupingMode::Gender, 1, "10::M::30::1::1").unwrap();
        assert_eq!(user.group, GroupKey::Gender(Gender::Male));

        let user = parse_user(&decoder, GroupingMode::AgeGroup, 1, "10::X::25::1::1").unwrap();
        assert_eq!(user.group, GroupKey::Age(AgeGroup::Age25To34));

        let err = parse_user(&decoder, GroupingMode::Gender, 1, "10::X::25::1::1").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidField { ref field, .. } if field == "Gender"));
    }
}
