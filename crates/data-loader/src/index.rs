//! Building a DataSet from the three .dat files.
//!
//! Files are loaded one after another, each fully consumed and closed before
//! the next is opened. Any error aborts the whole load.

use crate::error::{AnalysisError, Result};
use crate::parser::{self, FileKind, RecordDecoder};
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

impl DataSet {
    /// Load the dataset found in `data_dir`, grouping users by `grouping`.
    ///
    /// Steps:
    /// 1. movies.dat  -> movie titles
    /// 2. ratings.dat -> per-user rating maps (every movie must exist)
    /// 3. users.dat   -> group membership
    #[instrument(skip(data_dir), fields(data_dir = %data_dir.display()))]
    pub fn load_from_dir(data_dir: &Path, grouping: GroupingMode) -> Result<Self> {
        let mut data = DataSet::new();
        let mut seen_users = HashSet::new();

        for kind in FileKind::ALL {
            let path = data_dir.join(kind.file_name());
            let decoder = RecordDecoder::new(kind);
            debug!("Loading {}", path.display());

            let lines = match kind {
                FileKind::Movies => data.load_movies(&path, &decoder)?,
                FileKind::Ratings => data.load_ratings(&path, &decoder)?,
                FileKind::Users => data.load_users(&path, &decoder, grouping, &mut seen_users)?,
            };
            debug!("Read {} lines from {}", lines, kind.file_name());
        }

        let (movies, users, ratings, groups) = data.counts();
        info!(
            "Loaded {} movies, {} ratings from {} users, {} {} groups",
            movies, ratings, users, groups, grouping
        );
        Ok(data)
    }

    fn load_movies(&mut self, path: &Path, decoder: &RecordDecoder) -> Result<usize> {
        let mut lines = 0;
        parser::for_each_line(path, decoder.kind(), |line_no, line| {
            let movie = parser::parse_movie(decoder, line_no, line)?;
            self.insert_movie(movie);
            lines = line_no;
            Ok(())
        })?;
        Ok(lines)
    }

    fn load_ratings(&mut self, path: &Path, decoder: &RecordDecoder) -> Result<usize> {
        let mut lines = 0;
        parser::for_each_line(path, decoder.kind(), |line_no, line| {
            let rating = parser::parse_rating(decoder, line_no, line)?;
            if !self.movies.contains_key(&rating.movie_id) {
                return Err(AnalysisError::UnknownMovie {
                    file: decoder.kind().file_name().to_string(),
                    line: line_no,
                    movie_id: rating.movie_id,
                });
            }
            self.insert_rating(rating);
            lines = line_no;
            Ok(())
        })?;
        Ok(lines)
    }

    fn load_users(
        &mut self,
        path: &Path,
        decoder: &RecordDecoder,
        grouping: GroupingMode,
        seen: &mut HashSet<UserId>,
    ) -> Result<usize> {
        let mut lines = 0;
        parser::for_each_line(path, decoder.kind(), |line_no, line| {
            let user = parser::parse_user(decoder, grouping, line_no, line)?;
            if !seen.insert(user.id) {
                return Err(AnalysisError::DuplicateUser {
                    file: decoder.kind().file_name().to_string(),
                    line: line_no,
                    user_id: user.id,
                });
            }
            self.insert_user(user);
            lines = line_no;
            Ok(())
        })?;
        Ok(lines)
    }
}
