//! Core domain types for the MovieLens dataset.
//!
//! Everything here is built once during loading and only read afterwards.

use crate::error::AnalysisError;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user (1-6040 in MovieLens 1M)
pub type UserId = u32;

/// Unique identifier for a movie (varies in MovieLens 1M)
pub type MovieId = u32;

// =============================================================================
// User-related Types
// =============================================================================

/// Gender as recorded in users.dat.
///
/// Declared in the order the report lists groups (`F` sorts before `M`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Parse the single-letter code used by users.dat
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "F" => Some(Gender::Female),
            "M" => Some(Gender::Male),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

/// Age brackets from the MovieLens dataset.
///
/// users.dat stores the lower bound of the bracket as a raw number;
/// variants are declared in ascending order of that code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeGroup {
    Under18,
    Age18To24,
    Age25To34,
    Age35To44,
    Age45To49,
    Age50To55,
    Age56Plus,
}

impl AgeGroup {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(AgeGroup::Under18),
            18 => Some(AgeGroup::Age18To24),
            25 => Some(AgeGroup::Age25To34),
            35 => Some(AgeGroup::Age35To44),
            45 => Some(AgeGroup::Age45To49),
            50 => Some(AgeGroup::Age50To55),
            56 => Some(AgeGroup::Age56Plus),
            _ => None,
        }
    }

    /// The raw code as it appears in users.dat
    pub fn code(&self) -> u32 {
        match self {
            AgeGroup::Under18 => 1,
            AgeGroup::Age18To24 => 18,
            AgeGroup::Age25To34 => 25,
            AgeGroup::Age35To44 => 35,
            AgeGroup::Age45To49 => 45,
            AgeGroup::Age50To55 => 50,
            AgeGroup::Age56Plus => 56,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Under18 => "Under 18",
            AgeGroup::Age18To24 => "18-24",
            AgeGroup::Age25To34 => "25-34",
            AgeGroup::Age35To44 => "35-44",
            AgeGroup::Age45To49 => "45-49",
            AgeGroup::Age50To55 => "50-55",
            AgeGroup::Age56Plus => "56+",
        }
    }
}

/// A user as far as the analysis cares: only the group the run's grouping
/// mode puts them in is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub group: GroupKey,
}

// =============================================================================
// Grouping
// =============================================================================

/// Which user attribute partitions the users into groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingMode {
    Gender,
    AgeGroup,
}

impl GroupingMode {
    pub const ALLOWED: [&'static str; 2] = ["gender", "agegroup"];
}

impl FromStr for GroupingMode {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gender" => Ok(GroupingMode::Gender),
            "agegroup" => Ok(GroupingMode::AgeGroup),
            other => Err(AnalysisError::Input(format!(
                "{} is not a valid request type. Supported types are: ({})",
                other,
                Self::ALLOWED.join(", ")
            ))),
        }
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingMode::Gender => write!(f, "gender"),
            GroupingMode::AgeGroup => write!(f, "agegroup"),
        }
    }
}

/// Key of one group. Ordering gives the order sections appear in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Gender(Gender),
    Age(AgeGroup),
}

impl GroupKey {
    /// Human-readable name used in report headers
    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::Gender(gender) => gender.label(),
            GroupKey::Age(age) => age.label(),
        }
    }
}

// =============================================================================
// Movie and Rating Types
// =============================================================================

/// Represents a movie in the dataset (genres are not kept)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
}

/// A single rating from a user for a movie (timestamp is not kept)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value, 1 to 5 by dataset convention but not checked
    pub rating: i32,
}

// =============================================================================
// DataSet - everything one run works on
// =============================================================================

/// All data for one run, keyed for the aggregation step.
///
/// Owned by a single run and never shared between runs.
#[derive(Debug, Default)]
pub struct DataSet {
    pub(crate) movies: HashMap<MovieId, Movie>,
    /// ratings[user][movie] = rating
    pub(crate) ratings: HashMap<UserId, HashMap<MovieId, i32>>,
    /// Group key -> member user ids, in users.dat order
    pub(crate) groups: BTreeMap<GroupKey, Vec<UserId>>,
}

impl DataSet {
    /// Creates a new, empty DataSet
    pub fn new() -> Self {
        Self {
            movies: HashMap::new(),
            ratings: HashMap::new(),
            groups: BTreeMap::new(),
        }
    }

    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// All ratings made by a user, keyed by movie. `None` if the user rated nothing.
    pub fn get_user_ratings(&self, user_id: UserId) -> Option<&HashMap<MovieId, i32>> {
        self.ratings.get(&user_id)
    }

    /// Members of one group
    pub fn get_group(&self, key: GroupKey) -> &[UserId] {
        self.groups
            .get(&key)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Groups in ascending key order
    pub fn groups(&self) -> impl Iterator<Item = (GroupKey, &[UserId])> {
        self.groups.iter().map(|(key, users)| (*key, users.as_slice()))
    }

    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// A repeated (user, movie) pair replaces the earlier rating
    pub fn insert_rating(&mut self, rating: Rating) {
        self.ratings
            .entry(rating.user_id)
            .or_default()
            .insert(rating.movie_id, rating.rating);
    }

    /// Append the user to their group
    pub fn insert_user(&mut self, user: User) {
        self.groups.entry(user.group).or_default().push(user.id);
    }

    /// (movies, users with ratings, ratings, groups)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        let total_ratings = self.ratings.values().map(|m| m.len()).sum();
        (
            self.movies.len(),
            self.ratings.len(),
            total_ratings,
            self.groups.len(),
        )
    }
}
