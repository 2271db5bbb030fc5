//! # Data Loader Crate
//!
//! This crate loads the MovieLens 1M dataset files into memory, grouping
//! users by gender or age bracket as it goes.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, User, GroupKey, DataSet)
//! - **parser**: Split and type the `::`-separated records of each .dat file
//! - **index**: Load a whole directory into a DataSet
//! - **error**: Error type shared with the analysis pipeline
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DataSet, GroupingMode};
//! use std::path::Path;
//!
//! let data = DataSet::load_from_dir(Path::new("data/ml-1m"), GroupingMode::Gender)?;
//!
//! for (key, users) in data.groups() {
//!     println!("{}: {} users", key.label(), users.len());
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{AnalysisError, ErrorKind, Result};
pub use parser::{FileKind, RecordDecoder};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    User,
    Movie,
    Rating,
    DataSet,
    GroupKey,
    // Enums
    Gender,
    AgeGroup,
    GroupingMode,
};
