//! Density clustering for 2D point sets.
//!
//! `speckle` is a small library that partitions a sequence of 2D points into
//! density-based clusters plus noise, using DBSCAN.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Dbscan`]: the clustering engine (`eps` radius, `min_pts` density threshold)
//! - [`neighbors`]: the brute-force radius query DBSCAN is built on
//!
//! ```rust
//! use speckle::{Dbscan, Label, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(100.0, 100.0),
//! ];
//!
//! let labeled = Dbscan::new(5.0, 2).cluster(&points);
//! assert_eq!(labeled[0].1, Label::Cluster(1));
//! assert_eq!(labeled[3].1, Label::Noise);
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
mod point;

pub use cluster::{neighbors, Clustering, Dbscan, DbscanExt, Label};
pub use error::{Error, Result};
pub use point::Point;
