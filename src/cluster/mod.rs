//! Density-based clustering of 2D point sets.
//!
//! ## Why density clustering
//!
//! Centroid methods (k-means and friends) need the number of clusters up
//! front and assume roughly spherical groups. Point sets collected
//! interactively have neither property: the user draws however many blobs
//! they like, in whatever shape they like, with stray points in between.
//!
//! DBSCAN instead grows clusters from regions that are locally dense and
//! leaves everything else labeled as noise. The number of clusters falls out
//! of the data.
//!
//! ## Structure
//!
//! - [`neighbors`] answers radius queries against a point slice by
//!   brute-force scan.
//! - [`Dbscan`] drives the scan-and-expand algorithm on top of it and
//!   produces one [`Label`] per input point.
//! - [`Clustering`] is the common fit-predict interface; [`DbscanExt`] adds
//!   a noise-aware variant of it.
//!
//! ## Usage
//!
//! ```rust
//! use speckle::{Clustering, Dbscan, Label, Point};
//!
//! let points: Vec<Point> = vec![
//!     (0.0, 0.0).into(),
//!     (0.5, 0.5).into(),
//!     (10.0, 10.0).into(),
//!     (10.5, 10.5).into(),
//! ];
//!
//! // Full labeling: cluster ids are 1-based, noise is explicit.
//! let labeled = Dbscan::new(1.0, 2).cluster(&points);
//! assert_eq!(labeled[0].1, Label::Cluster(1));
//! assert_eq!(labeled[2].1, Label::Cluster(2));
//!
//! // Partition view: every point gets a plain label, noise included.
//! let labels = Dbscan::new(1.0, 2).fit_predict(&points).unwrap();
//! assert_eq!(labels.len(), points.len());
//! ```

mod dbscan;
mod neighborhood;
mod traits;

pub use dbscan::{Dbscan, DbscanExt, Label};
pub use neighborhood::neighbors;
pub use traits::Clustering;
