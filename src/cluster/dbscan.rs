//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike centroid methods, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: neighborhood radius. Two points are neighbors when
//!   their distance is strictly below ε.
//! - **MinPts**: minimum neighborhood size for a point to be "core". The
//!   count includes the point itself, so a core point needs `min_pts - 1`
//!   *other* points within ε.
//! - **Core point**: has at least MinPts neighbors within ε.
//! - **Border point**: within ε of a core point but not core itself.
//! - **Noise point**: neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited point P, in input order:
//!    - Find neighbors within ε
//!    - If |neighbors| < MinPts, mark as noise (may change later)
//!    - Else P is core: start new cluster, expand from its neighbors
//!
//! 2. Expansion: work through a queue of candidate indices. Every candidate
//!    joins the cluster; candidates that are themselves core push their own
//!    neighborhoods onto the queue, which is how density-reachability
//!    propagates transitively.
//!
//! A point marked noise in step 1 can be reached by a later expansion and
//! promoted into that cluster. This is standard DBSCAN border-point behavior,
//! not a bug: border points are first seen as noise and re-labeled when
//! reached from a core point.
//!
//! ## Determinism
//!
//! Output depends only on the input order, `eps`, and `min_pts`. Border
//! points equally reachable from two budding clusters go to whichever
//! cluster's expansion reaches them first, so reordering the input can move
//! border points between clusters; core-point membership is stable.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) with the brute-force radius query. Each point's
//!   neighborhood is scanned at most twice per run (once as a seed candidate,
//!   once during expansion).
//! - **Space**: O(n) for labels and the expansion queue.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::VecDeque;

use super::neighborhood::neighbors;
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::point::Point;

/// Per-point clustering state.
///
/// `Unvisited` and `Visiting` are in-flight states; a finished run resolves
/// every point to either `Noise` or `Cluster(id)`. Cluster ids are assigned
/// in discovery order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Not yet reached by the scan.
    Unvisited,
    /// Queued for processing, final classification pending.
    Visiting,
    /// Not density-reachable from any core point.
    Noise,
    /// Member of the cluster with this id (ids start at 1).
    Cluster(usize),
}

impl Label {
    /// Whether this label is the noise marker.
    pub fn is_noise(self) -> bool {
        self == Label::Noise
    }

    /// The cluster id, if this point ended up in a cluster.
    pub fn cluster_id(self) -> Option<usize> {
        match self {
            Label::Cluster(id) => Some(id),
            _ => None,
        }
    }
}

/// DBSCAN clustering algorithm for 2D point sets.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: neighborhood radius (strict upper bound on neighbor distance).
    eps: f32,
    /// Minimum neighborhood size (self-inclusive) for core point classification.
    min_pts: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `eps` - Neighborhood radius; neighbors lie strictly closer than this.
    /// * `min_pts` - Minimum points (including the point itself) to form a dense region.
    pub fn new(eps: f32, min_pts: usize) -> Self {
        Self { eps, min_pts }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_eps(mut self, eps: f32) -> Self {
        self.eps = eps;
        self
    }

    /// Set minimum neighborhood size for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Cluster `points` and return each one paired with its resolved label.
    ///
    /// Output order matches input order. Every returned label is either
    /// [`Label::Noise`] or [`Label::Cluster`]; the in-flight states never
    /// escape.
    ///
    /// Parameters are taken as given: an empty slice yields an empty vector,
    /// `eps <= 0` leaves every point neighborless (all noise for
    /// `min_pts >= 1`), and `min_pts == 0` makes every point core.
    pub fn cluster(&self, points: &[Point]) -> Vec<(Point, Label)> {
        let (labels, _) = self.assign(points);
        points.iter().copied().zip(labels).collect()
    }

    /// Run the scan and return `(labels, cluster_count)`.
    fn assign(&self, points: &[Point]) -> (Vec<Label>, usize) {
        let n = points.len();
        let mut labels = vec![Label::Unvisited; n];
        let mut cluster_count = 0usize;

        for i in 0..n {
            if labels[i] != Label::Unvisited {
                continue;
            }
            labels[i] = Label::Visiting;

            let seeds = neighbors(points, points[i], self.eps);
            if seeds.len() < self.min_pts {
                // Not dense enough: noise for now, possibly a border point later.
                labels[i] = Label::Noise;
            } else {
                cluster_count += 1;
                self.expand(points, i, seeds, cluster_count, &mut labels);
            }
        }

        (labels, cluster_count)
    }

    /// Grow cluster `id` outward from core point `seed`.
    ///
    /// The queue is FIFO so candidates are processed in the order their
    /// neighborhoods were discovered. A point's neighborhood is pushed at
    /// most once per run (only on its `Unvisited -> Visiting` transition),
    /// which bounds the queue and guarantees termination; duplicate queue
    /// entries are skipped once the point holds a cluster id.
    fn expand(
        &self,
        points: &[Point],
        seed: usize,
        seeds: Vec<usize>,
        id: usize,
        labels: &mut [Label],
    ) {
        labels[seed] = Label::Cluster(id);

        let mut queue: VecDeque<usize> = seeds.into();

        while let Some(j) = queue.pop_front() {
            match labels[j] {
                Label::Unvisited => {
                    labels[j] = Label::Visiting;
                    let reachable = neighbors(points, points[j], self.eps);
                    if reachable.len() >= self.min_pts {
                        // j is core: everything it reaches joins the worklist.
                        queue.extend(reachable);
                    }
                    labels[j] = Label::Cluster(id);
                }
                // Border-point promotion: reached from a core point, so the
                // earlier noise verdict is overturned.
                Label::Visiting | Label::Noise => labels[j] = Label::Cluster(id),
                Label::Cluster(_) => {}
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.eps <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be positive",
            });
        }
        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }
        Ok(())
    }
}

impl Default for Dbscan {
    /// Parameters sized for pointer-resolution coordinates (`eps = 20.0`,
    /// `min_pts = 3`).
    fn default() -> Self {
        Self::new(20.0, 3)
    }
}

impl Clustering for Dbscan {
    /// Cluster and return a total partition: cluster ids remapped to
    /// `0..k`, with all noise points collected in one final cluster labeled
    /// `k`. Callers that need noise distinguished should use
    /// [`DbscanExt::fit_predict_with_noise`] or [`Dbscan::cluster`].
    ///
    /// Unlike [`Dbscan::cluster`], the facade rejects degenerate parameters
    /// with [`Error::InvalidParameter`].
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<usize>> {
        self.validate()?;
        let (labels, cluster_count) = self.assign(points);
        Ok(labels
            .into_iter()
            .map(|l| match l {
                Label::Cluster(id) => id - 1,
                _ => cluster_count,
            })
            .collect())
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// To get the actual number of clusters, examine the labels after `fit_predict`.
    fn n_clusters(&self) -> usize {
        0 // Unknown until fit
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, points: &[Point]) -> Result<Vec<Option<usize>>>;
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise(&self, points: &[Point]) -> Result<Vec<Option<usize>>> {
        self.validate()?;
        let (labels, _) = self.assign(points);
        Ok(labels
            .into_iter()
            .map(|l| l.cluster_id().map(|id| id - 1))
            .collect())
    }
}
