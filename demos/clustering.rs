//! DBSCAN over a point set shaped like interactive click input.
//!
//! Stands in for the usual interactive frontend: the point list below plays
//! the role of collected pointer clicks, and the colored terminal output
//! plays the role of the per-cluster marker colors.

use speckle::{Clustering, Dbscan, Label, Point};

/// One ANSI color per cluster id; noise stays dim.
fn paint(label: Label) -> String {
    const COLORS: [&str; 6] = ["\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m"];
    match label {
        Label::Cluster(id) => format!("{}cluster {}\x1b[0m", COLORS[(id - 1) % COLORS.len()], id),
        _ => "\x1b[2mnoise\x1b[0m".to_string(),
    }
}

fn main() {
    // Three click blobs plus a few stray clicks, in window coordinates.
    let points: Vec<Point> = vec![
        // Blob A (upper left)
        (102.0, 98.0).into(),
        (110.0, 104.0).into(),
        (95.0, 110.0).into(),
        (108.0, 92.0).into(),
        // Blob B (center)
        (400.0, 300.0).into(),
        (412.0, 296.0).into(),
        (395.0, 310.0).into(),
        (405.0, 315.0).into(),
        (398.0, 290.0).into(),
        // Blob C (lower right)
        (700.0, 500.0).into(),
        (708.0, 512.0).into(),
        (695.0, 505.0).into(),
        // Strays
        (250.0, 480.0).into(),
        (600.0, 100.0).into(),
    ];

    // The radius/density pair a pointer-driven session would trigger with.
    let model = Dbscan::default();

    println!("=== DBSCAN (eps=20, min_pts=3) ===");
    for (i, (p, label)) in model.cluster(&points).into_iter().enumerate() {
        println!("  point {i:2} ({:6.1}, {:6.1}) => {}", p.x, p.y, paint(label));
    }

    // The same run through the partition facade: noise becomes one final
    // catch-all label so every point has a plain integer.
    let partition = model.fit_predict(&points).unwrap();
    println!("\n=== partition labels ===");
    println!("  {partition:?}");
}
