//! K-means, k-means++, DBSCAN, and agglomerative clustering on a simple 2D dataset.

use shoal::{Agglomerative, Clusterer, Dbscan, KMeans, KMeansPlusPlus, Linkage, NOISE};

fn main() {
    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f64>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    // --- K-means (k=3, 20 iterations) ---
    let mut kmeans = KMeans::new();
    for point in &data {
        kmeans.add(point.clone()).unwrap();
    }
    kmeans.learn(3, 20).unwrap();
    println!("=== K-means (k=3) ===");
    print_labels(&data, kmeans.labels().unwrap());

    // --- K-means++ (k=3, seeded) ---
    let mut kmeanspp = KMeansPlusPlus::new().with_seed(42);
    for point in &data {
        kmeanspp.add(point.clone()).unwrap();
    }
    kmeanspp.learn(3, 100).unwrap();
    println!("\n=== K-means++ (k=3, seed=42) ===");
    print_labels(&data, kmeanspp.labels().unwrap());

    // --- DBSCAN (eps=1.0, min_pts=2) ---
    let mut dbscan = Dbscan::new();
    for point in &data {
        dbscan.add(point.clone()).unwrap();
    }
    dbscan.learn(1.0, 2).unwrap();
    println!("\n=== DBSCAN (eps=1.0, min_pts=2) ===");
    print_labels(&data, dbscan.labels().unwrap());

    // --- Agglomerative (single linkage, 3 clusters) ---
    let mut agg = Agglomerative::new();
    for point in &data {
        agg.add(point.clone()).unwrap();
    }
    agg.learn(Linkage::Single, 3).unwrap();
    println!("\n=== Agglomerative (single, target=3) ===");
    print_labels(&data, agg.labels().unwrap());

    // Classify a fresh point against each fitted model.
    let query = [5.05, 5.05];
    println!("\nquery ({:.2}, {:.2}):", query[0], query[1]);
    println!("  k-means    => cluster {}", kmeans.predict(&query).unwrap());
    println!("  k-means++  => cluster {}", kmeanspp.predict(&query).unwrap());
    println!("  dbscan     => {} (exact-match lookup)", dbscan.predict(&query).unwrap());
    println!("  agglom.    => cluster {}", agg.predict(&query).unwrap());
}

fn print_labels(data: &[Vec<f64>], labels: &[i64]) {
    for (i, label) in labels.iter().enumerate() {
        let tag = if *label == NOISE {
            "NOISE".to_string()
        } else {
            format!("cluster {}", label)
        };
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => {}",
            i, data[i][0], data[i][1], tag
        );
    }
}
