use proptest::prelude::*;
use shoal::cluster::{metric, Agglomerative, Clusterer, Dbscan, KMeans, Linkage, NOISE};

fn fill<C: Clusterer>(model: &mut C, data: &[Vec<f64>]) {
    for point in data {
        model.add(point.clone()).unwrap();
    }
}

proptest! {
    #[test]
    fn prop_kmeans_labels_in_range(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..20),
        k in 1usize..5,
        iterations in 0usize..10
    ) {
        // Skip if k > n
        if k <= data.len() {
            let mut model = KMeans::new();
            fill(&mut model, &data);
            model.learn(k, iterations).unwrap();

            let labels = model.labels().unwrap();
            prop_assert_eq!(labels.len(), data.len());
            for &l in labels {
                prop_assert!((0..k as i64).contains(&l));
            }
        }
    }

    #[test]
    fn prop_kmeans_predict_idempotent(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 3), 2..15),
        query in prop::collection::vec(-10.0f64..10.0, 3)
    ) {
        let mut model = KMeans::new();
        fill(&mut model, &data);
        model.learn(2, 5).unwrap();

        let first = model.predict(&query).unwrap();
        let second = model.predict(&query).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_dbscan_labels_noise_or_positive(
        data in prop::collection::vec(prop::collection::vec(-5.0f64..5.0, 2), 1..20),
        eps in 0.1f64..3.0,
        min_pts in 1usize..5
    ) {
        let mut model = Dbscan::new();
        fill(&mut model, &data);
        model.learn(eps, min_pts).unwrap();

        let labels = model.labels().unwrap();
        prop_assert_eq!(labels.len(), data.len());
        for &l in labels {
            prop_assert!(l == NOISE || (1..=data.len() as i64).contains(&l));
        }
    }

    #[test]
    fn prop_agglomerative_reaches_target(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..12),
        target in 1usize..6
    ) {
        // Skip if target > n
        if target <= data.len() {
            let mut model = Agglomerative::new();
            fill(&mut model, &data);
            model.learn(Linkage::Single, target).unwrap();

            let mut distinct: Vec<i64> = model.labels().unwrap().to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(distinct.len(), target);
            // Compacted labels cover [0, target).
            for &l in model.labels().unwrap() {
                prop_assert!((0..target as i64).contains(&l));
            }
        }
    }

    #[test]
    fn prop_euclidean_symmetric_nonnegative(
        a in prop::collection::vec(-100.0f64..100.0, 1..8),
        b in prop::collection::vec(-100.0f64..100.0, 1..8)
    ) {
        if a.len() == b.len() {
            let ab = metric::euclidean(&a, &b).unwrap();
            let ba = metric::euclidean(&b, &a).unwrap();
            prop_assert!(ab >= 0.0);
            prop_assert_eq!(ab, ba);
        } else {
            prop_assert!(metric::euclidean(&a, &b).is_err());
        }
    }
}
