use ndarray::ArrayView2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Squared centroid movement below which iteration stops.
const CONVERGENCE_EPS: f32 = 1e-4;

#[derive(Clone, Debug, PartialEq)]
// A cluster centroid together with how many samples were assigned to it.
pub struct ClusterCenter {
    pub centroid: [f32; 3],
    pub members: usize,
}

// Runs Lloyd's k-means over 3-channel samples.
//
// The first centroid is drawn with the seeded generator; the remaining
// ones come from farthest-point selection, ties to the lowest sample
// index. Assignment uses squared Euclidean distance, ties to the lowest
// cluster index. Empty clusters keep their previous centroid. The result
// is fully determined by the samples, k and seed.
pub fn kmeans(
    samples: ArrayView2<'_, f32>,
    k: usize,
    seed: u64,
    max_iters: usize,
) -> Vec<ClusterCenter> {
    let n = samples.nrows();
    if n == 0 || k == 0 {
        return Vec::new();
    }

    let mut centroids = init_centroids(samples, k, seed);
    let mut assignment = vec![0usize; n];

    for _ in 0..max_iters {
        assign(samples, &centroids, &mut assignment);

        let mut sums = vec![[0f32; 3]; centroids.len()];
        let mut counts = vec![0usize; centroids.len()];
        for (i, row) in samples.rows().into_iter().enumerate() {
            let cluster = assignment[i];
            sums[cluster][0] += row[0];
            sums[cluster][1] += row[1];
            sums[cluster][2] += row[2];
            counts[cluster] += 1;
        }

        let mut shift = 0f32;
        for (j, centroid) in centroids.iter_mut().enumerate() {
            if counts[j] == 0 {
                continue;
            }
            let updated = [
                sums[j][0] / counts[j] as f32,
                sums[j][1] / counts[j] as f32,
                sums[j][2] / counts[j] as f32,
            ];
            shift = shift.max(distance_sq(centroid, &updated));
            *centroid = updated;
        }

        if shift < CONVERGENCE_EPS {
            break;
        }
    }

    assign(samples, &centroids, &mut assignment);
    let mut members = vec![0usize; centroids.len()];
    for &cluster in &assignment {
        members[cluster] += 1;
    }

    centroids
        .into_iter()
        .zip(members)
        .map(|(centroid, members)| ClusterCenter { centroid, members })
        .collect()
}

fn init_centroids(samples: ArrayView2<'_, f32>, k: usize, seed: u64) -> Vec<[f32; 3]> {
    let n = samples.nrows();
    let mut rng = StdRng::seed_from_u64(seed);
    let first = row3(samples, rng.random_range(0..n));

    let mut min_dist: Vec<f32> = (0..n)
        .map(|i| distance_sq(&row3(samples, i), &first))
        .collect();
    let mut centroids = vec![first];

    while centroids.len() < k {
        let mut farthest = 0;
        for i in 1..n {
            if min_dist[i] > min_dist[farthest] {
                farthest = i;
            }
        }
        let next = row3(samples, farthest);
        for (i, dist) in min_dist.iter_mut().enumerate() {
            let d = distance_sq(&row3(samples, i), &next);
            if d < *dist {
                *dist = d;
            }
        }
        centroids.push(next);
    }
    centroids
}

fn assign(samples: ArrayView2<'_, f32>, centroids: &[[f32; 3]], assignment: &mut [usize]) {
    for (i, row) in samples.rows().into_iter().enumerate() {
        let point = [row[0], row[1], row[2]];
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (j, centroid) in centroids.iter().enumerate() {
            let d = distance_sq(&point, centroid);
            if d < best_dist {
                best_dist = d;
                best = j;
            }
        }
        assignment[i] = best;
    }
}

fn row3(samples: ArrayView2<'_, f32>, i: usize) -> [f32; 3] {
    let row = samples.row(i);
    [row[0], row[1], row[2]]
}

fn distance_sq(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    let dh = a[0] - b[0];
    let ds = a[1] - b[1];
    let dv = a[2] - b[2];
    dh * dh + ds * ds + dv * dv
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn samples_from(rows: &[[f32; 3]]) -> Array2<f32> {
        let flat: Vec<f32> = rows.iter().flatten().copied().collect();
        Array2::from_shape_vec((rows.len(), 3), flat).unwrap()
    }

    #[test]
    fn constant_input_collapses_into_first_cluster() {
        let samples = samples_from(&vec![[12.0, 200.0, 220.0]; 50]);
        let clusters = kmeans(samples.view(), 5, 42, 300);

        assert_eq!(clusters.len(), 5);
        assert_eq!(clusters[0].members, 50);
        assert_eq!(clusters[0].centroid, [12.0, 200.0, 220.0]);
        for cluster in &clusters[1..] {
            assert_eq!(cluster.members, 0);
        }
    }

    #[test]
    fn separates_two_groups_with_exact_counts() {
        let mut rows = vec![[10.0, 250.0, 250.0]; 60];
        rows.extend(vec![[120.0, 250.0, 250.0]; 40]);
        let samples = samples_from(&rows);

        let clusters = kmeans(samples.view(), 5, 42, 300);
        let total: usize = clusters.iter().map(|c| c.members).sum();
        assert_eq!(total, 100);

        let largest = clusters.iter().max_by_key(|c| c.members).unwrap();
        assert_eq!(largest.members, 60);
        assert_eq!(largest.centroid[0], 10.0);
    }

    #[test]
    fn deterministic_for_a_fixed_seed() {
        let rows: Vec<[f32; 3]> = (0..200)
            .map(|i| {
                let i = i as f32;
                [(i * 7.0) % 180.0, (i * 13.0) % 256.0, (i * 29.0) % 256.0]
            })
            .collect();
        let samples = samples_from(&rows);

        let first = kmeans(samples.view(), 5, 42, 300);
        let second = kmeans(samples.view(), 5, 42, 300);
        assert_eq!(first, second);
    }

    #[test]
    fn handles_fewer_distinct_points_than_clusters() {
        let samples = samples_from(&[
            [1.0, 2.0, 3.0],
            [1.0, 2.0, 3.0],
            [90.0, 90.0, 90.0],
        ]);
        let clusters = kmeans(samples.view(), 5, 42, 300);

        assert_eq!(clusters.len(), 5);
        let total: usize = clusters.iter().map(|c| c.members).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn empty_input_yields_no_clusters() {
        let samples = Array2::<f32>::zeros((0, 3));
        assert!(kmeans(samples.view(), 5, 42, 300).is_empty());
    }
}
