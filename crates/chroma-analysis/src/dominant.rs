use ndarray::Array2;
use thiserror::Error;

use crate::classify::{classify, ColorLabel};
use crate::cluster::{kmeans, ClusterCenter};
use crate::frame::{Frame, FrameError};

// Every image is reduced to this fixed sampling grid before clustering.
const SAMPLE_WIDTH: u32 = 100;
const SAMPLE_HEIGHT: u32 = 100;

#[derive(Clone, Copy, Debug)]
// Tuning knobs for the clustering stage.
pub struct ExtractParams {
    pub clusters: usize,
    pub seed: u64,
    pub max_iters: usize,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            clusters: 5,
            seed: 42,
            max_iters: 300,
        }
    }
}

#[derive(Clone, Debug)]
// Outcome of comparing an image's dominant color against a target name.
pub struct DominantColorResult {
    pub target: String,
    pub label: ColorLabel,
    pub matched: bool,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("clustering produced no clusters")]
    NoClusters,
}

// Reduces an image to one representative HSV triplet and classifies it.
//
// The frame is downsampled to the fixed grid, converted to HSV and
// clustered; the centroid of the most populated cluster (lowest index on
// ties) is the representative. Channels are truncated to integers before
// classification.
pub fn dominant_color(frame: &Frame, params: &ExtractParams) -> Result<ColorLabel, AnalysisError> {
    let samples = hsv_samples(frame)?;
    let clusters = kmeans(samples.view(), params.clusters, params.seed, params.max_iters);
    let dominant = largest_cluster(&clusters).ok_or(AnalysisError::NoClusters)?;

    let [h, s, v] = dominant.centroid;
    Ok(classify(h as u8, s as u8, v as u8))
}

// Checks whether the image's dominant color matches the target name.
// The target is trimmed and uppercased first, so "red", "Red" and "RED"
// all compare equal.
pub fn matches_target(
    frame: &Frame,
    target: &str,
    params: &ExtractParams,
) -> Result<DominantColorResult, AnalysisError> {
    let label = dominant_color(frame, params)?;
    let target = target.trim().to_ascii_uppercase();
    let matched = label.name() == target;
    Ok(DominantColorResult {
        target,
        label,
        matched,
    })
}

fn hsv_samples(frame: &Frame) -> Result<Array2<f32>, AnalysisError> {
    let hsv = frame.resize_area(SAMPLE_WIDTH, SAMPLE_HEIGHT)?.to_hsv();
    let count = (hsv.width * hsv.height) as usize;
    let flat: Vec<f32> = hsv.data.iter().map(|&byte| byte as f32).collect();
    let samples =
        Array2::from_shape_vec((count, 3), flat).expect("frame buffer matches its dimensions");
    Ok(samples)
}

// Picks the cluster with the most members, keeping the lowest index on ties.
fn largest_cluster(clusters: &[ClusterCenter]) -> Option<&ClusterCenter> {
    clusters
        .iter()
        .reduce(|best, cluster| if cluster.members > best.members { cluster } else { best })
}
