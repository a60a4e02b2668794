//! Decides whether an image's dominant color matches a named target.

pub mod classify;
pub mod cluster;
pub mod dominant;
pub mod frame;

pub use classify::{classify, ColorLabel};
pub use cluster::{kmeans, ClusterCenter};
pub use dominant::{dominant_color, matches_target, AnalysisError, DominantColorResult, ExtractParams};
pub use frame::{Frame, FrameConfig, FrameError, PixelFormat};
