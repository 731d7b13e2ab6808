//! Detection configuration.
//!
//! All thresholds are plain constructor parameters; nothing here is a
//! persisted format. The serde derives exist so configurations can ride
//! along in debug dumps and embedding tools.

/// Candidate classification thresholds.
///
/// Size and bounding ratios are relative to the page pixel count; the
/// defaults are tuned for scans in the one-to-two-megapixel range and
/// usually need widening for thumbnails or crops.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Minimum fraction of a blob's member pixels set in the ink mask for
    /// the blob to vote "ink" rather than "background".
    pub ink_vote_threshold: f64,
    /// Minimum member-count ratio (|points| / page pixels) for a character
    /// candidate.
    pub character_min_size_ratio: f64,
    /// Maximum member-count ratio for a character candidate.
    pub character_max_size_ratio: f64,
    /// Minimum member-count ratio for a callout candidate.
    pub callout_min_size_ratio: f64,
    /// Maximum member-count ratio for a callout candidate.
    pub callout_max_size_ratio: f64,
    /// Maximum bounding-box ratio (bounding area / page pixels) for any
    /// candidate.
    pub max_bounding_ratio: f64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            ink_vote_threshold: 0.5,
            character_min_size_ratio: 5.0e-5,
            character_max_size_ratio: 5.0e-3,
            callout_min_size_ratio: 1.0e-3,
            callout_max_size_ratio: 6.0e-2,
            max_bounding_ratio: 0.25,
        }
    }
}

/// Top-level detection configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Candidate classification thresholds.
    pub classify: ClassifyConfig,
    /// Minimum member-point coverage a bounding edge must hold during
    /// geometry regularization; edges below it are shrunk away.
    pub side_coverage: f64,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            classify: ClassifyConfig::default(),
            side_coverage: 0.10,
        }
    }
}
