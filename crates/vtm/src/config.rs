/// Thresholds for the body-frame estimator's geometric fallback.
#[derive(Debug, Clone, Copy)]
pub struct FrameConfig {
    /// Lower edge of the lower-torso band, as a fraction of vertical extent.
    pub band_lo_frac: f32,
    /// Upper edge of the lower-torso band, as a fraction of vertical extent.
    pub band_hi_frac: f32,
    /// Vertical extents below this are treated as a degenerate flat mesh.
    pub min_extent: f32,
    /// Minimum vertices the band must capture to anchor a centroid.
    pub min_band_points: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            band_lo_frac: 0.45,
            band_hi_frac: 0.55,
            min_extent: 1e-6,
            min_band_points: 3,
        }
    }
}

/// A named body region the tape measure can wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Bust,
    Waist,
    Hip,
}

/// Where a region's measurement band sits on the body.
///
/// The band center is proportional to the mesh's vertical extent so it
/// tracks anatomy across statures; the slab thickness is metric, matching
/// the physical width of a tape.
#[derive(Debug, Clone, Copy)]
pub struct RegionBand {
    /// Band center as a fraction of vertical extent above `y_min`.
    pub center_frac: f32,
    /// Full thickness of the band, in meters.
    pub band_width_m: f32,
}

const DEFAULT_BAND_WIDTH_M: f32 = 0.010;

/// Immutable configuration for one measurement call.
///
/// All thresholds the engine and frame estimator consult live here so they
/// are tunable per mesh topology (ex: hip-band sweeps) without any
/// process-global state.
#[derive(Debug, Clone, Copy)]
pub struct MeasureConfig {
    pub frame: FrameConfig,
    pub bust: RegionBand,
    pub waist: RegionBand,
    pub hip: RegionBand,
}

impl MeasureConfig {
    pub fn band_for(&self, region: Region) -> RegionBand {
        match region {
            Region::Bust => self.bust,
            Region::Waist => self.waist,
            Region::Hip => self.hip,
        }
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            frame: FrameConfig::default(),
            bust: RegionBand {
                center_frac: 0.72,
                band_width_m: DEFAULT_BAND_WIDTH_M,
            },
            waist: RegionBand {
                center_frac: 0.63,
                band_width_m: DEFAULT_BAND_WIDTH_M,
            },
            hip: RegionBand {
                center_frac: 0.52,
                band_width_m: DEFAULT_BAND_WIDTH_M,
            },
        }
    }
}
