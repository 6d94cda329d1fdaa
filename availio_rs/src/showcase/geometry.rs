//! Split geometry for the two showcase panels.
//!
//! The hero is cut by one slanted line running from `top`% on the upper edge
//! to `bottom`% on the lower edge. The left panel is everything before the
//! line, the right panel everything after it, so the two clip paths always
//! share that edge.

use super::Side;
use crate::config::ShowcaseConfig;

/// Boundary constants, in percent of the container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Upper end of the split line with no shift applied
    pub base_top: f64,
    /// Lower end of the split line with no shift applied
    pub base_bottom: f64,
    /// Shift toward the emphasized side
    pub delta: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            base_top: 70.0,
            base_bottom: 30.0,
            delta: 30.0,
        }
    }
}

impl From<&ShowcaseConfig> for GeometryConfig {
    fn from(config: &ShowcaseConfig) -> Self {
        Self {
            base_top: config.base_top,
            base_bottom: config.base_bottom,
            delta: config.delta,
        }
    }
}

/// Quadrilateral region as four `(x%, y%)` corners, clockwise from top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionShape {
    /// Corner points
    pub points: [(f64, f64); 4],
}

impl RegionShape {
    /// CSS `clip-path` value for this region.
    pub fn to_clip_path(&self) -> String {
        let points: Vec<String> = self
            .points
            .iter()
            .map(|(x, y)| format!("{x}% {y}%"))
            .collect();
        format!("polygon({})", points.join(", "))
    }
}

/// Both panel regions for one emphasis state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmphasisGeometry {
    /// Left (owner) panel
    pub left: RegionShape,
    /// Right (member) panel
    pub right: RegionShape,
}

impl EmphasisGeometry {
    /// Split line as `(top, bottom)` percentages.
    pub fn boundary(&self) -> (f64, f64) {
        let [_, top, bottom, _] = self.left.points;
        (top.0, bottom.0)
    }
}

/// Map the emphasized side to the two complementary panel regions.
pub fn compute_emphasis_geometry(side: Side, config: &GeometryConfig) -> EmphasisGeometry {
    let shift = match side {
        Side::Left => config.delta,
        Side::Right => -config.delta,
    };
    let top = config.base_top + shift;
    let bottom = config.base_bottom + shift;

    EmphasisGeometry {
        left: RegionShape {
            points: [(0.0, 0.0), (top, 0.0), (bottom, 100.0), (0.0, 100.0)],
        },
        right: RegionShape {
            points: [(top, 0.0), (100.0, 0.0), (100.0, 100.0), (bottom, 100.0)],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn left_emphasis_pushes_split_right() {
        let geometry = compute_emphasis_geometry(Side::Left, &GeometryConfig::default());
        assert_eq!(
            geometry.left.to_clip_path(),
            "polygon(0% 0%, 100% 0%, 60% 100%, 0% 100%)"
        );
        assert_eq!(
            geometry.right.to_clip_path(),
            "polygon(100% 0%, 100% 0%, 100% 100%, 60% 100%)"
        );
        assert_eq!(geometry.boundary(), (100.0, 60.0));
    }

    #[test]
    fn right_emphasis_pushes_split_left() {
        let geometry = compute_emphasis_geometry(Side::Right, &GeometryConfig::default());
        assert_eq!(
            geometry.left.to_clip_path(),
            "polygon(0% 0%, 40% 0%, 0% 100%, 0% 100%)"
        );
        assert_eq!(
            geometry.right.to_clip_path(),
            "polygon(40% 0%, 100% 0%, 100% 100%, 0% 100%)"
        );
    }

    #[test]
    fn regions_share_the_split_edge() {
        let config = GeometryConfig {
            base_top: 55.0,
            base_bottom: 45.0,
            delta: 12.5,
        };
        for side in [Side::Left, Side::Right] {
            let geometry = compute_emphasis_geometry(side, &config);
            // left trailing edge (top-right, bottom-right) == right leading edge
            assert_eq!(geometry.left.points[1], geometry.right.points[0]);
            assert_eq!(geometry.left.points[2], geometry.right.points[3]);
            assert_eq!(geometry, compute_emphasis_geometry(side, &config));
        }
    }

    #[test]
    fn geometry_from_showcase_config() {
        let config = GeometryConfig::from(&ShowcaseConfig::default());
        assert_eq!(config, GeometryConfig::default());
    }
}
