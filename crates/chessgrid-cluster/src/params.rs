use serde::{Deserialize, Serialize};

/// Parameters of the cluster-to-grid conversion.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterToGridParams {
    /// Maximal acute angle (degrees) between a grid corner's orientation and
    /// the bisector of its two edges for the corner to be an origin candidate.
    pub origin_tolerance_deg: f32,
}

impl Default for ClusterToGridParams {
    fn default() -> Self {
        Self {
            origin_tolerance_deg: 45.0,
        }
    }
}

impl ClusterToGridParams {
    pub(crate) fn origin_tolerance_rad(&self) -> f32 {
        self.origin_tolerance_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let params: ClusterToGridParams = serde_json::from_str("{}").unwrap();
        assert_eq!(ClusterToGridParams::default(), params);

        let params: ClusterToGridParams =
            serde_json::from_str(r#"{"origin_tolerance_deg": 30.0}"#).unwrap();
        assert_eq!(30.0, params.origin_tolerance_deg);
    }
}
