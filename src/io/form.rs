//! Parameter form: raw text fields to a [`TreeParameters`] record
//!
//! Every field is parsed as a float as soon as it is set, mirroring a form
//! bound to per-keystroke change events. Apart from the advisory trunk length
//! bound there is no range validation.

use crate::geometry::params::{TreeParameters, depth_ceiling};
use crate::io::configuration::ADVISORY_MAX_TRUNK_LENGTH;
use crate::io::error::{Result, TreeError, invalid_parameter};

/// Names accepted by [`ParameterForm::set_field`]
pub const FIELD_NAMES: [&str; 5] = ["length", "fraction", "angle", "threshold", "maxDepth"];

/// Current numeric value of every form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterForm {
    /// Trunk length
    pub length: f64,
    /// Shrink fraction
    pub fraction: f64,
    /// Branch angle in degrees
    pub angle: f64,
    /// Minimum segment length
    pub threshold: f64,
    /// Depth ceiling, kept as a float until submission
    pub max_depth: f64,
}

impl Default for ParameterForm {
    fn default() -> Self {
        let defaults = TreeParameters::default();
        Self {
            length: defaults.trunk_length,
            fraction: defaults.shrink_fraction,
            angle: defaults.branch_angle_deg,
            threshold: defaults.min_segment_length,
            max_depth: f64::from(defaults.max_depth),
        }
    }
}

impl ParameterForm {
    /// Parse `raw` and store it in the field called `name`
    ///
    /// Accepts `max_depth` and `max-depth` as aliases of `maxDepth`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a form field or `raw` is not a number.
    /// The form is unchanged on error.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<()> {
        let slot = match name {
            "length" => &mut self.length,
            "fraction" => &mut self.fraction,
            "angle" => &mut self.angle,
            "threshold" => &mut self.threshold,
            "maxDepth" | "max_depth" | "max-depth" => &mut self.max_depth,
            _ => {
                return Err(TreeError::UnknownField {
                    name: name.to_string(),
                });
            }
        };

        *slot = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid_parameter(&name, &raw, &e))?;
        Ok(())
    }

    /// Whether the trunk length is above the suggested maximum
    pub fn exceeds_advisory_length(&self) -> bool {
        self.length > ADVISORY_MAX_TRUNK_LENGTH
    }

    /// Snapshot the form as an immutable parameter record
    ///
    /// A fractional depth rounds up, so 2.5 still admits depth-2 branches;
    /// negative or NaN depths become 0.
    pub fn to_parameters(&self) -> TreeParameters {
        TreeParameters::new(
            self.length,
            self.fraction,
            self.angle,
            self.threshold,
            depth_ceiling(self.max_depth),
        )
    }
}
