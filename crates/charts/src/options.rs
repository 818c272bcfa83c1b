//! Pass-through presentation options shared by every chart artifact.

use serde::{Deserialize, Serialize};

/// Where the legend is drawn, for charts that carry one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Rendering configuration carried by chart artifacts.
///
/// Nothing here changes the data; renderers consume these values as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Chart width in pixels.
    pub width: u32,

    /// Chart height in pixels.
    pub height: u32,

    /// Chart title.
    pub title: String,

    /// X axis tick label rotation in degrees.
    pub x_rotation: u32,

    /// Legend placement; `None` hides the legend.
    pub legend_position: Option<LegendPosition>,

    /// Whether the Y axis uses a logarithmic scale.
    pub log_y: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 400,
            title: String::new(),
            x_rotation: 45,
            legend_position: None,
            log_y: false,
        }
    }
}

impl ChartOptions {
    /// Options with a title and defaults for everything else.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the chart size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the legend position.
    pub fn with_legend(mut self, position: LegendPosition) -> Self {
        self.legend_position = Some(position);
        self
    }

    /// Use a logarithmic Y axis.
    pub fn with_log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let options = ChartOptions::default();
        assert_eq!(options.width, 900);
        assert_eq!(options.height, 400);
        assert_eq!(options.x_rotation, 45);
        assert!(options.legend_position.is_none());
        assert!(!options.log_y);
    }

    #[test]
    fn test_builder_passthrough() {
        let options = ChartOptions::titled("Price by Exchange")
            .with_size(1200, 600)
            .with_legend(LegendPosition::BottomRight)
            .with_log_y();
        assert_eq!(options.title, "Price by Exchange");
        assert_eq!(options.width, 1200);
        assert_eq!(options.legend_position, Some(LegendPosition::BottomRight));
        assert!(options.log_y);
    }
}
