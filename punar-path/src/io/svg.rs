//! SVG plots for teach/repeat audits.
//!
//! - [`TrajectoryPlot`]: top-down overview of the teach run and the resampled
//!   repeat runs, with heading arrows
//! - [`SeriesPlot`]: per-index line chart (lateral error, or raw x/y/theta
//!   when choosing crop ranges)
//!
//! Missing samples (NaN) break lines instead of being drawn at zero.

use std::fmt::Write;
use std::path::Path;

use crate::core::{Pose2D, Trajectory};
use crate::error::Result;

/// Configuration for trajectory overview rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per meter
    pub scale: f64,
    /// Trajectory line width
    pub trajectory_width: f64,
    /// Heading arrow length in pixels
    pub arrow_length: f64,
    /// Draw an arrow every N poses
    pub arrow_stride: usize,
    /// Padding around the plot in pixels
    pub padding: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 50.0,
            trajectory_width: 1.5,
            arrow_length: 8.0,
            arrow_stride: 1,
            padding: 20.0,
        }
    }
}

/// A named, coloured trajectory in a plot
#[derive(Clone, Debug)]
pub struct PlotTrajectory {
    /// Name for legend
    pub name: String,
    /// Sequence of poses
    pub poses: Vec<Pose2D>,
    /// Line colour
    pub color: String,
}

/// Split into runs of consecutive non-missing items.
fn segments<T: Copy>(items: &[T], missing: impl Fn(&T) -> bool) -> Vec<Vec<(usize, T)>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if missing(item) {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push((i, *item));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn legend_block(svg: &mut String, entries: &[(String, String)], y_offset: f64, width: f64) {
    let height = entries.len() as f64 * 20.0 + 10.0;
    writeln!(
        svg,
        r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
        y_offset
    )
    .unwrap();
    writeln!(
        svg,
        r##"    <rect x="10" y="0" width="{:.0}" height="{:.0}" fill="white" stroke="#CCC" stroke-width="1" rx="4"/>"##,
        width - 20.0,
        height
    )
    .unwrap();

    let mut entry_y = 15.0;
    for (label, color) in entries {
        writeln!(
            svg,
            r#"    <line x1="20" y1="{:.0}" x2="50" y2="{:.0}" stroke="{}" stroke-width="3"/>"#,
            entry_y, entry_y, color
        )
        .unwrap();
        writeln!(
            svg,
            r##"    <text x="60" y="{:.0}" fill="#333">{}</text>"##,
            entry_y + 4.0,
            escape(label)
        )
        .unwrap();
        entry_y += 20.0;
    }
    writeln!(svg, "  </g>").unwrap();
}

fn title_block(svg: &mut String, title: &Option<String>, width: f64) {
    if let Some(title) = title {
        writeln!(
            svg,
            r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
            width / 2.0,
            escape(title)
        )
        .unwrap();
    }
}

fn header(svg: &mut String, width: f64, height: f64) {
    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        width, height, width, height
    )
    .unwrap();
    writeln!(svg, r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##).unwrap();
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Top-down overview of several trajectories
pub struct TrajectoryPlot {
    config: SvgConfig,
    title: Option<String>,
    trajectories: Vec<PlotTrajectory>,
}

impl TrajectoryPlot {
    /// Create an empty plot
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            title: None,
            trajectories: Vec::new(),
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a trajectory (drawn in insertion order, later ones on top)
    pub fn with_trajectory(
        mut self,
        name: impl Into<String>,
        trajectory: &Trajectory,
        color: impl Into<String>,
    ) -> Self {
        self.trajectories.push(PlotTrajectory {
            name: name.into(),
            poses: trajectory.poses().to_vec(),
            color: color.into(),
        });
        self
    }

    /// World bounds of all non-missing poses: (min_x, min_y, max_x, max_y)
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut bounds = (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for pose in self.trajectories.iter().flat_map(|t| &t.poses) {
            if pose.is_missing() {
                continue;
            }
            bounds.0 = bounds.0.min(pose.x);
            bounds.1 = bounds.1.min(pose.y);
            bounds.2 = bounds.2.max(pose.x);
            bounds.3 = bounds.3.max(pose.y);
        }
        if !bounds.0.is_finite() {
            return (0.0, 0.0, 1.0, 1.0);
        }
        bounds
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let (min_x, min_y, max_x, max_y) = self.bounds();
        let scale = self.config.scale;
        let padding = self.config.padding;
        let plot_width = (max_x - min_x).max(1.0) * scale;
        let plot_height = (max_y - min_y).max(1.0) * scale;

        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let legend_height = self.trajectories.len() as f64 * 20.0 + 20.0;
        let width = plot_width + 2.0 * padding;
        let height = plot_height + 2.0 * padding + title_height + legend_height;

        header(&mut svg, width, height);
        title_block(&mut svg, &self.title, width);

        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )
        .unwrap();

        // SVG Y-axis is flipped (0 at top)
        let to_px = |x: f64, y: f64| ((x - min_x) * scale, plot_height - (y - min_y) * scale);

        for traj in &self.trajectories {
            let id = traj.name.to_lowercase().replace(' ', "-");
            writeln!(&mut svg, r#"    <g id="trajectory-{}">"#, escape(&id)).unwrap();

            for segment in segments(&traj.poses, |p| p.is_missing()) {
                let mut path_d = String::new();
                for (k, (_, pose)) in segment.iter().enumerate() {
                    let (px, py) = to_px(pose.x, pose.y);
                    let cmd = if k == 0 { "M" } else { " L" };
                    write!(&mut path_d, "{} {:.1} {:.1}", cmd, px, py).unwrap();
                }
                writeln!(
                    &mut svg,
                    r#"      <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" opacity="0.8"/>"#,
                    path_d, traj.color, self.config.trajectory_width
                )
                .unwrap();
            }

            // Heading arrows (quiver)
            let stride = self.config.arrow_stride.max(1);
            for pose in traj.poses.iter().step_by(stride) {
                if pose.is_missing() {
                    continue;
                }
                let (px, py) = to_px(pose.x, pose.y);
                let dx = self.config.arrow_length * pose.theta.cos();
                let dy = -self.config.arrow_length * pose.theta.sin(); // Flip Y for SVG
                writeln!(
                    &mut svg,
                    r#"      <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
                    px,
                    py,
                    px + dx,
                    py + dy,
                    traj.color
                )
                .unwrap();
            }

            writeln!(&mut svg, "    </g>").unwrap();
        }

        writeln!(&mut svg, "  </g>").unwrap();

        let entries: Vec<(String, String)> = self
            .trajectories
            .iter()
            .map(|t| (t.name.clone(), t.color.clone()))
            .collect();
        legend_block(
            &mut svg,
            &entries,
            padding + title_height + plot_height + 10.0,
            width,
        );

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    /// Render and write to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

/// A named, coloured value series
#[derive(Clone, Debug)]
pub struct Series {
    /// Legend label
    pub label: String,
    /// One value per index, NaN for gaps
    pub values: Vec<f64>,
    /// Line colour
    pub color: String,
}

/// Line chart of values against sample index
pub struct SeriesPlot {
    width: f64,
    height: f64,
    title: Option<String>,
    y_label: Option<String>,
    series: Vec<Series>,
}

impl Default for SeriesPlot {
    fn default() -> Self {
        Self::new(900.0, 400.0)
    }
}

impl SeriesPlot {
    /// Create an empty chart with a plot area of `width` x `height` pixels
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: None,
            y_label: None,
            series: Vec::new(),
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the y-axis label
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Add a series
    pub fn with_series(
        mut self,
        label: impl Into<String>,
        values: Vec<f64>,
        color: impl Into<String>,
    ) -> Self {
        self.series.push(Series {
            label: label.into(),
            values,
            color: color.into(),
        });
        self
    }

    fn value_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .series
            .iter()
            .flat_map(|s| &s.values)
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if !lo.is_finite() {
            (-1.0, 1.0)
        } else if hi - lo < 1e-9 {
            (lo - 0.5, hi + 0.5)
        } else {
            (lo, hi)
        }
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let left = 70.0;
        let right = 20.0;
        let top = if self.title.is_some() { 40.0 } else { 15.0 };
        let axis_height = 30.0;
        let legend_height = self.series.len() as f64 * 20.0 + 20.0;
        let total_width = left + self.width + right;
        let total_height = top + self.height + axis_height + legend_height;

        let (lo, hi) = self.value_range();
        let samples = self.series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        let x_span = samples.saturating_sub(1).max(1) as f64;

        let to_px = |i: usize, v: f64| {
            (
                left + i as f64 / x_span * self.width,
                top + (hi - v) / (hi - lo) * self.height,
            )
        };

        header(&mut svg, total_width, total_height);
        title_block(&mut svg, &self.title, total_width);

        // Axes
        writeln!(
            &mut svg,
            r##"  <rect x="{:.0}" y="{:.0}" width="{:.0}" height="{:.0}" fill="white" stroke="#999" stroke-width="1"/>"##,
            left, top, self.width, self.height
        )
        .unwrap();
        if lo < 0.0 && hi > 0.0 {
            let (_, zero_y) = to_px(0, 0.0);
            writeln!(
                &mut svg,
                r##"  <line x1="{:.0}" y1="{:.1}" x2="{:.0}" y2="{:.1}" stroke="#CCC" stroke-dasharray="4 3"/>"##,
                left,
                zero_y,
                left + self.width,
                zero_y
            )
            .unwrap();
        }
        writeln!(
            &mut svg,
            r##"  <g font-family="sans-serif" font-size="11" fill="#333">"##
        )
        .unwrap();
        writeln!(
            &mut svg,
            r#"    <text x="{:.0}" y="{:.0}" text-anchor="end">{:.3}</text>"#,
            left - 5.0,
            top + 10.0,
            hi
        )
        .unwrap();
        writeln!(
            &mut svg,
            r#"    <text x="{:.0}" y="{:.0}" text-anchor="end">{:.3}</text>"#,
            left - 5.0,
            top + self.height,
            lo
        )
        .unwrap();
        writeln!(
            &mut svg,
            r#"    <text x="{:.0}" y="{:.0}" text-anchor="middle">0</text>"#,
            left,
            top + self.height + 15.0
        )
        .unwrap();
        writeln!(
            &mut svg,
            r#"    <text x="{:.0}" y="{:.0}" text-anchor="middle">{}</text>"#,
            left + self.width,
            top + self.height + 15.0,
            samples.saturating_sub(1)
        )
        .unwrap();
        if let Some(ref label) = self.y_label {
            writeln!(
                &mut svg,
                r#"    <text x="15" y="{:.0}" text-anchor="middle" transform="rotate(-90 15 {:.0})">{}</text>"#,
                top + self.height / 2.0,
                top + self.height / 2.0,
                escape(label)
            )
            .unwrap();
        }
        writeln!(&mut svg, "  </g>").unwrap();

        for series in &self.series {
            for segment in segments(&series.values, |v| !v.is_finite()) {
                let mut points = String::new();
                for (i, v) in &segment {
                    let (px, py) = to_px(*i, *v);
                    write!(&mut points, "{:.1},{:.1} ", px, py).unwrap();
                }
                writeln!(
                    &mut svg,
                    r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
                    points.trim_end(),
                    series.color
                )
                .unwrap();
            }
        }

        let entries: Vec<(String, String)> = self
            .series
            .iter()
            .map(|s| (s.label.clone(), s.color.clone()))
            .collect();
        legend_block(
            &mut svg,
            &entries,
            top + self.height + axis_height,
            total_width,
        );

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    /// Render and write to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Trajectory {
        (0..n).map(|i| Pose2D::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_segments_split_on_missing() {
        let values = [1.0, f64::NAN, 2.0, 3.0, f64::NAN, f64::NAN, 4.0];
        let parts = segments(&values, |v| v.is_nan());
        let indices: Vec<Vec<usize>> = parts
            .iter()
            .map(|s| s.iter().map(|(i, _)| *i).collect())
            .collect();
        assert_eq!(indices, vec![vec![0], vec![2, 3], vec![6]]);
    }

    #[test]
    fn test_trajectory_plot() {
        let mut poses = line(6).into_poses();
        poses[3] = Pose2D::MISSING;
        let svg = TrajectoryPlot::new(SvgConfig::default())
            .with_title("overview of runs")
            .with_trajectory("teach", &line(6), "#44dd44")
            .with_trajectory("ours", &Trajectory::from_poses(poses), "#4444dd")
            .render();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("overview of runs"));
        assert!(svg.contains(r#"id="trajectory-ours""#));
        // The gap splits "ours" into two paths.
        assert_eq!(svg.matches(r##"stroke="#4444dd" stroke-width="1.5""##).count(), 2);
        // One arrow per non-missing pose.
        assert_eq!(svg.matches(r##"stroke="#4444dd" stroke-width="1"/>"##).count(), 5);
    }

    #[test]
    fn test_trajectory_plot_all_missing() {
        let svg = TrajectoryPlot::new(SvgConfig::default())
            .with_trajectory("none", &Trajectory::from_poses(vec![Pose2D::MISSING; 3]), "#000")
            .render();
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_series_plot() {
        let svg = SeriesPlot::default()
            .with_title("Repeat run error")
            .with_y_label("lateral path error (m)")
            .with_series("a & b RMS=0.1m", vec![0.1, -0.1, f64::NAN, 0.2], "#dd4444")
            .render();

        assert!(svg.contains("lateral path error (m)"));
        assert!(svg.contains("a &amp; b RMS=0.1m"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(!svg.contains("NaN"));
    }
}
