//! Display the resolved head-mount and display metrics.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::models::{DisplayMetrics, HeadMountMetrics, Vec2i};
use crate::properties::PropertyStore;
use crate::services::metrics;

/// Display the metrics resolved from the persisted properties
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Panel resolution in pixels, WIDTHxHEIGHT
    #[arg(long, value_name = "WxH", default_value = "1080x1920")]
    resolution: String,

    /// Share a single no-op distortion model across all color channels
    #[arg(long)]
    undistorted: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable view of the resolved metrics
#[derive(Serialize, Debug)]
struct MetricsOutput {
    head_mount: HeadMountOutput,
    display: DisplayOutput,
}

#[derive(Serialize, Debug)]
struct HeadMountOutput {
    inter_lens_distance: f32,
    left_eye_to_display: f32,
    right_eye_to_display: f32,
    vertical_alignment: String,
    left_fov_degrees: FovOutput,
    right_fov_degrees: FovOutput,
    distortion_model: &'static str,
    tray_to_lens_distance: f32,
}

#[derive(Serialize, Debug)]
struct FovOutput {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
}

#[derive(Serialize, Debug)]
struct DisplayOutput {
    resolution: [i32; 2],
    meters_per_pixel: [f32; 2],
    border_size: f32,
    frame_period_ms: f32,
    refresh_rate: f32,
    orientation: String,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> Result<()> {
        let resolution = parse_resolution(&self.resolution)?;
        let store = PropertyStore::load()?;

        let head_mount = if self.undistorted {
            metrics::create_undistorted_head_mount_metrics(&store)
        } else {
            metrics::create_head_mount_metrics(&store)
        };
        let display = metrics::create_display_metrics(&store, resolution);

        if self.json {
            output_json(&head_mount, &display)
        } else {
            output_human_readable(&head_mount, &display);
            Ok(())
        }
    }
}

/// Parses a `WIDTHxHEIGHT` resolution argument.
fn parse_resolution(raw: &str) -> Result<Vec2i> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .context("Resolution must be WIDTHxHEIGHT, e.g. 1080x1920")?;
    let width: i32 = width
        .trim()
        .parse()
        .context(format!("Invalid resolution width: '{width}'"))?;
    let height: i32 = height
        .trim()
        .parse()
        .context(format!("Invalid resolution height: '{height}'"))?;
    anyhow::ensure!(
        width > 0 && height > 0,
        "Resolution must be positive, got {width}x{height}"
    );

    Ok(Vec2i::new(width, height))
}

fn fov_output(fov: &crate::models::FieldOfView) -> FovOutput {
    FovOutput {
        left: fov.left().to_degrees(),
        right: fov.right().to_degrees(),
        bottom: fov.bottom().to_degrees(),
        top: fov.top().to_degrees(),
    }
}

fn output_json(head_mount: &HeadMountMetrics, display: &DisplayMetrics) -> Result<()> {
    let output = MetricsOutput {
        head_mount: HeadMountOutput {
            inter_lens_distance: head_mount.inter_lens_distance(),
            left_eye_to_display: head_mount.left_eye_to_display(),
            right_eye_to_display: head_mount.right_eye_to_display(),
            vertical_alignment: format!("{:?}", head_mount.vertical_alignment()),
            left_fov_degrees: fov_output(head_mount.left_fov()),
            right_fov_degrees: fov_output(head_mount.right_fov()),
            distortion_model: head_mount.red_distortion().model_name(),
            tray_to_lens_distance: head_mount.tray_to_lens_distance(),
        },
        display: DisplayOutput {
            resolution: [display.resolution().x, display.resolution().y],
            meters_per_pixel: [display.meters_per_pixel().x, display.meters_per_pixel().y],
            border_size: display.border_size(),
            frame_period_ms: display.frame_period_ms(),
            refresh_rate: display.refresh_rate(),
            orientation: format!("{:?}", display.orientation()),
        },
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize metrics")?;
    println!("{json}");
    Ok(())
}

fn output_human_readable(head_mount: &HeadMountMetrics, display: &DisplayMetrics) {
    println!("Head-mount metrics");
    println!("==================");
    println!(
        "  Inter-lens distance:  {:.4} m",
        head_mount.inter_lens_distance()
    );
    println!(
        "  Eye to display:       {:.4} m / {:.4} m",
        head_mount.left_eye_to_display(),
        head_mount.right_eye_to_display()
    );
    println!(
        "  Vertical alignment:   {:?}",
        head_mount.vertical_alignment()
    );
    let l = fov_output(head_mount.left_fov());
    let r = fov_output(head_mount.right_fov());
    println!(
        "  Left FOV (deg):       L {:.1}  R {:.1}  B {:.1}  T {:.1}",
        l.left, l.right, l.bottom, l.top
    );
    println!(
        "  Right FOV (deg):      L {:.1}  R {:.1}  B {:.1}  T {:.1}",
        r.left, r.right, r.bottom, r.top
    );
    println!(
        "  Distortion model:     {}",
        head_mount.red_distortion().model_name()
    );
    println!(
        "  Tray to lens:         {:.4} m",
        head_mount.tray_to_lens_distance()
    );
    println!();
    println!("Display metrics");
    println!("===============");
    println!(
        "  Resolution:           {} x {} px",
        display.resolution().x,
        display.resolution().y
    );
    println!(
        "  Meters per pixel:     {:.6e} x {:.6e}",
        display.meters_per_pixel().x,
        display.meters_per_pixel().y
    );
    println!("  Border size:          {:.3} m", display.border_size());
    println!(
        "  Frame period:         {:.3} ms ({:.1} Hz)",
        display.frame_period_ms(),
        display.refresh_rate()
    );
    println!("  Orientation:          {:?}", display.orientation());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolution_valid() {
        assert_eq!(parse_resolution("1080x1920").unwrap(), Vec2i::new(1080, 1920));
        assert_eq!(parse_resolution("1000X1000").unwrap(), Vec2i::new(1000, 1000));
        assert_eq!(parse_resolution(" 640 x 480 ").unwrap(), Vec2i::new(640, 480));
    }

    #[test]
    fn test_parse_resolution_invalid() {
        assert!(parse_resolution("1080").is_err());
        assert!(parse_resolution("ax b").is_err());
        assert!(parse_resolution("0x1920").is_err());
        assert!(parse_resolution("-1x10").is_err());
    }
}
