//! CLI command implementations.

use vela_render::renderer::{HeadlessRenderer, Renderer};
use vela_render::JsonFrameExporter;
use vela_telemetry::sinks::TracingSink;
use vela_telemetry::EventBus;

use crate::runner::{run, RunMetrics};
use crate::scenario::RunConfig;

fn load_config(path: Option<&str>) -> Result<RunConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let config: RunConfig = toml::from_str(&text)?;
            config.sheet.validate()?;
            Ok(config)
        }
        None => Ok(RunConfig::default()),
    }
}

/// Run a simulation scenario headless.
pub fn simulate(
    config_path: Option<&str>,
    output_path: Option<&str>,
    metrics_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    println!("Vela Simulation");
    println!("───────────────");
    println!(
        "Sheet:   {} × {} patches, {:.2} m × {:.2} m, {:.3} kg",
        config.sheet.patches_x,
        config.sheet.patches_y,
        config.sheet.width,
        config.sheet.height,
        config.sheet.total_mass,
    );
    println!(
        "Run:     {} frames × {:.2} ms, dt = {} s, wind: {:?}",
        config.frames, config.frame_ms, config.context.dt, config.wind,
    );
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

    let mut renderer: Box<dyn Renderer> = match output_path {
        Some(path) => Box::new(JsonFrameExporter::new(path)),
        None => Box::new(HeadlessRenderer::new()),
    };

    let metrics = run(&config, renderer.as_mut(), &mut bus)?;

    println!("Ticks:          {}", metrics.ticks);
    println!("Wall time:      {:.3}s", metrics.total_wall_time);
    println!("Avg tick:       {:.3}ms", metrics.avg_tick_ms);
    println!("Final KE:       {:.6e}", metrics.final_kinetic_energy);
    println!("Max displace:   {:.4}m", metrics.max_displacement);
    if metrics.springs_skipped > 0 || metrics.normals_skipped > 0 {
        println!(
            "Guards fired:   {} springs, {} normals",
            metrics.springs_skipped, metrics.normals_skipped,
        );
    }

    if let Some(path) = output_path {
        println!("Frames written to: {path}");
    }
    if let Some(path) = metrics_path {
        let csv = format!("{}\n{}", RunMetrics::csv_header(), metrics.to_csv_row());
        std::fs::write(path, csv)?;
        println!("Metrics written to: {path}");
    }

    Ok(())
}

/// Validate a run config file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Vela Validator");
    println!("──────────────");

    let text = std::fs::read_to_string(path)?;
    let config: RunConfig = toml::from_str(&text)?;
    config.sheet.validate()?;

    println!(
        "Config is valid ({}×{} patches, {} frames).",
        config.sheet.patches_x, config.sheet.patches_y, config.frames,
    );
    Ok(())
}
