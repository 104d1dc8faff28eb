//! Developer fixture tool: renders a CSV of incident records to an SVG file.
//!
//! Usage: `render_trend_svg <input.csv> <output.svg> [selected-year]`

use std::process;

use trendline_rs::api::{ChartEngine, ChartEngineConfig};
use trendline_rs::error::ChartResult;
use trendline_rs::render::SvgRenderer;
use trendline_rs::telemetry::init_default_tracing;

fn main() {
    let _ = init_default_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("usage: render_trend_svg <input.csv> <output.svg> [selected-year]");
        process::exit(2);
    }

    let selected_year = args.get(3).map(String::as_str);
    if let Err(err) = run(&args[1], &args[2], selected_year) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(input: &str, output: &str, selected_year: Option<&str>) -> ChartResult<()> {
    let mut engine = ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default())?;
    engine.load_csv_path(input)?;
    if let Some(value) = selected_year {
        engine.select_year_value(value);
    }
    engine.render()?;

    std::fs::write(output, engine.renderer().document()).map_err(|err| {
        trendline_rs::ChartError::InvalidData(format!("failed to write `{output}`: {err}"))
    })?;

    println!(
        "wrote {output}: {} years, {} records",
        engine.series().len(),
        engine
            .series()
            .points()
            .iter()
            .map(|point| u64::from(point.count))
            .sum::<u64>()
    );
    Ok(())
}
