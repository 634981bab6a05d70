use mandelbrot_tiles::{mandelbrot_controller, MandelbrotConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let comparison = mandelbrot_controller(&MandelbrotConfig::default())?;

    println!(
        "{}x{} grid, limit {}: {} bounded points, all tilings agree",
        comparison.width, comparison.height, comparison.max_iterations, comparison.bounded_points
    );
    for run in &comparison.runs {
        println!("{:>6}: {:?}", run.tiling.display_name(), run.duration);
    }

    Ok(())
}
