use kiln_engine::config::EngineConfig;
use kiln_engine::core::{Engine, EngineResult, Logger, LoopControl};
use kiln_engine::math::{Fpu, Simd};
use kiln_engine::transform::Spinner;

/// 未配置 `max_frames` 时演示运行的帧数
const DEMO_FRAMES: u64 = 180;

const CONFIG_PATH: &str = "kiln.toml";

fn main() {
    if let Err(e) = run() {
        eprintln!("Engine failed to start: {}", e);
        std::process::exit(1);
    }
}

fn run() -> EngineResult<()> {
    let mut config = EngineConfig::load_or_default(CONFIG_PATH)?;
    config.performance.max_frames.get_or_insert(DEMO_FRAMES);

    let logger = Logger::from_config(&config.logging)?;
    let engine = Engine::new(config, logger)?;
    let prefer_simd = engine.config().math.prefer_simd;
    let spinner = Spinner::default();

    engine.logger().scope(|| {
        tracing::info!(
            target: "engine",
            config = CONFIG_PATH,
            prefer_simd,
            "Demo configured"
        );
    });

    let summary = engine.run(|frame| {
        let uniform = if prefer_simd {
            spinner.uniform::<Simd>(frame.seconds())
        } else {
            spinner.uniform::<Fpu>(frame.seconds())
        };
        let [x, y, z] = uniform.translation();
        tracing::debug!(
            target: "engine",
            frame = frame.frame,
            bytes = uniform.as_bytes().len(),
            x,
            y,
            z,
            "Uniform packed"
        );
        Ok(LoopControl::Continue)
    })?;

    println!(
        "{}: {} frames in {:.2}s",
        engine.name(),
        summary.frames,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}
