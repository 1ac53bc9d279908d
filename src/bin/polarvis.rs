use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "polarvis", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered equations and their coefficients.
    List {
        /// Print the registry as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Render a static plot of one equation as a PNG.
    Plot(PlotArgs),
    /// Render one rotation of the trace animation as numbered PNG frames.
    Animate(AnimateArgs),
    /// Print animation frames as JSON lines.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct EquationArgs {
    /// Equation name (case-insensitive).
    #[arg(long, default_value = "Rose")]
    equation: String,

    /// Coefficient override, e.g. `--coef a=3 --coef n=5`.
    #[arg(long = "coef", value_name = "NAME=VALUE", value_parser = parse_coef)]
    coefs: Vec<(String, f64)>,
}

#[derive(Args, Debug)]
struct PlotArgs {
    #[command(flatten)]
    equation: EquationArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    equation: EquationArgs,

    /// Output directory for `frame_XXXXX.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Frames per rotation.
    #[arg(long, default_value_t = polarvis::DEFAULT_FRAMES)]
    frames: u64,

    /// Playback speed; the tick interval is `100 - speed` milliseconds.
    #[arg(
        long,
        default_value_t = polarvis::DEFAULT_SPEED,
        value_parser = clap::value_parser!(u32).range(2..=100)
    )]
    speed: u32,

    /// Write every K-th frame.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,

    /// Keep every trail ray instead of one rotation's worth.
    #[arg(long)]
    unbounded_trail: bool,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    equation: EquationArgs,

    /// Frames per rotation.
    #[arg(long, default_value_t = polarvis::DEFAULT_FRAMES)]
    frames: u64,

    /// Ticks to run after frame 0.
    #[arg(long, default_value_t = 10)]
    ticks: u64,

    /// Include the traced sub-curve in every line.
    #[arg(long)]
    with_curve: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List { json } => cmd_list(json),
        Command::Plot(args) => cmd_plot(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn parse_coef(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for '{}': {e}", name.trim()))?;
    if !value.is_finite() {
        return Err(format!("coefficient '{}' must be finite", name.trim()));
    }
    Ok((name.trim().to_owned(), value))
}

struct Selected {
    equation: &'static polarvis::Equation,
    coeffs: polarvis::Coefficients,
    curve: polarvis::BoundEquation,
}

fn select(args: &EquationArgs) -> anyhow::Result<Selected> {
    let equation = polarvis::get_equation(&args.equation)?;
    let mut coeffs = equation.defaults();
    for (name, value) in &args.coefs {
        if let Some(spec) = coeffs.spec(name)
            && !spec.contains(spec.snap(*value))
        {
            anyhow::bail!(
                "coefficient '{name}' of {} must be within [{}, {}], got {value}",
                equation.name,
                spec.min,
                spec.max
            );
        }
        coeffs.set(name, *value)?;
    }
    let curve = equation.bind(&coeffs)?;
    tracing::debug!(equation = equation.name, display = %equation.display(&coeffs), "selected");
    Ok(Selected {
        equation,
        coeffs,
        curve,
    })
}

fn cmd_list(json: bool) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, polarvis::equations())
            .context("serialize equation registry")?;
        writeln!(stdout)?;
        return Ok(());
    }

    for eq in polarvis::equations() {
        writeln!(stdout, "{:<10} {}", eq.name, eq.symbolic())?;
        for spec in eq.coefficients {
            let kind = if spec.is_integer() { " (integer)" } else { "" };
            writeln!(
                stdout,
                "    {} = {} in [{}, {}] step {}{kind}",
                spec.name,
                spec.format_value(spec.default),
                spec.min,
                spec.max,
                spec.step
            )?;
        }
    }
    Ok(())
}

fn cmd_plot(args: PlotArgs) -> anyhow::Result<()> {
    let sel = select(&args.equation)?;
    let canvas = polarvis::Canvas::new(args.width, args.height)?;
    let viewport = polarvis::PolarViewport::new(canvas, polarvis::radial_limit(&sel.curve))?;
    let samples = polarvis::sample(
        &sel.curve,
        polarvis::ThetaDomain::full_turn_closed(),
        polarvis::REFERENCE_RESOLUTION,
    );

    let scene = polarvis::compile_plot(&viewport, &samples);
    let frame = polarvis::CpuRenderer::default().render(&scene)?;
    write_png(&args.out, &frame)?;

    eprintln!(
        "wrote {} ({})",
        args.out.display(),
        sel.equation.display(&sel.coeffs)
    );
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let sel = select(&args.equation)?;
    let trail = if args.unbounded_trail {
        polarvis::TrailPolicy::Unbounded
    } else {
        polarvis::TrailPolicy::from_env()
    };
    let opts = polarvis::AnimationOpts {
        frames: args.frames,
        interval: polarvis::interval_for_speed(args.speed),
        trail,
        max_catch_up: None,
    };

    let mut anim = polarvis::Animator::new();
    anim.start(sel.curve, opts)?;

    let limit = anim.radial_limit().unwrap_or(1.0);
    let canvas = polarvis::Canvas::new(args.width, args.height)?;
    let viewport = polarvis::PolarViewport::new(canvas, limit)?;
    let reference = polarvis::sample(
        &sel.curve,
        polarvis::ThetaDomain::full_turn_closed(),
        polarvis::REFERENCE_RESOLUTION,
    );

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut renderer = polarvis::CpuRenderer::default();
    let mut written = 0u64;
    for i in 0..args.frames {
        if i > 0 {
            anim.tick()?;
        }
        let (Some(frame), Some(trail)) = (anim.frame(), anim.trail()) else {
            anyhow::bail!("animation session ended unexpectedly");
        };
        if frame.frame.0 % args.every != 0 {
            continue;
        }
        let scene = polarvis::compile_frame(&viewport, &reference, frame, trail.angles());
        let pixels = renderer.render(&scene)?;
        let path = args.out_dir.join(format!("frame_{:05}.png", frame.frame.0));
        write_png(&path, &pixels)?;
        tracing::debug!(path = %path.display(), readout = %frame.readout(), "frame written");
        written += 1;
    }
    anim.stop();

    eprintln!(
        "wrote {written} frames to {} ({})",
        args.out_dir.display(),
        sel.equation.display(&sel.coeffs)
    );
    Ok(())
}

struct JsonLines<W> {
    out: W,
    with_curve: bool,
}

impl<W: Write> polarvis::FrameSink for JsonLines<W> {
    fn on_frame(&mut self, frame: &polarvis::FrameState) -> polarvis::PolarResult<()> {
        let encoded = if self.with_curve {
            serde_json::to_string(frame)
        } else {
            let mut slim = frame.clone();
            slim.traced.clear();
            serde_json::to_string(&slim)
        };
        let line = encoded.map_err(anyhow::Error::from)?;
        writeln!(self.out, "{line}").map_err(anyhow::Error::from)?;
        Ok(())
    }
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let sel = select(&args.equation)?;
    let interval = Duration::from_millis(1);
    let opts = polarvis::AnimationOpts {
        frames: args.frames,
        interval,
        trail: polarvis::TrailPolicy::from_env(),
        max_catch_up: Some(clamp_ticks(args.ticks).max(1).into()),
    };

    let mut anim = polarvis::Animator::new();
    anim.start(sel.curve, opts)?;

    let mut sink = JsonLines {
        out: std::io::stdout().lock(),
        with_curve: args.with_curve,
    };
    anim.emit_current(&mut sink)?;
    let fired = anim.advance(interval.saturating_mul(clamp_ticks(args.ticks)), &mut sink)?;
    anim.stop();

    tracing::debug!(fired, "trace finished");
    Ok(())
}

fn clamp_ticks(ticks: u64) -> u32 {
    u32::try_from(ticks).unwrap_or(u32::MAX)
}

fn write_png(path: &Path, frame: &polarvis::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
