//! Command line front end shared by the demo programs.

use crate::boundary::RightEdgeSign;
use crate::build_info;
use crate::render::{
    CompositeRenderer, CsvRenderer, LogReporter, PngRenderer, SliceImageRenderer,
    VtkRenderer,
};
use crate::solver::SolverConfiguration;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[cfg(feature = "profile-with-puffin")]
static PUFFIN_SERVER: std::sync::OnceLock<puffin_http::Server> =
    std::sync::OnceLock::new();

/// Finite simulated time, negative values are kept and mean "no bound".
fn parse_time(s: &str) -> Result<f64, String> {
    let t: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if t.is_finite() {
        Ok(t)
    } else {
        Err(format!("time must be finite, got {s}"))
    }
}

/// 2D Jacobi relaxation with mixed boundary conditions
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Grid spacing in x.
    #[arg(long, default_value = "0.05")]
    pub dx: f64,

    /// Grid spacing in y.
    #[arg(long, default_value = "0.025")]
    pub dy: f64,

    /// Time step.
    #[arg(long, default_value = "0.0001")]
    pub dt: f64,

    /// Domain length in x.
    #[arg(long, default_value = "2.0")]
    pub lx: f64,

    /// Domain length in y.
    #[arg(long, default_value = "1.0")]
    pub ly: f64,

    /// Stop at this simulated time, negative runs to convergence.
    #[arg(
        long,
        default_value = "-1.0",
        allow_negative_numbers = true,
        value_parser = parse_time
    )]
    pub time: f64,

    /// Convergence threshold on the mean absolute difference.
    #[arg(long, default_value = "1e-6")]
    pub precision: f64,

    /// Sign of the right edge condition.
    #[arg(long, value_enum, default_value_t = RightEdgeSign::Positive)]
    pub sign: RightEdgeSign,

    /// Fail when the difference stops being finite.
    #[arg(long)]
    pub strict: bool,

    /// Emit a snapshot every N iterations.
    #[arg(long)]
    pub snapshot_interval: Option<usize>,

    /// Stop after N iterations.
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "1024")]
    pub chunk_size: usize,

    /// The number of threads to use, rayon picks when omitted.
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Log level.
    #[arg(long, default_value = "info")]
    pub log: log::LevelFilter,

    /// Directory for output files, will be created.
    /// WARNING, if this directory
    /// already exists, current contents will be removed.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write png frames.
    #[arg(long, requires("output_dir"))]
    pub png: bool,

    /// Write the final grid as csv.
    #[arg(long, requires("output_dir"))]
    pub csv: bool,

    /// Write the final grid as vtk.
    #[arg(long, requires("output_dir"))]
    pub vtk: bool,

    /// Stack this grid column from every snapshot into one image.
    #[arg(long, requires("output_dir"))]
    pub slice_column: Option<usize>,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn configuration(&self) -> SolverConfiguration {
        SolverConfiguration {
            x_step: self.dx,
            y_step: self.dy,
            time_step: self.dt,
            domain_length_x: self.lx,
            domain_length_y: self.ly,
            target_time: (self.time >= 0.0).then_some(self.time),
            convergence_precision: self.precision,
            right_edge_sign: self.sign,
            strict: self.strict,
            snapshot_interval: self.snapshot_interval,
            max_iterations: self.max_iterations,
            chunk_size: self.chunk_size,
            ..Default::default()
        }
    }

    fn output_path(&self, name: &str) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|dir| dir.join(name))
    }

    /// Log reporter plus whatever writers were requested.
    pub fn renderer(&self) -> CompositeRenderer<'static> {
        let mut renderer = CompositeRenderer::new().with(LogReporter);
        if let Some(dir) = self.output_dir.as_ref() {
            if self.png {
                renderer.push(PngRenderer::new(dir));
            }
        }
        if self.csv {
            if let Some(path) = self.output_path("final.csv") {
                renderer.push(CsvRenderer::new(path));
            }
        }
        if self.vtk {
            if let Some(path) = self.output_path("final.vtu") {
                renderer.push(VtkRenderer::new(path));
            }
        }
        if let Some(column) = self.slice_column {
            if let Some(path) = self.output_path("slice.png") {
                renderer.push(SliceImageRenderer::new(column, path));
            }
        }
        renderer
    }

    /// Parse, validate and set up logging, threads and the output directory.
    /// Exits the process on bad input, like clap does.
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        if let Err(e) = args.configuration().validate() {
            Args::command().error(ErrorKind::ValueValidation, e).exit();
        }

        env_logger::Builder::new()
            .filter_level(args.log)
            .format_timestamp(None)
            .init();
        log::info!("{} ({})", name, env!("GIT_DESCRIBE"));

        if let Some(output_dir) = &args.output_dir {
            let _ = std::fs::remove_dir_all(output_dir);
            if let Err(e) = std::fs::create_dir_all(output_dir) {
                Args::command()
                    .error(
                        ErrorKind::Io,
                        format!("failed to create {}: {}", output_dir.display(), e),
                    )
                    .exit();
            }
        }

        #[cfg(feature = "profile-with-puffin")]
        {
            let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
            match puffin_http::Server::new(&server_addr) {
                Ok(server) => {
                    log::info!(
                        "Run this to view profiling data:  puffin_viewer {server_addr}"
                    );
                    let _ = PUFFIN_SERVER.set(server);
                    profiling::puffin::set_scopes_on(true);
                }
                Err(e) => log::warn!("profiling server not started: {}", e),
            }
        }

        let mut pool = rayon::ThreadPoolBuilder::new()
            .thread_name(|i| format!("rayon_thread_{}", i));
        if let Some(threads) = args.threads {
            pool = pool.num_threads(threads);
        }
        if let Err(e) = pool.build_global() {
            log::warn!("rayon global pool already initialized: {}", e);
        }

        args
    }
}
