use std::{error::Error, fs, path::PathBuf};

use clap::{Parser, ValueEnum};
use graph_spectra::{
    events::Event, EdgeListImport, GraphImport, JsonMinimalImport, Orchestrator, SettingsCanvas,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Whitespace separated edge list, one edge per line
    Edges,
    /// `[[a,b],...]` or `{"nodes":[...],"edges":[...],"directed":bool}`
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "demo-cli",
    about = "Lay out a graph with the Eades spring embedder and print its adjacency spectrum",
    version
)]
struct Cli {
    /// Path to the graph file
    #[arg(value_name = "GRAPH")]
    input: PathBuf,
    /// Input format
    #[arg(short, long, value_enum, default_value = "edges")]
    format: Format,
    /// Treat an edge list as directed
    #[arg(long)]
    directed: bool,
    /// Animation ticks to run before printing
    #[arg(short, long, default_value_t = 200)]
    ticks: usize,
    #[arg(long, default_value_t = 800.)]
    width: f64,
    #[arg(long, default_value_t = 600.)]
    height: f64,
    #[arg(long, default_value_t = 20.)]
    radius: f64,
    /// Seed for placing vertices, OS entropy if absent
    #[arg(long)]
    seed: Option<u64>,
    /// Vertex indices to lock before the simulation starts
    #[arg(long, value_delimiter = ',')]
    lock: Vec<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)?;
    let graph = match cli.format {
        Format::Edges => EdgeListImport {
            directed: cli.directed,
        }
        .import(&text)?,
        Format::Json => JsonMinimalImport.import(&text)?,
    };
    info!(
        "loaded {} vertices and {} edges from {}",
        graph.n(),
        graph.edge_count(),
        cli.input.display()
    );

    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let (tx, rx) = crossbeam::channel::unbounded::<Event>();
    let mut orchestrator = Orchestrator::with_rng(
        graph,
        SettingsCanvas::new(cli.width, cli.height, cli.radius),
        rng,
    )
    .with_event_sink(Box::new(tx));

    for &i in &cli.lock {
        orchestrator.toggle_locked(i)?;
    }
    for _ in 0..cli.ticks {
        orchestrator.step();
    }
    info!(
        "ran {} iterations, last average displacement {:?}",
        orchestrator.engine().step_count(),
        orchestrator.engine().last_avg_displacement()
    );

    let snapshot = orchestrator.snapshot();
    println!("vertices:");
    for v in &snapshot.vertices {
        let flag = if v.locked { " (locked)" } else { "" };
        println!(
            "  {:>8} {:>9.2} {:>9.2}{flag}",
            v.label, v.position.x, v.position.y
        );
    }

    orchestrator.set_show_spectrum(true);
    if let Some(spectrum) = orchestrator.spectrum_panel() {
        println!("spectrum:");
        for line in spectrum {
            println!("  {line}");
        }
    }
    if let Some(elapsed) = orchestrator.solver().last_duration() {
        info!("spectrum took {elapsed:?}");
    }

    for event in rx.try_iter() {
        log::debug!("event: {event:?}");
    }

    Ok(())
}
