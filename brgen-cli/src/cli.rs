use brgen::{
    config::{
        GenerationParams, GenerationParamsBuilder, SizeSpec, DEFAULT_EDGE_MULTIPLICITY,
        DEFAULT_VERTEX_COUNT,
    },
    graphgen::attractiveness::{
        DEFAULT_ATTRACTIVENESS, DEFAULT_SWEEP_FLOOR, DEFAULT_SWEEP_START, DEFAULT_SWEEP_STEP,
    },
    io::json_store::DEFAULT_COLLECTION,
    logging::init_global_logger,
    prelude::*,
};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use std::{path::PathBuf, time::Instant};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Parser, Debug)]
#[command(
    name = "bollobas-riordan-generator",
    version,
    about = "Random preferential attachment multigraphs"
)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Generate graph using Bollobas-Riordan method")]
    GenerateGraph(GenerateArgs),
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Database directory; graphs are only stored when this is set
    #[arg(long, env = "BRGEN_DB", global = true)]
    db: Option<PathBuf>,

    /// Collection name inside the database
    #[arg(long, env = "BRGEN_STORAGE", default_value = DEFAULT_COLLECTION, global = true)]
    storage: String,

    /// Store one document per vertex instead of one per graph
    #[arg(long, global = true)]
    per_vertex: bool,

    /// Number of threads used to fold the stub graph
    #[arg(long, env = "BRGEN_THREADS", default_value_t = 1, global = true)]
    threads: usize,

    /// Samples count to generate
    #[arg(
        long,
        visible_alias = "samplesCount",
        env = "BRGEN_SAMPLES",
        default_value_t = 10,
        global = true
    )]
    samples_count: usize,

    /// Remove self-loops and multi-edges before storing
    #[arg(long, global = true)]
    clean: bool,

    /// Seed for reproducible samples
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logs, overriding --log-level and RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    /// Log filter, overriding RUST_LOG (defaults to INFO)
    #[arg(long, env = "BRGEN_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    model: Model,
}

#[derive(Subcommand, Debug)]
enum Model {
    #[command(about = "Generate graph using Bollobas-Riordan method")]
    BollobasRiordan {
        #[command(flatten)]
        size: SizeArgs,
    },
    #[command(about = "Generate graph using Buckley-Osthus method")]
    BuckleyOsthus {
        #[command(flatten)]
        size: SizeArgs,

        /// Initial attractiveness of the Buckley-Osthus model (a)
        #[arg(
            long,
            visible_alias = "InitialAttractiveness",
            default_value_t = DEFAULT_ATTRACTIVENESS
        )]
        initial_attractiveness: f64,
    },
    #[command(about = "Generate graph using Modified Buckley-Osthus method")]
    ModifiedBuckleyOsthus {
        #[command(flatten)]
        size: SizeArgs,

        /// Left limit for (a), the value of the first step
        #[arg(long, visible_alias = "leftLimit", default_value_t = DEFAULT_SWEEP_START)]
        left_limit: f64,

        /// Right limit for (a), never crossed
        #[arg(long, visible_alias = "rightLimit", default_value_t = DEFAULT_SWEEP_FLOOR)]
        right_limit: f64,

        /// Step of (a) changes
        #[arg(long, default_value_t = DEFAULT_SWEEP_STEP)]
        step: f64,
    },
}

#[derive(clap::Args, Debug)]
struct SizeArgs {
    /// Number of vertices (n)
    #[arg(long, visible_alias = "vCount", default_value_t = DEFAULT_VERTEX_COUNT)]
    v_count: usize,

    /// Number of edges per vertex (m)
    #[arg(long, visible_alias = "eCount", default_value_t = DEFAULT_EDGE_MULTIPLICITY)]
    e_count: usize,

    /// Vertices and edges per vertex as `<n>;<m>`, overrides --v-count and --e-count
    #[arg(long)]
    size: Option<SizeSpec>,
}

impl SizeArgs {
    fn params(&self, threads: usize) -> Result<GenerationParams, ConfigError> {
        let mut builder = GenerationParamsBuilder::new()
            .with_vertex_count(self.v_count)
            .with_edge_multiplicity(self.e_count)
            .with_threads(threads);
        if let Some(size) = self.size {
            builder = builder.with_size(size);
        }
        builder.build()
    }
}

impl GenerateArgs {
    fn generator(&self) -> Result<PreferentialAttachment, ConfigError> {
        let generator = match &self.model {
            Model::BollobasRiordan { size } => {
                PreferentialAttachment::bollobas_riordan(size.params(self.threads)?)
            }
            Model::BuckleyOsthus {
                size,
                initial_attractiveness,
            } => PreferentialAttachment::buckley_osthus(
                size.params(self.threads)?,
                *initial_attractiveness,
            )?,
            Model::ModifiedBuckleyOsthus {
                size,
                left_limit,
                right_limit,
                step,
            } => PreferentialAttachment::modified_buckley_osthus(
                size.params(self.threads)?,
                *left_limit,
                *right_limit,
                *step,
            )?,
        };
        Ok(generator)
    }

    fn store(&self) -> Result<Option<JsonDocumentStore>, StorageError> {
        let layout = if self.per_vertex {
            StorageLayout::PerVertex
        } else {
            StorageLayout::Graph
        };
        self.db
            .as_ref()
            .map(|db| JsonDocumentStore::open(db, &self.storage, layout))
            .transpose()
    }

    fn log_level(&self) -> Option<&str> {
        if self.debug {
            Some("DEBUG")
        } else {
            self.log_level.as_deref()
        }
    }
}

fn generate(args: GenerateArgs) -> Result<(), CliError> {
    let generator = args.generator()?;
    let mut store = args.store()?;
    if let Some(store) = &store {
        info!(path = %store.path().display(), "storing samples");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for i in 0..args.samples_count {
        info!("Generate Sample #{}", i + 1);
        let start = Instant::now();
        let mut graph = generator.generate(&mut rng)?;
        info!(duration = ?start.elapsed(), "generation is done");
        debug!(?graph, "final graph");

        if args.clean {
            remove_self_loops_and_multi_edges(&mut graph);
        }
        if let Some(store) = store.as_mut() {
            store.insert_graph(&graph)?;
        }
    }
    Ok(())
}

pub(crate) fn cli() -> Result<(), CliError> {
    let args = Args::parse();
    match args.command {
        Commands::GenerateGraph(args) => {
            init_global_logger(args.log_level());
            generate(args)
        }
    }
}
