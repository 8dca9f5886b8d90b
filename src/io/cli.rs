//! Command-line interface for rendering seeds to SVG or PNG files

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use rand::Rng;
use tracing::{debug, info};

use crate::algorithm::executor::{FlowLineGenerator, GeneratorConfig};
use crate::io::configuration::{DEFAULT_SEED, OUTPUT_PREFIX};
use crate::io::error::Result;
use crate::io::params::RequestParams;
use crate::io::progress::ProgressManager;
use crate::io::svg::Overlay;
use crate::io::{OutputFormat, export_artwork};

#[derive(Parser)]
#[command(name = "flowlines")]
#[command(
    author,
    version,
    about = "Render deterministic flow-field line art from integer seeds"
)]
/// Command-line arguments for the line art generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Seeds to render (defaults to 0 when no seed source is given)
    #[arg(value_name = "SEED", allow_negative_numbers = true)]
    pub seeds: Vec<i64>,

    /// Render this many consecutive seeds starting at each given seed
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Also render this many randomly chosen seeds
    #[arg(short, long, value_name = "N")]
    pub random: Option<usize>,

    /// Take seed, title, subtitle and author from a URL or query string
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Directory to write output files into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Output file format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Overlay headline
    #[arg(long)]
    pub title: Option<String>,

    /// Overlay text below the headline
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Overlay author name
    #[arg(long)]
    pub author: Option<String>,

    /// Draw reserved footprints as dots (SVG only)
    #[arg(long)]
    pub footprints: bool,

    /// Render seeds even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit diagnostic logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Query parameters overridden by explicit flags
    pub fn request_params(&self) -> RequestParams {
        let mut params = self
            .query
            .as_deref()
            .map(RequestParams::from_query)
            .unwrap_or_default();

        if let Some(title) = &self.title {
            params.title.clone_from(title);
        }
        if let Some(subtitle) = &self.subtitle {
            params.subtitle.clone_from(subtitle);
        }
        if let Some(author) = &self.author {
            params.author.clone_from(author);
        }
        params
    }

    /// Overlay text and debug options for every rendered seed
    pub fn overlay(&self) -> Overlay {
        Overlay {
            show_footprints: self.footprints,
            ..Overlay::from(&self.request_params())
        }
    }
}

/// Orchestrates rendering a list of seeds with progress tracking
pub struct BatchProcessor {
    cli: Cli,
    config: GeneratorConfig,
    overlay: Overlay,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let overlay = cli.overlay();

        Self {
            cli,
            config: GeneratorConfig::default(),
            overlay,
            progress_manager,
        }
    }

    /// Render every selected seed
    ///
    /// # Errors
    ///
    /// Returns an error if generation setup or writing an output file fails
    pub fn process(&mut self) -> Result<()> {
        let seeds: Vec<i64> = self
            .collect_seeds()
            .into_iter()
            .filter(|&seed| self.should_render(seed))
            .collect();

        if seeds.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        for (index, &seed) in seeds.iter().enumerate() {
            self.render_seed(seed, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Seeds in render order, before skipping existing outputs
    ///
    /// Explicit seeds come first, then the query seed, then random seeds. Each
    /// is expanded into `count` consecutive seeds.
    pub fn collect_seeds(&self) -> Vec<i64> {
        let mut bases = self.cli.seeds.clone();

        if self.cli.query.is_some() {
            bases.push(self.cli.request_params().seed);
        }

        if let Some(random) = self.cli.random {
            let mut rng = rand::rng();
            bases.extend((0..random).map(|_| i64::from(rng.random::<u32>())));
        }

        if bases.is_empty() {
            bases.push(DEFAULT_SEED);
        }

        let count = self.cli.count.max(1);
        let mut seeds = Vec::with_capacity(bases.len() * count);
        for base in bases {
            for offset in 0..count as i64 {
                let seed = base.wrapping_add(offset);
                if !seeds.contains(&seed) {
                    seeds.push(seed);
                }
            }
        }
        seeds
    }

    /// Output file for `seed`
    pub fn output_path(&self, seed: i64) -> PathBuf {
        self.cli.output_dir.join(format!(
            "{OUTPUT_PREFIX}_{seed}.{}",
            self.cli.format.extension()
        ))
    }

    fn should_render(&self, seed: i64) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(seed);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: seed {seed} ({} exists)", output_path.display());
            }
            false
        } else {
            true
        }
    }

    fn render_seed(&mut self, seed: i64, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path(seed);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_seed(index, &display_name(&output_path));
        }

        let mut generator = FlowLineGenerator::new(seed, self.config.clone())?;
        if self.overlay.show_footprints {
            generator.enable_footprints();
        }

        while generator.execute_pass() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_pass(index, generator.current_pass());
            }
        }

        let artwork = generator.finish();
        export_artwork(&artwork, &self.overlay, &output_path)?;

        debug!(
            seed,
            elapsed_ms = start_time.elapsed().as_millis(),
            "Rendered seed"
        );
        info!(path = %output_path.display(), lines = artwork.lines.len(), "Wrote artwork");

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_seed(index);
        }

        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
