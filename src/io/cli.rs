//! Command-line shell: form input, gallery commands and image export

use crate::gallery::layout::{
    GridLayout, allocate_surfaces, compose_sheet, render_gallery_with,
};
use crate::gallery::storage::FileStorage;
use crate::gallery::store::GalleryStore;
use crate::geometry::engine::generate_tree;
use crate::geometry::params::TreeParameters;
use crate::io::configuration::{
    ADVISORY_MAX_TRUNK_LENGTH, CELL_FILE_PREFIX, DEFAULT_DATA_DIR, DEFAULT_DRAW_SIZE,
    SEGMENT_WARNING_THRESHOLD, SHEET_FILE_NAME, STORAGE_KEY,
};
use crate::io::error::{Result, file_system_error};
use crate::io::form::ParameterForm;
use crate::io::image::export_png;
use crate::io::progress::RenderProgress;
use crate::render::renderer::{render_segments, tree_origin};
use crate::render::surface::RasterSurface;
use clap::{Args, Parser, Subcommand};
use std::fmt;
use std::path::{Path, PathBuf};
use std::io::ErrorKind;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "fractree")]
#[command(
    author,
    version,
    about = "Generate fractal trees into a persistent gallery grid"
)]
/// Command-line arguments for the tree gallery
pub struct Cli {
    /// Directory holding the stored gallery and rendered images
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Gallery operation to perform
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Gallery operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Save a new tree into the next free cell and re-render the sheet
    Add(TreeArgs),

    /// Render a single tree to a PNG without touching the gallery
    Draw {
        /// Output PNG path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Tree parameters
        #[command(flatten)]
        tree: TreeArgs,

        /// Edge length of the square image in pixels
        #[arg(short, long, default_value_t = DEFAULT_DRAW_SIZE)]
        size: u32,
    },

    /// Print the stored trees in cell order
    List,

    /// Redraw every stored tree and write the contact sheet
    Render {
        /// Sheet path (defaults to the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write one PNG per occupied cell
        #[arg(short, long)]
        cells: bool,
    },

    /// Remove every stored tree
    Clear,
}

/// The five form fields, passed through as raw text
///
/// Unset fields keep the form defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct TreeArgs {
    /// Trunk length
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Shrink fraction applied per level
    #[arg(long, allow_hyphen_values = true)]
    pub fraction: Option<String>,

    /// Branch angle in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub angle: Option<String>,

    /// Minimum segment length
    #[arg(long, allow_hyphen_values = true)]
    pub threshold: Option<String>,

    /// Maximum recursion depth
    #[arg(long = "max-depth", allow_hyphen_values = true)]
    pub max_depth: Option<String>,
}

impl TreeArgs {
    /// Feed every provided field through a default form
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value is not a number
    pub fn to_form(&self) -> Result<ParameterForm> {
        let mut form = ParameterForm::default();
        let fields = [
            ("length", &self.length),
            ("fraction", &self.fraction),
            ("angle", &self.angle),
            ("threshold", &self.threshold),
            ("maxDepth", &self.max_depth),
        ];

        for (name, value) in fields {
            if let Some(raw) = value {
                form.set_field(name, raw)?;
            }
        }

        if form.exceeds_advisory_length() {
            warn!(
                length = form.length,
                advisory = ADVISORY_MAX_TRUNK_LENGTH,
                "trunk length above the suggested maximum"
            );
        }

        Ok(form)
    }
}

/// Where the gallery lives and how its grid is laid out
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Data directory
    pub data_dir: PathBuf,
    /// Storage key of the serialized gallery
    pub storage_key: String,
    /// Grid geometry; its cell count is the gallery capacity
    pub layout: GridLayout,
}

impl GalleryConfig {
    /// Configuration with default key and layout under `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            storage_key: STORAGE_KEY.to_string(),
            layout: GridLayout::default(),
        }
    }

    /// Maximum number of stored trees
    pub const fn capacity(&self) -> usize {
        self.layout.total_cells()
    }

    /// Default contact sheet path
    pub fn sheet_path(&self) -> PathBuf {
        self.data_dir.join(SHEET_FILE_NAME)
    }

    /// Path of the image for cell `index`
    pub fn cell_path(&self, index: usize) -> PathBuf {
        self.data_dir.join(format!("{CELL_FILE_PREFIX}{index}.png"))
    }

    /// Delete cell images for every slot from `first_empty` to the last cell
    ///
    /// Missing files are skipped. Returns the number of images removed.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing cell image cannot be deleted
    pub fn remove_stale_cells(&self, first_empty: usize) -> Result<usize> {
        let mut removed = 0;

        for index in first_empty..self.capacity() {
            let path = self.cell_path(index);
            match std::fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(file_system_error(path, "remove cell image", err)),
            }
        }

        if removed > 0 {
            debug!(removed, first_empty, "removed stale cell images");
        }
        Ok(removed)
    }

    /// Open the gallery stored under this configuration
    pub fn open_store(&self) -> GalleryStore<FileStorage> {
        GalleryStore::load(
            FileStorage::new(&self.data_dir),
            self.storage_key.as_str(),
            self.capacity(),
        )
    }
}

/// Result of one command, printed by the binary
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A tree was stored and the sheet re-rendered
    Added {
        /// Cell index of the new tree
        index: usize,
        /// Gallery capacity
        capacity: usize,
        /// Written sheet
        sheet: PathBuf,
    },
    /// The gallery was full; nothing changed
    Rejected {
        /// Gallery capacity
        capacity: usize,
    },
    /// A single tree was drawn
    Drawn {
        /// Number of segments stroked
        segments: usize,
        /// Written image
        path: PathBuf,
    },
    /// Stored trees in cell order
    Listed(Vec<TreeParameters>),
    /// The sheet was re-rendered
    Rendered {
        /// Number of cells drawn
        cells: usize,
        /// Written sheet
        sheet: PathBuf,
    },
    /// The gallery was emptied
    Cleared,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added {
                index,
                capacity,
                sheet,
            } => write!(
                f,
                "Saved tree #{index} ({}/{capacity}); sheet written to {}",
                index + 1,
                sheet.display()
            ),
            Self::Rejected { capacity } => {
                write!(f, "Gallery is full ({capacity}/{capacity}); tree not saved")
            }
            Self::Drawn { segments, path } => {
                write!(f, "Drew {segments} segments to {}", path.display())
            }
            Self::Listed(entries) if entries.is_empty() => write!(f, "Gallery is empty"),
            Self::Listed(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "#{index} length={} fraction={} angle={} threshold={} maxDepth={}",
                        entry.trunk_length,
                        entry.shrink_fraction,
                        entry.branch_angle_deg,
                        entry.min_segment_length,
                        entry.max_depth
                    )?;
                }
                Ok(())
            }
            Self::Rendered { cells, sheet } => {
                write!(f, "Rendered {cells} trees to {}", sheet.display())
            }
            Self::Cleared => write!(f, "Gallery cleared"),
        }
    }
}

/// Executes one parsed command against the configured gallery
pub struct GalleryApp {
    cli: Cli,
    config: GalleryConfig,
}

impl GalleryApp {
    /// Create an app for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let config = GalleryConfig::new(&cli.data_dir);
        Self { cli, config }
    }

    /// Active configuration
    pub const fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns an error if a form value is not a number or an image cannot be
    /// written. Storage failures are logged, not returned.
    pub fn run(&self) -> Result<Outcome> {
        match self.cli.command.clone() {
            Command::Add(tree) => self.add(&tree),
            Command::Draw { output, tree, size } => Self::draw(&tree, &output, size),
            Command::List => Ok(Outcome::Listed(self.config.open_store().list().to_vec())),
            Command::Render { output, cells } => {
                let store = self.config.open_store();
                let sheet = output.unwrap_or_else(|| self.config.sheet_path());
                let drawn = self.render_pass(store.list(), &sheet, cells)?;
                Ok(Outcome::Rendered {
                    cells: drawn,
                    sheet,
                })
            }
            Command::Clear => {
                self.config.open_store().clear();
                self.config.remove_stale_cells(0)?;
                Ok(Outcome::Cleared)
            }
        }
    }

    fn add(&self, tree: &TreeArgs) -> Result<Outcome> {
        let params = tree.to_form()?.to_parameters();
        warn_if_expensive(&params);

        let mut store = self.config.open_store();
        if !store.append(params) {
            return Ok(Outcome::Rejected {
                capacity: store.capacity(),
            });
        }

        let index = store.len() - 1;
        info!(index, "tree saved");

        let sheet = self.config.sheet_path();
        self.render_pass(store.list(), &sheet, false)?;
        Ok(Outcome::Added {
            index,
            capacity: store.capacity(),
            sheet,
        })
    }

    fn draw(tree: &TreeArgs, output: &Path, size: u32) -> Result<Outcome> {
        let params = tree.to_form()?.to_parameters();
        warn_if_expensive(&params);

        let mut surface = RasterSurface::new(size, size);
        let segments = generate_tree(&params, tree_origin(size, size));
        render_segments(Some(&mut surface), &segments);
        export_png(surface.image(), output)?;

        Ok(Outcome::Drawn {
            segments: segments.len(),
            path: output.to_path_buf(),
        })
    }

    // Full redraw of every stored entry into its own cell
    fn render_pass(
        &self,
        entries: &[TreeParameters],
        sheet: &Path,
        write_cells: bool,
    ) -> Result<usize> {
        let layout = self.config.layout;
        let mut surfaces = allocate_surfaces(&layout);

        let progress = if self.cli.should_show_progress() {
            RenderProgress::new(entries.len())
        } else {
            RenderProgress::hidden(entries.len())
        };
        let drawn = render_gallery_with(entries, &mut surfaces, |index| {
            progress.cell_drawn(index);
        });
        progress.finish();

        export_png(&compose_sheet(&layout, &surfaces), sheet)?;

        if write_cells {
            for (index, surface) in surfaces.iter().take(drawn).enumerate() {
                export_png(surface.image(), &self.config.cell_path(index))?;
            }
        }
        self.config.remove_stale_cells(drawn)?;

        Ok(drawn)
    }
}

fn warn_if_expensive(params: &TreeParameters) {
    let bound = params.segment_bound();
    if bound > SEGMENT_WARNING_THRESHOLD {
        warn!(
            max_depth = params.max_depth,
            segment_bound = bound,
            "tree may be very large; lower max depth or raise threshold"
        );
    }
}
