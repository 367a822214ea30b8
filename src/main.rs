use clap::{Args, Parser, Subcommand};
use graphtint::{
    glyph::{self, Paint, Scalar, StyleDefaults, EDGE_STYLE, NODE_STYLE},
    swatch, table, AttrValue, AttributeColorizer, Color, LegendEntry, PaletteRegistry,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::path::PathBuf;

/// Graphtint: attribute-driven colors for graph drawings
#[derive(Parser, Debug)]
#[command(
    name = "graphtint",
    about = "Map node and edge attributes to palette colors, legends and glyph records",
    version,
    propagate_version = true,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered palettes with a preview
    Palettes,
    /// Print the colors a palette yields for a given size
    Palette(PaletteArgs),
    /// Assign a color to every row of an attribute table
    Colorize(ColorizeArgs),
    /// Combine an attribute table and a layout into glyph records
    Glyphs(GlyphsArgs),
    /// Combine an edge table and a layout into edge segment records
    Edges(EdgesArgs),
}

#[derive(Args, Debug, Clone)]
struct DrawOptions {
    /// Palette name, or "random" [default: category20 for nodes, viridis for edges]
    #[arg(long, value_name = "PALETTE")]
    palette: Option<String>,
    /// Maximum number of colors (-1 for the palette's own capacity)
    #[arg(long, value_name = "N", default_value_t = -1, allow_negative_numbers = true)]
    max_colors: i32,
    /// Seed for the "random" palette
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct PaletteArgs {
    /// Palette name, or "random"
    #[arg(long, value_name = "PALETTE")]
    name: String,
    /// Number of colors to resolve
    #[arg(long, value_name = "N")]
    size: usize,
    /// Seed for the "random" palette
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct ColorizeArgs {
    /// CSV attribute table with a header row
    #[arg(short, long, value_name = "CSV")]
    input: PathBuf,
    /// Column holding the node or edge id
    #[arg(long, value_name = "COLUMN", default_value = "id")]
    id_column: String,
    /// Attribute to color by
    #[arg(long, value_name = "ATTRIBUTE")]
    color_by: String,
    #[command(flatten)]
    draw: DrawOptions,
    /// Output CSV with one id,color row per input row
    #[arg(short, long, value_name = "CSV")]
    output: PathBuf,
    /// Optional output CSV for the legend
    #[arg(long, value_name = "CSV")]
    legend: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GlyphsArgs {
    /// CSV attribute table with a header row
    #[arg(short, long, value_name = "CSV")]
    input: PathBuf,
    /// Column holding the node id
    #[arg(long, value_name = "COLUMN", default_value = "id")]
    id_column: String,
    /// CSV with id,x,y rows from the layout engine
    #[arg(long, value_name = "CSV")]
    layout: PathBuf,
    /// Attribute name to color by, or a literal color
    #[arg(long, value_name = "COLOR|ATTRIBUTE", default_value = NODE_STYLE.color)]
    color: String,
    #[command(flatten)]
    draw: DrawOptions,
    /// Attribute name to size by, or a fixed size
    #[arg(long, value_name = "SIZE|ATTRIBUTE", default_value = "9")]
    size: String,
    /// Attribute name to derive alpha from, or a fixed alpha
    #[arg(long, value_name = "ALPHA|ATTRIBUTE", default_value = "0.9")]
    alpha: String,
    /// Maximum number of distinct size/alpha levels (-1 for one per value)
    #[arg(long, value_name = "N", default_value_t = -1, allow_negative_numbers = true)]
    max_levels: i32,
    /// Output CSV of glyph records
    #[arg(short, long, value_name = "CSV")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct EdgesArgs {
    /// CSV edge table with a header row
    #[arg(short, long, value_name = "CSV")]
    input: PathBuf,
    /// Column holding the source node id
    #[arg(long, value_name = "COLUMN", default_value = "u")]
    source_column: String,
    /// Column holding the target node id
    #[arg(long, value_name = "COLUMN", default_value = "v")]
    target_column: String,
    /// CSV with id,x,y rows from the layout engine
    #[arg(long, value_name = "CSV")]
    layout: PathBuf,
    /// Attribute name to color by, or a literal color
    #[arg(long, value_name = "COLOR|ATTRIBUTE", default_value = EDGE_STYLE.color)]
    color: String,
    #[command(flatten)]
    draw: DrawOptions,
    /// Attribute name to set line width by, or a fixed width
    #[arg(long, value_name = "WIDTH|ATTRIBUTE", default_value = "1")]
    width: String,
    /// Attribute name to derive alpha from, or a fixed alpha
    #[arg(long, value_name = "ALPHA|ATTRIBUTE", default_value = "0.6")]
    alpha: String,
    /// Maximum number of distinct width/alpha levels (-1 for one per value)
    #[arg(long, value_name = "N", default_value_t = -1, allow_negative_numbers = true)]
    max_levels: i32,
    /// Output CSV of edge records
    #[arg(short, long, value_name = "CSV")]
    output: PathBuf,
}

impl DrawOptions {
    fn palette_or<'a>(&'a self, style: &StyleDefaults) -> &'a str {
        self.palette.as_deref().unwrap_or(style.palette)
    }
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn run_palettes(registry: &PaletteRegistry) -> io::Result<()> {
    let mut out = swatch::stdout();
    for palette in registry.palettes() {
        swatch::write_palette_row(&mut out, palette)?;
    }
    writeln!(out, "{:<12} {:<12} {:>3}", "random", "random", "256")?;
    Ok(())
}

fn run_palette(registry: &PaletteRegistry, args: PaletteArgs) -> io::Result<()> {
    let PaletteArgs { name, size, seed } = args;
    let mut rng = make_rng(seed);
    let palette = registry.resolve_with_rng(&name, size, &mut rng)?;
    let entries: Vec<LegendEntry> = palette
        .colors()
        .iter()
        .enumerate()
        .map(|(i, &color)| LegendEntry {
            label: i.to_string(),
            color,
        })
        .collect();
    let mut out = swatch::stdout();
    swatch::write_legend(&mut out, &entries)
}

fn run_colorize(registry: &PaletteRegistry, args: ColorizeArgs) -> io::Result<()> {
    let ColorizeArgs {
        input,
        id_column,
        color_by,
        draw,
        output,
        legend,
    } = args;

    let attributes = table::AttributeTable::read_csv(&input, &id_column)?;
    let values = attributes.column(&color_by)?;
    let colorizer = AttributeColorizer::new(registry);
    let mut rng = make_rng(draw.seed);
    let palette = draw.palette_or(&NODE_STYLE);
    let map = colorizer.build_with_rng(&values, palette, draw.max_colors, &mut rng)?;
    let colors = map.colors_for(&values)?;

    eprintln!(
        "[colorize] {} distinct values of '{}' -> {} colors from '{}'{}",
        map.len(),
        color_by,
        map.distinct_colors(),
        palette,
        if map.is_binned() { " (binned)" } else { "" }
    );

    table::write_colors_csv(&output, attributes.ids(), &colors)?;
    eprintln!("[colorize] Wrote {} colors to {}", colors.len(), output.display());
    if let Some(legend_path) = legend {
        table::write_legend_csv(&legend_path, map.legend())?;
        eprintln!("[colorize] Wrote legend to {}", legend_path.display());
    }

    let mut out = swatch::stdout();
    swatch::write_legend(&mut out, map.legend())
}

/// Column values when the table has the column, `None` otherwise.
fn attribute_values(
    has_column: bool,
    column: impl FnOnce() -> io::Result<Vec<AttrValue>>,
) -> io::Result<Option<Vec<AttrValue>>> {
    if has_column {
        column().map(Some)
    } else {
        Ok(None)
    }
}

fn parse_paint<'a>(
    values: &'a Option<Vec<AttrValue>>,
    raw: &str,
    palette: &'a str,
    max_colors: i32,
) -> io::Result<Paint<'a>> {
    match values {
        Some(values) => Ok(Paint::ByAttribute {
            values,
            palette,
            max_colors,
        }),
        None => Ok(Paint::Uniform(Color::parse(raw)?)),
    }
}

fn parse_scalar<'a>(
    values: &'a Option<Vec<AttrValue>>,
    raw: &str,
    max_levels: i32,
    scale: f32,
) -> io::Result<Scalar<'a>> {
    if let Some(values) = values {
        return Ok(Scalar::ByAttribute {
            values,
            max_levels,
            scale,
        });
    }
    raw.parse::<f32>().map(Scalar::Fixed).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is neither an attribute nor a number", raw),
        )
    })
}

fn run_glyphs(registry: &PaletteRegistry, args: GlyphsArgs) -> io::Result<()> {
    let GlyphsArgs {
        input,
        id_column,
        layout,
        color,
        draw,
        size,
        alpha,
        max_levels,
        output,
    } = args;

    let attributes = table::AttributeTable::read_csv(&input, &id_column)?;
    let positions = table::read_layout_csv(&layout)?;
    eprintln!("[glyphs] Loaded {} layout positions", positions.len());

    let count = attributes.len();
    let colorizer = AttributeColorizer::new(registry);
    let mut rng = make_rng(draw.seed);
    let column = |name: &str| attribute_values(attributes.has_column(name), || attributes.column(name));

    let color_values = column(color.as_str())?;
    let paint = parse_paint(&color_values, &color, draw.palette_or(&NODE_STYLE), draw.max_colors)?;
    let (colors, map) = glyph::paint_colors(&colorizer, paint, count, &mut rng)?;
    if let Some(map) = &map {
        eprintln!(
            "[glyphs] Colored by '{}' with {} colors",
            color,
            map.distinct_colors()
        );
    }

    let size_values = column(size.as_str())?;
    let sizes = glyph::scalar_values(
        parse_scalar(&size_values, &size, max_levels, NODE_STYLE.size)?,
        count,
    )?;
    let alpha_values = column(alpha.as_str())?;
    let alphas = glyph::scalar_values(parse_scalar(&alpha_values, &alpha, max_levels, 1.0)?, count)?;

    let glyphs = glyph::assemble_glyphs(attributes.ids(), &positions, &colors, &sizes, &alphas)?;
    table::write_glyphs_csv(&output, &glyphs)?;
    eprintln!("[glyphs] Wrote {} glyphs to {}", glyphs.len(), output.display());
    Ok(())
}

fn run_edges(registry: &PaletteRegistry, args: EdgesArgs) -> io::Result<()> {
    let EdgesArgs {
        input,
        source_column,
        target_column,
        layout,
        color,
        draw,
        width,
        alpha,
        max_levels,
        output,
    } = args;

    let edges = table::EdgeTable::read_csv(&input, &source_column, &target_column)?;
    let positions = table::read_layout_csv(&layout)?;
    eprintln!("[edges] Loaded {} layout positions", positions.len());

    let count = edges.len();
    let colorizer = AttributeColorizer::new(registry);
    let mut rng = make_rng(draw.seed);
    let column = |name: &str| attribute_values(edges.has_column(name), || edges.column(name));

    let color_values = column(color.as_str())?;
    let paint = parse_paint(&color_values, &color, draw.palette_or(&EDGE_STYLE), draw.max_colors)?;
    let (colors, map) = glyph::paint_colors(&colorizer, paint, count, &mut rng)?;
    if let Some(map) = &map {
        eprintln!(
            "[edges] Colored by '{}' with {} colors",
            color,
            map.distinct_colors()
        );
    }

    let width_values = column(width.as_str())?;
    let widths = glyph::scalar_values(
        parse_scalar(&width_values, &width, max_levels, EDGE_STYLE.size)?,
        count,
    )?;
    let alpha_values = column(alpha.as_str())?;
    let alphas = glyph::scalar_values(parse_scalar(&alpha_values, &alpha, max_levels, 1.0)?, count)?;

    let segments = glyph::assemble_edges(edges.ends(), &positions, &colors, &widths, &alphas)?;
    table::write_edges_csv(&output, &segments)?;
    eprintln!("[edges] Wrote {} edges to {}", segments.len(), output.display());
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let registry = PaletteRegistry::shared();

    let (tag, result) = match cli.command {
        Command::Palettes => ("palettes", run_palettes(registry)),
        Command::Palette(args) => ("palette", run_palette(registry, args)),
        Command::Colorize(args) => ("colorize", run_colorize(registry, args)),
        Command::Glyphs(args) => ("glyphs", run_glyphs(registry, args)),
        Command::Edges(args) => ("edges", run_edges(registry, args)),
    };
    if let Err(err) = result {
        eprintln!("[{} error] {}", tag, err);
        std::process::exit(1);
    }

    Ok(())
}
