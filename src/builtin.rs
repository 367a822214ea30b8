//! Anchor colors for the bundled palettes.
//!
//! Sequential and diverging entries are anchor stops that get interpolated to
//! 256 colors when the registry is built. Categorical entries are used as-is.

use crate::palettes::PaletteKind;

/// Color space ramps are interpolated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    Oklab,
    /// Straight sRGB steps; black to white gives every grey level once.
    Srgb,
}

pub struct BuiltinPalette {
    pub name: &'static str,
    pub kind: PaletteKind,
    pub blend: Blend,
    pub colors: &'static [&'static str],
}

const fn seq(name: &'static str, colors: &'static [&'static str]) -> BuiltinPalette {
    BuiltinPalette {
        name,
        kind: PaletteKind::Sequential,
        blend: Blend::Oklab,
        colors,
    }
}

const fn seq_srgb(name: &'static str, colors: &'static [&'static str]) -> BuiltinPalette {
    BuiltinPalette {
        name,
        kind: PaletteKind::Sequential,
        blend: Blend::Srgb,
        colors,
    }
}

const fn div(name: &'static str, colors: &'static [&'static str]) -> BuiltinPalette {
    BuiltinPalette {
        name,
        kind: PaletteKind::Diverging,
        blend: Blend::Oklab,
        colors,
    }
}

const fn cat(name: &'static str, colors: &'static [&'static str]) -> BuiltinPalette {
    BuiltinPalette {
        name,
        kind: PaletteKind::Categorical,
        blend: Blend::Oklab,
        colors,
    }
}

pub const BUILTIN: &[BuiltinPalette] = &[
    // Sequential
    seq(
        "viridis",
        &[
            "#440154", "#482878", "#3e4a89", "#31688e", "#26828e", "#1f9e89", "#35b779",
            "#6ece58", "#b5de2b", "#fde725",
        ],
    ),
    seq(
        "plasma",
        &[
            "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953",
            "#fb9f3a", "#fdca26", "#f0f921",
        ],
    ),
    seq(
        "magma",
        &[
            "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f", "#cd4071", "#f1605d",
            "#fd9668", "#feca8d", "#fcfdbf",
        ],
    ),
    seq(
        "inferno",
        &[
            "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60", "#cf4446", "#ed6925",
            "#fb9b06", "#f7d13d", "#fcffa4",
        ],
    ),
    seq(
        "cividis",
        &[
            "#00224e", "#123570", "#3b496c", "#575d6d", "#707173", "#8a8678", "#a59c74",
            "#c3b369", "#e1cc55", "#fdea45",
        ],
    ),
    seq(
        "turbo",
        &[
            "#30123b", "#4145ab", "#4675ed", "#39a2fc", "#1bcfd4", "#24eca6", "#61fc6c",
            "#a4fc3b", "#d1e834", "#f3c63a", "#fe9b2d", "#f36315", "#d93806", "#b11901",
            "#7a0402",
        ],
    ),
    seq_srgb("grey", &["#000000", "#ffffff"]),
    seq(
        "blues",
        &[
            "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5",
            "#08519c", "#08306b",
        ],
    ),
    seq(
        "greens",
        &[
            "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45",
            "#006d2c", "#00441b",
        ],
    ),
    seq(
        "oranges",
        &[
            "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801",
            "#a63603", "#7f2704",
        ],
    ),
    seq(
        "reds",
        &[
            "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d",
            "#a50f15", "#67000d",
        ],
    ),
    seq(
        "purples",
        &[
            "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#6a51a3",
            "#54278f", "#3f007d",
        ],
    ),
    // Diverging
    div(
        "rdbu",
        &[
            "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0",
            "#92c5de", "#4393c3", "#2166ac", "#053061",
        ],
    ),
    div(
        "rdylbu",
        &[
            "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8",
            "#abd9e9", "#74add1", "#4575b4", "#313695",
        ],
    ),
    div(
        "spectral",
        &[
            "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598",
            "#abdda4", "#66c2a5", "#3288bd", "#5e4fa2",
        ],
    ),
    div(
        "piyg",
        &[
            "#8e0152", "#c51b7d", "#de77ae", "#f1b6da", "#fde0ef", "#f7f7f7", "#e6f5d0",
            "#b8e186", "#7fbc41", "#4d9221", "#276419",
        ],
    ),
    // Categorical
    cat(
        "category10",
        &[
            "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
            "#7f7f7f", "#bcbd22", "#17becf",
        ],
    ),
    cat(
        "category20",
        &[
            "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728",
            "#ff9896", "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2",
            "#7f7f7f", "#c7c7c7", "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
        ],
    ),
    cat(
        "tableau10",
        &[
            "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1",
            "#ff9da7", "#9c755f", "#bab0ac",
        ],
    ),
    cat(
        "set1",
        &[
            "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628",
            "#f781bf", "#999999",
        ],
    ),
    cat(
        "set2",
        &[
            "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494",
            "#b3b3b3",
        ],
    ),
    cat(
        "set3",
        &[
            "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69",
            "#fccde5", "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
        ],
    ),
    cat(
        "pastel1",
        &[
            "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd",
            "#fddaec", "#f2f2f2",
        ],
    ),
    cat(
        "pastel2",
        &[
            "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc",
            "#cccccc",
        ],
    ),
    cat(
        "dark2",
        &[
            "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d",
            "#666666",
        ],
    ),
    cat(
        "paired",
        &[
            "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f",
            "#ff7f00", "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
        ],
    ),
    cat(
        "accent",
        &[
            "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17",
            "#666666",
        ],
    ),
];

/// Alternative spellings accepted when looking a palette up.
pub const ALIASES: &[(&str, &str)] = &[("gray", "grey"), ("greys", "grey"), ("tableau", "tableau10")];
