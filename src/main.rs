//! admat CLI
//!
//! Usage:
//!   admat [OPTIONS] [OPTION_NAME]
//!
//! Options:
//!   -r, --rules <FILE>     Rule document (JSON, or TOML by extension)
//!   -e, --elements <FILE>  Element tree decoded from the design file (JSON)
//!   -l, --labels <FILE>    Role labels for element ids (JSON)
//!   --list                 List every option in the rule document
//!   --check                Lint the rule document and exit
//!   --preview              Output an SVG wireframe instead of JSON
//!   -c, --compact          Single-line JSON output
//!   -d, --debug            Dump placed elements to stderr
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::Parser;

use admat::document::lint;
use admat::{
    generate, render_layout_svg, ElementTree, GeneratedLayout, LabelMap, RuleDocument,
    DEFAULT_SAFEZONE_MARGIN,
};

#[derive(Parser)]
#[command(name = "admat")]
#[command(about = "Deterministic layout generation for advertising creatives")]
struct Cli {
    /// Layout option to generate, as named in the rule document
    option: Option<String>,

    /// Rule document file (JSON; .toml parses as TOML)
    #[arg(short, long)]
    rules: PathBuf,

    /// Element tree file (JSON)
    #[arg(short, long)]
    elements: Option<PathBuf>,

    /// Label map file (JSON)
    #[arg(short, long)]
    labels: Option<PathBuf>,

    /// List every option in the rule document and exit
    #[arg(long)]
    list: bool,

    /// Lint the rule document and exit (non-zero when warnings exist)
    #[arg(long)]
    check: bool,

    /// Output an SVG wireframe preview instead of JSON
    #[arg(long)]
    preview: bool,

    /// Single-line JSON output
    #[arg(short, long)]
    compact: bool,

    /// Debug mode: dump placed elements to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let document = match RuleDocument::from_file(&cli.rules) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error loading rules '{}': {}", cli.rules.display(), e);
            std::process::exit(1);
        }
    };

    if cli.list {
        print_options(&document);
        return;
    }

    if cli.check {
        let warnings = lint::check(&document);
        if warnings.is_empty() {
            println!("no issues found");
            return;
        }
        for warning in &warnings {
            println!("{}: {}", warning.category, warning.message);
        }
        std::process::exit(1);
    }

    let Some(option_name) = &cli.option else {
        print_intro();
        return;
    };

    let tree = match &cli.elements {
        Some(path) => match ElementTree::from_file(path) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("Error loading elements '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("Error: --elements is required to generate a layout");
            std::process::exit(1);
        }
    };

    let labels = match &cli.labels {
        Some(path) => match LabelMap::from_file(path) {
            Ok(labels) => labels,
            Err(e) => {
                eprintln!("Error loading labels '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("Error: --labels is required to generate a layout");
            std::process::exit(1);
        }
    };

    let Some(layout) = generate(&document, option_name, &tree, &labels) else {
        eprintln!("Error: no option named '{}' in the document", option_name);
        let suggestions = document.suggest_options(option_name);
        match suggestions.as_slice() {
            [] => {}
            [only] => eprintln!("Did you mean '{}'?", only),
            many => eprintln!("Did you mean one of: {}?", many.join(", ")),
        }
        std::process::exit(1);
    };

    if cli.debug {
        print_debug(&layout);
    }

    if cli.preview {
        let margin = document
            .find_option(option_name)
            .map(|found| found.option.safezone_margin)
            .unwrap_or(DEFAULT_SAFEZONE_MARGIN);
        println!("{}", render_layout_svg(&layout, margin));
        return;
    }

    let json = if cli.compact {
        layout.to_compact_json_string()
    } else {
        layout.to_json_string()
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_options(document: &RuleDocument) {
    for channel in &document.channels {
        for layout in &channel.layouts {
            for option in &layout.options {
                println!(
                    "{}  ({}, {} {}x{})",
                    option.name, channel.id, layout.aspect_ratio, layout.width, layout.height
                );
            }
        }
    }
}

fn print_debug(layout: &GeneratedLayout) {
    eprintln!("=== Generated Layout ===");
    eprintln!(
        "{} {}x{} ({}), {} elements",
        layout.name,
        layout.width,
        layout.height,
        layout.aspect_ratio,
        layout.elements.len()
    );
    for element in &layout.elements {
        eprintln!(
            "[{}] role={} x={:.1} y={:.1} w={:.1} h={:.1} visible={}",
            element.id,
            element.role,
            element.x,
            element.y,
            element.width,
            element.height,
            element.visible
        );
    }
    eprintln!("========================");
}

fn print_intro() {
    println!(
        r#"admat - deterministic layout generation for advertising creatives

USAGE:
    admat <OPTION_NAME> --rules rules.json --elements tree.json --labels labels.json
    admat --rules rules.json --list
    admat --rules rules.json --check

OPTIONS:
    -r, --rules <FILE>     Rule document (JSON; .toml parses as TOML)
    -e, --elements <FILE>  Element tree decoded from the design file (JSON)
    -l, --labels <FILE>    Role labels keyed by element id (JSON)
    --list                 List every option in the rule document
    --check                Lint the rule document
    --preview              Output an SVG wireframe instead of JSON
    -c, --compact          Single-line JSON output
    -d, --debug            Dump placed elements to stderr
    -h, --help             Print help

QUICK START:
    admat feed -r rules.json -e tree.json -l labels.json > layout.json
    admat feed -r rules.json -e tree.json -l labels.json --preview > layout.svg

Run --list to see which option names a rule document defines."#
    );
}
