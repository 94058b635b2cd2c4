//! Command-line interface for the triptych utility
//!
//! Provides a CLI to inspect how triplet payloads turn into knowledge graph
//! diagrams: the deduplicated elements, the selected layout, and payload
//! validity.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::table::render_elements;
use triptych::logging::init_logging;
use triptych::{
    build_elements, select_layout, AnalysisPayload, DefaultTheme, GraphElements, LayoutSpec,
    ThemeResolver,
};

/// Triptych - Turn extracted triplets into knowledge graph diagrams
#[derive(Parser)]
#[command(name = "triptych")]
#[command(about = "A Rust utility to turn subject-predicate-object triplets into knowledge graph diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build graph elements from a triplet payload
    Elements {
        /// Input file containing a triplet payload (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the elements (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = FormatChoice::Json)]
        format: FormatChoice,

        /// Emit JSON on a single line
        #[arg(long)]
        compact: bool,

        /// When to use colors in table output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Show the layout a payload would be arranged with
    Layout {
        /// Input file containing a triplet payload (use - for stdin)
        #[arg(short, long, conflicts_with = "nodes")]
        input: Option<PathBuf>,

        /// Use an explicit node count instead of a payload
        #[arg(short, long)]
        nodes: Option<usize>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Validate a triplet payload
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Supported output formats for graph elements
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum FormatChoice {
    /// Engine wire form
    #[default]
    Json,
    /// Aligned text tables
    Table,
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Main CLI application
pub struct TriptychApp {
    theme: Box<dyn ThemeResolver>,
}

impl TriptychApp {
    /// Create a new application instance with the default theme
    pub fn new() -> Self {
        Self::with_theme(DefaultTheme)
    }

    /// Create a new application instance with a specific theme
    pub fn with_theme(theme: impl ThemeResolver + 'static) -> Self {
        Self {
            theme: Box::new(theme),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("TRIPTYCH_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("TRIPTYCH_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Triptych v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Elements {
                input,
                output,
                format,
                compact,
                color,
            } => self.elements_command(input, output, format, compact, color, cli.verbose),
            Commands::Layout { input, nodes, json } => {
                self.layout_command(input, nodes, json, cli.verbose)
            }
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
        }
    }

    /// Handle the elements command
    fn elements_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        format: FormatChoice,
        compact: bool,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let elements = self.build(&content)?;

        if verbose {
            eprintln!(
                "Built {} nodes and {} edges",
                elements.node_count(),
                elements.edge_count()
            );
        }

        let rendered = match format {
            FormatChoice::Json => {
                if compact {
                    serde_json::to_string(&elements)?
                } else {
                    serde_json::to_string_pretty(&elements)?
                }
            }
            FormatChoice::Table => {
                let colorize = self.should_colorize(&output, color);
                render_elements(&elements, colorize)
            }
        };

        self.write_output(output, &rendered)?;
        Ok(())
    }

    /// Handle the layout command
    fn layout_command(
        &self,
        input: Option<PathBuf>,
        nodes: Option<usize>,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let node_count = match nodes {
            Some(count) => count,
            None => {
                let content = self.read_input(input)?;
                if verbose {
                    eprintln!("Read {} bytes of input", content.len());
                }
                self.build(&content)?.node_count()
            }
        };

        let layout = select_layout(node_count);

        if json {
            let report = serde_json::json!({
                "nodes": node_count,
                "layout": layout,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("Nodes: {}", node_count);
            match layout {
                LayoutSpec::Grid { fit, padding } | LayoutSpec::Circle { fit, padding } => {
                    println!("Layout: {}", layout.name());
                    println!("Fit: {}", fit);
                    println!("Padding: {}", padding);
                }
                LayoutSpec::ForceDirected(ref options) => {
                    println!("Layout: {}", layout.name());
                    println!("Fit: {}", options.fit);
                    println!("Padding: {}", options.padding);
                    println!("Iterations: {}", options.num_iter);
                    println!("Ideal edge length: {}", options.ideal_edge_length);
                    println!("Node repulsion: {}", options.node_repulsion);
                }
            }
        }

        Ok(())
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match AnalysisPayload::from_json(&content) {
            Ok(payload) => {
                println!("✓ Valid payload: {} triplets", payload.triplets.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid payload: {}", e);
                Err(e.into())
            }
        }
    }

    /// Parse a payload and build its graph elements
    fn build(&self, content: &str) -> Result<GraphElements> {
        let payload = AnalysisPayload::from_json(content)?;
        Ok(build_elements(&payload.into_triplets(), self.theme.as_ref()))
    }

    /// Determine if we should colorize the output based on color choice and output destination
    fn should_colorize(&self, output: &Option<PathBuf>, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Only colorize if outputting to stdout and it's a terminal
                match output {
                    None => crossterm::tty::IsTty::is_tty(&std::io::stdout()),
                    Some(ref p) if p.to_str() == Some("-") => {
                        crossterm::tty::IsTty::is_tty(&std::io::stdout())
                    }
                    Some(_) => false,
                }
            }
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    let mut content = String::new();
                    io::stdin().read_to_string(&mut content)?;
                    Ok(content)
                } else {
                    fs::read_to_string(&path).map_err(|e| {
                        anyhow!("Failed to read input file '{}': {}", path.display(), e)
                    })
                }
            }
            None => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    print!("{}", stdout_content);
                    io::stdout().flush()?;
                } else {
                    fs::write(&path, content).map_err(|e| {
                        anyhow!("Failed to write output file '{}': {}", path.display(), e)
                    })?;
                }
            }
            None => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for TriptychApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const PAYLOAD: &str = r#"{"triplets": [
        {"subject": "Marie Curie", "subject_qid": "Q7186", "subject_type": "human",
         "predicate": "educated at",
         "object": "University of Paris", "object_qid": "Q209842", "object_type": "organisation"}
    ]}"#;

    #[test]
    fn test_cli_parsing_elements_command() {
        let args = vec![
            "triptych",
            "elements",
            "--input",
            "payload.json",
            "--output",
            "elements.json",
            "--format",
            "table",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Elements {
                input,
                output,
                format,
                compact,
                color,
            } => {
                assert_eq!(input.unwrap().to_string_lossy(), "payload.json");
                assert_eq!(output.unwrap().to_string_lossy(), "elements.json");
                assert_eq!(format, FormatChoice::Table);
                assert!(!compact);
                assert_eq!(color, ColorChoice::Auto); // default
            }
            _ => panic!("Expected Elements command"),
        }
    }

    #[test]
    fn test_cli_parsing_elements_defaults() {
        let args = vec!["triptych", "elements"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Elements { format, compact, .. } => {
                assert_eq!(format, FormatChoice::Json);
                assert!(!compact);
            }
            _ => panic!("Expected Elements command"),
        }
    }

    #[test]
    fn test_cli_parsing_layout_with_nodes() {
        let args = vec!["triptych", "layout", "--nodes", "7", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Layout { input, nodes, json } => {
                assert!(input.is_none());
                assert_eq!(nodes, Some(7));
                assert!(json);
            }
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn test_cli_parsing_layout_rejects_input_with_nodes() {
        let args = vec!["triptych", "layout", "--input", "p.json", "--nodes", "7"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_validate_command() {
        let args = vec!["triptych", "validate"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Validate { input } => {
                assert!(input.is_none());
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_verbose_flag() {
        let args = vec!["triptych", "--verbose", "validate"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.verbose);
    }

    #[test]
    fn test_triptych_app_creation() {
        let _app = TriptychApp::new();
        let _default = TriptychApp::default();
    }

    #[test]
    fn test_read_input_from_file() {
        let app = TriptychApp::new();

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("payload.json");
        fs::write(&file_path, PAYLOAD).unwrap();

        let content = app.read_input(Some(file_path)).unwrap();
        assert_eq!(content, PAYLOAD);
    }

    #[test]
    fn test_read_input_missing_file() {
        let app = TriptychApp::new();
        let result = app.read_input(Some(PathBuf::from("/no/such/payload.json")));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read input file"));
    }

    #[test]
    fn test_write_output_to_file() {
        let app = TriptychApp::new();
        let output = "Test output";

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("output.txt");

        app.write_output(Some(file_path.clone()), output).unwrap();

        let read_content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(read_content, output);
    }

    #[test]
    fn test_elements_command_writes_wire_json() {
        let app = TriptychApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("payload.json");
        let output_path = dir.path().join("elements.json");
        fs::write(&input_path, PAYLOAD).unwrap();

        app.elements_command(
            Some(input_path),
            Some(output_path.clone()),
            FormatChoice::Json,
            false,
            ColorChoice::Never,
            false,
        )
        .unwrap();

        let written = fs::read_to_string(&output_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["nodes"][0]["id"], "Q7186");
        assert_eq!(json["nodes"][0]["displayLabel"], "Marie Curie\nHUMAN");
        assert_eq!(json["edges"][0]["label"], "educated at");
    }

    #[test]
    fn test_elements_command_writes_table() {
        let app = TriptychApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("payload.json");
        let output_path = dir.path().join("elements.txt");
        fs::write(&input_path, PAYLOAD).unwrap();

        app.elements_command(
            Some(input_path),
            Some(output_path.clone()),
            FormatChoice::Table,
            false,
            ColorChoice::Never,
            false,
        )
        .unwrap();

        let written = fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("Marie Curie"));
        assert!(written.contains("educated at"));
        assert!(!written.contains('\x1b'));
    }

    #[test]
    fn test_elements_command_rejects_invalid_payload() {
        let app = TriptychApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("payload.json");
        fs::write(&input_path, "not json").unwrap();

        let result = app.elements_command(
            Some(input_path),
            Some(dir.path().join("out.json")),
            FormatChoice::Json,
            false,
            ColorChoice::Never,
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_layout_command_with_explicit_nodes() {
        let app = TriptychApp::new();
        let result = app.layout_command(None, Some(4), false, false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_layout_command_from_payload() {
        let app = TriptychApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("payload.json");
        fs::write(&input_path, PAYLOAD).unwrap();

        let result = app.layout_command(Some(input_path), None, true, false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_command_valid_payload() {
        let app = TriptychApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("payload.json");
        fs::write(&input_path, PAYLOAD).unwrap();

        let result = app.validate_command(Some(input_path), false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_command_invalid_payload() {
        let app = TriptychApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("payload.json");
        fs::write(&input_path, "[not a payload]").unwrap();

        let result = app.validate_command(Some(input_path), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_should_colorize_never() {
        let app = TriptychApp::new();
        assert!(!app.should_colorize(&None, ColorChoice::Never));
    }

    #[test]
    fn test_should_colorize_always() {
        let app = TriptychApp::new();
        assert!(app.should_colorize(&Some(PathBuf::from("out.txt")), ColorChoice::Always));
    }

    #[test]
    fn test_should_colorize_auto_skips_files() {
        let app = TriptychApp::new();
        assert!(!app.should_colorize(&Some(PathBuf::from("out.txt")), ColorChoice::Auto));
    }
}
