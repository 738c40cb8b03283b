//! lumbertab CLI - HTML lumber order to CSV tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use lumbertab::{
    detect_format_from_path, output_path_for, report, GroupOrder, HtmlParser, JsonFormat,
    ParseOptions, Report, ReportOptions,
};

#[derive(Parser)]
#[command(name = "lumbertab")]
#[command(version)]
#[command(about = "Convert HTML lumber orders to aggregated CSV reports", long_about = None)]
struct Cli {
    /// Input HTML file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    convert: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an HTML order to CSV (default)
    Convert {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Print the extracted table rows
    Rows {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the aggregated report as JSON
    Json {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Group order
        #[arg(long, value_enum, default_value = "first-seen")]
        order: OrderMode,

        /// Reuse the previous size when a line item has no size row
        #[arg(long)]
        carry_forward: bool,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone, Default)]
struct ConvertArgs {
    /// Output file (defaults to the input path with a .csv extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write tab-separated output
    #[arg(long)]
    tsv: bool,

    /// Group order
    #[arg(long, value_enum, default_value = "first-seen")]
    order: OrderMode,

    /// Reuse the previous size when a line item has no size row
    #[arg(long)]
    carry_forward: bool,

    /// Omit the header row
    #[arg(long)]
    no_header: bool,
}

#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, ValueEnum)]
enum OrderMode {
    /// Order of first appearance in the document
    #[default]
    FirstSeen,
    /// Sorted by lumber size
    Lexical,
}

impl From<OrderMode> for GroupOrder {
    fn from(mode: OrderMode) -> Self {
        match mode {
            OrderMode::FirstSeen => GroupOrder::FirstSeen,
            OrderMode::Lexical => GroupOrder::Lexical,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Commands::Convert { input, args }) => cmd_convert(&input, &args),
        Some(Commands::Rows { input }) => cmd_rows(&input),
        Some(Commands::Json {
            input,
            output,
            compact,
            order,
            carry_forward,
        }) => cmd_json(&input, output.as_deref(), compact, order, carry_forward),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        // Default behavior: convert the positional input
        None => match cli.input {
            Some(input) => cmd_convert(&input, &cli.convert),
            None => Err("no input file given (usage: lumbertab <FILE>, see --help)".into()),
        },
    }
}

fn parse_options(carry_forward: bool) -> ParseOptions {
    let options = ParseOptions::new();
    if carry_forward {
        options.carry_forward()
    } else {
        options
    }
}

fn report_options(args: &ConvertArgs) -> ReportOptions {
    let options = ReportOptions::new()
        .with_group_order(args.order.into())
        .with_header(!args.no_header);
    if args.tsv {
        options.tsv()
    } else {
        options
    }
}

/// Output path for a conversion: explicit, or derived from the input.
fn output_path(input: &Path, args: &ConvertArgs) -> PathBuf {
    match &args.output {
        Some(path) => path.clone(),
        None if args.tsv => input.with_extension("tsv"),
        None => output_path_for(input),
    }
}

fn build_report(
    input: &Path,
    options: ParseOptions,
    report_options: &ReportOptions,
) -> Result<Report, Box<dyn std::error::Error>> {
    let parser = HtmlParser::open_with_options(input, options)?;
    let (records, stats) = parser.parse_with_stats()?;
    Ok(report::build_report(&records, stats, report_options)?)
}

fn cmd_convert(input: &Path, args: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Bad extensions are rejected before anything else happens
    detect_format_from_path(input)?;

    let output = output_path(input, args);
    let report_options = report_options(args);
    log::debug!("Converting {} -> {}", input.display(), output.display());

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading HTML...");
    let parser = match HtmlParser::open_with_options(input, parse_options(args.carry_forward)) {
        Ok(parser) => parser,
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    pb.inc(1);

    pb.set_message("Rebuilding line items...");
    let report = match parser
        .parse_with_stats()
        .and_then(|(records, stats)| report::build_report(&records, stats, &report_options))
    {
        Ok(report) => report,
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    pb.inc(1);

    pb.set_message("Writing report...");
    if let Err(e) = report::save_csv(&report, &output, &report_options) {
        pb.abandon();
        return Err(e.into());
    }
    pb.inc(1);

    pb.finish_and_clear();

    let stats = &report.stats;
    println!("{} {}", "Saved to".green(), output.display());
    println!(
        "  {} {} rows, {} line items ({} sheathing, {} dimensional)",
        "├─".dimmed(),
        stats.row_count,
        stats.record_count(),
        stats.sheathing_count,
        stats.dimensional_count
    );
    println!(
        "  {} {} lumber sizes",
        "└─".dimmed(),
        report.len()
    );

    Ok(())
}

fn cmd_rows(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let parser = HtmlParser::open(input)?;

    for row in parser.rows() {
        println!("{:>5}\t{}", row.index.to_string().dimmed(), row.plain_text());
    }

    println!("\n{} {} rows", "Done!".green().bold(), parser.rows().len());
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    order: OrderMode,
    carry_forward: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report_options = ReportOptions::new().with_group_order(order.into());
    let report = build_report(input, parse_options(carry_forward), &report_options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = report::to_json(&report, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "lumbertab".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("HTML lumber order to CSV tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_input() {
        let cli = Cli::try_parse_from(["lumbertab", "order.html"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("order.html")));
        assert!(cli.command.is_none());
        assert_eq!(
            output_path(cli.input.as_deref().unwrap(), &cli.convert),
            PathBuf::from("order.csv")
        );
    }

    #[test]
    fn test_convert_flags() {
        let cli = Cli::try_parse_from([
            "lumbertab",
            "convert",
            "order.htm",
            "--tsv",
            "--order",
            "lexical",
            "--carry-forward",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Convert { input, args }) => {
                assert_eq!(input, PathBuf::from("order.htm"));
                assert!(args.tsv);
                assert!(args.carry_forward);
                assert_eq!(args.order, OrderMode::Lexical);
                assert_eq!(output_path(&input, &args), PathBuf::from("order.tsv"));

                let options = report_options(&args);
                assert_eq!(options.delimiter, b'\t');
                assert_eq!(options.group_order, GroupOrder::Lexical);
            }
            _ => panic!("expected convert subcommand"),
        }
    }

    #[test]
    fn test_missing_input_fails() {
        let cli = Cli::try_parse_from(["lumbertab"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("no input file"));
    }

    #[test]
    fn test_explicit_output() {
        let cli = Cli::try_parse_from(["lumbertab", "order.html", "-o", "out/report.csv"]).unwrap();
        assert_eq!(
            output_path(Path::new("order.html"), &cli.convert),
            PathBuf::from("out/report.csv")
        );
    }

    #[test]
    fn test_json_subcommand() {
        let cli = Cli::try_parse_from(["lumbertab", "json", "order.html", "--compact"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Json { compact: true, .. })
        ));
    }

    #[test]
    fn test_convert_rejects_bad_extension_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("order.pdf");
        fs::write(&input, "<table></table>").unwrap();

        let args = ConvertArgs::default();
        assert!(cmd_convert(&input, &args).is_err());
        assert!(!dir.path().join("order.csv").exists());
    }

    #[test]
    fn test_convert_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("order.html");
        fs::write(
            &input,
            "<table><tr><td></td><td>SKU 1</td><td>Sheathing</td></tr>\
             <tr><td></td><td></td><td>1/2 CDX</td><td>12</td></tr></table>",
        )
        .unwrap();

        cmd_convert(&input, &ConvertArgs::default()).unwrap();

        let csv = fs::read_to_string(dir.path().join("order.csv")).unwrap();
        assert_eq!(
            csv,
            "Lumber Size,Quantity,Board Footage,Lineal Footage\n1/2 CDX,12,,\n"
        );
    }
}
