//! marklink - Plain text to HTML converter

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use marklink::{ConnectionInfo, ConvertOptions, linkify_reader};

#[derive(Parser)]
#[command(name = "marklink")]
#[command(version, about = "Plain text to HTML converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    marklink notes.txt notes.html       Convert a text file to HTML
    echo 'see www.x.com' | marklink -   Convert stdin to stdout
    marklink -c connection.json         Rate a navigator.connection snapshot")]
struct Cli {
    /// Input file, or - for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Encoding to try when the input is not valid UTF-8
    #[arg(short, long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Treat INPUT as a connection snapshot (JSON) and print its quality
    #[arg(short, long)]
    connection: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = if cli.connection {
        show_quality(&cli.input)
    } else {
        convert(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn read_input(path: &str) -> marklink::Result<Vec<u8>> {
    if path == "-" {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        Ok(fs::read(path)?)
    }
}

fn convert(cli: &Cli) -> marklink::Result<()> {
    let options = match &cli.encoding {
        Some(label) => ConvertOptions::new().with_encoding(label.as_str())?,
        None => ConvertOptions::new(),
    };

    let input = read_input(&cli.input)?;
    debug!(input = %cli.input, bytes = input.len(), "read input");

    match &cli.output {
        Some(path) => {
            let file = fs::File::create(path)?;
            let written = linkify_reader(input.as_slice(), io::BufWriter::new(file), &options)?;
            if !cli.quiet {
                eprintln!("{} -> {path} ({written} bytes)", cli.input);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            linkify_reader(input.as_slice(), &mut out, &options)?;
            out.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn show_quality(path: &str) -> marklink::Result<()> {
    let input = read_input(path)?;
    let json = marklink::util::decode_text(&input, None);
    let info = ConnectionInfo::from_json(&json)?;

    let quality = info.quality(info.has_network_details());

    println!("Status: {} ({})", quality.message(), quality.status());
    println!("Color: {}", quality.color());
    if let Some(ref kind) = info.connection_type {
        println!("Connection type: {}", kind.label());
    }
    if let Some(effective) = info.effective_type {
        println!("Effective type: {}", effective.label());
    }
    match info.downlink_mbps {
        Some(downlink) => println!("Downlink: {downlink} Mbit/s"),
        None => println!("Downlink: unavailable"),
    }
    match info.rtt_ms {
        Some(rtt) => println!("RTT: {rtt} ms"),
        None => println!("RTT: unavailable"),
    }
    println!("Data saver: {}", if info.save_data { "on" } else { "off" });

    Ok(())
}
