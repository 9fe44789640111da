// NRIC/FIN check letter validation and Code128 barcode generation

use clap::{Parser, Subcommand};
use log::{error, info};
use nricode::{
    models::BarcodeOptions,
    processing::BarcodeRenderer,
    utils::{config::load_barcode_options, logger::init_logger, NricError},
    ChecksumValidator, NricResponse, NricService,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "nricode",
    version,
    about = "Validate Singapore NRIC/FIN numbers and render Code128 barcodes"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with barcode rendering options
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the trailing letter of an NRIC/FIN
    Validate {
        nric: String,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,

        /// Embed a PNG data URI in the JSON response
        #[arg(long, requires = "json")]
        with_barcode: bool,
    },
    /// Compute the check letter for a series letter and seven digits
    Complete { prefix: String },
    /// Write a Code128 PNG for a valid NRIC/FIN
    Barcode {
        nric: String,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn print_report(nric: &str, response: &NricResponse) {
    println!("NRIC:    {}", nric);
    println!("Result:  {}", if response.valid { "VALID" } else { "INVALID" });
    println!("Message: {}", response.message);
    if let Some(expected) = response.expected {
        println!("Expected check letter: {}", expected);
    }
}

fn run(cli: Cli) -> Result<ExitCode, NricError> {
    let options = match &cli.config {
        Some(path) => load_barcode_options(path)?,
        None => BarcodeOptions::default(),
    };
    let service = NricService::new(options);

    match cli.command {
        Command::Validate {
            nric,
            json,
            with_barcode,
        } => {
            let nric = nric.trim().to_ascii_uppercase();
            let response = if with_barcode {
                service.process(&nric)
            } else {
                NricResponse::from(ChecksumValidator::validate(&nric))
            };

            if json {
                println!("{}", response.to_json()?);
            } else {
                print_report(&nric, &response);
            }

            Ok(exit_code(response.valid))
        }
        Command::Complete { prefix } => match ChecksumValidator::complete(prefix.trim()) {
            Some(nric) => {
                println!("{}", nric);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("Expected a series letter (S, T, F, G or M) followed by 7 digits");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Barcode { nric, output } => {
            let nric = nric.trim().to_ascii_uppercase();
            let result = ChecksumValidator::validate(&nric);
            if !result.is_valid {
                print_report(&nric, &NricResponse::from(result));
                return Ok(ExitCode::FAILURE);
            }

            BarcodeRenderer::save_png(&nric, service.options(), &output)?;
            info!("Wrote barcode to {:?}", output);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            ExitCode::from(2)
        }
    }
}
