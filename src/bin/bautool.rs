use bau_scanner::tools::{
    ToolError, init_tracing, parse_address, parse_hex_u32, read_payloads, render_json,
    render_table,
};
use bau_scanner::{AddressType, DecoderConfig, FieldRecord, UriBuilder, UriDecoder};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bautool", version, about = "Broadcast Audio URI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a single payload
    Decode {
        payload: String,
        #[arg(long)]
        json: bool,
        /// Fail on malformed values instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// Decode every line of a file
    DecodeFile {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Build the payload a broadcast source would show
    Encode {
        /// Address as printed, e.g. C1:22:33:44:55:66
        #[arg(long)]
        address: String,
        /// Broadcast ID in hex
        #[arg(long)]
        broadcast_id: String,
        #[arg(long)]
        name: String,
        /// Use a public address type (default is random)
        #[arg(long)]
        public: bool,
        #[arg(long)]
        code: Option<String>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Decode {
            payload,
            json,
            strict,
        } => decode_cmd(&payload, json, strict),
        Command::DecodeFile { path, json } => decode_file_cmd(&path, json),
        Command::Encode {
            address,
            broadcast_id,
            name,
            public,
            code,
        } => encode_cmd(&address, &broadcast_id, &name, public, code.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn print_records(records: &[FieldRecord], json: bool) -> Result<(), ToolError> {
    if json {
        println!("{}", render_json(records)?);
    } else {
        print!("{}", render_table(records));
    }
    Ok(())
}

fn decode_cmd(payload: &str, json: bool, strict: bool) -> Result<(), ToolError> {
    let config = if strict {
        DecoderConfig::strict()
    } else {
        DecoderConfig::from_env()
    };
    let records = UriDecoder::with_config(config).decode(payload)?;
    if records.is_empty() && !json {
        println!("Not a Broadcast Audio URI");
        return Ok(());
    }
    print_records(&records, json)
}

fn decode_file_cmd(path: &Path, json: bool) -> Result<(), ToolError> {
    let payloads = read_payloads(path)?;
    let results = UriDecoder::with_config(DecoderConfig::from_env()).decode_batch(&payloads)?;

    if json {
        let all: Vec<&[FieldRecord]> = results.iter().map(Vec::as_slice).collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    let recognized = results.iter().filter(|r| !r.is_empty()).count();
    for (i, records) in results.iter().enumerate() {
        println!("[{}]", i + 1);
        if records.is_empty() {
            println!("Not a Broadcast Audio URI");
        } else {
            print!("{}", render_table(records));
        }
    }
    println!("Recognized {}/{} payloads", recognized, payloads.len());
    Ok(())
}

fn encode_cmd(
    address: &str,
    broadcast_id: &str,
    name: &str,
    public: bool,
    code: Option<&str>,
) -> Result<(), ToolError> {
    let address = parse_address(address)?;
    let broadcast_id = parse_hex_u32("broadcast-id", broadcast_id)?;

    let address_type = if public {
        AddressType::Public
    } else {
        AddressType::Random
    };
    let mut builder = UriBuilder::broadcast_source(address_type, address, broadcast_id, name)?;
    if let Some(code) = code {
        builder.broadcast_code(code);
    }
    println!("{}", builder.build());
    Ok(())
}
