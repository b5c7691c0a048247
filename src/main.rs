use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tbhv_rs::decoder::DECODER_NAMES;
use tbhv_rs::logging::{log_error, log_payload_hex};
use tbhv_rs::util::hex::decode_hex;
use tbhv_rs::{decode_transport, decoder_by_name, init_logger, log_info, DecoderConfig};

#[derive(Parser)]
#[command(name = "tbhv-cli")]
#[command(about = "CLI tool for decoding TBHV110 indoor-air-quality payloads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a base64-encoded uplink
    Decode {
        payload: String,
        #[command(flatten)]
        opts: DecodeOpts,
    },
    /// Decode a hex-encoded uplink
    DecodeHex {
        payload: String,
        #[command(flatten)]
        opts: DecodeOpts,
    },
    /// List available decoders
    Decoders,
}

#[derive(Args)]
struct DecodeOpts {
    /// FPort from the uplink metadata
    #[arg(short, long)]
    fport: Option<u8>,
    #[arg(short, long, default_value = "tbhv110")]
    decoder: String,
    /// Trace input and output at debug level (set RUST_LOG=tbhv::payload=debug)
    #[arg(long)]
    debug: bool,
    #[arg(long)]
    pretty: bool,
}

fn run_decode(raw: &[u8], opts: &DecodeOpts) -> Result<()> {
    let config = DecoderConfig::new().with_debug_output(opts.debug);
    if config.debug_output {
        // Traced before the length check so rejected payloads show up too
        log_payload_hex("Raw payload", raw);
    }

    let decoder = decoder_by_name(&opts.decoder, config.debug_output)?;
    let decoded = decoder
        .decode(raw, opts.fport)
        .with_context(|| format!("{} decoder rejected payload", decoder.decoder_type()))?;

    let json = if opts.pretty {
        decoded.to_json_pretty()?
    } else {
        decoded.to_json()?
    };
    println!("{json}");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Decode { payload, opts } => {
            let raw = decode_transport(&payload).context("Failed to decode base64 payload")?;
            run_decode(&raw, &opts)?;
        }
        Commands::DecodeHex { payload, opts } => {
            let raw = decode_hex(&payload).context("Failed to decode hex payload")?;
            run_decode(&raw, &opts)?;
        }
        Commands::Decoders => {
            for name in DECODER_NAMES {
                log_info(&format!("Decoder: {name}"));
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn main() {
    init_logger();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
