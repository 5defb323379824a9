use std::net::{TcpListener, TcpStream};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trimaze::bin::request_handler::RequestHandler;
use trimaze::{TraceOptions, ADDRESS};

/// Answers Validate and Trace requests over length-prefixed JSON.
#[derive(Parser)]
#[command(name = "trimaze-server", version)]
struct ServerArgs {
    /// Address to listen on
    #[arg(long, env = "TRIMAZE_ADDRESS", default_value = ADDRESS)]
    address: String,

    /// Step limit applied to every trace (default: 3 * rows * cols)
    #[arg(long, env = "TRIMAZE_MAX_STEPS")]
    max_steps: Option<usize>,
}

fn handle_client(mut stream: TcpStream, handler: &mut RequestHandler) {
    let peer = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    info!(%peer, "new connection");

    if let Err(err) = handler.serve_connection(&mut stream) {
        error!(%peer, %err, "connection dropped");
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = ServerArgs::parse();
    init(&args)
}

fn init(args: &ServerArgs) -> Result<()> {
    let listener = TcpListener::bind(&args.address)
        .with_context(|| format!("cannot listen on {}", args.address))?;
    info!(address = %args.address, "server started");

    let mut handler = RequestHandler::new(TraceOptions {
        max_steps: args.max_steps,
    });

    // Les connexions sont traitées l'une après l'autre.
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &mut handler),
            Err(err) => error!(%err, "failed to accept connection"),
        }
    }
    info!(handled = handler.handled(), "server done");
    Ok(())
}
