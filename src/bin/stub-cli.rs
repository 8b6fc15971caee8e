use clap::{Parser, Subcommand};

use hello_relay::admin::{AdminClient, RequestPattern, ResponseDef, StubMapping};

#[derive(Parser)]
#[command(name = "stub-cli")]
#[command(about = "Management CLI for a WireMock-compatible mock server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check mock server health
    Health,
    /// Remove all registered stubs
    Reset,
    /// Register a stub mapping
    Stub {
        /// HTTP method to match
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// URL to match (path and query)
        #[arg(short, long)]
        path: String,

        /// Status code to answer with
        #[arg(short, long, default_value_t = 200)]
        status: u16,

        /// Optional response body
        #[arg(short, long)]
        body: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = AdminClient::new(cli.url);

    match cli.command {
        Commands::Health => {
            client.health_check().await?;
            println!("mock server healthy");
        }
        Commands::Reset => {
            client.reset().await?;
            println!("stubs cleared");
        }
        Commands::Stub {
            method,
            path,
            status,
            body,
        } => {
            let stub = StubMapping {
                request: RequestPattern {
                    method,
                    url: Some(path),
                    url_path: None,
                },
                response: ResponseDef {
                    status,
                    body,
                    headers: None,
                },
            };
            client.create_stub(&stub).await?;
            println!("stub created");
        }
    }

    Ok(())
}
