use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "userdir-cli")]
#[command(about = "Management CLI for the user directory server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:9000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user
    Create {
        id: String,
        name: String,
        email: String,
    },
    /// Fetch a single user by id
    Get { id: String },
    /// List all users
    List,
    /// Replace a user's name and email
    Update {
        id: String,
        name: String,
        email: String,
    },
    /// Delete a user by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Create { id, name, email } => {
            let res = client
                .post(format!("{}/user", cli.url))
                .json(&serde_json::json!({ "id": id, "name": name, "email": email }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client.get(format!("{}/user/{}", cli.url, id)).send().await?;
            print_response(res).await?;
        }
        Commands::List => {
            let res = client.get(format!("{}/users", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Update { id, name, email } => {
            let res = client
                .put(format!("{}/user/{}", cli.url, id))
                .json(&serde_json::json!({ "name": name, "email": email }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Delete { id } => {
            let res = client
                .delete(format!("{}/user/{}", cli.url, id))
                .send()
                .await?;
            let status = res.status();
            if status.is_success() {
                println!("deleted");
            } else {
                eprintln!("Error: server returned status {}", status);
                if let Ok(text) = res.text().await {
                    eprintln!("Response: {}", text);
                }
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
