/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use fxa_client::FxAdviceClient;
use rust_decimal::Decimal;

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "fxa")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Override the service base URL from FXA_BASE_URL
  #[arg(long, global = true)]
  base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Fetch the latest pricing sheet and submit one advice synchronously
  SyncFlow(SubmitArgs),
  /// Submit one advice asynchronously, then poll the batch status
  AsyncFlow(SubmitArgs),
  /// Fetch the pricing sheet active at a given time
  SheetAt {
    /// UTC timestamp, e.g. 2024-04-26T07:30:00
    #[arg(long)]
    ts: String,
  },
  /// Submit an advice missing required fields to show the service's validation response
  InvalidAdvice,
  /// Fetch pricing sheets and walk through the response envelope
  Inspect,
}

/// Arguments shared by the submitting flows
#[derive(Args, Debug)]
pub struct SubmitArgs {
  /// Payment provider to put on the advice
  #[arg(long, default_value = "VISA")]
  pub provider: String,

  /// Transaction amount
  #[arg(long, default_value = "10")]
  pub amount: Decimal,
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).init();

  // Load configuration
  let mut config = config::Config::from_env()?;
  if let Some(base_url) = cli.base_url {
    config.api_config.base_url = base_url;
  }

  let client = FxAdviceClient::new(config.api_config.clone())?;

  // Execute command
  match cli.command {
    Commands::SyncFlow(args) => commands::sync_flow::execute(&client, &args).await?,
    Commands::AsyncFlow(args) => commands::async_flow::execute(&client, &config, &args).await?,
    Commands::SheetAt { ts } => commands::sheet_at::execute(&client, &ts).await?,
    Commands::InvalidAdvice => commands::invalid_advice::execute(&client).await?,
    Commands::Inspect => commands::inspect::execute(&client).await?,
  }

  Ok(())
}
