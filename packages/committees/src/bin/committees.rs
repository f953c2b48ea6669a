// Command-line front end: load a committee list and print it

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use committees_core::domains::committees::{CommitteeList, ListState, Navigator, RowLayout};
use committees_core::kernel::{BaseCommitteeService, CongressCommitteeService};
use committees_core::Config;
use congress_client::{Chamber, Committee, Legislator};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "committees", about = "List congressional committees")]
struct Cli {
    #[command(subcommand)]
    source: Source,

    /// Print the ordered committees as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Open the committee at this row (0-based)
    #[arg(long, global = true, value_name = "POSITION")]
    open: Option<usize>,
}

#[derive(Subcommand)]
enum Source {
    /// Committees of a chamber (house, senate, joint)
    Chamber { chamber: Chamber },
    /// Committees a legislator serves on
    Legislator {
        /// Bioguide id, e.g. B000944
        bioguide_id: String,
    },
}

/// Prints the selected committee's details
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn open_committee(&mut self, committee: &Committee) {
        println!();
        println!("{}", committee.name.bold());
        println!("  id:       {}", committee.id);
        println!("  chamber:  {}", committee.chamber);
        if let Some(parent) = committee.parent_id() {
            println!("  parent:   {}", parent);
        }
        if let Some(url) = &committee.url {
            println!("  url:      {}", url);
        }
        if let Some(office) = &committee.office {
            println!("  office:   {}", office);
        }
        if let Some(phone) = &committee.phone {
            println!("  phone:    {}", phone);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,committees_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let service: Arc<dyn BaseCommitteeService> =
        Arc::new(CongressCommitteeService::new(config.congress_client()?));

    let mut list = match cli.source {
        Source::Chamber { chamber } => CommitteeList::for_chamber(chamber),
        Source::Legislator { bioguide_id } => {
            CommitteeList::for_legislator(Legislator::new(bioguide_id))
        }
    };

    list.attach();
    let pending = list.start(service);
    list.apply(pending.wait().await);

    if cli.json {
        let committees = list.committees().unwrap_or_default();
        println!(
            "{}",
            serde_json::to_string_pretty(committees).context("Failed to serialize committees")?
        );
    } else {
        print_state(list.state());
    }

    if let Some(position) = cli.open {
        if list.select(position, &mut TerminalNavigator).is_none() {
            anyhow::bail!("No committee at row {}", position);
        }
    }

    Ok(())
}

fn print_state(state: &ListState) {
    match state {
        ListState::Loading { message } | ListState::Empty { message } => {
            println!("{}", message.dimmed())
        }
        ListState::Loaded(rows) => {
            for (position, row) in rows.iter().enumerate() {
                match row.layout {
                    RowLayout::Committee => println!("{:>3}  {}", position, row.name),
                    RowLayout::Subcommittee => {
                        println!("{:>3}    {}", position, row.name.dimmed())
                    }
                }
            }
        }
    }
}
