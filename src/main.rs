use clap::Parser;
use donordrive::config::cli::{require, Command, ParticipantResource, TeamResource};
use donordrive::utils::logger;
use donordrive::{
    CliConfig, DonorDriveClient, Endpoint, Fundraiser, ListOptions, RawResponse, Result,
};
use serde::Serialize;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("❌ Request failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: CliConfig) -> Result<()> {
    let config = cli.resolve()?;
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    let client = DonorDriveClient::from_config(&config)?;
    let defaults = &config.defaults;

    match &cli.command {
        Command::Participant { id, resource, list } => {
            let id = require(*id, defaults.participant_id.as_ref(), "defaults.participant_id")?;
            let participant = client.participant(id);
            let options = ListOptions::from(list);
            match resource {
                ParticipantResource::Details => print_json(&participant.details().await?),
                ParticipantResource::Donations => {
                    print_json(&participant.donations(&options).await?)
                }
                ParticipantResource::Donors => print_json(&participant.donors(&options).await?),
                ParticipantResource::Badges => print_json(&participant.badges().await?),
                ParticipantResource::Milestones => print_json(&participant.milestones().await?),
                ParticipantResource::Incentives => print_json(&participant.incentives().await?),
                ParticipantResource::Activity => print_json(&participant.activity().await?),
            }
        }
        Command::Team { id, resource, list } => {
            let id = require(*id, defaults.team_id.as_ref(), "defaults.team_id")?;
            let team = client.team(id);
            let options = ListOptions::from(list);
            match resource {
                TeamResource::Details => print_json(&team.details().await?),
                TeamResource::Participants => print_json(&team.participants(&options).await?),
                TeamResource::Donations => print_json(&team.donations(&options).await?),
                TeamResource::Badges => print_json(&team.badges().await?),
                TeamResource::Activity => print_json(&team.activity().await?),
            }
        }
        Command::TeamGroup { code } => {
            let code = require(code.clone(), defaults.team_group.as_ref(), "defaults.team_group")?;
            print_json(&client.team_group(&code).await?)
        }
        Command::Raw { endpoint, id, list } => {
            let endpoint = Endpoint::by_name(endpoint)?;
            match client.fetch_raw(endpoint, id, &ListOptions::from(list)).await? {
                RawResponse::One(record) => print_json(&record),
                RawResponse::Many(records) => print_json(&records),
            }
        }
        Command::Endpoints => {
            for endpoint in donordrive::core::endpoint::ALL {
                println!(
                    "{:<24} {} {} ({:?})",
                    endpoint.name, endpoint.method, endpoint.path, endpoint.shape
                );
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
