use std::process;

use clap::{Arg, Command};

use clubhouse_cli::commands;
use clubhouse_cli::logging;

#[tokio::main]
async fn main() {
    let _ = logging::init_logging();

    let app = Command::new("clubhouse")
        .about("Clubhouse CLI - Interact with the Clubhouse API from the command line")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Authenticate with Clubhouse")
                .arg(
                    Arg::new("api-token")
                        .long("api-token")
                        .value_name("TOKEN")
                        .help("Set your Clubhouse API token")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current API token")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("state")
                .about("Fetch the full workspace state (projects, epics, members, teams, sprints)")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the snapshot as JSON")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("projects").about("List projects"))
        .subcommand(Command::new("epics").about("List epics"))
        .subcommand(Command::new("members").about("List members"))
        .subcommand(Command::new("teams").about("List teams"))
        .subcommand(Command::new("sprints").about("List sprint labels"))
        .subcommand(
            Command::new("create")
                .about("Create Clubhouse resources")
                .subcommand_required(true)
                .subcommand(
                    Command::new("story")
                        .about("Create a new story")
                        .arg(
                            Arg::new("name")
                                .value_name("NAME")
                                .help("Story name")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("description")
                                .value_name("DESCRIPTION")
                                .help("Story description")
                                .index(2),
                        )
                        .arg(
                            Arg::new("project")
                                .long("project")
                                .short('p')
                                .value_name("PROJECT_ID")
                                .help("Project id the story belongs to"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_name("TYPE")
                                .help("Story type: feature, bug, chore"),
                        )
                        .arg(
                            Arg::new("epic")
                                .long("epic")
                                .short('e')
                                .value_name("EPIC_ID")
                                .help("Epic id to attach the story to"),
                        )
                        .arg(
                            Arg::new("owners")
                                .long("owner")
                                .short('o')
                                .value_name("MEMBER_ID")
                                .help("Owner member ids")
                                .action(clap::ArgAction::Append),
                        )
                        .arg(
                            Arg::new("labels")
                                .long("label")
                                .short('l')
                                .value_name("LABEL_NAME")
                                .help("Label names")
                                .action(clap::ArgAction::Append),
                        ),
                ),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => commands::auth::handle_auth(sub_matches).await,
        Some(("state", sub_matches)) => commands::state::handle_state(sub_matches).await,
        Some(("projects", sub_matches)) => commands::projects::handle_projects(sub_matches).await,
        Some(("epics", sub_matches)) => commands::epics::handle_epics(sub_matches).await,
        Some(("members", sub_matches)) => commands::members::handle_members(sub_matches).await,
        Some(("teams", sub_matches)) => commands::teams::handle_teams(sub_matches).await,
        Some(("sprints", sub_matches)) => commands::sprints::handle_sprints(sub_matches).await,
        Some(("create", sub_matches)) => match sub_matches.subcommand() {
            Some(("story", story_matches)) => {
                commands::create::handle_create_story(story_matches).await
            }
            _ => {
                eprintln!("Unknown create subcommand. Use 'clubhouse create --help' for available options.");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Unknown command. Use 'clubhouse --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        logging::log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
