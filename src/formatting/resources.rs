use colored::*;

use super::utils::*;
use crate::models::{Epic, Label, Member, Project, Story, Team};
use crate::state::StateSnapshot;

pub fn print_projects(projects: &[Project]) {
    println!(
        "{:<8} {:<30} {:<8} {:<50}",
        "ID".bold(),
        "Name".bold(),
        "Stories".bold(),
        "Description".bold()
    );
    println!("{}", "-".repeat(96));
    for project in projects {
        let num_stories = project
            .stats
            .as_ref()
            .and_then(|s| s.num_stories)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        let description = project
            .description
            .as_deref()
            .map(clean_description)
            .unwrap_or_default();

        println!(
            "{:<8} {:<30} {:<8} {:<50}",
            project.id,
            truncate(&project.name, 28).bold(),
            num_stories,
            truncate(&description, 48)
        );
    }
}

pub fn print_epics(epics: &[Epic]) {
    println!(
        "{:<8} {:<40} {:<12} {:<10}",
        "ID".bold(),
        "Name".bold(),
        "State".bold(),
        "Points".bold()
    );
    println!("{}", "-".repeat(70));
    for epic in epics {
        let state = if epic.completed {
            "completed".green()
        } else if epic.started {
            "started".yellow()
        } else {
            "unstarted".normal()
        };
        let points = epic
            .stats
            .as_ref()
            .and_then(|s| s.num_points)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<8} {:<40} {:<12} {:<10}",
            epic.id,
            truncate(&epic.name, 38),
            state,
            points
        );
    }
}

pub fn print_members(members: &[Member]) {
    println!(
        "{:<38} {:<25} {:<20} {:<10}",
        "ID".bold(),
        "Name".bold(),
        "Mention".bold(),
        "Role".bold()
    );
    println!("{}", "-".repeat(93));
    for member in members {
        let name = member.profile.name.as_deref().unwrap_or("-");
        let mention = member
            .profile
            .mention_name
            .as_deref()
            .map(|m| format!("@{}", m))
            .unwrap_or_else(|| "-".to_string());
        let role = member.role.as_deref().unwrap_or("-");

        let name_colored = if member.disabled {
            truncate(name, 23).dimmed()
        } else {
            truncate(name, 23).normal()
        };

        println!(
            "{:<38} {:<25} {:<20} {:<10}",
            member.id, name_colored, mention, role
        );
    }
}

pub fn print_teams(teams: &[Team]) {
    println!(
        "{:<8} {:<25} {:<10} {:<40}",
        "ID".bold(),
        "Name".bold(),
        "Projects".bold(),
        "Description".bold()
    );
    println!("{}", "-".repeat(83));
    for team in teams {
        let description = team
            .description
            .as_deref()
            .map(clean_description)
            .unwrap_or_default();

        println!(
            "{:<8} {:<25} {:<10} {:<40}",
            team.id,
            truncate(&team.name, 23),
            team.project_ids.len(),
            truncate(&description, 38)
        );
    }
}

pub fn print_sprints(sprints: &[Label]) {
    println!("{:<8} {:<30} {:<10}", "ID".bold(), "Name".bold(), "Stories".bold());
    println!("{}", "-".repeat(48));
    for sprint in sprints {
        let num_stories = sprint
            .stats
            .as_ref()
            .and_then(|s| s.num_stories)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<8} {:<30} {:<10}",
            sprint.id,
            truncate(&sprint.name, 28),
            num_stories
        );
    }
}

pub fn print_story(story: &Story) {
    println!("{} {}", "✅".green(), "Story created successfully!".green().bold());
    println!("{}: {}", "ID".bold(), story.id.to_string().bright_blue().bold());
    println!("{}: {}", "Name".bold(), story.name);
    println!("{}: {}", "Type".bold(), story.story_type);
    println!("{}: {}", "Project".bold(), story.project_id);
    if let Some(epic_id) = story.epic_id {
        println!("{}: {}", "Epic".bold(), epic_id);
    }
    if !story.owner_ids.is_empty() {
        println!("{}: {}", "Owners".bold(), story.owner_ids.join(", "));
    }
}

pub fn print_state_summary(snapshot: &StateSnapshot) {
    println!("{}", "Workspace state".bold());
    println!("{}", "-".repeat(40));
    println!("{:<12} {}", "Projects:", snapshot.projects.len());
    println!("{:<12} {}", "Epics:", snapshot.epics.len());
    println!("{:<12} {}", "Members:", snapshot.members.len());
    println!("{:<12} {}", "Teams:", snapshot.teams.len());
    println!("{:<12} {}", "Sprints:", snapshot.sprints.len());
}
