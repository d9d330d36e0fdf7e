pub mod resources;
pub mod utils;

pub use resources::{
    print_epics, print_members, print_projects, print_sprints, print_state_summary, print_story,
    print_teams,
};
pub use utils::{clean_description, truncate};
