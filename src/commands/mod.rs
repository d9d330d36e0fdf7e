pub mod auth;
pub mod create;
pub mod epics;
pub mod members;
pub mod projects;
pub mod sprints;
pub mod state;
pub mod teams;
