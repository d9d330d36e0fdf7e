pub mod clubhouse_client;

pub use clubhouse_client::ClubhouseClient;
