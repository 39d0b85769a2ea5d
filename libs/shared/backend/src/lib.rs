pub mod client;

pub use client::PracticeApiClient;
