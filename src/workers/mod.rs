pub mod poller;

pub use poller::{FetchOutcome, PollerHandle, spawn_poller};
