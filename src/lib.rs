// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires the modules together into one request/response run.
//
// Module responsibilities:
// - `config`: Resolves the endpoint URL and hall id from the environment
//   and command-line arguments into one immutable `Config`.
// - `api`: Encapsulates the GraphQL HTTP interaction with the
//   recommendation backend (fixed `recommend` query, blocking POST,
//   response classification).
// - `ui`: Renders the ranked item list to the console and provides the
//   progress spinner shown while the request is in flight.
//
// Keeping this separation makes it easier to test the request payload and
// the output format without touching the network.
pub mod api;
pub mod config;
pub mod ui;
