pub mod gate;
pub mod serve;

/// Actions the CLI can dispatch.
pub enum Action {
    Gate(gate::Args),
    Serve(serve::Args),
}
