use anyhow::Result;
use sentinel::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Gate(args) => actions::gate::handle(args).await?,
        Action::Serve(args) => actions::serve::handle(args).await?,
    }

    Ok(())
}
