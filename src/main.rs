// Entrypoint for the CLI application.
// - Keeps `main` small: resolve config, make the one request, print.
// - Returns `anyhow::Result` so every failure exits 1 with the
//   diagnostic on stderr while stdout stays clean.

use hooshungry_cli::{api::RecommendClient, config::Config, ui};

fn main() -> anyhow::Result<()> {
    // Endpoint comes from `HOOSHUNGRY_GQL` (default localhost:8080),
    // hall id from the optional positional argument (default 1).
    let config = Config::from_env_and_args()?;
    let client = RecommendClient::new(config.endpoint.clone())?;

    let spinner = ui::spinner("Querying recommendations...");
    let result = client.recommend(config.hall_id);
    spinner.finish_and_clear();

    let items = result?;
    let stdout = std::io::stdout();
    ui::print_recommendations(&mut stdout.lock(), config.hall_id, &items)?;
    Ok(())
}
