use std::{env, fs};

use chrono::Local;
use reqwest::Client;
use spendings_client::{
    api::HttpSpendingsApi, config::Config, controller::PageController, prompt::ConsolePrompter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    dotenvy::dotenv().ok();

    let mut config = match fs::read_to_string("config.json") {
        Ok(raw) => serde_json::from_str::<Config>(&raw)?,
        Err(_) => Config::default(),
    };
    if let Ok(base_url) = env::var("SPENDINGS_BASE_URL") {
        config.base_url = base_url;
    }

    let api = HttpSpendingsApi::new_dyn(Client::new(), &config.base_url);
    let prompter = ConsolePrompter::new_dyn();
    let mut controller = PageController::new(api, prompter, config);
    controller.init(&env::var("PAGE_QUERY").unwrap_or_default());

    // Vehicle id and month from the command line; month defaults to current
    let mut args = env::args().skip(1);
    let vehicle_id = args.next().unwrap_or(String::from("1")).parse::<i64>()?;
    let month = args
        .next()
        .unwrap_or_else(|| Local::now().format("%Y-%m").to_string());

    controller.select_vehicle(vehicle_id);
    controller.load_selected_vehicle(&month).await;

    if let Some(html) = controller.spendings_panel_html() {
        println!("{}", html);
    }

    Ok(())
}
