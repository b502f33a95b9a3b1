mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally={level},telegram_bot={level},sheets={level},ledger={level}",
            level = settings.app.level
        ))
        .init();

    tracing::info!("Starting money tracker bot...");

    let display = settings.display;
    let bot = telegram_bot::Bot::builder()
        .token(&settings.telegram.token)
        .allowed_users(settings.telegram.allowed_users.unwrap_or_default())
        .sheets_url(&settings.sheets.url)
        .currency(&display.currency)
        .accounts(display.accounts)
        .categories(display.categories)
        .build()?;

    bot.run().await;

    Ok(())
}
