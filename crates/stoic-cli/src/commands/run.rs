use anyhow::Result;
use console::style;

use stoic::bot;
use stoic::config::Settings;

pub async fn execute() -> Result<()> {
    println!("{}\n", style("Starting Daily Stoic bot...").bold());

    let settings = Settings::from_env()?;
    bot::run(&settings).await?;

    println!(
        "\n{}",
        style("✓ Daily Stoic posted successfully!").green().bold()
    );
    Ok(())
}
