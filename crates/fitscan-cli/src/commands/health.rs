use crate::bootstrap::AppContext;
use anyhow::Result;

pub async fn run(ctx: &AppContext) -> Result<()> {
    println!("Probing {} ...", ctx.config.api_url);

    let health = ctx.api.health().await?;
    println!("✅ status: {}", health.status);
    println!(
        "  ai:          {}",
        if health.ai_available {
            "available"
        } else {
            "simulation mode"
        }
    );
    println!("  environment: {}", health.environment);

    Ok(())
}
