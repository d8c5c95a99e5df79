use crate::bootstrap::AppContext;
use anyhow::Result;
use fitscan_core::profile::Profile;
use std::path::Path;

pub async fn run(ctx: &AppContext, age: u32, height: u32, weight: u32, photo: &Path) -> Result<()> {
    let store = ctx.store()?;

    println!("Analyzing body photo...");
    let result = ctx.api.analyze_body(age, height, weight, photo).await?;

    store.set_profile(Profile::new(
        age.to_string(),
        height.to_string(),
        weight.to_string(),
        Some(photo.to_path_buf()),
    ));
    store.set_analysis_result(result.clone());
    // Only a successful analysis round trip completes onboarding
    store.set_onboarding_complete(true);

    println!("✅ Analysis complete.");
    println!("  body fat:  {:.1}%", result.estimated_fat_percentage);
    println!("  biotype:   {}", result.estimated_biotype);
    println!("  goal:      {}", result.suggested_goal);
    println!();
    println!("{}", result.feedback);

    Ok(())
}
