use crate::bootstrap::AppContext;
use anyhow::Result;
use fitscan_core::history::MealHistoryEntry;
use std::path::Path;

pub async fn run(ctx: &AppContext, photo: &Path) -> Result<()> {
    let store = ctx.store()?;

    println!("Analyzing meal photo...");
    let result = ctx.api.analyze_meal(photo).await?;

    store.record_meal(MealHistoryEntry::new(
        result.total_calories,
        Some(photo.to_path_buf()),
    ));

    println!("✅ {}", result.meal_type);
    println!("  calories:  {:.0} kcal", result.total_calories);
    println!("  protein:   {:.0} g", result.macros.protein);
    println!("  carbs:     {:.0} g", result.macros.carbs);
    println!("  fat:       {:.0} g", result.macros.fat);
    println!();
    println!("{}", result.feedback);

    Ok(())
}
