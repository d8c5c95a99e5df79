use crate::bootstrap::AppContext;
use anyhow::Result;

pub fn run(ctx: &AppContext) -> Result<()> {
    let store = ctx.store()?;
    let meals = store.meal_history()?;
    let workouts = store.workout_history()?;

    if meals.is_empty() && workouts.is_empty() {
        println!("No history yet. Scan a meal or generate a workout to get started.");
        return Ok(());
    }

    if !meals.is_empty() {
        println!("Meals ({})", meals.len());
        for entry in &meals {
            println!(
                "  {}  {:.0} kcal",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.calories
            );
        }
    }

    if !workouts.is_empty() {
        println!("Workouts ({})", workouts.len());
        for entry in &workouts {
            println!(
                "  {}  {}",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.title
            );
        }
    }

    Ok(())
}
