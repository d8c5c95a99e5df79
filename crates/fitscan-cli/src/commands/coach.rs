use crate::bootstrap::AppContext;
use anyhow::Result;
use fitscan_core::history::WorkoutHistoryEntry;

pub async fn run(ctx: &AppContext, location: &str, limitations: &str) -> Result<()> {
    let store = ctx.store()?;

    println!("Generating workout plan...");
    let plan = ctx.api.generate_workout(location, limitations).await?;

    store.record_workout(WorkoutHistoryEntry::new(plan.title.clone()));

    println!("✅ {} ({})", plan.title, plan.focus);
    for exercise in &plan.exercises {
        let volume = exercise
            .reps
            .as_deref()
            .or(exercise.duration.as_deref())
            .unwrap_or("-");
        println!("  {} — {} x {}", exercise.name, exercise.sets, volume);
        println!("      {}", exercise.tips);
    }
    println!();
    println!("{}", plan.feedback);

    Ok(())
}
