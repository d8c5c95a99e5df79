use crate::bootstrap::AppContext;
use anyhow::Result;

pub fn run(ctx: &AppContext) -> Result<()> {
    let store = ctx.store()?;
    let auth = store.auth()?;
    let profile = store.profile()?;

    let account = if !auth.is_authenticated {
        "anonymous".to_string()
    } else if auth.is_guest {
        "guest".to_string()
    } else {
        auth.email.clone().unwrap_or_default()
    };

    println!("Session");
    println!("  account:     {account}");
    println!(
        "  onboarding:  {}",
        if store.has_completed_onboarding()? {
            "completed"
        } else {
            "not completed"
        }
    );
    println!("  route:       {:?}", store.initial_route()?);

    if !profile.is_empty() {
        println!("Profile");
        println!("  age:         {}", profile.age);
        println!("  height:      {} cm", profile.height);
        println!("  weight:      {} kg", profile.weight);
    }

    if let Some(result) = store.analysis_result()? {
        println!("Latest analysis");
        println!("  body fat:    {:.1}%", result.estimated_fat_percentage);
        println!("  biotype:     {}", result.estimated_biotype);
        println!("  goal:        {}", result.suggested_goal);
    }

    println!(
        "History: {} meal(s), {} workout(s)",
        store.meal_history()?.len(),
        store.workout_history()?.len()
    );

    Ok(())
}
