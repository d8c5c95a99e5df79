use crate::bootstrap::AppContext;
use anyhow::Result;

pub fn guest(ctx: &AppContext) -> Result<()> {
    let store = ctx.store()?;
    store.login_as_guest();
    println!("✅ Continuing as guest.");
    Ok(())
}

pub fn login(ctx: &AppContext, email: &str) -> Result<()> {
    let store = ctx.store()?;
    store.login(email);
    println!("✅ Logged in as {email}.");
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    let store = ctx.store()?;
    store.logout();
    println!("Session cleared.");
    Ok(())
}
