//! Session commands.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Result};
use dialoguer::Password;
use gamegear_sdk::prelude::*;

use super::LoginArgs;
use crate::context::Context;

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_storefront()?;

    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let failure = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&failure);
    shop.auth_mut().subscribe(move |event: &AuthEvent| {
        if let AuthEvent::Failed(e) = event {
            *sink.borrow_mut() = Some(e.clone());
        }
    });

    let spinner = ctx.output.spinner("Signing in...");
    let ok = shop.auth_mut().login(&args.email, &password).await;
    spinner.finish_and_clear();

    if !ok {
        match failure.borrow_mut().take() {
            Some(e) => bail!("{}", e),
            None => bail!("Login failed"),
        }
    }

    match shop.auth().current_user() {
        Some(user) if ctx.output.is_json() => ctx.output.json(user),
        Some(user) => ctx.output.success(&format!("Login successful! Signed in as {}", user.display_name())),
        None => bail!("Login failed"),
    }
    Ok(())
}

/// Run the logout command.
pub fn logout(ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_storefront()?;
    if !shop.auth().is_authenticated() {
        ctx.output.info("You are not signed in");
        return Ok(());
    }

    shop.auth_mut().logout();
    ctx.output.success("You have been logged out");
    Ok(())
}

/// Run the whoami command.
pub fn whoami(ctx: &Context) -> Result<()> {
    let shop = ctx.open_storefront()?;

    match shop.auth().current_user() {
        Some(user) if ctx.output.is_json() => ctx.output.json(user),
        Some(user) => {
            ctx.output.header(&user.name);
            ctx.output.kv("Email", &user.email);
            ctx.output.kv("Role", if user.is_admin { "admin" } else { "customer" });
        }
        None if ctx.output.is_json() => ctx.output.json(&serde_json::Value::Null),
        None => ctx.output.info("Not signed in. Run `gamegear login --email <email>`."),
    }
    Ok(())
}
