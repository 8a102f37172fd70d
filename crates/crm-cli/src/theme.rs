use console::style;
use dialoguer::theme::ColorfulTheme;

/// Returns the standard theme used for interactive prompts
pub fn dialoguer_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_style: console::Style::new().bold(),
        prompt_prefix: style("?".to_string()).yellow().bold(),
        success_prefix: style("✔".to_string()).green().bold(),
        error_prefix: style("✖".to_string()).red().bold(),
        hint_style: console::Style::new().dim(),
        values_style: console::Style::new().cyan(),
        ..Default::default()
    }
}

/// Asks before an irreversible change, unless `yes` was passed.
pub(crate) fn confirm(prompt: &str, yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }

    let theme = {
        let mut t = dialoguer_theme();
        t.prompt_style = console::Style::new().red().bold();
        t
    };

    let confirmed = dialoguer::Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!();
        println!("  {}", style("Aborted.").dim());
        println!();
    }

    Ok(confirmed)
}

/// Prompts for a password without echoing it.
pub(crate) fn password(prompt: &str, confirmation: bool) -> anyhow::Result<String> {
    let theme = dialoguer_theme();
    let mut input = dialoguer::Password::with_theme(&theme).with_prompt(prompt);

    if confirmation {
        input = input.with_confirmation("Repeat password", "Passwords do not match");
    }

    Ok(input.interact()?)
}

pub(crate) fn heading(title: &str) {
    println!();
    println!("  {}", style(title).cyan().bold().underlined());
    println!();
}

pub(crate) fn done(message: impl std::fmt::Display) {
    println!(
        "  {} {}",
        style("✓").green().bold(),
        style(message).dim()
    );
    println!();
}
