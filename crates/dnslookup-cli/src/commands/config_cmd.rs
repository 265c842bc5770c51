//! Config subcommand handlers.

use secrecy::SecretString;

use dnslookup_config::{self as config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Profile names, one per line, the default one marked with `*`.
fn profile_lines(cfg: &Config) -> String {
    let default = cfg.default_profile.as_deref().unwrap_or("default");
    cfg.profiles
        .keys()
        .map(|name| {
            let marker = if name == default { " *" } else { "" };
            format!("{name}{marker}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?.redacted();
            let as_toml =
                toml::to_string_pretty(&cfg).map_err(|e| CliError::Render(e.to_string()))?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |_| as_toml.trim_end().to_owned(),
                profile_lines,
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::SetKey { key, plaintext } => {
            let key = match key {
                Some(key) => key,
                None => rpassword::prompt_password("API key: ").map_err(prompt_err)?,
            };
            if key.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "api_key".into(),
                    reason: "API key cannot be empty".into(),
                });
            }

            let mut cfg = config::load_config()?;
            let profile_name = cfg.active_profile_name(global.profile.as_deref());
            let profile = cfg.profiles.entry(profile_name.clone()).or_default();

            let stored_in = if plaintext {
                profile.api_key = Some(key);
                config::config_path().display().to_string()
            } else {
                config::store_api_key(&profile_name, &SecretString::from(key))?;
                "system keyring".to_owned()
            };
            config::save_config(&cfg)?;

            if !global.quiet {
                eprintln!("✓ API key for profile '{profile_name}' stored in {stored_in}");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use dnslookup_config::Profile;

    use super::*;

    #[test]
    fn default_profile_is_marked() {
        let mut cfg = Config::default();
        cfg.profiles.insert("default".into(), Profile::default());
        cfg.profiles.insert("work".into(), Profile::default());

        assert_eq!(profile_lines(&cfg), "default *\nwork");
    }
}
