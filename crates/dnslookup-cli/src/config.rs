//! CLI flag overrides on top of `dnslookup-config`.
//!
//! Flags win over the profile, the profile wins over `[defaults]`.

use secrecy::SecretString;

use dnslookup_api::ClientConfig;
use dnslookup_config::{
    Config, Profile, load_config, profile_base_url, profile_transport, resolve_api_key,
};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Build a `ClientConfig` from the config file, profile, and CLI overrides.
pub fn build_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let cfg = load_config()?;
    let profile_name = cfg.active_profile_name(global.profile.as_deref());
    let mut profile = select_profile(&cfg, &profile_name, global.profile.is_some())?;

    apply_overrides(&mut profile, global);

    let api_key = match global.api_key {
        Some(ref key) => SecretString::from(key.clone()),
        None => resolve_api_key(&profile, &profile_name)?,
    };

    Ok(ClientConfig {
        base_url: profile_base_url(&profile)?,
        api_key,
        transport: profile_transport(&profile, &cfg.defaults)?,
    })
}

/// The named profile, or an empty one when it is implicit and absent.
///
/// An explicitly requested profile must exist.
fn select_profile(cfg: &Config, name: &str, explicit: bool) -> Result<Profile, CliError> {
    match cfg.profiles.get(name) {
        Some(profile) => Ok(profile.clone()),
        None if explicit => Err(CliError::ProfileNotFound {
            name: name.into(),
            available: available_profiles(cfg),
        }),
        None => Ok(Profile::default()),
    }
}

pub fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        "(none)".into()
    } else {
        cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn apply_overrides(profile: &mut Profile, global: &GlobalOpts) {
    if let Some(ref url) = global.base_url {
        profile.base_url = Some(url.clone());
    }
    if let Some(ref proxy) = global.proxy {
        profile.proxy = Some(proxy.clone());
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
}
