use tracing::Level;
use validator::Validate;

use crate::app::util::validation::first_message;

use super::{
    errors::PersistenceError,
    models::{recent_prompt::RecentPrompt, settings::Settings},
    store::KeyValueStore,
    RECENT_PROMPTS_KEY, RECENT_PROMPTS_LIMIT, SETTINGS_KEY,
};

pub fn save_settings<S: KeyValueStore>(
    store: &mut S,
    settings: &Settings,
) -> Result<(), PersistenceError> {
    let text = serde_json::to_string(settings)?;
    store.set(SETTINGS_KEY, &text)
}

/// `Ok(None)` when nothing was stored, `Err(Corrupt)` when the stored value
/// does not parse and `Err(Invalid)` when it falls outside the option sets.
pub fn read_settings<S: KeyValueStore>(store: &S) -> Result<Option<Settings>, PersistenceError> {
    let Some(text) = store.get(SETTINGS_KEY)? else {
        return Ok(None);
    };

    let settings: Settings =
        serde_json::from_str(&text).map_err(|source| PersistenceError::Corrupt {
            key: SETTINGS_KEY.to_string(),
            source,
        })?;

    settings
        .validate()
        .map_err(|e| PersistenceError::Invalid {
            key: SETTINGS_KEY.to_string(),
            message: first_message(&e),
        })?;

    Ok(Some(settings))
}

/// Like [`read_settings`] but any failure is logged and reported as absent.
pub fn load_settings<S: KeyValueStore>(store: &S) -> Option<Settings> {
    match read_settings(store) {
        Ok(settings) => {
            if settings.is_some() {
                tracing::debug!("loaded saved settings");
            }
            settings
        }
        Err(e) => {
            tracing::event!(Level::WARN, %e, "failed to load saved settings");
            None
        }
    }
}

pub fn read_recent_prompts<S: KeyValueStore>(
    store: &S,
) -> Result<Vec<RecentPrompt>, PersistenceError> {
    let Some(text) = store.get(RECENT_PROMPTS_KEY)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&text).map_err(|source| PersistenceError::Corrupt {
        key: RECENT_PROMPTS_KEY.to_string(),
        source,
    })
}

/// Most recent first. Unreadable logs read as empty.
pub fn recent_prompts<S: KeyValueStore>(store: &S) -> Vec<RecentPrompt> {
    read_recent_prompts(store).unwrap_or_else(|e| {
        tracing::event!(Level::WARN, %e, "failed to read recent prompts");
        Vec::new()
    })
}

pub fn try_append_recent_prompt<S: KeyValueStore>(
    store: &mut S,
    prompt: &str,
) -> Result<(), PersistenceError> {
    let mut prompts = read_recent_prompts(store)?;
    prompts.insert(0, RecentPrompt::now(prompt));
    prompts.truncate(RECENT_PROMPTS_LIMIT);

    let text = serde_json::to_string(&prompts)?;
    store.set(RECENT_PROMPTS_KEY, &text)
}

pub fn append_recent_prompt<S: KeyValueStore>(store: &mut S, prompt: &str) {
    if let Err(e) = try_append_recent_prompt(store, prompt) {
        tracing::event!(Level::WARN, %e, "failed to save prompt");
    }
}
