use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use common::cascade::Mode;

const MODE_KEY: &str = "mode";
const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("sitetheme_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a key that was never written is not a failure, just nothing stored yet
pub fn get_optional_local_storage<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("sitetheme_{}", key);

    missing_as_none(&key, LocalStorage::get(key.clone()))
}

fn missing_as_none<T>(key: &str, result: Result<T, StorageError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

pub fn store_mode(mode: Mode) {
    set_local_storage(MODE_KEY, mode)
}

// the stored preference if there is one, else whatever the browser reports, else light
pub fn initial_mode() -> Mode {
    let stored = get_optional_local_storage::<Mode>(MODE_KEY).ok().flatten();

    choose_mode(stored, browser_prefers_dark)
}

fn browser_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(PREFERS_DARK).ok().flatten())
        .is_some_and(|query| query.matches())
}

fn choose_mode(stored: Option<Mode>, prefers_dark: impl FnOnce() -> bool) -> Mode {
    if let Some(mode) = stored {
        debug!(?mode, "using stored mode");
        return mode;
    }

    if prefers_dark() { Mode::Dark } else { Mode::Light }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_written_key_is_empty_not_an_error() {
        let result: Result<Mode, StorageError> =
            Err(StorageError::KeyNotFound(String::from("sitetheme_mode")));

        assert_eq!(missing_as_none("sitetheme_mode", result).unwrap(), None);
        assert_eq!(missing_as_none("sitetheme_mode", Ok(Mode::Dark)).unwrap(), Some(Mode::Dark));
    }

    #[test]
    fn stored_mode_wins_over_browser() {
        assert_eq!(choose_mode(Some(Mode::Light), || true), Mode::Light);
        assert_eq!(choose_mode(Some(Mode::Dark), || false), Mode::Dark);
    }

    #[test]
    fn first_visit_follows_browser() {
        assert_eq!(choose_mode(None, || true), Mode::Dark);
        assert_eq!(choose_mode(None, || false), Mode::Light);
    }
}
