use guesscard_core::RoundConfig;
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Player preferences for the next round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub multiple_tries: bool,
    /// Raw contents of the try count input, coerced only when a round starts.
    pub tries_input: String,
}

impl Settings {
    pub(crate) const DEFAULT_TRIES: &'static str = "3";

    pub(crate) fn with_tries(tries_input: impl Into<String>) -> Self {
        Self {
            multiple_tries: true,
            tries_input: tries_input.into(),
        }
    }

    pub(crate) fn round_config(&self) -> RoundConfig {
        if self.multiple_tries {
            RoundConfig::from_input(&self.tries_input)
        } else {
            RoundConfig::single_guess()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multiple_tries: false,
            tries_input: Self::DEFAULT_TRIES.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    pub settings: Settings,
    pub on_toggle: Callback<bool>,
    pub on_tries: Callback<String>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let SettingsProps {
        settings,
        on_toggle,
        on_tries,
    } = props;

    let onchange = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            log::trace!("multiple tries: {}", input.checked());
            on_toggle.emit(input.checked());
        })
    };

    let oninput = {
        let on_tries = on_tries.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            log::trace!("tries input: {:?}", input.value());
            on_tries.emit(input.value());
        })
    };

    html! {
        <fieldset class="settings">
            <label>
                <input type="checkbox" checked={settings.multiple_tries} {onchange}/>
                {"Multiple tries"}
            </label>
            <input
                type="number"
                min="1"
                max={RoundConfig::MAX_TRIES.to_string()}
                value={settings.tries_input.clone()}
                disabled={!settings.multiple_tries}
                {oninput}
            />
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_settings_mean_single_guess() {
        let settings = Settings {
            multiple_tries: false,
            tries_input: "5".to_string(),
        };
        assert_eq!(settings.round_config(), RoundConfig::single_guess());
    }

    #[test]
    fn checked_settings_use_coerced_input() {
        assert_eq!(Settings::with_tries("5").round_config().max_tries, 5);
        assert_eq!(
            Settings::with_tries("lots").round_config(),
            RoundConfig::single_guess()
        );
    }
}
