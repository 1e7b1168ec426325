use crate::settings::{Settings, SettingsView};
use crate::utils::*;
use clap::Args;
use guesscard_core as game;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewTileState {
    Selectable,
    /// Not clickable right now because the round is paused or over.
    Locked,
    Rejected,
    Correct,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewRoundState {
    Guessing,
    Paused { tries_left: game::Tries },
    Won,
    Lost,
}

impl ViewRoundState {
    fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    fn message(self) -> String {
        match self {
            Self::Guessing => String::new(),
            Self::Paused { tries_left: 1 } => "You have 1 try left.".to_string(),
            Self::Paused { tries_left } => format!("You have {} tries left.", tries_left),
            Self::Won => "Congratulations! You've won!".to_string(),
            Self::Lost => "Sorry, you've run out of guesses.".to_string(),
        }
    }
}

/// Everything the page shows, independent of yew so it can be driven directly.
#[derive(Clone, Debug)]
pub(crate) struct GameSession {
    controller: game::RoundController,
    settings: Settings,
    revealed: bool,
}

impl GameSession {
    pub(crate) fn new(seed: u64, settings: Settings) -> Self {
        let controller = game::RoundController::new(seed, settings.round_config());
        Self {
            controller,
            settings,
            revealed: false,
        }
    }

    fn restart(&mut self) {
        let config = self.settings.round_config();
        log::debug!("restart with {:?}", config);
        self.controller.start_round(config);
        self.revealed = false;
    }

    fn view_state(&self) -> ViewRoundState {
        let state = self.controller.state();
        match state.resolution() {
            Some(game::Resolution::Win) => ViewRoundState::Won,
            Some(game::Resolution::Loss) => ViewRoundState::Lost,
            None if state.is_paused() => ViewRoundState::Paused {
                tries_left: self.controller.tries_remaining(),
            },
            None => ViewRoundState::Guessing,
        }
    }

    fn tile_state(&self, card: game::Card) -> ViewTileState {
        let round = self.controller.round();
        if round.is_rejected(card) {
            ViewTileState::Rejected
        } else if round.can_guess(card) {
            ViewTileState::Selectable
        } else if self.view_state() == ViewRoundState::Won && card == round.answer() {
            ViewTileState::Correct
        } else {
            ViewTileState::Locked
        }
    }

    /// Answer to draw face up, `None` while it is still hidden.
    fn revealed_card(&self) -> Option<game::Card> {
        self.revealed.then(|| self.controller.reveal())
    }

    /// Routes each input event to the matching round operation, returns whether a re-render is needed.
    pub(crate) fn dispatch(&mut self, msg: Msg) -> bool {
        use Msg::*;

        match msg {
            Guess(card) => {
                log::debug!("guess: {:?}", card);
                self.controller.submit_guess(card).has_update()
            }
            Show => {
                log::debug!("show answer");
                !std::mem::replace(&mut self.revealed, true)
            }
            Restart => {
                self.restart();
                true
            }
            Continue => self.controller.continue_round().has_update(),
            ToggleMultipleTries(checked) => {
                let changed = self.settings.multiple_tries != checked;
                self.settings.multiple_tries = checked;
                changed
            }
            SetTries(value) => {
                // multiple tries stays checked, so the input remains editable
                self.settings.tries_input = value;
                self.restart();
                true
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Guess(game::Card),
    Show,
    Restart,
    Continue,
    ToggleMultipleTries(bool),
    SetTries(String),
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    card: game::Card,
    tile_state: ViewTileState,
    callback: Callback<game::Card>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    use ViewTileState::*;

    let TileProps {
        card,
        tile_state,
        callback,
    } = props.clone();

    let class = classes!(
        "tile",
        match tile_state {
            Selectable => classes!(),
            Locked => classes!("locked"),
            Rejected => classes!("locked", "rejected"),
            Correct => classes!("locked", "correct"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile click: {:?}", card);
        callback.emit(card);
    });

    html! {
        <td {class} {onclick}>
            <img src={card_image(card)} alt={card.slug()} title={card.name()}/>
        </td>
    }
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start in multiple tries mode with this many tries
    #[arg(short, long)]
    pub tries: Option<String>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, tries } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);
        let settings = tries.map_or_else(Settings::default, Settings::with_tries);
        log::debug!("seed: {}, settings: {:?}", seed, settings);

        Self {
            session: GameSession::new(seed, settings),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.session.dispatch(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let session = &self.session;
        let view_state = session.view_state();
        let finished = view_state.is_finished();
        let paused = matches!(view_state, ViewRoundState::Paused { .. });

        let answer = match session.revealed_card() {
            Some(card) => html! {
                <img src={card_image(card)} alt={card.slug()} title={card.name()}/>
            },
            None => html! { <img src={CARD_BACK_IMAGE} alt="hidden card"/> },
        };

        let cb_show = ctx.link().callback(|_: MouseEvent| Show);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);
        let cb_continue = ctx.link().callback(|_: MouseEvent| Continue);
        let cb_toggle = ctx.link().callback(ToggleMultipleTries);
        let cb_tries = ctx.link().callback(SetTries);

        html! {
            <div class="guesscard">
                <section class="left">
                    <figure class={classes!("answer", (!session.revealed).then_some("flip"))}>
                        {answer}
                    </figure>
                    <output>{view_state.message()}</output>
                    <nav>
                        <button class={classes!((!finished).then_some("hidden"))} onclick={cb_show}>{"Show"}</button>
                        <button class={classes!((!finished).then_some("hidden"))} onclick={cb_restart}>{"Restart"}</button>
                        <button class={classes!((!paused).then_some("hidden"))} onclick={cb_continue}>{"Continue"}</button>
                    </nav>
                    <SettingsView settings={session.settings.clone()} on_toggle={cb_toggle} on_tries={cb_tries}/>
                </section>
                <table class={classes!("right", (view_state != ViewRoundState::Guessing).then_some("dim"))}>
                    {
                        for session.controller.round().layout().rows().map(|row| html! {
                            <tr>
                                {
                                    for row.iter().map(|&card| {
                                        let tile_state = session.tile_state(card);
                                        let callback = ctx.link().callback(Guess);
                                        html! {
                                            <TileView {card} {tile_state} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{Card, Resolution, RoundState};

    fn session(settings: Settings) -> GameSession {
        GameSession::new(11, settings)
    }

    fn wrong_card(session: &GameSession) -> Card {
        let answer = session.controller.reveal();
        Card::CATALOG
            .into_iter()
            .find(|&card| card != answer && !session.controller.round().is_rejected(card))
            .unwrap()
    }

    #[test]
    fn wrong_guess_pauses_and_reports_tries_left() {
        let mut session = session(Settings::with_tries("3"));
        let wrong = wrong_card(&session);

        assert!(session.dispatch(Msg::Guess(wrong)));

        assert_eq!(session.view_state(), ViewRoundState::Paused { tries_left: 2 });
        assert_eq!(session.view_state().message(), "You have 2 tries left.");
        assert_eq!(session.tile_state(wrong), ViewTileState::Rejected);
        assert_eq!(
            session.tile_state(session.controller.reveal()),
            ViewTileState::Locked
        );

        assert!(session.dispatch(Msg::Continue));
        assert_eq!(session.view_state(), ViewRoundState::Guessing);
        assert_eq!(session.view_state().message(), "");
    }

    #[test]
    fn guesses_while_paused_do_not_rerender() {
        let mut session = session(Settings::with_tries("2"));
        let wrong = wrong_card(&session);
        session.dispatch(Msg::Guess(wrong));

        let answer = session.controller.reveal();
        assert!(!session.dispatch(Msg::Guess(answer)));
        assert_eq!(session.view_state().message(), "You have 1 try left.");
    }

    #[test]
    fn win_and_loss_messages() {
        let mut session = session(Settings::default());
        let answer = session.controller.reveal();
        session.dispatch(Msg::Guess(answer));
        assert_eq!(session.view_state(), ViewRoundState::Won);
        assert_eq!(session.tile_state(answer), ViewTileState::Correct);
        assert_eq!(
            session.view_state().message(),
            "Congratulations! You've won!"
        );

        session.dispatch(Msg::Restart);
        let wrong = wrong_card(&session);
        session.dispatch(Msg::Guess(wrong));
        assert_eq!(session.view_state(), ViewRoundState::Lost);
        assert_eq!(
            session.view_state().message(),
            "Sorry, you've run out of guesses."
        );
    }

    #[test]
    fn show_reveals_without_touching_round() {
        let mut session = session(Settings::default());
        let answer = session.controller.reveal();
        let wrong = wrong_card(&session);
        session.dispatch(Msg::Guess(wrong));
        let round = session.controller.round().clone();

        assert_eq!(session.revealed_card(), None);
        assert!(session.dispatch(Msg::Show));
        assert!(!session.dispatch(Msg::Show));

        assert_eq!(session.revealed_card(), Some(answer));
        assert_eq!(session.controller.round(), &round);
    }

    #[test]
    fn restart_hides_answer_and_clears_message() {
        let mut session = session(Settings::with_tries("4"));
        let wrong = wrong_card(&session);
        session.dispatch(Msg::Guess(wrong));
        session.dispatch(Msg::Show);

        assert!(session.dispatch(Msg::Restart));

        assert_eq!(session.revealed_card(), None);
        assert_eq!(session.view_state().message(), "");
        assert_eq!(session.controller.tries_remaining(), 4);
        assert_eq!(session.controller.state(), RoundState::Active);
    }

    #[test]
    fn toggling_multiple_tries_applies_on_next_round() {
        let mut session = session(Settings::default());

        assert!(session.dispatch(Msg::ToggleMultipleTries(true)));
        assert!(!session.dispatch(Msg::ToggleMultipleTries(true)));
        assert_eq!(session.controller.tries_remaining(), 1);

        session.dispatch(Msg::Restart);
        assert_eq!(session.controller.tries_remaining(), 3);
    }

    #[test]
    fn setting_tries_restarts_with_new_count() {
        let mut session = session(Settings::with_tries("2"));
        let answer = session.controller.reveal();
        session.dispatch(Msg::Guess(answer));
        assert_eq!(
            session.controller.state(),
            RoundState::Resolved(Resolution::Win)
        );

        assert!(session.dispatch(Msg::SetTries("5".to_string())));

        assert_eq!(session.controller.state(), RoundState::Active);
        assert_eq!(session.controller.tries_remaining(), 5);
        assert_eq!(session.settings.tries_input, "5");
    }

    #[test]
    fn tries_input_stays_editable_after_typing() {
        let mut session = session(Settings::with_tries("3"));

        session.dispatch(Msg::SetTries("8".to_string()));
        assert!(session.settings.multiple_tries);

        session.dispatch(Msg::SetTries("4".to_string()));
        assert_eq!(session.controller.tries_remaining(), 4);

        session.dispatch(Msg::Restart);
        assert_eq!(session.controller.tries_remaining(), 4);
    }

    #[test]
    fn invalid_tries_input_degrades_to_single_guess() {
        let mut session = session(Settings::with_tries("3"));

        session.dispatch(Msg::SetTries("nope".to_string()));

        assert_eq!(session.controller.tries_remaining(), 1);
        let wrong = wrong_card(&session);
        session.dispatch(Msg::Guess(wrong));
        assert_eq!(session.view_state(), ViewRoundState::Lost);
    }
}
