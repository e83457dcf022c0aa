use fluent_i18n::t;
use gtk::prelude::*;
use gtk::Button;
use std::cell::RefCell;
use std::rc::Rc;

use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::{BoardCommand, BoardEvent};

/// The "new game" affordance. Starts every playthrough disabled and is
/// switched on by the session's one-shot first-match event.
pub struct NewGameButtonUI {
    pub button: Button,
    event_subscription: Option<Unsubscriber<BoardEvent>>,
}

impl Destroyable for NewGameButtonUI {
    fn destroy(&mut self) {
        if let Some(subscription) = self.event_subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl NewGameButtonUI {
    pub fn new(
        command_emitter: EventEmitter<BoardCommand>,
        board_event_observer: EventObserver<BoardEvent>,
    ) -> Rc<RefCell<Self>> {
        let button = Button::with_label(&t!("new-game"));
        button.set_sensitive(false);

        button.connect_clicked(move |_| {
            command_emitter.emit(&BoardCommand::NewGame(None));
        });

        let new_game_button_ui = Rc::new(RefCell::new(Self {
            button,
            event_subscription: None,
        }));

        NewGameButtonUI::connect_observer(new_game_button_ui.clone(), board_event_observer);

        new_game_button_ui
    }

    fn connect_observer(
        new_game_button_ui: Rc<RefCell<Self>>,
        board_event_observer: EventObserver<BoardEvent>,
    ) {
        let new_game_button_ui_moved = new_game_button_ui.clone();
        let subscription = board_event_observer.subscribe(move |event| match event {
            BoardEvent::BoardDealt { .. } => {
                new_game_button_ui_moved
                    .borrow()
                    .button
                    .set_sensitive(false);
            }
            BoardEvent::FirstMatchAchieved => {
                new_game_button_ui_moved.borrow().button.set_sensitive(true);
            }
            _ => {}
        });
        new_game_button_ui.borrow_mut().event_subscription = Some(subscription);
    }
}
