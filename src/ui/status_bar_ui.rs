use fluent_i18n::t;
use gtk::prelude::*;
use gtk::Label;
use std::{cell::RefCell, rc::Rc};

use crate::destroyable::Destroyable;
use crate::events::{EventObserver, Unsubscriber};
use crate::model::{BoardEvent, GameStatus};

/// Status phrase plus a pairs-remaining counter. The session reports
/// structural status; the wording lives here, in the locale files.
pub struct StatusBarUI {
    pub container: gtk::Box,
    status_label: Label,
    pairs_label: Label,
    event_subscription: Option<Unsubscriber<BoardEvent>>,
}

impl Destroyable for StatusBarUI {
    fn destroy(&mut self) {
        if let Some(subscription) = self.event_subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl StatusBarUI {
    pub fn new(board_event_observer: EventObserver<BoardEvent>) -> Rc<RefCell<Self>> {
        let container = gtk::Box::builder()
            .name("status-bar")
            .orientation(gtk::Orientation::Horizontal)
            .spacing(6)
            .css_classes(["status-bar"])
            .build();

        let status_label = Label::new(Some(&t!("status-ready")));
        status_label.set_css_classes(&["status-text"]);
        status_label.set_halign(gtk::Align::Start);
        status_label.set_hexpand(true);

        let pairs_caption = Label::new(Some(&t!("pairs-left-label")));
        let pairs_label = Label::new(Some("0"));
        pairs_label.set_css_classes(&["pairs-label"]);

        container.append(&status_label);
        container.append(&pairs_caption);
        container.append(&pairs_label);

        let status_bar_ui = Rc::new(RefCell::new(Self {
            container,
            status_label,
            pairs_label,
            event_subscription: None,
        }));

        StatusBarUI::connect_observer(status_bar_ui.clone(), board_event_observer);

        status_bar_ui
    }

    fn connect_observer(
        status_bar_ui: Rc<RefCell<Self>>,
        board_event_observer: EventObserver<BoardEvent>,
    ) {
        let status_bar_ui_moved = status_bar_ui.clone();
        let subscription = board_event_observer.subscribe(move |event| {
            status_bar_ui_moved.borrow().handle_event(event);
        });
        status_bar_ui.borrow_mut().event_subscription = Some(subscription);
    }

    fn handle_event(&self, event: &BoardEvent) {
        match event {
            BoardEvent::StatusChanged(status) => {
                let text = match status {
                    GameStatus::Ready => t!("status-ready"),
                    GameStatus::PairFound => t!("status-pair-found"),
                    GameStatus::Completed => t!("status-complete"),
                };
                self.status_label.set_text(&text);
            }
            BoardEvent::PairsRemainingChanged(pairs) => {
                self.pairs_label.set_text(&pairs.to_string());
            }
            _ => {}
        }
    }
}
