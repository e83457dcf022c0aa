use fluent_i18n::t;
use glib::timeout_add_local_once;
use gtk::prelude::*;
use gtk::Label;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::destroyable::Destroyable;
use crate::events::{EventObserver, Unsubscriber};
use crate::model::{BoardEvent, DeckFallbackReason};

const TOAST_TIMEOUT: Duration = Duration::from_millis(2500);
const COMPLETION_TOAST_TIMEOUT: Duration = Duration::from_millis(3500);

/// Transient notifications stacked in a corner overlay. Reacts to session
/// events on its own; other widgets may also push messages directly.
pub struct ToastUI {
    pub container: gtk::Box,
    event_subscription: Option<Unsubscriber<BoardEvent>>,
}

impl Destroyable for ToastUI {
    fn destroy(&mut self) {
        if let Some(subscription) = self.event_subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl ToastUI {
    pub fn new(board_event_observer: EventObserver<BoardEvent>) -> Rc<RefCell<Self>> {
        let container = gtk::Box::builder()
            .name("toast-container")
            .orientation(gtk::Orientation::Vertical)
            .halign(gtk::Align::End)
            .valign(gtk::Align::Start)
            .build();
        container.set_can_target(false);

        let toast_ui = Rc::new(RefCell::new(Self {
            container,
            event_subscription: None,
        }));

        ToastUI::connect_observer(toast_ui.clone(), board_event_observer);

        toast_ui
    }

    fn connect_observer(
        toast_ui: Rc<RefCell<Self>>,
        board_event_observer: EventObserver<BoardEvent>,
    ) {
        let toast_ui_moved = toast_ui.clone();
        let subscription = board_event_observer.subscribe(move |event| match event {
            BoardEvent::FirstMatchAchieved => {
                toast_ui_moved
                    .borrow()
                    .show_for(&t!("toast-first-match"), "toast-success", TOAST_TIMEOUT);
            }
            BoardEvent::SessionCompleted => {
                toast_ui_moved.borrow().show_for(
                    &t!("toast-complete"),
                    "toast-success",
                    COMPLETION_TOAST_TIMEOUT,
                );
            }
            BoardEvent::DeckFallback(DeckFallbackReason::NoPlayableCards) => {
                toast_ui_moved
                    .borrow()
                    .show_info(&t!("toast-deck-empty"));
            }
            _ => {}
        });
        toast_ui.borrow_mut().event_subscription = Some(subscription);
    }

    pub fn show_success(&self, message: &str) {
        self.show_for(message, "toast-success", TOAST_TIMEOUT);
    }

    pub fn show_info(&self, message: &str) {
        self.show_for(message, "toast-info", TOAST_TIMEOUT);
    }

    fn show_for(&self, message: &str, css_class: &str, timeout: Duration) {
        let toast = Label::new(Some(message));
        toast.set_css_classes(&["toast", css_class]);
        toast.set_wrap(true);
        self.container.append(&toast);

        let container = self.container.clone();
        timeout_add_local_once(timeout, move || {
            container.remove(&toast);
        });
    }
}
