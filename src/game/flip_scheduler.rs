use glib::timeout_add_local_once;
use glib::SourceId;
use log::trace;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use uuid::Uuid;

use super::settings::Settings;
use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::{BoardCommand, BoardEvent};

struct PendingFlip {
    source: SourceId,
    fired: Rc<Cell<bool>>,
}

/// The session's only timer: after a mismatch, waits out the configured
/// delay and sends `ResolveMismatch` back to the session. The scheduled
/// task is keyed to the playthrough id it was created for, and it is
/// cancelled outright when a new board is dealt or the component is
/// destroyed, so a replaced session can never be mutated by a stale
/// callback.
pub struct FlipScheduler {
    command_emitter: EventEmitter<BoardCommand>,
    delay: Duration,
    pending: Option<PendingFlip>,
    event_subscription: Option<Unsubscriber<BoardEvent>>,
}

impl Destroyable for FlipScheduler {
    fn destroy(&mut self) {
        self.cancel();
        if let Some(subscription) = self.event_subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl FlipScheduler {
    pub fn new(
        board_event_observer: EventObserver<BoardEvent>,
        command_emitter: EventEmitter<BoardCommand>,
        settings: &Settings,
    ) -> Rc<RefCell<Self>> {
        let scheduler = Rc::new(RefCell::new(Self {
            command_emitter,
            delay: settings.flip_back_delay(),
            pending: None,
            event_subscription: None,
        }));

        let scheduler_handler = scheduler.clone();
        let subscription = board_event_observer.subscribe(move |event| {
            scheduler_handler.borrow_mut().handle_event(event);
        });
        scheduler.borrow_mut().event_subscription = Some(subscription);

        scheduler
    }

    fn handle_event(&mut self, event: &BoardEvent) {
        match event {
            BoardEvent::MismatchDetected { playthrough_id, .. } => {
                self.schedule(*playthrough_id);
            }
            BoardEvent::BoardDealt { .. } => self.cancel(),
            _ => (),
        }
    }

    fn schedule(&mut self, playthrough_id: Uuid) {
        self.cancel();
        trace!(
            target: "flip_scheduler",
            "Scheduling flip-back in {:?} for playthrough {}",
            self.delay,
            playthrough_id
        );

        let fired = Rc::new(Cell::new(false));
        let source = timeout_add_local_once(self.delay, {
            let fired = fired.clone();
            let command_emitter = self.command_emitter.clone();
            move || {
                fired.set(true);
                command_emitter.emit(&BoardCommand::ResolveMismatch(playthrough_id));
            }
        });
        self.pending = Some(PendingFlip { source, fired });
    }

    fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            // A source that already ran must not be removed again.
            if !pending.fired.get() {
                trace!(target: "flip_scheduler", "Cancelling pending flip-back");
                pending.source.remove();
            }
        }
    }
}
