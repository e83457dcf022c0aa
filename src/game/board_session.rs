use log::trace;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

use super::deck_builder;
use super::settings::Settings;
use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::{
    BoardCard, BoardCommand, BoardEvent, CardFace, DeckConfig, DeckFallbackReason, DeckMode,
    Difficulty, GameStatus, GridShape, ImageRef,
};

/// Owns one playthrough at a time: the dealt cards, the pending selection,
/// the mismatch lock, and the matched counter. Consumes `BoardCommand`s,
/// emits `BoardEvent`s, and never touches a widget.
///
/// Session-level states are implicit in the fields: idle
/// (`first_selection` empty, `mismatched` empty), one-selected
/// (`first_selection` set), resolving-lock (`mismatched` set, all
/// activations rejected), complete (`matched_count == cards.len()`).
pub struct BoardSession {
    deck: DeckConfig,
    deck_mode: DeckMode,
    difficulty: Difficulty,
    cards: Vec<BoardCard>,
    grid: GridShape,
    back_image: ImageRef,
    first_selection: Option<usize>,
    mismatched: Option<[usize; 2]>,
    matched_count: usize,
    first_match_fired: bool,
    playthrough_id: Uuid,
    board_event_emitter: EventEmitter<BoardEvent>,
    command_subscription: Option<Unsubscriber<BoardCommand>>,
}

impl Destroyable for BoardSession {
    fn destroy(&mut self) {
        if let Some(subscription) = self.command_subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl BoardSession {
    pub fn new(
        command_observer: EventObserver<BoardCommand>,
        board_event_emitter: EventEmitter<BoardEvent>,
        settings: &Settings,
    ) -> Rc<RefCell<Self>> {
        let mut session = Self {
            deck: DeckConfig::default_deck(),
            deck_mode: DeckMode::Default,
            difficulty: settings.difficulty,
            cards: Vec::new(),
            grid: GridShape::FALLBACK,
            back_image: crate::model::default_back_image(),
            first_selection: None,
            mismatched: None,
            matched_count: 0,
            first_match_fired: false,
            playthrough_id: Uuid::new_v4(),
            board_event_emitter,
            command_subscription: None,
        };
        // Nothing is subscribed yet, so the startup deck switch is silent.
        session.apply_deck_mode(settings.deck_mode, false);

        let refcell = Rc::new(RefCell::new(session));
        BoardSession::wire_subscription(refcell.clone(), command_observer);
        refcell
    }

    fn wire_subscription(
        session: Rc<RefCell<Self>>,
        command_observer: EventObserver<BoardCommand>,
    ) {
        let session_handler = session.clone();
        let subscription = command_observer.subscribe(move |command| {
            session_handler.borrow_mut().handle_command(command.clone());
        });
        session.borrow_mut().command_subscription = Some(subscription);
    }

    fn handle_command(&mut self, command: BoardCommand) {
        trace!(target: "board_session", "Handling command: {:?}", command);
        match command {
            BoardCommand::CardActivate(slot) => self.handle_card_activate(slot),
            BoardCommand::ResolveMismatch(playthrough_id) => {
                self.handle_resolve_mismatch(playthrough_id)
            }
            BoardCommand::NewGame(difficulty) => {
                if let Some(difficulty) = difficulty {
                    self.difficulty = difficulty;
                }
                self.deal();
            }
            BoardCommand::UseDeck(mode) => {
                self.apply_deck_mode(mode, true);
                self.deal();
            }
            BoardCommand::InitDisplay => self.sync_board_display(),
        }
    }

    /// Discard the previous playthrough wholesale and deal a fresh board.
    /// The new playthrough id is what neutralizes any flip-back timer
    /// still pending against the old board.
    fn deal(&mut self) {
        let built = deck_builder::build(&self.deck, self.difficulty);
        self.cards = built.cards;
        self.grid = built.grid;
        self.back_image = built.back_image;
        self.first_selection = None;
        self.mismatched = None;
        self.matched_count = 0;
        self.first_match_fired = false;
        self.playthrough_id = Uuid::new_v4();
        trace!(
            target: "board_session",
            "New playthrough {} ({:?}, {} cards)",
            self.playthrough_id,
            self.difficulty,
            self.cards.len()
        );
        self.sync_board_display();
    }

    fn sync_board_display(&self) {
        self.board_event_emitter.emit(&BoardEvent::BoardDealt {
            cards: self.cards.clone(),
            grid: self.grid,
            back_image: self.back_image.clone(),
            playthrough_id: self.playthrough_id,
        });
        self.board_event_emitter
            .emit(&BoardEvent::PairsRemainingChanged(self.pairs_remaining()));
        self.board_event_emitter
            .emit(&BoardEvent::StatusChanged(self.current_status()));
    }

    fn apply_deck_mode(&mut self, mode: DeckMode, announce: bool) {
        self.deck_mode = mode;
        self.deck = match mode {
            DeckMode::Default => DeckConfig::default_deck(),
            DeckMode::Custom => match DeckConfig::load_saved() {
                Some(deck) => deck,
                None => {
                    trace!(target: "board_session", "No playable custom deck; using default");
                    if announce {
                        self.board_event_emitter.emit(&BoardEvent::DeckFallback(
                            DeckFallbackReason::NoPlayableCards,
                        ));
                    }
                    DeckConfig::default_deck()
                }
            },
        };
    }

    fn handle_card_activate(&mut self, slot: usize) {
        if self.is_locked() {
            trace!(target: "board_session", "Rejected activation of slot {}: board locked", slot);
            return;
        }
        let Some(card) = self.cards.get(slot) else {
            trace!(target: "board_session", "Rejected activation of slot {}: no card", slot);
            return;
        };
        if card.face != CardFace::Down {
            trace!(target: "board_session", "Rejected activation of slot {}: {:?}", slot, card.face);
            return;
        }

        self.cards[slot].face = CardFace::Up;
        self.board_event_emitter
            .emit(&BoardEvent::CardFlipped { slot });

        match self.first_selection {
            None => self.first_selection = Some(slot),
            Some(first) => {
                self.first_selection = None;
                if self.cards[first].id() == self.cards[slot].id() {
                    self.resolve_match(first, slot);
                } else {
                    self.mismatched = Some([first, slot]);
                    self.board_event_emitter.emit(&BoardEvent::MismatchDetected {
                        slots: [first, slot],
                        playthrough_id: self.playthrough_id,
                    });
                }
            }
        }
    }

    fn resolve_match(&mut self, first: usize, second: usize) {
        self.cards[first].face = CardFace::Matched;
        self.cards[second].face = CardFace::Matched;
        self.matched_count += 2;

        let pairs_remaining = self.pairs_remaining();
        self.board_event_emitter.emit(&BoardEvent::PairMatched {
            slots: [first, second],
            pairs_remaining,
        });
        self.board_event_emitter
            .emit(&BoardEvent::PairsRemainingChanged(pairs_remaining));

        if !self.first_match_fired {
            self.first_match_fired = true;
            self.board_event_emitter.emit(&BoardEvent::FirstMatchAchieved);
        }

        self.board_event_emitter
            .emit(&BoardEvent::StatusChanged(self.current_status()));
        if self.is_complete() {
            trace!(target: "board_session", "Playthrough {} complete", self.playthrough_id);
            self.board_event_emitter.emit(&BoardEvent::SessionCompleted);
        }
    }

    fn handle_resolve_mismatch(&mut self, playthrough_id: Uuid) {
        if playthrough_id != self.playthrough_id {
            trace!(
                target: "board_session",
                "Ignoring stale mismatch resolution for playthrough {}",
                playthrough_id
            );
            return;
        }
        let Some(slots) = self.mismatched.take() else {
            return;
        };
        for slot in slots {
            self.cards[slot].face = CardFace::Down;
        }
        self.board_event_emitter
            .emit(&BoardEvent::CardsFlippedDown { slots });
    }

    fn current_status(&self) -> GameStatus {
        if self.is_complete() && !self.cards.is_empty() {
            GameStatus::Completed
        } else if self.matched_count > 0 {
            GameStatus::PairFound
        } else {
            GameStatus::Ready
        }
    }

    fn is_locked(&self) -> bool {
        self.mismatched.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.matched_count == self.cards.len()
    }

    pub fn pairs_remaining(&self) -> usize {
        (self.cards.len() - self.matched_count) / 2
    }

    pub fn get_difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn get_deck_mode(&self) -> DeckMode {
        self.deck_mode
    }
}
