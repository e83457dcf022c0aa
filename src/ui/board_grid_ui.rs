use gtk::prelude::{GridExt, WidgetExt};
use gtk::Grid;
use std::{cell::RefCell, rc::Rc};

use super::card_ui::CardUI;
use super::ImageSet;
use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::{BoardCard, BoardCommand, BoardEvent, CardFace, GridShape, ImageRef};

const SPACING: u32 = 10;

/// The grid of card widgets. Rebuilt from scratch on every `BoardDealt`;
/// in between it only mirrors face changes the session announces.
pub struct BoardGridUI {
    pub grid: Grid,
    cards: Vec<CardUI>,
    cols: u32,
    images: Rc<ImageSet>,
    command_emitter: EventEmitter<BoardCommand>,
    event_subscription: Option<Unsubscriber<BoardEvent>>,
}

impl Destroyable for BoardGridUI {
    fn destroy(&mut self) {
        self.cards.clear();
        self.grid.unparent();
        if let Some(subscription) = self.event_subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl BoardGridUI {
    pub fn new(
        command_emitter: EventEmitter<BoardCommand>,
        board_event_observer: EventObserver<BoardEvent>,
        images: Rc<ImageSet>,
    ) -> Rc<RefCell<Self>> {
        let grid = Grid::new();
        grid.set_row_spacing(SPACING);
        grid.set_column_spacing(SPACING);
        grid.set_halign(gtk::Align::Center);
        grid.set_valign(gtk::Align::Center);
        grid.set_hexpand(true);
        grid.set_vexpand(true);
        grid.set_css_classes(&["board-grid"]);

        let board_grid_ui = Rc::new(RefCell::new(Self {
            grid,
            cards: Vec::new(),
            cols: GridShape::FALLBACK.cols,
            images,
            command_emitter,
            event_subscription: None,
        }));

        BoardGridUI::connect_observer(board_grid_ui.clone(), board_event_observer);

        board_grid_ui
    }

    fn connect_observer(
        board_grid_ui: Rc<RefCell<Self>>,
        board_event_observer: EventObserver<BoardEvent>,
    ) {
        let board_grid_ui_moved = board_grid_ui.clone();
        let subscription = board_event_observer.subscribe(move |event| {
            board_grid_ui_moved.borrow_mut().handle_event(event);
        });
        board_grid_ui.borrow_mut().event_subscription = Some(subscription);
    }

    fn handle_event(&mut self, event: &BoardEvent) {
        match event {
            BoardEvent::BoardDealt {
                cards,
                grid,
                back_image,
                ..
            } => self.rebuild(cards, *grid, back_image),
            BoardEvent::CardFlipped { slot } => self.set_face(*slot, CardFace::Up),
            BoardEvent::CardsFlippedDown { slots } => {
                for slot in slots {
                    self.set_face(*slot, CardFace::Down);
                }
            }
            BoardEvent::PairMatched { slots, .. } => {
                for slot in slots {
                    self.set_face(*slot, CardFace::Matched);
                }
            }
            _ => {}
        }
    }

    fn rebuild(&mut self, cards: &[BoardCard], grid_shape: GridShape, back_image: &ImageRef) {
        // Dropping a CardUI unparents its button.
        self.cards.clear();
        self.cols = grid_shape.cols;

        for card in cards {
            let card_ui = CardUI::new(card, back_image, &self.images, self.command_emitter.clone());
            let col = (card.slot as u32 % self.cols) as i32;
            let row = (card.slot as u32 / self.cols) as i32;
            self.grid.attach(&card_ui.button, col, row, 1, 1);
            self.cards.push(card_ui);
        }
    }

    fn set_face(&self, slot: usize, face: CardFace) {
        if let Some(card) = self.cards.get(slot) {
            card.set_face(face);
        }
    }
}
