use gtk::gdk_pixbuf::Pixbuf;
use gtk::prelude::*;
use gtk::{Button, Image};
use log::trace;
use std::rc::Rc;

use super::ImageSet;
use crate::events::EventEmitter;
use crate::model::{BoardCard, BoardCommand, CardFace, ImageRef};

pub const CARD_WIDTH: i32 = 112;
pub const CARD_HEIGHT: i32 = 136;
const FACE_IMG_SIZE: i32 = 96;

/// One card on the board. A plain button: GTK delivers pointer clicks and
/// Enter/Space on the focused card through the same `clicked` signal, so
/// both input paths emit the identical activate command.
pub struct CardUI {
    pub button: Button,
    image: Image,
    front: Option<Rc<Pixbuf>>,
    back: Option<Rc<Pixbuf>>,
    slot: usize,
}

impl CardUI {
    pub fn new(
        card: &BoardCard,
        back_image: &ImageRef,
        images: &Rc<ImageSet>,
        command_emitter: EventEmitter<BoardCommand>,
    ) -> Self {
        let image = Image::new();
        image.set_pixel_size(FACE_IMG_SIZE);

        let button = Button::new();
        button.set_css_classes(&["card"]);
        button.set_size_request(CARD_WIDTH, CARD_HEIGHT);
        button.set_tooltip_text(Some(&card.card.label));
        button.set_child(Some(&image));

        let slot = card.slot;
        {
            let command_emitter = command_emitter.clone();
            button.connect_clicked(move |_| {
                command_emitter.emit(&BoardCommand::CardActivate(slot));
            });
        }

        let card_ui = Self {
            button,
            image,
            front: images.get(&card.card.image),
            back: images.get(back_image),
            slot,
        };
        card_ui.set_face(card.face);
        card_ui
    }

    pub fn set_face(&self, face: CardFace) {
        match face {
            CardFace::Down => {
                self.image.set_from_pixbuf(self.back.as_deref());
                self.button.remove_css_class("is-flipped");
                self.button.remove_css_class("matched");
                self.button.set_sensitive(true);
            }
            CardFace::Up => {
                self.image.set_from_pixbuf(self.front.as_deref());
                self.button.add_css_class("is-flipped");
            }
            CardFace::Matched => {
                self.image.set_from_pixbuf(self.front.as_deref());
                self.button.remove_css_class("is-flipped");
                self.button.add_css_class("matched");
                self.button.set_sensitive(false);
            }
        }
    }
}

impl Drop for CardUI {
    fn drop(&mut self) {
        trace!(target: "card_ui", "Dropping card at slot {}", self.slot);
        self.button.unparent();
    }
}
