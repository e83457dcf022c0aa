use gdk_pixbuf::Pixbuf;
use log::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::ImageRef;

/// Pixbuf cache over both image sources: bundled gresource assets (the
/// default deck) and files the player picked for a custom deck. Widgets
/// share one instance; a broken reference loads as `None` and the card
/// renders without artwork rather than failing the deal.
pub struct ImageSet {
    cache: RefCell<HashMap<ImageRef, Rc<Pixbuf>>>,
}

impl ImageSet {
    pub fn new() -> Self {
        Self {
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn get(&self, image: &ImageRef) -> Option<Rc<Pixbuf>> {
        if let Some(pixbuf) = self.cache.borrow().get(image) {
            return Some(Rc::clone(pixbuf));
        }

        let loaded = match image {
            ImageRef::Resource(path) => Pixbuf::from_resource(path).ok(),
            ImageRef::File(path) => Pixbuf::from_file(path).ok(),
        };

        match loaded {
            Some(pixbuf) => {
                let pixbuf = Rc::new(pixbuf);
                self.cache
                    .borrow_mut()
                    .insert(image.clone(), Rc::clone(&pixbuf));
                Some(pixbuf)
            }
            None => {
                warn!(target: "image_set", "Failed to load image {:?}", image);
                None
            }
        }
    }
}
