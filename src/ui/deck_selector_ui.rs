use fluent_i18n::t;
use gtk::prelude::*;
use gtk::{ApplicationWindow, Button, FileDialog, FileFilter, Label, ToggleButton};
use log::error;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use super::toast_ui::ToastUI;
use crate::events::EventEmitter;
use crate::game::settings::Settings;
use crate::model::{
    default_back_image, BoardCommand, CardDefinition, DeckConfig, DeckMode, Difficulty, ImageRef,
};

/// Default/custom deck toggle plus the custom-deck builder dialog. File
/// picking and deck persistence happen here; the session only ever sees a
/// `UseDeck` command.
pub struct DeckSelectorUI {
    pub container: gtk::Box,
    pub default_button: ToggleButton,
    pub custom_button: ToggleButton,
    pub configure_button: Button,
}

impl DeckSelectorUI {
    pub fn new(
        window: &Rc<ApplicationWindow>,
        command_emitter: EventEmitter<BoardCommand>,
        settings: Rc<RefCell<Settings>>,
        toasts: Rc<RefCell<ToastUI>>,
    ) -> Self {
        let container = gtk::Box::builder()
            .name("deck-selector")
            .orientation(gtk::Orientation::Horizontal)
            .spacing(5)
            .build();

        let default_button = ToggleButton::with_label(&t!("deck-default"));
        let custom_button = ToggleButton::with_label(&t!("deck-custom"));
        custom_button.set_group(Some(&default_button));

        match settings.borrow().deck_mode {
            DeckMode::Default => default_button.set_active(true),
            DeckMode::Custom => custom_button.set_active(true),
        }

        let configure_button = Button::with_label(&t!("deck-configure"));

        container.append(&default_button);
        container.append(&custom_button);
        container.append(&configure_button);

        {
            let settings = settings.clone();
            let command_emitter = command_emitter.clone();
            default_button.connect_toggled(move |button| {
                if !button.is_active() {
                    return;
                }
                settings.borrow_mut().deck_mode = DeckMode::Default;
                if let Err(e) = settings.borrow().save() {
                    error!(target: "deck_selector_ui", "Failed to save settings: {}", e);
                }
                command_emitter.emit(&BoardCommand::UseDeck(DeckMode::Default));
            });
        }

        {
            let settings = settings.clone();
            let command_emitter = command_emitter.clone();
            let window = Rc::clone(window);
            let toasts = toasts.clone();
            custom_button.connect_toggled(move |button| {
                if !button.is_active() {
                    return;
                }
                settings.borrow_mut().deck_mode = DeckMode::Custom;
                if let Err(e) = settings.borrow().save() {
                    error!(target: "deck_selector_ui", "Failed to save settings: {}", e);
                }
                if DeckConfig::load_saved().is_none() {
                    // Nothing saved yet; the session falls back to the
                    // default deck while the player assembles one.
                    show_deck_dialog(
                        &window,
                        command_emitter.clone(),
                        toasts.clone(),
                        button.clone(),
                    );
                }
                command_emitter.emit(&BoardCommand::UseDeck(DeckMode::Custom));
            });
        }

        {
            let window = Rc::clone(window);
            let toasts = toasts.clone();
            let custom_button = custom_button.clone();
            configure_button.connect_clicked(move |_| {
                show_deck_dialog(
                    &window,
                    command_emitter.clone(),
                    toasts.clone(),
                    custom_button.clone(),
                );
            });
        }

        Self {
            container,
            default_button,
            custom_button,
            configure_button,
        }
    }
}

#[derive(Default)]
struct DeckDraft {
    fronts: Vec<PathBuf>,
    back: Option<PathBuf>,
}

fn image_filter() -> FileFilter {
    let filter = FileFilter::new();
    filter.add_pixbuf_formats();
    filter
}

fn show_deck_dialog(
    window: &Rc<ApplicationWindow>,
    command_emitter: EventEmitter<BoardCommand>,
    toasts: Rc<RefCell<ToastUI>>,
    custom_button: ToggleButton,
) {
    let draft = Rc::new(RefCell::new(DeckDraft::default()));

    let content = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(12)
        .margin_top(16)
        .margin_bottom(16)
        .margin_start(16)
        .margin_end(16)
        .build();

    let modal = gtk::Window::builder()
        .transient_for(window.as_ref())
        .modal(true)
        .title(t!("deck-dialog-title"))
        .child(&content)
        .build();

    // Card fronts row
    let fronts_row = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(8)
        .build();
    let fronts_label = Label::new(Some(&t!("deck-dialog-fronts")));
    fronts_label.set_hexpand(true);
    fronts_label.set_halign(gtk::Align::Start);
    let fronts_status = Label::new(Some(&t!("deck-dialog-none-selected")));
    let fronts_button = Button::with_label(&t!("deck-dialog-choose"));
    fronts_button.set_tooltip_text(Some(&t!("deck-dialog-fronts-hint")));
    fronts_row.append(&fronts_label);
    fronts_row.append(&fronts_status);
    fronts_row.append(&fronts_button);
    content.append(&fronts_row);

    {
        let draft = draft.clone();
        let window = Rc::clone(window);
        let fronts_status = fronts_status.clone();
        fronts_button.connect_clicked(move |_| {
            let dialog = FileDialog::builder()
                .title(t!("deck-dialog-fronts"))
                .default_filter(&image_filter())
                .build();
            let draft = draft.clone();
            let fronts_status = fronts_status.clone();
            dialog.open_multiple(Some(window.as_ref()), gio::Cancellable::NONE, move |result| {
                if let Ok(files) = result {
                    let mut paths = Vec::new();
                    for i in 0..files.n_items() {
                        if let Some(file) = files.item(i).and_downcast::<gio::File>() {
                            if let Some(path) = file.path() {
                                paths.push(path);
                            }
                        }
                    }
                    if !paths.is_empty() {
                        fronts_status.set_text(&paths.len().to_string());
                        draft.borrow_mut().fronts = paths;
                    }
                }
            });
        });
    }

    // Card back row
    let back_row = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(8)
        .build();
    let back_label = Label::new(Some(&t!("deck-dialog-back")));
    back_label.set_hexpand(true);
    back_label.set_halign(gtk::Align::Start);
    let back_status = Label::new(Some(&t!("deck-dialog-none-selected")));
    let back_button = Button::with_label(&t!("deck-dialog-choose"));
    back_button.set_tooltip_text(Some(&t!("deck-dialog-back-hint")));
    back_row.append(&back_label);
    back_row.append(&back_status);
    back_row.append(&back_button);
    content.append(&back_row);

    {
        let draft = draft.clone();
        let window = Rc::clone(window);
        let back_status = back_status.clone();
        back_button.connect_clicked(move |_| {
            let dialog = FileDialog::builder()
                .title(t!("deck-dialog-back"))
                .default_filter(&image_filter())
                .build();
            let draft = draft.clone();
            let back_status = back_status.clone();
            dialog.open(Some(window.as_ref()), gio::Cancellable::NONE, move |result| {
                if let Ok(file) = result {
                    if let Some(path) = file.path() {
                        back_status.set_text(
                            &path
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_default(),
                        );
                        draft.borrow_mut().back = Some(path);
                    }
                }
            });
        });
    }

    // Action row
    let button_row = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(10)
        .halign(gtk::Align::End)
        .build();
    let cancel_button = Button::with_label(&t!("deck-dialog-cancel"));
    let save_button = Button::with_label(&t!("deck-dialog-save"));
    save_button.set_css_classes(&["suggested-action"]);
    button_row.append(&cancel_button);
    button_row.append(&save_button);
    content.append(&button_row);

    {
        let modal = modal.clone();
        cancel_button.connect_clicked(move |_| {
            modal.close();
        });
    }

    {
        let modal = modal.clone();
        save_button.connect_clicked(move |_| {
            let draft = draft.borrow();
            if draft.fronts.is_empty() && draft.back.is_none() {
                toasts.borrow().show_info(&t!("toast-deck-nothing"));
                return;
            }
            let only_back_changed = draft.fronts.is_empty();

            let saved = DeckConfig::load_saved();
            let cards: Vec<CardDefinition> = if draft.fronts.is_empty() {
                // Back-only update keeps whatever faces were in play.
                saved
                    .as_ref()
                    .map(|deck| deck.cards.clone())
                    .unwrap_or_else(|| DeckConfig::default_deck().cards)
            } else {
                draft
                    .fronts
                    .iter()
                    .enumerate()
                    .map(|(idx, path)| {
                        CardDefinition::new(
                            format!("u-{}", idx + 1),
                            ImageRef::file(path.clone()),
                            format!("{} {}", t!("card-label"), idx + 1),
                        )
                    })
                    .collect()
            };

            let back_image = draft
                .back
                .as_ref()
                .map(|path| ImageRef::file(path.clone()))
                .or_else(|| saved.map(|deck| deck.back_image))
                .unwrap_or_else(default_back_image);

            let deck = DeckConfig {
                title: t!("deck-custom-title"),
                back_image,
                grid_by_difficulty: Difficulty::all()
                    .into_iter()
                    .map(|d| (d, d.default_grid()))
                    .collect(),
                cards,
            };
            if let Err(e) = deck.save_custom() {
                error!(target: "deck_selector_ui", "Failed to save custom deck: {}", e);
            }

            if custom_button.is_active() {
                command_emitter.emit(&BoardCommand::UseDeck(DeckMode::Custom));
            } else {
                // The toggled handler emits UseDeck and persists the mode.
                custom_button.set_active(true);
            }
            toasts.borrow().show_success(&if only_back_changed {
                t!("toast-deck-back-updated")
            } else {
                t!("toast-deck-saved")
            });
            modal.close();
        });
    }

    modal.present();
}
