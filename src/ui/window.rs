use crate::destroyable::Destroyable;
use crate::events::Channel;
use crate::game::board_session::BoardSession;
use crate::game::flip_scheduler::FlipScheduler;
use crate::game::settings::Settings;
use crate::model::{BoardCommand, BoardEvent, Difficulty};
use crate::ui::board_grid_ui::BoardGridUI;
use crate::ui::deck_selector_ui::DeckSelectorUI;
use crate::ui::new_game_button_ui::NewGameButtonUI;
use crate::ui::status_bar_ui::StatusBarUI;
use crate::ui::toast_ui::ToastUI;
use crate::ui::ImageSet;
use fluent_i18n::t;
use gtk::gdk::Display;
use gtk::{
    prelude::*, Application, ApplicationWindow, CssProvider, HeaderBar, Label, Orientation,
    STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::RefCell;
use std::rc::Rc;

pub fn build_ui(app: &Application) {
    let (command_emitter, command_observer) = Channel::<BoardCommand>::new();
    let (board_event_emitter, board_event_observer) = Channel::<BoardEvent>::new();

    let settings = Rc::new(RefCell::new(Settings::load()));
    let images = Rc::new(ImageSet::new());

    let window = Rc::new(
        ApplicationWindow::builder()
            .application(app)
            .title(t!("app-title"))
            .resizable(true)
            .default_width(1100)
            .default_height(760)
            .build(),
    );

    let provider = CssProvider::new();
    provider.load_from_resource("/org/pairhunt/style.css");
    let display = Display::default().expect("Could not connect to a display.");
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        STYLE_PROVIDER_PRIORITY_APPLICATION,
    );

    // Engine side: the session owns the state machine, the scheduler owns
    // the one timer that feeds commands back into it.
    let board_session = BoardSession::new(
        command_observer.clone(),
        board_event_emitter.clone(),
        &settings.borrow(),
    );
    let flip_scheduler = FlipScheduler::new(
        board_event_observer.clone(),
        command_emitter.clone(),
        &settings.borrow(),
    );

    // Widgets.
    let board_grid_ui = BoardGridUI::new(
        command_emitter.clone(),
        board_event_observer.clone(),
        Rc::clone(&images),
    );
    let status_bar_ui = StatusBarUI::new(board_event_observer.clone());
    let toast_ui = ToastUI::new(board_event_observer.clone());
    let new_game_button_ui =
        NewGameButtonUI::new(command_emitter.clone(), board_event_observer.clone());
    let deck_selector_ui = DeckSelectorUI::new(
        &window,
        command_emitter.clone(),
        Rc::clone(&settings),
        toast_ui.clone(),
    );

    // Header: difficulty selector, new-game button, deck selector.
    let header_bar = HeaderBar::new();

    let difficulty_box = gtk::Box::builder()
        .name("difficulty-box")
        .orientation(Orientation::Horizontal)
        .spacing(5)
        .build();
    difficulty_box.append(&Label::new(Some(&t!("difficulty-label"))));

    let all_difficulties = Difficulty::all()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<String>>();
    let difficulty_selector = gtk::DropDown::from_strings(
        all_difficulties
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<&str>>()
            .as_slice(),
    );
    difficulty_selector.set_selected(settings.borrow().difficulty.index() as u32);
    difficulty_box.append(&difficulty_selector);

    {
        let settings = Rc::clone(&settings);
        let command_emitter = command_emitter.clone();
        difficulty_selector.connect_selected_notify(move |selector| {
            let new_difficulty = Difficulty::from_index(selector.selected() as usize);
            settings.borrow_mut().difficulty = new_difficulty;
            if let Err(e) = settings.borrow().save() {
                log::error!(target: "window", "Failed to save settings: {}", e);
            }
            command_emitter.emit(&BoardCommand::NewGame(Some(new_difficulty)));
        });
    }

    header_bar.pack_start(&difficulty_box);
    header_bar.pack_start(&new_game_button_ui.borrow().button);
    header_bar.pack_end(&deck_selector_ui.container);
    window.set_titlebar(Some(&header_bar));

    // Main column: board above the status bar, toasts overlaid on top.
    let content = gtk::Box::builder()
        .name("content-box")
        .orientation(Orientation::Vertical)
        .hexpand(true)
        .vexpand(true)
        .css_classes(["app-background"])
        .build();

    let scrolled_window = gtk::ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .child(&board_grid_ui.borrow().grid)
        .build();
    content.append(&scrolled_window);
    content.append(&status_bar_ui.borrow().container);

    let overlay = gtk::Overlay::new();
    overlay.set_child(Some(&content));
    overlay.add_overlay(&toast_ui.borrow().container);
    window.set_child(Some(&overlay));

    window.present();

    // First deal.
    let initial_difficulty = settings.borrow().difficulty;
    command_emitter.emit(&BoardCommand::NewGame(Some(initial_difficulty)));

    window.connect_close_request(move |_| {
        log::trace!(target: "window", "Tearing down components");
        board_session.borrow_mut().destroy();
        flip_scheduler.borrow_mut().destroy();
        board_grid_ui.borrow_mut().destroy();
        status_bar_ui.borrow_mut().destroy();
        new_game_button_ui.borrow_mut().destroy();
        toast_ui.borrow_mut().destroy();

        glib::signal::Propagation::Proceed
    });
}
