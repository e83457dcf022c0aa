use glib::Bytes;
use gtk::prelude::*;
use gtk::Application;

const APP_ID: &str = "org.pairhunt.PairHunt";

// Compiled gresource bundle with the default deck artwork and stylesheet
static RESOURCES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/pairhunt.gresource"));

fn main() {
    env_logger::init();

    gio::resources_register(
        &gio::Resource::from_data(&Bytes::from_static(RESOURCES))
            .expect("Failed to register compiled resources"),
    );

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(pairhunt::ui::window::build_ui);
    app.run();
}
