use agro_assist_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger already set: {}", err).into());
    }

    let document = web_sys::window().unwrap().document().unwrap();
    let head = document.head().unwrap();

    let style = document.create_element("style").unwrap();
    style.set_inner_html(include_str!("../styles.css"));
    head.append_child(&style).unwrap();

    yew::Renderer::<App>::new().render();
}
