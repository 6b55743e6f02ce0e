// Writing Style Profiler Browser Application

use style_profiler_web_ui::App;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[function_component(Main)]
fn main_component() -> Html {
    html! {
        <App />
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    yew::Renderer::<Main>::new().render();
}

fn main() {
    run_app();
}
