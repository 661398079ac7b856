use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer text-center">
            <div class="container">
                <span class="text-muted">{"MedVerse. Care, connected."}</span>
            </div>
        </footer>
    }
}
