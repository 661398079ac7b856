use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthProvider;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Header />
                <main class="app-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </AuthProvider>
        </BrowserRouter>
    }
}
