//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Home, Login, Logout, Register, Workouts};
use crate::state::{provide_notices, provide_user_context, use_user};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_notices();
    provide_user_context();

    // Identity for a stored token is fetched once, here
    use_user().restore();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/register" view=Register />
                        <Route path="/login" view=Login />
                        <Route path="/logout" view=Logout />
                        <Route path="/workouts" view=Workouts />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
