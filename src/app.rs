//! Root application component with routing, session context, and the
//! navigation gate.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::pages::{bucket::BucketPage, buckets::BucketsPage, login::LoginPage, logout::LogoutPage};
use crate::routing::guard::{GuardOutcome, NavigationGuard};
use crate::routing::route::{NavigationAttempt, RouteDescriptor, RouteTable};
use crate::session::persist::LocalStorageBackend;
use crate::session::store::SessionStore;

/// Session store as provided via context throughout the app.
pub type AppSession = SessionStore<LocalStorageBackend>;

/// Stable route names the guard is configured with.
pub const LOGIN_ROUTE: &str = "login";
pub const LOGOUT_ROUTE: &str = "logout";

/// The application's route table. `/logout` is a pseudo-route: the gate
/// intercepts it before its (empty) view ever matters.
pub const ROUTES: [RouteDescriptor; 4] = [
    RouteDescriptor::protected("/", "home"),
    RouteDescriptor::protected("/:bucket", "show"),
    RouteDescriptor::new("/login", LOGIN_ROUTE),
    RouteDescriptor::new("/logout", LOGOUT_ROUTE),
];

pub const ROUTE_TABLE: RouteTable = RouteTable::new(&ROUTES);

pub const GUARD: NavigationGuard = NavigationGuard::new(LOGIN_ROUTE, LOGOUT_ROUTE);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the session from localStorage (a no-op outside the browser),
/// provides it via context, and mounts the router behind the gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(AppSession::restore(LocalStorageBackend));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/nicelab.css"/>
        <Title text="Nice Lab"/>

        <Router>
            <SessionGate/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route path=StaticSegment("") view=BucketsPage/>
                <Route path=ParamSegment("bucket") view=BucketPage/>
            </Routes>
        </Router>
    }
}

/// Invisible component that runs the navigation guard once per route
/// transition and applies its outcome.
///
/// A redirect replaces the attempted navigation (history `replace`), so
/// the unreachable target never ends up in the back stack.
#[component]
fn SessionGate() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let location = use_location();
    let navigate = use_navigate();

    // Route left behind by the previous evaluation, for attempt context.
    let current = StoredValue::new(None::<&'static RouteDescriptor>);

    Effect::new(move || {
        let path = location.pathname.get();
        let Some(target) = ROUTE_TABLE.resolve(&path) else {
            // Unknown paths fall through to the router's fallback view.
            return;
        };

        let attempt = NavigationAttempt {
            target,
            current: current.get_value(),
        };
        let mut outcome = GuardOutcome::Proceed;
        session.update(|store| outcome = GUARD.evaluate(store, &ROUTE_TABLE, &attempt));

        match outcome {
            GuardOutcome::Proceed => current.set_value(Some(target)),
            GuardOutcome::Redirect(name) => {
                if let Some(login) = ROUTE_TABLE.find(name) {
                    navigate(
                        login.path,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
            }
        }
    });
}
