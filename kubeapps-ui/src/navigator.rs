use std::fmt;
use std::rc::Rc;

use leptos::{logging, use_context, window};
use leptos_router::{use_navigate, NavigateOptions, RouterContext};

use crate::config::UiConfig;
use crate::content::NavigationCard;
use crate::routes::Route;

/// Performs client-side route transitions on behalf of a view.
pub trait Navigator {
    fn navigate(&self, href: &str);
}

pub type RouterFn = Rc<dyn Fn(&str, NavigateOptions)>;
pub type DocumentFn = Rc<dyn Fn(&str)>;

/// Cloneable navigator handle, suitable for `provide_context`.
#[derive(Clone)]
pub struct NavigatorHandle(Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    /// Navigator that leaves the page for every href.
    ///
    /// Installed by `App`: the card targets are served by the dashboard, not
    /// by this crate's router.
    pub fn document(config: &UiConfig) -> Self {
        Self::with_document(config, Rc::new(assign_location))
    }

    pub fn with_document(config: &UiConfig, document: DocumentFn) -> Self {
        Self::new(ShellNavigator::new(config, None, document))
    }

    /// Navigator for whatever surrounds the calling component.
    ///
    /// Uses the enclosing `<Router>` for paths it serves when there is one,
    /// and full document navigation otherwise. Never requires a router.
    pub fn from_environment(config: &UiConfig) -> Self {
        let router = use_context::<RouterContext>().map(|_| {
            let navigate: RouterFn = Rc::new(use_navigate());
            navigate
        });
        Self::new(ShellNavigator::new(config, router, Rc::new(assign_location)))
    }
}

impl Navigator for NavigatorHandle {
    fn navigate(&self, href: &str) {
        self.0.navigate(href);
    }
}

impl fmt::Debug for NavigatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NavigatorHandle")
    }
}

/// Sends dashboard routes to the document and everything else to the
/// in-app router, if one is available.
pub struct ShellNavigator {
    base_path: String,
    router: Option<RouterFn>,
    document: DocumentFn,
}

impl ShellNavigator {
    pub fn new(config: &UiConfig, router: Option<RouterFn>, document: DocumentFn) -> Self {
        Self {
            base_path: config.base_path.clone(),
            router,
            document,
        }
    }

    /// Dashboard route an href points at, if any.
    pub fn dashboard_route(&self, href: &str) -> Option<Route> {
        let base = self.base_path.trim_end_matches('/');
        let path = href.strip_prefix(base).unwrap_or(href);
        match path.parse::<Route>() {
            Ok(route) => Some(route),
            Err(e) => {
                logging::log!("{} stays in the app shell: {}", href, e);
                None
            }
        }
    }
}

impl Navigator for ShellNavigator {
    fn navigate(&self, href: &str) {
        match (&self.router, self.dashboard_route(href)) {
            (Some(router), None) => router(href, NavigateOptions::default()),
            _ => (self.document)(href),
        }
    }
}

fn assign_location(href: &str) {
    if let Err(e) = window().location().assign(href) {
        logging::error!("Failed to navigate to {}: {:?}", href, e);
    }
}

/// Hands a card activation to the navigator.
pub fn activate(card: &NavigationCard, navigator: &dyn Navigator, config: &UiConfig) {
    let href = card.route.href(&config.base_path);
    logging::log!("Navigating to {} ({})", card.route, href);
    navigator.navigate(&href);
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingNavigator;
    use super::*;
    use crate::content::home_layout;
    use leptos::create_runtime;

    fn recording_router(recorder: &RecordingNavigator) -> RouterFn {
        let requests = recorder.requests.clone();
        Rc::new(move |href: &str, _: NavigateOptions| {
            requests.borrow_mut().push(href.to_string())
        })
    }

    #[test]
    fn test_activate_second_card_navigates_to_apps_once() {
        let recorder = RecordingNavigator::default();
        let layout = home_layout();

        activate(&layout.cards[1], &recorder, &UiConfig::default());

        assert_eq!(recorder.requests(), vec!["/apps".to_string()]);
    }

    #[test]
    fn test_activate_each_card() {
        let recorder = RecordingNavigator::default();
        let config = UiConfig::default();

        for card in home_layout().cards {
            activate(card, &recorder, &config);
        }

        assert_eq!(
            recorder.requests(),
            vec!["/catalog", "/apps", "/config/repos", "/operators"]
        );
    }

    #[test]
    fn test_activate_respects_base_path() {
        let recorder = RecordingNavigator::default();
        let config = UiConfig::new("/kubeapps/", "Kubeapps").unwrap();

        activate(&home_layout().cards[3], &recorder, &config);

        assert_eq!(recorder.requests(), vec!["/kubeapps/operators"]);
    }

    #[test]
    fn test_handle_delegates() {
        let recorder = RecordingNavigator::default();
        let handle = NavigatorHandle::new(recorder.clone());
        let cloned = handle.clone();

        handle.navigate("/catalog");
        cloned.navigate("/apps");

        assert_eq!(recorder.requests(), vec!["/catalog", "/apps"]);
    }

    #[test]
    fn test_app_shell_sends_every_card_to_the_document() {
        let document = RecordingNavigator::default();
        let config = UiConfig::default();
        let handle = NavigatorHandle::with_document(&config, document.as_document());

        for card in home_layout().cards {
            activate(card, &handle, &config);
        }

        assert_eq!(
            document.requests(),
            vec!["/catalog", "/apps", "/config/repos", "/operators"]
        );
    }

    #[test]
    fn test_dashboard_routes_bypass_the_router() {
        let document = RecordingNavigator::default();
        let router = RecordingNavigator::default();
        let config = UiConfig::new("/kubeapps", "Kubeapps").unwrap();
        let shell = ShellNavigator::new(
            &config,
            Some(recording_router(&router)),
            document.as_document(),
        );

        for card in home_layout().cards {
            activate(card, &shell, &config);
        }
        shell.navigate("/kubeapps");

        assert_eq!(
            document.requests(),
            vec![
                "/kubeapps/catalog",
                "/kubeapps/apps",
                "/kubeapps/config/repos",
                "/kubeapps/operators"
            ]
        );
        assert_eq!(router.requests(), vec!["/kubeapps"]);
    }

    #[test]
    fn test_dashboard_route_lookup() {
        let config = UiConfig::new("/kubeapps/", "Kubeapps").unwrap();
        let shell = ShellNavigator::new(&config, None, Rc::new(|_: &str| {}));

        assert_eq!(shell.dashboard_route("/kubeapps/apps"), Some(Route::Apps));
        assert_eq!(
            shell.dashboard_route("/kubeapps/config/repos"),
            Some(Route::RepositoryConfig)
        );
        assert_eq!(shell.dashboard_route("/kubeapps"), None);
        assert_eq!(shell.dashboard_route("/kubeapps/nodes"), None);
    }

    #[test]
    fn test_from_environment_without_router_does_not_panic() {
        let runtime = create_runtime();

        let result = std::panic::catch_unwind(|| {
            let _ = NavigatorHandle::from_environment(&UiConfig::default());
        });

        runtime.dispose();
        assert!(result.is_ok());
    }
}
