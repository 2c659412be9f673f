use leptos::*;

use crate::config::UiConfig;
use crate::content::{class, home_layout, FeatureItem, NavigationCard};
use crate::navigator::{activate, Navigator, NavigatorHandle};

/// Landing page: hero banner, quick-action cards and the feature list.
///
/// Takes no props. A host may override navigation by providing a
/// `NavigatorHandle` context; otherwise the surroundings decide, and the view
/// renders with or without an enclosing router.
#[component]
pub fn HomeView() -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let navigator = use_context::<NavigatorHandle>()
        .unwrap_or_else(|| NavigatorHandle::from_environment(&config));
    let layout = home_layout();

    view! {
        <div class=class::ROOT>
            <div class=class::HERO_SECTION>
                <h1>{layout.hero.title}</h1>
                <p class=class::SUBTITLE>{layout.hero.subtitle}</p>
            </div>

            <div class=class::QUICK_ACTIONS>
                {layout
                    .cards
                    .iter()
                    .map(|card| view! {
                        <NavCard
                            card={*card}
                            navigator=navigator.clone()
                            config=config.clone()
                        />
                    })
                    .collect_view()}
            </div>

            <div class=class::FEATURES_SECTION>
                <h2>{layout.features_heading}</h2>
                <div class=class::FEATURES_GRID>
                    {layout
                        .features
                        .iter()
                        .map(|feature| view! { <FeatureTile feature={*feature}/> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn NavCard(card: NavigationCard, navigator: NavigatorHandle, config: UiConfig) -> impl IntoView {
    let href = card.route.href(&config.base_path);

    let on_click = move |ev: ev::MouseEvent| {
        let click = Click::from_event(&ev);
        if handle_card_click(click, &card, &navigator, &config) {
            ev.prevent_default();
        }
    };

    view! {
        <a href=href class=class::ACTION_CARD on:click=on_click>
            <div class=class::CARD_ICON>{card.icon}</div>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
        </a>
    }
}

#[component]
fn FeatureTile(feature: FeatureItem) -> impl IntoView {
    view! {
        <div class=class::FEATURE_ITEM>
            <h4>{feature.title}</h4>
            <p>{feature.description}</p>
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Click {
    button: i16,
    modified: bool,
    default_prevented: bool,
}

impl Click {
    fn from_event(ev: &ev::MouseEvent) -> Self {
        Self {
            button: ev.button(),
            modified: ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key(),
            default_prevented: ev.default_prevented(),
        }
    }

    // Modified or non-primary clicks (open in new tab etc.) stay with the browser.
    fn is_plain(&self) -> bool {
        !self.default_prevented && self.button == 0 && !self.modified
    }
}

/// Returns true when the click was handed to the navigator.
fn handle_card_click(
    click: Click,
    card: &NavigationCard,
    navigator: &dyn Navigator,
    config: &UiConfig,
) -> bool {
    if !click.is_plain() {
        return false;
    }
    activate(card, navigator, config);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::testing::RecordingNavigator;

    #[test]
    fn test_plain_click_on_second_card_navigates_once() {
        let recorder = RecordingNavigator::default();
        let card = home_layout().cards[1];

        let handled = handle_card_click(Click::default(), &card, &recorder, &UiConfig::default());

        assert!(handled);
        assert_eq!(recorder.requests(), vec!["/apps"]);
    }

    #[test]
    fn test_modified_clicks_stay_with_browser() {
        let recorder = RecordingNavigator::default();
        let card = home_layout().cards[0];
        let config = UiConfig::default();

        let clicks = [
            Click { modified: true, ..Click::default() },
            Click { button: 1, ..Click::default() },
            Click { default_prevented: true, ..Click::default() },
        ];
        for click in clicks {
            assert!(!handle_card_click(click, &card, &recorder, &config));
        }

        assert!(recorder.requests().is_empty());
    }
}
