use log::{debug, info};
use stylist::css;
use yew::prelude::*;

mod actions;
mod config;
mod contact {
    pub mod machine;
    pub mod transport;
    pub mod validation;
}
mod navigation {
    pub mod browser;
    pub mod spy;
    pub mod subscription;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod services;
}

use actions::{BrowserEffects, PageEffects};
use components::{about::About, contact::Contact, footer::Footer, hero::Hero, services::Services};
use navigation::browser::BrowserViewport;
use navigation::spy::{NavigationState, Section};
use navigation::subscription::ScrollSubscription;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub state: NavigationState,
    pub on_navigate: Callback<Section>,
    pub on_request_quote: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        state,
        on_navigate,
        on_request_quote,
    } = props;

    let nav_class = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        transition: background 0.3s ease, box-shadow 0.3s ease;
        color: #fff;

        &.navigation-scrolled {
            background: rgba(20, 48, 28, 0.96);
            box-shadow: 0 2px 16px rgba(0, 0, 0, 0.2);
        }
        .navigation-container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 1rem 1.5rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .navigation-menu {
            display: flex;
            gap: 1.5rem;
            list-style: none;
            margin: 0;
            padding: 0;
        }
        .nav-link {
            background: none;
            border: none;
            color: inherit;
            font-size: 1rem;
            cursor: pointer;
            opacity: 0.8;
            border-bottom: 2px solid transparent;
        }
        .nav-link-active {
            opacity: 1;
            border-bottom-color: #b9e28c;
        }
        .navigation-cta {
            display: flex;
            align-items: center;
            gap: 1rem;
        }
        .nav-phone {
            color: inherit;
            text-decoration: none;
        }
        .nav-button {
            background: #b9e28c;
            color: #14301c;
            border: none;
            border-radius: 999px;
            padding: 0.6rem 1.2rem;
            cursor: pointer;
            font-weight: 600;
        }
        @media (max-width: 900px) {
            .navigation-menu, .nav-phone-text { display: none; }
        }
    "#
    );

    let request_quote = {
        let on_request_quote = on_request_quote.clone();
        Callback::from(move |_: MouseEvent| on_request_quote.emit(()))
    };

    html! {
        <nav class={classes!(nav_class, "navigation", state.scrolled.then_some("navigation-scrolled"))}>
            <div class="navigation-container">
                <div class="navigation-logo">
                    <span class="logo-icon">{"🌳"}</span>
                    <span class="logo-text">{config::COMPANY_NAME}</span>
                </div>

                <ul class="navigation-menu">
                    { for Section::ALL.into_iter().map(|section| {
                        let onclick = {
                            let on_navigate = on_navigate.clone();
                            Callback::from(move |_: MouseEvent| on_navigate.emit(section))
                        };
                        html! {
                            <li key={section.id()}>
                                <button
                                    class={classes!("nav-link", (state.active == section).then_some("nav-link-active"))}
                                    {onclick}
                                    aria-label={section.aria_label()}
                                >
                                    {section.label()}
                                </button>
                            </li>
                        }
                    }) }
                </ul>

                <div class="navigation-cta">
                    <a href={config::PHONE_HREF} class="nav-phone"
                        aria-label={format!("Ring oss på {}", config::PHONE_SHORT)}>
                        <span class="nav-phone-icon">{"📞"}</span>
                        <span class="nav-phone-text">{config::PHONE_SHORT}</span>
                    </a>
                    <button class="nav-button" onclick={request_quote} aria-label="Begär offert">
                        {"Begär offert"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let nav_state = use_mut_ref(NavigationState::default);
    let rerender = use_force_update();

    // Scroll-spy lives as long as the page; dropping the subscription removes the listener.
    {
        let nav_state = nav_state.clone();
        let rerender = rerender.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = BrowserViewport::current().map(|viewport| {
                    let window = viewport.window().clone();
                    let update = move || {
                        if nav_state.borrow_mut().on_scroll(&viewport) {
                            rerender.force_update();
                        }
                    };
                    // Initial check
                    update();
                    ScrollSubscription::new(window, update)
                });
                move || drop(subscription)
            },
            (),
        );
    }

    let on_navigate = Callback::from(|section: Section| BrowserEffects.scroll_to_section(section.id()));
    let to_contact = Callback::from(|_: ()| BrowserEffects.scroll_to_section(Section::Contact.id()));
    let on_call_us = Callback::from(|_: ()| BrowserEffects.open_href(config::PHONE_HREF));
    let on_service_click = Callback::from(|service_id: String| {
        debug!("Service selected: {}", service_id);
        BrowserEffects.scroll_to_section(Section::Contact.id());
    });
    let on_footer_navigate = Callback::from(|section_id: String| BrowserEffects.scroll_to_section(&section_id));
    let on_submit_success = Callback::from(|_: ()| info!("Form submitted successfully"));
    let scroll_top = Callback::from(|_: MouseEvent| BrowserEffects.scroll_to_section(Section::Hero.id()));

    let state = *nav_state.borrow();

    html! {
        <div class="app">
            <style>
                {r#"
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    color: #22302a;
                    background: #fbfdf9;
                }
                .scroll-to-top {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: none;
                    background: #2f7a3f;
                    color: #fff;
                    font-size: 1.3rem;
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }
                .scroll-to-top-visible {
                    opacity: 1;
                    pointer-events: auto;
                }
                "#}
            </style>
            <Nav state={state} on_navigate={on_navigate} on_request_quote={to_contact.clone()} />

            <main class="main-content">
                <section id={Section::Hero.id()}>
                    <Hero on_request_quote={to_contact.clone()} on_call_us={on_call_us} />
                </section>
                <section id={Section::Services.id()}>
                    <Services on_service_click={on_service_click} />
                </section>
                <section id={Section::About.id()}>
                    <About on_contact_click={to_contact} />
                </section>
                <section id={Section::Contact.id()}>
                    <Contact on_submit_success={on_submit_success} />
                </section>
            </main>

            <Footer on_navigate={on_footer_navigate} />

            <button
                class={classes!("scroll-to-top", state.scrolled.then_some("scroll-to-top-visible"))}
                onclick={scroll_top}
                aria-label="Scrolla till toppen"
            >
                <span class="scroll-to-top-icon">{"↑"}</span>
            </button>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
