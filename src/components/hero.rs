use stylist::css;
use yew::prelude::*;

use crate::actions::{dispatch, BrowserEffects, Intent};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub on_request_quote: Option<Callback<()>>,
    #[prop_or_default]
    pub on_call_us: Option<Callback<()>>,
}

static FEATURES: [&str; 4] = [
    "13+ års erfarenhet",
    "500+ nöjda kunder",
    "Professionell service",
    "Fri offert & rådgivning",
];

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let request_quote = {
        let callback = props.on_request_quote.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch(callback.as_ref(), (), Intent::RequestQuote, &BrowserEffects);
        })
    };

    let call_us = {
        let callback = props.on_call_us.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch(callback.as_ref(), (), Intent::CallUs, &BrowserEffects);
        })
    };

    let hero_class = css!(
        r#"
        position: relative;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        background: linear-gradient(135deg, #1f4d2b 0%, #2f7a3f 60%, #6fa65a 100%);
        color: #fff;
        overflow: hidden;

        .hero-container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 8rem 1.5rem 4rem;
        }
        .hero-title {
            font-size: clamp(2.2rem, 5vw, 3.6rem);
            margin-bottom: 1.25rem;
        }
        .hero-subtitle {
            font-size: 1.2rem;
            max-width: 640px;
            opacity: 0.9;
            line-height: 1.6;
        }
        .hero-cta {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            margin: 2rem 0 3rem;
        }
        .hero-button {
            padding: 0.9rem 1.8rem;
            border-radius: 999px;
            font-size: 1rem;
            cursor: pointer;
            border: 2px solid #fff;
        }
        .hero-button-primary {
            background: #fff;
            color: #1f4d2b;
        }
        .hero-button-secondary {
            background: transparent;
            color: #fff;
        }
        .hero-features {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 0.75rem;
        }
        .hero-feature-icon {
            margin-right: 0.5rem;
            color: #b9e28c;
        }
        .hero-scroll-indicator {
            text-align: center;
            padding-bottom: 2rem;
            opacity: 0.8;
        }
    "#
    );

    html! {
        <div class={hero_class}>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <div class="hero-container">
                    <div class="hero-text">
                        <h1 class="hero-title">{"Professionell Trädgårdsanläggning i Malmö"}</h1>
                        <p class="hero-subtitle">
                            {"Vi skapar vackra och funktionella utemiljöer med över 13 års erfarenhet. \
                              Från plattsättning och murar till komplett trädgårdsanläggning."}
                        </p>
                        <div class="hero-cta">
                            <button class="hero-button hero-button-primary" onclick={request_quote} aria-label="Begär offert">
                                <span class="hero-button-icon">{"📋"}</span>
                                {"Begär offert"}
                            </button>
                            <button class="hero-button hero-button-secondary" onclick={call_us} aria-label="Ring oss">
                                <span class="hero-button-icon">{"📞"}</span>
                                {"Ring oss"}
                            </button>
                        </div>
                    </div>

                    <div class="hero-features">
                        { for FEATURES.iter().map(|text| html! {
                            <div key={*text} class="hero-feature">
                                <span class="hero-feature-icon" aria-hidden="true">{"✓"}</span>
                                <span class="hero-feature-text">{*text}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="hero-scroll-indicator" aria-hidden="true">
                <div class="hero-scroll-arrow">{"↓"}</div>
                <span class="hero-scroll-text">{"Scrolla för mer"}</span>
            </div>
        </div>
    }
}
