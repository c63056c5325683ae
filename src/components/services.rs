use yew::prelude::*;

use crate::actions::{dispatch, BrowserEffects, Intent};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    #[prop_or_default]
    pub on_service_click: Option<Callback<String>>,
}

pub struct ServiceCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: [&'static str; 4],
}

pub static SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        id: "plattsattning",
        title: "Plattsättning",
        description: "Professionell plattsättning för terrasser, gångar och entréer. Vi arbetar med alla typer av plattor och natursten.",
        icon: "🏗️",
        features: ["Terrasser & uteplatser", "Gångvägar & entréer", "Natursten & betongplattor", "Dränering & underlag"],
    },
    ServiceCard {
        id: "tradgardsanlaggning",
        title: "Trädgårdsanläggning",
        description: "Kompletta trädgårdsanläggningar från planering till färdig trädgård. Vi skapar din drömträdgård.",
        icon: "🌳",
        features: ["Planering & design", "Plantering & gräsmattor", "Bevattningssystem", "Komplett anläggning"],
    },
    ServiceCard {
        id: "murar",
        title: "Murar",
        description: "Byggande av murar i natursten, tegel och betong. Både stödmurar och dekorativa murar.",
        icon: "🧱",
        features: ["Stödmurar", "Naturstensmurar", "Tegelmurar", "Dekorativa murar"],
    },
    ServiceCard {
        id: "tradgardsskotsel",
        title: "Trädgårdsskötsel",
        description: "Regelbunden skötsel och underhåll av din trädgård. Vi håller din trädgård i toppskick året runt.",
        icon: "✂️",
        features: ["Gräsklippning", "Beskärning & trimning", "Ogräsrensning", "Säsongsplantering"],
    },
    ServiceCard {
        id: "dranering",
        title: "Dränering",
        description: "Professionell dränering för att lösa problem med översvämning och fukt. Långsiktiga lösningar.",
        icon: "💧",
        features: ["Dräneringssystem", "Dagvattenhantering", "Fuktproblem", "Markavvattning"],
    },
    ServiceCard {
        id: "belysning",
        title: "Belysning",
        description: "Utebelysning som skapar stämning och trygghet. LED-belysning för energieffektiv lösning.",
        icon: "💡",
        features: ["Trädgårdsbelysning", "Väg- & entrébelysning", "LED-lösningar", "Stämningsbelysning"],
    },
];

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let select = {
        let callback = props.on_service_click.clone();
        move |service_id: &'static str| {
            let callback = callback.clone();
            move || {
                dispatch(
                    callback.as_ref(),
                    service_id.to_string(),
                    Intent::ServiceSelected(service_id.to_string()),
                    &BrowserEffects,
                );
            }
        }
    };

    let on_custom = {
        let select = select("custom");
        Callback::from(move |_: MouseEvent| select())
    };

    html! {
        <div class="services">
            <style>
                {r#"
                .services-container { max-width: 1200px; margin: 0 auto; padding: 6rem 1.5rem; }
                .services-header { text-align: center; margin-bottom: 3rem; }
                .services-label { color: #2f7a3f; font-weight: 600; text-transform: uppercase; letter-spacing: 0.08em; }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.06);
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .service-card:hover { transform: translateY(-4px); }
                .service-icon-emoji { font-size: 2.5rem; }
                .service-features { list-style: none; padding: 0; }
                .feature-icon { color: #2f7a3f; margin-right: 0.5rem; }
                .service-button, .bottom-cta-button {
                    background: #2f7a3f;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.7rem 1.4rem;
                    cursor: pointer;
                }
                .services-bottom-cta { text-align: center; margin-top: 4rem; }
                "#}
            </style>
            <div class="services-container">
                <div class="services-header">
                    <span class="services-label">{"Våra Tjänster"}</span>
                    <h2 class="services-title">{"Professionella Trädgårdstjänster"}</h2>
                    <p class="services-description">
                        {"Vi erbjuder ett komplett utbud av trädgårdstjänster för både privatpersoner och företag. \
                          Med över 13 års erfarenhet garanterar vi högsta kvalitet i varje projekt."}
                    </p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().map(|service| {
                        let on_card = {
                            let select = select(service.id);
                            Callback::from(move |_: MouseEvent| select())
                        };
                        let on_key = {
                            let select = select(service.id);
                            Callback::from(move |e: KeyboardEvent| {
                                if e.key() == "Enter" || e.key() == " " {
                                    select();
                                }
                            })
                        };
                        let on_button = {
                            let select = select(service.id);
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                select();
                            })
                        };
                        html! {
                            <article key={service.id} class="service-card" role="button" tabindex="0"
                                onclick={on_card} onkeydown={on_key}>
                                <div class="service-icon">
                                    <span class="service-icon-emoji" role="img" aria-label={service.title}>
                                        {service.icon}
                                    </span>
                                </div>
                                <div class="service-content">
                                    <h3 class="service-title">{service.title}</h3>
                                    <p class="service-description">{service.description}</p>
                                    <ul class="service-features">
                                        { for service.features.iter().map(|feature| html! {
                                            <li key={*feature} class="service-feature">
                                                <span class="feature-icon" aria-hidden="true">{"✓"}</span>
                                                <span class="feature-text">{*feature}</span>
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                                <div class="service-cta">
                                    <button class="service-button" onclick={on_button}
                                        aria-label={format!("Begär offert för {}", service.title)}>
                                        {"Begär offert"}
                                        <span class="button-arrow" aria-hidden="true">{"→"}</span>
                                    </button>
                                </div>
                            </article>
                        }
                    }) }
                </div>

                <div class="services-bottom-cta">
                    <div class="bottom-cta-content">
                        <h3 class="bottom-cta-title">{"Hittar du inte vad du söker?"}</h3>
                        <p class="bottom-cta-text">
                            {"Vi erbjuder även skräddarsydda lösningar för dina specifika behov. \
                              Kontakta oss för en kostnadsfri konsultation."}
                        </p>
                        <button class="bottom-cta-button" onclick={on_custom}>
                            {"Kontakta oss"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
