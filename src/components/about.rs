use yew::prelude::*;

use crate::actions::{dispatch, BrowserEffects, Intent};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    #[prop_or_default]
    pub on_contact_click: Option<Callback<()>>,
}

struct Statistic {
    value: &'static str,
    label: &'static str,
    icon: &'static str,
}

struct Reason {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static STATISTICS: [Statistic; 4] = [
    Statistic { value: "500+", label: "Nöjda kunder", icon: "👥" },
    Statistic { value: "13+", label: "Års erfarenhet", icon: "⭐" },
    Statistic { value: "1000+", label: "Genomförda projekt", icon: "🏆" },
    Statistic { value: "100%", label: "Kvalitetsgaranti", icon: "✓" },
];

static REASONS: [Reason; 6] = [
    Reason {
        icon: "🎯",
        title: "Professionell Expertis",
        description: "Med över 13 års erfarenhet i branschen har vi den kunskap och kompetens som krävs för att leverera högkvalitativa trädgårdslösningar.",
    },
    Reason {
        icon: "💎",
        title: "Kvalitet i Fokus",
        description: "Vi använder endast förstklassiga material och moderna metoder för att säkerställa hållbara och vackra resultat som håller över tid.",
    },
    Reason {
        icon: "🤝",
        title: "Personlig Service",
        description: "Varje projekt är unikt. Vi lyssnar på dina önskemål och skapar skräddarsydda lösningar som passar just dina behov och din budget.",
    },
    Reason {
        icon: "⚡",
        title: "Snabb & Pålitlig",
        description: "Vi värdesätter din tid. Projekten genomförs effektivt och professionellt med tydlig kommunikation från start till mål.",
    },
    Reason {
        icon: "🌱",
        title: "Miljömedveten",
        description: "Vi arbetar med hållbara metoder och miljövänliga material för att skapa trädgårdar som är vackra både för dig och för miljön.",
    },
    Reason {
        icon: "💰",
        title: "Konkurrensmässiga Priser",
        description: "Professionell kvalitet behöver inte kosta skjortan. Vi erbjuder transparenta priser och fri offert utan förpliktelser.",
    },
];

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let contact_click = {
        let callback = props.on_contact_click.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch(callback.as_ref(), (), Intent::ContactRequested, &BrowserEffects);
        })
    };

    html! {
        <div class="about">
            <style>
                {r#"
                .about { background: #f4f8f1; }
                .about-container { max-width: 1200px; margin: 0 auto; padding: 6rem 1.5rem; }
                .about-header { text-align: center; margin-bottom: 3rem; }
                .about-label { color: #2f7a3f; font-weight: 600; text-transform: uppercase; }
                .about-content { display: grid; grid-template-columns: 3fr 2fr; gap: 3rem; }
                .about-description { line-height: 1.7; color: #3d4a3f; }
                .about-stats { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                .stat-card { background: #fff; border-radius: 12px; padding: 1.5rem; text-align: center; }
                .stat-value { font-size: 2rem; font-weight: 700; color: #1f4d2b; }
                .why-choose-us { margin-top: 5rem; text-align: center; }
                .reasons-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                    text-align: left;
                }
                .reason-card { background: #fff; border-radius: 12px; padding: 1.75rem; }
                .reason-icon { font-size: 2rem; }
                .about-cta { margin-top: 4rem; text-align: center; }
                .about-cta-button {
                    background: #1f4d2b;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.9rem 1.8rem;
                    font-size: 1rem;
                    cursor: pointer;
                }
                @media (max-width: 900px) {
                    .about-content { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="about-container">
                <div class="about-header">
                    <span class="about-label">{"Om Oss"}</span>
                    <h2 class="about-title">{config::COMPANY_NAME}</h2>
                    <p class="about-subtitle">
                        {"Din pålitliga partner för professionell trädgårdsanläggning i Malmö och Skåne"}
                    </p>
                </div>

                <div class="about-content">
                    <div class="about-text">
                        <h3 class="about-content-title">{"Expertis och Passion för Trädgårdar"}</h3>
                        <p class="about-description">
                            {"Sedan starten har vi hjälpt hundratals kunder i Malmö och Skåne att förverkliga sina trädgårdsdrömmar. \
                              Med över 13 års erfarenhet och 500+ nöjda kunder är vi stolta över att vara en av regionens mest \
                              pålitliga aktörer inom trädgårdsanläggning."}
                        </p>
                        <p class="about-description">
                            {"Vi erbjuder kompletta lösningar från planering och design till färdig anläggning. Oavsett om det \
                              gäller plattsättning, murar, plantering eller trädgårdsskötsel, så utför vi varje projekt med samma \
                              höga kvalitet och engagemang."}
                        </p>
                        <p class="about-description">
                            {"Vårt team består av erfarna yrkesmän som brinner för sitt arbete. Vi kombinerar traditionellt \
                              hantverkskunnande med moderna tekniker för att skapa trädgårdar som är både vackra och funktionella."}
                        </p>
                    </div>

                    <div class="about-stats">
                        { for STATISTICS.iter().map(|stat| html! {
                            <div key={stat.label} class="stat-card">
                                <div class="stat-icon">{stat.icon}</div>
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="why-choose-us">
                    <div class="why-header">
                        <h3 class="why-title">{"Varför Välja Oss?"}</h3>
                        <p class="why-subtitle">
                            {format!("Sex goda skäl att lita på {} för ditt nästa projekt", config::COMPANY_NAME)}
                        </p>
                    </div>
                    <div class="reasons-grid">
                        { for REASONS.iter().map(|reason| html! {
                            <div key={reason.title} class="reason-card">
                                <div class="reason-icon">{reason.icon}</div>
                                <h4 class="reason-title">{reason.title}</h4>
                                <p class="reason-description">{reason.description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="about-cta">
                    <div class="about-cta-content">
                        <h3 class="about-cta-title">{"Redo att Förverkliga Din Trädgårdsdröm?"}</h3>
                        <p class="about-cta-text">
                            {"Kontakta oss idag för en kostnadsfri konsultation och offert. Vi hjälper dig från idé till färdig trädgård."}
                        </p>
                        <button class="about-cta-button" onclick={contact_click} aria-label="Kontakta oss för offert">
                            {"Begär Kostnadsfri Offert"}
                            <span class="button-arrow">{"→"}</span>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
