use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::actions::{dispatch, BrowserEffects, Intent};
use crate::components::services::SERVICES;
use crate::config;
use crate::navigation::spy::Section;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub on_navigate: Option<Callback<String>>,
}

struct SocialLink {
    icon: &'static str,
    label: &'static str,
    url: &'static str,
    aria_label: &'static str,
}

static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "📘",
        label: "Facebook",
        url: "https://facebook.com",
        aria_label: "Besök oss på Facebook",
    },
    SocialLink {
        icon: "📷",
        label: "Instagram",
        url: "https://instagram.com",
        aria_label: "Följ oss på Instagram",
    },
    SocialLink {
        icon: "💼",
        label: "LinkedIn",
        url: "https://linkedin.com",
        aria_label: "Anslut med oss på LinkedIn",
    },
];

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let current_year = Date::new_0().get_full_year();

    let navigate_to = {
        let callback = props.on_navigate.clone();
        move |section: Section| {
            let callback = callback.clone();
            Callback::from(move |_: MouseEvent| {
                dispatch(
                    callback.as_ref(),
                    section.id().to_string(),
                    Intent::Navigate(section.id().to_string()),
                    &BrowserEffects,
                );
            })
        }
    };

    html! {
        <footer class="footer" role="contentinfo">
            <style>
                {r#"
                .footer { background: #14301c; color: rgba(255, 255, 255, 0.85); position: relative; }
                .footer-container { max-width: 1200px; margin: 0 auto; padding: 4rem 1.5rem 2rem; }
                .footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr 1.5fr; gap: 2rem; }
                .footer-logo { font-size: 1.3rem; font-weight: 700; color: #fff; }
                .footer-links, .footer-contact { list-style: none; padding: 0; }
                .footer-link {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    padding: 0.3rem 0;
                    font-size: 0.95rem;
                }
                .footer-link:hover { color: #b9e28c; }
                .contact-link { color: #b9e28c; text-decoration: none; }
                .certification-badge { display: inline-flex; gap: 0.4rem; margin-right: 1rem; }
                .footer-middle { border-top: 1px solid rgba(255, 255, 255, 0.1); margin-top: 3rem; padding-top: 2rem; }
                .social-links { display: flex; gap: 1rem; }
                .social-link { color: inherit; text-decoration: none; }
                .footer-bottom { border-top: 1px solid rgba(255, 255, 255, 0.1); margin-top: 2rem; padding-top: 1.5rem; }
                .footer-bottom-content { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 1rem; }
                .legal-link { background: none; border: none; color: inherit; cursor: pointer; }
                .footer-decoration { position: absolute; inset: 0; pointer-events: none; opacity: 0.15; }
                @media (max-width: 900px) {
                    .footer-grid { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
            <div class="footer-container">
                <div class="footer-top">
                    <div class="footer-grid">
                        <div class="footer-column footer-company">
                            <div class="footer-logo">
                                <span class="footer-logo-icon">{"🌳"}</span>
                                <span class="footer-logo-text">{config::COMPANY_NAME}</span>
                            </div>
                            <p class="footer-description">
                                {"Med över 13 års erfarenhet skapar vi vackra och funktionella trädgårdar i Malmö och Skåne. \
                                  Professionell service från planering till färdig anläggning."}
                            </p>
                            <div class="footer-certifications">
                                <div class="certification-badge">
                                    <span class="badge-icon">{"✓"}</span>
                                    <span class="badge-text">{"Certifierad"}</span>
                                </div>
                                <div class="certification-badge">
                                    <span class="badge-icon">{"🏆"}</span>
                                    <span class="badge-text">{"Kvalitetsgaranti"}</span>
                                </div>
                            </div>
                        </div>

                        <div class="footer-column">
                            <h3 class="footer-heading">{"Snabblänkar"}</h3>
                            <ul class="footer-links" role="list">
                                { for Section::ALL.into_iter().map(|section| html! {
                                    <li key={section.id()}>
                                        <button class="footer-link" onclick={navigate_to(section)}
                                            aria-label={format!("Navigera till {}", section.label())}>
                                            <span class="link-arrow">{"→"}</span>
                                            {section.label()}
                                        </button>
                                    </li>
                                }) }
                            </ul>
                        </div>

                        <div class="footer-column">
                            <h3 class="footer-heading">{"Våra Tjänster"}</h3>
                            <ul class="footer-links" role="list">
                                { for SERVICES.iter().map(|service| html! {
                                    <li key={service.id}>
                                        <button class="footer-link" onclick={navigate_to(Section::Services)}
                                            aria-label={format!("Läs mer om {}", service.title)}>
                                            <span class="link-arrow">{"→"}</span>
                                            {service.title}
                                        </button>
                                    </li>
                                }) }
                            </ul>
                        </div>

                        <div class="footer-column">
                            <h3 class="footer-heading">{"Kontakta Oss"}</h3>
                            <ul class="footer-contact" role="list">
                                <li class="contact-item">
                                    <span class="contact-icon" aria-hidden="true">{"📞"}</span>
                                    <div class="contact-details">
                                        <span class="contact-label">{"Telefon"}</span>
                                        <a href={config::PHONE_HREF} class="contact-value contact-link"
                                            aria-label={format!("Telefon: {}", config::PHONE_DISPLAY)}>
                                            {config::PHONE_DISPLAY}
                                        </a>
                                    </div>
                                </li>
                                <li class="contact-item">
                                    <span class="contact-icon" aria-hidden="true">{"✉️"}</span>
                                    <div class="contact-details">
                                        <span class="contact-label">{"E-post"}</span>
                                        <a href={config::EMAIL_HREF} class="contact-value contact-link"
                                            aria-label={format!("E-post: {}", config::EMAIL)}>
                                            {config::EMAIL}
                                        </a>
                                    </div>
                                </li>
                                <li class="contact-item">
                                    <span class="contact-icon" aria-hidden="true">{"📍"}</span>
                                    <div class="contact-details">
                                        <span class="contact-label">{"Adress"}</span>
                                        <span class="contact-value">{config::ADDRESS}</span>
                                    </div>
                                </li>
                            </ul>

                            <div class="footer-hours">
                                <h4 class="hours-heading">{"Öppettider"}</h4>
                                <p class="hours-text">{"Mån-Fre: 07:00 - 17:00"}</p>
                                <p class="hours-text">{"Lör: 08:00 - 14:00"}</p>
                                <p class="hours-text">{"Sön: Stängt"}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="footer-middle">
                    <div class="footer-social">
                        <h3 class="social-heading">{"Följ Oss"}</h3>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a key={social.label} href={social.url} class="social-link"
                                    target="_blank" rel="noopener noreferrer" aria-label={social.aria_label}>
                                    <span class="social-icon" aria-hidden="true">{social.icon}</span>
                                    <span class="social-label">{social.label}</span>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-bottom-content">
                        <p class="copyright">
                            {format!("© {} {}. Alla rättigheter förbehållna.", current_year, config::COMPANY_NAME)}
                        </p>
                        <div class="footer-legal">
                            <button class="legal-link" aria-label="Läs vår integritetspolicy">{"Integritetspolicy"}</button>
                            <span class="legal-separator" aria-hidden="true">{"•"}</span>
                            <button class="legal-link" aria-label="Läs våra användarvillkor">{"Användarvillkor"}</button>
                            <span class="legal-separator" aria-hidden="true">{"•"}</span>
                            <button class="legal-link" aria-label="Läs om cookies">{"Cookies"}</button>
                        </div>
                    </div>
                </div>
            </div>

            <div class="footer-decoration" aria-hidden="true">
                <div class="decoration-leaf decoration-leaf-1">{"🍃"}</div>
                <div class="decoration-leaf decoration-leaf-2">{"🍃"}</div>
                <div class="decoration-leaf decoration-leaf-3">{"🍃"}</div>
            </div>
        </footer>
    }
}
