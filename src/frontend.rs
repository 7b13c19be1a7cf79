use std::rc::Rc;

use tracing::{debug, info};
use web_sys::window;
use yew::prelude::*;

use crate::{
    content::{Certificate, Portfolio, Project, Skill},
    error::{PortfolioError, Result},
    logging,
    motion::{cursor_style, MotionPreset},
    theme::Theme,
};

mod pointer;
mod reveal;

use pointer::use_pointer_position;
use reveal::Reveal;

const MOUNT_POINT_ID: &str = "app";

fn mirror_theme_on_root(theme: Theme) -> Option<()> {
    let root = window()?.document()?.document_element()?;
    root.set_attribute("data-theme", theme.as_str()).ok()
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    label: Option<AttrValue>,
    #[prop_or_default]
    children: Html,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={props.label.clone()}
        >
            { props.children.clone() }
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[function_component(Cursor)]
fn cursor() -> Html {
    let position = use_pointer_position();

    html! {
        <div class="cursor" style={cursor_style(position)} aria-hidden="true">
            <div class="cursor-ring" />
            <div class="cursor-ring cursor-ring--pulse" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    name: AttrValue,
    theme: Theme,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="site-nav">
            <Reveal preset={MotionPreset::NAV_TITLE} name="nav-title">
                <h1 class="brand gradient-text">{props.name.clone()}</h1>
            </Reveal>
            <button
                class="theme-toggle"
                type="button"
                aria-label={props.theme.toggle_label()}
                aria-pressed={props.theme.pressed().to_string()}
                onclick={props.on_toggle.clone()}
            >
                <span aria-hidden="true">{props.theme.icon()}</span>
            </button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioProps {
    portfolio: Rc<Portfolio>,
}

#[function_component(Hero)]
fn hero(props: &PortfolioProps) -> Html {
    let profile = &props.portfolio.profile;

    html! {
        <section class="hero">
            <Reveal preset={MotionPreset::HERO} class="hero-copy" name="hero">
                <h1 class="hero-title gradient-text">{profile.headline.clone()}</h1>
                <p class="hero-tagline">{profile.tagline.clone()}</p>
                <div class="social-links">
                    <ExternalLink href={profile.github.clone()} class="icon-link" label="GitHub">
                        <span aria-hidden="true">{"GH"}</span>
                    </ExternalLink>
                    <ExternalLink href={profile.linkedin.clone()} class="icon-link" label="LinkedIn">
                        <span aria-hidden="true">{"in"}</span>
                    </ExternalLink>
                    <a class="icon-link" href={profile.mailto()} aria-label="Email">
                        <span aria-hidden="true">{"@"}</span>
                    </a>
                </div>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    id: AttrValue,
    title: AttrValue,
    icon: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    let heading_id = format!("{}-heading", props.id);

    html! {
        <section id={props.id.clone()} class={classes!("section", props.class.clone())} aria-labelledby={heading_id.clone()}>
            <Reveal preset={MotionPreset::SECTION} class="section-inner" name={props.id.clone()}>
                <h2 id={heading_id} class="section-title gradient-text">
                    <span class="section-icon" aria-hidden="true">{props.icon.clone()}</span>
                    {props.title.clone()}
                </h2>
                { props.children.clone() }
            </Reveal>
        </section>
    }
}

fn project_card(index: usize, project: &Project) -> Html {
    html! {
        <Reveal
            key={index}
            preset={MotionPreset::PROJECT_CARD}
            index={index}
            class="card project-card"
            name="project"
        >
            <div class="project-media">
                <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                <div class="project-overlay">
                    <ExternalLink href={project.live_link.clone()} class="pill-link">
                        <span aria-hidden="true">{"↗ "}</span>{"Live Demo"}
                    </ExternalLink>
                    <ExternalLink href={project.github.clone()} class="pill-link">
                        <span aria-hidden="true">{"</> "}</span>{"Code"}
                    </ExternalLink>
                </div>
            </div>
            <div class="card-body">
                <h3>{project.title.clone()}</h3>
                <p class="muted">{project.description.clone()}</p>
            </div>
        </Reveal>
    }
}

fn skill_chip(index: usize, skill: &Skill) -> Html {
    html! {
        <Reveal
            key={index}
            preset={MotionPreset::SKILL_CHIP}
            index={index}
            class="card skill-chip"
            name="skill"
        >
            {skill.label().to_string()}
        </Reveal>
    }
}

fn certificate_card(index: usize, certificate: &Certificate) -> Html {
    html! {
        <Reveal
            key={index}
            preset={MotionPreset::CERTIFICATE_CARD}
            index={index}
            class="card certificate-card"
            name="certificate"
        >
            <div class="certificate-header">
                <span class="certificate-icon" aria-hidden="true">{"🎓"}</span>
                <ExternalLink href={certificate.link.clone()} class="pill-link certificate-link">
                    <span aria-hidden="true">{"↗ "}</span>{"View Certificate"}
                </ExternalLink>
            </div>
            <h3>{certificate.name.clone()}</h3>
            <p class="muted">{certificate.issuer.clone()}</p>
            <p class="subtle">{certificate.date.clone()}</p>
        </Reveal>
    }
}

#[function_component(App)]
fn app(props: &PortfolioProps) -> Html {
    let theme = use_state(Theme::default);

    {
        let current = *theme;
        use_effect_with(current, move |theme| {
            mirror_theme_on_root(*theme);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            debug!(theme = next.as_str(), "theme toggled");
            theme.set(next);
        })
    };

    let portfolio = &props.portfolio;

    html! {
        <div class={(*theme).page_class()}>
            <Cursor />
            <NavBar
                name={portfolio.profile.name.clone()}
                theme={*theme}
                on_toggle={on_toggle}
            />
            <main>
                <Hero portfolio={Rc::clone(portfolio)} />

                <Section id="projects" title="Projects" icon="▣">
                    <div class="grid grid-projects">
                        { for portfolio.projects.iter().enumerate().map(|(i, p)| project_card(i, p)) }
                    </div>
                </Section>

                <Section id="skills" title="Skills" icon="</>" class="section-tinted">
                    <div class="grid grid-skills">
                        { for portfolio.skills.iter().enumerate().map(|(i, s)| skill_chip(i, s)) }
                    </div>
                </Section>

                <Section id="certificates" title="Certificates" icon="★">
                    <div class="grid grid-certificates">
                        { for portfolio.certificates.iter().enumerate().map(|(i, c)| certificate_card(i, c)) }
                    </div>
                </Section>
            </main>
        </div>
    }
}

pub fn run() -> Result<()> {
    console_error_panic_hook::set_once();
    logging::init_logger();

    let portfolio = Rc::new(Portfolio::embedded()?);
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
        .ok_or(PortfolioError::MissingMountPoint(MOUNT_POINT_ID))?;

    info!(
        projects = portfolio.projects.len(),
        skills = portfolio.skills.len(),
        certificates = portfolio.certificates.len(),
        "mounting portfolio"
    );
    yew::Renderer::<App>::with_root_and_props(root, PortfolioProps { portfolio }).render();
    Ok(())
}
