use yew::prelude::*;

use super::dom::scroll_to_section;
use super::glow::{ExternalLink, GlowCard};
use super::hooks::use_typewriter;
use crate::content::{
    section, ContactKind, Experience, Project, TechCategory, TechIcon, BACKEND, CONTACT_LINKS,
    EXPERIENCES, FRONTEND, MORE_PROJECTS_URL, PERSONAL_INFO, PROJECTS, SKILL_GROUPS,
};
use crate::hover::{CARD_SPOT, CARD_WASH, CONTACT_SPOT};
use crate::typewriter::TypewriterTiming;

fn section_header(number: &str, title: &'static str, command: &'static str) -> Html {
    html! {
        <header class="section-header">
            <div class="section-title-row">
                <span class="section-number">{format!("{number}.")}</span>
                <h2 class="glitch" data-text={title}>{title}</h2>
                <div class="section-rule"></div>
            </div>
            <p class="section-command">
                <span class="accent">{"$"}</span>{format!(" {command}")}
            </p>
        </header>
    }
}

fn chip_list(items: &'static [&'static str], class: &'static str) -> Html {
    html! {
        <div class="chip-list">
            { for items.iter().map(|item| html! { <span class={class}>{*item}</span> }) }
        </div>
    }
}

fn scroll_button(label: &'static str, class: &'static str, section_id: &'static str) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(section_id));
    html! {
        <button type="button" class={class} onclick={onclick}>{label}</button>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub timing: TypewriterTiming,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let headline = use_typewriter(AttrValue::from(PERSONAL_INFO.headline()), props.timing);

    html! {
        <section id={section::ABOUT} class="hero scanline">
            <div class="grid-background" aria-hidden="true"></div>
            <div class="hero-inner">
                <div class="glass-card terminal-window">
                    <div class="terminal-bar">
                        <span class="dot dot-accent"></span>
                        <span class="dot dot-secondary"></span>
                        <span class="dot dot-primary"></span>
                        <span class="terminal-path">{"~/parintorn/portfolio"}</span>
                    </div>
                    <div class="prompt">{"$ whoami"}</div>
                    <h1 class="hero-name glitch" data-text={PERSONAL_INFO.name}>{PERSONAL_INFO.name}</h1>
                    <div class="hero-headline" aria-label={PERSONAL_INFO.title}>{headline}</div>
                    <div class="hero-about">
                        <span class="prompt">{"$ cat about.txt"}</span>
                        <p>{PERSONAL_INFO.description}</p>
                    </div>
                </div>
                <div class="hero-actions">
                    { scroll_button("[ View Projects ]", "cyber-button", section::PROJECTS) }
                    { scroll_button("[ Get in Touch ]", "cyber-button-outline", section::CONTACT) }
                </div>
                <div class="hero-social">
                    <ExternalLink href={PERSONAL_INFO.github} class="social-link" aria_label="GitHub">
                        {"GitHub"}
                    </ExternalLink>
                    <ExternalLink href={PERSONAL_INFO.linkedin} class="social-link" aria_label="LinkedIn">
                        {"LinkedIn"}
                    </ExternalLink>
                </div>
                <div class="scroll-indicator" aria-hidden="true">
                    <span>{"scroll down"}</span>
                    <span class="scroll-arrow">{"↓"}</span>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <GlowCard class="glass-card terminal-border project-card" wash={CARD_WASH} spot={CARD_SPOT}>
            <div class="project-preview">
                <img src={project.preview_src()} alt={project.name} loading="lazy" />
            </div>
            <h3 class="card-title">
                <span class="accent-dim">{">"}</span>{format!(" {}", project.name)}
            </h3>
            <p class="card-text">{project.description}</p>
            { chip_list(project.tags, "tag") }
            <div class="project-links">
                if let Some(demo) = project.demo_link {
                    <ExternalLink href={demo} class="project-link">
                        <span class="neon-link">{"Live Demo"}</span>
                    </ExternalLink>
                }
                if let Some(source) = project.source_link {
                    <ExternalLink href={source} class="project-link">
                        <span class="neon-link">{"Source Code"}</span>
                    </ExternalLink>
                }
            </div>
            <div class="corner corner-top" aria-hidden="true"></div>
            <div class="corner corner-bottom" aria-hidden="true"></div>
        </GlowCard>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    html! {
        <section id={section::PROJECTS} class="page-section">
            { section_header("02", "Projects", "ls -la ~/projects/") }
            <div class="project-grid">
                { for PROJECTS.iter().map(|project| html! { <ProjectCard key={project.id} project={project} /> }) }
            </div>
            <div class="section-footer">
                <ExternalLink href={MORE_PROJECTS_URL} class="cyber-button-outline">
                    {"[ View More on GitHub ]"}
                </ExternalLink>
            </div>
        </section>
    }
}

fn tech_card(category: &'static TechCategory) -> Html {
    let icon_class = match category.icon {
        TechIcon::React => "tech-icon spin-slow",
        TechIcon::Node => "tech-icon float",
    };
    let icon = match category.icon {
        TechIcon::React => "⚛",
        TechIcon::Node => "⬢",
    };

    html! {
        <GlowCard class="glass-card terminal-border tech-card" wash={CARD_WASH} spot={CARD_SPOT}>
            <div class="tech-card-head">
                <span class={icon_class} aria-hidden="true">{icon}</span>
                <h3 class="card-title">{category.category}</h3>
            </div>
            { for category.techs.iter().map(|tech| html! {
                <div class="tech-group">
                    <h4>{tech.name}</h4>
                    { chip_list(tech.items, "chip") }
                </div>
            }) }
        </GlowCard>
    }
}

#[function_component(TechStackSection)]
pub fn tech_stack_section() -> Html {
    html! {
        <section id={section::TECHNOLOGIES} class="page-section">
            { section_header("03", "Tech Stack", "cat stack.json") }
            <div class="tech-grid">
                { tech_card(&FRONTEND) }
                { tech_card(&BACKEND) }
            </div>
            <GlowCard class="glass-card skills-card" wash={CARD_WASH} spot={CARD_SPOT}>
                <h3 class="card-title"><span class="accent">{"$"}</span>{" skills.list()"}</h3>
                <div class="skills-grid">
                    { for SKILL_GROUPS.iter().map(|group| html! {
                        <div class="skill-group">
                            <h4><span class="accent">{">"}</span>{format!(" {}", group.label)}</h4>
                            <ul>
                                { for group.items.iter().map(|skill| html! {
                                    <li><span class="accent-dim">{"■"}</span>{format!(" {skill}")}</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </GlowCard>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceCardProps {
    experience: &'static Experience,
    index: usize,
}

#[function_component(ExperienceCard)]
fn experience_card(props: &ExperienceCardProps) -> Html {
    let experience = props.experience;
    let side = if props.index % 2 == 0 { "is-left" } else { "is-right" };
    let workplace_mark = if experience.remote { "⌂" } else { "▣" };

    html! {
        <div class={classes!("timeline-entry", side)}>
            <div class="timeline-dot" aria-hidden="true"><span class="ping"></span></div>
            <GlowCard class="glass-card terminal-border experience-card" wash={CARD_WASH} spot={CARD_SPOT}>
                <div class="experience-period">{experience.period}</div>
                <h3 class="card-title">{experience.position}</h3>
                <div class="experience-workplace">
                    <span aria-hidden="true">{workplace_mark}</span>
                    <span>{format!(" {}", experience.workplace)}</span>
                </div>
                <ul class="experience-details">
                    { for experience.details.iter().map(|detail| html! {
                        <li><span class="accent">{"▹"}</span>{format!(" {detail}")}</li>
                    }) }
                </ul>
                { chip_list(experience.tech_stack, "pill") }
            </GlowCard>
        </div>
    }
}

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    html! {
        <section id={section::EXPERIENCE} class="page-section">
            { section_header("04", "Experience", "git log --all --graph") }
            <div class="timeline">
                <div class="timeline-line" aria-hidden="true"></div>
                { for EXPERIENCES.iter().enumerate().map(|(index, experience)| html! {
                    <ExperienceCard key={index} experience={experience} index={index} />
                }) }
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id={section::CONTACT} class="page-section contact">
            { section_header("05", "Get In Touch", "contact --init") }
            <div class="glass-card terminal-border contact-panel">
                <p class="contact-intro">
                    {"I'm currently open to new opportunities and interesting projects. Whether you have a question or just want to say hi, feel free to reach out!"}
                </p>
                <p class="section-command">
                    <span class="accent">{"$"}</span>{" echo \"Let's build something amazing together!\""}
                </p>
                <div class="contact-grid">
                    { for CONTACT_LINKS.iter().map(|link| {
                        let icon = match link.kind {
                            ContactKind::GitHub => "⌥",
                            ContactKind::LinkedIn => "in",
                        };
                        html! {
                            <GlowCard class="contact-card" spot={CONTACT_SPOT}>
                                <ExternalLink href={link.href} class="contact-link">
                                    <span class="contact-icon" aria-hidden="true">{icon}</span>
                                    <span class="contact-label">{link.label}</span>
                                    <span class="contact-handle">{link.handle}</span>
                                </ExternalLink>
                            </GlowCard>
                        }
                    }) }
                </div>
            </div>
            <footer class="site-footer">
                <p>
                    <span class="accent">{"</"}</span>
                    {format!(" Designed & Built by {} ", PERSONAL_INFO.name)}
                    <span class="accent">{">"}</span>
                </p>
                <p class="muted">{"© 2025 - Present"}</p>
            </footer>
        </section>
    }
}
