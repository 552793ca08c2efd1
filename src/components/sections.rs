use yew::prelude::*;

use crate::components::cards::{BlogCard, Card, CardKind, ProcessStep, ServiceListItem, TechCategory};
use crate::components::section::{anchor_click, Section};
use crate::hooks::use_stagger;
use crate::schedule::Stagger;
use crate::scroll::reactor::SectionId;

/// Shared by every section whose cards reveal with a stagger.
#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub visible: bool,
    pub stagger_ms: u32,
}

struct Service {
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
    items: &'static [&'static str],
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "☁️",
        title: "Cloud & Infrastructure",
        summary: "Plan, migrate and operate workloads across public and private clouds.",
        items: &["Cloud migration", "Hybrid networking", "Backup & disaster recovery"],
    },
    Service {
        icon: "🛡️",
        title: "Cybersecurity",
        summary: "Layered protection, monitoring and response for every endpoint.",
        items: &["Security audits", "Managed detection & response", "Compliance readiness"],
    },
    Service {
        icon: "🧭",
        title: "IT Strategy",
        summary: "Technology roadmaps aligned with where the business is heading.",
        items: &["Virtual CIO", "Budget planning", "Vendor management"],
    },
    Service {
        icon: "🛠️",
        title: "Managed Support",
        summary: "Proactive helpdesk and device management with clear SLAs.",
        items: &["24/7 helpdesk", "Patch management", "Asset lifecycle"],
    },
];

#[function_component(Services)]
pub fn services(props: &RevealProps) -> Html {
    let shown = use_stagger(SERVICES.len(), Stagger::new(props.stagger_ms), props.visible);
    html! {
        <Section id="services" title="Our Services" subtitle={Some("End-to-end IT for small and mid-sized teams")} visible={props.visible}>
            <div class="services__grid">
                { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <Card kind={CardKind::Service} title={service.title} icon={Some(service.icon)} staggered={index < shown}>
                        <p class="service-card__summary">{service.summary}</p>
                        <ul class="service-card__list">
                            { for service.items.iter().map(|item| html! { <ServiceListItem text={*item} /> }) }
                        </ul>
                    </Card>
                }) }
            </div>
        </Section>
    }
}

const INDUSTRIES: [(&str, &str, &str); 4] = [
    ("🏥", "Healthcare", "HIPAA-aware systems for clinics and practices."),
    ("🏦", "Finance", "Resilient, auditable infrastructure for advisors and lenders."),
    ("🏭", "Manufacturing", "Connected plants with secure OT/IT boundaries."),
    ("🎓", "Education", "Reliable campus networks and classroom technology."),
];

#[function_component(Industries)]
pub fn industries(props: &RevealProps) -> Html {
    let shown = use_stagger(INDUSTRIES.len(), Stagger::new(props.stagger_ms), props.visible);
    html! {
        <Section id="industries" title="Industries We Serve" visible={props.visible}>
            <div class="industries__grid">
                { for INDUSTRIES.iter().enumerate().map(|(index, &(icon, title, text))| html! {
                    <Card kind={CardKind::Industry} title={title} icon={Some(icon)} staggered={index < shown}>
                        <p>{text}</p>
                    </Card>
                }) }
            </div>
        </Section>
    }
}

const PROJECTS: [(&str, &str, &str); 3] = [
    ("Regional clinic network", "Healthcare", "Consolidated six sites onto a single managed SD-WAN with zero downtime."),
    ("Zero-trust rollout", "Finance", "Replaced legacy VPN access with identity-aware policies for 400 staff."),
    ("Factory floor modernisation", "Manufacturing", "Segmented production networks and added real-time monitoring."),
];

#[function_component(Projects)]
pub fn projects(props: &RevealProps) -> Html {
    let shown = use_stagger(PROJECTS.len(), Stagger::new(props.stagger_ms), props.visible);
    html! {
        <Section id="projects" title="Recent Projects" visible={props.visible}>
            <div class="projects__grid">
                { for PROJECTS.iter().enumerate().map(|(index, &(title, sector, text))| html! {
                    <Card kind={CardKind::Project} title={title} staggered={index < shown}>
                        <span class="project-card__sector">{sector}</span>
                        <p>{text}</p>
                    </Card>
                }) }
            </div>
        </Section>
    }
}

const STEPS: [(&str, &str); 4] = [
    ("Discover", "We audit your current environment and listen to what slows you down."),
    ("Design", "A practical plan with costs, timelines and measurable outcomes."),
    ("Deliver", "Certified engineers implement with minimal disruption."),
    ("Support", "Ongoing monitoring, reporting and continuous improvement."),
];

#[function_component(Process)]
pub fn process(props: &RevealProps) -> Html {
    let shown = use_stagger(STEPS.len(), Stagger::new(props.stagger_ms), props.visible);
    html! {
        <Section id="process" title="How We Work" visible={props.visible}>
            <div class="process__steps">
                { for STEPS.iter().enumerate().map(|(index, &(title, text))| html! {
                    <ProcessStep number={(index + 1) as u8} title={title} text={text} staggered={index < shown} />
                }) }
            </div>
        </Section>
    }
}

const TECHNOLOGY: [(&str, &[&str]); 3] = [
    ("Cloud", &["Azure", "AWS", "Google Cloud", "VMware"]),
    ("Security", &["CrowdStrike", "Fortinet", "Okta", "Sentinel"]),
    ("Productivity", &["Microsoft 365", "Google Workspace", "Slack", "Zoom"]),
];

const BENEFITS: [(&str, &str); 3] = [
    ("Fixed monthly pricing", "Predictable costs with no surprise invoices."),
    ("Local engineers", "On-site help when remote support is not enough."),
    ("15-minute response", "Critical tickets are picked up in minutes, not hours."),
];

#[function_component(Technology)]
pub fn technology(props: &RevealProps) -> Html {
    let shown = use_stagger(BENEFITS.len(), Stagger::new(props.stagger_ms), props.visible);
    html! {
        <Section id="technology" title="Technology & Benefits" visible={props.visible}>
            <div class="technology__grid">
                { for TECHNOLOGY.iter().map(|&(title, tags)| html! {
                    <TechCategory title={title} tags={tags} />
                }) }
            </div>
            <div class="benefits__grid">
                { for BENEFITS.iter().enumerate().map(|(index, &(title, text))| html! {
                    <Card kind={CardKind::Benefit} title={title} staggered={index < shown}>
                        <p>{text}</p>
                    </Card>
                }) }
            </div>
        </Section>
    }
}

const POSTS: [(&str, &str, &str); 3] = [
    ("Five signs you have outgrown break-fix IT", "Reactive support costs more than it looks. Here is how to tell.", "March 2025"),
    ("A practical guide to MFA rollouts", "Getting every account covered without a revolt from your staff.", "February 2025"),
    ("Backups are not a recovery plan", "Why tested restores matter more than retention policies.", "January 2025"),
];

#[function_component(Blog)]
pub fn blog(props: &RevealProps) -> Html {
    let shown = use_stagger(POSTS.len(), Stagger::new(props.stagger_ms), props.visible);
    html! {
        <Section id="blog" title="Insights" visible={props.visible}>
            <div class="blog__grid">
                { for POSTS.iter().enumerate().map(|(index, &(title, excerpt, date))| html! {
                    <BlogCard title={title} excerpt={excerpt} date={date} staggered={index < shown} />
                }) }
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let link = |href: &'static str, label: &'static str| html! {
        <li><a href={href} onclick={anchor_click(&props.on_navigate, href)}>{label}</a></li>
    };
    html! {
        <footer class="footer">
            <div class="container footer__inner">
                <div class="footer__brand">
                    <span class="logo">{"HALO"}</span>
                    <p>{"Managed IT, cloud and security for growing businesses."}</p>
                </div>
                <ul class="footer__links">
                    { link("#services", "Services") }
                    { link("#process", "Process") }
                    { link("#faq", "FAQ") }
                    { link("#contact", "Contact") }
                    { link("#", "Back to top") }
                </ul>
            </div>
        </footer>
    }
}
