//! Static site copy: owner details, navigation, skills, services, links.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Jordan Avery";
pub const OWNER_FIRST_NAME: &str = "Jordan";
pub const OWNER_ROLE: &str = "Software Engineer";
pub const OWNER_EMAIL: &str = "hello@jordanavery.dev";
pub const PORTRAIT_PATH: &str = "/images/portrait.svg";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_FILE_NAME: &str = "Jordan-Avery-Resume.pdf";

pub const ABOUT_TEXT: &str = "Jordan Avery is a software engineer passionate about application and web \
development. I enjoy exploring new technologies and frameworks to build practical software \
solutions that make everyday tasks easier.";

pub const FOOTER_CREDIT: &str = "Designed with love, all rights reserved for Jordan Avery.";

/// In-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Projects", href: "#projects" },
    NavItem { label: "Contacts", href: "#contact" },
];

pub const TECH_STACK: [&str; 9] = [
    "HTML5",
    "CSS",
    "Tailwind CSS",
    "Javascript",
    "Typescript",
    "Next.js",
    "React",
    "Git",
    "Github",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Code,
    Server,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub icon: ServiceIcon,
}

pub const SERVICES: [Service; 2] = [
    Service { title: "Website Development", icon: ServiceIcon::Code },
    Service { title: "Website Hosting", icon: ServiceIcon::Server },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    Mail,
    Github,
    Linkedin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { kind: SocialKind::Mail, label: "Email", href: "mailto:hello@jordanavery.dev" },
    SocialLink { kind: SocialKind::Github, label: "GitHub", href: "https://github.com/jordanavery" },
    SocialLink { kind: SocialKind::Linkedin, label: "LinkedIn", href: "https://www.linkedin.com/in/jordanavery" },
];
