use leptos::prelude::*;

use super::cards::{BlogCard, ProjectCard, StatCard};
use super::forms::{ContactForm, NewsletterForm};
use crate::data::{categories, category_label, About, Post, Profile, Project, Stat};

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="section-header">
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </header>
    }
}

#[component]
pub fn HomeSection(profile: Profile, stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section id="home" class="section active">
            <div class="hero">
                <p class="hero-greeting">"Hello, I'm"</p>
                <h1 class="hero-title">
                    {profile.name}
                    <span class="typing-cursor">"|"</span>
                </h1>
                <p class="hero-role">{profile.role}</p>
                <p class="hero-tagline">{profile.tagline}</p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">"See my work"</a>
                    <a href="#contact" class="btn">"Get in touch"</a>
                </div>
            </div>
            <div class="stats">
                {stats.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    view! {
        <section id="about" class="section">
            <SectionHeader title="About" subtitle="A little about me and how I work" />
            <div class="card about-card">
                {about.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
            <div class="card skills-card">
                <h3>"Skills"</h3>
                <div class="tags">
                    {about
                        .skills
                        .into_iter()
                        .map(|skill| view! { <span class="tag">{skill}</span> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    let filters = categories(projects.iter().map(|p| p.category.as_str()));
    view! {
        <section id="projects" class="section">
            <SectionHeader title="Projects" subtitle="Selected work from the last few years" />
            <div class="filters">
                <button class="filter-btn active" data-filter="all">"All"</button>
                {filters
                    .into_iter()
                    .map(|category| {
                        let label = category_label(&category);
                        view! {
                            <button class="filter-btn" data-filter=category>{label}</button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="project-grid">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn BlogSection(posts: Vec<Post>) -> impl IntoView {
    let filters = categories(posts.iter().map(|p| p.category.as_str()));
    view! {
        <section id="blog" class="section">
            <SectionHeader title="Blog" subtitle="Notes on building for the web" />
            <div class="blog-controls">
                <input
                    type="search"
                    id="blog-search"
                    class="search-input"
                    placeholder="Search posts..."
                    aria-label="Search posts"
                />
                <div class="filters">
                    <button class="category-btn active" data-category="all">"All"</button>
                    {filters
                        .into_iter()
                        .map(|category| {
                            let label = category_label(&category);
                            view! {
                                <button class="category-btn" data-category=category>{label}</button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="blog-grid">
                {posts.into_iter().map(|post| view! { <BlogCard post=post /> }).collect_view()}
            </div>
            <NewsletterForm />
        </section>
    }
}

#[component]
pub fn ContactSection(profile: Profile) -> impl IntoView {
    let mailto = format!("mailto:{}", profile.email);
    view! {
        <section id="contact" class="section">
            <SectionHeader title="Contact" subtitle="Have a project in mind? Let's talk." />
            <div class="contact-layout">
                <div class="card contact-info">
                    <p>
                        <i class="fas fa-envelope"></i>
                        " "
                        <a href=mailto>{profile.email}</a>
                    </p>
                    <p>
                        <i class="fas fa-map-marker-alt"></i>
                        " "
                        {profile.location}
                    </p>
                </div>
                <div class="card">
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}
