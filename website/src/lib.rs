pub mod components;
pub mod data;
pub mod runtime;

use components::footer::Footer;
use components::sections::{AboutSection, BlogSection, ContactSection, HomeSection, ProjectsSection};
use components::sidebar::Sidebar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = data::site();
    let title = format!("{} | {}", site.profile.name, site.profile.role);
    let description = site.profile.tagline.clone();

    // Runs once the markup is mounted
    let settings = site.settings.clone();
    Effect::new(move || {
        if let Err(e) = runtime::start(settings.clone()) {
            log::error!("Page behaviours unavailable: {:?}", e);
        }
    });

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <div class="bg-decoration" aria-hidden="true"></div>
        <div class="layout">
            <Sidebar profile=site.profile.clone() />
            <main class="content">
                <HomeSection profile=site.profile.clone() stats=site.stats />
                <AboutSection about=site.about />
                <ProjectsSection projects=site.projects />
                <BlogSection posts=site.posts />
                <ContactSection profile=site.profile />
                <Footer />
            </main>
        </div>
    }
}
