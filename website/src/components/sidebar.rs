use leptos::prelude::*;

use crate::data::Profile;

/// Navigation entries: section id, label, icon
pub const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("home", "Home", "fas fa-home"),
    ("about", "About", "fas fa-user"),
    ("projects", "Projects", "fas fa-briefcase"),
    ("blog", "Blog", "fas fa-pen-nib"),
    ("contact", "Contact", "fas fa-envelope"),
];

#[component]
pub fn Sidebar(profile: Profile) -> impl IntoView {
    view! {
        <aside id="sidebar" class="sidebar">
            <div class="sidebar-header">
                <span class="avatar">{initials(&profile.name)}</span>
                <div>
                    <h2 class="sidebar-name">{profile.name}</h2>
                    <p class="sidebar-role">{profile.role}</p>
                </div>
            </div>

            <nav class="sidebar-nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(id, label, icon)| {
                        let class = if id == "home" { "nav-link active" } else { "nav-link" };
                        view! {
                            <a href=format!("#{}", id) class=class>
                                <i class=icon></i>
                                <span>{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                <button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme">
                    <i id="theme-icon" class="fas fa-sun"></i>
                </button>
                <a href=profile.github target="_blank" rel="noreferrer" aria-label="GitHub">
                    <i class="fab fa-github"></i>
                </a>
                <a href=profile.linkedin target="_blank" rel="noreferrer" aria-label="LinkedIn">
                    <i class="fab fa-linkedin"></i>
                </a>
            </div>
        </aside>
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}
