use leptos::prelude::*;

use crate::data::{Post, Project, Stat};

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-value">{stat.value}</span>
            <span class="stat-label">{stat.label}</span>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="card project-card" data-category=project.category>
            <h3 class="project-title">{project.title}</h3>
            <p class="project-description">{project.description}</p>
            <div class="tags">
                {project
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect_view()}
            </div>
            {project
                .link
                .map(|link| {
                    view! {
                        <a href=link class="project-link" target="_blank" rel="noreferrer">
                            <i class="fas fa-external-link-alt"></i>
                            " View project"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
pub fn BlogCard(post: Post) -> impl IntoView {
    let meta = format!("{} \u{00B7} {} min read", post.date, post.read_minutes);
    view! {
        <article class="card blog-card" data-category=post.category>
            <p class="blog-meta">{meta}</p>
            <h3 class="blog-title">{post.title}</h3>
            <p class="blog-excerpt">{post.excerpt}</p>
            <div class="tags">
                {post
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect_view()}
            </div>
        </article>
    }
}
