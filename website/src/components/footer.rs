use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"\u{00A9} 2026 Alex Morgan. Built with Rust and WebAssembly."</p>
            <a href="#home" class="back-to-top">
                <i class="fas fa-arrow-up"></i>
                " Back to top"
            </a>
        </footer>
    }
}
