use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::navigation::NavSection;

/// Brand mark shared by the header and the footer
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <div class="brand">
            <div class="brand__mark">"AL"</div>
            <span class="brand__name">"AlumiFab"</span>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let active = Memo::new(move |_| ctx.view.with(|view| view.section()));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content container">
                <button class="header__brand" on:click=move |_| ctx.navigate_home()>
                    <Brand />
                </button>
                <nav class="header__nav">
                    {NavSection::ALL.into_iter().map(|section| view! {
                        <button
                            class="header__link"
                            class:header__link--active=move || active.get() == section
                            on:click=move |_| ctx.navigate_section(section)
                        >
                            {section.label()}
                        </button>
                    }).collect_view()}
                </nav>
            </div>
        </header>
    }
}
