//! CardAnimated: Thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in the stylesheet. Pass growing
//! `delay_ms` values to a grid of cards for a staggered entrance:
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! <CardAnimated delay_ms=160> // card 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Delay step between neighbouring cards in a grid
pub const STAGGER_MS: u32 = 80;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS class on the card
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = format!("card {}", class);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

/// Delay for the `index`-th card of a grid.
pub fn stagger(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_MS)
}
