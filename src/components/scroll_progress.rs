use log::debug;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::error::SiteError;
use crate::scroll::progress::scroll_percent;

pub fn bar_style(percent: f64) -> String {
    format!(
        "position: fixed; top: 0; left: 0; height: 3px; width: {}%; background: var(--halo-accent); \
         z-index: 9999; transition: width 100ms ease-out;",
        percent
    )
}

fn current_percent() -> Result<f64, SiteError> {
    Ok(scroll_percent(dom::scroll_y()?, dom::document_height()?, dom::inner_height()?))
}

/// Thin bar across the top of the viewport tracking how far the page is read.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let percent = use_state(|| 0.0_f64);

    {
        let percent = percent.setter();
        use_event_with_window("scroll", move |_: Event| match current_percent() {
            Ok(value) => percent.set(value),
            Err(e) => debug!("Scroll progress unavailable: {}", e),
        });
    }

    html! { <div class="scroll-progress" style={bar_style(*percent)}></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_follows_percent() {
        assert!(bar_style(0.0).contains("width: 0%;"));
        assert!(bar_style(42.5).contains("width: 42.5%;"));
        assert!(bar_style(100.0).contains("z-index: 9999;"));
    }
}
