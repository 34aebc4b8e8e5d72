use yew::prelude::*;
use yew_icons::Icon;

use crate::platform::PLATFORMS;

#[function_component(PlatformGrid)]
pub fn platform_grid() -> Html {
    html! {
        <div class="platform-grid">
            { for PLATFORMS.iter().map(|descriptor| html! {
                <div class="platform-card" key={descriptor.name}>
                    <span class={classes!("platform-chip", descriptor.accent)}>
                        <Icon icon_id={descriptor.icon} width={"24"} height={"24"} />
                    </span>
                    <span class="platform-name">{ descriptor.name }</span>
                </div>
            }) }
        </div>
    }
}
