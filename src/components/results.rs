use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::download;
use crate::log;
use crate::platform::PlatformDescriptor;
use crate::types::{DownloadResult, MediaLink};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: DownloadResult,
    pub platform: Option<&'static PlatformDescriptor>,
}

#[function_component(ResultsCard)]
pub fn results_card(props: &Props) -> Html {
    html! {
        <div class="card results-card">
            <h3>{"Download Options"}</h3>
            <div class="media-preview">
                { if let Some(thumbnail) = &props.data.thumbnail { html! {
                    <img class="thumb" src={thumbnail.clone()} alt="Media thumbnail" />
                } } else { html!{} } }
                <div class="media-meta">
                    <h4>{ props.data.title.clone().unwrap_or_else(|| "Media Content".to_string()) }</h4>
                    { if let Some(descriptor) = props.platform { html! {
                        <span class="media-source">
                            <Icon icon_id={descriptor.icon} width={"16"} height={"16"} />
                            <span>{ descriptor.name }</span>
                        </span>
                    } } else { html!{} } }
                </div>
            </div>
            <div class="link-rows">
                { for props.data.links.iter().map(link_row) }
            </div>
        </div>
    }
}

fn link_row(link: &MediaLink) -> Html {
    let on_download = {
        let link = link.clone();
        Callback::from(move |_| {
            log::info(
                "download_link_clicked",
                serde_json::json!({ "quality": link.quality, "format": link.format }),
            );
            download::trigger_download(&link.url, &download::filename_for(&link));
        })
    };
    html! {
        <div class="link-row">
            <div class="link-tags">
                <span class="tag tag-quality">{ link.quality.clone() }</span>
                <span class="tag tag-format">{ link.format.clone() }</span>
                { if let Some(size) = &link.size { html! {
                    <span class="size-label">{ size.clone() }</span>
                } } else { html!{} } }
            </div>
            <button type="button" class="link-download" onclick={on_download}>
                <Icon icon_id={IconId::LucideDownload} width={"16"} height={"16"} />
                <span>{"Download"}</span>
            </button>
        </div>
    }
}
