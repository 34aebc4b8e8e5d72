use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api;
use crate::components::platform_grid::PlatformGrid;
use crate::components::results::ResultsCard;
use crate::log;
use crate::platform::{self, PlatformDescriptor};
use crate::types::RequestPhase;

#[function_component(App)]
pub fn app() -> Html {
    let media_url = use_state(String::new);
    let phase = use_state(RequestPhase::default);
    let selected_platform = use_state(|| None::<&'static PlatformDescriptor>);

    use_effect_once(|| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title("MediaDownloader Pro");
        }
        log::info(
            "app_started",
            serde_json::json!({
                "build": env!("VERGEN_BUILD_TIMESTAMP"),
                "rustc": env!("VERGEN_RUSTC_SEMVER"),
            }),
        );
        || {}
    });

    let on_input = {
        let media_url = media_url.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            log::debug("url_input_changed", serde_json::json!({ "chars": value.len() }));
            media_url.set(value);
        })
    };

    let on_submit = {
        let media_url = media_url.clone();
        let phase = phase.clone();
        let selected_platform = selected_platform.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The submit controls are disabled while loading; this guard is
            // what actually keeps a second request from going out.
            if phase.is_loading() {
                return;
            }
            let raw = (*media_url).clone();
            match platform::validate_media_url(&raw) {
                Err(check) => {
                    log::warn(
                        "url_rejected",
                        serde_json::json!({ "url": raw, "reason": check.to_string() }),
                    );
                    selected_platform.set(None);
                    phase.set(RequestPhase::Error(check.to_string()));
                }
                Ok(descriptor) => {
                    log::info(
                        "download_requested",
                        serde_json::json!({ "url": raw, "platform": descriptor.name }),
                    );
                    selected_platform.set(Some(descriptor));
                    phase.set(RequestPhase::Loading);
                    let phase = phase.clone();
                    spawn_local(async move {
                        match api::request_download_links(raw.trim(), descriptor).await {
                            Ok(result) => {
                                log::info(
                                    "download_links_ready",
                                    serde_json::json!({ "links": result.links.len() }),
                                );
                                phase.set(RequestPhase::Success(result));
                            }
                            Err(err) => {
                                log::error(
                                    "download_request_failed",
                                    serde_json::json!({ "error": err.to_string() }),
                                );
                                phase.set(RequestPhase::Error(err.to_string()));
                            }
                        }
                    });
                }
            }
        })
    };

    let on_reset = {
        let media_url = media_url.clone();
        let phase = phase.clone();
        let selected_platform = selected_platform.clone();
        Callback::from(move |_| {
            log::info("form_reset", serde_json::json!({}));
            media_url.set(String::new());
            selected_platform.set(None);
            phase.set(RequestPhase::Idle);
        })
    };

    let is_loading = phase.is_loading();
    let succeeded = matches!(&*phase, RequestPhase::Success(_));

    let error_banner = if let RequestPhase::Error(message) = &*phase {
        html! {
            <div class="banner banner-error">
                <Icon icon_id={IconId::LucideAlertCircle} width={"22"} height={"22"} />
                <div>
                    <p class="banner-title">{"Error"}</p>
                    <p class="banner-text">{ message.clone() }</p>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    let success_banner = if succeeded {
        html! {
            <div class="banner banner-success">
                <Icon icon_id={IconId::LucideCheckCircle} width={"22"} height={"22"} />
                <div>
                    <p class="banner-title">{"Success!"}</p>
                    <p class="banner-text">{"Media processed successfully. Choose your download quality below."}</p>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    let action = if succeeded {
        html! {
            <button type="button" class="reset-btn" onclick={on_reset}>
                <Icon icon_id={IconId::LucideRotateCcw} width={"20"} height={"20"} />
                <span>{"Download Another Media"}</span>
            </button>
        }
    } else {
        html! {
            <button
                type="submit"
                class="download-cta"
                disabled={is_loading || media_url.trim().is_empty()}
            >
                { if is_loading { html! {
                    <>
                        <Icon icon_id={IconId::LucideLoader} width={"22"} height={"22"} class="spin" />
                        <span>{"Processing Media..."}</span>
                    </>
                } } else { html! {
                    <>
                        <Icon icon_id={IconId::LucideDownload} width={"22"} height={"22"} />
                        <span>{"Get Download Links"}</span>
                    </>
                } } }
            </button>
        }
    };

    let results = if let RequestPhase::Success(data) = &*phase {
        html! { <ResultsCard data={data.clone()} platform={*selected_platform} /> }
    } else {
        html! {}
    };

    html! {
        <div class="page">
            <div class="container">
                <header class="hero">
                    <span class="hero-badge">
                        <Icon icon_id={IconId::LucideDownload} width={"40"} height={"40"} />
                    </span>
                    <h1>{"MediaDownloader Pro"}</h1>
                    <p class="hero-sub">
                        {"Download videos and media from all major social platforms - Instagram, TikTok, YouTube, Twitter, and Facebook"}
                    </p>
                </header>

                <section class="platforms">
                    <h2>{"Supported Platforms"}</h2>
                    <PlatformGrid />
                </section>

                <section class="card download-card">
                    <form class="url-form" onsubmit={on_submit}>
                        <label for="media-url">{"Enter Media URL"}</label>
                        <div class="input-wrap">
                            <input
                                id="media-url"
                                type="url"
                                class="url-input"
                                value={(*media_url).clone()}
                                oninput={on_input}
                                placeholder="Paste your Instagram, TikTok, YouTube, Twitter, or Facebook URL here..."
                                disabled={is_loading}
                            />
                            { if let Some(descriptor) = *selected_platform { html! {
                                <span class={classes!("platform-badge", descriptor.accent)} title={descriptor.name}>
                                    <Icon icon_id={descriptor.icon} width={"18"} height={"18"} />
                                </span>
                            } } else { html!{} } }
                        </div>
                        <p class="input-hint">
                            {"Supports public content from Instagram, TikTok, YouTube, Twitter, and Facebook"}
                        </p>
                        { error_banner }
                        { success_banner }
                        { action }
                    </form>
                </section>

                { results }

                <section class="features">
                    <div class="feature">
                        <span class="feature-icon feature-quality">
                            <Icon icon_id={IconId::LucideCheckCircle} width={"28"} height={"28"} />
                        </span>
                        <h3>{"High Quality"}</h3>
                        <p>{"Download videos in original quality, including HD and 4K when available"}</p>
                    </div>
                    <div class="feature">
                        <span class="feature-icon feature-speed">
                            <Icon icon_id={IconId::LucideDownload} width={"28"} height={"28"} />
                        </span>
                        <h3>{"Fast & Reliable"}</h3>
                        <p>{"Quick processing and reliable downloads from all supported platforms"}</p>
                    </div>
                    <div class="feature">
                        <span class="feature-icon feature-safety">
                            <Icon icon_id={IconId::LucideAlertCircle} width={"28"} height={"28"} />
                        </span>
                        <h3>{"Safe & Secure"}</h3>
                        <p>{"No registration required. Your privacy is protected with secure downloads"}</p>
                    </div>
                </section>

                <section class="how-to">
                    <h2>{"How to Download"}</h2>
                    <div class="steps">
                        <div class="step">
                            <span class="step-num">{"1"}</span>
                            <p class="step-title">{"Copy URL"}</p>
                            <p>{"Copy the link from Instagram, TikTok, YouTube, Twitter, or Facebook"}</p>
                        </div>
                        <div class="step">
                            <span class="step-num">{"2"}</span>
                            <p class="step-title">{"Paste URL"}</p>
                            <p>{"Paste the URL in the input field above"}</p>
                        </div>
                        <div class="step">
                            <span class="step-num">{"3"}</span>
                            <p class="step-title">{"Process"}</p>
                            <p>{"Click \"Get Download Links\" to process the media"}</p>
                        </div>
                        <div class="step">
                            <span class="step-num">{"4"}</span>
                            <p class="step-title">{"Download"}</p>
                            <p>{"Choose your preferred quality and download"}</p>
                        </div>
                    </div>
                </section>

                <footer class="footer">
                    <p>{"© 2025 MediaDownloader Pro. Download responsibly and respect content creators' rights."}</p>
                    <p class="build-stamp">
                        <Icon icon_id={IconId::LucideLink} width={"12"} height={"12"} />
                        <span>{ format!("build {} · rustc {}", env!("VERGEN_BUILD_TIMESTAMP"), env!("VERGEN_RUSTC_SEMVER")) }</span>
                    </p>
                </footer>
            </div>
        </div>
    }
}
